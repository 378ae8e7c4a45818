//! DNSSEC cryptokey resource implementation.
//!
//! A [`CryptoKey`] is a proxy for one DNSSEC key of a zone. Key ids are
//! assigned by the server; the `info` mapping mirrors key material and
//! flags (`keytype`, `active`, `dnskey`, `privatekey`, ...).

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::clients::HttpClient;
use crate::resources::object::ApiObject;
use crate::resources::resource::{Resource, ResourceRef};

/// A proxy for one DNSSEC cryptokey of a zone.
///
/// Creation posts staged key attributes to the zone's `cryptokeys`
/// collection (the server generates material for keys posted without
/// `privatekey`); deletion removes the key from the zone.
#[derive(Clone, Debug)]
pub struct CryptoKey {
    resource: Resource,
}

impl CryptoKey {
    /// Creates a proxy for the cryptokey with the given id under a zone.
    pub(crate) fn new(http: Arc<HttpClient>, zone: &ResourceRef, id: u64) -> Self {
        let url = format!("{}/cryptokeys/{id}", zone.url());
        Self {
            resource: Resource::new(http, "cryptokeys", url).with_parent(zone.clone()),
        }
    }

    /// Seeds the proxy's `info` from a listing entry.
    pub(crate) fn with_listing_info(mut self, info: Map<String, Value>) -> Self {
        self.resource = self.resource.with_info(info);
        self
    }
}

impl ApiObject for CryptoKey {
    fn resource(&self) -> &Resource {
        &self.resource
    }

    fn resource_mut(&mut self) -> &mut Resource {
        &mut self.resource
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiHost, ApiKey, PdnsConfig};
    use serde_json::json;

    fn test_http() -> Arc<HttpClient> {
        let config = PdnsConfig::builder()
            .api_host(ApiHost::new("http://127.0.0.1:8081").unwrap())
            .api_key(ApiKey::new("test-api-key").unwrap())
            .build()
            .unwrap();
        Arc::new(HttpClient::new(&config))
    }

    #[test]
    fn test_cryptokey_url_and_kind() {
        let zone = ResourceRef::new("servers/localhost/zones/example.com.");
        let key = CryptoKey::new(test_http(), &zone, 7);

        assert_eq!(
            key.url(),
            "servers/localhost/zones/example.com./cryptokeys/7"
        );
        assert_eq!(key.kind(), "cryptokeys");
        assert!(key.info().is_empty());
    }

    #[test]
    fn test_listing_info_seeds_key_attributes() {
        let zone = ResourceRef::new("servers/localhost/zones/example.com.");
        let key = CryptoKey::new(test_http(), &zone, 7).with_listing_info(
            serde_json::from_value(json!({"id": 7, "keytype": "ksk", "active": true})).unwrap(),
        );

        assert_eq!(key.info()["keytype"], "ksk");
        assert_eq!(key.info()["active"], true);
    }
}
