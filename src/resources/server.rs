//! Server resource implementation.
//!
//! A [`Server`] is a proxy for one authoritative daemon exposed by the API.
//! Servers are root objects: they have no parent and cannot be created
//! through the API, but they are the factory for [`Zone`] proxies.
//!
//! # Example
//!
//! ```rust,ignore
//! use pdns_api::resources::ApiObject;
//!
//! let mut server = client.server("localhost");
//!
//! // Refresh the daemon's attributes (version, config_url, ...)
//! server.get().await?;
//! println!("Running {}", server.info()["version"]);
//!
//! // Work with its zones
//! let zones = server.zones().await?;
//! let mut zone = server.zone("example.com.");
//! ```

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::clients::HttpClient;
use crate::resources::errors::ResourceError;
use crate::resources::object::ApiObject;
use crate::resources::resource::{ensure_array, Resource};
use crate::resources::zone::Zone;

/// A proxy for one authoritative server exposed by the API.
///
/// The PowerDNS daemon always lists itself as `"localhost"`; other ids
/// appear when the API is fronted by a proxy aggregating several daemons.
///
/// Servers have no parent, so [`create`](ApiObject::create) on a server
/// fails with [`ResourceError::MissingParent`] — the daemon's existence is
/// managed outside the API.
#[derive(Clone, Debug)]
pub struct Server {
    resource: Resource,
}

impl Server {
    /// Creates a proxy for the server with the given id.
    pub(crate) fn new(http: Arc<HttpClient>, id: &str) -> Self {
        Self {
            resource: Resource::new(http, "servers", format!("servers/{id}")),
        }
    }

    /// Seeds the proxy's `info` from a listing entry.
    pub(crate) fn with_listing_info(mut self, info: Map<String, Value>) -> Self {
        self.resource = self.resource.with_info(info);
        self
    }

    /// Returns a proxy for a zone on this server.
    ///
    /// No network call is made. Zone ids are fully-qualified names,
    /// canonically with a trailing dot (`"example.com."`).
    #[must_use]
    pub fn zone(&self, id: &str) -> Zone {
        Zone::new(
            Arc::clone(self.resource.http()),
            &self.to_ref(),
            id,
        )
    }

    /// Lists the zones on this server.
    ///
    /// Each returned [`Zone`] has its `info` pre-populated from the listing
    /// entry (name, kind, serial, ...). Entries without a string `id` are
    /// skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the transport call fails.
    pub async fn zones(&self) -> Result<Vec<Zone>, ResourceError> {
        let path = format!("{}/zones", self.url());
        let response = self.resource.http().get(&path).await?;
        let parent = self.to_ref();

        let zones = ensure_array(response.body)
            .into_iter()
            .filter_map(|entry| {
                let id = entry.get("id")?.as_str()?.to_string();
                let info = match entry {
                    Value::Object(map) => map,
                    _ => return None,
                };
                Some(
                    Zone::new(Arc::clone(self.resource.http()), &parent, &id)
                        .with_listing_info(info),
                )
            })
            .collect();

        Ok(zones)
    }
}

impl ApiObject for Server {
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

    fn test_http() -> Arc<HttpClient> {
        let config = PdnsConfig::builder()
            .api_host(ApiHost::new("http://127.0.0.1:8081").unwrap())
            .api_key(ApiKey::new("test-api-key").unwrap())
            .build()
            .unwrap();
        Arc::new(HttpClient::new(&config))
    }

    #[test]
    fn test_server_url_and_kind() {
        let server = Server::new(test_http(), "localhost");

        assert_eq!(server.url(), "servers/localhost");
        assert_eq!(server.kind(), "servers");
        assert!(server.info().is_empty());
    }

    #[test]
    fn test_zone_factory_builds_child_url_and_parent() {
        let server = Server::new(test_http(), "localhost");
        let zone = server.zone("example.com.");

        assert_eq!(zone.url(), "servers/localhost/zones/example.com.");
        assert_eq!(zone.kind(), "zones");
    }

    #[tokio::test]
    async fn test_create_on_a_server_fails_with_missing_parent() {
        let mut server = Server::new(test_http(), "localhost");

        let result = server.create(None).await;

        assert!(matches!(
            result,
            Err(ResourceError::MissingParent { kind: "servers" })
        ));
    }
}
