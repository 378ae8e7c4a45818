//! Zone resource implementation.
//!
//! A [`Zone`] is a proxy for one DNS zone on a server. Zones are created
//! under their server's collection URL and are in turn the factory for
//! [`Metadata`] and [`CryptoKey`] proxies.
//!
//! # Example
//!
//! ```rust,ignore
//! use pdns_api::resources::ApiObject;
//! use serde_json::{json, Map};
//!
//! let mut zone = server.zone("example.com.");
//!
//! // Stage attributes and create the zone on the server
//! let mut info = Map::new();
//! info.insert("name".to_string(), json!("example.com."));
//! info.insert("kind".to_string(), json!("Native"));
//! info.insert("nameservers".to_string(), json!(["ns0.example.com."]));
//! zone.create(Some(info)).await?;
//!
//! // Change zone attributes with a caller-supplied changeset
//! zone.change(json!({"kind": "Master"})).await?;
//!
//! // DNSSEC material and per-zone metadata hang off the zone
//! let keys = zone.cryptokeys().await?;
//! let axfr = zone.metadata("ALLOW-AXFR-FROM");
//! ```

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::clients::HttpClient;
use crate::resources::cryptokey::CryptoKey;
use crate::resources::errors::ResourceError;
use crate::resources::metadata::Metadata;
use crate::resources::object::ApiObject;
use crate::resources::resource::{ensure_array, Resource, ResourceRef};

/// A proxy for one DNS zone on a server.
///
/// Zone ids are fully-qualified names, canonically with a trailing dot.
/// The local `info` mapping mirrors the zone's attributes as last fetched
/// or staged (`name`, `kind`, `serial`, `dnssec`, `rrsets`, ...).
#[derive(Clone, Debug)]
pub struct Zone {
    resource: Resource,
}

impl Zone {
    /// Creates a proxy for the zone with the given id under a server.
    pub(crate) fn new(http: Arc<HttpClient>, server: &ResourceRef, id: &str) -> Self {
        let url = format!("{}/zones/{id}", server.url());
        Self {
            resource: Resource::new(http, "zones", url).with_parent(server.clone()),
        }
    }

    /// Seeds the proxy's `info` from a listing entry.
    pub(crate) fn with_listing_info(mut self, info: Map<String, Value>) -> Self {
        self.resource = self.resource.with_info(info);
        self
    }

    /// Returns a proxy for one metadata kind of this zone.
    ///
    /// No network call is made. The proxy's `info` is seeded with the
    /// metadata kind, so creating it only needs the `metadata` values:
    ///
    /// ```rust,ignore
    /// let mut axfr = zone.metadata("ALLOW-AXFR-FROM");
    /// let mut values = Map::new();
    /// values.insert("metadata".to_string(), json!(["192.0.2.1"]));
    /// axfr.create(Some(values)).await?;
    /// ```
    #[must_use]
    pub fn metadata(&self, kind: &str) -> Metadata {
        Metadata::new(Arc::clone(self.resource.http()), &self.to_ref(), kind)
    }

    /// Lists all metadata set on this zone.
    ///
    /// Each returned [`Metadata`] has its `info` pre-populated from the
    /// listing entry. Entries without a string `kind` are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the transport call fails.
    pub async fn metadata_list(&self) -> Result<Vec<Metadata>, ResourceError> {
        let path = format!("{}/metadata", self.url());
        let response = self.resource.http().get(&path).await?;
        let parent = self.to_ref();

        let entries = ensure_array(response.body)
            .into_iter()
            .filter_map(|entry| {
                let kind = entry.get("kind")?.as_str()?.to_string();
                let info = match entry {
                    Value::Object(map) => map,
                    _ => return None,
                };
                Some(
                    Metadata::new(Arc::clone(self.resource.http()), &parent, &kind)
                        .with_listing_info(info),
                )
            })
            .collect();

        Ok(entries)
    }

    /// Returns a proxy for one cryptokey of this zone.
    ///
    /// No network call is made. Cryptokey ids are assigned by the server;
    /// list them with [`cryptokeys`](Self::cryptokeys) first when unknown.
    #[must_use]
    pub fn cryptokey(&self, id: u64) -> CryptoKey {
        CryptoKey::new(Arc::clone(self.resource.http()), &self.to_ref(), id)
    }

    /// Lists the DNSSEC cryptokeys of this zone.
    ///
    /// Each returned [`CryptoKey`] has its `info` pre-populated from the
    /// listing entry. Entries without a numeric `id` are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the transport call fails.
    pub async fn cryptokeys(&self) -> Result<Vec<CryptoKey>, ResourceError> {
        let path = format!("{}/cryptokeys", self.url());
        let response = self.resource.http().get(&path).await?;
        let parent = self.to_ref();

        let keys = ensure_array(response.body)
            .into_iter()
            .filter_map(|entry| {
                let id = entry.get("id")?.as_u64()?;
                let info = match entry {
                    Value::Object(map) => map,
                    _ => return None,
                };
                Some(
                    CryptoKey::new(Arc::clone(self.resource.http()), &parent, id)
                        .with_listing_info(info),
                )
            })
            .collect();

        Ok(keys)
    }
}

impl ApiObject for Zone {
    fn resource(&self) -> &Resource {
        &self.resource
    }

    fn resource_mut(&mut self) -> &mut Resource {
        &mut self.resource
    }
}
