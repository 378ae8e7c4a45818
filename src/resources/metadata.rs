//! Zone metadata resource implementation.
//!
//! A [`Metadata`] is a proxy for one metadata kind of a zone, such as
//! `ALLOW-AXFR-FROM` or `TSIG-ALLOW-AXFR`. The values themselves live in
//! the `metadata` array of the `info` mapping.

use std::sync::Arc;

use serde_json::{json, Map, Value};

use crate::clients::HttpClient;
use crate::resources::object::ApiObject;
use crate::resources::resource::{Resource, ResourceRef};

/// A proxy for one metadata kind of a zone.
///
/// The remote representation is `{"kind": "...", "metadata": [...]}`; the
/// proxy seeds its `info` with the kind on construction, so staging and
/// creating only needs the `metadata` values. Creation posts to the zone's
/// `metadata` collection, which the server treats as an upsert of that kind.
#[derive(Clone, Debug)]
pub struct Metadata {
    resource: Resource,
}

impl Metadata {
    /// Creates a proxy for the metadata of the given kind under a zone.
    pub(crate) fn new(http: Arc<HttpClient>, zone: &ResourceRef, kind: &str) -> Self {
        let url = format!("{}/metadata/{kind}", zone.url());
        let mut info = Map::new();
        info.insert("kind".to_string(), json!(kind));

        Self {
            resource: Resource::new(http, "metadata", url)
                .with_parent(zone.clone())
                .with_info(info),
        }
    }

    /// Seeds the proxy's `info` from a listing entry.
    pub(crate) fn with_listing_info(mut self, info: Map<String, Value>) -> Self {
        self.resource = self.resource.with_info(info);
        self
    }
}

impl ApiObject for Metadata {
    fn resource(&self) -> &Resource {
        &self.resource
    }

    fn resource_mut(&mut self) -> &mut Resource {
        &mut self.resource
    }
}
