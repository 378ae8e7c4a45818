//! The common operation set shared by all concrete resource kinds.
//!
//! This module defines the [`ApiObject`] trait. Concrete kinds (server,
//! zone, metadata, cryptokey) embed a [`Resource`] and expose it through
//! [`resource`](ApiObject::resource)/[`resource_mut`](ApiObject::resource_mut);
//! the trait supplies delegating defaults for every shared operation, so a
//! kind only adds its own URL construction, factories, and typed helpers.

use serde_json::{Map, Value};

use crate::resources::errors::ResourceError;
use crate::resources::resource::{Resource, ResourceRef};

/// A local proxy object for one remote API entity.
///
/// Implementors gain the full shared operation set — `url`, `kind`, `info`,
/// `merge_info`, `to_ref`, `get`, `create`, `change`, and `delete` — by
/// exposing their embedded [`Resource`].
///
/// # Implementing a Kind
///
/// ```rust,ignore
/// use pdns_api::resources::{ApiObject, Resource};
///
/// pub struct Zone {
///     resource: Resource,
/// }
///
/// impl ApiObject for Zone {
///     fn resource(&self) -> &Resource {
///         &self.resource
///     }
///
///     fn resource_mut(&mut self) -> &mut Resource {
///         &mut self.resource
///     }
/// }
/// ```
#[allow(async_fn_in_trait)]
pub trait ApiObject {
    /// Returns the embedded generic resource.
    fn resource(&self) -> &Resource;

    /// Returns the embedded generic resource mutably.
    fn resource_mut(&mut self) -> &mut Resource;

    /// Returns the object's URL.
    fn url(&self) -> &str {
        self.resource().url()
    }

    /// Returns the object's kind tag.
    fn kind(&self) -> &'static str {
        self.resource().kind()
    }

    /// Returns a non-owning reference to this object, for use as a parent
    /// handle by children.
    fn to_ref(&self) -> ResourceRef {
        self.resource().to_ref()
    }

    /// Returns the current local `info` mapping.
    ///
    /// See [`Resource::info`].
    fn info(&self) -> &Map<String, Value> {
        self.resource().info()
    }

    /// Shallow-merges `update` into the local `info` mapping.
    ///
    /// See [`Resource::merge_info`].
    fn merge_info(&mut self, update: Map<String, Value>) -> &Map<String, Value> {
        self.resource_mut().merge_info(update)
    }

    /// Fetches the entity from the server and replaces the local `info`.
    ///
    /// See [`Resource::get`].
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the transport call fails or the body is
    /// not a JSON object.
    async fn get(&mut self) -> Result<&Map<String, Value>, ResourceError> {
        self.resource_mut().get().await
    }

    /// Creates the entity on the server under its parent's collection URL.
    ///
    /// See [`Resource::create`].
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingParent`] if the object has no parent,
    /// or [`ResourceError::Http`] if the transport call fails.
    async fn create(&mut self, initial: Option<Map<String, Value>>) -> Result<Value, ResourceError> {
        self.resource_mut().create(initial).await
    }

    /// Changes the entity on the server with a caller-supplied changeset.
    ///
    /// See [`Resource::change`].
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the transport call fails.
    async fn change(&self, changeset: Value) -> Result<Value, ResourceError> {
        self.resource().change(changeset).await
    }

    /// Deletes the entity on the server.
    ///
    /// See [`Resource::delete`].
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the transport call fails.
    async fn delete(&self) -> Result<Value, ResourceError> {
        self.resource().delete().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpClient;
    use crate::config::{ApiHost, ApiKey, PdnsConfig};
    use serde_json::json;
    use std::sync::Arc;

    struct TestObject {
        resource: Resource,
    }

    impl ApiObject for TestObject {
        fn resource(&self) -> &Resource {
            &self.resource
        }

        fn resource_mut(&mut self) -> &mut Resource {
            &mut self.resource
        }
    }

    fn test_object() -> TestObject {
        let config = PdnsConfig::builder()
            .api_host(ApiHost::new("http://127.0.0.1:8081").unwrap())
            .api_key(ApiKey::new("test-api-key").unwrap())
            .build()
            .unwrap();
        let http = Arc::new(HttpClient::new(&config));

        TestObject {
            resource: Resource::new(http, "zones", "servers/localhost/zones/example.com."),
        }
    }

    #[test]
    fn test_defaults_delegate_to_the_embedded_resource() {
        let mut object = test_object();

        assert_eq!(object.url(), "servers/localhost/zones/example.com.");
        assert_eq!(object.kind(), "zones");
        assert_eq!(object.to_ref().url(), "servers/localhost/zones/example.com.");
        assert!(object.info().is_empty());

        let mut update = Map::new();
        update.insert("kind".to_string(), json!("Native"));
        object.merge_info(update);

        assert_eq!(object.info()["kind"], "Native");
    }
}
