//! The SDK entry point.
//!
//! This module provides the [`Client`] type, which owns the shared HTTP
//! transport and hands out [`Server`] proxies. All resource objects created
//! through a client share one underlying [`HttpClient`] via `Arc`.
//!
//! # Example
//!
//! ```rust,ignore
//! use pdns_api::{Client, PdnsConfig, ApiHost, ApiKey};
//!
//! let config = PdnsConfig::builder()
//!     .api_host(ApiHost::new("http://127.0.0.1:8081").unwrap())
//!     .api_key(ApiKey::new("changeme").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = Client::new(&config);
//!
//! // A proxy for a known server, no network call yet
//! let server = client.server("localhost");
//!
//! // Or list the servers the API exposes
//! for server in client.servers().await? {
//!     println!("{}", server.url());
//! }
//! ```

use std::sync::Arc;

use crate::clients::HttpClient;
use crate::config::PdnsConfig;
use crate::resources::errors::ResourceError;
use crate::resources::resource::ensure_array;
use crate::resources::server::Server;

/// Entry point for talking to a PowerDNS API endpoint.
///
/// The client owns the shared transport; every resource object it produces
/// (directly or through factories) holds an `Arc` clone of the same
/// [`HttpClient`], so one client corresponds to one authenticated API
/// session.
///
/// # Thread Safety
///
/// `Client` is `Send + Sync` and cheap to clone-by-factory: producing
/// resource objects only clones the `Arc` handle.
#[derive(Debug)]
pub struct Client {
    http: Arc<HttpClient>,
}

// Verify Client is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
};

impl Client {
    /// Creates a new client for the given configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pdns_api::{Client, PdnsConfig, ApiHost, ApiKey};
    ///
    /// let config = PdnsConfig::builder()
    ///     .api_host(ApiHost::new("http://127.0.0.1:8081").unwrap())
    ///     .api_key(ApiKey::new("changeme").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = Client::new(&config);
    /// ```
    #[must_use]
    pub fn new(config: &PdnsConfig) -> Self {
        Self {
            http: Arc::new(HttpClient::new(config)),
        }
    }

    /// Returns a proxy for the server with the given id.
    ///
    /// No network call is made; the PowerDNS authoritative daemon always
    /// exposes itself as `"localhost"`.
    #[must_use]
    pub fn server(&self, id: &str) -> Server {
        Server::new(Arc::clone(&self.http), id)
    }

    /// Lists the servers exposed by the API.
    ///
    /// Each returned [`Server`] has its `info` pre-populated from the
    /// listing entry. Entries without a string `id` are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the transport call fails.
    pub async fn servers(&self) -> Result<Vec<Server>, ResourceError> {
        let response = self.http.get("servers").await?;

        let servers = ensure_array(response.body)
            .into_iter()
            .filter_map(|entry| {
                let id = entry.get("id")?.as_str()?.to_string();
                let info = match entry {
                    serde_json::Value::Object(map) => map,
                    _ => return None,
                };
                Some(Server::new(Arc::clone(&self.http), &id).with_listing_info(info))
            })
            .collect();

        Ok(servers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiHost, ApiKey};
    use crate::resources::object::ApiObject;

    fn test_client() -> Client {
        let config = PdnsConfig::builder()
            .api_host(ApiHost::new("http://127.0.0.1:8081").unwrap())
            .api_key(ApiKey::new("test-api-key").unwrap())
            .build()
            .unwrap();
        Client::new(&config)
    }

    #[test]
    fn test_server_factory_builds_the_server_url() {
        let client = test_client();
        let server = client.server("localhost");

        assert_eq!(server.url(), "servers/localhost");
        assert_eq!(server.kind(), "servers");
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Client>();
    }
}
