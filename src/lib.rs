//! # PowerDNS API Rust SDK
//!
//! A Rust SDK for the PowerDNS Authoritative Server HTTP API, providing
//! type-safe configuration, an authenticated HTTP client, and a resource
//! object model over servers, zones, zone metadata, and DNSSEC cryptokeys.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`PdnsConfig`] and [`PdnsConfigBuilder`]
//! - Validated newtypes for the API key and host URL
//! - An async HTTP client with `X-API-Key` authentication and optional
//!   retry handling via [`clients::HttpClient`]
//! - A resource object model ([`resources`]) mapping CRUD operations onto
//!   plain HTTP verbs
//!
//! ## Quick Start
//!
//! ```rust
//! use pdns_api::{PdnsConfig, ApiHost, ApiKey, ApiVersion};
//!
//! // Create configuration using the builder pattern
//! let config = PdnsConfig::builder()
//!     .api_host(ApiHost::new("http://127.0.0.1:8081").unwrap())
//!     .api_key(ApiKey::new("changeme").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Working with Resources
//!
//! Resource objects are local proxies for remote entities. They cache the
//! entity's attributes in an `info` mapping and synchronize through the
//! shared transport:
//!
//! ```rust,ignore
//! use pdns_api::{Client, PdnsConfig, ApiHost, ApiKey};
//! use pdns_api::resources::ApiObject;
//! use serde_json::{json, Map};
//!
//! let client = Client::new(&config);
//! let server = client.server("localhost");
//!
//! // Create a zone: stage attributes locally, then POST them
//! let mut zone = server.zone("example.com.");
//! let mut info = Map::new();
//! info.insert("name".to_string(), json!("example.com."));
//! info.insert("kind".to_string(), json!("Native"));
//! info.insert("nameservers".to_string(), json!(["ns0.example.com."]));
//! zone.create(Some(info)).await?;
//!
//! // Refresh the local cache with server-assigned attributes
//! zone.get().await?;
//! println!("serial: {}", zone.info()["serial"]);
//!
//! // Update attributes with a changeset, then delete
//! zone.change(json!({"kind": "Master"})).await?;
//! zone.delete().await?;
//! ```
//!
//! ## Making Raw API Requests
//!
//! The transport is usable directly for endpoints the object model does not
//! cover:
//!
//! ```rust,ignore
//! use pdns_api::clients::{HttpClient, HttpRequest, HttpMethod};
//!
//! let client = HttpClient::new(&config);
//!
//! // Verb helpers (single attempt)
//! let response = client.get("servers/localhost/statistics").await?;
//!
//! // Full request builder (opt into retries)
//! let request = HttpRequest::builder(HttpMethod::Get, "servers")
//!     .tries(3)
//!     .build()
//!     .unwrap();
//! let response = client.request(request).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **Thin resource layer**: Resource operations are one transport call
//!   each; errors propagate unmodified, with no retries or recovery

pub mod clients;
pub mod config;
pub mod error;
pub mod resources;

// Re-export public types at crate root for convenience
pub use config::{ApiHost, ApiKey, ApiVersion, PdnsConfig, PdnsConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};

// Re-export resource types
pub use resources::{
    ensure_array, ApiObject, Client, CryptoKey, Metadata, Resource, ResourceError, ResourceRef,
    Server, Zone,
};
