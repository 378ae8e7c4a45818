//! HTTP client types for PowerDNS API communication.
//!
//! This module provides the transport layer for making authenticated requests
//! to a PowerDNS authoritative server's built-in webserver. It handles
//! request/response processing, status-to-error translation, and optional
//! retry logic.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//!
//! # Example
//!
//! ```rust,ignore
//! use pdns_api::{PdnsConfig, ApiHost, ApiKey};
//! use pdns_api::clients::HttpClient;
//!
//! let config = PdnsConfig::builder()
//!     .api_host(ApiHost::new("http://127.0.0.1:8081").unwrap())
//!     .api_key(ApiKey::new("changeme").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = HttpClient::new(&config);
//!
//! let response = client.get("servers/localhost/zones/example.com.").await?;
//! println!("Zone: {}", response.body);
//! ```
//!
//! # Retry Behavior
//!
//! The client implements automatic retry logic for transient failures:
//!
//! - **429 (Rate Limited)**: Retries using `Retry-After` header value, or 1 second if not present
//! - **500 (Server Error)**: Retries with fixed 1-second delay
//! - **Other errors (4xx)**: Returns immediately without retry
//!
//! The default `tries` is 1, meaning no automatic retries, and the verb
//! helpers always use the default. Build an [`HttpRequest`] with `.tries(n)`
//! and call [`HttpClient::request`] to enable retries.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
