//! HTTP response types for the PowerDNS API SDK.
//!
//! This module provides the [`HttpResponse`] type for parsing and accessing
//! API response data.

use std::collections::HashMap;

/// An HTTP response from the PowerDNS API.
///
/// Contains the response status code, headers, and the decoded JSON body.
/// Empty bodies (such as the `204 No Content` returned by zone deletion)
/// decode to an empty JSON object.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use pdns_api::clients::HttpResponse;
/// use serde_json::json;
///
/// let response = HttpResponse::new(200, HashMap::new(), json!({"id": "example.com."}));
/// assert!(response.is_ok());
/// assert_eq!(response.body["id"], "example.com.");
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lower-cased (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The decoded response body.
    pub body: serde_json::Value,
    /// Seconds to wait before retrying (from the `Retry-After` header).
    pub retry_request_after: Option<f64>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing retry hints from the headers.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let retry_request_after = headers
            .get("retry-after")
            .and_then(|values| values.first())
            .and_then(|value| value.parse::<f64>().ok());

        Self {
            code,
            headers,
            body,
            retry_request_after,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a (lower-cased) header, if present.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}
