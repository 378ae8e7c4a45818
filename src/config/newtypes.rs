//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated PowerDNS API key.
///
/// This newtype ensures the key is non-empty and masks its value in debug
/// output to prevent accidental exposure in logs. The key is sent as the
/// `X-API-Key` header and corresponds to the `api-key` setting of the
/// authoritative server.
///
/// # Security
///
/// The `Debug` implementation masks the key value, displaying only
/// `ApiKey(*****)` instead of the actual key.
///
/// # Example
///
/// ```rust
/// use pdns_api::ApiKey;
///
/// let key = ApiKey::new("changeme").unwrap();
/// assert_eq!(key.as_ref(), "changeme");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated PowerDNS API host URL.
///
/// This newtype validates that the URL has an `http` or `https` scheme and a
/// non-empty host, and strips any trailing slashes so paths can be appended
/// directly. The authoritative server's webserver typically listens on
/// `http://127.0.0.1:8081`.
///
/// # Serialization
///
/// `ApiHost` serializes to and deserializes from the normalized URL string:
///
/// ```rust
/// use pdns_api::ApiHost;
///
/// let host = ApiHost::new("http://127.0.0.1:8081/").unwrap();
/// let json = serde_json::to_string(&host).unwrap();
/// assert_eq!(json, r#""http://127.0.0.1:8081""#);
/// ```
///
/// # Example
///
/// ```rust
/// use pdns_api::ApiHost;
///
/// let host = ApiHost::new("https://ns0.example.com:8081").unwrap();
/// assert_eq!(host.scheme(), "https");
/// assert_eq!(host.host_name(), "ns0.example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiHost {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl ApiHost {
    /// Creates a new validated API host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiHost`] if the URL is missing an
    /// http/https scheme or has an empty host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        // Find scheme
        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidApiHost { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme != "http" && scheme != "https" {
            return Err(ConfigError::InvalidApiHost { url: url.clone() });
        }

        // Find host
        let host_start = scheme_end + 3; // Skip "://"
        if host_start >= url.len() {
            return Err(ConfigError::InvalidApiHost { url: url.clone() });
        }

        // Host ends at port, path, query, or end of string
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        let host = &url[host_start..host_end];
        if host.is_empty() {
            return Err(ConfigError::InvalidApiHost { url: url.clone() });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (`http` or `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl AsRef<str> for ApiHost {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl Serialize for ApiHost {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.url)
    }
}

impl<'de> Deserialize<'de> for ApiHost {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_rejects_empty_string() {
        let result = ApiKey::new("");
        assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn test_api_key_masks_value_in_debug() {
        let key = ApiKey::new("super-secret-key").unwrap();
        let debug_output = format!("{:?}", key);
        assert_eq!(debug_output, "ApiKey(*****)");
        assert!(!debug_output.contains("super-secret-key"));
    }

    #[test]
    fn test_api_host_validates_format() {
        let host = ApiHost::new("http://127.0.0.1:8081").unwrap();
        assert_eq!(host.scheme(), "http");
        assert_eq!(host.host_name(), "127.0.0.1");

        // Without port
        let host = ApiHost::new("https://ns0.example.com").unwrap();
        assert_eq!(host.scheme(), "https");
        assert_eq!(host.host_name(), "ns0.example.com");
    }

    #[test]
    fn test_api_host_strips_trailing_slashes() {
        let host = ApiHost::new("http://127.0.0.1:8081/").unwrap();
        assert_eq!(host.as_ref(), "http://127.0.0.1:8081");

        let host = ApiHost::new("http://127.0.0.1:8081//").unwrap();
        assert_eq!(host.as_ref(), "http://127.0.0.1:8081");
    }

    #[test]
    fn test_api_host_rejects_invalid() {
        // No scheme
        assert!(ApiHost::new("127.0.0.1:8081").is_err());

        // Empty host
        assert!(ApiHost::new("http://").is_err());

        // Non-http scheme
        assert!(ApiHost::new("ftp://pdns.example.com").is_err());
        assert!(ApiHost::new("://pdns.example.com").is_err());
    }

    #[test]
    fn test_api_host_serializes_to_string() {
        let host = ApiHost::new("http://127.0.0.1:8081").unwrap();
        let json = serde_json::to_string(&host).unwrap();
        assert_eq!(json, r#""http://127.0.0.1:8081""#);
    }

    #[test]
    fn test_api_host_deserializes_from_string() {
        let json = r#""http://127.0.0.1:8081""#;
        let host: ApiHost = serde_json::from_str(json).unwrap();
        assert_eq!(host.as_ref(), "http://127.0.0.1:8081");
        assert_eq!(host.host_name(), "127.0.0.1");
    }

    #[test]
    fn test_api_host_round_trip_serialization() {
        let original = ApiHost::new("https://ns0.example.com:8081").unwrap();
        let json = serde_json::to_string(&original).unwrap();
        let restored: ApiHost = serde_json::from_str(&json).unwrap();
        assert_eq!(original, restored);
    }
}
