//! Configuration types for the PowerDNS API SDK.
//!
//! This module provides the core configuration types used to initialize
//! and configure the SDK for communication with a PowerDNS authoritative
//! server's built-in webserver.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`PdnsConfig`]: The main configuration struct holding all SDK settings
//! - [`PdnsConfigBuilder`]: A builder for constructing [`PdnsConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`ApiHost`]: A validated API host URL
//! - [`ApiVersion`]: The PowerDNS API version to use
//!
//! # Example
//!
//! ```rust
//! use pdns_api::{PdnsConfig, ApiHost, ApiKey, ApiVersion};
//!
//! let config = PdnsConfig::builder()
//!     .api_host(ApiHost::new("http://127.0.0.1:8081").unwrap())
//!     .api_key(ApiKey::new("changeme").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod version;

pub use newtypes::{ApiHost, ApiKey};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Configuration for the PowerDNS API SDK.
///
/// This struct holds all configuration needed for SDK operations: the
/// server's webserver address, the API key, and the API version.
///
/// # Thread Safety
///
/// `PdnsConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use pdns_api::{PdnsConfig, ApiHost, ApiKey};
///
/// let config = PdnsConfig::builder()
///     .api_host(ApiHost::new("http://127.0.0.1:8081").unwrap())
///     .api_key(ApiKey::new("changeme").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.api_host().as_ref(), "http://127.0.0.1:8081");
/// ```
#[derive(Clone, Debug)]
pub struct PdnsConfig {
    api_host: ApiHost,
    api_key: ApiKey,
    api_version: ApiVersion,
    user_agent_prefix: Option<String>,
}

impl PdnsConfig {
    /// Creates a new builder for constructing a `PdnsConfig`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pdns_api::{PdnsConfig, ApiHost, ApiKey};
    ///
    /// let config = PdnsConfig::builder()
    ///     .api_host(ApiHost::new("http://127.0.0.1:8081").unwrap())
    ///     .api_key(ApiKey::new("changeme").unwrap())
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder() -> PdnsConfigBuilder {
        PdnsConfigBuilder::new()
    }

    /// Returns the API host URL.
    #[must_use]
    pub const fn api_host(&self) -> &ApiHost {
        &self.api_host
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> ApiVersion {
        self.api_version
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify PdnsConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PdnsConfig>();
};

/// Builder for constructing [`PdnsConfig`] instances.
///
/// This builder provides a fluent API for configuring the SDK. Required
/// fields are `api_host` and `api_key`. All other fields have sensible
/// defaults.
///
/// # Defaults
///
/// - `api_version`: [`ApiVersion::latest()`]
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use pdns_api::{PdnsConfig, ApiHost, ApiKey, ApiVersion};
///
/// let config = PdnsConfig::builder()
///     .api_host(ApiHost::new("https://ns0.example.com:8081").unwrap())
///     .api_key(ApiKey::new("changeme").unwrap())
///     .api_version(ApiVersion::V1)
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct PdnsConfigBuilder {
    api_host: Option<ApiHost>,
    api_key: Option<ApiKey>,
    api_version: Option<ApiVersion>,
    user_agent_prefix: Option<String>,
}

impl PdnsConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API host URL (required).
    #[must_use]
    pub fn api_host(mut self, host: ApiHost) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub const fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets a prefix for the User-Agent header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_host` or
    /// `api_key` has not been set.
    pub fn build(self) -> Result<PdnsConfig, ConfigError> {
        let api_host = self
            .api_host
            .ok_or(ConfigError::MissingRequiredField { field: "api_host" })?;
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(PdnsConfig {
            api_host,
            api_key,
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
