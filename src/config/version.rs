//! PowerDNS API version definitions.
//!
//! This module provides the [`ApiVersion`] enum for specifying which version
//! of the PowerDNS HTTP API to use.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// PowerDNS HTTP API version.
///
/// The version selects the path prefix for all requests (`/api/{version}/`).
/// Version 1 is the API shipped since Authoritative Server 4.0; version 0 is
/// the pre-4.0 experimental JSON interface, kept for talking to legacy
/// deployments.
///
/// # Example
///
/// ```rust
/// use pdns_api::ApiVersion;
///
/// // Use the latest version
/// let version = ApiVersion::latest();
/// assert_eq!(version, ApiVersion::V1);
///
/// // Parse from string
/// let version: ApiVersion = "v1".parse().unwrap();
/// assert_eq!(version, ApiVersion::V1);
///
/// // Display as path segment
/// assert_eq!(format!("{}", ApiVersion::V1), "v1");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ApiVersion {
    /// The pre-4.0 experimental JSON API.
    V0,
    /// API version 1 (Authoritative Server 4.0 and later).
    V1,
}

impl ApiVersion {
    /// Returns the latest API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V1
    }

    /// Returns `true` if this version is still shipped by current servers.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pdns_api::ApiVersion;
    ///
    /// assert!(ApiVersion::V1.is_supported());
    /// assert!(!ApiVersion::V0.is_supported());
    /// ```
    #[must_use]
    pub const fn is_supported(&self) -> bool {
        matches!(self, Self::V1)
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V0 => write!(f, "v0"),
            Self::V1 => write!(f, "v1"),
        }
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "v0" | "0" => Ok(Self::V0),
            "v1" | "1" => Ok(Self::V1),
            _ => Err(ConfigError::InvalidApiVersion {
                version: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_is_v1() {
        assert_eq!(ApiVersion::latest(), ApiVersion::V1);
    }

    #[test]
    fn test_display_as_path_segment() {
        assert_eq!(ApiVersion::V0.to_string(), "v0");
        assert_eq!(ApiVersion::V1.to_string(), "v1");
    }

    #[test]
    fn test_parse_accepts_prefixed_and_bare_forms() {
        assert_eq!("v1".parse::<ApiVersion>().unwrap(), ApiVersion::V1);
        assert_eq!("1".parse::<ApiVersion>().unwrap(), ApiVersion::V1);
        assert_eq!("V1".parse::<ApiVersion>().unwrap(), ApiVersion::V1);
        assert_eq!("v0".parse::<ApiVersion>().unwrap(), ApiVersion::V0);
    }

    #[test]
    fn test_parse_rejects_unknown_versions() {
        let result = "v2".parse::<ApiVersion>();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidApiVersion { version }) if version == "v2"
        ));
    }

    #[test]
    fn test_support_window() {
        assert!(ApiVersion::V1.is_supported());
        assert!(!ApiVersion::V0.is_supported());
    }

    #[test]
    fn test_version_ordering() {
        assert!(ApiVersion::V0 < ApiVersion::V1);
    }
}
