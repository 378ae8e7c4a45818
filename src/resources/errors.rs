//! Resource-specific error types for API operations.
//!
//! This module contains error types for resource operations, extending the
//! transport-level [`HttpError`](crate::clients::HttpError) with
//! resource-specific semantics like `MissingParent`.
//!
//! # Error Handling
//!
//! Resource operations fail in exactly three ways:
//!
//! - [`ResourceError::MissingParent`]: a local precondition failed before any
//!   network call was made
//! - [`ResourceError::UnexpectedBody`]: the server answered with a success
//!   status but a body the operation cannot use
//! - [`ResourceError::Http`]: the transport reported a failure, propagated
//!   unmodified
//!
//! # Example
//!
//! ```rust,ignore
//! use pdns_api::resources::{ApiObject, ResourceError};
//!
//! match zone.create(None).await {
//!     Ok(created) => println!("Created: {}", created),
//!     Err(ResourceError::MissingParent { kind }) => {
//!         println!("{kind} objects need a parent to be created under");
//!     }
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for resource operations.
///
/// Transport failures pass through transparently; the only errors raised at
/// this layer are structural preconditions and body-shape mismatches.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource has no parent, but the operation needs one.
    ///
    /// Creation posts to the parent's collection URL, so root objects
    /// (servers) and detached resources cannot be created.
    #[error("Cannot create a {kind} resource without a parent")]
    MissingParent {
        /// The kind tag of the resource (e.g., "zones").
        kind: &'static str,
    },

    /// The server answered with a success status but a non-object body.
    ///
    /// Resource state is a JSON object; collection endpoints that return
    /// arrays are accessed through listing methods, not through `get`.
    #[error("Expected a JSON object from '{url}', got {found}")]
    UnexpectedBody {
        /// The URL that was fetched.
        url: String,
        /// A short description of what the body was instead.
        found: &'static str,
    },

    /// An HTTP-level error occurred.
    ///
    /// This variant wraps [`HttpError`] unmodified; the resource layer never
    /// interprets status codes or retries.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ResourceError {
    /// Returns the HTTP status code carried by this error, if any.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status_code(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;

    #[test]
    fn test_missing_parent_message_names_the_kind() {
        let error = ResourceError::MissingParent { kind: "zones" };
        let message = error.to_string();
        assert!(message.contains("zones"));
        assert!(message.contains("without a parent"));
    }

    #[test]
    fn test_unexpected_body_message_names_url_and_shape() {
        let error = ResourceError::UnexpectedBody {
            url: "servers/localhost/zones".to_string(),
            found: "an array",
        };
        let message = error.to_string();
        assert!(message.contains("servers/localhost/zones"));
        assert!(message.contains("an array"));
    }

    #[test]
    fn test_http_errors_pass_through_transparently() {
        let http_error = HttpError::Response(HttpResponseError {
            code: 404,
            message: r#"{"error":"Not Found"}"#.to_string(),
        });

        let resource_error = ResourceError::from(http_error);
        assert_eq!(resource_error.status_code(), Some(404));
        assert!(resource_error.to_string().contains("Not Found"));
    }

    #[test]
    fn test_local_errors_have_no_status_code() {
        let error = ResourceError::MissingParent { kind: "zones" };
        assert_eq!(error.status_code(), None);
    }
}
