//! The generic resource proxy shared by all PowerDNS object kinds.
//!
//! This module defines [`Resource`], a local proxy for one addressable remote
//! entity. A resource holds the entity's URL, its kind tag, an optional
//! parent reference, a cached `info` mapping, and a shared transport handle,
//! and mediates all reads and writes between local cached state and the
//! remote API.
//!
//! # State Model
//!
//! The only state a resource carries is its `info` mapping: the last known
//! server-side (or locally staged) attributes of the remote entity. There is
//! no dirty tracking, no transaction boundary, and no optimistic concurrency
//! control. `info` is always exactly whatever it was last set to:
//!
//! - [`Resource::get`] replaces it wholesale with the server's view
//! - [`Resource::merge_info`] shallow-merges staged changes into it
//! - [`Resource::change`] and [`Resource::delete`] never touch it
//!
//! # Example
//!
//! ```rust,ignore
//! use pdns_api::resources::Resource;
//! use serde_json::{json, Map};
//!
//! let mut zone = Resource::new(http, "zones", "servers/localhost/zones/example.com.")
//!     .with_parent(server.to_ref());
//!
//! // Stage attributes locally, then create the zone on the server
//! let mut info = Map::new();
//! info.insert("name".to_string(), json!("example.com."));
//! info.insert("kind".to_string(), json!("Native"));
//! zone.create(Some(info)).await?;
//!
//! // Refresh the local cache from the server
//! zone.get().await?;
//! ```

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::clients::HttpClient;
use crate::resources::errors::ResourceError;

/// A non-owning reference to a resource, used as a parent handle.
///
/// Children hold a `ResourceRef` to their logical parent so that creation can
/// post to the parent's collection URL. The handle carries only the parent's
/// URL — resource URLs are fixed for an object's lifetime, so the handle
/// observes everything creation needs without tying the child's lifetime to
/// the parent object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceRef {
    url: String,
}

impl ResourceRef {
    /// Creates a reference from a resource URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Returns the referenced resource's URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// A local proxy for one remote API entity.
///
/// Each resource mirrors a single addressable object on the server (a server,
/// zone, metadata entry, or cryptokey) and translates the CRUD protocol onto
/// plain HTTP verbs through the shared [`HttpClient`]:
///
/// | Operation  | HTTP call                   | Effect on local `info`        |
/// |------------|-----------------------------|-------------------------------|
/// | `get`      | GET `url`                   | replaced with response body   |
/// | `create`   | POST `{parent.url}/{kind}`  | merged with `initial` first   |
/// | `change`   | PUT `url`                   | untouched                     |
/// | `delete`   | DELETE `url`                | untouched (goes stale)        |
///
/// Every network-backed operation delegates failure entirely to the
/// transport: no retries, no partial-failure recovery, no status-code
/// interpretation. Dropping a `Resource` never affects the remote entity.
///
/// # Thread Safety
///
/// Mutating operations take `&mut self`; a resource shared across tasks
/// needs external synchronization. The transport handle is an `Arc` clone
/// and is safe to share freely.
#[derive(Clone, Debug)]
pub struct Resource {
    /// Shared transport; not owned by this resource.
    http: Arc<HttpClient>,
    /// The entity's URL; fixed for the object's lifetime.
    url: String,
    /// The resource category tag (e.g., "zones"); fixed for the lifetime.
    kind: &'static str,
    /// Non-owning reference to the logical parent, if any.
    parent: Option<ResourceRef>,
    /// Last known server-side or locally staged state.
    info: Map<String, Value>,
}

impl Resource {
    /// Creates a new resource proxy.
    ///
    /// The resource starts with an empty `info` mapping and no parent. Use
    /// [`with_parent`](Self::with_parent) and [`with_info`](Self::with_info)
    /// to wire those in.
    #[must_use]
    pub fn new(http: Arc<HttpClient>, kind: &'static str, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
            kind,
            parent: None,
            info: Map::new(),
        }
    }

    /// Sets the parent reference.
    #[must_use]
    pub fn with_parent(mut self, parent: ResourceRef) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Seeds the local `info` mapping with initial state.
    #[must_use]
    pub fn with_info(mut self, info: Map<String, Value>) -> Self {
        self.info = info;
        self
    }

    /// Returns the resource's URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the resource's kind tag.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        self.kind
    }

    /// Returns a non-owning reference to this resource, for use as a parent
    /// handle by children.
    #[must_use]
    pub fn to_ref(&self) -> ResourceRef {
        ResourceRef::new(self.url.clone())
    }

    /// Returns the shared transport handle.
    pub(crate) const fn http(&self) -> &Arc<HttpClient> {
        &self.http
    }

    /// Returns the current local `info` mapping.
    ///
    /// Pure accessor: no network call, no mutation.
    #[must_use]
    pub const fn info(&self) -> &Map<String, Value> {
        &self.info
    }

    /// Shallow-merges `update` into the local `info` mapping.
    ///
    /// Keys in `update` overwrite matching keys in `info`; keys not present
    /// in `update` are preserved. Returns the merged mapping. This is the
    /// only way to stage local state ahead of [`create`](Self::create) or
    /// [`change`](Self::change) — no network call is made.
    pub fn merge_info(&mut self, update: Map<String, Value>) -> &Map<String, Value> {
        for (key, value) in update {
            self.info.insert(key, value);
        }
        &self.info
    }

    /// Fetches the entity from the server and replaces the local `info`.
    ///
    /// The entire mapping is replaced with the decoded response body; any
    /// unsaved local changes are discarded. Returns the new `info`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the transport call fails, and
    /// [`ResourceError::UnexpectedBody`] if the server answers with a
    /// success status but a non-object body.
    pub async fn get(&mut self) -> Result<&Map<String, Value>, ResourceError> {
        let response = self.http.get(&self.url).await?;
        self.info = expect_object(&self.url, response.body)?;
        Ok(&self.info)
    }

    /// Creates the entity on the server.
    ///
    /// If `initial` is given it is merged into the local `info` first (per
    /// [`merge_info`](Self::merge_info)); the full post-merge `info` is then
    /// POSTed to the parent's collection URL (`{parent.url}/{kind}`).
    ///
    /// Returns the decoded response body — the server's view of the created
    /// entity. The local `info` is NOT updated from the response; call
    /// [`get`](Self::get) afterwards to reflect server-assigned attributes
    /// (serial, rrsets, API URLs) locally.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingParent`] — before any network call —
    /// if the resource has no parent, and [`ResourceError::Http`] if the
    /// transport call fails. Note that the merge of `initial` is not rolled
    /// back when the POST fails.
    pub async fn create(
        &mut self,
        initial: Option<Map<String, Value>>,
    ) -> Result<Value, ResourceError> {
        if let Some(update) = initial {
            self.merge_info(update);
        }

        let parent = self
            .parent
            .as_ref()
            .ok_or(ResourceError::MissingParent { kind: self.kind })?;

        let path = format!("{}/{}", parent.url(), self.kind);
        let response = self.http.post(&path, Value::Object(self.info.clone())).await?;

        Ok(response.body)
    }

    /// Changes the entity on the server.
    ///
    /// PUTs the caller-supplied `changeset` to the entity's URL as-is; the
    /// changeset is not merged with the local `info`, and the local `info` is
    /// not modified. Callers that want the local cache to track the change
    /// must [`get`](Self::get) or [`merge_info`](Self::merge_info) themselves.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the transport call fails.
    pub async fn change(&self, changeset: Value) -> Result<Value, ResourceError> {
        let response = self.http.put(&self.url, changeset).await?;
        Ok(response.body)
    }

    /// Deletes the entity on the server.
    ///
    /// Returns the decoded response body (usually empty — `{}`). The local
    /// `info` is left untouched, so the proxy keeps stale cached state after
    /// the remote entity is gone; discard the object once deleted.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the transport call fails.
    pub async fn delete(&self) -> Result<Value, ResourceError> {
        let response = self.http.delete(&self.url).await?;
        Ok(response.body)
    }
}

/// Normalizes a value that may be a single object or a list of objects.
///
/// Several endpoints answer with one object when a single entity matches and
/// an array otherwise; listing helpers use this to treat both shapes
/// uniformly. An array yields its elements unchanged (order preserved, empty
/// stays empty); any other value is wrapped in a one-element vector.
///
/// # Example
///
/// ```rust
/// use pdns_api::resources::ensure_array;
/// use serde_json::json;
///
/// assert_eq!(ensure_array(json!([1, 2])), vec![json!(1), json!(2)]);
/// assert_eq!(ensure_array(json!({"id": "a"})), vec![json!({"id": "a"})]);
/// assert_eq!(ensure_array(json!([])), Vec::<serde_json::Value>::new());
/// ```
#[must_use]
pub fn ensure_array(item: Value) -> Vec<Value> {
    match item {
        Value::Array(items) => items,
        other => vec![other],
    }
}

/// Converts a decoded body into an info mapping, rejecting non-objects.
fn expect_object(url: &str, body: Value) -> Result<Map<String, Value>, ResourceError> {
    match body {
        Value::Object(map) => Ok(map),
        other => Err(ResourceError::UnexpectedBody {
            url: url.to_string(),
            found: json_shape(&other),
        }),
    }
}

/// Short human-readable description of a JSON value's shape.
const fn json_shape(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
