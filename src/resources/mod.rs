//! Resource infrastructure for the PowerDNS API.
//!
//! This module provides the object model over the API: a generic
//! [`Resource`] proxy shared by all kinds, the [`ApiObject`] trait exposing
//! the common operation set, and the concrete kinds ([`Server`], [`Zone`],
//! [`Metadata`], [`CryptoKey`]) with the [`Client`] entry point.
//!
//! # Overview
//!
//! Every remote entity is represented by a local proxy that holds the
//! entity's URL, a kind tag, an optional parent reference, and a cached
//! `info` mapping of the entity's attributes. The CRUD protocol maps onto
//! plain HTTP verbs:
//!
//! - `get` — GET the entity, replacing the local `info` with the response
//! - `create` — POST the staged `info` to the parent's collection URL
//! - `change` — PUT a caller-supplied changeset to the entity
//! - `delete` — DELETE the entity (local `info` is left stale)
//!
//! Proxies are produced by factories: a [`Client`] hands out [`Server`]s,
//! servers hand out [`Zone`]s, and zones hand out [`Metadata`] and
//! [`CryptoKey`]s, all sharing one transport.
//!
//! # Example: Creating a zone
//!
//! ```rust,ignore
//! use pdns_api::{Client, PdnsConfig, ApiHost, ApiKey};
//! use pdns_api::resources::ApiObject;
//! use serde_json::{json, Map};
//!
//! let config = PdnsConfig::builder()
//!     .api_host(ApiHost::new("http://127.0.0.1:8081").unwrap())
//!     .api_key(ApiKey::new("changeme").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = Client::new(&config);
//! let mut zone = client.server("localhost").zone("example.com.");
//!
//! let mut info = Map::new();
//! info.insert("name".to_string(), json!("example.com."));
//! info.insert("kind".to_string(), json!("Native"));
//! info.insert("nameservers".to_string(), json!(["ns0.example.com."]));
//!
//! zone.create(Some(info)).await?;
//! zone.get().await?; // reflect server-assigned attributes locally
//! ```
//!
//! # Key Types
//!
//! - [`Resource`]: the generic proxy holding url/kind/parent/info/transport
//! - [`ResourceRef`]: a non-owning parent handle
//! - [`ApiObject`]: the common operation set, by composition
//! - [`ResourceError`]: resource-layer error taxonomy
//! - [`ensure_array`]: single-or-list response normalization

mod client;
mod cryptokey;
mod errors;
mod metadata;
mod object;
mod resource;
mod server;
mod zone;

pub use client::Client;
pub use cryptokey::CryptoKey;
pub use errors::ResourceError;
pub use metadata::Metadata;
pub use object::ApiObject;
pub use resource::{ensure_array, Resource, ResourceRef};
pub use server::Server;
pub use zone::Zone;
