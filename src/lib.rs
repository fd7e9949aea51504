//! # Zendesk API Rust SDK
//!
//! A Rust SDK for the Zendesk REST API built around generic resources: a
//! record type addressed by a URL path, carrying a flexible attribute store,
//! that knows how to create, update and delete itself.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`ZendeskConfig`] and [`ZendeskConfigBuilder`]
//! - Validated newtypes for the API URL and credentials
//! - An async HTTP client with retry logic and rate limit handling
//! - Generic resources with naming conventions, per-verb write whitelists and
//!   deep-merge of server responses ([`rest`])
//! - Associations between resource kinds, checked when the registry is wired
//! - Typed wrappers for Tickets, Users, Organizations and more
//!   ([`rest::resources`])
//!
//! ## Quick Start
//!
//! ```rust
//! use zendesk_api::{ApiToken, ApiUrl, Username, ZendeskConfig};
//!
//! let config = ZendeskConfig::builder()
//!     .url(ApiUrl::from_subdomain("acme").unwrap())
//!     .username(Username::new("agent@acme.com").unwrap())
//!     .token(ApiToken::new("api-token").unwrap())
//!     .tries(3)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.url().as_ref(), "https://acme.zendesk.com/api/v2");
//! ```
//!
//! ## Working With Resources
//!
//! ```rust,ignore
//! use zendesk_api::ZendeskClient;
//! use zendesk_api::rest::resources::Ticket;
//! use serde_json::json;
//!
//! let client = ZendeskClient::new(&config)?;
//!
//! let mut ticket: Ticket = client.build(json!({"subject": "Help"}))?;
//! ticket.save().await?;
//! println!("{ticket}");
//!
//! let same = client.find("Ticket", 42).await?;
//! for user in client.all("User").await? {
//!     println!("{:?}", user.get::<String>("email"));
//! }
//! ```
//!
//! ## Declaring Your Own Resources
//!
//! ```rust,ignore
//! use zendesk_api::rest::{Capability, Registry, ResourceKind};
//! use zendesk_api::rest::resources::declarations;
//! use zendesk_api::{resource, HttpMethod, ZendeskClient};
//!
//! resource! {
//!     pub struct Macro {
//!         title: String,
//!         active: bool,
//!     }
//! }
//!
//! let registry = Registry::builder()
//!     .declare_all(declarations()?)
//!     .declare(
//!         ResourceKind::builder("Macro")
//!             .allow(HttpMethod::Put, &["title", "active"])
//!             .build()?,
//!     )
//!     .wire()?;
//! let client = ZendeskClient::with_registry(&config, registry)?;
//! let m: Macro = client.find_as(7).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: kinds live in a registry owned by the client
//! - **Fail-fast validation**: newtypes validate on construction and the
//!   registry rejects undeclared association targets when wired
//! - **Thread-safe**: clients, registries and kinds are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio runtime
//! - **Structured errors**: every failure carries an [`rest::ErrorCategory`]

pub mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use client::ZendeskClient;
pub use config::{
    ApiToken, ApiUrl, Credentials, Password, Username, ZendeskConfig, ZendeskConfigBuilder,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    Connection, DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};

// Re-export resource types
pub use rest::{
    Attributes, Collection, ErrorCategory, Registry, RegistryError, Resource, ResourceError,
    ResourceKind, TypedResource,
};

#[doc(hidden)]
pub use paste as __paste;
