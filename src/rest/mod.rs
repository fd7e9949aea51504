//! Generic REST resources for the Zendesk API.
//!
//! This module provides the resource layer:
//!
//! - **[`Resource`]**: one remote record with a flexible [`Attributes`] store,
//!   a [`ResourcePath`] lineage and the save/destroy protocol
//! - **[`ResourceKind`]**: the per-type descriptor holding
//!   [`ResourceNames`], [`Capability`], [`Whitelist`] and [`Association`]s
//! - **[`Registry`]**: the wired set of kinds; associations are checked when
//!   it is built
//! - **[`Collection`]**: records under one path, reached from the client or
//!   through a `has_many` association
//! - **[`resource!`](crate::resource)** and [`TypedResource`]: typed
//!   wrappers with per-field accessors
//! - **[`ResourceError`]**: categorized errors that keep the transport error
//!
//! # Example
//!
//! ```rust,ignore
//! use zendesk_api::ZendeskClient;
//! use zendesk_api::rest::resources::Ticket;
//! use serde_json::json;
//!
//! let client = ZendeskClient::new(&config)?;
//!
//! // Create
//! let mut ticket: Ticket = client.build(json!({"subject": "Help"}))?;
//! assert_eq!(ticket.path(), "tickets");
//! ticket.save().await?;                       // POST tickets
//!
//! // Update
//! ticket.set_status("solved");
//! ticket.save().await?;                       // PUT tickets/42.json
//!
//! // Associations
//! let requester = ticket.has_one("requester")?;
//! let comments = ticket.has_many("comments")?.fetch().await?;  // GET tickets/42/comments.json
//!
//! // Delete
//! ticket.destroy().await?;                    // DELETE tickets/42.json
//! assert!(ticket.save().await.is_err());
//! ```

mod attributes;
mod collection;
mod errors;
pub mod naming;
mod path;
mod registry;
mod resource;
mod typed;
mod whitelist;

pub mod resources;

pub use attributes::Attributes;
pub use collection::Collection;
pub use errors::{ErrorCategory, RegistryError, ResourceError};
pub use naming::ResourceNames;
pub use path::{id_segment, ResourcePath};
pub use registry::{
    Association, Capability, Cardinality, Operation, Registry, RegistryBuilder, ResourceKind,
    ResourceKindBuilder, Verb,
};
pub use resource::Resource;
pub use typed::TypedResource;
pub use whitelist::Whitelist;
