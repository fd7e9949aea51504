//! Ticket comments.
//!
//! Comments are listed under their ticket (`tickets/<id>/comments.json`)
//! and are added by updating the ticket with a `comment` object, so the
//! kind is read-only.

use crate::rest::{Capability, RegistryError, ResourceKind};

crate::resource! {
    /// One comment of a ticket's conversation.
    pub struct Comment {
        body: String,
        html_body: String,
        plain_body: String,
        public: bool,
        author_id: u64,
        created_at: String,
    }
}

/// Declares the `Comment` kind.
///
/// # Errors
///
/// Never fails for this declaration.
pub fn declaration() -> Result<ResourceKind, RegistryError> {
    ResourceKind::builder("Comment")
        .capability(Capability::ReadOnly)
        .has("author")
        .class_name("User")
        .build()
}
