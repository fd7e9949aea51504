//! Organizations.

use crate::rest::{RegistryError, ResourceKind};

crate::resource! {
    /// A customer organization.
    pub struct Organization {
        name: String,
        details: String,
        notes: String,
        domain_names: Vec<String>,
        group_id: u64,
        shared_tickets: bool,
        shared_comments: bool,
        tags: Vec<String>,
        external_id: String,
    }
}

/// Declares the `Organization` kind.
///
/// # Errors
///
/// Never fails for this declaration.
pub fn declaration() -> Result<ResourceKind, RegistryError> {
    ResourceKind::builder("Organization")
        .has("group")
        .has_many("users")
        .has_many("tickets")
        .build()
}
