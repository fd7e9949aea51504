//! Users: end users, agents and admins.

use crate::rest::{RegistryError, ResourceKind};

crate::resource! {
    /// A Zendesk user.
    pub struct User {
        name: String,
        email: String,
        /// One of `end-user`, `agent` or `admin`.
        role: String,
        phone: String,
        organization_id: u64,
        time_zone: String,
        locale: String,
        verified: bool,
        suspended: bool,
        tags: Vec<String>,
        external_id: String,
    }
}

/// Declares the `User` kind.
///
/// # Errors
///
/// Never fails for this declaration.
pub fn declaration() -> Result<ResourceKind, RegistryError> {
    ResourceKind::builder("User")
        .has("organization")
        .has_many("groups")
        .has_many("organizations")
        .build()
}
