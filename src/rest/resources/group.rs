//! Agent groups.

use crate::rest::{RegistryError, ResourceKind};

crate::resource! {
    /// A group of agents tickets can be assigned to.
    pub struct Group {
        name: String,
        description: String,
        default: bool,
        deleted: bool,
    }
}

/// Declares the `Group` kind.
///
/// # Errors
///
/// Never fails for this declaration.
pub fn declaration() -> Result<ResourceKind, RegistryError> {
    ResourceKind::builder("Group").has_many("users").build()
}
