//! The activity stream of the current agent.

use crate::rest::{Capability, RegistryError, ResourceKind};

crate::resource! {
    /// An entry of the activity stream.
    pub struct Activity {
        title: String,
        verb: String,
        user_id: u64,
        actor_id: u64,
        created_at: String,
    }
}

/// Declares the `Activity` kind.
///
/// # Errors
///
/// Never fails for this declaration.
pub fn declaration() -> Result<ResourceKind, RegistryError> {
    ResourceKind::builder("Activity")
        .capability(Capability::ReadOnly)
        .has("user")
        .has("actor")
        .class_name("User")
        .build()
}
