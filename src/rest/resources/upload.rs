//! Attachment uploads.
//!
//! An upload is created once and referenced by its `token` from a ticket
//! comment; it is never read back or updated.

use crate::rest::{Capability, RegistryError, ResourceKind};

crate::resource! {
    /// An uploaded attachment.
    pub struct Upload {
        token: String,
        filename: String,
        expires_at: String,
    }
}

/// Declares the `Upload` kind.
///
/// # Errors
///
/// Never fails for this declaration.
pub fn declaration() -> Result<ResourceKind, RegistryError> {
    ResourceKind::builder("Upload")
        .capability(Capability::CreateOnly)
        .build()
}
