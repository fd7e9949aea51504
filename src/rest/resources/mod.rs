//! The built-in resource catalogue.
//!
//! Each module declares one typed wrapper (via [`resource!`](crate::resource))
//! and the [`ResourceKind`] it is registered under.
//! [`default_registry`] wires all of them together; it is what
//! [`ZendeskClient::new`](crate::ZendeskClient::new) uses.
//!
//! | Type             | Capability  | Associations                                         |
//! |------------------|-------------|------------------------------------------------------|
//! | [`Ticket`]       | full        | requester, submitter, assignee, organization, group, comments |
//! | [`User`]         | full        | organization, groups, organizations                  |
//! | [`Organization`] | full        | group, users, tickets                                |
//! | [`Group`]        | full        | users                                                |
//! | [`Comment`]      | read-only   | author                                               |
//! | [`Activity`]     | read-only   | user, actor                                          |
//! | [`Upload`]       | create-only |                                                      |
//!
//! Tickets also declare the `mark_as_spam` member action (PUT).
//!
//! To add kinds of your own, start from [`declarations`] and wire a custom
//! registry:
//!
//! ```rust
//! use zendesk_api::rest::{Registry, ResourceKind};
//! use zendesk_api::rest::resources::declarations;
//!
//! let view = ResourceKind::builder("View").build().unwrap();
//! let registry = Registry::builder()
//!     .declare_all(declarations().unwrap())
//!     .declare(view)
//!     .wire()
//!     .unwrap();
//! assert!(registry.contains("View"));
//! ```

mod activity;
mod comment;
mod group;
mod organization;
mod ticket;
mod upload;
mod user;

pub use activity::Activity;
pub use comment::Comment;
pub use group::Group;
pub use organization::Organization;
pub use ticket::Ticket;
pub use upload::Upload;
pub use user::User;

use crate::rest::{Registry, RegistryError, ResourceKind};

/// Returns the declarations of every built-in kind.
///
/// # Errors
///
/// Returns the first [`RegistryError`] raised by a declaration.
pub fn declarations() -> Result<Vec<ResourceKind>, RegistryError> {
    [
        ticket::declaration,
        user::declaration,
        organization::declaration,
        group::declaration,
        comment::declaration,
        activity::declaration,
        upload::declaration,
    ]
    .into_iter()
    .map(|declare| declare())
    .collect()
}

/// Wires the built-in kinds into a registry.
///
/// # Errors
///
/// Returns [`RegistryError`] if a declaration or the wiring fails.
pub fn default_registry() -> Result<Registry, RegistryError> {
    Registry::builder().declare_all(declarations()?).wire()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpClient;
    use crate::rest::TypedResource;

    #[test]
    fn test_default_registry_wires() {
        let registry = default_registry().unwrap();
        assert_eq!(
            registry.type_names(),
            vec!["Activity", "Comment", "Group", "Organization", "Ticket", "Upload", "User"]
        );
    }

    #[test]
    fn test_typed_wrappers_match_declarations() {
        let registry = default_registry().unwrap();
        for type_name in [
            <Ticket as TypedResource<HttpClient>>::TYPE_NAME,
            <User as TypedResource<HttpClient>>::TYPE_NAME,
            <Organization as TypedResource<HttpClient>>::TYPE_NAME,
            <Group as TypedResource<HttpClient>>::TYPE_NAME,
            <Comment as TypedResource<HttpClient>>::TYPE_NAME,
            <Activity as TypedResource<HttpClient>>::TYPE_NAME,
            <Upload as TypedResource<HttpClient>>::TYPE_NAME,
        ] {
            assert!(registry.contains(type_name), "{type_name} is not declared");
        }
    }
}
