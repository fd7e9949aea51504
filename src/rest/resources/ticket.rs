//! Tickets.
//!
//! Tickets are the central record of Zendesk Support. Some fields may only
//! be sent on create: `requester_id`, `submitter_id`, `description` and
//! `via_followup_source_id` are dropped from update bodies.
//!
//! # Example
//!
//! ```rust,ignore
//! use zendesk_api::rest::resources::Ticket;
//! use serde_json::json;
//!
//! let mut ticket: Ticket = client.build(json!({"subject": "Printer on fire"}))?;
//! ticket.set_priority("urgent");
//! ticket.save().await?;
//!
//! let comments = ticket.has_many("comments")?.fetch().await?;
//! ticket.call_verb("mark_as_spam").await?;   // PUT tickets/<id>/mark_as_spam.json
//! ```

use crate::clients::HttpMethod;
use crate::rest::{RegistryError, ResourceKind};

const CREATE_FIELDS: &[&str] = &[
    "subject",
    "comment",
    "description",
    "status",
    "priority",
    "type",
    "requester_id",
    "submitter_id",
    "assignee_id",
    "organization_id",
    "group_id",
    "tags",
    "external_id",
    "due_at",
    "custom_fields",
    "via_followup_source_id",
];

const UPDATE_FIELDS: &[&str] = &[
    "subject",
    "comment",
    "status",
    "priority",
    "type",
    "assignee_id",
    "organization_id",
    "group_id",
    "tags",
    "external_id",
    "due_at",
    "custom_fields",
];

crate::resource! {
    /// A support ticket.
    pub struct Ticket {
        subject: String,
        description: String,
        /// One of `new`, `open`, `pending`, `hold`, `solved` or `closed`.
        status: String,
        /// One of `urgent`, `high`, `normal` or `low`.
        priority: String,
        requester_id: u64,
        submitter_id: u64,
        assignee_id: u64,
        organization_id: u64,
        group_id: u64,
        tags: Vec<String>,
        external_id: String,
        due_at: String,
        created_at: String,
        updated_at: String,
    }
}

/// Declares the `Ticket` kind.
///
/// # Errors
///
/// Never fails for this declaration; the signature matches
/// [`ResourceKindBuilder::build`](crate::rest::ResourceKindBuilder::build).
pub fn declaration() -> Result<ResourceKind, RegistryError> {
    ResourceKind::builder("Ticket")
        .allow(HttpMethod::Post, CREATE_FIELDS)
        .allow(HttpMethod::Put, UPDATE_FIELDS)
        .has("requester")
        .class_name("User")
        .has("submitter")
        .class_name("User")
        .has("assignee")
        .class_name("User")
        .has("organization")
        .has("group")
        .has_many("comments")
        .verb(HttpMethod::Put, "mark_as_spam")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::{Capability, Cardinality};

    #[test]
    fn test_ticket_declaration() {
        let kind = declaration().unwrap();
        assert_eq!(kind.names().plural(), "tickets");
        assert_eq!(kind.capability(), Capability::Full);
        assert_eq!(kind.association("assignee").unwrap().class_name(), "User");
        assert_eq!(
            kind.association("comments").unwrap().cardinality(),
            Cardinality::Many
        );
        assert_eq!(kind.verb("mark_as_spam").unwrap().method(), HttpMethod::Put);
    }

    #[test]
    fn test_create_only_fields_are_not_updatable() {
        let kind = declaration().unwrap();
        let whitelist = kind.whitelist();

        assert!(whitelist.permits(HttpMethod::Post, "requester_id"));
        assert!(!whitelist.permits(HttpMethod::Put, "requester_id"));
        assert!(!whitelist.permits(HttpMethod::Put, "description"));
        assert!(whitelist.permits(HttpMethod::Put, "status"));
        assert!(!whitelist.permits(HttpMethod::Post, "id"));
    }
}
