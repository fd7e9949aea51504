//! The generic resource and its persistence protocol.
//!
//! A [`Resource`] is one remote record: a kind, an attribute store and the
//! path lineage of its collection. It moves through three states:
//!
//! - **transient**: no `id`; [`Resource::save`] POSTs to the collection path
//! - **persisted**: has an `id`; `save` PUTs to `<path>/<id>.json` and
//!   [`Resource::destroy`] DELETEs it
//! - **destroyed**: terminal; every write is rejected without a request
//!
//! Kinds may also declare member actions (verbs), invoked on a persisted
//! record with [`Resource::call_verb`].
//!
//! A successful save deep-merges the response body into the store, so
//! server-assigned fields such as `id` become visible. A failed save leaves
//! the store untouched.
//!
//! # Attribute Lookup
//!
//! Server payloads are sometimes wrapped in the resource's singular name
//! (`{"ticket": {...}}`). Attribute accessors look inside that wrapper
//! first and fall back to the top level, so wrapped and flat payloads
//! behave the same.
//!
//! ```rust,ignore
//! let ticket = client.resource("Ticket", json!({"ticket": {"id": 7}}))?;
//! assert_eq!(ticket.id(), Some(&json!(7)));
//! ```

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::client::ZendeskClient;
use crate::clients::{Connection, HttpClient, HttpError, HttpMethod};
use crate::rest::path::id_segment;
use crate::rest::{
    Attributes, Cardinality, Collection, Operation, ResourceError, ResourceKind, ResourcePath,
    Verb,
};

/// A record of any declared resource kind.
pub struct Resource<C: Connection = HttpClient> {
    client: ZendeskClient<C>,
    kind: Arc<ResourceKind>,
    attributes: Attributes,
    path: ResourcePath,
    destroyed: bool,
}

impl<C: Connection> Resource<C> {
    /// Creates a resource. An empty `path` roots it at its collection.
    #[must_use]
    pub fn new(
        client: ZendeskClient<C>,
        kind: Arc<ResourceKind>,
        attributes: Attributes,
        path: Vec<String>,
    ) -> Self {
        let path = ResourcePath::new(path, kind.names().plural());
        Self {
            client,
            kind,
            attributes,
            path,
            destroyed: false,
        }
    }

    /// The client this resource talks through.
    #[must_use]
    pub const fn client(&self) -> &ZendeskClient<C> {
        &self.client
    }

    /// The kind descriptor.
    #[must_use]
    pub fn kind(&self) -> &ResourceKind {
        &self.kind
    }

    /// The full attribute store, wrapper included.
    #[must_use]
    pub const fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Mutable access to the full attribute store.
    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    /// The collection path, joined with `/`.
    #[must_use]
    pub fn path(&self) -> String {
        self.path.join()
    }

    /// The collection path segments.
    #[must_use]
    pub const fn resource_path(&self) -> &ResourcePath {
        &self.path
    }

    /// The member URL `<path>/<id>.json`, once the record has an id.
    #[must_use]
    pub fn member_path(&self) -> Option<String> {
        self.id_segment().map(|id| self.path.member(&id))
    }

    /// The `id` attribute. `null` counts as absent.
    #[must_use]
    pub fn id(&self) -> Option<&Value> {
        self.raw("id").filter(|id| !id.is_null())
    }

    /// Returns `true` until the record has an id.
    #[must_use]
    pub fn is_new_record(&self) -> bool {
        self.id().is_none()
    }

    /// Returns `true` once [`destroy`](Self::destroy) has succeeded.
    #[must_use]
    pub const fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Returns the raw value of an attribute.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&Value> {
        self.wrapped()
            .and_then(|inner| inner.get(key))
            .or_else(|| self.attributes.get(key))
    }

    /// Returns `true` if the attribute is present, even as `null`.
    #[must_use]
    pub fn has_key(&self, key: &str) -> bool {
        self.raw(key).is_some()
    }

    /// Reads an attribute as `T`.
    ///
    /// Returns `None` when the key is absent or the value does not convert.
    /// Use [`try_get`](Self::try_get) to see conversion errors.
    #[must_use]
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.try_get(key).ok().flatten()
    }

    /// Reads an attribute as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialization`] if the value does not
    /// convert to `T`.
    pub fn try_get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ResourceError> {
        self.raw(key)
            .map(|value| {
                serde_json::from_value(value.clone()).map_err(|source| {
                    ResourceError::Serialization {
                        key: key.to_string(),
                        source,
                    }
                })
            })
            .transpose()
    }

    /// Writes an attribute, inside the wrapper if there is one.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> Option<Value> {
        let singular = self.kind.names().singular();
        match self.attributes.nested_mut(singular) {
            Some(inner) => inner.insert(key.to_string(), value.into()),
            None => self.attributes.insert(key, value),
        }
    }

    /// Removes an attribute, from inside the wrapper if there is one.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let singular = self.kind.names().singular();
        match self.attributes.nested_mut(singular) {
            Some(inner) => inner.shift_remove(key),
            None => self.attributes.remove(key),
        }
    }

    /// Creates or updates the record.
    ///
    /// The body is the attribute store filtered by the kind's whitelist for
    /// the chosen verb. On success the response body is deep-merged into the
    /// store.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::Destroyed`] after a successful destroy; no request
    ///   is sent
    /// - [`ResourceError::Unsupported`] if the kind cannot create or update
    /// - any transport error, mapped by [`ResourceError::from_http`]; the
    ///   store is left unchanged
    pub async fn save(&mut self) -> Result<(), ResourceError> {
        self.ensure_not_destroyed()?;

        let id = self.id_segment();
        let (operation, method, url) = match &id {
            None => (Operation::Create, HttpMethod::Post, self.path.join()),
            Some(id) => (Operation::Update, HttpMethod::Put, self.path.member(id)),
        };
        self.ensure_supports(operation)?;

        let body = self.kind.whitelist_attributes(&self.attributes, method);
        tracing::debug!("{} {} ({})", method, url, self.kind.type_name());

        let connection = self.client.connection();
        let result = match method {
            HttpMethod::Post => connection.post(&url, |req| req.set_body(body)).await,
            _ => connection.put(&url, |req| req.set_body(body)).await,
        };

        match result {
            Ok(response) => {
                self.attributes.deep_merge(&response.body);
                Ok(())
            }
            Err(error) => Err(self.failure(operation, &url, id.as_deref(), error)),
        }
    }

    /// Deletes the record.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::Destroyed`] if already destroyed
    /// - [`ResourceError::Unsupported`] if the kind cannot destroy
    /// - [`ResourceError::MissingId`] for a transient record; no request is
    ///   sent
    /// - any transport error; the record stays not destroyed
    pub async fn destroy(&mut self) -> Result<(), ResourceError> {
        self.ensure_not_destroyed()?;
        self.ensure_supports(Operation::Destroy)?;

        let id = self.id_segment().ok_or_else(|| ResourceError::MissingId {
            resource: self.kind.type_name().to_string(),
            operation: Operation::Destroy,
        })?;
        let url = self.path.member(&id);
        tracing::debug!("{} {} ({})", HttpMethod::Delete, url, self.kind.type_name());

        match self.client.connection().delete(&url).await {
            Ok(_) => {
                self.destroyed = true;
                Ok(())
            }
            Err(error) => Err(self.failure(Operation::Destroy, &url, Some(&id), error)),
        }
    }

    /// Invokes a declared member action with an empty JSON body.
    ///
    /// # Errors
    ///
    /// See [`Resource::call_verb_with`].
    pub async fn call_verb(&mut self, name: &str) -> Result<(), ResourceError> {
        self.call_verb_with(name, Value::Object(Map::new())).await
    }

    /// Invokes a declared member action, `<method> <path>/<id>/<name>.json`.
    ///
    /// `body` is sent for POST and PUT actions. On success the response body
    /// is deep-merged into the store, as with [`Resource::save`].
    ///
    /// # Errors
    ///
    /// - [`ResourceError::Destroyed`] if destroyed
    /// - [`ResourceError::UnknownVerb`] if `name` was not declared
    /// - [`ResourceError::Unsupported`] unless the kind has full capability
    /// - [`ResourceError::MissingId`] for a transient record
    /// - any transport error; the store is left unchanged
    pub async fn call_verb_with(&mut self, name: &str, body: Value) -> Result<(), ResourceError> {
        self.ensure_not_destroyed()?;
        let method = self
            .kind
            .verb(name)
            .map(Verb::method)
            .ok_or_else(|| ResourceError::UnknownVerb {
                resource: self.kind.type_name().to_string(),
                verb: name.to_string(),
            })?;
        self.ensure_supports(Operation::Verb)?;

        let id = self.id_segment().ok_or_else(|| ResourceError::MissingId {
            resource: self.kind.type_name().to_string(),
            operation: Operation::Verb,
        })?;
        let url = self.path.action(&id, name);
        tracing::debug!("{} {} ({})", method, url, self.kind.type_name());

        let connection = self.client.connection();
        let result = match method {
            HttpMethod::Get => connection.get(&url, None).await,
            HttpMethod::Post => connection.post(&url, |req| req.set_body(body)).await,
            HttpMethod::Put => connection.put(&url, |req| req.set_body(body)).await,
            HttpMethod::Delete => connection.delete(&url).await,
        };

        match result {
            Ok(response) => {
                self.attributes.deep_merge(&response.body);
                Ok(())
            }
            Err(error) => Err(self.failure(Operation::Verb, &url, Some(&id), error)),
        }
    }

    /// Follows a `has` association.
    ///
    /// The target is built from the embedded `name` object when present,
    /// else from `<name>_id` as `{"id": ...}`. Returns `None` when neither
    /// is set.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnknownAssociation`] if `name` is not a
    /// declared `has` association.
    pub fn has_one(&self, name: &str) -> Result<Option<Self>, ResourceError> {
        let target = self.association_target(name, Cardinality::One)?;

        let attributes = if let Some(embedded) = self.raw(name).filter(|v| v.is_object()) {
            Attributes::from(embedded.clone())
        } else if let Some(id) = self.raw(&format!("{name}_id")).filter(|id| !id.is_null()) {
            let mut attributes = Map::new();
            attributes.insert("id".to_string(), id.clone());
            Attributes::from(attributes)
        } else {
            return Ok(None);
        };

        Ok(Some(Self::new(
            self.client.clone(),
            target,
            attributes,
            Vec::new(),
        )))
    }

    /// Follows a `has_many` association.
    ///
    /// The collection path extends this record's lineage:
    /// `<path>/<id>/<target plural>`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnknownAssociation`] if `name` is not a
    /// declared `has_many` association, and [`ResourceError::MissingId`]
    /// for a transient record.
    pub fn has_many(&self, name: &str) -> Result<Collection<C>, ResourceError> {
        let target = self.association_target(name, Cardinality::Many)?;
        let id = self.id_segment().ok_or_else(|| ResourceError::MissingId {
            resource: self.kind.type_name().to_string(),
            operation: Operation::All,
        })?;
        let path = self.path.nested(&id, target.names().plural());
        Ok(Collection::new(self.client.clone(), target, path))
    }

    fn association_target(
        &self,
        name: &str,
        cardinality: Cardinality,
    ) -> Result<Arc<ResourceKind>, ResourceError> {
        let association = self
            .kind
            .association(name)
            .filter(|a| a.cardinality() == cardinality)
            .ok_or_else(|| ResourceError::UnknownAssociation {
                resource: self.kind.type_name().to_string(),
                association: name.to_string(),
            })?;
        self.client.kind(association.class_name())
    }

    fn wrapped(&self) -> Option<&Map<String, Value>> {
        self.attributes.nested(self.kind.names().singular())
    }

    fn id_segment(&self) -> Option<String> {
        self.id().and_then(id_segment)
    }

    fn ensure_not_destroyed(&self) -> Result<(), ResourceError> {
        if self.destroyed {
            return Err(ResourceError::Destroyed {
                resource: self.kind.type_name().to_string(),
            });
        }
        Ok(())
    }

    fn ensure_supports(&self, operation: Operation) -> Result<(), ResourceError> {
        if self.kind.supports(operation) {
            Ok(())
        } else {
            Err(ResourceError::Unsupported {
                resource: self.kind.type_name().to_string(),
                operation,
            })
        }
    }

    fn failure(
        &self,
        operation: Operation,
        url: &str,
        id: Option<&str>,
        error: HttpError,
    ) -> ResourceError {
        let error = ResourceError::from_http(self.kind.type_name(), id, error);
        tracing::warn!(
            "{} of {} at {} failed ({}): {}",
            operation,
            self.kind.type_name(),
            url,
            error.category(),
            error
        );
        error
    }
}

impl<C: Connection> Clone for Resource<C> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            kind: Arc::clone(&self.kind),
            attributes: self.attributes.clone(),
            path: self.path.clone(),
            destroyed: self.destroyed,
        }
    }
}

impl<C: Connection> fmt::Debug for Resource<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource")
            .field("kind", &self.kind.type_name())
            .field("path", &self.path.join())
            .field("attributes", &self.attributes)
            .field("destroyed", &self.destroyed)
            .finish()
    }
}

impl<C: Connection> fmt::Display for Resource<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.names().singular(), self.attributes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiUrl, ZendeskConfig};
    use crate::rest::{Registry, ResourceKind};
    use serde_json::json;

    fn client() -> ZendeskClient {
        let ticket = ResourceKind::builder("Ticket")
            .has("requester")
            .class_name("User")
            .has("organization")
            .has_many("comments")
            .build()
            .unwrap();
        let registry = Registry::builder()
            .declare(ticket)
            .declare(ResourceKind::builder("User").build().unwrap())
            .declare(ResourceKind::builder("Organization").build().unwrap())
            .declare(ResourceKind::builder("Comment").build().unwrap())
            .wire()
            .unwrap();
        let config = ZendeskConfig::builder()
            .url(ApiUrl::new("https://acme.zendesk.com/api/v2").unwrap())
            .build()
            .unwrap();
        ZendeskClient::with_registry(&config, registry).unwrap()
    }

    fn ticket(attributes: Value) -> Resource {
        client().resource("Ticket", attributes).unwrap()
    }

    #[test]
    fn test_fresh_resource_is_rooted_at_collection() {
        let ticket = ticket(json!({"subject": "Help"}));
        assert_eq!(ticket.path(), "tickets");
        assert!(ticket.is_new_record());
        assert!(!ticket.is_destroyed());
        assert_eq!(ticket.member_path(), None);
    }

    #[test]
    fn test_id_from_flat_and_wrapped_payloads() {
        assert_eq!(ticket(json!({"id": 42})).id(), Some(&json!(42)));
        assert_eq!(ticket(json!({"ticket": {"id": 7}})).id(), Some(&json!(7)));
        assert_eq!(ticket(json!({"id": null})).id(), None);
        assert!(ticket(json!({"id": null})).is_new_record());
    }

    #[test]
    fn test_member_path_uses_id() {
        let ticket = ticket(json!({"ticket": {"id": 7}}));
        assert_eq!(ticket.member_path().as_deref(), Some("tickets/7.json"));
    }

    #[test]
    fn test_lookup_prefers_wrapper_then_top_level() {
        let ticket = ticket(json!({
            "ticket": {"subject": "Inner"},
            "subject": "Outer",
            "status": "open"
        }));
        assert_eq!(ticket.get::<String>("subject").as_deref(), Some("Inner"));
        assert_eq!(ticket.get::<String>("status").as_deref(), Some("open"));
        assert!(ticket.has_key("status"));
        assert!(!ticket.has_key("priority"));
    }

    #[test]
    fn test_set_writes_into_wrapper() {
        let mut ticket = ticket(json!({"ticket": {"id": 7}}));
        ticket.set("status", "solved");

        assert_eq!(
            ticket.attributes().to_value(),
            json!({"ticket": {"id": 7, "status": "solved"}})
        );
        assert_eq!(ticket.remove("status"), Some(json!("solved")));
    }

    #[test]
    fn test_typed_get_is_lenient_and_try_get_is_strict() {
        let ticket = ticket(json!({"id": "not-a-number"}));
        assert_eq!(ticket.get::<u64>("id"), None);
        assert!(matches!(
            ticket.try_get::<u64>("id"),
            Err(ResourceError::Serialization { .. })
        ));
        assert_eq!(ticket.try_get::<u64>("missing").unwrap(), None);
    }

    #[test]
    fn test_display_shows_singular_name_and_attributes() {
        let ticket = ticket(json!({"subject": "Help"}));
        assert_eq!(ticket.to_string(), r#"ticket: {"subject":"Help"}"#);
    }

    #[test]
    fn test_has_one_prefers_embedded_object() {
        let ticket = ticket(json!({
            "requester": {"id": 5, "name": "Ann"},
            "requester_id": 9
        }));
        let requester = ticket.has_one("requester").unwrap().unwrap();

        assert_eq!(requester.kind().type_name(), "User");
        assert_eq!(requester.get::<String>("name").as_deref(), Some("Ann"));
        assert_eq!(requester.path(), "users");
    }

    #[test]
    fn test_has_one_falls_back_to_foreign_key() {
        let ticket = ticket(json!({"organization_id": 12}));
        let organization = ticket.has_one("organization").unwrap().unwrap();

        assert_eq!(organization.id(), Some(&json!(12)));
        assert_eq!(
            organization.member_path().as_deref(),
            Some("organizations/12.json")
        );
    }

    #[test]
    fn test_has_one_without_data_is_none() {
        assert!(ticket(json!({})).has_one("requester").unwrap().is_none());
    }

    #[test]
    fn test_unknown_or_mismatched_association() {
        let ticket = ticket(json!({"id": 1}));
        assert!(matches!(
            ticket.has_one("assignee"),
            Err(ResourceError::UnknownAssociation { .. })
        ));
        assert!(matches!(
            ticket.has_one("comments"),
            Err(ResourceError::UnknownAssociation { .. })
        ));
    }

    #[test]
    fn test_has_many_extends_lineage() {
        let comments = ticket(json!({"id": 123})).has_many("comments").unwrap();
        assert_eq!(comments.path().join(), "tickets/123/comments");

        let comment = comments.build(json!({"body": "Thanks"}));
        assert_eq!(comment.path(), "tickets/123/comments");
        assert_eq!(comment.kind().type_name(), "Comment");
    }

    #[test]
    fn test_has_many_requires_id() {
        assert!(matches!(
            ticket(json!({})).has_many("comments"),
            Err(ResourceError::MissingId { .. })
        ));
    }
}
