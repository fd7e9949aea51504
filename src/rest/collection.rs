//! Collections of resources under one path.
//!
//! A [`Collection`] is either a top-level collection (`tickets`) or one
//! reached through a `has_many` association (`tickets/123/comments`). It
//! builds new records that inherit its path and performs the read
//! operations of its kind.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::client::ZendeskClient;
use crate::clients::{Connection, HttpClient, HttpMethod};
use crate::rest::{Attributes, Operation, Resource, ResourceError, ResourceKind, ResourcePath};

/// A handle to the records of one kind under one path.
pub struct Collection<C: Connection = HttpClient> {
    client: ZendeskClient<C>,
    kind: Arc<ResourceKind>,
    path: ResourcePath,
}

impl<C: Connection> Collection<C> {
    /// Creates a collection at an explicit path.
    #[must_use]
    pub const fn new(client: ZendeskClient<C>, kind: Arc<ResourceKind>, path: ResourcePath) -> Self {
        Self { client, kind, path }
    }

    /// Creates the top-level collection of `kind`.
    #[must_use]
    pub fn rooted(client: ZendeskClient<C>, kind: Arc<ResourceKind>) -> Self {
        let path = ResourcePath::collection(kind.names().plural());
        Self::new(client, kind, path)
    }

    /// The collection path.
    #[must_use]
    pub const fn path(&self) -> &ResourcePath {
        &self.path
    }

    /// The kind of the records.
    #[must_use]
    pub fn kind(&self) -> &ResourceKind {
        &self.kind
    }

    /// Builds a transient record under this path.
    #[must_use]
    pub fn build(&self, attributes: impl Into<Attributes>) -> Resource<C> {
        Resource::new(
            self.client.clone(),
            Arc::clone(&self.kind),
            attributes.into(),
            self.path.segments().to_vec(),
        )
    }

    /// Lists the records, `GET <path>.json`.
    ///
    /// Records are read from the array under the plural name, or from a
    /// bare array body. Any other body yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Unsupported`] if the kind cannot list, or
    /// the mapped transport error.
    pub async fn fetch(&self) -> Result<Vec<Resource<C>>, ResourceError> {
        self.ensure_supports(Operation::All)?;
        let url = self.path.listing();
        tracing::debug!("{} {} ({})", HttpMethod::Get, url, self.kind.type_name());

        let response = self
            .client
            .connection()
            .get(&url, None)
            .await
            .map_err(|error| ResourceError::from_http(self.kind.type_name(), None, error))?;

        let records = match response.body {
            Value::Array(items) => items,
            Value::Object(mut map) => match map.remove(self.kind.names().plural()) {
                Some(Value::Array(items)) => items,
                _ => Vec::new(),
            },
            _ => Vec::new(),
        };

        Ok(records.into_iter().map(|record| self.build(record)).collect())
    }

    /// Fetches one record, `GET <path>/<id>.json`.
    ///
    /// The body is kept as returned, so a `{"ticket": {...}}` response
    /// yields a wrapped store.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Unsupported`] if the kind cannot find,
    /// [`ResourceError::NotFound`] on 404, or the mapped transport error.
    pub async fn find(&self, id: impl fmt::Display) -> Result<Resource<C>, ResourceError> {
        self.ensure_supports(Operation::Find)?;
        let id = id.to_string();
        let url = self.path.member(&id);
        tracing::debug!("{} {} ({})", HttpMethod::Get, url, self.kind.type_name());

        let response = self
            .client
            .connection()
            .get(&url, None)
            .await
            .map_err(|error| ResourceError::from_http(self.kind.type_name(), Some(&id), error))?;

        Ok(self.build(response.body))
    }

    /// Deletes a record by id, `DELETE <path>/<id>.json`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Unsupported`] if the kind cannot destroy, or
    /// the mapped transport error.
    pub async fn destroy(&self, id: impl fmt::Display) -> Result<(), ResourceError> {
        self.ensure_supports(Operation::Destroy)?;
        let id = id.to_string();
        let url = self.path.member(&id);
        tracing::debug!("{} {} ({})", HttpMethod::Delete, url, self.kind.type_name());

        self.client
            .connection()
            .delete(&url)
            .await
            .map(|_| ())
            .map_err(|error| ResourceError::from_http(self.kind.type_name(), Some(&id), error))
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
}

impl<C: Connection> Clone for Collection<C> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            kind: Arc::clone(&self.kind),
            path: self.path.clone(),
        }
    }
}

impl<C: Connection> fmt::Debug for Collection<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection")
            .field("kind", &self.kind.type_name())
            .field("path", &self.path.join())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiUrl, ZendeskConfig};
    use serde_json::json;

    fn client() -> ZendeskClient {
        let config = ZendeskConfig::builder()
            .url(ApiUrl::new("https://acme.zendesk.com/api/v2").unwrap())
            .build()
            .unwrap();
        ZendeskClient::new(&config).unwrap()
    }

    #[test]
    fn test_rooted_collection_path() {
        let users = client().collection("User").unwrap();
        assert_eq!(users.path().join(), "users");
        assert_eq!(users.path().listing(), "users.json");
    }

    #[test]
    fn test_build_inherits_path() {
        let client = client();
        let kind = client.kind("Comment").unwrap();
        let path = ResourcePath::collection("tickets").nested("9", "comments");
        let comments = Collection::new(client, kind, path);

        let comment = comments.build(json!({"body": "Hi"}));
        assert!(comment.is_new_record());
        assert_eq!(comment.path(), "tickets/9/comments");
    }

    #[tokio::test]
    async fn test_read_only_kind_rejects_destroy_without_request() {
        let activities = client().collection("Activity").unwrap();
        let result = activities.destroy(1).await;
        assert!(matches!(
            result,
            Err(ResourceError::Unsupported {
                operation: Operation::Destroy,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_create_only_kind_rejects_listing() {
        let uploads = client().collection("Upload").unwrap();
        assert!(matches!(
            uploads.fetch().await,
            Err(ResourceError::Unsupported { .. })
        ));
    }
}
