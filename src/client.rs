//! The Zendesk client: a connection plus a wired registry.
//!
//! [`ZendeskClient`] is the handle every resource keeps. It is cheap to
//! clone; clones share one connection and one registry.

use std::fmt;
use std::sync::Arc;

use crate::clients::{Connection, HttpClient};
use crate::config::ZendeskConfig;
use crate::rest::resources::default_registry;
use crate::rest::{
    Attributes, Collection, Registry, Resource, ResourceError, ResourceKind, TypedResource,
};

/// Entry point for working with Zendesk resources.
///
/// # Example
///
/// ```rust,ignore
/// use zendesk_api::{ApiToken, ApiUrl, Username, ZendeskClient, ZendeskConfig};
/// use zendesk_api::rest::resources::Ticket;
/// use serde_json::json;
///
/// let config = ZendeskConfig::builder()
///     .url(ApiUrl::from_subdomain("acme")?)
///     .username(Username::new("agent@acme.com")?)
///     .token(ApiToken::new("secret")?)
///     .build()?;
/// let client = ZendeskClient::new(&config)?;
///
/// let mut ticket: Ticket = client.build(json!({"subject": "Help"}))?;
/// ticket.save().await?;
/// println!("Created ticket {:?}", ticket.id());
/// ```
pub struct ZendeskClient<C: Connection = HttpClient> {
    inner: Arc<ClientInner<C>>,
}

struct ClientInner<C> {
    connection: C,
    registry: Registry,
}

// Verify ZendeskClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ZendeskClient>();
};

impl ZendeskClient<HttpClient> {
    /// Creates a client over HTTP with the built-in resource catalogue.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the HTTP client cannot be created.
    pub fn new(config: &ZendeskConfig) -> Result<Self, ResourceError> {
        let registry = default_registry()?;
        Self::with_registry(config, registry)
    }

    /// Creates a client over HTTP with a custom registry.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the HTTP client cannot be created.
    pub fn with_registry(config: &ZendeskConfig, registry: Registry) -> Result<Self, ResourceError> {
        let connection = HttpClient::new(config)?;
        Ok(Self::with_connection(connection, registry))
    }
}

impl<C: Connection> ZendeskClient<C> {
    /// Creates a client over an arbitrary connection.
    #[must_use]
    pub fn with_connection(connection: C, registry: Registry) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                connection,
                registry,
            }),
        }
    }

    /// Returns the connection.
    #[must_use]
    pub fn connection(&self) -> &C {
        &self.inner.connection
    }

    /// Returns the registry.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.inner.registry
    }

    /// Looks up a kind in the registry.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Registry`] if the type is not declared.
    pub fn kind(&self, type_name: &str) -> Result<Arc<ResourceKind>, ResourceError> {
        Ok(self.inner.registry.kind(type_name)?)
    }

    /// Builds a resource rooted at its collection.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Registry`] if the type is not declared.
    pub fn resource(
        &self,
        type_name: &str,
        attributes: impl Into<Attributes>,
    ) -> Result<Resource<C>, ResourceError> {
        self.resource_at(type_name, attributes, Vec::new())
    }

    /// Builds a resource with an explicit path lineage.
    ///
    /// An empty lineage roots the resource at its collection.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Registry`] if the type is not declared.
    pub fn resource_at(
        &self,
        type_name: &str,
        attributes: impl Into<Attributes>,
        path: Vec<String>,
    ) -> Result<Resource<C>, ResourceError> {
        let kind = self.kind(type_name)?;
        Ok(Resource::new(self.clone(), kind, attributes.into(), path))
    }

    /// Builds a typed resource.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Registry`] if `T` is not declared.
    pub fn build<T: TypedResource<C>>(
        &self,
        attributes: impl Into<Attributes>,
    ) -> Result<T, ResourceError> {
        self.resource(T::TYPE_NAME, attributes).map(T::from_resource)
    }

    /// Returns the top-level collection of a type.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Registry`] if the type is not declared.
    pub fn collection(&self, type_name: &str) -> Result<Collection<C>, ResourceError> {
        let kind = self.kind(type_name)?;
        Ok(Collection::rooted(self.clone(), kind))
    }

    /// Fetches one record, `GET <plural>/<id>.json`.
    ///
    /// # Errors
    ///
    /// See [`Collection::find`].
    pub async fn find(
        &self,
        type_name: &str,
        id: impl fmt::Display,
    ) -> Result<Resource<C>, ResourceError> {
        self.collection(type_name)?.find(id).await
    }

    /// Fetches one typed record.
    ///
    /// # Errors
    ///
    /// See [`Collection::find`].
    pub async fn find_as<T: TypedResource<C>>(
        &self,
        id: impl fmt::Display,
    ) -> Result<T, ResourceError> {
        self.find(T::TYPE_NAME, id).await.map(T::from_resource)
    }

    /// Lists the top-level collection of a type, `GET <plural>.json`.
    ///
    /// # Errors
    ///
    /// See [`Collection::fetch`].
    pub async fn all(&self, type_name: &str) -> Result<Vec<Resource<C>>, ResourceError> {
        self.collection(type_name)?.fetch().await
    }

    /// Builds and saves a new record.
    ///
    /// Any `id` in `attributes` is dropped first, so this always POSTs.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Unsupported`] if the kind cannot create, or
    /// any error of [`Resource::save`].
    pub async fn create(
        &self,
        type_name: &str,
        attributes: impl Into<Attributes>,
    ) -> Result<Resource<C>, ResourceError> {
        let mut resource = self.resource(type_name, attributes)?;
        resource.remove("id");
        resource.save().await?;
        Ok(resource)
    }

    /// Deletes a record by id, `DELETE <plural>/<id>.json`.
    ///
    /// # Errors
    ///
    /// See [`Collection::destroy`].
    pub async fn destroy_by_id(
        &self,
        type_name: &str,
        id: impl fmt::Display,
    ) -> Result<(), ResourceError> {
        self.collection(type_name)?.destroy(id).await
    }
}

impl<C: Connection> Clone for ZendeskClient<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: Connection> fmt::Debug for ZendeskClient<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZendeskClient")
            .field("resources", &self.inner.registry.type_names())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiUrl;
    use serde_json::json;

    fn client() -> ZendeskClient {
        let config = ZendeskConfig::builder()
            .url(ApiUrl::new("https://acme.zendesk.com/api/v2").unwrap())
            .build()
            .unwrap();
        ZendeskClient::new(&config).unwrap()
    }

    #[test]
    fn test_new_client_has_default_catalogue() {
        let client = client();
        assert!(client.registry().contains("Ticket"));
        assert!(client.registry().contains("User"));
        assert_eq!(client.connection().base_url(), "https://acme.zendesk.com/api/v2");
    }

    #[test]
    fn test_clones_share_state() {
        let client = client();
        let clone = client.clone();
        assert!(Arc::ptr_eq(&client.inner, &clone.inner));
    }

    #[test]
    fn test_resource_for_unknown_type_fails() {
        let result = client().resource("Macro", json!({}));
        assert!(matches!(result, Err(ResourceError::Registry(_))));
    }

    #[test]
    fn test_resource_at_uses_lineage() {
        let lineage = vec!["tickets".to_string(), "1".to_string(), "comments".to_string()];
        let comment = client().resource_at("Comment", json!({}), lineage).unwrap();
        assert_eq!(comment.path(), "tickets/1/comments");
    }

    #[test]
    fn test_debug_lists_resources() {
        let debug = format!("{:?}", client());
        assert!(debug.contains("Ticket"));
    }
}
