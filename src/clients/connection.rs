//! The transport contract consumed by resources.
//!
//! Resources never talk to `reqwest` directly. They go through a
//! [`Connection`], which only has to know how to send one [`HttpRequest`].
//! The verb helpers are provided on top of that and mirror the REST verbs a
//! resource uses: `get` for reads, `post`/`put` with a body-construction
//! callback for writes, and `delete`.

use std::collections::HashMap;

use crate::clients::{HttpError, HttpMethod, HttpRequest, HttpResponse};

/// A transport able to send requests to the Zendesk API.
///
/// Implementations must return [`HttpError::Response`] for non-2xx
/// responses, so that callers only see successful responses in `Ok`.
///
/// # Example
///
/// ```rust,ignore
/// use zendesk_api::clients::Connection;
/// use serde_json::json;
///
/// let response = connection
///     .post("tickets", |req| req.set_body(json!({"subject": "Help"})))
///     .await?;
/// ```
#[allow(async_fn_in_trait)]
pub trait Connection: Send + Sync {
    /// Sends a request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request is invalid, the network fails, or
    /// the server answers with a non-2xx status.
    async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// See [`Connection::request`].
    async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        let mut request = HttpRequest::new(HttpMethod::Get, path);
        request.query = query;
        self.request(request).await
    }

    /// Sends a POST request whose body is filled in by `build`.
    ///
    /// # Errors
    ///
    /// See [`Connection::request`].
    async fn post<F>(&self, path: &str, build: F) -> Result<HttpResponse, HttpError>
    where
        F: FnOnce(&mut HttpRequest),
    {
        let mut request = HttpRequest::new(HttpMethod::Post, path);
        build(&mut request);
        self.request(request).await
    }

    /// Sends a PUT request whose body is filled in by `build`.
    ///
    /// # Errors
    ///
    /// See [`Connection::request`].
    async fn put<F>(&self, path: &str, build: F) -> Result<HttpResponse, HttpError>
    where
        F: FnOnce(&mut HttpRequest),
    {
        let mut request = HttpRequest::new(HttpMethod::Put, path);
        build(&mut request);
        self.request(request).await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// See [`Connection::request`].
    async fn delete(&self, path: &str) -> Result<HttpResponse, HttpError> {
        self.request(HttpRequest::new(HttpMethod::Delete, path))
            .await
    }
}
