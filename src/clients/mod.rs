//! HTTP transport for Zendesk API communication.
//!
//! # Overview
//!
//! - [`Connection`]: The transport contract consumed by resources
//! - [`HttpClient`]: The `reqwest`-backed connection
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`HttpError`]: Unified transport error
//!
//! # Retry Behavior
//!
//! - **429 (Rate Limited)**: Retries using the `Retry-After` header value, or 1 second if not present
//! - **500 (Server Error)**: Retries with a fixed 1-second delay
//! - **Other errors (4xx)**: Returns immediately without retry
//!
//! The default is a single try. Configure retries with
//! [`ZendeskConfigBuilder::tries`](crate::config::ZendeskConfigBuilder::tries)
//! or per request with [`HttpRequestBuilder::tries`].

mod connection;
mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use connection::Connection;
pub use errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
