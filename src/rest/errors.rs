//! Error types for resource declaration and persistence.
//!
//! - [`RegistryError`]: raised while declaring resource kinds or wiring the
//!   registry. These are programmer errors and surface at startup.
//! - [`ResourceError`]: returned by resource operations (`save`, `destroy`,
//!   association traversal, collection fetches).
//!
//! # Error Handling
//!
//! Transport failures keep the underlying [`HttpError`] and are mapped to
//! semantic variants by status code:
//!
//! - **404**: [`ResourceError::NotFound`]
//! - **422**: [`ResourceError::ValidationFailed`] with the parsed field errors
//! - **Other 4xx/5xx**: [`ResourceError::Http`]
//!
//! Every error reports an [`ErrorCategory`]. Callers that only need a
//! success flag can use `.is_ok()` on the result.
//!
//! # Example
//!
//! ```rust,ignore
//! use zendesk_api::rest::{ErrorCategory, ResourceError};
//!
//! match ticket.save().await {
//!     Ok(()) => println!("Saved ticket {:?}", ticket.id()),
//!     Err(ResourceError::ValidationFailed { errors, .. }) => {
//!         for (field, messages) in errors {
//!             println!("{field}: {messages:?}");
//!         }
//!     }
//!     Err(e) if e.category() == ErrorCategory::Server => println!("Try later: {e}"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;
use thiserror::Error;

use crate::clients::HttpError;
use crate::rest::Operation;

/// Error raised while declaring resource kinds or wiring the registry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The type name is empty or is not an identifier.
    #[error("Invalid resource type name: {name:?}")]
    InvalidTypeName {
        /// The rejected name.
        name: String,
    },

    /// `class_name` was given before any association was declared.
    #[error("{resource} sets class name {class_name} without a preceding association")]
    DanglingClassName {
        /// The resource being declared.
        resource: String,
        /// The class name that had nothing to apply to.
        class_name: String,
    },

    /// Two kinds were declared with the same type name.
    #[error("Resource {type_name} is declared more than once")]
    DuplicateResource {
        /// The duplicated type name.
        type_name: String,
    },

    /// An association targets a type that was never declared.
    #[error("{resource}.{association} refers to undeclared resource {target}")]
    UndeclaredAssociation {
        /// The declaring resource.
        resource: String,
        /// The association name.
        association: String,
        /// The resolved target type name.
        target: String,
    },

    /// A lookup named a type that is not in the registry.
    #[error("Unknown resource type {type_name}")]
    UnknownResource {
        /// The requested type name.
        type_name: String,
    },
}

/// Coarse classification of a [`ResourceError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The operation was rejected before any request was sent.
    Precondition,
    /// The server answered 404.
    NotFound,
    /// The server answered 422.
    Validation,
    /// Any other 4xx response, or a request that failed validation.
    Client,
    /// A 5xx response.
    Server,
    /// The request never got a response.
    Network,
    /// The registry is missing a declaration.
    Configuration,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Precondition => "precondition",
            Self::NotFound => "not_found",
            Self::Validation => "validation",
            Self::Client => "client",
            Self::Server => "server",
            Self::Network => "network",
            Self::Configuration => "configuration",
        };
        f.write_str(name)
    }
}

/// Error type for resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource was destroyed; no further writes are possible.
    #[error("{resource} has been destroyed")]
    Destroyed {
        /// The type name of the resource.
        resource: String,
    },

    /// The operation needs a persisted id and the resource has none.
    #[error("Cannot {operation} {resource} without an id")]
    MissingId {
        /// The type name of the resource.
        resource: String,
        /// The operation being attempted.
        operation: Operation,
    },

    /// The resource kind's capability does not include the operation.
    #[error("{resource} does not support {operation}")]
    Unsupported {
        /// The type name of the resource.
        resource: String,
        /// The operation being attempted.
        operation: Operation,
    },

    /// No association with this name and cardinality was declared.
    #[error("{resource} has no association named {association}")]
    UnknownAssociation {
        /// The type name of the resource.
        resource: String,
        /// The requested association.
        association: String,
    },

    /// No member action with this name was declared.
    #[error("{resource} has no action named {verb}")]
    UnknownVerb {
        /// The type name of the resource.
        resource: String,
        /// The requested action.
        verb: String,
    },

    /// The resource was not found (HTTP 404).
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// The type name of the resource.
        resource: String,
        /// The id that was requested, or `unknown` for collection paths.
        id: String,
        /// The transport error.
        #[source]
        source: HttpError,
    },

    /// The API rejected the write (HTTP 422).
    #[error("Validation failed for {resource}: {errors:?}")]
    ValidationFailed {
        /// The type name of the resource.
        resource: String,
        /// Field names mapped to error messages.
        errors: HashMap<String, Vec<String>>,
        /// The transport error.
        #[source]
        source: HttpError,
    },

    /// Any other transport failure.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A registry lookup failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// An attribute could not be converted to the requested type.
    #[error("Attribute {key} could not be read: {source}")]
    Serialization {
        /// The attribute key.
        key: String,
        /// The conversion error.
        #[source]
        source: serde_json::Error,
    },
}

impl ResourceError {
    /// Maps a transport error to a resource error by status code.
    ///
    /// # Example
    ///
    /// ```rust
    /// use zendesk_api::clients::{HttpError, HttpResponseError};
    /// use zendesk_api::rest::{ErrorCategory, ResourceError};
    /// use serde_json::json;
    ///
    /// let error = ResourceError::from_http(
    ///     "Ticket",
    ///     Some("42"),
    ///     HttpError::Response(HttpResponseError {
    ///         code: 404,
    ///         message: "{}".to_string(),
    ///         body: json!({"error": "RecordNotFound"}),
    ///         error_reference: None,
    ///     }),
    /// );
    /// assert!(matches!(error, ResourceError::NotFound { .. }));
    /// assert_eq!(error.category(), ErrorCategory::NotFound);
    /// ```
    #[must_use]
    pub fn from_http(resource: &str, id: Option<&str>, error: HttpError) -> Self {
        let HttpError::Response(response) = &error else {
            return Self::Http(error);
        };
        match response.code {
            404 => Self::NotFound {
                resource: resource.to_string(),
                id: id.unwrap_or("unknown").to_string(),
                source: error,
            },
            422 => Self::ValidationFailed {
                resource: resource.to_string(),
                errors: parse_validation_errors(&response.body),
                source: error,
            },
            _ => Self::Http(error),
        }
    }

    /// Returns the category of this error.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::Destroyed { .. }
            | Self::MissingId { .. }
            | Self::Unsupported { .. }
            | Self::UnknownAssociation { .. }
            | Self::UnknownVerb { .. }
            | Self::Serialization { .. } => ErrorCategory::Precondition,
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::ValidationFailed { .. } => ErrorCategory::Validation,
            Self::Registry(_) => ErrorCategory::Configuration,
            Self::Http(error) => match error {
                HttpError::Network(_) => ErrorCategory::Network,
                HttpError::InvalidRequest(_) => ErrorCategory::Client,
                HttpError::Response(_) | HttpError::MaxRetries(_) => match error.status() {
                    Some(404) => ErrorCategory::NotFound,
                    Some(422) => ErrorCategory::Validation,
                    Some(code) if code >= 500 => ErrorCategory::Server,
                    _ => ErrorCategory::Client,
                },
            },
        }
    }

    /// Returns the underlying transport error, if the request was sent.
    #[must_use]
    pub const fn transport_error(&self) -> Option<&HttpError> {
        match self {
            Self::NotFound { source, .. } | Self::ValidationFailed { source, .. } => Some(source),
            Self::Http(error) => Some(error),
            _ => None,
        }
    }

    /// Returns the HTTP status code, if the server answered.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.transport_error().and_then(HttpError::status)
    }

    /// Returns the request ID reported by the server, if any.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.transport_error().and_then(HttpError::request_id)
    }

    /// Returns the parsed field errors of a validation failure.
    #[must_use]
    pub const fn validation_errors(&self) -> Option<&HashMap<String, Vec<String>>> {
        match self {
            Self::ValidationFailed { errors, .. } => Some(errors),
            _ => None,
        }
    }
}

/// Parses validation errors from a 422 body.
///
/// Zendesk reports them under `details`, one array of error objects per
/// field:
///
/// ```json
/// {
///   "error": "RecordInvalid",
///   "description": "Record validation errors",
///   "details": {
///     "subject": [{"description": "Subject: cannot be blank", "error": "BlankValue"}]
///   }
/// }
/// ```
///
/// A flat `errors` object or array is accepted too. When neither is present
/// the top-level `description` is reported under `base`.
fn parse_validation_errors(body: &Value) -> HashMap<String, Vec<String>> {
    let mut result = HashMap::new();

    let fields = body
        .get("details")
        .filter(|v| v.is_object())
        .or_else(|| body.get("errors"));

    match fields {
        Some(Value::Object(map)) => {
            for (field, messages) in map {
                let messages = match messages {
                    Value::Array(items) => items.iter().filter_map(message_text).collect(),
                    other => message_text(other).into_iter().collect(),
                };
                result.insert(field.clone(), messages);
            }
        }
        Some(Value::Array(items)) => {
            let messages: Vec<String> = items.iter().filter_map(message_text).collect();
            if !messages.is_empty() {
                result.insert("base".to_string(), messages);
            }
        }
        Some(Value::String(message)) => {
            result.insert("base".to_string(), vec![message.clone()]);
        }
        _ => {}
    }

    if result.is_empty() {
        if let Some(description) = body.get("description").and_then(Value::as_str) {
            result.insert("base".to_string(), vec![description.to_string()]);
        }
    }

    result
}

fn message_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Object(map) => map
            .get("description")
            .or_else(|| map.get("error"))
            .and_then(Value::as_str)
            .map(ToString::to_string),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}
