//! Error types for the Zendesk API SDK.
//!
//! This module contains the configuration error type. Transport errors live in
//! [`crate::clients`] and resource errors in [`crate::rest`].
//!
//! # Example
//!
//! ```rust
//! use zendesk_api::{ApiUrl, ConfigError};
//!
//! let result = ApiUrl::new("acme.zendesk.com");
//! assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The API URL is invalid.
    #[error("Invalid API URL '{url}'. Expected format: 'https://<subdomain>.zendesk.com/api/v2'.")]
    InvalidUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Username cannot be empty.
    #[error("Username cannot be empty. Please provide the email address of a Zendesk agent.")]
    EmptyUsername,

    /// API token cannot be empty.
    #[error("API token cannot be empty. Please provide a valid Zendesk API token.")]
    EmptyApiToken,

    /// Password cannot be empty.
    #[error("Password cannot be empty.")]
    EmptyPassword,

    /// Both a token and a password were configured.
    #[error("Cannot authenticate with both an API token and a password. Configure only one.")]
    ConflictingCredentials,

    /// The retry count is out of range.
    #[error("Invalid number of tries: {tries}. At least one try is required.")]
    InvalidTries {
        /// The rejected value.
        tries: u32,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
