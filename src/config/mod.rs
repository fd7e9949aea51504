//! Configuration types for the Zendesk API SDK.
//!
//! # Overview
//!
//! - [`ZendeskConfig`]: The configuration used to build an
//!   [`HttpClient`](crate::clients::HttpClient)
//! - [`ZendeskConfigBuilder`]: A builder for constructing [`ZendeskConfig`] instances
//! - [`ApiUrl`]: A validated API base URL
//! - [`Username`], [`ApiToken`], [`Password`]: Validated credentials
//!
//! # Example
//!
//! ```rust
//! use zendesk_api::{ZendeskConfig, ApiUrl, Username, ApiToken};
//!
//! let config = ZendeskConfig::builder()
//!     .url(ApiUrl::from_subdomain("acme").unwrap())
//!     .username(Username::new("agent@acme.com").unwrap())
//!     .token(ApiToken::new("api-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert!(config.authorization().is_some());
//! ```

mod newtypes;

pub use newtypes::{ApiToken, ApiUrl, Password, Username};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::ConfigError;

/// Credentials used to sign every request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Credentials {
    /// `<username>/token:<token>` basic authentication.
    Token(Username, ApiToken),
    /// `<username>:<password>` basic authentication.
    Password(Username, Password),
}

impl Credentials {
    /// Returns the value of the `Authorization` header for these credentials.
    #[must_use]
    pub fn authorization(&self) -> String {
        let raw = match self {
            Self::Token(user, token) => format!("{}/token:{}", user.as_ref(), token.as_ref()),
            Self::Password(user, password) => format!("{}:{}", user.as_ref(), password.as_ref()),
        };
        format!("Basic {}", STANDARD.encode(raw))
    }
}

/// Configuration for the Zendesk API SDK.
///
/// # Thread Safety
///
/// `ZendeskConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct ZendeskConfig {
    url: ApiUrl,
    credentials: Option<Credentials>,
    user_agent_prefix: Option<String>,
    tries: u32,
}

impl ZendeskConfig {
    /// Creates a new builder for constructing a `ZendeskConfig`.
    #[must_use]
    pub fn builder() -> ZendeskConfigBuilder {
        ZendeskConfigBuilder::new()
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn url(&self) -> &ApiUrl {
        &self.url
    }

    /// Returns the configured credentials, if any.
    #[must_use]
    pub const fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Returns the `Authorization` header value, if credentials are configured.
    #[must_use]
    pub fn authorization(&self) -> Option<String> {
        self.credentials.as_ref().map(Credentials::authorization)
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns how many times a request is attempted on 429 and 500 responses.
    #[must_use]
    pub const fn tries(&self) -> u32 {
        self.tries
    }
}

// Verify ZendeskConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ZendeskConfig>();
};

/// Builder for constructing [`ZendeskConfig`] instances.
///
/// `url` is required. A `username` must be paired with exactly one of
/// `token` or `password`.
///
/// # Defaults
///
/// - `tries`: 1 (no retries)
/// - credentials: none
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct ZendeskConfigBuilder {
    url: Option<ApiUrl>,
    username: Option<Username>,
    token: Option<ApiToken>,
    password: Option<Password>,
    user_agent_prefix: Option<String>,
    tries: Option<u32>,
}

impl ZendeskConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL (required).
    #[must_use]
    pub fn url(mut self, url: ApiUrl) -> Self {
        self.url = Some(url);
        self
    }

    /// Sets the agent username.
    #[must_use]
    pub fn username(mut self, username: Username) -> Self {
        self.username = Some(username);
        self
    }

    /// Authenticates with an API token.
    #[must_use]
    pub fn token(mut self, token: ApiToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Authenticates with a password.
    #[must_use]
    pub fn password(mut self, password: Password) -> Self {
        self.password = Some(password);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets how many times a request is attempted on 429 and 500 responses.
    #[must_use]
    pub const fn tries(mut self, tries: u32) -> Self {
        self.tries = Some(tries);
        self
    }

    /// Builds the [`ZendeskConfig`].
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingRequiredField`] if `url` is not set, or if a
    ///   token or password is set without a username
    /// - [`ConfigError::ConflictingCredentials`] if both token and password are set
    /// - [`ConfigError::InvalidTries`] if `tries` is zero
    pub fn build(self) -> Result<ZendeskConfig, ConfigError> {
        let url = self
            .url
            .ok_or(ConfigError::MissingRequiredField { field: "url" })?;

        let credentials = match (self.username, self.token, self.password) {
            (_, Some(_), Some(_)) => return Err(ConfigError::ConflictingCredentials),
            (Some(user), Some(token), None) => Some(Credentials::Token(user, token)),
            (Some(user), None, Some(password)) => Some(Credentials::Password(user, password)),
            (None, Some(_), None) | (None, None, Some(_)) => {
                return Err(ConfigError::MissingRequiredField { field: "username" })
            }
            (_, None, None) => None,
        };

        let tries = self.tries.unwrap_or(1);
        if tries == 0 {
            return Err(ConfigError::InvalidTries { tries });
        }

        Ok(ZendeskConfig {
            url,
            credentials,
            user_agent_prefix: self.user_agent_prefix,
            tries,
        })
    }
}
