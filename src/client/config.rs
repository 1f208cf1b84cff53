//! Client configuration options.

use std::time::Duration;

use crate::Environment;

/// Configuration shared by the authorizer, request builders and
/// [`FedexClient`](crate::FedexClient).
///
/// # Example
///
/// ```
/// use fedex_rest::{ClientConfig, Environment};
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_environment(Environment::Production)
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API host to talk to
    pub environment: Environment,
    /// Request timeout
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
    /// Value of the `X-locale` header
    pub locale: String,
    /// Whether access tokens are reused between requests
    pub token_policy: TokenPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            timeout: Duration::from_secs(30),
            user_agent: format!("fedex-rest/{} (Rust)", env!("CARGO_PKG_VERSION")),
            locale: "en_US".to_string(),
            token_policy: TokenPolicy::default(),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API environment.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the `X-locale` header.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Set the token reuse policy.
    pub fn with_token_policy(mut self, policy: TokenPolicy) -> Self {
        self.token_policy = policy;
        self
    }

    /// Build an HTTP client honoring the timeout and user agent.
    pub(crate) fn http_client(&self) -> crate::Result<reqwest::Client> {
        Ok(reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .build()?)
    }
}

/// When a [`Session`](crate::Session) goes back to the token endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenPolicy {
    /// Exchange credentials for a fresh token before every request.
    AlwaysReauthorize,
    /// Keep the token until it is within `refresh_buffer_secs` of expiry.
    ReuseUntilExpiry {
        /// Seconds before expiry at which the token is replaced
        refresh_buffer_secs: i64,
    },
}

impl Default for TokenPolicy {
    fn default() -> Self {
        TokenPolicy::ReuseUntilExpiry {
            refresh_buffer_secs: 60,
        }
    }
}
