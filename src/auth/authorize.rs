//! Client-credentials token exchange.

use chrono::{DateTime, Duration, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::client::ClientConfig;
use crate::{Error, Result};

const TOKEN_PATH: &str = "/oauth/token";

/// Environment variable holding the API key.
pub const CLIENT_ID_VAR: &str = "FEDEX_CLIENT_ID";
/// Environment variable holding the secret key.
pub const CLIENT_SECRET_VAR: &str = "FEDEX_CLIENT_SECRET";

/// Exchanges a client id and secret for an access token.
///
/// Every call to [`authorize`](Self::authorize) performs one HTTP request;
/// use a [`Session`](crate::Session) to reuse tokens.
///
/// # Example
///
/// ```no_run
/// use fedex_rest::Authorize;
///
/// # async fn example() -> fedex_rest::Result<()> {
/// let token = Authorize::new()
///     .client_id("l7749d031872cf4b55a7889376f360d045")
///     .client_secret("bd59d91084e8482895d4ae2fb4fb79a3")
///     .authorize()
///     .await?;
/// println!("token expires at {}", token.expires_at);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Default)]
pub struct Authorize {
    client_id: Option<String>,
    client_secret: Option<SecretString>,
    config: ClientConfig,
}

impl Authorize {
    /// Create an authorizer with no credentials and the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read credentials from `FEDEX_CLIENT_ID` and `FEDEX_CLIENT_SECRET`.
    pub fn from_env(config: ClientConfig) -> Result<Self> {
        let client_id = std::env::var(CLIENT_ID_VAR)
            .map_err(|_| Error::Config(format!("{} is not set", CLIENT_ID_VAR)))?;
        let client_secret = std::env::var(CLIENT_SECRET_VAR)
            .map_err(|_| Error::Config(format!("{} is not set", CLIENT_SECRET_VAR)))?;

        Ok(Self::new()
            .client_id(client_id)
            .client_secret(client_secret)
            .with_config(config))
    }

    /// Set the client id (API key).
    pub fn client_id(mut self, id: impl Into<String>) -> Self {
        self.client_id = Some(id.into());
        self
    }

    /// Set the client secret (secret key).
    pub fn client_secret(mut self, secret: impl Into<String>) -> Self {
        self.client_secret = Some(SecretString::from(secret.into()));
        self
    }

    /// Use the given configuration for environment and timeouts.
    pub fn with_config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// The configuration in use.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Exchange the credentials for an access token.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingAuthCredentials`] if the id or secret is missing;
    ///   no request is made in that case.
    /// - [`Error::Authentication`] if FedEx rejects the credentials.
    /// - [`Error::Http`] on transport failure.
    pub async fn authorize(&self) -> Result<AccessToken> {
        let http = self.config.http_client()?;
        self.authorize_with(&http).await
    }

    pub(crate) async fn authorize_with(&self, http: &reqwest::Client) -> Result<AccessToken> {
        let client_id = self
            .client_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or(Error::MissingAuthCredentials("client id is required"))?;
        let client_secret = self
            .client_secret
            .as_ref()
            .map(|s| s.expose_secret())
            .filter(|s| !s.is_empty())
            .ok_or(Error::MissingAuthCredentials("client secret is required"))?;

        let url = self.config.environment.endpoint(TOKEN_PATH)?;
        tracing::debug!(%url, "Requesting access token");

        let response = http
            .post(url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", client_id),
                ("client_secret", client_secret),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body: serde_json::Value = response.json().await.unwrap_or_default();
            let message = Error::envelope_message(&body).unwrap_or_else(|| body.to_string());
            tracing::warn!(status, %message, "Token exchange rejected");
            return Err(Error::Authentication(format!(
                "Token exchange failed ({}): {}",
                status, message
            )));
        }

        let body = response.bytes().await?;
        let token_response: TokenResponse = serde_json::from_slice(&body)?;
        let token = AccessToken::try_from(token_response)?;
        tracing::info!(expires_at = %token.expires_at, "Obtained access token");
        Ok(token)
    }
}

impl std::fmt::Debug for Authorize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authorize")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("config", &self.config)
            .finish()
    }
}

/// A bearer token returned by the token endpoint.
#[derive(Clone)]
pub struct AccessToken {
    /// The bearer credential
    pub access_token: SecretString,
    /// Token type, normally `bearer`
    pub token_type: String,
    /// Lifetime in seconds as reported by FedEx
    pub expires_in: i64,
    /// Granted scope
    pub scope: Option<String>,
    /// Absolute expiry computed at exchange time
    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    /// The raw token string, for passing to a request builder.
    pub fn expose(&self) -> &str {
        self.access_token.expose_secret()
    }

    /// Check if the token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    /// Check if the token will expire within the given buffer period.
    ///
    /// A buffer reaching past the representable date range counts as
    /// expiring.
    pub fn expires_within(&self, buffer: Duration) -> bool {
        Utc::now()
            .checked_add_signed(buffer)
            .map_or(true, |deadline| deadline >= self.expires_at)
    }
}

impl TryFrom<TokenResponse> for AccessToken {
    type Error = Error;

    fn try_from(response: TokenResponse) -> Result<Self> {
        let expires_at = Duration::try_seconds(response.expires_in)
            .and_then(|lifetime| Utc::now().checked_add_signed(lifetime))
            .ok_or_else(|| {
                Error::Authentication(format!(
                    "Token lifetime out of range: expires_in={}",
                    response.expires_in
                ))
            })?;

        Ok(Self {
            expires_at,
            access_token: SecretString::from(response.access_token),
            token_type: response.token_type,
            expires_in: response.expires_in,
            scope: response.scope,
        })
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("access_token", &"[REDACTED]")
            .field("token_type", &self.token_type)
            .field("expires_at", &self.expires_at)
            .field("scope", &self.scope)
            .finish()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    access_token: String,
    #[serde(default = "default_token_type")]
    token_type: String,
    expires_in: i64,
    #[serde(default)]
    scope: Option<String>,
}

fn default_token_type() -> String {
    "bearer".to_string()
}
