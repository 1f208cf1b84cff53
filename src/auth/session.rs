//! Access token lifecycle.

use chrono::{DateTime, Duration, Utc};
use secrecy::SecretString;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::authorize::{AccessToken, Authorize};
use crate::client::TokenPolicy;
use crate::{Error, Result};

/// Hands out access tokens according to a [`TokenPolicy`].
///
/// # Thread Safety
///
/// `Session` is cheap to clone and can be shared across tasks. The cached
/// token sits behind an async `RwLock`, so concurrent callers that find it
/// stale trigger at most one exchange.
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    authorize: Authorize,
    policy: TokenPolicy,
    http: reqwest::Client,
    token: RwLock<Option<AccessToken>>,
}

impl Session {
    /// Create a session. The policy is taken from the authorizer's config.
    ///
    /// No request is made until a token is first needed.
    pub fn new(authorize: Authorize) -> Result<Self> {
        let http = authorize.config().http_client()?;
        Ok(Self::with_http(authorize, http))
    }

    pub(crate) fn with_http(authorize: Authorize, http: reqwest::Client) -> Self {
        let policy = authorize.config().token_policy;
        Self {
            inner: Arc::new(SessionInner {
                authorize,
                policy,
                http,
                token: RwLock::new(None),
            }),
        }
    }

    /// The policy in effect.
    pub fn policy(&self) -> TokenPolicy {
        self.inner.policy
    }

    /// Get a token suitable for the next request.
    ///
    /// With [`TokenPolicy::AlwaysReauthorize`] this always exchanges
    /// credentials. With [`TokenPolicy::ReuseUntilExpiry`] the cached token
    /// is returned until it gets within the refresh buffer of expiry.
    pub async fn access_token(&self) -> Result<SecretString> {
        let buffer = match self.inner.policy {
            TokenPolicy::AlwaysReauthorize => {
                return Ok(self.refresh().await?.access_token);
            }
            TokenPolicy::ReuseUntilExpiry {
                refresh_buffer_secs,
            } => Duration::try_seconds(refresh_buffer_secs).ok_or_else(|| {
                Error::Config(format!(
                    "refresh_buffer_secs out of range: {}",
                    refresh_buffer_secs
                ))
            })?,
        };

        if let Some(token) = self.inner.token.read().await.as_ref() {
            if !token.expires_within(buffer) {
                return Ok(token.access_token.clone());
            }
        }

        let mut slot = self.inner.token.write().await;
        // Another task may have refreshed while we waited for the lock.
        if let Some(token) = slot.as_ref() {
            if !token.expires_within(buffer) {
                return Ok(token.access_token.clone());
            }
        }

        let token = self.inner.authorize.authorize_with(&self.inner.http).await?;
        let secret = token.access_token.clone();
        *slot = Some(token);
        Ok(secret)
    }

    /// Exchange credentials now, replacing any cached token.
    pub async fn refresh(&self) -> Result<AccessToken> {
        let token = self.inner.authorize.authorize_with(&self.inner.http).await?;
        *self.inner.token.write().await = Some(token.clone());
        Ok(token)
    }

    /// Drop the cached token so the next request re-authorizes.
    pub async fn invalidate(&self) {
        self.inner.token.write().await.take();
    }

    /// Expiry of the cached token, if one is held.
    pub async fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.inner.token.read().await.as_ref().map(|t| t.expires_at)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("policy", &self.inner.policy)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}
