//! HTTP client implementation for the FedEx API.

use reqwest::header::HeaderMap;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use url::Url;

use crate::api::ShipService;
use crate::auth::{AccessToken, Authorize, Session};
use crate::{Error, Result};

use super::config::ClientConfig;

/// A fully built HTTP request, ready to send.
///
/// Produced by request builders without touching the network, so it can be
/// inspected, logged or sent through another transport. The `Authorization`
/// header is marked sensitive and is hidden from `Debug` output.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute endpoint URL
    pub url: Url,
    /// Request headers, including authorization
    pub headers: HeaderMap,
    /// JSON body
    pub json: Value,
}

/// The main client for interacting with the FedEx API.
///
/// The client owns one connection pool and one token [`Session`], and
/// hands out service structs for each API area.
///
/// # Example
///
/// ```no_run
/// use fedex_rest::{ClientConfig, FedexClient};
/// use fedex_rest::api::CreateTagRequest;
/// use fedex_rest::models::ServiceType;
///
/// # async fn example() -> fedex_rest::Result<()> {
/// let client = FedexClient::from_credentials(
///     "client-id",
///     "client-secret",
///     ClientConfig::default(),
/// )?;
///
/// let request = CreateTagRequest::new()
///     .account_number("740561073")
///     .service_type(ServiceType::FedexGround);
/// let response = client.ship().create_tag(request).await?;
/// println!("transaction {}", response.transaction_id);
/// # Ok(())
/// # }
/// ```
pub struct FedexClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) session: Session,
    pub(crate) config: ClientConfig,
}

impl FedexClient {
    /// Create a client from an authorizer. Its config applies to every
    /// request the client makes.
    pub fn new(authorize: Authorize) -> Result<Self> {
        let config = authorize.config().clone();
        let http = config.http_client()?;
        let session = Session::with_http(authorize, http.clone());

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                session,
                config,
            }),
        })
    }

    /// Create a client from a client id and secret.
    pub fn from_credentials(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        Self::new(
            Authorize::new()
                .client_id(client_id)
                .client_secret(client_secret)
                .with_config(config),
        )
    }

    /// Create a client from `FEDEX_CLIENT_ID` and `FEDEX_CLIENT_SECRET`.
    pub fn from_env(config: ClientConfig) -> Result<Self> {
        Self::new(Authorize::from_env(config)?)
    }

    /// Get the ship service.
    pub fn ship(&self) -> ShipService {
        ShipService::new(self.inner.clone())
    }

    /// Force a token exchange and cache the result.
    pub async fn authorize(&self) -> Result<AccessToken> {
        self.inner.session.refresh().await
    }

    /// Get a reference to the session.
    pub fn session(&self) -> &Session {
        &self.inner.session
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }
}

impl ClientInner {
    /// Send a prepared request with the shared connection pool.
    ///
    /// A 401 drops the cached token so the next call re-authorizes.
    pub(crate) async fn execute<T: DeserializeOwned>(&self, prepared: PreparedRequest) -> Result<T> {
        let result = execute(&self.http, prepared).await;
        if let Err(Error::Unauthorized(_)) = &result {
            self.session.invalidate().await;
        }
        result
    }
}

/// Send a prepared request and decode the JSON answer.
pub(crate) async fn execute<T: DeserializeOwned>(
    http: &reqwest::Client,
    prepared: PreparedRequest,
) -> Result<T> {
    let response = http
        .request(prepared.method, prepared.url)
        .headers(prepared.headers)
        .json(&prepared.json)
        .send()
        .await?;

    handle_response(response).await
}

async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();

    if status.is_success() {
        let body = response.bytes().await?;
        return Ok(serde_json::from_slice(&body)?);
    }

    let status_code = status.as_u16();
    let body: Value = response.json().await.unwrap_or_default();
    tracing::warn!(status = status_code, "FedEx API returned an error");

    if status_code == 401 {
        let message = Error::envelope_message(&body)
            .unwrap_or_else(|| "Access token rejected".to_string());
        return Err(Error::Unauthorized(message));
    }

    Err(Error::from_api_response(status_code, body))
}

impl Clone for FedexClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for FedexClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FedexClient")
            .field("config", &self.inner.config)
            .field("session", &self.inner.session)
            .finish()
    }
}
