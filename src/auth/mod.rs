//! Authentication against the FedEx OAuth endpoint.
//!
//! FedEx uses the client-credentials grant: an API key and secret key are
//! exchanged for a short-lived bearer token (about an hour).
//!
//! [`Authorize`] performs a single exchange. [`Session`] wraps it and
//! decides, per [`TokenPolicy`](crate::TokenPolicy), whether to reuse a
//! token or fetch a new one.
//!
//! ```no_run
//! use fedex_rest::{Authorize, ClientConfig, Environment};
//!
//! # async fn example() -> fedex_rest::Result<()> {
//! let config = ClientConfig::default().with_environment(Environment::Sandbox);
//! let token = Authorize::from_env(config)?.authorize().await?;
//! # Ok(())
//! # }
//! ```

mod authorize;
mod session;

pub use authorize::{AccessToken, Authorize, CLIENT_ID_VAR, CLIENT_SECRET_VAR};
pub use session::Session;
