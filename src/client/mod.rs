//! HTTP client and configuration for the FedEx API.
//!
//! [`FedexClient`] is the long-lived entry point: it shares one connection
//! pool and one token session across requests. Request builders such as
//! [`CreateTagRequest`](crate::api::CreateTagRequest) can also be sent on
//! their own with an explicit access token.
//!
//! # Example
//!
//! ```no_run
//! use fedex_rest::{ClientConfig, Environment, FedexClient};
//!
//! # async fn example() -> fedex_rest::Result<()> {
//! let client = FedexClient::from_env(
//!     ClientConfig::default().with_environment(Environment::Sandbox),
//! )?;
//! let token = client.authorize().await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;

pub use config::{ClientConfig, TokenPolicy};
pub use http::{FedexClient, PreparedRequest};
pub(crate) use http::{execute, ClientInner};
