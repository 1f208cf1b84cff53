//! # fedex-rest
//!
//! An async Rust client for the FedEx REST API.
//!
//! ## Features
//!
//! - **Authentication**: client-credentials token exchange with a
//!   configurable token reuse policy
//! - **Ship tags**: a request builder that serializes shipper, recipients
//!   and packages into FedEx's `requestedShipment` document
//! - **Pure preparation**: inspect the exact HTTP request before sending it
//! - **Typed responses**: transaction ids, tracking numbers and labels
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fedex_rest::Authorize;
//! use fedex_rest::api::CreateTagRequest;
//! use fedex_rest::models::{
//!     Address, Item, PackagingType, Person, PickupType, ServiceType, Weight,
//! };
//!
//! #[tokio::main]
//! async fn main() -> fedex_rest::Result<()> {
//!     let token = Authorize::new()
//!         .client_id("client-id")
//!         .client_secret("client-secret")
//!         .authorize()
//!         .await?;
//!
//!     let response = CreateTagRequest::new()
//!         .access_token(token.expose())
//!         .account_number("740561073")
//!         .service_type(ServiceType::FedexGround)
//!         .packaging_type(PackagingType::YourPackaging)
//!         .pickup_type(PickupType::DropoffAtFedexLocation)
//!         .shipper(Person::new("SHIPPER NAME").phone_number("1234567890"))
//!         .recipients([Person::new("RECIPIENT NAME")
//!             .phone_number("1234567890")
//!             .with_address(Address::new().city("Irving").country_code("US"))])?
//!         .line_items([Item::new("lorem Ipsum").with_weight(Weight::pounds(1))])?
//!         .request()
//!         .await?;
//!
//!     println!("Transaction: {}", response.transaction_id);
//!     Ok(())
//! }
//! ```
//!
//! ## Shared Client
//!
//! ```rust,no_run
//! use fedex_rest::{ClientConfig, FedexClient, TokenPolicy};
//! use fedex_rest::api::CreateTagRequest;
//!
//! # async fn example(request: CreateTagRequest) -> fedex_rest::Result<()> {
//! let client = FedexClient::from_env(
//!     ClientConfig::default().with_token_policy(TokenPolicy::ReuseUntilExpiry {
//!         refresh_buffer_secs: 120,
//!     }),
//! )?;
//! let response = client.ship().create_tag(request).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use error::{Error, Result};
pub use models::{AccountNumber, Environment};
pub use client::{ClientConfig, FedexClient, PreparedRequest, TokenPolicy};
pub use auth::{AccessToken, Authorize, Session};

/// Prelude module for convenient imports.
///
/// ```rust
/// use fedex_rest::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{CreateTagRequest, ShipService};
    pub use crate::auth::{AccessToken, Authorize, Session};
    pub use crate::client::{ClientConfig, FedexClient, PreparedRequest, TokenPolicy};
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        // Primitives
        AccountNumber, Environment,
        // Enums
        PackagingType, PaymentType, PickupType, ServiceType, WeightUnit,
        // Entities
        Address, Item, Person, Weight,
        // Responses
        CreateTagResponse, PackageDocument,
    };
}
