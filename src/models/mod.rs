//! Data models for the FedEx REST API.
//!
//! - [`primitives`] - `AccountNumber` and `Environment`
//! - [`enums`] - service, packaging, pickup, payment and weight unit constants
//! - [`party`] - shippers, recipients and their addresses
//! - [`package`] - line items and weights
//! - [`shipment`] - ship tag responses

pub mod primitives;
pub mod enums;
pub mod party;
pub mod package;
pub mod shipment;

pub use primitives::*;
pub use enums::*;
pub use party::*;
pub use package::*;
pub use shipment::{
    Alert, CreateTagOutput, CreateTagResponse, PackageDocument, PieceResponse,
    TransactionShipment,
};
