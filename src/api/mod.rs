//! API service modules for FedEx endpoints.
//!
//! Each module holds the request builders and the service struct for one
//! FedEx API area.

mod ship;

pub use ship::{CreateTagRequest, ShipService};
