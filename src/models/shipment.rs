//! Ship tag request body and response models.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::{PackagingType, PaymentType, PickupType, ServiceType};
use super::package::Item;
use super::party::Person;
use super::primitives::AccountNumber;
use crate::{Error, Result};

/// JSON body of a create tag call.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateTagBody<'a> {
    pub requested_shipment: RequestedShipment<'a>,
    pub account_number: &'a AccountNumber,
}

/// The `requestedShipment` document.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RequestedShipment<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipper: Option<&'a Person>,
    #[serde(skip_serializing_if = "is_empty")]
    pub recipients: &'a [Person],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_type: Option<PickupType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_type: Option<ServiceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packaging_type: Option<PackagingType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ship_datestamp: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_charges_payment: Option<ShippingChargesPayment>,
    #[serde(skip_serializing_if = "is_empty")]
    pub requested_package_line_items: &'a [Item],
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ShippingChargesPayment {
    pub payment_type: PaymentType,
}

fn is_empty<T>(slice: &&[T]) -> bool {
    slice.is_empty()
}

/// Response to a create tag call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTagResponse {
    /// FedEx-assigned id for this transaction
    #[serde(default)]
    pub transaction_id: String,
    /// Echo of the `x-customer-transaction-id` header, if one was sent
    #[serde(default)]
    pub customer_transaction_id: Option<String>,
    /// Shipment results
    #[serde(default)]
    pub output: CreateTagOutput,
}

impl CreateTagResponse {
    /// Iterate over every encoded label in the response, in document order.
    pub fn encoded_labels(&self) -> impl Iterator<Item = &str> {
        self.output
            .transaction_shipments
            .iter()
            .flat_map(|s| s.piece_responses.iter())
            .flat_map(|p| p.package_documents.iter())
            .filter_map(|d| d.encoded_label.as_deref())
    }

    /// The first encoded label, if any.
    pub fn first_encoded_label(&self) -> Option<&str> {
        self.encoded_labels().next()
    }

    /// Tracking numbers of all pieces.
    pub fn tracking_numbers(&self) -> Vec<&str> {
        self.output
            .transaction_shipments
            .iter()
            .flat_map(|s| s.piece_responses.iter())
            .filter_map(|p| p.tracking_number.as_deref())
            .collect()
    }
}

/// The `output` section of a create tag response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTagOutput {
    /// One entry per shipment
    #[serde(default)]
    pub transaction_shipments: Vec<TransactionShipment>,
    /// Warnings and notes attached to the transaction
    #[serde(default)]
    pub alerts: Vec<Alert>,
}

/// A shipment created by the transaction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionShipment {
    /// Master tracking number for multi-piece shipments
    #[serde(default)]
    pub master_tracking_number: Option<String>,
    /// Service the shipment was booked with
    #[serde(default)]
    pub service_type: Option<String>,
    /// Human-readable service name
    #[serde(default)]
    pub service_name: Option<String>,
    /// Ship date as reported by FedEx
    #[serde(default)]
    pub ship_datestamp: Option<String>,
    /// Per-package results
    #[serde(default)]
    pub piece_responses: Vec<PieceResponse>,
    /// Shipment-level alerts
    #[serde(default)]
    pub alerts: Vec<Alert>,
}

/// Result for a single package.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieceResponse {
    /// Master tracking number
    #[serde(default)]
    pub master_tracking_number: Option<String>,
    /// Tracking number of this piece
    #[serde(default)]
    pub tracking_number: Option<String>,
    /// Estimated delivery date
    #[serde(default)]
    pub delivery_datestamp: Option<String>,
    /// Labels and other documents for this piece
    #[serde(default)]
    pub package_documents: Vec<PackageDocument>,
}

/// A label or other document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageDocument {
    /// Document kind, e.g. `LABEL`
    #[serde(default)]
    pub content_type: Option<String>,
    /// Number of copies to print
    #[serde(default)]
    pub copies_to_print: Option<u32>,
    /// File format, e.g. `PDF` or `PNG`
    #[serde(default)]
    pub doc_type: Option<String>,
    /// Base64 label data
    #[serde(default)]
    pub encoded_label: Option<String>,
    /// Download URL, when the label is returned by reference
    #[serde(default)]
    pub url: Option<String>,
}

impl PackageDocument {
    /// Decode the base64 label into raw document bytes.
    pub fn decode_label(&self) -> Result<Vec<u8>> {
        let encoded = self.encoded_label.as_deref().ok_or_else(|| {
            Error::InvalidInput("package document has no encoded label".to_string())
        })?;
        Ok(STANDARD.decode(encoded.trim())?)
    }
}

/// A warning or note returned by FedEx.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    /// Alert code
    #[serde(default)]
    pub code: Option<String>,
    /// Alert text
    #[serde(default)]
    pub message: Option<String>,
    /// `NOTE` or `WARNING`
    #[serde(default)]
    pub alert_type: Option<String>,
}
