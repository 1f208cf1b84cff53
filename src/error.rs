//! Error types for the FedEx REST client.
//!
//! Missing required data is reported before any network call is made.
//! Transport failures from `reqwest` are passed through unchanged so the
//! caller can decide what to do with them; nothing in this crate retries.

use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for FedEx operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all FedEx API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A ship request was prepared without an account number.
    #[error("The account number is required")]
    MissingAccountNumber,

    /// Client credentials or the access token were not provided.
    #[error("Missing auth credentials: {0}")]
    MissingAuthCredentials(&'static str),

    /// Transport-level failure (connect, timeout, TLS, body read).
    ///
    /// A body that arrives but does not decode is [`Error::Json`].
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The API answered with a non-success status
    #[error("API error: status={status}, code={code:?}, message={message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error code from the first entry of the `errors` array
        code: Option<String>,
        /// Human-readable error message
        message: String,
        /// Transaction id assigned by FedEx, if any
        transaction_id: Option<String>,
        /// Raw response body for debugging
        body: Value,
    },

    /// The token exchange was rejected
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// An API call was rejected with 401
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// An encoded label was not valid base64
    #[error("Label decode error: {0}")]
    LabelDecode(#[from] base64::DecodeError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns `true` if this is an authentication-related error.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Error::MissingAuthCredentials(_) | Error::Authentication(_) | Error::Unauthorized(_)
        )
    }

    /// Returns `true` if the request never got a usable answer from the
    /// network (connection refused, timeout, ...).
    ///
    /// # Example
    ///
    /// ```
    /// use fedex_rest::Error;
    ///
    /// fn handle_error(err: Error) {
    ///     if err.is_transport_error() {
    ///         println!("network problem: {err}");
    ///     }
    /// }
    /// ```
    pub fn is_transport_error(&self) -> bool {
        matches!(self, Error::Http(_))
    }

    /// Returns `true` if this error indicates a client-side issue
    /// (missing fields, bad request, etc.).
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 400 && *status < 500,
            Error::MissingAccountNumber
            | Error::MissingAuthCredentials(_)
            | Error::InvalidInput(_)
            | Error::Config(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Create an API error from a FedEx error envelope:
    /// `{"transactionId": "...", "errors": [{"code": "...", "message": "..."}]}`.
    pub(crate) fn from_api_response(status: u16, body: Value) -> Self {
        let first = body
            .get("errors")
            .and_then(|e| e.as_array())
            .and_then(|errors| errors.first());

        let code = first
            .and_then(|e| e.get("code"))
            .and_then(|c| c.as_str())
            .map(String::from);

        let message = first
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
            .unwrap_or("Unknown API error")
            .to_string();

        let transaction_id = body
            .get("transactionId")
            .and_then(|t| t.as_str())
            .map(String::from);

        Error::Api {
            status,
            code,
            message,
            transaction_id,
            body,
        }
    }

    /// First error message of a FedEx error envelope, if present.
    pub(crate) fn envelope_message(body: &Value) -> Option<String> {
        body.get("errors")
            .and_then(|e| e.as_array())
            .and_then(|errors| errors.first())
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
            .map(String::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_account_number_message() {
        assert_eq!(
            Error::MissingAccountNumber.to_string(),
            "The account number is required"
        );
    }

    #[test]
    fn test_error_auth() {
        assert!(Error::MissingAuthCredentials("access token").is_auth_error());
        assert!(Error::Authentication("failed".into()).is_auth_error());
        assert!(!Error::MissingAccountNumber.is_auth_error());
    }

    #[test]
    fn test_client_error_classification() {
        assert!(Error::MissingAccountNumber.is_client_error());
        assert!(Error::InvalidInput("bad".into()).is_client_error());
        assert!(!Error::Config("x".into()).is_server_error());
    }

    #[test]
    fn test_decode_failure_is_not_transport() {
        let err: Error = serde_json::from_slice::<Value>(b"<html>gateway</html>")
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::Json(_)));
        assert!(!err.is_transport_error());
    }

    #[test]
    fn test_from_api_response() {
        let body = serde_json::json!({
            "transactionId": "624deea6-b709-470c-8c39-4b5511281492",
            "errors": [{
                "code": "ACCOUNT.NUMBER.MISMATCH",
                "message": "When payment Type is SENDER, ShippingChargesPayment Payor AccountNumber should match the shipping account number."
            }]
        });

        let err = Error::from_api_response(422, body);
        match err {
            Error::Api {
                status,
                code,
                transaction_id,
                ..
            } => {
                assert_eq!(status, 422);
                assert_eq!(code.as_deref(), Some("ACCOUNT.NUMBER.MISMATCH"));
                assert_eq!(
                    transaction_id.as_deref(),
                    Some("624deea6-b709-470c-8c39-4b5511281492")
                );
            }
            _ => panic!("Expected Api error"),
        }
    }

    #[test]
    fn test_from_api_response_without_envelope() {
        let err = Error::from_api_response(503, serde_json::Value::Null);
        assert!(err.is_server_error());
        assert!(err.to_string().contains("Unknown API error"));
    }
}
