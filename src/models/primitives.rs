//! Primitive types and newtypes for type-safe API interactions.

use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

use crate::Result;

/// A strongly-typed FedEx account number.
///
/// Serialized inside request bodies as `{"value": "<number>"}`.
///
/// # Example
///
/// ```
/// use fedex_rest::AccountNumber;
///
/// let account = AccountNumber::new("740561073");
/// println!("Account: {}", account);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountNumber(String);

impl AccountNumber {
    /// Create a new account number from a string.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the account number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for AccountNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for AccountNumber {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for AccountNumber {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<u64> for AccountNumber {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

#[derive(Serialize, Deserialize)]
struct AccountNumberValue {
    value: String,
}

impl Serialize for AccountNumber {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        AccountNumberValue {
            value: self.0.clone(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AccountNumber {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        AccountNumberValue::deserialize(deserializer).map(|v| Self(v.value))
    }
}

/// Environment configuration for the FedEx API.
///
/// Determines which API host requests go to.
///
/// # Example
///
/// ```
/// use fedex_rest::Environment;
///
/// let env = Environment::Sandbox;
/// println!("API URL: {}", env.api_base_url());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Environment {
    /// Production environment - real shipments, billed to the account.
    Production,
    /// Sandbox environment for integration testing.
    #[default]
    Sandbox,
    /// Any other host, e.g. a gateway or a local mock server.
    Custom(Url),
}

impl Environment {
    /// Get the base URL for REST API requests.
    pub fn api_base_url(&self) -> &str {
        match self {
            Environment::Production => "https://apis.fedex.com",
            Environment::Sandbox => "https://apis-sandbox.fedex.com",
            Environment::Custom(url) => url.as_str(),
        }
    }

    /// Resolve an endpoint path against the base URL.
    ///
    /// Any path prefix on a custom base URL is kept.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        let mut base = Url::parse(self.api_base_url())?;
        if !base.path().ends_with('/') {
            let with_slash = format!("{}/", base.path());
            base.set_path(&with_slash);
        }
        Ok(base.join(path.trim_start_matches('/'))?)
    }

    /// Returns `true` if this is the production environment.
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Production => write!(f, "production"),
            Environment::Sandbox => write!(f, "sandbox"),
            Environment::Custom(url) => write!(f, "custom ({})", url),
        }
    }
}
