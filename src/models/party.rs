//! Shipper and recipient models.

use serde::{Deserialize, Serialize};

/// A shipper or recipient.
///
/// # Example
///
/// ```
/// use fedex_rest::models::{Address, Person};
///
/// let recipient = Person::new("Lorem")
///     .phone_number("1234567890")
///     .with_address(
///         Address::new()
///             .city("Boston")
///             .street_lines(["line 1", "line 2"])
///             .state_or_province("MA")
///             .country_code("US")
///             .postal_code("55555"),
///     );
/// assert_eq!(recipient.person_name.as_deref(), Some("Lorem"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Contact name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person_name: Option<String>,
    /// Contact phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Postal address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

impl Person {
    /// Create a person with the given contact name.
    pub fn new(person_name: impl Into<String>) -> Self {
        Self {
            person_name: Some(person_name.into()),
            ..Default::default()
        }
    }

    /// Set the contact name.
    pub fn person_name(mut self, name: impl Into<String>) -> Self {
        self.person_name = Some(name.into());
        self
    }

    /// Set the phone number.
    pub fn phone_number(mut self, phone: impl Into<String>) -> Self {
        self.phone_number = Some(phone.into());
        self
    }

    /// Attach a postal address.
    pub fn with_address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }
}

/// A postal address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// City name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Street lines, in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub street_lines: Vec<String>,
    /// Two-letter state or province code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_or_province_code: Option<String>,
    /// Two-letter ISO country code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    /// Postal or ZIP code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

impl Address {
    /// Create an empty address.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the city.
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Replace the street lines.
    pub fn street_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.street_lines = lines.into_iter().map(Into::into).collect();
        self
    }

    /// Set the state or province code.
    pub fn state_or_province(mut self, code: impl Into<String>) -> Self {
        self.state_or_province_code = Some(code.into());
        self
    }

    /// Set the country code.
    pub fn country_code(mut self, code: impl Into<String>) -> Self {
        self.country_code = Some(code.into());
        self
    }

    /// Set the postal code.
    pub fn postal_code(mut self, code: impl Into<String>) -> Self {
        self.postal_code = Some(code.into());
        self
    }
}
