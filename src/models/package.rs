//! Package line items and weights.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};

use super::enums::WeightUnit;

/// A package weight.
///
/// Whole values go on the wire as JSON integers (`1`), fractional values as
/// JSON floats (`1.5`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Weight {
    /// Numeric weight
    #[serde(serialize_with = "serialize_number")]
    pub value: Decimal,
    /// Unit of `value`
    pub units: WeightUnit,
}

impl Weight {
    /// Create a weight.
    pub fn new(value: impl Into<Decimal>, units: WeightUnit) -> Self {
        Self {
            value: value.into(),
            units,
        }
    }

    /// Shorthand for a weight in pounds.
    pub fn pounds(value: impl Into<Decimal>) -> Self {
        Self::new(value, WeightUnit::Lb)
    }

    /// Shorthand for a weight in kilograms.
    pub fn kilograms(value: impl Into<Decimal>) -> Self {
        Self::new(value, WeightUnit::Kg)
    }

    /// Set the numeric value.
    pub fn value(mut self, value: impl Into<Decimal>) -> Self {
        self.value = value.into();
        self
    }

    /// Set the unit.
    pub fn unit(mut self, units: WeightUnit) -> Self {
        self.units = units;
        self
    }
}

fn serialize_number<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract().is_zero() {
        if let Some(whole) = value.to_i64() {
            return serializer.serialize_i64(whole);
        }
    }
    match value.to_f64() {
        Some(float) => serializer.serialize_f64(float),
        None => Err(serde::ser::Error::custom(format!(
            "weight {} is not representable as a JSON number",
            value
        ))),
    }
}

/// A package to ship.
///
/// # Example
///
/// ```
/// use fedex_rest::models::{Item, Weight};
///
/// let item = Item::new("lorem Ipsum").with_weight(Weight::pounds(1));
/// assert_eq!(item.item_description.as_deref(), Some("lorem Ipsum"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Package weight
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,
    /// Free-text description of the contents
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_description: Option<String>,
}

impl Item {
    /// Create an item with a description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            item_description: Some(description.into()),
            weight: None,
        }
    }

    /// Set the description.
    pub fn item_description(mut self, description: impl Into<String>) -> Self {
        self.item_description = Some(description.into());
        self
    }

    /// Set the weight.
    pub fn with_weight(mut self, weight: Weight) -> Self {
        self.weight = Some(weight);
        self
    }
}
