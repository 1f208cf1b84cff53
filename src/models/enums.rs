//! Enumeration types for the FedEx Ship API.
//!
//! Every enum serializes to the upper-snake constant FedEx expects on the
//! wire and can be parsed back from it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// FedEx service used to move the shipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceType {
    /// FedEx Ground
    #[serde(rename = "FEDEX_GROUND")]
    FedexGround,
    /// FedEx Home Delivery
    #[serde(rename = "GROUND_HOME_DELIVERY")]
    GroundHomeDelivery,
    /// FedEx 2Day
    #[serde(rename = "FEDEX_2_DAY")]
    Fedex2Day,
    /// FedEx 2Day A.M.
    #[serde(rename = "FEDEX_2_DAY_AM")]
    Fedex2DayAm,
    /// FedEx Express Saver
    #[serde(rename = "FEDEX_EXPRESS_SAVER")]
    FedexExpressSaver,
    /// FedEx Standard Overnight
    #[serde(rename = "STANDARD_OVERNIGHT")]
    StandardOvernight,
    /// FedEx Priority Overnight
    #[serde(rename = "PRIORITY_OVERNIGHT")]
    PriorityOvernight,
    /// FedEx First Overnight
    #[serde(rename = "FIRST_OVERNIGHT")]
    FirstOvernight,
    /// FedEx International Economy
    #[serde(rename = "INTERNATIONAL_ECONOMY")]
    InternationalEconomy,
    /// FedEx International First
    #[serde(rename = "INTERNATIONAL_FIRST")]
    InternationalFirst,
    /// FedEx International Priority
    #[serde(rename = "FEDEX_INTERNATIONAL_PRIORITY")]
    FedexInternationalPriority,
    /// FedEx Ground Economy (formerly SmartPost)
    #[serde(rename = "SMART_POST")]
    SmartPost,
}

impl ServiceType {
    /// The wire constant for this service.
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::FedexGround => "FEDEX_GROUND",
            ServiceType::GroundHomeDelivery => "GROUND_HOME_DELIVERY",
            ServiceType::Fedex2Day => "FEDEX_2_DAY",
            ServiceType::Fedex2DayAm => "FEDEX_2_DAY_AM",
            ServiceType::FedexExpressSaver => "FEDEX_EXPRESS_SAVER",
            ServiceType::StandardOvernight => "STANDARD_OVERNIGHT",
            ServiceType::PriorityOvernight => "PRIORITY_OVERNIGHT",
            ServiceType::FirstOvernight => "FIRST_OVERNIGHT",
            ServiceType::InternationalEconomy => "INTERNATIONAL_ECONOMY",
            ServiceType::InternationalFirst => "INTERNATIONAL_FIRST",
            ServiceType::FedexInternationalPriority => "FEDEX_INTERNATIONAL_PRIORITY",
            ServiceType::SmartPost => "SMART_POST",
        }
    }

    /// Returns `true` for international services.
    pub fn is_international(&self) -> bool {
        matches!(
            self,
            ServiceType::InternationalEconomy
                | ServiceType::InternationalFirst
                | ServiceType::FedexInternationalPriority
        )
    }
}

impl FromStr for ServiceType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FEDEX_GROUND" => Ok(ServiceType::FedexGround),
            "GROUND_HOME_DELIVERY" => Ok(ServiceType::GroundHomeDelivery),
            "FEDEX_2_DAY" => Ok(ServiceType::Fedex2Day),
            "FEDEX_2_DAY_AM" => Ok(ServiceType::Fedex2DayAm),
            "FEDEX_EXPRESS_SAVER" => Ok(ServiceType::FedexExpressSaver),
            "STANDARD_OVERNIGHT" => Ok(ServiceType::StandardOvernight),
            "PRIORITY_OVERNIGHT" => Ok(ServiceType::PriorityOvernight),
            "FIRST_OVERNIGHT" => Ok(ServiceType::FirstOvernight),
            "INTERNATIONAL_ECONOMY" => Ok(ServiceType::InternationalEconomy),
            "INTERNATIONAL_FIRST" => Ok(ServiceType::InternationalFirst),
            "FEDEX_INTERNATIONAL_PRIORITY" => Ok(ServiceType::FedexInternationalPriority),
            "SMART_POST" => Ok(ServiceType::SmartPost),
            other => Err(Error::InvalidInput(format!("Unknown service type: {}", other))),
        }
    }
}

/// Packaging the shipment travels in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PackagingType {
    /// Customer-supplied packaging
    #[serde(rename = "YOUR_PACKAGING")]
    YourPackaging,
    /// FedEx Envelope
    #[serde(rename = "FEDEX_ENVELOPE")]
    FedexEnvelope,
    /// FedEx Box
    #[serde(rename = "FEDEX_BOX")]
    FedexBox,
    /// FedEx Small Box
    #[serde(rename = "FEDEX_SMALL_BOX")]
    FedexSmallBox,
    /// FedEx Medium Box
    #[serde(rename = "FEDEX_MEDIUM_BOX")]
    FedexMediumBox,
    /// FedEx Large Box
    #[serde(rename = "FEDEX_LARGE_BOX")]
    FedexLargeBox,
    /// FedEx Extra Large Box
    #[serde(rename = "FEDEX_EXTRA_LARGE_BOX")]
    FedexExtraLargeBox,
    /// FedEx 10kg Box
    #[serde(rename = "FEDEX_10KG_BOX")]
    Fedex10KgBox,
    /// FedEx 25kg Box
    #[serde(rename = "FEDEX_25KG_BOX")]
    Fedex25KgBox,
    /// FedEx Pak
    #[serde(rename = "FEDEX_PAK")]
    FedexPak,
    /// FedEx Tube
    #[serde(rename = "FEDEX_TUBE")]
    FedexTube,
}

impl PackagingType {
    /// The wire constant for this packaging.
    pub fn as_str(&self) -> &'static str {
        match self {
            PackagingType::YourPackaging => "YOUR_PACKAGING",
            PackagingType::FedexEnvelope => "FEDEX_ENVELOPE",
            PackagingType::FedexBox => "FEDEX_BOX",
            PackagingType::FedexSmallBox => "FEDEX_SMALL_BOX",
            PackagingType::FedexMediumBox => "FEDEX_MEDIUM_BOX",
            PackagingType::FedexLargeBox => "FEDEX_LARGE_BOX",
            PackagingType::FedexExtraLargeBox => "FEDEX_EXTRA_LARGE_BOX",
            PackagingType::Fedex10KgBox => "FEDEX_10KG_BOX",
            PackagingType::Fedex25KgBox => "FEDEX_25KG_BOX",
            PackagingType::FedexPak => "FEDEX_PAK",
            PackagingType::FedexTube => "FEDEX_TUBE",
        }
    }
}

impl FromStr for PackagingType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "YOUR_PACKAGING" => Ok(PackagingType::YourPackaging),
            "FEDEX_ENVELOPE" => Ok(PackagingType::FedexEnvelope),
            "FEDEX_BOX" => Ok(PackagingType::FedexBox),
            "FEDEX_SMALL_BOX" => Ok(PackagingType::FedexSmallBox),
            "FEDEX_MEDIUM_BOX" => Ok(PackagingType::FedexMediumBox),
            "FEDEX_LARGE_BOX" => Ok(PackagingType::FedexLargeBox),
            "FEDEX_EXTRA_LARGE_BOX" => Ok(PackagingType::FedexExtraLargeBox),
            "FEDEX_10KG_BOX" => Ok(PackagingType::Fedex10KgBox),
            "FEDEX_25KG_BOX" => Ok(PackagingType::Fedex25KgBox),
            "FEDEX_PAK" => Ok(PackagingType::FedexPak),
            "FEDEX_TUBE" => Ok(PackagingType::FedexTube),
            other => Err(Error::InvalidInput(format!("Unknown packaging type: {}", other))),
        }
    }
}

/// How the package gets into the FedEx network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PickupType {
    /// Call FedEx to schedule a pickup
    #[serde(rename = "CONTACT_FEDEX_TO_SCHEDULE")]
    ContactFedexToSchedule,
    /// Drop the package off at a FedEx location
    #[serde(rename = "DROPOFF_AT_FEDEX_LOCATION")]
    DropoffAtFedexLocation,
    /// Package goes out with an already scheduled pickup
    #[serde(rename = "USE_SCHEDULED_PICKUP")]
    UseScheduledPickup,
}

impl PickupType {
    /// The wire constant for this pickup type.
    pub fn as_str(&self) -> &'static str {
        match self {
            PickupType::ContactFedexToSchedule => "CONTACT_FEDEX_TO_SCHEDULE",
            PickupType::DropoffAtFedexLocation => "DROPOFF_AT_FEDEX_LOCATION",
            PickupType::UseScheduledPickup => "USE_SCHEDULED_PICKUP",
        }
    }
}

impl FromStr for PickupType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CONTACT_FEDEX_TO_SCHEDULE" => Ok(PickupType::ContactFedexToSchedule),
            "DROPOFF_AT_FEDEX_LOCATION" => Ok(PickupType::DropoffAtFedexLocation),
            "USE_SCHEDULED_PICKUP" => Ok(PickupType::UseScheduledPickup),
            other => Err(Error::InvalidInput(format!("Unknown pickup type: {}", other))),
        }
    }
}

/// Who pays the shipping charges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentType {
    /// The shipper's account is billed
    Sender,
    /// The recipient is billed
    Recipient,
    /// A third-party account is billed
    ThirdParty,
    /// Collect on delivery
    Collect,
}

impl PaymentType {
    /// The wire constant for this payment type.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentType::Sender => "SENDER",
            PaymentType::Recipient => "RECIPIENT",
            PaymentType::ThirdParty => "THIRD_PARTY",
            PaymentType::Collect => "COLLECT",
        }
    }
}

impl FromStr for PaymentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SENDER" => Ok(PaymentType::Sender),
            "RECIPIENT" => Ok(PaymentType::Recipient),
            "THIRD_PARTY" => Ok(PaymentType::ThirdParty),
            "COLLECT" => Ok(PaymentType::Collect),
            other => Err(Error::InvalidInput(format!("Unknown payment type: {}", other))),
        }
    }
}

/// Unit of a package weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum WeightUnit {
    /// Pounds
    #[default]
    #[serde(rename = "LB")]
    Lb,
    /// Kilograms
    #[serde(rename = "KG")]
    Kg,
}

impl WeightUnit {
    /// The wire constant for this unit.
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightUnit::Lb => "LB",
            WeightUnit::Kg => "KG",
        }
    }
}

impl FromStr for WeightUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "LB" => Ok(WeightUnit::Lb),
            "KG" => Ok(WeightUnit::Kg),
            other => Err(Error::InvalidInput(format!("Unknown weight unit: {}", other))),
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PackagingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PickupType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
