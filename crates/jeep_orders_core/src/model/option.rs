//! Add-on option record and its category.
//!
//! `JeepOption` avoids shadowing `std::option::Option` at use sites.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Option category stored in `options.category`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OptionType {
    Accessory,
    Door,
    Exterior,
    FourWheelDrive,
    Interior,
    Storage,
    Top,
    Wheel,
}

impl OptionType {
    /// Returns the value written to `options.category`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Accessory => "ACCESSORY",
            Self::Door => "DOOR",
            Self::Exterior => "EXTERIOR",
            Self::FourWheelDrive => "FOUR_WHEEL_DRIVE",
            Self::Interior => "INTERIOR",
            Self::Storage => "STORAGE",
            Self::Top => "TOP",
            Self::Wheel => "WHEEL",
        }
    }

    /// Parses the stored form. Unknown values return `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ACCESSORY" => Some(Self::Accessory),
            "DOOR" => Some(Self::Door),
            "EXTERIOR" => Some(Self::Exterior),
            "FOUR_WHEEL_DRIVE" => Some(Self::FourWheelDrive),
            "INTERIOR" => Some(Self::Interior),
            "STORAGE" => Some(Self::Storage),
            "TOP" => Some(Self::Top),
            "WHEEL" => Some(Self::Wheel),
            _ => None,
        }
    }
}

/// Selectable option as stored in `options`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JeepOption {
    pub option_pk: i64,
    pub option_id: String,
    pub category: OptionType,
    pub manufacturer: String,
    pub name: String,
    pub price: Decimal,
}
