//! Jeep model catalog record.
//!
//! # Invariants
//! - A model row is identified by `(model_id, trim_level, num_doors)`.
//! - `JeepModel` stored form is the upper snake-case variant name.

use serde::{Deserialize, Serialize};

/// Model line offered in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JeepModel {
    Wrangler,
    Gladiator,
    #[serde(rename = "WRANGLER_4XE")]
    Wrangler4xe,
    GrandCherokee,
    Cherokee,
    Compass,
    Renegade,
}

impl JeepModel {
    /// Returns the value written to `models.model_id`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Wrangler => "WRANGLER",
            Self::Gladiator => "GLADIATOR",
            Self::Wrangler4xe => "WRANGLER_4XE",
            Self::GrandCherokee => "GRAND_CHEROKEE",
            Self::Cherokee => "CHEROKEE",
            Self::Compass => "COMPASS",
            Self::Renegade => "RENEGADE",
        }
    }

    /// Parses the stored form. Unknown values return `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "WRANGLER" => Some(Self::Wrangler),
            "GLADIATOR" => Some(Self::Gladiator),
            "WRANGLER_4XE" => Some(Self::Wrangler4xe),
            "GRAND_CHEROKEE" => Some(Self::GrandCherokee),
            "CHEROKEE" => Some(Self::Cherokee),
            "COMPASS" => Some(Self::Compass),
            "RENEGADE" => Some(Self::Renegade),
            _ => None,
        }
    }
}

/// One orderable model/trim/door configuration from `models`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jeep {
    pub model_pk: i64,
    pub model_id: JeepModel,
    pub trim_level: String,
    pub num_doors: u32,
}
