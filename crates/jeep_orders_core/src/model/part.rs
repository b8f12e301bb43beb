//! Color, engine and tire reference records.
//!
//! # Invariants
//! - `*_id` fields are natural identifiers and unique per table.
//! - `Tire::price` is an exact decimal, never a float.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Paint color as stored in `colors`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub color_pk: i64,
    pub color_id: String,
}

/// Engine as stored in `engines`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engine {
    pub engine_pk: i64,
    pub engine_id: String,
}

/// Tire package as stored in `tires`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tire {
    pub tire_pk: i64,
    pub tire_id: String,
    pub tire_size: String,
    pub manufacturer: String,
    /// Warranty coverage in miles.
    pub warranty_miles: u32,
    pub price: Decimal,
}
