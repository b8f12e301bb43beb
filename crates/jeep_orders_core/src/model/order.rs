//! Order aggregate and the borrowed input bundle used to save one.
//!
//! # Invariants
//! - `Order::order_pk` comes from the store's key generator and is never
//!   reassigned.
//! - `Order::options` matches the `order_options` rows written for the order.

use crate::model::customer::Customer;
use crate::model::jeep::Jeep;
use crate::model::option::JeepOption;
use crate::model::part::{Color, Engine, Tire};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A placed order with every referenced entity resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub order_pk: i64,
    pub customer: Customer,
    pub model: Jeep,
    pub color: Color,
    pub engine: Engine,
    pub tire: Tire,
    /// Selected options, in the order the caller supplied them.
    pub options: Vec<JeepOption>,
    pub price: Decimal,
}

/// Inputs for `JeepOrderRepository::save_order`.
///
/// All references must already carry store-assigned surrogate keys.
#[derive(Debug, Clone, Copy)]
pub struct NewOrder<'a> {
    pub customer: &'a Customer,
    pub jeep: &'a Jeep,
    pub color: &'a Color,
    pub engine: &'a Engine,
    pub tire: &'a Tire,
    pub price: Decimal,
    pub options: &'a [JeepOption],
}

impl NewOrder<'_> {
    /// Builds the saved aggregate from these inputs and the generated key.
    pub fn into_order(self, order_pk: i64) -> Order {
        Order {
            order_pk,
            customer: self.customer.clone(),
            model: self.jeep.clone(),
            color: self.color.clone(),
            engine: self.engine.clone(),
            tire: self.tire.clone(),
            options: self.options.to_vec(),
            price: self.price,
        }
    }
}
