//! Domain records for the jeep ordering catalog and placed orders.
//!
//! # Responsibility
//! - Define the reference entities looked up by natural identifier.
//! - Define the `Order` aggregate assembled by the repository on save.
//!
//! # Invariants
//! - Records are plain values; none of them talks to the store.
//! - Every persisted record carries the store-assigned surrogate key.

pub mod customer;
pub mod jeep;
pub mod option;
pub mod order;
pub mod part;
