//! Customer reference record.

use serde::{Deserialize, Serialize};

/// Customer as stored in `customers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Surrogate key.
    pub customer_pk: i64,
    /// Natural identifier used by callers for lookup.
    pub customer_id: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}
