//! Product health domain model.
//!
//! # Responsibility
//! - Define the single business record tracked by prodpulse.
//!
//! # Invariants
//! - `product_name` is the natural identifier; it never changes after
//!   creation and is never reused for another product.

use serde::{Deserialize, Serialize};

/// Health record for one product.
///
/// The product name doubles as the primary key; there is no surrogate ID.
/// The score carries no range constraint — the write path persists what
/// the caller reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductHealth {
    /// Natural identifier, unique across all records.
    pub product_name: String,
    /// Latest health score reported for the product.
    pub health_score: i64,
}

impl ProductHealth {
    /// Creates a record from a name and score.
    pub fn new(product_name: impl Into<String>, health_score: i64) -> Self {
        Self {
            product_name: product_name.into(),
            health_score,
        }
    }
}
