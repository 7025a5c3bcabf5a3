//! Conversion request and result types
//!
//! A request is assembled from user selections at conversion time, computed,
//! and discarded. Nothing outlives a single call.

use serde::{Deserialize, Serialize};

use super::Category;

/// A single conversion call: value expressed in `source_unit`, to be
/// re-expressed in `destination_unit`. Both unit names must belong to
/// `category`'s unit set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub category: Category,
    pub source_unit: String,
    pub destination_unit: String,
    pub value: f64,
}

/// Outcome of a conversion: the numeric result plus the destination unit's
/// short display symbol.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionResult {
    pub value: f64,
    pub unit_code: String,
}
