//! Unit conversion module
//!
//! Holds per-category conversion tables and the two-step (to-base/from-base)
//! conversion algorithm.

pub mod converter;
pub mod units;

pub use converter::{convert, from_base_unit, to_base_unit, ConvertError};
pub use units::{celsius_from_unit, celsius_to_unit, cm_per_unit, grams_per_unit, unit_code};
