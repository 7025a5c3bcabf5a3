//! Two-step conversion algorithm
//!
//! Every conversion pivots through the category's base unit: the value is
//! first expressed in the base unit, then re-expressed in the destination
//! unit. The pivot is exact for the linear categories and correct for
//! temperature because Celsius is used consistently as the intermediate.

use thiserror::Error;

use crate::models::Category;

use super::units;

/// Conversion error types
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConvertError {
    /// The unit name is not a member of the category's unit set. The fixed
    /// catalogs only ever offer valid names, so hitting this indicates a
    /// caller bug rather than a user mistake.
    #[error("Invalid {category} unit: {unit}")]
    UnknownUnit { category: Category, unit: String },
}

/// Result type for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;

fn unknown_unit(category: Category, unit: &str) -> ConvertError {
    ConvertError::UnknownUnit {
        category,
        unit: unit.trim().to_string(),
    }
}

/// Convert a value expressed in `source_unit` to the category's base unit
pub fn to_base_unit(category: Category, value: f64, source_unit: &str) -> ConvertResult<f64> {
    let converted = match category {
        Category::Length => units::cm_per_unit(source_unit).map(|factor| value * factor),
        Category::Weight => units::grams_per_unit(source_unit).map(|factor| value * factor),
        Category::Temperature => units::celsius_from_unit(value, source_unit),
    };

    converted.ok_or_else(|| unknown_unit(category, source_unit))
}

/// Convert a base-unit value to `destination_unit`
pub fn from_base_unit(category: Category, value: f64, destination_unit: &str) -> ConvertResult<f64> {
    let converted = match category {
        Category::Length => units::cm_per_unit(destination_unit).map(|factor| value / factor),
        Category::Weight => units::grams_per_unit(destination_unit).map(|factor| value / factor),
        Category::Temperature => units::celsius_to_unit(value, destination_unit),
    };

    converted.ok_or_else(|| unknown_unit(category, destination_unit))
}

/// Convert a value between two units of the same category
pub fn convert(
    category: Category,
    value: f64,
    source_unit: &str,
    destination_unit: &str,
) -> ConvertResult<f64> {
    let base = to_base_unit(category, value, source_unit)?;
    from_base_unit(category, base, destination_unit)
}
