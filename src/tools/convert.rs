//! Conversion MCP tools
//!
//! Owns the caller-side steps around the converter core: parsing the raw
//! value string, running the two-step conversion, and formatting the result
//! line for display.

use serde::Serialize;
use thiserror::Error;

use crate::convert::{converter, units, ConvertError};
use crate::models::{Category, ConversionRequest, ConversionResult};

/// Errors in the user-entered value, detected before the converter runs
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter a value")]
    EmptyInput,

    #[error("Invalid number format")]
    InvalidNumberFormat,
}

/// Failure of the full conversion pipeline
///
/// Input errors are user mistakes; convert errors should be unreachable when
/// unit names come from the fixed catalogs and indicate an integration bug.
#[derive(Debug, Clone, Error)]
pub enum ConversionToolError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Convert(#[from] ConvertError),
}

/// Parse the raw value string entered by the user
pub fn parse_value(input: &str) -> Result<f64, InputError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(InputError::EmptyInput);
    }

    trimmed
        .parse::<f64>()
        .map_err(|_| InputError::InvalidNumberFormat)
}

/// Format a conversion result for display, fixed-point with 5 decimal digits
pub fn format_result(value: f64, unit_code: &str) -> String {
    format!("Result: {:.5} {}", value, unit_code)
}

/// Run a conversion request through the base-unit pivot and attach the
/// destination unit's display symbol
pub fn run_conversion(request: &ConversionRequest) -> Result<ConversionResult, ConvertError> {
    let base = converter::to_base_unit(request.category, request.value, &request.source_unit)?;
    let value = converter::from_base_unit(request.category, base, &request.destination_unit)?;

    Ok(ConversionResult {
        value,
        unit_code: units::unit_code(&request.destination_unit).to_string(),
    })
}

/// Response for convert_value
#[derive(Debug, Serialize)]
pub struct ConvertValueResponse {
    pub category: Category,
    pub input_value: f64,
    pub source_unit: String,
    pub destination_unit: String,
    pub value: f64,
    pub unit_code: String,
    /// Reference formatting, e.g. "Result: 39.37008 in"
    pub display: String,
}

/// Full pipeline: parse the raw value, convert, format
pub fn convert_value(
    category: Category,
    raw_value: &str,
    source_unit: &str,
    destination_unit: &str,
) -> Result<ConvertValueResponse, ConversionToolError> {
    let value = parse_value(raw_value)?;

    let request = ConversionRequest {
        category,
        source_unit: source_unit.to_string(),
        destination_unit: destination_unit.to_string(),
        value,
    };
    let result = run_conversion(&request)?;

    tracing::debug!(
        "converted {} {} to {} {} ({})",
        value,
        request.source_unit,
        result.value,
        result.unit_code,
        category,
    );

    Ok(ConvertValueResponse {
        category,
        input_value: value,
        source_unit: request.source_unit,
        destination_unit: request.destination_unit,
        value: result.value,
        display: format_result(result.value, &result.unit_code),
        unit_code: result.unit_code,
    })
}

/// Summary of a unit for catalog responses
#[derive(Debug, Serialize)]
pub struct UnitSummary {
    pub name: String,
    pub code: String,
}

/// Summary of a category with its fixed unit list
#[derive(Debug, Serialize)]
pub struct CategorySummary {
    pub name: String,
    pub display_name: String,
    pub base_unit: String,
    pub units: Vec<UnitSummary>,
}

/// Response for list_categories
#[derive(Debug, Serialize)]
pub struct ListCategoriesResponse {
    pub categories: Vec<CategorySummary>,
    pub total: usize,
}

/// Response for list_units
#[derive(Debug, Serialize)]
pub struct ListUnitsResponse {
    pub category: String,
    pub base_unit: String,
    pub units: Vec<UnitSummary>,
    pub total: usize,
}

fn unit_summaries(category: Category) -> Vec<UnitSummary> {
    category
        .units()
        .iter()
        .map(|name| UnitSummary {
            name: name.to_string(),
            code: units::unit_code(name).to_string(),
        })
        .collect()
}

/// List every category with its base unit and unit catalog
pub fn list_categories() -> ListCategoriesResponse {
    let categories: Vec<CategorySummary> = Category::all()
        .into_iter()
        .map(|category| CategorySummary {
            name: category.as_str().to_string(),
            display_name: category.display_name().to_string(),
            base_unit: category.base_unit().to_string(),
            units: unit_summaries(category),
        })
        .collect();
    let total = categories.len();

    ListCategoriesResponse { categories, total }
}

/// List the fixed unit catalog for one category
pub fn list_units(category: Category) -> ListUnitsResponse {
    let units = unit_summaries(category);
    let total = units.len();

    ListUnitsResponse {
        category: category.as_str().to_string(),
        base_unit: category.base_unit().to_string(),
        units,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("12.5"), Ok(12.5));
        assert_eq!(parse_value("  -40 "), Ok(-40.0));
        assert_eq!(parse_value(""), Err(InputError::EmptyInput));
        assert_eq!(parse_value("   "), Err(InputError::EmptyInput));
        assert_eq!(parse_value("12,5"), Err(InputError::InvalidNumberFormat));
        assert_eq!(parse_value("abc"), Err(InputError::InvalidNumberFormat));
    }

    #[test]
    fn test_input_error_messages() {
        assert_eq!(InputError::EmptyInput.to_string(), "Please enter a value");
        assert_eq!(
            InputError::InvalidNumberFormat.to_string(),
            "Invalid number format"
        );
    }

    #[test]
    fn test_format_result() {
        assert_eq!(format_result(12.345, "cm"), "Result: 12.34500 cm");
        assert_eq!(format_result(32.0, "°F"), "Result: 32.00000 °F");
    }

    #[test]
    fn test_run_conversion_attaches_unit_code() {
        let request = ConversionRequest {
            category: Category::Temperature,
            source_unit: "Celsius".to_string(),
            destination_unit: "Fahrenheit".to_string(),
            value: 0.0,
        };
        let result = run_conversion(&request).unwrap();
        assert!((result.value - 32.0).abs() < 1e-9);
        assert_eq!(result.unit_code, "°F");
    }

    #[test]
    fn test_convert_value_display() {
        let response = convert_value(Category::Length, "100", "Centimeter", "Inch").unwrap();
        assert_eq!(response.display, "Result: 39.37008 in");
        assert_eq!(response.unit_code, "in");
        assert!((response.value - 39.37008).abs() < 1e-5);

        let response = convert_value(Category::Length, "1", "Mile", "Kilometer").unwrap();
        assert_eq!(response.display, "Result: 1.60934 km");
    }

    #[test]
    fn test_convert_value_input_errors() {
        let err = convert_value(Category::Weight, "", "Gram", "Kilogram").unwrap_err();
        assert!(matches!(err, ConversionToolError::Input(InputError::EmptyInput)));

        let err = convert_value(Category::Weight, "1.2.3", "Gram", "Kilogram").unwrap_err();
        assert!(matches!(
            err,
            ConversionToolError::Input(InputError::InvalidNumberFormat)
        ));
    }

    #[test]
    fn test_convert_value_unknown_unit() {
        let err = convert_value(Category::Length, "5", "Parsec", "Inch").unwrap_err();
        assert!(matches!(err, ConversionToolError::Convert(_)));
        assert_eq!(err.to_string(), "Invalid length unit: Parsec");
    }

    #[test]
    fn test_list_categories() {
        let response = list_categories();
        assert_eq!(response.total, 3);
        assert_eq!(response.categories[0].name, "length");
        assert_eq!(response.categories[0].base_unit, "Centimeter");
        assert_eq!(response.categories[0].units.len(), 6);
    }

    #[test]
    fn test_list_units() {
        let response = list_units(Category::Temperature);
        assert_eq!(response.total, 3);
        assert_eq!(response.category, "temperature");
        assert_eq!(response.base_unit, "Celsius");
        let codes: Vec<&str> = response.units.iter().map(|u| u.code.as_str()).collect();
        assert_eq!(codes, vec!["°C", "K", "°F"]);
    }
}
