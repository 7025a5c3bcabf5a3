//! Unit tables and conversion constants
//!
//! Provides the per-category conversion factors, the temperature pivot
//! formulas, and the display-symbol lookup.

// ============================================================================
// Length Conversion Constants (to centimeters)
// ============================================================================

/// Centimeters per kilometer
pub const CM_PER_KM: f64 = 100000.0;
/// Centimeters per inch
pub const CM_PER_IN: f64 = 2.54;
/// Centimeters per foot
pub const CM_PER_FT: f64 = 30.48;
/// Centimeters per yard
pub const CM_PER_YD: f64 = 91.44;
/// Centimeters per mile
pub const CM_PER_MI: f64 = 160934.0;

// ============================================================================
// Weight Conversion Constants (to grams)
// ============================================================================

/// Grams per kilogram
pub const G_PER_KG: f64 = 1000.0;
/// Grams per pound
pub const G_PER_LB: f64 = 453.592;
/// Grams per ounce
pub const G_PER_OZ: f64 = 28.3495;
/// Grams per ton
pub const G_PER_TON: f64 = 907185.0;

// ============================================================================
// Temperature Constants (Celsius pivot)
// ============================================================================

/// Offset between Kelvin and Celsius
pub const CELSIUS_KELVIN_OFFSET: f64 = 273.15;
/// Freezing point of water in Fahrenheit
pub const FAHRENHEIT_FREEZING: f64 = 32.0;
/// Fahrenheit degrees per Celsius degree
pub const FAHRENHEIT_PER_CELSIUS: f64 = 1.8;

// ============================================================================
// Unit Recognition
// ============================================================================

/// Get the conversion factor to centimeters for a length unit
pub fn cm_per_unit(unit: &str) -> Option<f64> {
    let lower = unit.to_lowercase();
    let trimmed = lower.trim();

    match trimmed {
        "centimeter" | "centimeters" | "cm" => Some(1.0),
        "kilometer" | "kilometers" | "km" => Some(CM_PER_KM),
        "inch" | "inches" | "in" => Some(CM_PER_IN),
        "foot" | "feet" | "ft" => Some(CM_PER_FT),
        "yard" | "yards" | "yd" => Some(CM_PER_YD),
        "mile" | "miles" | "mi" => Some(CM_PER_MI),
        _ => None,
    }
}

/// Get the conversion factor to grams for a weight unit
pub fn grams_per_unit(unit: &str) -> Option<f64> {
    let lower = unit.to_lowercase();
    let trimmed = lower.trim();

    match trimmed {
        "gram" | "grams" | "g" => Some(1.0),
        "kilogram" | "kilograms" | "kg" => Some(G_PER_KG),
        "pound" | "pounds" | "lb" | "lbs" => Some(G_PER_LB),
        "ounce" | "ounces" | "oz" => Some(G_PER_OZ),
        "ton" | "tons" | "t" => Some(G_PER_TON),
        _ => None,
    }
}

/// Convert a temperature in the given unit to Celsius
///
/// Temperature has no single factor to the base unit; each unit carries its
/// own formula.
pub fn celsius_from_unit(value: f64, unit: &str) -> Option<f64> {
    let lower = unit.to_lowercase();
    let trimmed = lower.trim();

    match trimmed {
        "celsius" | "°c" | "c" => Some(value),
        "kelvin" | "k" => Some(value - CELSIUS_KELVIN_OFFSET),
        "fahrenheit" | "°f" | "f" => Some((value - FAHRENHEIT_FREEZING) / FAHRENHEIT_PER_CELSIUS),
        _ => None,
    }
}

/// Convert a temperature in Celsius to the given unit
pub fn celsius_to_unit(value: f64, unit: &str) -> Option<f64> {
    let lower = unit.to_lowercase();
    let trimmed = lower.trim();

    match trimmed {
        "celsius" | "°c" | "c" => Some(value),
        "kelvin" | "k" => Some(value + CELSIUS_KELVIN_OFFSET),
        "fahrenheit" | "°f" | "f" => Some((value * FAHRENHEIT_PER_CELSIUS) + FAHRENHEIT_FREEZING),
        _ => None,
    }
}

/// Get the short display symbol for a unit name
///
/// Unknown names pass through unchanged; this is a display fallback, not a
/// validation boundary.
pub fn unit_code(unit: &str) -> &str {
    let lower = unit.to_lowercase();

    match lower.trim() {
        "centimeter" | "centimeters" => "cm",
        "kilometer" | "kilometers" => "km",
        "inch" | "inches" => "in",
        "foot" | "feet" => "ft",
        "yard" | "yards" => "yd",
        "mile" | "miles" => "mi",

        "gram" | "grams" => "g",
        "kilogram" | "kilograms" => "kg",
        "pound" | "pounds" | "lbs" => "lb",
        "ounce" | "ounces" => "oz",
        "ton" | "tons" => "t",

        "celsius" => "°C",
        "fahrenheit" => "°F",
        "kelvin" => "K",

        _ => unit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cm_per_unit() {
        assert_eq!(cm_per_unit("Centimeter"), Some(1.0));
        assert_eq!(cm_per_unit("Kilometer"), Some(CM_PER_KM));
        assert_eq!(cm_per_unit("inch"), Some(CM_PER_IN));
        assert_eq!(cm_per_unit("ft"), Some(CM_PER_FT));
        assert_eq!(cm_per_unit("yards"), Some(CM_PER_YD));
        assert_eq!(cm_per_unit("Mile"), Some(CM_PER_MI));
        // Weight names are not length units
        assert_eq!(cm_per_unit("Gram"), None);
        assert_eq!(cm_per_unit("Parsec"), None);
    }

    #[test]
    fn test_grams_per_unit() {
        assert_eq!(grams_per_unit("Gram"), Some(1.0));
        assert_eq!(grams_per_unit("kg"), Some(G_PER_KG));
        assert_eq!(grams_per_unit("Pound"), Some(G_PER_LB));
        assert_eq!(grams_per_unit("lbs"), Some(G_PER_LB));
        assert_eq!(grams_per_unit("Ounce"), Some(G_PER_OZ));
        assert_eq!(grams_per_unit("Ton"), Some(G_PER_TON));
        assert_eq!(grams_per_unit("Inch"), None);
    }

    #[test]
    fn test_celsius_from_unit() {
        assert_eq!(celsius_from_unit(25.0, "Celsius"), Some(25.0));
        assert_eq!(celsius_from_unit(273.15, "Kelvin"), Some(0.0));
        let c = celsius_from_unit(212.0, "Fahrenheit").unwrap();
        assert!((c - 100.0).abs() < 1e-9);
        assert_eq!(celsius_from_unit(25.0, "Rankine"), None);
    }

    #[test]
    fn test_celsius_to_unit() {
        assert_eq!(celsius_to_unit(25.0, "Celsius"), Some(25.0));
        assert_eq!(celsius_to_unit(0.0, "Kelvin"), Some(273.15));
        assert_eq!(celsius_to_unit(0.0, "Fahrenheit"), Some(32.0));
        assert_eq!(celsius_to_unit(25.0, "Rankine"), None);
    }

    #[test]
    fn test_unit_code() {
        assert_eq!(unit_code("Centimeter"), "cm");
        assert_eq!(unit_code("Mile"), "mi");
        assert_eq!(unit_code("Kilogram"), "kg");
        assert_eq!(unit_code("Ton"), "t");
        assert_eq!(unit_code("Celsius"), "°C");
        assert_eq!(unit_code("Fahrenheit"), "°F");
        assert_eq!(unit_code("Kelvin"), "K");
    }

    #[test]
    fn test_unit_code_passes_through_unknown_names() {
        assert_eq!(unit_code("Bogus"), "Bogus");
        assert_eq!(unit_code(""), "");
    }
}
