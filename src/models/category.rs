//! Conversion category model
//!
//! A category is a family of mutually convertible units pivoted through a
//! fixed base unit.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Measurement category for a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Distances, pivoted through centimeters
    Length,
    /// Masses, pivoted through grams
    Weight,
    /// Temperatures, pivoted through Celsius (formula-based, no single factor)
    Temperature,
}

impl Category {
    /// All categories, in display order
    pub fn all() -> [Category; 3] {
        [Category::Length, Category::Weight, Category::Temperature]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Weight => "weight",
            Category::Temperature => "temperature",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "length" => Some(Category::Length),
            "weight" | "mass" => Some(Category::Weight),
            "temperature" | "temp" => Some(Category::Temperature),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Weight => "Weight",
            Category::Temperature => "Temperature",
        }
    }

    /// The fixed set of unit names offered for this category
    pub fn units(&self) -> &'static [&'static str] {
        match self {
            Category::Length => &["Centimeter", "Kilometer", "Inch", "Foot", "Yard", "Mile"],
            Category::Weight => &["Gram", "Kilogram", "Pound", "Ounce", "Ton"],
            Category::Temperature => &["Celsius", "Kelvin", "Fahrenheit"],
        }
    }

    /// The base unit every conversion in this category pivots through
    pub fn base_unit(&self) -> &'static str {
        match self {
            Category::Length => "Centimeter",
            Category::Weight => "Gram",
            Category::Temperature => "Celsius",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(Category::from_str("length"), Some(Category::Length));
        assert_eq!(Category::from_str("Length"), Some(Category::Length));
        assert_eq!(Category::from_str("WEIGHT"), Some(Category::Weight));
        assert_eq!(Category::from_str("mass"), Some(Category::Weight));
        assert_eq!(Category::from_str("temperature"), Some(Category::Temperature));
        assert_eq!(Category::from_str("temp"), Some(Category::Temperature));
        assert_eq!(Category::from_str("volume"), None);
    }

    #[test]
    fn test_unit_lists() {
        assert_eq!(Category::Length.units().len(), 6);
        assert_eq!(Category::Weight.units().len(), 5);
        assert_eq!(Category::Temperature.units().len(), 3);
    }

    #[test]
    fn test_base_unit_is_listed() {
        for category in Category::all() {
            assert!(category.units().contains(&category.base_unit()));
        }
    }
}
