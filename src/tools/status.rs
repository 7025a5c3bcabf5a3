//! Unit Converter Status Tool
//!
//! Provides runtime status information about the converter service.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// Conversion usage instructions for AI assistants
pub const CONVERSION_INSTRUCTIONS: &str = r#"
# Unit Converter Instructions

This guide explains how to convert values using the unitconv tools.

## Overview

The converter supports three fixed categories, each pivoted through a base
unit:

| Category | Units | Base Unit |
|----------|-------|-----------|
| length | Centimeter, Kilometer, Inch, Foot, Yard, Mile | Centimeter |
| weight | Gram, Kilogram, Pound, Ounce, Ton | Gram |
| temperature | Celsius, Kelvin, Fahrenheit | Celsius |

Conversions only work within a single category. Asking for Inch to Kilogram
is an error, not zero.

## Converting a Value

```
convert_value(
  category: "length",
  value: "100",
  source_unit: "Centimeter",
  destination_unit: "Inch"
)
```

Returns the numeric result, the destination unit's display code, and a
formatted display line:

```json
{
  "category": "length",
  "input_value": 100.0,
  "source_unit": "Centimeter",
  "destination_unit": "Inch",
  "value": 39.37007874015748,
  "unit_code": "in",
  "display": "Result: 39.37008 in"
}
```

Notes:
- `value` is passed as a string exactly as the user entered it. A blank
  string returns "Please enter a value"; text that is not a number returns
  "Invalid number format". Pass the raw entry through rather than
  pre-validating it.
- Unit names are matched case-insensitively, and the short display codes
  (cm, km, in, ft, yd, mi, g, kg, lb, oz, t, c, k, f) are accepted as
  aliases.
- Temperature is formula-based: Kelvin subtracts 273.15, Fahrenheit maps
  through (value - 32) / 1.8. All other categories are multiplicative.

## Discovering Categories and Units

```
list_categories()
```

Returns every category with its base unit and full unit list.

```
list_units(category: "weight")
```

Returns one category's units with display codes. Use these lists to populate
selection menus; the converter rejects names outside the chosen category.

## Display Codes

Centimeter=cm, Kilometer=km, Inch=in, Foot=ft, Yard=yd, Mile=mi,
Gram=g, Kilogram=kg, Pound=lb, Ounce=oz, Ton=t,
Celsius=°C, Fahrenheit=°F, Kelvin=K.

## Quick Reference

| Task | Tool |
|------|------|
| Convert a value | `convert_value` |
| List all categories | `list_categories` |
| List units in a category | `list_units` |
| Service status | `converter_status` |

## Examples

- 1 Mile to Kilometer: 1.60934 km
- 1 Kilogram to Pound: 2.20462 lb
- 0 Celsius to Fahrenheit: 32.00000 °F
- 212 Fahrenheit to Kelvin: 373.15000 K
"#;

/// Counters for conversion activity since startup
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ConversionStats {
    pub performed: u64,
    pub failed: u64,
}

/// Runtime status of the converter service
#[derive(Debug, Clone, Serialize)]
pub struct ConverterStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Conversion activity
    pub conversions: ConversionStats,

    /// Process information
    pub started_at: String,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    started_at: String,
}

impl StatusTracker {
    /// Create a new status tracker
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            started_at: chrono::Local::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
        }
    }

    /// Get the current status
    pub fn get_status(&self, conversions: ConversionStats) -> ConverterStatus {
        let build_info = BuildInfo::current();

        // Get process info
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        ConverterStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            conversions,
            started_at: self.started_at.clone(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}
