//! Unit Converter MCP Server Implementation
//!
//! Implements the MCP server with the conversion tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::models::Category;
use crate::tools::convert::{self, ConversionToolError};
use crate::tools::status::{ConversionStats, StatusTracker, CONVERSION_INSTRUCTIONS};

/// Unit Converter MCP Service
#[derive(Clone)]
pub struct ConverterService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    tool_router: ToolRouter<ConverterService>,
    /// Conversion counters since startup
    stats: Arc<std::sync::Mutex<ConversionStats>>,
}

impl ConverterService {
    pub fn new() -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new())),
            tool_router: Self::tool_router(),
            stats: Arc::new(std::sync::Mutex::new(ConversionStats::default())),
        }
    }
}

impl Default for ConverterService {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertValueParams {
    /// Category: length, weight, or temperature
    pub category: String,
    /// The value to convert, exactly as the user entered it (e.g. "12.5")
    pub value: String,
    /// Unit the value is expressed in (e.g. "Centimeter")
    pub source_unit: String,
    /// Unit to convert to (e.g. "Inch")
    pub destination_unit: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListUnitsParams {
    /// Category: length, weight, or temperature
    pub category: String,
}

fn parse_category(name: &str) -> Result<Category, McpError> {
    Category::from_str(name)
        .ok_or_else(|| McpError::invalid_params(format!("Unknown category: {}", name), None))
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl ConverterService {
    // --- Status ---

    #[tool(description = "Get the current status of the unit converter service including build info, conversion counters, and process information")]
    async fn converter_status(&self) -> Result<CallToolResult, McpError> {
        let stats = *self.stats.lock().unwrap();
        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status(stats);
        let json = serde_json::to_string_pretty(&status)
            .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get usage instructions for the conversion tools. Call this when starting a conversion session or when unsure how to use the converter.")]
    fn conversion_instructions(&self) -> Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![Content::text(
            CONVERSION_INSTRUCTIONS,
        )]))
    }

    // --- Catalog ---

    #[tool(description = "List the supported conversion categories with their base units and unit catalogs")]
    fn list_categories(&self) -> Result<CallToolResult, McpError> {
        let result = convert::list_categories();
        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "List the units of one category with their display codes")]
    fn list_units(&self, Parameters(p): Parameters<ListUnitsParams>) -> Result<CallToolResult, McpError> {
        let category = parse_category(&p.category)?;
        let result = convert::list_units(category);
        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    // --- Conversion ---

    #[tool(description = "Convert a numeric value between two units of the same category. The value is passed as the raw string the user entered; blank or non-numeric input is rejected with the user-facing message.")]
    fn convert_value(&self, Parameters(p): Parameters<ConvertValueParams>) -> Result<CallToolResult, McpError> {
        let category = parse_category(&p.category)?;

        let result = convert::convert_value(category, &p.value, &p.source_unit, &p.destination_unit);

        {
            let mut stats = self.stats.lock().unwrap();
            match &result {
                Ok(_) => stats.performed += 1,
                Err(_) => stats.failed += 1,
            }
        }

        let response = result.map_err(|e| match e {
            // User mistakes in the entered value
            ConversionToolError::Input(err) => McpError::invalid_params(err.to_string(), None),
            // Unreachable through the fixed catalogs; treat as a caller bug
            ConversionToolError::Convert(err) => {
                tracing::warn!("conversion failed: {}", err);
                McpError::internal_error(err.to_string(), None)
            }
        })?;

        let json = serde_json::to_string_pretty(&response)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for ConverterService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "unitconv".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Unit Converter".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Unit Converter - length, weight, and temperature conversion. \
                 Call conversion_instructions for usage details. \
                 Categories: length (Centimeter base), weight (Gram base), temperature (Celsius base). \
                 Convert: convert_value with category, raw value string, source_unit, destination_unit. \
                 Catalog: list_categories, list_units. \
                 Conversions only work within a single category; pass the user's raw value string so \
                 blank or non-numeric entries surface the right error message."
                    .into(),
            ),
        }
    }
}
