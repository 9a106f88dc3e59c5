//! `target_checklist`: likely lifers near a location

use serde_json::{json, Value};
use tracing::debug;
use wingit_core::{EngineError, TargetFilters};

use super::protocol::{McpError, ToolDefinition, ToolsCallResult};
use crate::app::App;

pub const TARGET_CHECKLIST: &str = "target_checklist";

pub fn definitions() -> Vec<ToolDefinition> {
    vec![ToolDefinition {
        name: TARGET_CHECKLIST.to_string(),
        description: "Return species recently seen near a location that are missing from \
                      the user's personal eBird checklist, ranked by recent frequency."
            .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "location": {
                    "type": "string",
                    "description": "Place name or \"lat,lng\""
                },
                "radiusKm": {
                    "type": "number",
                    "description": "Search radius in kilometers",
                    "default": wingit_core::DEFAULT_RADIUS_KM
                },
                "daysBack": {
                    "type": "integer",
                    "description": "Lookback window in days",
                    "default": wingit_core::DEFAULT_DAYS_BACK
                },
                "includeHeardOnly": {
                    "type": "boolean",
                    "description": "Keep heard-only detections",
                    "default": false
                },
                "minFrequency": {
                    "type": "number",
                    "description": "Minimum recent frequency (0..1)",
                    "default": wingit_core::DEFAULT_MIN_FREQUENCY
                },
                "maxSpecies": {
                    "type": "integer",
                    "description": "Maximum number of targets",
                    "default": wingit_core::DEFAULT_MAX_SPECIES
                }
            },
            "required": ["location"]
        }),
    }]
}

pub async fn call(app: &App, name: &str, arguments: Value) -> Result<ToolsCallResult, McpError> {
    match name {
        TARGET_CHECKLIST => target_checklist(app, arguments).await,
        other => Err(McpError::InvalidParams(format!("Unknown tool: {}", other))),
    }
}

async fn target_checklist(app: &App, arguments: Value) -> Result<ToolsCallResult, McpError> {
    let filters: TargetFilters = serde_json::from_value(arguments)
        .map_err(|e| McpError::InvalidParams(e.to_string()))?;
    debug!(location = %filters.location, "target_checklist");

    match app.recommend(filters).await {
        Ok(result) => ToolsCallResult::structured(result.summary(), &result),
        Err(EngineError::InvalidInput(msg)) => Ok(ToolsCallResult::error(msg)),
    }
}
