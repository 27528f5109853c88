//! MIC MCP Server Implementation
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

use crate::tools::convert;
use crate::tools::status::StatusTracker;

/// MIC MCP Service
#[derive(Clone)]
pub struct MicService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    tool_router: ToolRouter<MicService>,
}

impl MicService {
    pub fn new() -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new())),
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for MicService {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertParams {
    /// Number followed by a unit, e.g. "3.1mi", "1/2gal" or "kg"
    pub input: String,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl MicService {
    #[tool(description = "Get the current status of the MIC service including build info and process information")]
    async fn mic_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status();
        let json = serde_json::to_string_pretty(&status)
            .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get instructions for writing conversion inputs. Call this when unsure which numbers or units are accepted.")]
    fn conversion_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::CONVERSION_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(CONVERSION_INSTRUCTIONS)]))
    }

    #[tool(description = "Convert a quantity between gal/L, mi/km or lbs/kg. Input is a number (whole, decimal or one fraction, default 1) followed by a unit, e.g. \"3.1mi\" or \"1/2gal\".")]
    fn convert(&self, Parameters(p): Parameters<ConvertParams>) -> Result<CallToolResult, McpError> {
        tracing::info!("convert: '{}'", p.input);
        match convert::convert_input(&p.input) {
            Ok(result) => {
                let json = serde_json::to_string_pretty(&result)
                    .map_err(|e| McpError::internal_error(e.to_string(), None))?;
                Ok(CallToolResult::success(vec![Content::text(json)]))
            }
            Err(e) => Ok(CallToolResult::error(vec![Content::text(e.to_string())])),
        }
    }

    #[tool(description = "List the supported units with their paired unit and conversion factor")]
    fn list_units(&self) -> Result<CallToolResult, McpError> {
        let json = serde_json::to_string_pretty(&convert::list_units())
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for MicService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "mic".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Metric-Imperial Converter".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Metric-Imperial Converter (MIC) - converts gal<->L, mi<->km and lbs<->kg. \
                 Call conversion_instructions for the accepted input format. \
                 Tools: convert (input like \"3.1mi\"), list_units, mic_status, \
                 conversion_instructions."
                    .into(),
            ),
        }
    }
}
