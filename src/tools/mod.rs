//! MIC Tools module
//!
//! MCP tool implementations for the Metric-Imperial Converter.

pub mod convert;
pub mod status;
