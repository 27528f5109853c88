//! Metric-Imperial Converter (MIC) Library
//!
//! Parses inputs like "2.5kg" and converts them between gal/L, mi/km and lbs/kg.

pub mod build_info;
pub mod conversion;
pub mod mcp;
pub mod tools;
