//! MIC Status Tool
//!
//! Provides runtime status information about the MIC service.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::conversion::Unit;

/// Usage notes for AI assistants
pub const CONVERSION_INSTRUCTIONS: &str = r#"
# MIC Conversion Instructions

Call `convert` with a single string made of an optional number followed by a unit.

## Supported units

| Unit | Converts to | Factor |
|------|-------------|--------|
| gal  | L           | 1 gal = 3.78541 L |
| mi   | km          | 1 mi = 1.60934 km |
| lbs  | kg          | 1 lbs = 0.453592 kg |

Conversions run both ways. Units are case-insensitive; liters are always reported as `L`.

## Numbers

- Whole numbers and decimals: `4gal`, `2.5lbs`
- One fraction: `1/2mi`, `2.5/6kg`
- No number means 1: `kg`
- Two fractions (`3/2/7kg`) are rejected as `invalid number`

## Errors

- `invalid number`
- `invalid unit`
- `invalid number and unit` when both are wrong
"#;

/// Runtime status of the MIC service
#[derive(Debug, Clone, Serialize)]
pub struct MicStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    pub supported_units: usize,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
}

impl StatusTracker {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> MicStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        MicStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            supported_units: Unit::ALL.len(),
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
