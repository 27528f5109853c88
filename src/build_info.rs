//! Build metadata embedded by build.rs

use std::fmt;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version and build stamp of the running binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self::from_env(option_env!("MIC_BUILD_NUMBER"), option_env!("MIC_BUILD_TIMESTAMP"))
    }

    fn from_env(build_number: Option<&str>, build_timestamp: Option<&'static str>) -> Self {
        Self {
            version: VERSION,
            build_number: build_number.and_then(|n| n.trim().parse().ok()).unwrap_or(0),
            build_timestamp: build_timestamp.unwrap_or("unknown"),
        }
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{} build {} ({})", self.version, self.build_number, self.build_timestamp)
    }
}

/// Print the startup banner to stderr
pub fn print_startup_banner() {
    eprintln!("Metric-Imperial Converter (MIC) {}", BuildInfo::current());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_parses_build_number() {
        let info = BuildInfo::from_env(Some("42"), Some("2026-01-01T00:00:00Z"));
        assert_eq!(info.build_number, 42);
        assert_eq!(info.build_timestamp, "2026-01-01T00:00:00Z");
        assert_eq!(info.version, VERSION);
    }

    #[test]
    fn test_from_env_falls_back_when_unset_or_garbled() {
        let info = BuildInfo::from_env(None, None);
        assert_eq!(info.build_number, 0);
        assert_eq!(info.build_timestamp, "unknown");

        assert_eq!(BuildInfo::from_env(Some("4x2"), None).build_number, 0);
    }

    #[test]
    fn test_display() {
        let info = BuildInfo::from_env(Some("7"), Some("then"));
        assert_eq!(info.to_string(), format!("v{} build 7 (then)", VERSION));
    }
}
