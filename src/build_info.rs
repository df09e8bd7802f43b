//! Build information module
//!
//! Package metadata plus what the build script recorded about the build.

use serde::Serialize;

/// Build timestamp in ISO 8601 format
pub const BUILD_TIMESTAMP: &str = or_unknown(option_env!("NUTRIMETRICS_BUILD_TIMESTAMP"));

/// Cargo profile the binary was built with (`debug` or `release`)
pub const BUILD_PROFILE: &str = or_unknown(option_env!("NUTRIMETRICS_BUILD_PROFILE"));

/// Target triple
pub const BUILD_TARGET: &str = or_unknown(option_env!("NUTRIMETRICS_BUILD_TARGET"));

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

const fn or_unknown(value: Option<&'static str>) -> &'static str {
    match value {
        Some(s) => s,
        None => "unknown",
    }
}

/// Build information for status responses
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub profile: &'static str,
    pub target: &'static str,
    pub build_timestamp: &'static str,
    pub description: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            name: NAME,
            version: VERSION,
            profile: BUILD_PROFILE,
            target: BUILD_TARGET,
            build_timestamp: BUILD_TIMESTAMP,
            description: DESCRIPTION,
        }
    }
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self::current()
    }
}

/// Print the startup banner to stderr
pub fn print_startup_banner() {
    let info = BuildInfo::current();
    eprintln!("===============================================");
    eprintln!("  NutriMetrics");
    eprintln!("  Version: {} | Profile: {} ({})", info.version, info.profile, info.target);
    eprintln!("  Compiled: {}", info.build_timestamp);
    eprintln!("===============================================");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_unknown() {
        assert_eq!(or_unknown(Some("release")), "release");
        assert_eq!(or_unknown(None), "unknown");
    }

    #[test]
    fn test_current_uses_package_metadata() {
        let info = BuildInfo::current();
        assert_eq!(info.name, "nutrimetrics");
        assert_eq!(info.version, VERSION);
        assert!(info.profile == "debug" || info.profile == "release");
        assert_ne!(info.target, "unknown");
        assert_ne!(info.build_timestamp, "unknown");
    }
}
