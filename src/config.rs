//! Process-level configuration resolved once at the edge.
//!
//! The block builders and assembler are pure functions of their inputs;
//! anything that comes from the process environment is captured here and
//! threaded in as plain flags.

use std::env;

/// Switches that suppress optional message content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderConfig {
    /// Drop the context footer block.
    pub suppress_footer: bool,
    /// Drop the missing-environment-properties warning block.
    pub suppress_warnings: bool,
    /// Drop the pie-chart accessory on the result summary.
    pub suppress_chart: bool,
}

impl RenderConfig {
    /// Read `CTRF_SKIP_FOOTER`, `CTRF_SKIP_WARNINGS` and `CTRF_SKIP_CHART`;
    /// a value of `"true"` suppresses the corresponding content.
    pub fn from_env() -> Self {
        RenderConfig {
            suppress_footer: env_flag("CTRF_SKIP_FOOTER"),
            suppress_warnings: env_flag("CTRF_SKIP_WARNINGS"),
            suppress_chart: env_flag("CTRF_SKIP_CHART"),
        }
    }
}

/// CI-provided build identification. When set, each field takes precedence
/// over the corresponding value in the report's environment, in every call
/// path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildOverrides {
    pub name: Option<String>,
    pub number: Option<String>,
    pub url: Option<String>,
}

impl BuildOverrides {
    /// Read `BUILD_NAME`, `BUILD_NUMBER` and `BUILD_URL`.
    pub fn from_env() -> Self {
        BuildOverrides {
            name: env::var("BUILD_NAME").ok(),
            number: env::var("BUILD_NUMBER").ok(),
            url: env::var("BUILD_URL").ok(),
        }
    }
}

fn env_flag(name: &str) -> bool {
    env::var(name).map(|v| v == "true").unwrap_or(false)
}
