//! Install a `tracing` subscriber that shows the engine's log output.
//!
//! The library crates only emit events; this helper is for binaries and
//! tests that want to see them.

use tracing_subscriber::EnvFilter;

/// Crate targets whose events are shown.
const CRATE_TARGETS: &[&str] = &["almanac", "alm_core", "alm_time", "alm_holidays"];

/// Install a formatting subscriber for the engine crates.
///
/// Verbosity 0 shows warnings, 1 info, 2 debug and 3 or more trace.
/// `RUST_LOG` overrides the level if set.  Returns `false` if a global
/// subscriber was already installed.
pub fn init(verbosity: u8) -> bool {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let default_filter = CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",");

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}
