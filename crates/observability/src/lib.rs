//! Tracing and logging (shared setup).
//!
//! Domain crates only emit `tracing` events; binaries and test harnesses call
//! [`init`] once to install a subscriber.

/// Logging configuration read from the environment.
pub mod config;

/// Tracing subscriber installation.
pub mod tracing;

pub use config::{ConfigError, LogFormat, ObservabilityConfig};

/// Initialize process-wide tracing from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    let config = ObservabilityConfig::from_env();
    // A subscriber already installed (e.g. by another test) is fine.
    let _ = tracing::try_init(&config);
}
