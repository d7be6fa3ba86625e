//! Logging setup controlled by environment variables.
//!
//! The parsers log through `tracing`: a `debug!` event per parse call and a
//! `warn!` event per [`crate::ParseWarning`]. Applications that already
//! install a subscriber need nothing else. Binaries can call [`init`] with
//! the `tracing-subscriber` feature enabled.
//!
//! # Environment Variables
//!
//! - `ENVURL_DEBUG=true` (or `1`, `yes`) - Enable debug logging
//! - `ENVURL_LOG_LEVEL=trace|debug|info|warn|error` - Set a specific level
//! - `ENVURL_LOG_FORMAT=json|pretty|compact` - Output format (default: pretty)

use std::env;
use std::sync::Once;

static INIT: Once = Once::new();

/// Check if debug logging is enabled via `ENVURL_DEBUG`.
#[inline]
pub fn is_debug_enabled() -> bool {
    env::var("ENVURL_DEBUG")
        .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
        .unwrap_or(false)
}

/// Resolve the log level from `ENVURL_LOG_LEVEL` and `ENVURL_DEBUG`.
///
/// Defaults to "debug" when `ENVURL_DEBUG` is enabled, otherwise "warn".
pub fn get_log_level() -> &'static str {
    resolve_level("warn")
}

fn resolve_level(default: &'static str) -> &'static str {
    let fallback = if is_debug_enabled() { "debug" } else { default };
    match env::var("ENVURL_LOG_LEVEL") {
        Ok(level) => match level.to_lowercase().as_str() {
            "trace" => "trace",
            "debug" => "debug",
            "info" => "info",
            "warn" => "warn",
            "error" => "error",
            _ => fallback,
        },
        Err(_) => fallback,
    }
}

/// Resolve the log format from `ENVURL_LOG_FORMAT`.
pub fn get_log_format() -> &'static str {
    env::var("ENVURL_LOG_FORMAT")
        .map(|f| match f.to_lowercase().as_str() {
            "json" => "json",
            "compact" => "compact",
            _ => "pretty",
        })
        .unwrap_or("pretty")
}

/// Initialize the global subscriber once; later calls are no-ops.
///
/// Warnings are shown unless the environment asks for a quieter level.
/// Without the `tracing-subscriber` feature this does nothing and the host
/// application's subscriber is used.
pub fn init() {
    init_with_default("warn");
}

/// Like [`init`], with a different level when no variable sets one.
///
/// Binaries that report [`crate::ParseWarning`]s themselves pass `"error"`.
pub fn init_with_default(default: &'static str) {
    INIT.call_once(|| {
        #[cfg(feature = "tracing-subscriber")]
        {
            use tracing_subscriber::{EnvFilter, fmt, prelude::*};

            let level = resolve_level(default);
            let filter = EnvFilter::try_new(format!(
                "envurl={},envurl_config={},envurl_cli={}",
                level, level, level
            ))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

            let registry = tracing_subscriber::registry().with(filter);
            let result = match get_log_format() {
                "json" => registry.with(fmt::layer().json().with_writer(std::io::stderr)).try_init(),
                "compact" => registry
                    .with(fmt::layer().compact().with_writer(std::io::stderr))
                    .try_init(),
                _ => registry.with(fmt::layer().with_writer(std::io::stderr)).try_init(),
            };

            if result.is_ok() {
                tracing::debug!(level = level, format = get_log_format(), "Logging initialized");
            }
        }
        #[cfg(not(feature = "tracing-subscriber"))]
        let _ = default;
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_default() {
        // SAFETY: the variables are only read by this module's tests.
        unsafe {
            env::remove_var("ENVURL_DEBUG");
            env::remove_var("ENVURL_LOG_LEVEL");
        }
        assert!(!is_debug_enabled());
        assert_eq!(get_log_level(), "warn");
        assert_eq!(resolve_level("error"), "error");
    }
}
