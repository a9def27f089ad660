//! Telemetry helpers for hosts embedding `timeline-chart`.
//!
//! Composition and resize handling emit `tracing` events; this module only
//! offers an opt-in subscriber for hosts that do not install their own.

/// Default filter used when `RUST_LOG` is not set.
pub const DEFAULT_TRACING_DIRECTIVE: &str = "info";

/// Initializes a compact subscriber filtered by `RUST_LOG`, or `info`.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback(DEFAULT_TRACING_DIRECTIVE)
}

/// Initializes a compact `tracing` subscriber when the `telemetry` feature is enabled.
///
/// `fallback_directive` is used when `RUST_LOG` is absent or unparsable, e.g.
/// `"timeline_chart=trace"` to follow resize handling.
/// Returns `false` when the feature is disabled or a global subscriber is
/// already installed.
#[must_use]
pub fn init_tracing_with_fallback(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directive));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}
