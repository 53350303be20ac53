//! Telemetry helpers for hosts embedding `folio-chart`.
//!
//! The engine only emits `tracing` events (frame skips, gesture transitions,
//! overlay cache refreshes). Installing a subscriber stays the host's call:
//! either use the helpers below or wire your own.

/// Installs a compact `tracing` subscriber filtered by `RUST_LOG`, falling
/// back to `info`.
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter("info")
}

/// Installs a compact `tracing` subscriber using `RUST_LOG` when present and
/// `fallback_directive` otherwise (for example `"folio_chart=trace"`).
#[must_use]
pub fn init_tracing_with_filter(fallback_directive: &str) -> bool {
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
