//! Opt-in tracing bootstrap for hosts embedding `chartcss`.
//!
//! Normalization emits `debug`/`trace` events on the build path. Hosts that
//! already run their own `tracing` subscriber need nothing from here; the
//! helper below exists for quick setups and examples.

/// Installs a compact `tracing` subscriber honoring `RUST_LOG`, falling back
/// to `info`.
///
/// Returns `true` when initialization succeeds. Returns `false` when the
/// `telemetry` feature is disabled or a global subscriber was already set by
/// the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
