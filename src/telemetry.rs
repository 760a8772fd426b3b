//! Telemetry helpers for applications embedding `signal-viewport`.
//!
//! The engine only emits `tracing` events; installing a subscriber is left to
//! the host. `init_default_tracing` covers the common case.

/// Installs a compact `fmt` subscriber for the engine's `tracing` events.
///
/// The filter comes from `RUST_LOG` (for example `RUST_LOG=signal_viewport=debug`
/// to see every click and resize) and falls back to `info`. Returns `false`
/// without the `telemetry` feature or when the host already installed a
/// global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
