//! Telemetry helpers for applications embedding `scaling-range`.
//!
//! The engine only emits `tracing` events; installing a subscriber is left to
//! the host. The helpers here are a shortcut for hosts that do not care.

/// Environment variable read for filter directives before falling back to a default.
pub const LOG_FILTER_ENV: &str = "SCALING_RANGE_LOG";

/// Directive used by [`init_default_tracing`].
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Installs a compact fmt subscriber with the default `info` filter.
///
/// See [`init_tracing`].
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing(DEFAULT_LOG_FILTER)
}

/// Installs a compact fmt subscriber when the `telemetry` feature is enabled.
///
/// Directives come from `SCALING_RANGE_LOG`; when it is unset or unparsable,
/// `fallback_directives` is used, and `info` if those do not parse either.
/// Returns `false` when the feature is disabled or a global subscriber was
/// already installed by the host application.
#[must_use]
pub fn init_tracing(fallback_directives: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
            .or_else(|_| EnvFilter::try_new(fallback_directives))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let installed = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
        if installed {
            tracing::debug!(fallback_directives, "scaling-range tracing installed");
        }
        installed
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directives;
        false
    }
}
