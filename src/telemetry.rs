//! Opt-in log output for hosts and the `metric_plot_tool` binary.
//!
//! The engine only emits `tracing` events. Nothing is printed until a host
//! installs a subscriber, either its own or one of the helpers below.

/// Filter used when `RUST_LOG` is unset or unparsable: engine events at
/// `info`, everything else at `warn`.
pub const DEFAULT_DIRECTIVES: &str = "warn,metric_plot=info";

/// Installs the stderr subscriber with [`DEFAULT_DIRECTIVES`] as fallback.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing(DEFAULT_DIRECTIVES)
}

/// Installs a compact stderr subscriber filtered by `RUST_LOG`, or by
/// `fallback` when that variable is missing or invalid.
///
/// `false` means nothing was installed: the `telemetry` feature is off or
/// the host already owns the global subscriber.
#[must_use]
pub fn init_tracing(fallback: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter(fallback))
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback;
        false
    }
}

#[cfg(feature = "telemetry")]
fn env_filter(fallback: &str) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback))
}
