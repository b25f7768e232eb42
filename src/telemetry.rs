//! Opt-in tracing setup for applications embedding `sciplot-rs`.
//!
//! The library only emits `tracing` events; hosts that already install a
//! subscriber should skip these helpers.

/// Environment variable consulted before `RUST_LOG`.
pub const LOG_ENV_VAR: &str = "SCIPLOT_LOG";

/// Installs a compact `tracing` subscriber filtered by `SCIPLOT_LOG`, then
/// `RUST_LOG`, then `info`.
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    let directives = std::env::var(LOG_ENV_VAR)
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "info".to_owned());
    init_tracing_with_filter(&directives)
}

/// Installs a compact subscriber with explicit filter directives such as
/// `"sciplot_rs=debug"`.
#[must_use]
pub fn init_tracing_with_filter(directives: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let Ok(filter) = tracing_subscriber::EnvFilter::try_new(directives) else {
            return false;
        };
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = directives;
        false
    }
}
