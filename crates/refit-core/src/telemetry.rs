//! Tracing initialization for embedders.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Filter via `REFIT_LOG` (e.g. `REFIT_LOG=refit_engine=debug`); defaults to
/// `info`. Safe to call more than once — subsequent calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("REFIT_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
