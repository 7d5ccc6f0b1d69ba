//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Directives used when `RUST_LOG` is unset or unparsable: catalog crates at
/// `info`, everything else (hyper, tower, axum internals) at `warn`.
pub const DEFAULT_FILTER: &str =
    "warn,catalog_api=info,catalog_infra=info,catalog_observability=info";

/// Build the level filter, honoring `RUST_LOG`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize tracing/logging for the process.
///
/// JSON lines with system timestamps; targets are omitted. Safe to call
/// multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = env_filter();
    let directives = filter.to_string();

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init()
        .is_ok();

    if installed {
        ::tracing::info!(filter = %directives, "catalog logging initialized");
    }
}
