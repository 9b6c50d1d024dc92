//! Logging bootstrap shared by library consumers and test harnesses

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber with the default `info` level
pub fn init_tracing() {
    init_tracing_with_level(None);
}

/// Initialize the tracing subscriber with an explicit base level
///
/// The filter targets only this workspace's crates so embedding hosts keep
/// control of their own verbosity.
pub fn init_tracing_with_level(log_level: Option<&str>) {
    let base_level = log_level.unwrap_or("info");
    let env_filter = format!("shared={base_level},roster={base_level}");

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&env_filter))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
