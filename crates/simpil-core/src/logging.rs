use crate::config::Config;

/// Install a fmt subscriber using [`Config::default`]'s filter.
pub fn init() {
    init_with(&Config::default());
}

/// Install a fmt subscriber filtered by `config.log_filter`.
///
/// Returns quietly if a global subscriber is already set, so tests and
/// embedding applications can call it more than once.
pub fn init_with(config: &Config) {
    if tracing_subscriber::fmt()
        .with_env_filter(config.log_filter.as_str())
        .try_init()
        .is_ok()
    {
        tracing::debug!(filter = %config.log_filter, "Logging initialized");
    }
}
