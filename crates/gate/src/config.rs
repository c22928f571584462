use std::sync::OnceLock;

use shared_types::AppConfig;
use tracing::{info, warn};

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Parse `config.toml` contents. Anything unparseable falls back to the
/// defaults.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        warn!(error = %e, "Failed to parse config.toml, using defaults");
        AppConfig::default()
    })
}

/// Parse and cache the app configuration. Only the first call has effect.
pub fn init_config(contents: &str) -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let config = parse_config(contents);
        info!(
            storage_key = %config.session.storage_key,
            latency_ms = config.session.latency_ms,
            "Loaded session config"
        );
        config
    })
}

/// The cached configuration, or defaults if [`init_config`] hasn't run.
pub fn app_config() -> &'static AppConfig {
    static DEFAULT: OnceLock<AppConfig> = OnceLock::new();
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(AppConfig::default))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_falls_back_to_defaults() {
        assert_eq!(parse_config("[session\nlatency_ms = "), AppConfig::default());
    }

    #[test]
    fn wrong_type_falls_back_to_defaults() {
        assert_eq!(
            parse_config("[session]\nlatency_ms = \"slow\""),
            AppConfig::default()
        );
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config = parse_config("[session]\nlatency_ms = 50");
        assert_eq!(config.session.latency_ms, 50);
        assert_eq!(config.session.storage_key, "user");
    }

    #[test]
    fn init_is_sticky() {
        let first = init_config("[session]\nstorage_key = \"first\"");
        let second = init_config("[session]\nstorage_key = \"second\"");
        assert_eq!(first.session.storage_key, "first");
        assert_eq!(second.session.storage_key, "first");
        assert_eq!(app_config().session.storage_key, "first");
    }
}
