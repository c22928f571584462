use serde::{Deserialize, Serialize};

/// Storage key the session record lives under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "user";

/// Simulated round-trip for sign-in and registration, in milliseconds.
pub const DEFAULT_LATENCY_MS: u64 = 1000;

/// Session gate settings.
///
/// Every field has a default so that a missing or partial `config.toml`
/// still yields a working gate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionConfig {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_latency_ms() -> u64 {
    DEFAULT_LATENCY_MS
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            latency_ms: default_latency_ms(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub session: SessionConfig,
}
