use std::{env, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to SQLite database file for the local mirror (default: "duns.db")
    pub sqlite_path: String,
    /// Simulated remote latency in milliseconds (default: 2,000)
    pub remote_latency_ms: u64,
    /// Start with the remote unreachable (default: false)
    pub offline: bool,
    /// Seed an empty remote with the demo duns (default: true)
    pub seed_remote: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DUNS_SQLITE_PATH` - SQLite database path (default: "duns.db")
    /// - `DUNS_REMOTE_LATENCY_MS` - Simulated remote latency (default: 2,000)
    /// - `DUNS_OFFLINE` - Start with the remote unreachable (default: false)
    /// - `DUNS_SEED_REMOTE` - Seed the remote with demo duns (default: true)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key/value lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            sqlite_path: lookup("DUNS_SQLITE_PATH").unwrap_or_else(|| "duns.db".to_string()),
            remote_latency_ms: lookup("DUNS_REMOTE_LATENCY_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(2_000),
            offline: lookup("DUNS_OFFLINE")
                .and_then(|v| parse_flag(&v))
                .unwrap_or(false),
            seed_remote: lookup("DUNS_SEED_REMOTE")
                .and_then(|v| parse_flag(&v))
                .unwrap_or(true),
        }
    }

    /// Get remote latency as a Duration.
    pub fn remote_latency(&self) -> Duration {
        Duration::from_millis(self.remote_latency_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
