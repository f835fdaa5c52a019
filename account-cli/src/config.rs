//! Configuration loading from environment.

use std::env;

use account_types::EncodeMode;

const DEFAULT_LOG_FILTER: &str = "warn";

/// CLI configuration.
#[derive(Debug)]
pub struct Config {
    pub log_filter: String,
    pub encode_mode: EncodeMode,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_values(
            env::var("ACCOUNTS_LOG").ok(),
            env::var("ACCOUNTS_ENCODE_MODE").ok(),
        )
    }

    fn from_values(log_filter: Option<String>, encode_mode: Option<String>) -> anyhow::Result<Self> {
        let encode_mode = match encode_mode {
            Some(mode) => mode
                .parse::<EncodeMode>()
                .map_err(|e| anyhow::anyhow!("ACCOUNTS_ENCODE_MODE: {}", e))?,
            None => EncodeMode::Normal,
        };
        Ok(Self {
            log_filter: log_filter.unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            encode_mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_values(None, None).unwrap();
        assert_eq!(config.log_filter, "warn");
        assert_eq!(config.encode_mode, EncodeMode::Normal);
    }

    #[test]
    fn test_hash_mode_from_env_value() {
        let config = Config::from_values(Some("debug".into()), Some("HASH".into())).unwrap();
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.encode_mode, EncodeMode::Hash);
    }

    #[test]
    fn test_unknown_mode_fails() {
        assert!(Config::from_values(None, Some("compact".into())).is_err());
    }
}
