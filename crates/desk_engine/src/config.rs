use std::path::PathBuf;
use std::time::Duration;

use desk_core::DEFAULT_ERROR_MESSAGE;
use thiserror::Error;

use crate::{ClientSettings, DEFAULT_EMPTY_PLACEHOLDER};

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const API_BASE_VAR: &str = "OPENAI_API_BASE";
pub const MODEL_VAR: &str = "MARKET_DESK_MODEL";
pub const TIMEOUT_VAR: &str = "MARKET_DESK_TIMEOUT_SECS";
pub const EMPTY_PLACEHOLDER_VAR: &str = "MARKET_DESK_EMPTY_MESSAGE";
pub const ERROR_MESSAGE_VAR: &str = "MARKET_DESK_ERROR_MESSAGE";

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not set; configure the API credential before starting")]
    MissingCredential { var: &'static str },
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
}

#[derive(Debug, Clone)]
pub struct DeskConfig {
    pub api_key: String,
    pub api_base: String,
    pub model: String,
    pub client: ClientSettings,
    pub empty_placeholder: String,
    pub error_message: String,
    pub output_dir: PathBuf,
}

impl DeskConfig {
    /// Loads `.env` when present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let api_key = read(API_KEY_VAR).ok_or(ConfigError::MissingCredential { var: API_KEY_VAR })?;

        let api_base = read(API_BASE_VAR).unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let parsed = url::Url::parse(&api_base).map_err(|err| ConfigError::InvalidValue {
            key: API_BASE_VAR,
            message: err.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidValue {
                key: API_BASE_VAR,
                message: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        let mut client = ClientSettings::default();
        if let Some(raw) = read(TIMEOUT_VAR) {
            let secs = raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::InvalidValue {
                    key: TIMEOUT_VAR,
                    message: format!("expected a positive number of seconds, got '{raw}'"),
                })?;
            client.request_timeout = Duration::from_secs(secs);
        }

        Ok(Self {
            api_key,
            api_base,
            model: read(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            client,
            empty_placeholder: read(EMPTY_PLACEHOLDER_VAR)
                .unwrap_or_else(|| DEFAULT_EMPTY_PLACEHOLDER.to_string()),
            error_message: read(ERROR_MESSAGE_VAR)
                .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string()),
            output_dir: PathBuf::from("output"),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use super::{ConfigError, DeskConfig, API_BASE_VAR, API_KEY_VAR, TIMEOUT_VAR};

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_credential_is_fatal() {
        let err = DeskConfig::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(err, ConfigError::MissingCredential { var: API_KEY_VAR });

        let err = DeskConfig::from_lookup(lookup(&[(API_KEY_VAR, "   ")])).unwrap_err();
        assert_eq!(err, ConfigError::MissingCredential { var: API_KEY_VAR });
    }

    #[test]
    fn defaults_apply_when_only_the_key_is_set() {
        let config = DeskConfig::from_lookup(lookup(&[(API_KEY_VAR, "sk-test")])).unwrap();
        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.api_base, "https://api.openai.com/v1");
        assert_eq!(config.model, "gpt-3.5-turbo");
        assert_eq!(config.empty_placeholder, "No snippet generated");
        assert_eq!(
            config.error_message,
            "Error generating snippet. Please try again."
        );
    }

    #[test]
    fn rejects_bad_base_url_and_timeout() {
        let err = DeskConfig::from_lookup(lookup(&[
            (API_KEY_VAR, "sk-test"),
            (API_BASE_VAR, "ftp://example.com"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key, .. } if key == API_BASE_VAR));

        let err = DeskConfig::from_lookup(lookup(&[(API_KEY_VAR, "sk-test"), (TIMEOUT_VAR, "0")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key, .. } if key == TIMEOUT_VAR));
    }

    #[test]
    fn timeout_override_is_applied() {
        let config =
            DeskConfig::from_lookup(lookup(&[(API_KEY_VAR, "sk-test"), (TIMEOUT_VAR, "5")]))
                .unwrap();
        assert_eq!(config.client.request_timeout, Duration::from_secs(5));
    }
}
