//! Configuration management.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file. Every setting has a default that keeps values compatible with rows
//! already written by earlier releases.

use crate::domain::{FallbackPolicy, NormalizeOptions, StorageNormalization};
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Handling of numbers without a recognized prefix (default: prepend)
    pub fallback: FallbackPolicy,

    /// Storage-direction rule for the generic field (default: legacy)
    pub storage: StorageNormalization,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `KE_PHONE_FALLBACK`: `prepend` or `preserve` (default: prepend)
    /// - `KE_PHONE_STORAGE_NORMALIZATION`: `legacy` or `unified` (default: legacy)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let fallback = Self::parse_env_choice(
            "KE_PHONE_FALLBACK",
            &[
                ("prepend", FallbackPolicy::Prepend),
                ("preserve", FallbackPolicy::Preserve),
            ],
            FallbackPolicy::default(),
        )?;

        let storage = Self::parse_env_choice(
            "KE_PHONE_STORAGE_NORMALIZATION",
            &[
                ("legacy", StorageNormalization::Legacy),
                ("unified", StorageNormalization::Unified),
            ],
            StorageNormalization::default(),
        )?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            fallback,
            storage,
            log_level,
        })
    }

    /// Normalizer options derived from this configuration.
    pub fn normalize_options(&self) -> NormalizeOptions {
        NormalizeOptions {
            fallback: self.fallback,
            storage: self.storage,
        }
    }

    /// Parse an environment variable as one of a fixed set of names (case-insensitive).
    fn parse_env_choice<T: Copy>(
        var_name: &str,
        choices: &[(&str, T)],
        default: T,
    ) -> ConfigResult<T> {
        let val = match env::var(var_name) {
            Ok(val) => val,
            Err(_) => return Ok(default),
        };

        let wanted = val.trim().to_ascii_lowercase();
        choices
            .iter()
            .find(|(name, _)| *name == wanted)
            .map(|(_, choice)| *choice)
            .ok_or_else(|| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!(
                    "Must be one of: {}, got: {}",
                    choices
                        .iter()
                        .map(|(name, _)| *name)
                        .collect::<Vec<_>>()
                        .join(", "),
                    val
                ),
            })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            fallback: FallbackPolicy::default(),
            storage: StorageNormalization::default(),
            log_level: "error".to_string(),
        }
    }
}
