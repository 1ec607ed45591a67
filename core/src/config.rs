//! Runner display settings.
//!
//! RULE: Nothing here reaches the calculation. The workday length, the
//! value multiplier and the EPT table are constants in `estimator` and
//! `ept`. Unknown keys are rejected so an old or misspelled file fails
//! loudly instead of being half-applied.

use crate::error::{EstimatorError, EstimatorResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Relative location of the display config inside a data directory.
pub const CONFIG_FILE: &str = "display/display_config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    /// Prefix for monetary amounts in the text report.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Pretty-print JSON results in one-shot `--json` mode.
    #[serde(default = "default_pretty_json")]
    pub pretty_json: bool,
}

fn default_currency_symbol() -> String {
    "$".into()
}

fn default_pretty_json() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            pretty_json: default_pretty_json(),
        }
    }
}

impl DisplayConfig {
    pub fn path_in(data_dir: impl AsRef<Path>) -> PathBuf {
        data_dir.as_ref().join(CONFIG_FILE)
    }

    /// Load from the data/ directory.
    /// Callers that can run without a data directory use `load_or_default`.
    pub fn load(data_dir: impl AsRef<Path>) -> EstimatorResult<Self> {
        let path = Self::path_in(data_dir);
        let content = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Cannot read {}: {e}", path.display()))?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        log::debug!("Loaded display config from {}", path.display());
        Ok(config)
    }

    /// Like `load`, but a missing file yields the built-in defaults.
    /// A file that exists and fails to parse or validate is still an error.
    pub fn load_or_default(data_dir: impl AsRef<Path>) -> EstimatorResult<Self> {
        if Self::path_in(&data_dir).is_file() {
            Self::load(data_dir)
        } else {
            log::debug!("No display config in {}, using defaults", data_dir.as_ref().display());
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> EstimatorResult<()> {
        if self.currency_symbol.trim().is_empty() {
            return Err(EstimatorError::InvalidConfig {
                reason: "currency_symbol must not be blank".into(),
            });
        }
        if self.currency_symbol.bytes().any(|b| b.is_ascii_digit()) {
            return Err(EstimatorError::InvalidConfig {
                reason: format!("currency_symbol must not contain digits, got {:?}", self.currency_symbol),
            });
        }
        Ok(())
    }
}
