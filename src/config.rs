//! Configuration types for trade-calc

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::telemetry::LogFormat;
use crate::trade::{RewardMultiplier, TradeDirection, VolatilityMultiplier};

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Selections used by the CLI when a flag is omitted
///
/// These never change what a calculator reset returns.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub direction: TradeDirection,

    #[serde(default)]
    pub volatility_multiplier: VolatilityMultiplier,

    #[serde(default)]
    pub reward_multiplier: Option<RewardMultiplier>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            direction: TradeDirection::Long,
            volatility_multiplier: VolatilityMultiplier::Two,
            reward_multiplier: None,
        }
    }
}

/// Output formatting
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    #[serde(default = "default_instrument")]
    pub instrument: String,
}

fn default_currency_symbol() -> String {
    "$".to_string()
}
fn default_instrument() -> String {
    "XAUUSD".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            instrument: default_instrument(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is absent
    ///
    /// A file that exists but does not parse is still an error. Reporting the
    /// missing file is left to the caller.
    pub fn load_or_default(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path).map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))
    }
}
