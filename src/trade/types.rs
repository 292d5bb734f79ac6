//! Trade option types

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised when option text does not name a known choice
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionParseError {
    /// Unknown trade direction
    #[error("unknown trade direction '{0}' (expected long or short)")]
    Direction(String),
    /// Unknown stop-loss method
    #[error("unknown stop-loss method '{0}' (expected manual or volatility)")]
    StopLossMethod(String),
    /// Reward multiplier outside the offered set
    #[error("unsupported reward multiplier '{0}' (expected 2, 2.5 or 3)")]
    RewardMultiplier(String),
    /// Volatility multiplier outside the offered set
    #[error("unsupported volatility multiplier '{0}' (expected 1.5 or 2)")]
    VolatilityMultiplier(String),
    /// Unknown text field name
    #[error("unknown field '{0}' (expected entry, stop, atr, balance or risk)")]
    Field(String),
}

/// Trade direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeDirection {
    /// Buy, profit when price rises
    #[default]
    #[serde(alias = "buy")]
    Long,
    /// Sell, profit when price falls
    #[serde(alias = "sell")]
    Short,
}

impl TradeDirection {
    /// Get the direction name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Long => "long",
            Self::Short => "short",
        }
    }
}

impl fmt::Display for TradeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TradeDirection {
    type Err = OptionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "long" | "buy" => Ok(Self::Long),
            "short" | "sell" => Ok(Self::Short),
            _ => Err(OptionParseError::Direction(s.to_string())),
        }
    }
}

/// How the stop-loss price is obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopLossMethod {
    /// Typed in by the user
    #[default]
    Manual,
    /// Offset from entry by volatility value times multiplier
    #[serde(alias = "atr", alias = "volatility")]
    VolatilityBased,
}

impl StopLossMethod {
    /// Get the method name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::VolatilityBased => "volatility",
        }
    }
}

impl fmt::Display for StopLossMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StopLossMethod {
    type Err = OptionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manual" => Ok(Self::Manual),
            "volatility" | "volatility_based" | "atr" => Ok(Self::VolatilityBased),
            _ => Err(OptionParseError::StopLossMethod(s.to_string())),
        }
    }
}

/// Ratio of profit distance to risk distance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RewardMultiplier {
    /// 1:2
    Two,
    /// 1:2.5
    TwoAndHalf,
    /// 1:3
    Three,
}

impl RewardMultiplier {
    /// All offered multipliers
    pub const ALL: [RewardMultiplier; 3] = [Self::Two, Self::TwoAndHalf, Self::Three];

    /// Multiplier as a decimal factor
    pub fn value(&self) -> Decimal {
        match self {
            Self::Two => dec!(2),
            Self::TwoAndHalf => dec!(2.5),
            Self::Three => dec!(3),
        }
    }

    /// Parse a selection where empty text or "none" means unset
    pub fn parse_optional(s: &str) -> Result<Option<Self>, OptionParseError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" | "unset" => Ok(None),
            other => other.parse().map(Some),
        }
    }
}

impl fmt::Display for RewardMultiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Two => "2",
            Self::TwoAndHalf => "2.5",
            Self::Three => "3",
        };
        f.write_str(s)
    }
}

impl FromStr for RewardMultiplier {
    type Err = OptionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_end_matches(['x', 'X']);
        match trimmed {
            "2" | "2.0" => Ok(Self::Two),
            "2.5" => Ok(Self::TwoAndHalf),
            "3" | "3.0" => Ok(Self::Three),
            _ => Err(OptionParseError::RewardMultiplier(s.to_string())),
        }
    }
}

impl TryFrom<String> for RewardMultiplier {
    type Error = OptionParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RewardMultiplier> for String {
    fn from(value: RewardMultiplier) -> Self {
        value.to_string()
    }
}

/// Factor applied to the volatility value to size the stop offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum VolatilityMultiplier {
    /// 1.5x
    OneAndHalf,
    /// 2x
    #[default]
    Two,
}

impl VolatilityMultiplier {
    /// All offered multipliers
    pub const ALL: [VolatilityMultiplier; 2] = [Self::OneAndHalf, Self::Two];

    /// Multiplier as a decimal factor
    pub fn value(&self) -> Decimal {
        match self {
            Self::OneAndHalf => dec!(1.5),
            Self::Two => dec!(2),
        }
    }
}

impl fmt::Display for VolatilityMultiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::OneAndHalf => "1.5",
            Self::Two => "2",
        };
        f.write_str(s)
    }
}

impl FromStr for VolatilityMultiplier {
    type Err = OptionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_end_matches(['x', 'X']);
        match trimmed {
            "1.5" => Ok(Self::OneAndHalf),
            "2" | "2.0" => Ok(Self::Two),
            _ => Err(OptionParseError::VolatilityMultiplier(s.to_string())),
        }
    }
}

impl TryFrom<String> for VolatilityMultiplier {
    type Error = OptionParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<VolatilityMultiplier> for String {
    fn from(value: VolatilityMultiplier) -> Self {
        value.to_string()
    }
}
