//! Input snapshot

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::types::{
    OptionParseError, RewardMultiplier, StopLossMethod, TradeDirection, VolatilityMultiplier,
};

/// Free-text fields of the trade form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Entry price
    EntryPrice,
    /// Stop-loss price, editable only under the manual method
    StopLossPrice,
    /// Volatility (ATR) value in points
    VolatilityValue,
    /// Account balance in USD
    AccountBalance,
    /// Risk budget per trade in USD
    RiskBudget,
}

impl Field {
    /// All text fields in form order
    pub const ALL: [Field; 5] = [
        Self::EntryPrice,
        Self::StopLossPrice,
        Self::VolatilityValue,
        Self::AccountBalance,
        Self::RiskBudget,
    ];

    /// Short name used on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EntryPrice => "entry",
            Self::StopLossPrice => "stop",
            Self::VolatilityValue => "atr",
            Self::AccountBalance => "balance",
            Self::RiskBudget => "risk",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = OptionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "entry" | "entry_price" => Ok(Self::EntryPrice),
            "stop" | "stop_loss" | "sl" => Ok(Self::StopLossPrice),
            "atr" | "volatility" => Ok(Self::VolatilityValue),
            "balance" | "account_balance" => Ok(Self::AccountBalance),
            "risk" | "risk_budget" => Ok(Self::RiskBudget),
            _ => Err(OptionParseError::Field(s.to_string())),
        }
    }
}

/// Snapshot of everything the user has entered
///
/// Text fields hold exactly what was typed. `Default` is the reset state:
/// empty text, long direction, manual stop, 2x volatility multiplier and no
/// reward multiplier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeInputs {
    pub entry_price: String,
    pub stop_loss_price: String,
    pub direction: TradeDirection,
    pub stop_loss_method: StopLossMethod,
    pub volatility_value: String,
    pub volatility_multiplier: VolatilityMultiplier,
    pub reward_multiplier: Option<RewardMultiplier>,
    pub account_balance: String,
    pub risk_budget: String,
}

impl TradeInputs {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Set entry price text
    pub fn with_entry_price(mut self, text: impl Into<String>) -> Self {
        self.entry_price = text.into();
        self
    }

    /// Set stop-loss text
    pub fn with_stop_loss_price(mut self, text: impl Into<String>) -> Self {
        self.stop_loss_price = text.into();
        self
    }

    /// Set trade direction
    pub fn with_direction(mut self, direction: TradeDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Switch to volatility-based stop with the given value and multiplier
    pub fn with_volatility(
        mut self,
        value: impl Into<String>,
        multiplier: VolatilityMultiplier,
    ) -> Self {
        self.stop_loss_method = StopLossMethod::VolatilityBased;
        self.volatility_value = value.into();
        self.volatility_multiplier = multiplier;
        self
    }

    /// Set reward multiplier
    pub fn with_reward_multiplier(mut self, multiplier: Option<RewardMultiplier>) -> Self {
        self.reward_multiplier = multiplier;
        self
    }

    /// Set account balance text
    pub fn with_account_balance(mut self, text: impl Into<String>) -> Self {
        self.account_balance = text.into();
        self
    }

    /// Set risk budget text
    pub fn with_risk_budget(mut self, text: impl Into<String>) -> Self {
        self.risk_budget = text.into();
        self
    }

    /// Read a text field
    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::EntryPrice => &self.entry_price,
            Field::StopLossPrice => &self.stop_loss_price,
            Field::VolatilityValue => &self.volatility_value,
            Field::AccountBalance => &self.account_balance,
            Field::RiskBudget => &self.risk_budget,
        }
    }

    /// Mutable access to a text field
    pub fn text_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::EntryPrice => &mut self.entry_price,
            Field::StopLossPrice => &mut self.stop_loss_price,
            Field::VolatilityValue => &mut self.volatility_value,
            Field::AccountBalance => &mut self.account_balance,
            Field::RiskBudget => &mut self.risk_budget,
        }
    }

    /// Whether the stop-loss field is derived rather than typed
    pub fn stop_loss_locked(&self) -> bool {
        self.stop_loss_method == StopLossMethod::VolatilityBased
    }

    /// Build a snapshot from option text, as supplied by a form layer
    pub fn parse_selections(
        direction: &str,
        method: &str,
        volatility_multiplier: &str,
        reward_multiplier: &str,
    ) -> Result<Self, OptionParseError> {
        Ok(Self {
            direction: direction.parse()?,
            stop_loss_method: method.parse()?,
            volatility_multiplier: volatility_multiplier.parse()?,
            reward_multiplier: RewardMultiplier::parse_optional(reward_multiplier)?,
            ..Self::default()
        })
    }
}
