//! Trade plan summary
//!
//! The review step shown once a plan is complete: a take-profit exists and
//! the recommended lot size is above zero. Rendering uses two decimals
//! throughout; the engine itself never formats.

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

use crate::config::DisplayConfig;
use crate::engine::DerivedOutputs;
use crate::trade::{
    parse_number, round_price, RewardMultiplier, TradeDirection, TradeInputs, OUTPUT_DECIMALS,
};

/// Complete trade plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TradeSummary {
    pub direction: TradeDirection,
    pub entry_price: Decimal,
    pub stop_loss_price: Decimal,
    pub take_profit_price: Decimal,
    pub risk_budget: Decimal,
    /// Balance is not needed for sizing, so it may be missing
    pub account_balance: Option<Decimal>,
    pub risk_percentage: Option<Decimal>,
    pub reward_multiplier: RewardMultiplier,
    /// Risk budget times reward multiplier, in USD
    pub projected_reward: Decimal,
    pub position_size: Decimal,
}

impl TradeSummary {
    /// Build a summary from the current state, `None` while the plan is incomplete
    pub fn from_state(inputs: &TradeInputs, outputs: &DerivedOutputs) -> Option<Self> {
        let take_profit_price = outputs.take_profit_price?;
        let position_size = outputs.position_size.filter(|size| *size > Decimal::ZERO)?;
        let risk_budget = parse_number(&inputs.risk_budget)?;
        let reward_multiplier = inputs.reward_multiplier?;
        let mut projected_reward =
            round_price(risk_budget.checked_mul(reward_multiplier.value())?);
        projected_reward.rescale(OUTPUT_DECIMALS);

        Some(Self {
            direction: inputs.direction,
            entry_price: parse_number(&inputs.entry_price)?,
            stop_loss_price: outputs.stop_loss_price?,
            take_profit_price,
            risk_budget,
            account_balance: parse_number(&inputs.account_balance),
            risk_percentage: outputs.risk_percentage,
            reward_multiplier,
            projected_reward,
            position_size,
        })
    }

    /// Risk-to-reward ratio label, e.g. `1:2.5`
    pub fn risk_reward_ratio(&self) -> String {
        format!("1:{}", self.reward_multiplier)
    }

    /// Render as an aligned text table
    pub fn render(&self, display: &DisplayConfig) -> String {
        let currency = &display.currency_symbol;
        let money = |value: Decimal| format!("{currency}{value:.2}");

        let rows = [
            ("Direction", self.direction.to_string()),
            ("Entry Price", money(self.entry_price)),
            ("Stop Loss Price", money(self.stop_loss_price)),
            ("Take Profit Price", money(self.take_profit_price)),
            ("Risk Per Trade", money(self.risk_budget)),
            (
                "Account Balance",
                self.account_balance.map(money).unwrap_or_else(|| "-".to_string()),
            ),
            (
                "Risk Percentage",
                self.risk_percentage
                    .map(|pct| format!("{pct:.2} %"))
                    .unwrap_or_else(|| "-".to_string()),
            ),
            ("Risk:Reward Ratio", self.risk_reward_ratio()),
            ("Projected Reward", money(self.projected_reward)),
            (
                "Lot Size",
                format!("{:.2} ({})", self.position_size, display.instrument),
            ),
        ];

        let mut out = String::from("Trade Summary\n");
        for (label, value) in rows {
            out.push_str(&format!("  {label:<18} {value}\n"));
        }
        out
    }
}

impl fmt::Display for TradeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&DisplayConfig::default()))
    }
}
