//! Derived trade metrics engine
//!
//! Pure recomputation of every derived quantity from an input snapshot:
//! - Stop-loss resolution (manual or volatility-based)
//! - Risk distance with direction check
//! - Take-profit projection
//! - Position size and risk percentage
//!
//! Each output is `None` when it cannot be computed. Failures only reach the
//! outputs that depend on them.

mod risk;
mod sizing;
mod stop;
mod target;

pub use risk::risk_distance;
pub use sizing::{position_size, risk_percentage, POINT_VALUE};
pub use stop::{stop_resolver, ManualStop, StopResolver, VolatilityStop};
pub use target::take_profit;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::trade::{parse_number, TradeInputs};

/// Everything derived from one input snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedOutputs {
    /// Stop-loss price used for the risk calculation
    pub stop_loss_price: Option<Decimal>,
    /// Absolute entry/stop distance in points, unrounded
    pub risk_distance: Option<Decimal>,
    /// Projected take-profit price
    pub take_profit_price: Option<Decimal>,
    /// Recommended lot size
    pub position_size: Option<Decimal>,
    /// Risk budget as a percentage of account balance
    pub risk_percentage: Option<Decimal>,
}

impl DerivedOutputs {
    /// Whether the entry/stop pair forms a valid setup
    pub fn has_valid_risk(&self) -> bool {
        self.risk_distance.is_some()
    }
}

/// Run all four stages against a snapshot
pub fn recompute(inputs: &TradeInputs) -> DerivedOutputs {
    let entry = parse_number(&inputs.entry_price);

    let stop_loss_price = stop_resolver(inputs.stop_loss_method).resolve(inputs);

    let risk_distance = match (entry, stop_loss_price) {
        (Some(entry), Some(stop)) => risk_distance(entry, stop, inputs.direction),
        _ => None,
    };

    let take_profit_price = match (entry, risk_distance, inputs.reward_multiplier) {
        (Some(entry), Some(risk), Some(multiplier)) => {
            take_profit(entry, risk, multiplier, inputs.direction)
        }
        _ => None,
    };

    let risk_budget = parse_number(&inputs.risk_budget);
    let account_balance = parse_number(&inputs.account_balance);

    let position_size = match (risk_budget, risk_distance) {
        (Some(budget), Some(risk)) => position_size(budget, risk),
        _ => None,
    };

    let risk_percentage = match (risk_budget, account_balance) {
        (Some(budget), Some(balance)) => risk_percentage(budget, balance),
        _ => None,
    };

    let outputs = DerivedOutputs {
        stop_loss_price,
        risk_distance,
        take_profit_price,
        position_size,
        risk_percentage,
    };

    tracing::debug!(
        direction = %inputs.direction,
        method = %inputs.stop_loss_method,
        stop = ?outputs.stop_loss_price,
        risk = ?outputs.risk_distance,
        take_profit = ?outputs.take_profit_price,
        lots = ?outputs.position_size,
        risk_pct = ?outputs.risk_percentage,
        "Recomputed trade metrics"
    );

    outputs
}
