//! Take-profit projection

use rust_decimal::Decimal;

use crate::trade::{round_price, RewardMultiplier, TradeDirection};

/// Project the take-profit price at `multiplier` times the risk distance
pub fn take_profit(
    entry: Decimal,
    risk_distance: Decimal,
    multiplier: RewardMultiplier,
    direction: TradeDirection,
) -> Option<Decimal> {
    let profit_distance = risk_distance.checked_mul(multiplier.value())?;
    let target = match direction {
        TradeDirection::Long => entry.checked_add(profit_distance)?,
        TradeDirection::Short => entry.checked_sub(profit_distance)?,
    };
    Some(round_price(target))
}
