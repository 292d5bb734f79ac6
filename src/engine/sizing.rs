//! Position sizing and risk percentage

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::trade::round_price;

/// Dollar value of one point for one standard XAUUSD lot
pub const POINT_VALUE: Decimal = dec!(100);

/// Lot size that loses exactly `risk_budget` when the stop is hit
///
/// `None` unless the risk distance is positive.
pub fn position_size(risk_budget: Decimal, risk_distance: Decimal) -> Option<Decimal> {
    if risk_distance <= Decimal::ZERO {
        return None;
    }

    let risk_per_lot = risk_distance.checked_mul(POINT_VALUE)?;
    risk_budget.checked_div(risk_per_lot).map(round_price)
}

/// Risk budget as a percentage of account balance
///
/// `None` unless the balance is positive.
pub fn risk_percentage(risk_budget: Decimal, account_balance: Decimal) -> Option<Decimal> {
    if account_balance <= Decimal::ZERO {
        return None;
    }

    risk_budget
        .checked_div(account_balance)?
        .checked_mul(dec!(100))
        .map(round_price)
}
