//! Risk distance

use rust_decimal::Decimal;

use crate::trade::TradeDirection;

/// Distance between entry and stop in points
///
/// `None` when the stop equals the entry or sits on the wrong side of it:
/// a long stop must be strictly below entry, a short stop strictly above.
/// The result is kept at full precision.
pub fn risk_distance(entry: Decimal, stop: Decimal, direction: TradeDirection) -> Option<Decimal> {
    let valid_side = match direction {
        TradeDirection::Long => stop < entry,
        TradeDirection::Short => stop > entry,
    };

    if !valid_side {
        tracing::debug!(%entry, %stop, %direction, "Stop on wrong side of entry");
        return None;
    }

    entry.checked_sub(stop).map(|d| d.abs())
}
