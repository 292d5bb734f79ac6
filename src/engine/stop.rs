//! Stop-loss resolution

use rust_decimal::Decimal;

use crate::trade::{parse_number, round_price, StopLossMethod, TradeDirection, TradeInputs};

/// Produces the stop-loss price the risk stage works from
pub trait StopResolver {
    /// Resolve the stop for a snapshot, `None` when unavailable
    fn resolve(&self, inputs: &TradeInputs) -> Option<Decimal>;

    /// Get the method name
    fn method_name(&self) -> &'static str;
}

/// Stop typed in by the user, passed through as-is
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualStop;

impl StopResolver for ManualStop {
    fn resolve(&self, inputs: &TradeInputs) -> Option<Decimal> {
        parse_number(&inputs.stop_loss_price)
    }

    fn method_name(&self) -> &'static str {
        "manual"
    }
}

/// Stop offset from entry by volatility value times multiplier
#[derive(Debug, Clone, Copy, Default)]
pub struct VolatilityStop;

impl VolatilityStop {
    /// Calculate the stop price, rounded to two decimals
    ///
    /// Requires a positive volatility value and multiplier.
    pub fn calculate(
        entry: Decimal,
        volatility: Decimal,
        multiplier: Decimal,
        direction: TradeDirection,
    ) -> Option<Decimal> {
        if volatility <= Decimal::ZERO || multiplier <= Decimal::ZERO {
            return None;
        }

        let offset = volatility.checked_mul(multiplier)?;
        let stop = match direction {
            TradeDirection::Long => entry.checked_sub(offset)?,
            TradeDirection::Short => entry.checked_add(offset)?,
        };
        Some(round_price(stop))
    }
}

impl StopResolver for VolatilityStop {
    fn resolve(&self, inputs: &TradeInputs) -> Option<Decimal> {
        let entry = parse_number(&inputs.entry_price);
        let volatility = parse_number(&inputs.volatility_value);

        let stop = match (entry, volatility) {
            (Some(entry), Some(volatility)) => Self::calculate(
                entry,
                volatility,
                inputs.volatility_multiplier.value(),
                inputs.direction,
            ),
            _ => None,
        };

        if stop.is_none() {
            tracing::debug!(
                entry = %inputs.entry_price,
                volatility = %inputs.volatility_value,
                "Volatility stop unavailable"
            );
        }
        stop
    }

    fn method_name(&self) -> &'static str {
        "volatility"
    }
}

/// Select the resolver for a stop-loss method
pub fn stop_resolver(method: StopLossMethod) -> &'static dyn StopResolver {
    match method {
        StopLossMethod::Manual => &ManualStop,
        StopLossMethod::VolatilityBased => &VolatilityStop,
    }
}
