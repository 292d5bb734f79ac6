//! Numeric text handling
//!
//! Form fields arrive as free text. A field counts as a number only when the
//! trimmed text parses as a plain or scientific decimal; anything else
//! (empty, words, NaN, infinities, out-of-range magnitudes) is not a number.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Decimal places kept on every rounded output
pub const OUTPUT_DECIMALS: u32 = 2;

/// Parse free-form numeric text
pub fn parse_number(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

/// Round to two decimal places, halves away from zero
pub fn round_price(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(OUTPUT_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
}
