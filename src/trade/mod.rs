//! Trade setup module
//!
//! Input snapshot, option sets and numeric text handling

mod input;
mod numeric;
mod types;

pub use input::{Field, TradeInputs};
pub use numeric::{parse_number, round_price, OUTPUT_DECIMALS};
pub use types::{
    OptionParseError, RewardMultiplier, StopLossMethod, TradeDirection, VolatilityMultiplier,
};
