//! trade-calc: Risk, take-profit and lot-size calculator for XAUUSD trades
//!
//! This library provides the core components for:
//! - Stop-loss resolution, manual or volatility (ATR) based
//! - Risk distance with direction checks
//! - Take-profit projection from a reward multiplier
//! - Lot sizing and risk percentage from account inputs
//! - A form-like calculator session with reset
//! - Trade plan summary rendering
//! - CLI front end with configuration and structured logging

pub mod cli;
pub mod config;
pub mod engine;
pub mod session;
pub mod summary;
pub mod telemetry;
pub mod trade;

pub use engine::{recompute, DerivedOutputs, POINT_VALUE};
pub use session::TradeCalculator;
pub use summary::TradeSummary;
pub use trade::{
    RewardMultiplier, StopLossMethod, TradeDirection, TradeInputs, VolatilityMultiplier,
};
