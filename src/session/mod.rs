//! Calculator session
//!
//! Owns one input snapshot, applies edits and keeps the derived outputs in
//! step with it. Under the volatility-based method the resolved stop is
//! written back into the snapshot's stop-loss text, so the form always shows
//! the stop the numbers were computed from.

mod command;

pub use command::{SessionCommand, SessionError};

use thiserror::Error;

use crate::engine::{recompute, DerivedOutputs};
use crate::summary::TradeSummary;
use crate::trade::{
    Field, RewardMultiplier, StopLossMethod, TradeDirection, TradeInputs, VolatilityMultiplier,
};

/// Errors from editing the snapshot
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The stop is derived from volatility and cannot be typed
    #[error("stop-loss is calculated from volatility; switch to the manual method to edit it")]
    StopLossLocked,
}

/// Trade calculator holding the current form state
#[derive(Debug, Clone, Default)]
pub struct TradeCalculator {
    inputs: TradeInputs,
    outputs: DerivedOutputs,
}

impl TradeCalculator {
    /// Create a calculator in the reset state
    pub fn new() -> Self {
        Self::with_inputs(TradeInputs::default())
    }

    /// Create a calculator from an existing snapshot
    pub fn with_inputs(inputs: TradeInputs) -> Self {
        let mut calculator = Self {
            inputs,
            outputs: DerivedOutputs::default(),
        };
        calculator.recompute();
        calculator
    }

    /// Current input snapshot
    pub fn inputs(&self) -> &TradeInputs {
        &self.inputs
    }

    /// Outputs for the current snapshot
    pub fn outputs(&self) -> &DerivedOutputs {
        &self.outputs
    }

    /// Trade plan summary, when the plan is complete
    pub fn summary(&self) -> Option<TradeSummary> {
        TradeSummary::from_state(&self.inputs, &self.outputs)
    }

    /// Replace a text field
    pub fn set_field(
        &mut self,
        field: Field,
        text: impl Into<String>,
    ) -> Result<&DerivedOutputs, InputError> {
        if field == Field::StopLossPrice && self.inputs.stop_loss_locked() {
            return Err(InputError::StopLossLocked);
        }

        *self.inputs.text_mut(field) = text.into();
        Ok(self.recompute())
    }

    /// Change trade direction
    pub fn set_direction(&mut self, direction: TradeDirection) -> &DerivedOutputs {
        self.inputs.direction = direction;
        self.recompute()
    }

    /// Change stop-loss method
    ///
    /// Switching back to manual keeps the last resolved stop as typed text.
    pub fn set_stop_loss_method(&mut self, method: StopLossMethod) -> &DerivedOutputs {
        self.inputs.stop_loss_method = method;
        self.recompute()
    }

    /// Change volatility multiplier
    pub fn set_volatility_multiplier(
        &mut self,
        multiplier: VolatilityMultiplier,
    ) -> &DerivedOutputs {
        self.inputs.volatility_multiplier = multiplier;
        self.recompute()
    }

    /// Change or clear the reward multiplier
    pub fn set_reward_multiplier(
        &mut self,
        multiplier: Option<RewardMultiplier>,
    ) -> &DerivedOutputs {
        self.inputs.reward_multiplier = multiplier;
        self.recompute()
    }

    /// Return every field to its default
    pub fn reset(&mut self) -> &DerivedOutputs {
        self.inputs = TradeInputs::default();
        tracing::debug!("Calculator reset");
        self.recompute()
    }

    /// Rerun the engine against the current snapshot
    pub fn recompute(&mut self) -> &DerivedOutputs {
        self.outputs = recompute(&self.inputs);

        if self.inputs.stop_loss_locked() {
            self.inputs.stop_loss_price = self
                .outputs
                .stop_loss_price
                .map(|stop| format!("{stop:.2}"))
                .unwrap_or_default();
        }

        &self.outputs
    }
}
