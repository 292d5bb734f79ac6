//! Interactive session commands
//!
//! One command per line: `<field> <value>` edits a text field (an empty
//! value clears it), `direction`, `method`, `atr-multiplier` and `reward`
//! change selections, and `show`, `summary`, `reset`, `help`, `quit` act on
//! the session.

use std::str::FromStr;
use thiserror::Error;

use super::{InputError, TradeCalculator};
use crate::engine::DerivedOutputs;
use crate::trade::{
    Field, OptionParseError, RewardMultiplier, StopLossMethod, TradeDirection,
    VolatilityMultiplier,
};

/// Errors from parsing or applying a session command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Line does not start with a known command
    #[error("unknown command '{0}' (type 'help' for a list)")]
    UnknownCommand(String),
    /// Command needs a value
    #[error("'{0}' needs a value")]
    MissingValue(&'static str),
    /// Option text not recognised
    #[error(transparent)]
    InvalidOption(#[from] OptionParseError),
    /// Edit rejected by the calculator
    #[error(transparent)]
    Input(#[from] InputError),
}

/// A parsed session line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Replace a text field
    Set(Field, String),
    /// Change trade direction
    Direction(TradeDirection),
    /// Change stop-loss method
    Method(StopLossMethod),
    /// Change volatility multiplier
    VolatilityMultiplier(VolatilityMultiplier),
    /// Change or clear reward multiplier
    Reward(Option<RewardMultiplier>),
    /// Print derived metrics
    Show,
    /// Print trade summary
    Summary,
    /// Clear everything
    Reset,
    /// Print command list
    Help,
    /// End the session
    Quit,
}

impl SessionCommand {
    /// Command reference printed by `help`
    pub const HELP: &'static str = "\
Commands:
  entry <price>             entry price
  stop <price>              stop-loss price (manual method only)
  atr <points>              volatility (ATR) value
  balance <usd>             account balance
  risk <usd>                risk budget per trade
  direction long|short      trade direction
  method manual|atr         stop-loss method
  atr-multiplier 1.5|2      volatility multiplier
  reward 2|2.5|3|none       reward multiplier
  show                      print derived metrics
  summary                   print trade summary
  reset                     clear every field
  help                      print this list
  quit                      leave the session";

    /// Whether the command changes the snapshot
    pub fn is_edit(&self) -> bool {
        matches!(
            self,
            Self::Set(..)
                | Self::Direction(_)
                | Self::Method(_)
                | Self::VolatilityMultiplier(_)
                | Self::Reward(_)
                | Self::Reset
        )
    }

    /// Apply an edit to the calculator
    ///
    /// Non-edit commands leave the calculator untouched.
    pub fn apply<'a>(
        &self,
        calculator: &'a mut TradeCalculator,
    ) -> Result<&'a DerivedOutputs, SessionError> {
        let outputs = match self {
            Self::Set(field, text) => calculator.set_field(*field, text.clone())?,
            Self::Direction(direction) => calculator.set_direction(*direction),
            Self::Method(method) => calculator.set_stop_loss_method(*method),
            Self::VolatilityMultiplier(multiplier) => {
                calculator.set_volatility_multiplier(*multiplier)
            }
            Self::Reward(multiplier) => calculator.set_reward_multiplier(*multiplier),
            Self::Reset => calculator.reset(),
            Self::Show | Self::Summary | Self::Help | Self::Quit => calculator.outputs(),
        };
        Ok(outputs)
    }
}

impl FromStr for SessionCommand {
    type Err = SessionError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };
        let keyword = head.to_ascii_lowercase();

        if let Ok(field) = keyword.parse::<Field>() {
            return Ok(Self::Set(field, rest.to_string()));
        }

        let required = |name: &'static str| {
            if rest.is_empty() {
                Err(SessionError::MissingValue(name))
            } else {
                Ok(rest)
            }
        };

        match keyword.as_str() {
            "direction" | "side" => Ok(Self::Direction(required("direction")?.parse()?)),
            "method" => Ok(Self::Method(required("method")?.parse()?)),
            "atr-multiplier" | "atr_multiplier" | "multiplier" => Ok(Self::VolatilityMultiplier(
                required("atr-multiplier")?.parse()?,
            )),
            "reward" | "rr" => Ok(Self::Reward(RewardMultiplier::parse_optional(rest)?)),
            "long" | "buy" => Ok(Self::Direction(TradeDirection::Long)),
            "short" | "sell" => Ok(Self::Direction(TradeDirection::Short)),
            "show" | "" => Ok(Self::Show),
            "summary" => Ok(Self::Summary),
            "reset" | "clear" => Ok(Self::Reset),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            _ => Err(SessionError::UnknownCommand(head.to_string())),
        }
    }
}
