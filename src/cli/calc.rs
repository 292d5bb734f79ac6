//! Calc command implementation

use clap::Args;

use super::output::render_metrics;
use crate::config::{Config, DefaultsConfig, DisplayConfig};
use crate::session::TradeCalculator;
use crate::trade::{RewardMultiplier, TradeDirection, TradeInputs, VolatilityMultiplier};

#[derive(Args, Debug, Default)]
pub struct CalcArgs {
    /// Entry price
    #[arg(long, allow_hyphen_values = true)]
    pub entry: String,

    /// Stop-loss price (manual method)
    #[arg(long, conflicts_with = "atr", allow_hyphen_values = true)]
    pub stop: Option<String>,

    /// Volatility (ATR) value in points; selects the volatility-based stop
    #[arg(long, allow_hyphen_values = true)]
    pub atr: Option<String>,

    /// Volatility multiplier: 1.5 or 2
    #[arg(long, requires = "atr")]
    pub atr_multiplier: Option<VolatilityMultiplier>,

    /// Trade direction: long or short
    #[arg(long)]
    pub direction: Option<TradeDirection>,

    /// Reward multiplier: 2, 2.5, 3 or none
    #[arg(long)]
    pub reward: Option<String>,

    /// Account balance in USD
    #[arg(long, allow_hyphen_values = true)]
    pub balance: Option<String>,

    /// Risk budget per trade in USD
    #[arg(long, allow_hyphen_values = true)]
    pub risk: Option<String>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl CalcArgs {
    /// Build the input snapshot, filling omitted selections from config
    pub fn build_inputs(&self, defaults: &DefaultsConfig) -> anyhow::Result<TradeInputs> {
        let reward = match &self.reward {
            Some(text) => RewardMultiplier::parse_optional(text)?,
            None => defaults.reward_multiplier,
        };

        let mut inputs = TradeInputs::new()
            .with_entry_price(self.entry.as_str())
            .with_direction(self.direction.unwrap_or(defaults.direction))
            .with_reward_multiplier(reward)
            .with_account_balance(self.balance.clone().unwrap_or_default())
            .with_risk_budget(self.risk.clone().unwrap_or_default());

        inputs = match &self.atr {
            Some(atr) => inputs.with_volatility(
                atr.as_str(),
                self.atr_multiplier.unwrap_or(defaults.volatility_multiplier),
            ),
            None => inputs.with_stop_loss_price(self.stop.clone().unwrap_or_default()),
        };

        Ok(inputs)
    }

    /// Render the calculation for the given calculator state
    pub fn render(
        &self,
        calculator: &TradeCalculator,
        display: &DisplayConfig,
    ) -> anyhow::Result<String> {
        let summary = calculator.summary();

        if self.json {
            let value = serde_json::json!({
                "inputs": calculator.inputs(),
                "outputs": calculator.outputs(),
                "summary": summary,
            });
            return Ok(serde_json::to_string_pretty(&value)?);
        }

        let mut out = format!(
            "{} {} @ {}\n",
            display.instrument,
            calculator.inputs().direction,
            calculator.inputs().entry_price
        );
        out.push_str(&render_metrics(calculator.outputs(), display));
        if let Some(summary) = summary {
            out.push('\n');
            out.push_str(&summary.render(display));
        }
        Ok(out)
    }

    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let inputs = self.build_inputs(&config.defaults)?;
        let calculator = TradeCalculator::with_inputs(inputs);

        tracing::info!(
            risk_valid = calculator.outputs().has_valid_risk(),
            summary = calculator.summary().is_some(),
            "Calculated trade plan"
        );

        println!("{}", self.render(&calculator, &config.display)?.trim_end());
        Ok(())
    }
}
