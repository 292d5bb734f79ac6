//! Session command implementation

use clap::Args;
use std::io::{self, BufRead, Write};

use super::output::render_metrics;
use crate::config::{Config, DisplayConfig};
use crate::session::{SessionCommand, TradeCalculator};

#[derive(Args, Debug, Default)]
pub struct SessionArgs {
    /// Hide the prompt (for piped input)
    #[arg(long)]
    pub quiet: bool,
}

impl SessionArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut calculator = TradeCalculator::new();

        tracing::info!("Starting interactive session");
        run_session(
            &mut calculator,
            stdin.lock(),
            stdout.lock(),
            &config.display,
            !self.quiet,
        )?;
        tracing::info!("Session ended");
        Ok(())
    }
}

/// Drive a calculator from line commands until `quit` or end of input
///
/// Every edit prints the recomputed metrics. A bad line prints an error and
/// the session carries on.
pub fn run_session<R: BufRead, W: Write>(
    calculator: &mut TradeCalculator,
    reader: R,
    mut writer: W,
    display: &DisplayConfig,
    prompt: bool,
) -> anyhow::Result<()> {
    if prompt {
        writeln!(
            writer,
            "{} trade calculator. Type 'help' for commands.",
            display.instrument
        )?;
        write!(writer, "> ")?;
        writer.flush()?;
    }

    for line in reader.lines() {
        let line = line?;
        let command = match line.parse::<SessionCommand>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(writer, "error: {e}")?;
                prompt_again(&mut writer, prompt)?;
                continue;
            }
        };

        match &command {
            SessionCommand::Quit => break,
            SessionCommand::Help => writeln!(writer, "{}", SessionCommand::HELP)?,
            SessionCommand::Summary => match calculator.summary() {
                Some(summary) => write!(writer, "{}", summary.render(display))?,
                None => writeln!(writer, "Trade plan incomplete")?,
            },
            SessionCommand::Show => {
                write!(writer, "{}", render_metrics(calculator.outputs(), display))?
            }
            _ => match command.apply(calculator) {
                Ok(outputs) => {
                    write!(writer, "{}", render_metrics(outputs, display))?;
                    report_resolved_stop(&mut writer, calculator)?;
                }
                Err(e) => {
                    tracing::debug!(error = %e, "Rejected session edit");
                    writeln!(writer, "error: {e}")?;
                }
            },
        }

        prompt_again(&mut writer, prompt)?;
    }

    writer.flush()?;
    Ok(())
}

/// Echo the volatility-derived stop after an accepted edit
fn report_resolved_stop<W: Write>(writer: &mut W, calculator: &TradeCalculator) -> io::Result<()> {
    let inputs = calculator.inputs();
    if inputs.stop_loss_locked() && !inputs.stop_loss_price.is_empty() {
        writeln!(writer, "  (stop-loss set to {})", inputs.stop_loss_price)?;
    }
    Ok(())
}

fn prompt_again<W: Write>(writer: &mut W, prompt: bool) -> io::Result<()> {
    if prompt {
        write!(writer, "> ")?;
        writer.flush()?;
    }
    Ok(())
}
