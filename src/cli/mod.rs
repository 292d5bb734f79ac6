//! CLI interface for trade-calc
//!
//! Provides subcommands for:
//! - `calc`: One-shot calculation from flags
//! - `session`: Interactive form on stdin
//! - `config`: Show effective configuration

mod calc;
mod output;
mod session;

pub use calc::CalcArgs;
pub use output::render_metrics;
pub use session::{run_session, SessionArgs};

use clap::{Parser, Subcommand};

use crate::telemetry::LogFormat;

#[derive(Parser, Debug)]
#[command(name = "trade-calc")]
#[command(about = "Risk, take-profit and lot-size calculator for XAUUSD trades")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// Log level filter, overrides the config file
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log output format: pretty or json
    #[arg(long, global = true)]
    pub log_format: Option<LogFormat>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Calculate a trade plan from flags
    Calc(CalcArgs),
    /// Interactive calculator reading commands from stdin
    Session(SessionArgs),
    /// Show configuration
    Config,
}
