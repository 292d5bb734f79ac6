use clap::Parser;
use trade_calc::cli::{Cli, Commands};
use trade_calc::config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    if !std::path::Path::new(&cli.config).exists() {
        eprintln!("Warning: Could not load config from {}: file not found", cli.config);
        eprintln!("Using default configuration");
    }
    let mut config = Config::load_or_default(&cli.config)?;
    if let Some(level) = &cli.log_level {
        config.telemetry.log_level = level.clone();
    }
    if let Some(format) = cli.log_format {
        config.telemetry.log_format = format;
    }

    // Initialize telemetry
    trade_calc::telemetry::init_telemetry(&config.telemetry)?;
    tracing::debug!(path = %cli.config, "Configuration loaded");

    match cli.command {
        Commands::Calc(args) => args.execute(&config)?,
        Commands::Session(args) => args.execute(&config)?,
        Commands::Config => {
            println!("Current configuration:");
            println!(
                "  Defaults: direction={}, atr_multiplier={}, reward={}",
                config.defaults.direction,
                config.defaults.volatility_multiplier,
                config
                    .defaults
                    .reward_multiplier
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "none".to_string())
            );
            println!(
                "  Display: instrument={}, currency={:?}",
                config.display.instrument, config.display.currency_symbol
            );
            println!(
                "  Telemetry: level={}, format={}",
                config.telemetry.log_level, config.telemetry.log_format
            );
            println!("  Point value: {} USD per point per lot", trade_calc::POINT_VALUE);
        }
    }

    Ok(())
}
