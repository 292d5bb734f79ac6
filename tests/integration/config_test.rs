//! Configuration loading tests

use std::io::Write;
use trade_calc::config::Config;
use trade_calc::telemetry::LogFormat;
use trade_calc::{RewardMultiplier, TradeDirection};

#[test]
fn test_config_example_loads() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config.toml.example");
    let config = Config::load(path).unwrap();
    assert_eq!(config.defaults.direction, TradeDirection::Long);
    assert_eq!(config.telemetry.log_format, LogFormat::Pretty);
}

#[test]
fn test_config_file_overrides() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
        [defaults]
        direction = "sell"
        reward_multiplier = "2.5"

        [telemetry]
        log_format = "json"
        "#
    )
    .unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.defaults.direction, TradeDirection::Short);
    assert_eq!(config.defaults.reward_multiplier, Some(RewardMultiplier::TwoAndHalf));
    assert_eq!(config.telemetry.log_format, LogFormat::Json);
    assert_eq!(config.telemetry.log_level, "warn");
}
