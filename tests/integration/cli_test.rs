//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;

fn trade_calc() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_trade-calc"));
    cmd.args(["--config", "/nonexistent/trade-calc.toml"]);
    cmd
}

#[test]
fn test_help() {
    trade_calc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("calc"))
        .stdout(predicate::str::contains("session"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_calc_scenario_a() {
    trade_calc()
        .args([
            "calc", "--entry", "2350.50", "--stop", "2340.00", "--reward", "2", "--balance",
            "10000", "--risk", "100",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("10.50 points"))
        .stdout(predicate::str::contains("$2371.50"))
        .stdout(predicate::str::contains("Lot Size         0.10"))
        .stdout(predicate::str::contains("1.00 %"))
        .stdout(predicate::str::contains("Trade Summary"));
}

#[test]
fn test_calc_volatility_json() {
    trade_calc()
        .args([
            "calc",
            "--entry",
            "2350.50",
            "--direction",
            "short",
            "--atr",
            "12.50",
            "--atr-multiplier",
            "2",
            "--json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"stop_loss_price\": \"2375.50\""))
        .stdout(predicate::str::contains("\"summary\": null"));
}

#[test]
fn test_calc_json_summary_includes_projected_reward() {
    trade_calc()
        .args([
            "calc", "--entry", "2350.50", "--stop", "2340", "--reward", "2", "--balance", "10000",
            "--risk", "100", "--json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"projected_reward\": \"200.00\""))
        .stdout(predicate::str::contains("\"position_size\": \"0.10\""));
}

#[test]
fn test_calc_accepts_negative_balance() {
    trade_calc()
        .args([
            "calc", "--entry", "2350.50", "--stop", "2340", "--balance", "-500", "--risk", "100",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Risk Percentage  -"))
        .stdout(predicate::str::contains("Lot Size         0.10"));
}

#[test]
fn test_calc_wrong_side_shows_dashes() {
    trade_calc()
        .args([
            "calc", "--entry", "2350.50", "--stop", "2360", "--balance", "10000", "--risk", "100",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Risk             -"))
        .stdout(predicate::str::contains("1.00 %"))
        .stdout(predicate::str::contains("Trade Summary").not());
}

#[test]
fn test_calc_rejects_unknown_reward() {
    trade_calc()
        .args(["calc", "--entry", "100", "--stop", "90", "--reward", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reward multiplier"));
}

#[test]
fn test_calc_stop_conflicts_with_atr() {
    trade_calc()
        .args(["calc", "--entry", "100", "--stop", "90", "--atr", "5"])
        .assert()
        .failure();
}

#[test]
fn test_session_from_stdin() {
    trade_calc()
        .args(["session", "--quiet"])
        .write_stdin("entry 2350.50\nshort\nmethod atr\natr 12.50\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("(stop-loss set to 2375.50)"))
        .stdout(predicate::str::contains("25.00 points"));
}

#[test]
fn test_config_command() {
    trade_calc()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("instrument=XAUUSD"))
        .stdout(predicate::str::contains("Point value: 100"));
}

#[test]
fn test_missing_config_warns_on_stderr() {
    trade_calc()
        .arg("config")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Warning: Could not load config from /nonexistent/trade-calc.toml",
        ))
        .stderr(predicate::str::contains("Using default configuration"));
}

#[test]
fn test_malformed_config_fails() {
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), "[defaults\n").unwrap();

    assert_cmd::Command::new(env!("CARGO_BIN_EXE_trade-calc"))
        .arg("--config")
        .arg(file.path())
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config"));
}
