//! Integration tests

mod cli_test;
mod config_test;
mod scenario_test;
