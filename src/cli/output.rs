//! Metric rendering for terminal output

use rust_decimal::Decimal;

use crate::config::DisplayConfig;
use crate::engine::DerivedOutputs;

const UNAVAILABLE: &str = "-";

fn or_dash(value: Option<Decimal>, render: impl Fn(Decimal) -> String) -> String {
    value.map(render).unwrap_or_else(|| UNAVAILABLE.to_string())
}

/// Render derived metrics as an aligned table, `-` for unavailable values
pub fn render_metrics(outputs: &DerivedOutputs, display: &DisplayConfig) -> String {
    let currency = &display.currency_symbol;
    let money = |value: Decimal| format!("{currency}{value:.2}");

    let rows = [
        ("Stop Loss", or_dash(outputs.stop_loss_price, money)),
        (
            "Risk",
            or_dash(outputs.risk_distance, |risk| format!("{risk:.2} points")),
        ),
        ("Take Profit", or_dash(outputs.take_profit_price, money)),
        (
            "Lot Size",
            or_dash(outputs.position_size, |size| format!("{size:.2}")),
        ),
        (
            "Risk Percentage",
            or_dash(outputs.risk_percentage, |pct| format!("{pct:.2} %")),
        ),
    ];

    let mut out = String::new();
    for (label, value) in rows {
        out.push_str(&format!("  {label:<16} {value}\n"));
    }
    out
}
