//! End-to-end calculation scenarios

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use trade_calc::session::TradeCalculator;
use trade_calc::trade::Field;
use trade_calc::{
    recompute, DerivedOutputs, RewardMultiplier, StopLossMethod, TradeDirection, TradeInputs,
    VolatilityMultiplier, POINT_VALUE,
};

fn manual(entry: &str, stop: &str, direction: TradeDirection) -> TradeInputs {
    TradeInputs::new()
        .with_entry_price(entry)
        .with_stop_loss_price(stop)
        .with_direction(direction)
}

#[test]
fn test_scenario_a_full_plan() {
    let inputs = manual("2350.50", "2340.00", TradeDirection::Long)
        .with_reward_multiplier(Some(RewardMultiplier::Two))
        .with_risk_budget("100")
        .with_account_balance("10000");

    let outputs = recompute(&inputs);
    assert_eq!(outputs.risk_distance, Some(dec!(10.50)));
    assert_eq!(outputs.take_profit_price, Some(dec!(2371.50)));
    assert_eq!(outputs.position_size, Some(dec!(0.10)));
    assert_eq!(outputs.risk_percentage, Some(dec!(1.00)));
}

#[test]
fn test_scenario_b_volatility_short() {
    let inputs = TradeInputs::new()
        .with_entry_price("2350.50")
        .with_direction(TradeDirection::Short)
        .with_volatility("12.50", VolatilityMultiplier::Two);

    let outputs = recompute(&inputs);
    assert_eq!(outputs.stop_loss_price, Some(dec!(2375.50)));
    assert_eq!(outputs.risk_distance, Some(dec!(25.00)));
}

#[test]
fn test_scenario_c_wrong_side() {
    let inputs = manual("2350.50", "2360.00", TradeDirection::Long)
        .with_reward_multiplier(Some(RewardMultiplier::Three))
        .with_risk_budget("100")
        .with_account_balance("10000");

    let outputs = recompute(&inputs);
    assert_eq!(outputs.risk_distance, None);
    assert_eq!(outputs.take_profit_price, None);
    assert_eq!(outputs.position_size, None);
    assert_eq!(outputs.risk_percentage, Some(dec!(1.00)));
}

#[test]
fn test_risk_distance_direction_property() {
    let cases = [
        ("100", "90", TradeDirection::Long, Some(dec!(10))),
        ("100", "110", TradeDirection::Short, Some(dec!(10))),
        ("100", "110", TradeDirection::Long, None),
        ("100", "90", TradeDirection::Short, None),
        ("100", "100", TradeDirection::Long, None),
        ("100", "100", TradeDirection::Short, None),
        ("100", "", TradeDirection::Long, None),
        ("x", "90", TradeDirection::Long, None),
    ];

    for (entry, stop, direction, expected) in cases {
        let outputs = recompute(&manual(entry, stop, direction));
        assert_eq!(
            outputs.risk_distance, expected,
            "entry={entry} stop={stop} direction={direction}"
        );
    }
}

#[test]
fn test_volatility_stop_property() {
    let entries = [dec!(1800), dec!(2350.55), dec!(2999.99)];
    let values = [dec!(0.75), dec!(12.5), dec!(33.333)];

    for entry in entries {
        for value in values {
            for multiplier in VolatilityMultiplier::ALL {
                let offset = value * multiplier.value();
                for direction in [TradeDirection::Long, TradeDirection::Short] {
                    let inputs = TradeInputs::new()
                        .with_entry_price(entry.to_string())
                        .with_direction(direction)
                        .with_volatility(value.to_string(), multiplier);

                    let expected = match direction {
                        TradeDirection::Long => entry - offset,
                        TradeDirection::Short => entry + offset,
                    };
                    let expected =
                        expected.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

                    assert_eq!(recompute(&inputs).stop_loss_price, Some(expected));
                }
            }
        }
    }
}

#[test]
fn test_take_profit_linear_in_multiplier() {
    for direction in [TradeDirection::Long, TradeDirection::Short] {
        let stop = match direction {
            TradeDirection::Long => "1990",
            TradeDirection::Short => "2010",
        };
        for multiplier in RewardMultiplier::ALL {
            let inputs =
                manual("2000", stop, direction).with_reward_multiplier(Some(multiplier));
            let outputs = recompute(&inputs);

            let distance = (outputs.take_profit_price.unwrap() - dec!(2000)).abs();
            assert_eq!(distance, dec!(10) * multiplier.value());
        }
    }
}

#[test]
fn test_position_size_formula() {
    for (budget, stop) in [("100", "1990"), ("250", "1995.5"), ("75", "1999.9")] {
        let inputs = manual("2000", stop, TradeDirection::Long).with_risk_budget(budget);
        let outputs = recompute(&inputs);

        let risk = outputs.risk_distance.unwrap();
        let budget: Decimal = budget.parse().unwrap();
        let expected = (budget / (risk * POINT_VALUE))
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        assert_eq!(outputs.position_size, Some(expected));
    }
}

#[test]
fn test_risk_percentage_independent_of_trade() {
    let inputs = TradeInputs::new()
        .with_risk_budget("50")
        .with_account_balance("2000");
    let outputs = recompute(&inputs);

    assert_eq!(outputs.risk_percentage, Some(dec!(2.50)));
    assert_eq!(outputs.position_size, None);
    assert_eq!(outputs.risk_distance, None);
}

#[test]
fn test_idempotent_recompute() {
    let inputs = manual("2350.50", "2340.00", TradeDirection::Long)
        .with_reward_multiplier(Some(RewardMultiplier::TwoAndHalf))
        .with_risk_budget("123.45")
        .with_account_balance("9876.54");

    let first = recompute(&inputs);
    for _ in 0..10 {
        assert_eq!(recompute(&inputs), first);
    }
}

#[test]
fn test_reset_after_edits() {
    let mut calc = TradeCalculator::new();
    calc.set_field(Field::EntryPrice, "2350.50").unwrap();
    calc.set_field(Field::VolatilityValue, "12.50").unwrap();
    calc.set_direction(TradeDirection::Short);
    calc.set_stop_loss_method(StopLossMethod::VolatilityBased);
    calc.set_volatility_multiplier(VolatilityMultiplier::OneAndHalf);
    calc.set_reward_multiplier(Some(RewardMultiplier::Three));
    calc.set_field(Field::AccountBalance, "5000").unwrap();
    calc.set_field(Field::RiskBudget, "50").unwrap();

    calc.reset();

    let inputs = calc.inputs();
    assert_eq!(inputs.entry_price, "");
    assert_eq!(inputs.stop_loss_price, "");
    assert_eq!(inputs.volatility_value, "");
    assert_eq!(inputs.account_balance, "");
    assert_eq!(inputs.risk_budget, "");
    assert_eq!(inputs.direction, TradeDirection::Long);
    assert_eq!(inputs.stop_loss_method, StopLossMethod::Manual);
    assert_eq!(inputs.volatility_multiplier, VolatilityMultiplier::Two);
    assert_eq!(inputs.reward_multiplier, None);
    assert_eq!(calc.outputs(), &DerivedOutputs::default());
}
