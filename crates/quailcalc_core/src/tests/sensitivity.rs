//! Tests for the sensitivity sweeps
//!
//! These tests verify that:
//! - Every sweep has nine points with the fixed labels, ascending
//! - Point values match hand-computed figures for the stock scenario
//! - The point at the current input reproduces the model's net profit
//! - The sweep reuses the fixed context instead of recomputing it

use super::stock_inputs;
use crate::calculation::{compute, round_half_up};
use crate::model::FarmInputs;
use crate::sensitivity::{SWEEP_POINTS, SweepVariable, analyze, sweep};

fn values(points: &[crate::sensitivity::SensitivityPoint]) -> Vec<f64> {
    points.iter().map(|p| p.value).collect()
}

fn labels(points: &[crate::sensitivity::SensitivityPoint]) -> Vec<&str> {
    points.iter().map(|p| p.label.as_str()).collect()
}

#[test]
fn test_labels_and_order() {
    let (_, s) = analyze(&stock_inputs());

    assert_eq!(
        labels(&s.by_hatch),
        ["50%", "55%", "60%", "65%", "70%", "75%", "80%", "85%", "90%"]
    );
    assert_eq!(
        labels(&s.by_egg_price),
        ["50", "75", "100", "125", "150", "175", "200", "225", "250"]
    );
    assert_eq!(
        labels(&s.by_feed_price),
        ["400", "480", "560", "640", "720", "800", "880", "960", "1040"]
    );
}

#[test]
fn test_stock_scenario_values() {
    let (_, s) = analyze(&stock_inputs());

    assert_eq!(
        values(&s.by_hatch),
        [
            1_917_373.0,
            2_121_373.0,
            2_325_373.0,
            2_529_373.0,
            2_733_373.0,
            2_937_373.0,
            3_141_373.0,
            3_345_373.0,
            3_549_373.0,
        ]
    );
    assert_eq!(
        values(&s.by_egg_price),
        [
            37_373.0, 117_373.0, 197_373.0, 277_373.0, 357_373.0, 437_373.0, 517_373.0,
            597_373.0, 677_373.0,
        ]
    );
    assert_eq!(
        values(&s.by_feed_price),
        [
            3_174_973.0,
            3_168_253.0,
            3_161_533.0,
            3_154_813.0,
            3_148_093.0,
            3_141_373.0,
            3_134_653.0,
            3_127_933.0,
            3_121_213.0,
        ]
    );
}

#[test]
fn test_always_nine_points() {
    let odd = FarmInputs {
        birds: -40.0,
        cycle_weeks: 0.0,
        chick_price: f64::NAN,
        ..stock_inputs()
    };
    let (_, s) = analyze(&odd);
    for variable in SweepVariable::ALL {
        assert_eq!(s.series(variable).len(), SWEEP_POINTS);
    }
    assert_eq!(s.iter_rows().count(), 27);
    assert!(s.by_hatch.iter().all(|p| p.value.is_nan()));
}

#[test]
fn test_point_at_current_input_matches_model() {
    let inputs = FarmInputs {
        birds: 260.0,
        pct_female: 75.0,
        eggs_per_hen_week: 5.5,
        egg_price: 150.0,
        fertility: 78.0,
        hatch_rate: 65.0,
        chick_price: 1250.0,
        feed_gram_per_bird: 22.0,
        feed_price_kg: 560.0,
        other_costs_month: 41_000.0,
        cycle_weeks: 6.0,
    };
    let (r, s) = analyze(&inputs);

    let hatch = s.point_at(SweepVariable::HatchRate, 65).unwrap();
    assert_eq!(hatch.value, round_half_up(r.net_chick_cycle));

    let egg = s.point_at(SweepVariable::EggPrice, 150).unwrap();
    assert_eq!(egg.value, round_half_up(r.net_egg_cycle));

    let feed = s.point_at(SweepVariable::FeedPrice, 560).unwrap();
    assert_eq!(feed.value, round_half_up(r.net_chick_cycle));
}

#[test]
fn test_point_at_outside_domain() {
    let (_, s) = analyze(&stock_inputs());
    assert!(s.point_at(SweepVariable::HatchRate, 52).is_none());
    assert!(s.point_at(SweepVariable::FeedPrice, 1200).is_none());
}

#[test]
fn test_sweep_uses_fixed_context() {
    let mut r = compute(&stock_inputs());
    // Pretend the fertile count is different; the hatch sweep must follow it
    // while the egg sweep ignores it.
    r.fertile_cycle = 1000.0;
    let s = sweep(&r, 1500.0, 8.0);
    let expected = round_half_up(500.0 * 1500.0 - r.feed_cost_cycle - r.other_cost_cycle);
    assert_eq!(s.by_hatch[0].value, expected);
    assert_eq!(s.by_egg_price[2].value, 197_373.0);
}

#[test]
fn test_sweep_ignores_unrelated_inputs() {
    // chick price and cycle weeks come from arguments, not from results
    let r = compute(&stock_inputs());
    let s = sweep(&r, 0.0, 8.0);
    assert!(s.by_hatch.iter().all(|p| p.value < 0.0));
    // feed sweep uses chick revenue already in results
    assert_eq!(s.by_feed_price[5].value, 3_141_373.0);
}

#[test]
fn test_values_are_whole_and_not_negative_zero() {
    let inputs = FarmInputs {
        birds: 0.0,
        other_costs_month: 0.0,
        ..stock_inputs()
    };
    let (_, s) = analyze(&inputs);
    for (_, p) in s.iter_rows() {
        assert_eq!(p.value, 0.0);
        assert!(p.value.is_sign_positive(), "{} is -0", p.label);
    }
}

#[test]
fn test_sweeps_are_monotone_for_stock_inputs() {
    let (_, s) = analyze(&stock_inputs());
    assert!(s.by_hatch.windows(2).all(|w| w[0].value < w[1].value));
    assert!(s.by_egg_price.windows(2).all(|w| w[0].value < w[1].value));
    assert!(s.by_feed_price.windows(2).all(|w| w[0].value > w[1].value));
}
