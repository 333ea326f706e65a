//! Deterministic profitability model.
//!
//! Maps [`FarmInputs`] to [`FarmResults`] with a fixed chain of arithmetic.
//! The function is total: zero, negative and non-finite inputs flow through
//! the formulas unchanged (NaN in, NaN out), nothing is clamped.

use crate::model::{FarmInputs, FarmResults};

/// Average weeks per month (52 / 12, truncated).
pub const WEEKS_PER_MONTH: f64 = 4.33;

const GRAMS_PER_KG: f64 = 1000.0;
const DAYS_PER_WEEK: f64 = 7.0;

/// Round to the nearest integer, ties toward positive infinity.
///
/// `2.5 -> 3`, `-2.5 -> -2`. NaN and infinities are returned unchanged.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Compute every derived figure for one set of inputs.
pub fn compute(inputs: &FarmInputs) -> FarmResults {
    let females = round_half_up(inputs.birds * inputs.pct_female / 100.0);
    let eggs_week = females * inputs.eggs_per_hen_week;
    let eggs_month = eggs_week * WEEKS_PER_MONTH;
    let egg_rev_month = eggs_month * inputs.egg_price;

    let fertile_week = eggs_week * (inputs.fertility / 100.0);
    let total_eggs_cycle = eggs_week * inputs.cycle_weeks;
    let fertile_cycle = total_eggs_cycle * (inputs.fertility / 100.0);
    let chicks_cycle = round_half_up(fertile_cycle * (inputs.hatch_rate / 100.0));
    let chick_rev_cycle = chicks_cycle * inputs.chick_price;

    let feed_kg_per_day = inputs.feed_gram_per_bird * inputs.birds / GRAMS_PER_KG;
    let feed_kg_per_cycle = feed_kg_per_day * inputs.cycle_weeks * DAYS_PER_WEEK;
    let feed_cost_cycle = feed_kg_per_cycle * inputs.feed_price_kg;

    let other_cost_cycle = inputs.other_costs_month * inputs.cycle_weeks / WEEKS_PER_MONTH;

    let net_egg_cycle = egg_rev_month * (inputs.cycle_weeks / WEEKS_PER_MONTH)
        - feed_cost_cycle
        - other_cost_cycle;
    let net_chick_cycle = chick_rev_cycle - feed_cost_cycle - other_cost_cycle;

    FarmResults {
        females,
        eggs_week,
        eggs_month,
        egg_rev_month,
        fertile_week,
        total_eggs_cycle,
        fertile_cycle,
        chicks_cycle,
        chick_rev_cycle,
        feed_kg_per_cycle,
        feed_cost_cycle,
        other_cost_cycle,
        net_egg_cycle,
        net_chick_cycle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up_ties() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(2.4999), 2.0);
        assert_eq!(round_half_up(-2.51), -3.0);
        assert_eq!(round_half_up(0.49999999999999994), 0.0);
    }

    #[test]
    fn test_round_half_up_non_finite() {
        assert!(round_half_up(f64::NAN).is_nan());
        assert_eq!(round_half_up(f64::INFINITY), f64::INFINITY);
        assert_eq!(round_half_up(f64::NEG_INFINITY), f64::NEG_INFINITY);
    }
}
