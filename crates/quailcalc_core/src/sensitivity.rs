//! One-variable sensitivity sweeps over fixed domains.
//!
//! Each sweep substitutes a swept value into a single sub-formula of the
//! model while reusing the other already-computed figures from
//! [`FarmResults`] as fixed context. This is a first-order partial
//! sensitivity: changing the hatch rate, for example, does not recompute the
//! fertile egg count, it only rescales the chick count derived from it.

use serde::{Deserialize, Serialize};

use crate::calculation::{WEEKS_PER_MONTH, compute, round_half_up};
use crate::model::{FarmInputs, FarmResults};

/// Number of points in every sweep.
pub const SWEEP_POINTS: usize = 9;

/// The input varied by a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SweepVariable {
    /// 50% to 90% in steps of 5, against net chick profit
    HatchRate,
    /// 50 to 250 in steps of 25, against net egg profit
    EggPrice,
    /// 400 to 1040 per kg in steps of 80, against net chick profit
    FeedPrice,
}

impl SweepVariable {
    /// Export order.
    pub const ALL: [SweepVariable; 3] = [
        SweepVariable::HatchRate,
        SweepVariable::EggPrice,
        SweepVariable::FeedPrice,
    ];

    fn start_and_step(&self) -> (u32, u32) {
        match self {
            SweepVariable::HatchRate => (50, 5),
            SweepVariable::EggPrice => (50, 25),
            SweepVariable::FeedPrice => (400, 80),
        }
    }

    /// Swept values in ascending order.
    pub fn domain(&self) -> [u32; SWEEP_POINTS] {
        let (start, step) = self.start_and_step();
        std::array::from_fn(|i| start + step * i as u32)
    }

    pub fn label(&self, value: u32) -> String {
        match self {
            SweepVariable::HatchRate => format!("{value}%"),
            SweepVariable::EggPrice | SweepVariable::FeedPrice => value.to_string(),
        }
    }

    /// Value of the `type` column in the CSV export.
    pub fn csv_type(&self) -> &'static str {
        match self {
            SweepVariable::HatchRate => "hatchRate",
            SweepVariable::EggPrice => "eggPrice",
            SweepVariable::FeedPrice => "feedPrice",
        }
    }

    pub fn from_csv_type(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.csv_type() == s)
    }

    pub fn title(&self) -> &'static str {
        match self {
            SweepVariable::HatchRate => "Hatch rate impact (net chick profit)",
            SweepVariable::EggPrice => "Egg price impact (net egg profit)",
            SweepVariable::FeedPrice => "Feed price impact (net chick profit)",
        }
    }

    pub fn axis_label(&self) -> &'static str {
        match self {
            SweepVariable::HatchRate => "hatch rate",
            SweepVariable::EggPrice => "egg price",
            SweepVariable::FeedPrice => "feed price/kg",
        }
    }
}

/// Net profit at one swept value, rounded to a whole number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityPoint {
    pub label: String,
    pub value: f64,
}

impl SensitivityPoint {
    fn new(label: String, raw: f64) -> Self {
        // adding 0.0 turns a rounded -0.0 into 0.0
        Self {
            label,
            value: round_half_up(raw) + 0.0,
        }
    }
}

/// Three sweeps of [`SWEEP_POINTS`] points each, ascending by swept value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitivityResult {
    pub by_hatch: Vec<SensitivityPoint>,
    pub by_egg_price: Vec<SensitivityPoint>,
    pub by_feed_price: Vec<SensitivityPoint>,
}

impl SensitivityResult {
    pub fn series(&self, variable: SweepVariable) -> &[SensitivityPoint] {
        match variable {
            SweepVariable::HatchRate => &self.by_hatch,
            SweepVariable::EggPrice => &self.by_egg_price,
            SweepVariable::FeedPrice => &self.by_feed_price,
        }
    }

    /// All points tagged with their variable, in export order.
    pub fn iter_rows(&self) -> impl Iterator<Item = (SweepVariable, &SensitivityPoint)> {
        SweepVariable::ALL
            .into_iter()
            .flat_map(move |variable| self.series(variable).iter().map(move |p| (variable, p)))
    }

    /// Point whose label matches the given swept value, if it is in the domain.
    pub fn point_at(&self, variable: SweepVariable, value: u32) -> Option<&SensitivityPoint> {
        let label = variable.label(value);
        self.series(variable).iter().find(|p| p.label == label)
    }
}

/// Recompute net profit across the three fixed sweep domains.
///
/// `chick_price` and `cycle_weeks` are the current input values; everything
/// else comes from `results`.
pub fn sweep(results: &FarmResults, chick_price: f64, cycle_weeks: f64) -> SensitivityResult {
    let by_hatch = SweepVariable::HatchRate
        .domain()
        .into_iter()
        .map(|hr| {
            let chicks_cycle = round_half_up(results.fertile_cycle * (f64::from(hr) / 100.0));
            let chick_rev_cycle = chicks_cycle * chick_price;
            let net = chick_rev_cycle - results.feed_cost_cycle - results.other_cost_cycle;
            SensitivityPoint::new(SweepVariable::HatchRate.label(hr), net)
        })
        .collect();

    let by_egg_price = SweepVariable::EggPrice
        .domain()
        .into_iter()
        .map(|ep| {
            let egg_rev_month = results.eggs_month * f64::from(ep);
            let net = egg_rev_month * (cycle_weeks / WEEKS_PER_MONTH)
                - results.feed_cost_cycle
                - results.other_cost_cycle;
            SensitivityPoint::new(SweepVariable::EggPrice.label(ep), net)
        })
        .collect();

    let by_feed_price = SweepVariable::FeedPrice
        .domain()
        .into_iter()
        .map(|fp| {
            let feed_cost_cycle = results.feed_kg_per_cycle * f64::from(fp);
            let net = results.chick_rev_cycle - feed_cost_cycle - results.other_cost_cycle;
            SensitivityPoint::new(SweepVariable::FeedPrice.label(fp), net)
        })
        .collect();

    SensitivityResult {
        by_hatch,
        by_egg_price,
        by_feed_price,
    }
}

/// Run the model and the sweeps for one set of inputs.
pub fn analyze(inputs: &FarmInputs) -> (FarmResults, SensitivityResult) {
    let results = compute(inputs);
    let sensitivity = sweep(&results, inputs.chick_price, inputs.cycle_weeks);
    (results, sensitivity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domains() {
        assert_eq!(
            SweepVariable::HatchRate.domain(),
            [50, 55, 60, 65, 70, 75, 80, 85, 90]
        );
        assert_eq!(
            SweepVariable::EggPrice.domain(),
            [50, 75, 100, 125, 150, 175, 200, 225, 250]
        );
        assert_eq!(
            SweepVariable::FeedPrice.domain(),
            [400, 480, 560, 640, 720, 800, 880, 960, 1040]
        );
    }

    #[test]
    fn test_csv_type_lookup() {
        for variable in SweepVariable::ALL {
            assert_eq!(SweepVariable::from_csv_type(variable.csv_type()), Some(variable));
        }
        assert_eq!(SweepVariable::from_csv_type("fertility"), None);
    }
}
