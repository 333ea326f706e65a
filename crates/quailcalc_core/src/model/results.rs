//! Derived profitability figures
//!
//! Only `females` and `chicks_cycle` are whole numbers; every other field keeps
//! full floating-point precision. Rounding for display is the caller's job.

use serde::{Deserialize, Serialize};

/// Output of [`crate::calculation::compute`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmResults {
    pub females: f64,
    pub eggs_week: f64,
    pub eggs_month: f64,
    pub egg_rev_month: f64,
    /// Fertile eggs laid per week. Informational, not used downstream.
    pub fertile_week: f64,
    /// Eggs laid over one cycle. Informational, not used downstream.
    pub total_eggs_cycle: f64,
    pub fertile_cycle: f64,
    pub chicks_cycle: f64,
    pub chick_rev_cycle: f64,
    pub feed_kg_per_cycle: f64,
    pub feed_cost_cycle: f64,
    pub other_cost_cycle: f64,
    /// Net profit per cycle when all eggs are sold as table eggs
    pub net_egg_cycle: f64,
    /// Net profit per cycle when eggs are hatched and chicks sold
    pub net_chick_cycle: f64,
}

impl FarmResults {
    /// Total running costs for one cycle (feed plus other costs).
    pub fn cost_cycle(&self) -> f64 {
        self.feed_cost_cycle + self.other_cost_cycle
    }

    /// Which line of business earns more per cycle. Ties and NaN favour eggs.
    pub fn better_option(&self) -> BusinessLine {
        if self.net_chick_cycle > self.net_egg_cycle {
            BusinessLine::Chicks
        } else {
            BusinessLine::Eggs
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusinessLine {
    Eggs,
    Chicks,
}

impl BusinessLine {
    pub fn name(&self) -> &'static str {
        match self {
            BusinessLine::Eggs => "eggs",
            BusinessLine::Chicks => "chicks",
        }
    }
}
