//! Business parameters entered by the farmer.
//!
//! Values are plain numbers with no range checks. Percentages are whole
//! percent (80 means 80%), prices are in the local currency unit.

use serde::{Deserialize, Serialize};

/// The eleven numeric inputs of the profitability model.
///
/// Missing fields deserialize to the stock scenario values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FarmInputs {
    /// Flock size
    pub birds: f64,
    /// Share of the flock that are hens, in percent
    pub pct_female: f64,
    pub eggs_per_hen_week: f64,
    /// Sale price per table egg
    pub egg_price: f64,
    /// Share of laid eggs that are fertile, in percent
    pub fertility: f64,
    /// Share of fertile eggs that hatch, in percent
    pub hatch_rate: f64,
    /// Sale price per chick
    pub chick_price: f64,
    /// Daily feed per bird, in grams
    pub feed_gram_per_bird: f64,
    pub feed_price_kg: f64,
    pub other_costs_month: f64,
    /// Length of one production/hatching cycle
    pub cycle_weeks: f64,
}

impl Default for FarmInputs {
    fn default() -> Self {
        Self {
            birds: 100.0,
            pct_female: 80.0,
            eggs_per_hen_week: 5.0,
            egg_price: 100.0,
            fertility: 85.0,
            hatch_rate: 80.0,
            chick_price: 1500.0,
            feed_gram_per_bird: 15.0,
            feed_price_kg: 800.0,
            other_costs_month: 30000.0,
            cycle_weeks: 8.0,
        }
    }
}

/// Identifies one input so a form can address fields generically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    Birds,
    PctFemale,
    EggsPerHenWeek,
    EggPrice,
    ChickPrice,
    CycleWeeks,
    Fertility,
    HatchRate,
    FeedGramPerBird,
    FeedPriceKg,
    OtherCostsMonth,
}

/// How a field's value should be presented next to its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldUnit {
    Count,
    Percent,
    Currency,
    Grams,
    Weeks,
}

impl InputField {
    /// Form order: flock, prices and cycle, then biology and feed.
    pub const ALL: [InputField; 11] = [
        InputField::Birds,
        InputField::PctFemale,
        InputField::EggsPerHenWeek,
        InputField::EggPrice,
        InputField::ChickPrice,
        InputField::CycleWeeks,
        InputField::Fertility,
        InputField::HatchRate,
        InputField::FeedGramPerBird,
        InputField::FeedPriceKg,
        InputField::OtherCostsMonth,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InputField::Birds => "Number of birds",
            InputField::PctFemale => "% Female",
            InputField::EggsPerHenWeek => "Eggs / hen / week",
            InputField::EggPrice => "Egg price",
            InputField::ChickPrice => "Chick sell price",
            InputField::CycleWeeks => "Cycle duration (weeks)",
            InputField::Fertility => "Fertility %",
            InputField::HatchRate => "Hatch rate %",
            InputField::FeedGramPerBird => "Feed (g/bird/day)",
            InputField::FeedPriceKg => "Feed price (per kg)",
            InputField::OtherCostsMonth => "Other costs (per month)",
        }
    }

    pub fn unit(&self) -> FieldUnit {
        match self {
            InputField::Birds | InputField::EggsPerHenWeek => FieldUnit::Count,
            InputField::PctFemale | InputField::Fertility | InputField::HatchRate => {
                FieldUnit::Percent
            }
            InputField::EggPrice
            | InputField::ChickPrice
            | InputField::FeedPriceKg
            | InputField::OtherCostsMonth => FieldUnit::Currency,
            InputField::FeedGramPerBird => FieldUnit::Grams,
            InputField::CycleWeeks => FieldUnit::Weeks,
        }
    }

    pub fn get(&self, inputs: &FarmInputs) -> f64 {
        match self {
            InputField::Birds => inputs.birds,
            InputField::PctFemale => inputs.pct_female,
            InputField::EggsPerHenWeek => inputs.eggs_per_hen_week,
            InputField::EggPrice => inputs.egg_price,
            InputField::ChickPrice => inputs.chick_price,
            InputField::CycleWeeks => inputs.cycle_weeks,
            InputField::Fertility => inputs.fertility,
            InputField::HatchRate => inputs.hatch_rate,
            InputField::FeedGramPerBird => inputs.feed_gram_per_bird,
            InputField::FeedPriceKg => inputs.feed_price_kg,
            InputField::OtherCostsMonth => inputs.other_costs_month,
        }
    }

    pub fn set(&self, inputs: &mut FarmInputs, value: f64) {
        let slot = match self {
            InputField::Birds => &mut inputs.birds,
            InputField::PctFemale => &mut inputs.pct_female,
            InputField::EggsPerHenWeek => &mut inputs.eggs_per_hen_week,
            InputField::EggPrice => &mut inputs.egg_price,
            InputField::ChickPrice => &mut inputs.chick_price,
            InputField::CycleWeeks => &mut inputs.cycle_weeks,
            InputField::Fertility => &mut inputs.fertility,
            InputField::HatchRate => &mut inputs.hatch_rate,
            InputField::FeedGramPerBird => &mut inputs.feed_gram_per_bird,
            InputField::FeedPriceKg => &mut inputs.feed_price_kg,
            InputField::OtherCostsMonth => &mut inputs.other_costs_month,
        };
        *slot = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_cover_every_field() {
        let mut inputs = FarmInputs::default();
        for (i, field) in InputField::ALL.iter().enumerate() {
            field.set(&mut inputs, i as f64 + 0.5);
        }
        for (i, field) in InputField::ALL.iter().enumerate() {
            assert_eq!(field.get(&inputs), i as f64 + 0.5, "{}", field.label());
        }
    }

    #[test]
    fn test_inputs_serialize_camel_case() {
        let json = serde_json::to_string(&FarmInputs::default()).unwrap();
        assert!(json.contains("\"pctFemale\":80.0"));
        assert!(json.contains("\"feedGramPerBird\":15.0"));
        assert!(json.contains("\"birds\":100.0"));
    }

    #[test]
    fn test_partial_inputs_fill_from_default() {
        let inputs: FarmInputs = serde_json::from_str(r#"{"birds": 250, "eggPrice": 90}"#).unwrap();
        assert_eq!(inputs.birds, 250.0);
        assert_eq!(inputs.egg_price, 90.0);
        assert_eq!(inputs.cycle_weeks, FarmInputs::default().cycle_weeks);
    }
}
