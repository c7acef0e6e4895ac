//! Recipes, the ingredient catalog they are costed against, and the
//! resulting cost breakdown.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnError, DisplayFromStr, PickFirst};

use crate::Amount;

/// Catalog entry: what one unit of an ingredient costs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
pub struct Ingredient {
    pub name: String,
    #[serde(default)]
    pub unit: String,
    /// Cost per `unit`.
    #[serde(default)]
    pub cost: Amount,
}

/// One ingredient line of a recipe. Quantities typed into the form may be
/// text; anything unparseable counts as zero.
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeLine {
    pub name: String,
    #[serde_as(as = "DefaultOnError<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
}

#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub name: String,
    #[serde(default)]
    pub category: String,
    /// Minutes.
    #[serde_as(as = "DefaultOnError<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(default, alias = "prep_time")]
    pub prep_time: u32,
    /// Minutes.
    #[serde_as(as = "DefaultOnError<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(default, alias = "cook_time")]
    pub cook_time: u32,
    #[serde_as(as = "DefaultOnError<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(default, alias = "selling_price")]
    pub selling_price: Amount,
    #[serde(default)]
    pub ingredients: Vec<RecipeLine>,
}

impl Recipe {
    /// Prep plus cook time.
    pub fn total_minutes(&self) -> u32 {
        self.prep_time.saturating_add(self.cook_time)
    }
}

/// Cost breakdown of a recipe.
///
/// Each percentage is of the selling price and is `None` when the price or
/// the cost it measures is zero.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RecipeCost {
    pub ingredients_cost: Amount,
    pub labor_cost: Amount,
    pub total_cost: Amount,
    pub cost_percentage: Option<f64>,
    pub food_cost_percentage: Option<f64>,
    pub labor_cost_percentage: Option<f64>,
    /// Recipe lines with no priced catalog entry.
    pub unmatched: Vec<String>,
}
