//! Recipe costing.
//!
//! ```text
//! ingredients_cost = sum(quantity * catalog cost)   lines found in the catalog
//! labor_cost       = (prep + cook minutes) / 60 * hourly_rate
//! total_cost       = ingredients_cost + labor_cost
//! ```
//!
//! Catalog lookup is by case-insensitive name and the first entry wins.
//! Lines with no catalog entry add nothing and are listed in
//! [`RecipeCost::unmatched`].

use std::collections::HashMap;

use klimrod_types::{Amount, Ingredient, Recipe, RecipeCost};

/// Cost of `minutes` of kitchen time at `hourly_rate`.
pub fn labor_cost(minutes: u32, hourly_rate: Amount) -> Amount {
    f64::from(minutes) / 60.0 * hourly_rate
}

/// `cost` as a percentage of `selling_price`; `None` if either is zero.
pub fn share_of_price(cost: Amount, selling_price: Amount) -> Option<f64> {
    if cost == 0.0 || selling_price == 0.0 {
        None
    } else {
        Some(cost / selling_price * 100.0)
    }
}

/// Cost `recipe` against `catalog` with labor at `hourly_rate`.
pub fn cost_recipe(recipe: &Recipe, catalog: &[Ingredient], hourly_rate: Amount) -> RecipeCost {
    let mut by_name: HashMap<String, &Ingredient> = HashMap::with_capacity(catalog.len());
    for ingredient in catalog {
        by_name
            .entry(ingredient.name.to_lowercase())
            .or_insert(ingredient);
    }

    let mut ingredients_cost = 0.0;
    let mut unmatched = Vec::new();
    for line in &recipe.ingredients {
        match by_name.get(&line.name.to_lowercase()) {
            Some(ingredient) => ingredients_cost += line.quantity * ingredient.cost,
            None => unmatched.push(line.name.clone()),
        }
    }

    let labor_cost = labor_cost(recipe.total_minutes(), hourly_rate);
    let total_cost = ingredients_cost + labor_cost;

    if !unmatched.is_empty() {
        tracing::debug!(
            recipe = %recipe.name,
            unmatched = ?unmatched,
            "recipe lines missing from the ingredient catalog"
        );
    }
    tracing::trace!(
        recipe = %recipe.name,
        ingredients_cost,
        labor_cost,
        total_cost,
        "recipe costed"
    );

    RecipeCost {
        ingredients_cost,
        labor_cost,
        total_cost,
        cost_percentage: share_of_price(total_cost, recipe.selling_price),
        food_cost_percentage: share_of_price(ingredients_cost, recipe.selling_price),
        labor_cost_percentage: share_of_price(labor_cost, recipe.selling_price),
        unmatched,
    }
}

#[cfg(test)]
mod tests {
    use klimrod_types::RecipeLine;

    use super::*;

    fn catalog() -> Vec<Ingredient> {
        vec![
            Ingredient {
                name: "Arborio".to_string(),
                unit: "KG".to_string(),
                cost: 6.0,
            },
            Ingredient {
                name: "Parmesan".to_string(),
                unit: "KG".to_string(),
                cost: 30.0,
            },
            Ingredient {
                name: "PARMESAN".to_string(),
                unit: "KG".to_string(),
                cost: 99.0,
            },
        ]
    }

    fn line(name: &str, quantity: f64) -> RecipeLine {
        RecipeLine {
            name: name.to_string(),
            quantity,
            unit: "KG".to_string(),
        }
    }

    fn risotto() -> Recipe {
        Recipe {
            name: "RISOTTO".to_string(),
            category: "ENTREES".to_string(),
            prep_time: 10,
            cook_time: 20,
            selling_price: 25.0,
            ingredients: vec![line("arborio", 0.5), line("Parmesan", 0.1)],
        }
    }

    #[test]
    fn test_cost_recipe() {
        let cost = cost_recipe(&risotto(), &catalog(), 20.0);
        assert!((cost.ingredients_cost - 6.0).abs() < 1e-9);
        assert!((cost.labor_cost - 10.0).abs() < 1e-9);
        assert!((cost.total_cost - 16.0).abs() < 1e-9);
        let pct = cost.cost_percentage.expect("priced");
        assert!((pct - 64.0).abs() < 1e-9);
        assert!((cost.food_cost_percentage.expect("priced") - 24.0).abs() < 1e-9);
        assert!((cost.labor_cost_percentage.expect("priced") - 40.0).abs() < 1e-9);
        assert!(cost.unmatched.is_empty());
    }

    #[test]
    fn test_unmatched_ingredient_adds_nothing() {
        let mut recipe = risotto();
        recipe.ingredients.push(line("Saffron", 0.01));
        let cost = cost_recipe(&recipe, &catalog(), 20.0);
        assert!((cost.ingredients_cost - 6.0).abs() < 1e-9);
        assert_eq!(cost.unmatched, vec!["Saffron".to_string()]);
    }

    #[test]
    fn test_zero_selling_price_has_no_percentages() {
        let mut recipe = risotto();
        recipe.selling_price = 0.0;
        let cost = cost_recipe(&recipe, &catalog(), 20.0);
        assert!((cost.total_cost - 16.0).abs() < 1e-9);
        assert_eq!(cost.cost_percentage, None);
        assert_eq!(cost.food_cost_percentage, None);
        assert_eq!(cost.labor_cost_percentage, None);
    }

    #[test]
    fn test_zero_minutes_has_no_labor() {
        let mut recipe = risotto();
        recipe.prep_time = 0;
        recipe.cook_time = 0;
        let cost = cost_recipe(&recipe, &catalog(), 20.0);
        assert_eq!(cost.labor_cost, 0.0);
        assert_eq!(cost.labor_cost_percentage, None);
        assert!((cost.total_cost - 6.0).abs() < 1e-9);
        assert!((cost.food_cost_percentage.expect("priced") - 24.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_catalog() {
        let cost = cost_recipe(&risotto(), &[], 30.0);
        assert_eq!(cost.ingredients_cost, 0.0);
        assert_eq!(cost.food_cost_percentage, None);
        assert_eq!(cost.unmatched.len(), 2);
        assert!((cost.labor_cost - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_labor_cost() {
        assert_eq!(labor_cost(0, 20.0), 0.0);
        assert_eq!(labor_cost(90, 20.0), 30.0);
    }
}
