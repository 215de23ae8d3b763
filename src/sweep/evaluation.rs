use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::models::{food_key, DailyTargets, FoodEntry, MealPlan};
use crate::planner::constants::{
    FAT_CALORIE_SHARE, FIBER_PER_1000_KCAL, KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN,
};
use crate::planner::{generate_meal_plan, PlannerConfig};

/// Share of calories from protein in swept targets.
const PROTEIN_CALORIE_SHARE: f64 = 0.25;

/// Daily targets for a calorie level with a fixed macro split.
pub fn targets_for_calories(calories: f64) -> DailyTargets {
    let protein = calories * PROTEIN_CALORIE_SHARE / KCAL_PER_G_PROTEIN;
    let fat = calories * FAT_CALORIE_SHARE / KCAL_PER_G_FAT;
    let carbs = (calories - protein * KCAL_PER_G_PROTEIN - fat * KCAL_PER_G_FAT) / KCAL_PER_G_CARBS;

    DailyTargets {
        calories,
        protein,
        carbs,
        fat,
        fiber: Some(calories * FIBER_PER_1000_KCAL / 1000.0),
    }
}

/// Aggregate over the trials of one (calories, meals) cell.
#[derive(Debug, Clone, Serialize)]
pub struct CellResult {
    pub calories: f64,
    pub meals: u32,
    pub trials: usize,
    pub feasible_meals: usize,
    pub total_meals: usize,
    pub avg_items_per_meal: f64,
    pub avg_distinct_foods: f64,
    /// Plans where some food appears in more than one meal.
    pub plans_with_repeats: usize,
}

impl CellResult {
    pub fn feasibility_rate(&self) -> f64 {
        if self.total_meals == 0 {
            0.0
        } else {
            self.feasible_meals as f64 / self.total_meals as f64
        }
    }
}

fn has_repeats(plan: &MealPlan) -> bool {
    let mut meals_per_food: HashMap<String, usize> = HashMap::new();
    for meal in &plan.meals {
        for item in &meal.items {
            *meals_per_food.entry(food_key(&item.food_name)).or_default() += 1;
        }
    }
    meals_per_food.values().any(|&n| n > 1)
}

/// Run `trials` plans for one cell with a seeded generator.
pub fn evaluate_cell(
    foods: &[FoodEntry],
    calories: f64,
    meals: u32,
    trials: usize,
    seed: u64,
    config: &PlannerConfig,
) -> CellResult {
    let mut rng = StdRng::seed_from_u64(seed);
    let daily = targets_for_calories(calories);

    let mut feasible_meals = 0;
    let mut total_meals = 0;
    let mut items = 0;
    let mut distinct = 0;
    let mut plans_with_repeats = 0;

    for _ in 0..trials {
        // meals >= 1 is checked by the caller, so generation cannot fail here.
        let Ok(plan) = generate_meal_plan(foods, &daily, meals, config, &mut rng) else {
            continue;
        };

        total_meals += plan.len();
        feasible_meals += plan.meals.iter().filter(|m| !m.is_infeasible()).count();
        items += plan.meals.iter().map(|m| m.items.len()).sum::<usize>();
        distinct += plan
            .meals
            .iter()
            .flat_map(|m| m.items.iter().map(|i| food_key(&i.food_name)))
            .collect::<std::collections::HashSet<_>>()
            .len();
        if has_repeats(&plan) {
            plans_with_repeats += 1;
        }
    }

    CellResult {
        calories,
        meals,
        trials,
        feasible_meals,
        total_meals,
        avg_items_per_meal: if feasible_meals > 0 {
            items as f64 / feasible_meals as f64
        } else {
            0.0
        },
        avg_distinct_foods: if trials > 0 {
            distinct as f64 / trials as f64
        } else {
            0.0
        },
        plans_with_repeats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_for_calories_split() {
        let targets = targets_for_calories(2000.0);
        assert!((targets.protein - 125.0).abs() < 1e-9);
        assert!((targets.fat - 2000.0 * 0.25 / 9.0).abs() < 1e-9);
        assert!((targets.carbs - 250.0).abs() < 1e-9);
        assert!((targets.fiber.unwrap() - 28.0).abs() < 1e-9);
    }

    #[test]
    fn test_evaluate_cell_on_empty_catalog() {
        let result = evaluate_cell(&[], 2000.0, 3, 2, 1, &PlannerConfig::default());
        assert_eq!(result.total_meals, 6);
        assert_eq!(result.feasible_meals, 0);
        assert_eq!(result.feasibility_rate(), 0.0);
    }
}
