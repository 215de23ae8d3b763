use std::collections::HashSet;

use rand::Rng;
use tracing::{info, warn};

use crate::error::{PlanError, Result};
use crate::models::{food_key, DailyTargets, FoodEntry, Meal, MealPlan};
use crate::planner::config::PlannerConfig;
use crate::planner::optimizer::optimize_meal;

/// Build one meal and record its foods in `used_foods`.
pub fn generate_meal(
    catalog: &[FoodEntry],
    daily: &DailyTargets,
    meal_number: u32,
    num_meals: u32,
    used_foods: &mut HashSet<String>,
    config: &PlannerConfig,
    rng: &mut impl Rng,
) -> Meal {
    let target = daily.per_meal(num_meals, config.default_fiber);
    let items = optimize_meal(&target, catalog, used_foods, config, rng);

    if items.is_empty() {
        warn!(meal_number, "no food selection fits the meal targets");
    }

    used_foods.extend(items.iter().map(|item| food_key(&item.food_name)));

    Meal { meal_number, items }
}

/// Generate a full day of meals.
///
/// Meals are solved in order; foods placed in earlier meals are excluded from
/// later ones (subject to the exclusion bypass in the optimizer).
pub fn generate_meal_plan(
    catalog: &[FoodEntry],
    daily: &DailyTargets,
    num_meals: u32,
    config: &PlannerConfig,
    rng: &mut impl Rng,
) -> Result<MealPlan> {
    if num_meals == 0 {
        return Err(PlanError::InvalidInput(
            "number of meals must be at least 1".to_string(),
        ));
    }

    let mut used_foods = HashSet::new();
    let mut meals = Vec::with_capacity(num_meals as usize);
    for meal_number in 1..=num_meals {
        meals.push(generate_meal(
            catalog,
            daily,
            meal_number,
            num_meals,
            &mut used_foods,
            config,
            rng,
        ));
    }

    let plan = MealPlan { meals };
    info!(
        meals = plan.len(),
        infeasible = plan.infeasible_meals().len(),
        "meal plan generated"
    );

    Ok(plan)
}

/// Replace one meal of an existing plan.
///
/// Foods used by the other meals are excluded. The previous contents of the
/// meal are discarded even when the new solve is infeasible.
pub fn regenerate_meal(
    catalog: &[FoodEntry],
    daily: &DailyTargets,
    plan: &mut MealPlan,
    meal_number: u32,
    config: &PlannerConfig,
    rng: &mut impl Rng,
) -> Result<()> {
    if plan.meal(meal_number).is_none() {
        return Err(PlanError::MealNotFound(meal_number));
    }

    let num_meals = plan.len() as u32;
    let mut used_foods = plan.foods_outside(meal_number);
    let meal = generate_meal(
        catalog,
        daily,
        meal_number,
        num_meals,
        &mut used_foods,
        config,
        rng,
    );

    if let Some(slot) = plan.meal_mut(meal_number) {
        *slot = meal;
    }

    info!(meal_number, "meal regenerated");
    Ok(())
}
