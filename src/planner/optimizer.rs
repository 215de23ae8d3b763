use std::collections::HashSet;

use good_lp::{
    constraint, microlp, variable, variables, Expression, ResolutionError, Solution, SolverModel,
    Variable,
};
use rand::Rng;
use tracing::{debug, warn};

use crate::models::{food_key, sum_items, FoodEntry, MacroTarget, MealItem, Nutrient};
use crate::planner::config::PlannerConfig;
use crate::planner::constants::BAND_SLACK;

/// Foods the optimizer may pick from.
///
/// Drops every food whose name is in `excluded` (case-insensitive), unless
/// fewer than `min_remaining` would survive, in which case the whole catalog
/// is returned.
pub fn candidate_foods<'a>(
    catalog: &'a [FoodEntry],
    excluded: &HashSet<String>,
    min_remaining: usize,
) -> Vec<&'a FoodEntry> {
    let excluded_keys: HashSet<String> = excluded.iter().map(|name| food_key(name)).collect();

    let remaining: Vec<&FoodEntry> = catalog
        .iter()
        .filter(|f| !excluded_keys.contains(&f.key()))
        .collect();

    if remaining.len() < min_remaining {
        debug!(
            remaining = remaining.len(),
            min_remaining, "too few foods after exclusion, using full catalog"
        );
        return catalog.iter().collect();
    }

    remaining
}

/// Draw one objective weight per food, uniformly from `[min, max]`.
pub fn draw_weights(n: usize, min: f64, max: f64, rng: &mut impl Rng) -> Vec<f64> {
    (0..n).map(|_| rng.gen_range(min..=max)).collect()
}

/// Solve the integer program for serving counts.
///
/// Minimizes `sum(weights[i] * x[i])` with `x[i] >= 0` integer, subject to
/// every nutrient total lying inside the target's tolerance band. Returns
/// `None` for any outcome other than an optimal solution.
pub fn solve_servings(
    foods: &[&FoodEntry],
    target: &MacroTarget,
    tolerance: f64,
    weights: &[f64],
) -> Option<Vec<u32>> {
    debug_assert_eq!(foods.len(), weights.len());

    let mut vars = variables!();
    let servings: Vec<Variable> = foods
        .iter()
        .map(|_| vars.add(variable().integer().min(0)))
        .collect();

    let objective: Expression = servings
        .iter()
        .zip(weights)
        .map(|(&x, &w)| w * x)
        .sum();

    let mut problem = vars.minimise(objective).using(microlp);

    for nutrient in Nutrient::ALL {
        let total: Expression = servings
            .iter()
            .zip(foods)
            .map(|(&x, food)| food.nutrient(nutrient) * x)
            .sum();
        let (lower, upper) = target.band(nutrient, tolerance);
        let at_least = total.clone();

        problem = problem
            .with(constraint!(at_least >= lower))
            .with(constraint!(total <= upper));
    }

    match problem.solve() {
        Ok(solution) => Some(
            servings
                .iter()
                .map(|&x| solution.value(x).round().max(0.0) as u32)
                .collect(),
        ),
        Err(ResolutionError::Infeasible) => {
            debug!("meal constraints infeasible");
            None
        }
        Err(e) => {
            warn!(error = %e, "solver did not reach an optimal solution");
            None
        }
    }
}

/// Select foods and integer servings for one meal.
///
/// Returns an empty list when no selection fits every nutrient band; that is
/// an expected outcome for tight targets, not an error.
pub fn optimize_meal(
    target: &MacroTarget,
    catalog: &[FoodEntry],
    excluded: &HashSet<String>,
    config: &PlannerConfig,
    rng: &mut impl Rng,
) -> Vec<MealItem> {
    let foods = candidate_foods(catalog, excluded, config.min_remaining_foods);
    if foods.is_empty() {
        warn!("no candidate foods for meal");
        return Vec::new();
    }

    let weights = draw_weights(foods.len(), config.weight_min, config.weight_max, rng);

    debug!(
        candidates = foods.len(),
        calories = target.calories,
        protein = target.protein,
        carbs = target.carbs,
        fat = target.fat,
        fiber = target.fiber,
        "solving meal"
    );

    let servings = match solve_servings(&foods, target, config.tolerance, &weights) {
        Some(s) => s,
        None => return Vec::new(),
    };

    let items: Vec<MealItem> = foods
        .iter()
        .zip(&servings)
        .filter(|&(_, &s)| s > 0)
        .map(|(food, &s)| MealItem::from_servings(food, s))
        .collect();

    // Serving and 2-decimal rounding can push a total just outside its band.
    let totals = sum_items(&items);
    let missed = target.out_of_band(&totals, config.tolerance, BAND_SLACK);
    if !missed.is_empty() {
        let labels: Vec<&str> = missed.iter().map(|n| n.label()).collect();
        warn!(nutrients = ?labels, ?totals, "rounded meal left the tolerance band");
        return Vec::new();
    }

    items
}
