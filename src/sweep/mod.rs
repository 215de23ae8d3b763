pub mod evaluation;
pub mod output;

use tracing::info;

use crate::error::{PlanError, Result};
use crate::models::FoodEntry;
use crate::planner::PlannerConfig;

pub use evaluation::{evaluate_cell, targets_for_calories, CellResult};
pub use output::{print_table, write_csv, write_summary_json};

/// Grid explored by a feasibility sweep.
pub struct SweepConfig {
    pub calorie_targets: Vec<f64>,
    pub meal_counts: Vec<u32>,
    pub trials: usize,
    pub seed: u64,
    pub planner: PlannerConfig,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            calorie_targets: vec![1500.0, 2000.0, 2500.0, 3000.0],
            meal_counts: vec![3, 4, 5],
            trials: 10,
            seed: 123,
            planner: PlannerConfig::default(),
        }
    }
}

/// Evaluate every (calories, meals) cell. Each cell gets its own seed
/// derived from the base seed so cells are independent and reproducible.
pub fn run_sweep(config: &SweepConfig, foods: &[FoodEntry]) -> Result<Vec<CellResult>> {
    if config.meal_counts.contains(&0) {
        return Err(PlanError::InvalidInput(
            "meal counts must be at least 1".to_string(),
        ));
    }

    let mut results = Vec::with_capacity(config.calorie_targets.len() * config.meal_counts.len());

    for (i, &calories) in config.calorie_targets.iter().enumerate() {
        for (j, &meals) in config.meal_counts.iter().enumerate() {
            let seed = config
                .seed
                .wrapping_add((i * config.meal_counts.len() + j) as u64);
            let result = evaluate_cell(foods, calories, meals, config.trials, seed, &config.planner);

            info!(
                calories,
                meals,
                feasibility = result.feasibility_rate(),
                "cell evaluated"
            );
            results.push(result);
        }
    }

    Ok(results)
}
