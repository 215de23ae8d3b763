// ─────────────────────────────────────────────────────────────────────────────
// Meal optimizer
// ─────────────────────────────────────────────────────────────────────────────

/// Accepted relative deviation from every per-meal nutrient target.
pub const MACRO_TOLERANCE: f64 = 0.10;

/// Range of the per-food objective weights, redrawn on every solve.
pub const OBJECTIVE_WEIGHT_MIN: f64 = 1.0;
pub const OBJECTIVE_WEIGHT_MAX: f64 = 1.3;

/// Daily fiber goal (g) used when a client has none.
pub const DEFAULT_DAILY_FIBER: f64 = 8.0;

/// Below this many candidates the used-food exclusion is dropped.
pub const MIN_REMAINING_FOODS: usize = 3;

/// Slack when re-checking rounded solutions against the tolerance band.
pub const BAND_SLACK: f64 = 1e-6;

/// Meals per day when the caller does not say otherwise.
pub const DEFAULT_NUM_MEALS: u32 = 3;

// ─────────────────────────────────────────────────────────────────────────────
// Daily target derivation
// ─────────────────────────────────────────────────────────────────────────────

/// Grams of protein per kg of bodyweight.
pub const DEFAULT_PROTEIN_MULTIPLIER: f64 = 1.8;

/// Share of daily calories from fat.
pub const FAT_CALORIE_SHARE: f64 = 0.25;

pub const KCAL_PER_G_FAT: f64 = 9.0;
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;

/// Fiber grams per 1000 kcal.
pub const FIBER_PER_1000_KCAL: f64 = 14.0;

// ─────────────────────────────────────────────────────────────────────────────
// Workout selection
// ─────────────────────────────────────────────────────────────────────────────

/// Muscles ordered right after the client's priority muscles.
pub const BIG_MUSCLES: [&str; 3] = ["chest", "back", "quadriceps"];

/// Only exercises with this classification are planned.
pub const PLANNED_CLASSIFICATION: &str = "bodybuilding";

/// Exercises per muscle given how many muscles share the day.
pub fn exercises_per_muscle(muscles_in_day: usize) -> usize {
    match muscles_in_day {
        1 => 4,
        2 => 3,
        3 => 2,
        _ => 1,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Recommendations
// ─────────────────────────────────────────────────────────────────────────────

/// Neighbours consulted by the workout recommender.
pub const KNN_NEIGHBOURS: usize = 5;

/// Maximum recommended workout plans.
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Minimum Jaro-Winkler similarity for a muscle name suggestion.
pub const MUSCLE_MATCH_THRESHOLD: f64 = 0.8;
