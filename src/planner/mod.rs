pub mod config;
pub mod constants;
pub mod meal;
pub mod optimizer;
pub mod recommend;
pub mod targets;
pub mod workout;

pub use config::PlannerConfig;
pub use constants::*;
pub use meal::{generate_meal, generate_meal_plan, regenerate_meal};
pub use optimizer::{candidate_foods, draw_weights, optimize_meal, solve_servings};
pub use recommend::{
    encode_client_features, euclidean_distance, nearest_neighbours, recommend_workouts,
    Recommendation,
};
pub use targets::{basal_metabolic_rate, daily_targets_for};
pub use workout::{generate_workout_plan, refresh_exercise, WorkoutRequest};
