pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;
pub mod sweep;

pub use error::{PlanError, Result};
pub use models::{DailyTargets, FoodEntry, MacroTarget, MealItem, MealPlan};
