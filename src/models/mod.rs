pub mod client;
pub mod exercise;
pub mod food;
pub mod nutrition;
pub mod plan;

pub use client::{ActivityLevel, ClientDirectory, ClientProfile, Gender, Goal, WorkoutRating};
pub use exercise::{Exercise, PlannedExercise, WorkoutDay, WorkoutPlan};
pub use food::{food_key, FoodEntry};
pub use nutrition::{round2, sum_items, DailyTargets, MacroTarget, MealItem, Nutrient};
pub use plan::{Meal, MealPlan};
