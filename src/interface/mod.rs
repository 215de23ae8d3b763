pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_daily_targets, prompt_fiber, prompt_num_meals, prompt_positive, prompt_yes_no,
    resolve_muscle, suggest_muscles,
};
pub use render::{
    display_food_list, display_meal_plan, display_recommendations, display_workout_plan,
};
