mod loader;
mod persistence;

pub use loader::{
    load_exercise_catalog, load_food_catalog, read_exercise_catalog, read_food_catalog,
    EXERCISE_COLUMNS, FOOD_COLUMNS,
};
pub use persistence::{load_clients, load_meal_plan, save_json, save_meal_plan};
