use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;
use crate::models::{ClientDirectory, MealPlan};

fn load_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Write any serializable value as pretty JSON.
pub fn save_json<T: Serialize, P: AsRef<Path>>(path: P, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load clients and workout ratings.
pub fn load_clients<P: AsRef<Path>>(path: P) -> Result<ClientDirectory> {
    load_json(path)
}

/// Load a previously saved meal plan.
pub fn load_meal_plan<P: AsRef<Path>>(path: P) -> Result<MealPlan> {
    load_json(path)
}

pub fn save_meal_plan<P: AsRef<Path>>(path: P, plan: &MealPlan) -> Result<()> {
    save_json(path, plan)
}
