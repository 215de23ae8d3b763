use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::error::{PlanError, Result};
use crate::models::{Exercise, FoodEntry};

pub const FOOD_COLUMNS: [&str; 7] = [
    "Food Name",
    "Calories per Serving",
    "Protein per Serving",
    "Carbs per Serving",
    "Fat per Serving",
    "Fiber per Serving",
    "Serving Weight (g)",
];

pub const EXERCISE_COLUMNS: [&str; 6] = [
    "Exercise",
    "Difficulty Level",
    "Target Muscle Group",
    "Primary Equipment",
    "Exercise Classification",
    "Mechanics",
];

/// Fail with `MissingColumns` unless every required header is present.
fn require_columns(headers: &StringRecord, required: &[&str], source_name: &str) -> Result<()> {
    let found: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    let missing: Vec<String> = required
        .iter()
        .filter(|col| !found.iter().any(|h| h == *col))
        .map(|col| col.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(PlanError::MissingColumns {
            source_name: source_name.to_string(),
            missing,
            found,
        })
    }
}

/// Read a CSV table after checking its headers. Headers and fields are trimmed.
fn read_table<T: DeserializeOwned, R: Read>(
    reader: R,
    required: &[&str],
    source_name: &str,
) -> Result<Vec<T>> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let headers = rdr.headers()?.clone();
    require_columns(&headers, required, source_name)?;

    let mut rows = Vec::new();
    for record in rdr.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}

/// Parse a food catalog from any reader.
///
/// Rows with negative nutrition or no serving weight are skipped with a
/// warning. For duplicate names (case-insensitive) the first row wins.
pub fn read_food_catalog<R: Read>(reader: R, source_name: &str) -> Result<Vec<FoodEntry>> {
    let rows: Vec<FoodEntry> = read_table(reader, &FOOD_COLUMNS, source_name)?;

    let mut foods: Vec<FoodEntry> = Vec::with_capacity(rows.len());
    let mut seen: HashSet<String> = HashSet::new();

    for food in rows {
        if !food.is_valid() {
            warn!(food = %food.debug_string(), "skipping invalid catalog row");
            continue;
        }
        if !seen.insert(food.key()) {
            warn!(food = %food.name, "skipping duplicate catalog row");
            continue;
        }
        foods.push(food);
    }

    Ok(foods)
}

/// Load the food catalog CSV. A missing file or missing column is fatal.
pub fn load_food_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<FoodEntry>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let foods = read_food_catalog(file, &path.display().to_string())?;
    info!(path = %path.display(), foods = foods.len(), "food catalog loaded");
    Ok(foods)
}

/// Parse an exercise catalog from any reader.
pub fn read_exercise_catalog<R: Read>(reader: R, source_name: &str) -> Result<Vec<Exercise>> {
    read_table(reader, &EXERCISE_COLUMNS, source_name)
}

/// Load the exercise catalog CSV. A missing file or missing column is fatal.
pub fn load_exercise_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<Exercise>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let exercises = read_exercise_catalog(file, &path.display().to_string())?;
    info!(path = %path.display(), exercises = exercises.len(), "exercise catalog loaded");
    Ok(exercises)
}
