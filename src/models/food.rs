use serde::{Deserialize, Serialize};

use crate::models::nutrition::Nutrient;

/// A food catalog row with per-serving nutrition.
///
/// Field names follow the catalog CSV headers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodEntry {
    #[serde(rename = "Food Name")]
    pub name: String,

    #[serde(rename = "Calories per Serving")]
    pub calories: f64,

    #[serde(rename = "Protein per Serving")]
    pub protein: f64,

    #[serde(rename = "Carbs per Serving")]
    pub carbs: f64,

    #[serde(rename = "Fat per Serving")]
    pub fat: f64,

    #[serde(rename = "Fiber per Serving")]
    pub fiber: f64,

    #[serde(rename = "Serving Weight (g)")]
    pub serving_weight: f64,
}

impl FoodEntry {
    /// Per-serving amount of a nutrient.
    #[inline]
    pub fn nutrient(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein,
            Nutrient::Carbs => self.carbs,
            Nutrient::Fat => self.fat,
            Nutrient::Fiber => self.fiber,
        }
    }

    /// Non-negative nutrition and a positive serving weight.
    pub fn is_valid(&self) -> bool {
        Nutrient::ALL.iter().all(|&n| self.nutrient(n) >= 0.0) && self.serving_weight > 0.0
    }

    /// Canonical key for lookups (lowercase, trimmed name).
    pub fn key(&self) -> String {
        food_key(&self.name)
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{}: {} kcal, P:{} C:{} F:{} Fi:{}, {}g",
            self.name,
            self.calories,
            self.protein,
            self.carbs,
            self.fat,
            self.fiber,
            self.serving_weight
        )
    }
}

/// Normalize a food name for case-insensitive comparison.
pub fn food_key(name: &str) -> String {
    name.trim().to_lowercase()
}
