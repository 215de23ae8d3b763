use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::food::food_key;
use crate::models::nutrition::{sum_items, MacroTarget, MealItem};

/// One meal of a plan. An empty item list means the optimizer found no
/// selection inside the tolerance band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub meal_number: u32,
    pub items: Vec<MealItem>,
}

impl Meal {
    pub fn is_infeasible(&self) -> bool {
        self.items.is_empty()
    }

    pub fn totals(&self) -> MacroTarget {
        sum_items(&self.items)
    }
}

/// A day of meals, numbered from 1.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    pub meals: Vec<Meal>,
}

impl MealPlan {
    pub fn meal(&self, meal_number: u32) -> Option<&Meal> {
        self.meals.iter().find(|m| m.meal_number == meal_number)
    }

    pub fn meal_mut(&mut self, meal_number: u32) -> Option<&mut Meal> {
        self.meals.iter_mut().find(|m| m.meal_number == meal_number)
    }

    /// Food keys used by every meal except `meal_number`.
    pub fn foods_outside(&self, meal_number: u32) -> HashSet<String> {
        self.meals
            .iter()
            .filter(|m| m.meal_number != meal_number)
            .flat_map(|m| m.items.iter().map(|item| food_key(&item.food_name)))
            .collect()
    }

    pub fn infeasible_meals(&self) -> Vec<u32> {
        self.meals
            .iter()
            .filter(|m| m.is_infeasible())
            .map(|m| m.meal_number)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}
