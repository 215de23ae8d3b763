use serde::{Deserialize, Serialize};

use crate::models::food::FoodEntry;

/// The five tracked nutrients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nutrient {
    Calories,
    Protein,
    Carbs,
    Fat,
    Fiber,
}

impl Nutrient {
    pub const ALL: [Nutrient; 5] = [
        Nutrient::Calories,
        Nutrient::Protein,
        Nutrient::Carbs,
        Nutrient::Fat,
        Nutrient::Fiber,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Nutrient::Calories => "calories",
            Nutrient::Protein => "protein",
            Nutrient::Carbs => "carbs",
            Nutrient::Fat => "fat",
            Nutrient::Fiber => "fiber",
        }
    }
}

/// Per-meal nutrient goal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroTarget {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
}

impl MacroTarget {
    #[inline]
    pub fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein,
            Nutrient::Carbs => self.carbs,
            Nutrient::Fat => self.fat,
            Nutrient::Fiber => self.fiber,
        }
    }

    /// Inclusive acceptance band `[(1 - tol) * target, (1 + tol) * target]`.
    pub fn band(&self, nutrient: Nutrient, tolerance: f64) -> (f64, f64) {
        let target = self.get(nutrient);
        ((1.0 - tolerance) * target, (1.0 + tolerance) * target)
    }

    /// Check that every nutrient total lies inside its band, with `slack`
    /// absorbing floating-point error.
    pub fn accepts(&self, totals: &MacroTarget, tolerance: f64, slack: f64) -> bool {
        self.out_of_band(totals, tolerance, slack).is_empty()
    }

    /// Nutrients whose total falls outside its band.
    pub fn out_of_band(&self, totals: &MacroTarget, tolerance: f64, slack: f64) -> Vec<Nutrient> {
        Nutrient::ALL
            .into_iter()
            .filter(|&n| {
                let (lo, hi) = self.band(n, tolerance);
                let value = totals.get(n);
                value < lo - slack || value > hi + slack
            })
            .collect()
    }
}

/// Daily nutrient goals for a client. Fiber may be unset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyTargets {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    #[serde(default)]
    pub fiber: Option<f64>,
}

impl DailyTargets {
    /// Split daily goals evenly across `num_meals`.
    ///
    /// An unset (or non-positive) fiber goal is replaced by `default_fiber`
    /// before the split.
    pub fn per_meal(&self, num_meals: u32, default_fiber: f64) -> MacroTarget {
        let meals = num_meals.max(1) as f64;
        let fiber = self.fiber.filter(|&f| f > 0.0).unwrap_or(default_fiber);

        MacroTarget {
            calories: self.calories / meals,
            protein: self.protein / meals,
            carbs: self.carbs / meals,
            fat: self.fat / meals,
            fiber: fiber / meals,
        }
    }

    /// All goals are positive numbers.
    pub fn is_valid(&self) -> bool {
        [self.calories, self.protein, self.carbs, self.fat]
            .into_iter()
            .all(|v| v.is_finite() && v > 0.0)
            && self.fiber.is_none_or(|f| f.is_finite() && f >= 0.0)
    }
}

/// One food in a generated meal: integer servings plus derived totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealItem {
    pub food_name: String,
    pub servings: u32,
    pub weight_in_grams: f64,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub fiber: f64,
}

impl MealItem {
    /// Scale a catalog entry by a serving count.
    ///
    /// Totals and weight are rounded to 2 decimal places.
    pub fn from_servings(food: &FoodEntry, servings: u32) -> Self {
        let n = servings as f64;
        Self {
            food_name: food.name.clone(),
            servings,
            weight_in_grams: round2(food.serving_weight * n),
            calories: round2(food.calories * n),
            protein: round2(food.protein * n),
            carbs: round2(food.carbs * n),
            fats: round2(food.fat * n),
            fiber: round2(food.fiber * n),
        }
    }
}

/// Sum the nutrient totals of a list of meal items.
pub fn sum_items(items: &[MealItem]) -> MacroTarget {
    items.iter().fold(
        MacroTarget {
            calories: 0.0,
            protein: 0.0,
            carbs: 0.0,
            fat: 0.0,
            fiber: 0.0,
        },
        |acc, item| MacroTarget {
            calories: acc.calories + item.calories,
            protein: acc.protein + item.protein,
            carbs: acc.carbs + item.carbs,
            fat: acc.fat + item.fats,
            fiber: acc.fiber + item.fiber,
        },
    )
}

/// Round to 2 decimal places.
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn daily() -> DailyTargets {
        DailyTargets {
            calories: 2100.0,
            protein: 150.0,
            carbs: 210.0,
            fat: 60.0,
            fiber: Some(30.0),
        }
    }

    #[test]
    fn test_per_meal_divides_every_goal() {
        let target = daily().per_meal(3, 8.0);
        assert!((target.calories - 700.0).abs() < 1e-9);
        assert!((target.protein - 50.0).abs() < 1e-9);
        assert!((target.carbs - 70.0).abs() < 1e-9);
        assert!((target.fat - 20.0).abs() < 1e-9);
        assert!((target.fiber - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_fiber_defaults_before_split() {
        let mut targets = daily();
        targets.fiber = None;
        let target = targets.per_meal(4, 8.0);
        assert!((target.fiber - 2.0).abs() < 1e-9);

        targets.fiber = Some(0.0);
        let target = targets.per_meal(1, 8.0);
        assert!((target.fiber - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_band_and_accepts() {
        let target = daily().per_meal(3, 8.0);
        let (lo, hi) = target.band(Nutrient::Calories, 0.1);
        assert!((lo - 630.0).abs() < 1e-9);
        assert!((hi - 770.0).abs() < 1e-9);

        assert!(target.accepts(&target, 0.1, 1e-6));

        let mut over = target;
        over.protein = 56.0;
        assert!(!target.accepts(&over, 0.1, 1e-6));

        over.fiber = 1.0;
        let missed = target.out_of_band(&over, 0.1, 1e-6);
        assert_eq!(missed, vec![Nutrient::Protein, Nutrient::Fiber]);
        assert_eq!(missed[1].label(), "fiber");
    }

    #[test]
    fn test_meal_item_rounding() {
        let food = FoodEntry {
            name: "Oats".to_string(),
            calories: 150.333,
            protein: 5.111,
            carbs: 27.0,
            fat: 2.5,
            fiber: 4.0,
            serving_weight: 40.0,
        };
        let item = MealItem::from_servings(&food, 3);
        assert_eq!(item.servings, 3);
        assert_eq!(item.weight_in_grams, 120.0);
        assert_eq!(item.calories, 451.0);
        assert_eq!(item.protein, 15.33);
        assert_eq!(item.fats, 7.5);
    }
}
