use crate::models::{FoodEntry, MacroTarget, Meal, MealPlan, WorkoutPlan};
use crate::planner::Recommendation;

fn display_meal(meal: &Meal, target: &MacroTarget) {
    println!("--- Meal {} ---", meal.meal_number);

    if meal.is_infeasible() {
        println!("  No food combination fits this meal's targets.");
        println!();
        return;
    }

    let width = meal
        .items
        .iter()
        .map(|i| i.food_name.len())
        .max()
        .unwrap_or(10);

    for item in &meal.items {
        println!(
            "  {:<width$}  x{:<2} {:>7.2} g | {:>7.2} kcal  P {:>6.2}  C {:>6.2}  F {:>6.2}  Fi {:>5.2}",
            item.food_name,
            item.servings,
            item.weight_in_grams,
            item.calories,
            item.protein,
            item.carbs,
            item.fats,
            item.fiber,
            width = width
        );
    }

    let totals = meal.totals();
    println!(
        "  Total: {:.2} kcal (target {:.2})  P {:.2}/{:.2}  C {:.2}/{:.2}  F {:.2}/{:.2}  Fi {:.2}/{:.2}",
        totals.calories,
        target.calories,
        totals.protein,
        target.protein,
        totals.carbs,
        target.carbs,
        totals.fat,
        target.fat,
        totals.fiber,
        target.fiber
    );
    println!();
}

/// Display a meal plan with per-meal totals against the per-meal target.
pub fn display_meal_plan(plan: &MealPlan, target: &MacroTarget) {
    if plan.is_empty() {
        println!("No meal plan generated.");
        return;
    }

    println!();
    println!("=== Meal Plan ({} meals) ===", plan.len());
    println!();

    for meal in &plan.meals {
        display_meal(meal, target);
    }

    let infeasible = plan.infeasible_meals();
    if !infeasible.is_empty() {
        println!(
            "Meals without a fitting selection: {:?}. Try regenerating or widening the tolerance.",
            infeasible
        );
        println!();
    }
}

/// Display a workout plan day by day.
pub fn display_workout_plan(plan: &WorkoutPlan) {
    if plan.days.is_empty() {
        println!("No workout days requested.");
        return;
    }

    println!();
    println!("=== Workout Plan ({} days) ===", plan.training_frequency());

    for day in &plan.days {
        println!();
        println!("Day {}:", day.day_number);
        if day.exercises.is_empty() {
            println!("  (no matching exercises)");
        }
        for (i, ex) in day.exercises.iter().enumerate() {
            println!(
                "  {:>2}. {} [{}] - {}, {}",
                i + 1,
                ex.exercise_name,
                ex.target_muscle,
                ex.equipment,
                ex.mechanics
            );
        }
    }
    println!();
}

/// Display workout recommendations.
pub fn display_recommendations(recommendations: &[Recommendation]) {
    if recommendations.is_empty() {
        println!("No recommendations (not enough rated clients).");
        return;
    }

    println!();
    println!("=== Recommended Workouts ===");
    for (i, rec) in recommendations.iter().enumerate() {
        println!("  {}. {} (plan #{})", i + 1, rec.workout_name, rec.workout_plan_id);
    }
    println!();
}

/// Display a simple list of catalog foods.
pub fn display_food_list(foods: &[FoodEntry], title: &str) {
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();

    for food in foods {
        println!("  {}", food.debug_string());
    }

    println!();
}
