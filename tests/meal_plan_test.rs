use std::collections::{HashMap, HashSet};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use fitplan_rs::logging;
use fitplan_rs::models::{food_key, sum_items, DailyTargets, FoodEntry, MacroTarget, MealItem};
use fitplan_rs::planner::{
    candidate_foods, generate_meal_plan, optimize_meal, regenerate_meal, PlannerConfig,
};

fn make_food(name: &str, cal: f64, p: f64, c: f64, f: f64, fi: f64) -> FoodEntry {
    FoodEntry {
        name: name.to_string(),
        calories: cal,
        protein: p,
        carbs: c,
        fat: f,
        fiber: fi,
        serving_weight: 100.0,
    }
}

/// Two servings hit the 700 kcal meal target exactly.
fn bowl(name: &str) -> FoodEntry {
    make_food(name, 350.0, 25.0, 35.0, 10.0, 4.0)
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Seeded catalog of protein, starch, fat and vegetable foods with
/// calories derived from the macros (4/4/9 kcal per gram). No single food
/// matches a meal target on its own.
fn mixed_catalog(per_kind: usize, seed: u64) -> Vec<FoodEntry> {
    let mut rng = StdRng::seed_from_u64(seed);
    // (protein, carbs, fat, fiber) ranges per serving.
    let kinds: [(&str, [(f64, f64); 4]); 4] = [
        ("Protein", [(15.0, 30.0), (0.0, 3.0), (0.5, 6.0), (0.0, 0.5)]),
        ("Starch", [(2.0, 6.0), (20.0, 45.0), (0.3, 3.0), (0.5, 4.0)]),
        ("Fat", [(0.0, 4.0), (0.0, 5.0), (8.0, 15.0), (0.0, 2.0)]),
        ("Vegetable", [(1.0, 4.0), (4.0, 12.0), (0.0, 1.0), (2.0, 6.0)]),
    ];

    let mut foods = Vec::with_capacity(per_kind * kinds.len());
    for i in 0..per_kind {
        for &(kind, ranges) in &kinds {
            let [p, c, f, fi] = ranges.map(|(lo, hi)| round1(rng.gen_range(lo..=hi)));
            let calories = round1(4.0 * p + 4.0 * c + 9.0 * f);
            foods.push(make_food(&format!("{} {}", kind, i), calories, p, c, f, fi));
        }
    }

    foods
}

fn meal_target() -> MacroTarget {
    MacroTarget {
        calories: 700.0,
        protein: 50.0,
        carbs: 70.0,
        fat: 20.0,
        fiber: 8.0,
    }
}

fn daily() -> DailyTargets {
    DailyTargets {
        calories: 2100.0,
        protein: 150.0,
        carbs: 210.0,
        fat: 60.0,
        fiber: Some(24.0),
    }
}

fn assert_within_band(items: &[MealItem], target: &MacroTarget, tolerance: f64) {
    let totals = sum_items(items);
    let check = |name: &str, total: f64, goal: f64| {
        let lower = (1.0 - tolerance) * goal - 1e-6;
        let upper = (1.0 + tolerance) * goal + 1e-6;
        assert!(
            total >= lower && total <= upper,
            "{} total {} outside [{}, {}]",
            name,
            total,
            lower,
            upper
        );
    };

    check("calories", totals.calories, target.calories);
    check("protein", totals.protein, target.protein);
    check("carbs", totals.carbs, target.carbs);
    check("fat", totals.fat, target.fat);
    check("fiber", totals.fiber, target.fiber);
}

#[test]
fn test_meal_hits_every_macro_band() {
    logging::init_test();
    let catalog = mixed_catalog(13, 700);
    assert_eq!(catalog.len(), 52);
    let config = PlannerConfig::default();
    let mut rng = StdRng::seed_from_u64(700);

    let items = optimize_meal(&meal_target(), &catalog, &HashSet::new(), &config, &mut rng);

    assert!(!items.is_empty(), "catalog contains a feasible selection");
    assert!(items.len() >= 2, "targets need more than one food");
    assert_within_band(&items, &meal_target(), config.tolerance);

    let totals = sum_items(&items);
    assert!((630.0 - 1e-6..=770.0 + 1e-6).contains(&totals.calories));
    assert!((45.0 - 1e-6..=55.0 + 1e-6).contains(&totals.protein));
}

#[test]
fn test_every_item_has_positive_servings_and_weight() {
    let catalog = mixed_catalog(13, 11);
    let config = PlannerConfig::default();
    let mut rng = StdRng::seed_from_u64(11);

    let items = optimize_meal(&meal_target(), &catalog, &HashSet::new(), &config, &mut rng);

    assert!(!items.is_empty());
    for item in &items {
        assert!(item.servings >= 1);
        let food = catalog.iter().find(|f| f.name == item.food_name).unwrap();
        assert!((item.weight_in_grams - food.serving_weight * item.servings as f64).abs() < 1e-9);
    }
}

#[test]
fn test_repeated_calls_all_satisfy_band() {
    let catalog = mixed_catalog(13, 700);
    let config = PlannerConfig::default();

    for seed in 0..5 {
        let mut rng = StdRng::seed_from_u64(seed);
        let items = optimize_meal(&meal_target(), &catalog, &HashSet::new(), &config, &mut rng);
        assert!(!items.is_empty(), "seed {} found no selection", seed);
        assert_within_band(&items, &meal_target(), config.tolerance);
    }
}

#[test]
fn test_plan_never_repeats_foods_across_meals() {
    logging::init_test();
    let catalog = mixed_catalog(50, 2024);
    let config = PlannerConfig::default();
    let mut rng = StdRng::seed_from_u64(2024);

    let plan = generate_meal_plan(&catalog, &daily(), 3, &config, &mut rng).unwrap();

    assert_eq!(plan.len(), 3);
    assert_eq!(
        plan.meals.iter().map(|m| m.meal_number).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );

    let mut meals_per_food: HashMap<String, usize> = HashMap::new();
    for meal in &plan.meals {
        assert!(!meal.is_infeasible(), "meal {} infeasible", meal.meal_number);
        assert!(meal.items.len() >= 2);
        assert_within_band(&meal.items, &meal_target(), config.tolerance);
        for item in &meal.items {
            *meals_per_food.entry(food_key(&item.food_name)).or_default() += 1;
        }
    }

    assert!(meals_per_food.values().all(|&n| n == 1));
}

#[test]
fn test_missing_fiber_uses_default_before_split() {
    let targets = DailyTargets {
        calories: 700.0,
        protein: 50.0,
        carbs: 70.0,
        fat: 20.0,
        fiber: None,
    };
    let config = PlannerConfig::default();

    assert!((targets.per_meal(1, config.default_fiber).fiber - 8.0).abs() < 1e-9);

    let mut rng = StdRng::seed_from_u64(5);
    let plan = generate_meal_plan(&mixed_catalog(13, 5), &targets, 1, &config, &mut rng).unwrap();
    let totals = plan.meals[0].totals();
    assert!((7.2 - 1e-6..=8.8 + 1e-6).contains(&totals.fiber));
}

#[test]
fn test_exclusion_dropped_when_too_few_foods_remain() {
    let catalog = vec![
        bowl("Bowl A"),
        bowl("Bowl B"),
        make_food("Olive Oil", 119.0, 0.0, 0.0, 13.5, 0.0),
    ];
    let excluded: HashSet<String> = ["Bowl A".to_string(), "Bowl B".to_string()].into();

    assert_eq!(candidate_foods(&catalog, &excluded, 3).len(), 3);

    // Oil alone cannot meet the targets; the bypass brings the bowls back.
    let config = PlannerConfig::default();
    let mut rng = StdRng::seed_from_u64(8);
    let items = optimize_meal(&meal_target(), &catalog, &excluded, &config, &mut rng);
    assert!(!items.is_empty());
    assert_within_band(&items, &meal_target(), config.tolerance);

    // With the bypass disabled only the oil is left, which is infeasible.
    let strict = PlannerConfig {
        min_remaining_foods: 0,
        ..Default::default()
    };
    let items = optimize_meal(&meal_target(), &catalog, &excluded, &strict, &mut rng);
    assert!(items.is_empty());
}

#[test]
fn test_regenerate_meal_avoids_other_meals() {
    let catalog = mixed_catalog(50, 99);
    let config = PlannerConfig::default();
    let mut rng = StdRng::seed_from_u64(99);

    let mut plan = generate_meal_plan(&catalog, &daily(), 3, &config, &mut rng).unwrap();
    regenerate_meal(&catalog, &daily(), &mut plan, 2, &config, &mut rng).unwrap();

    let others = plan.foods_outside(2);
    let meal = plan.meal(2).unwrap();

    assert!(!meal.is_infeasible());
    assert_within_band(&meal.items, &meal_target(), config.tolerance);
    for item in &meal.items {
        assert!(!others.contains(&food_key(&item.food_name)));
    }
}
