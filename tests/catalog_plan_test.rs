use std::io::Write;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::NamedTempFile;

use fitplan_rs::catalog::{load_food_catalog, load_meal_plan, save_meal_plan};
use fitplan_rs::error::PlanError;
use fitplan_rs::logging;
use fitplan_rs::models::DailyTargets;
use fitplan_rs::planner::{generate_meal_plan, PlannerConfig};

const FOOD_CSV: &str = "\
Food Name,Calories per Serving,Protein per Serving,Carbs per Serving,Fat per Serving,Fiber per Serving,Serving Weight (g)
Lentil Bowl,350,25,35,10,4,300
Chicken Grain Bowl,350,25,35,10,4,320
Tofu Stir Fry,350,25,35,10,4,280
Salmon Plate,350,25,35,10,4,260
Bean Chili,350,25,35,10,4,310
Turkey Wrap,350,25,35,10,4,240
Olive Oil,119,0,0,13.5,0,14
Broken Row,-5,1,1,1,1,10
";

fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_plan_from_csv_catalog_and_reload() {
    logging::init_test();
    let csv = write_csv(FOOD_CSV);
    let foods = load_food_catalog(csv.path()).unwrap();

    // The negative-calorie row is dropped.
    assert_eq!(foods.len(), 7);

    let daily = DailyTargets {
        calories: 2100.0,
        protein: 150.0,
        carbs: 210.0,
        fat: 60.0,
        fiber: Some(24.0),
    };
    let config = PlannerConfig::default();
    let mut rng = StdRng::seed_from_u64(31);

    let plan = generate_meal_plan(&foods, &daily, 3, &config, &mut rng).unwrap();
    assert!(plan.infeasible_meals().is_empty());

    let out = NamedTempFile::new().unwrap();
    save_meal_plan(out.path(), &plan).unwrap();
    let reloaded = load_meal_plan(out.path()).unwrap();
    assert_eq!(reloaded, plan);
}

#[test]
fn test_catalog_missing_columns_rejected() {
    let csv = write_csv("Food Name,Calories per Serving\nRice,200\n");
    let result = load_food_catalog(csv.path());

    match result {
        Err(PlanError::MissingColumns { missing, .. }) => {
            assert!(missing.contains(&"Protein per Serving".to_string()));
            assert!(missing.contains(&"Serving Weight (g)".to_string()));
        }
        other => panic!("expected MissingColumns, got {:?}", other),
    }
}
