use std::collections::BTreeSet;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use fitplan_rs::catalog::{
    load_clients, load_exercise_catalog, load_food_catalog, load_meal_plan, save_json,
    save_meal_plan,
};
use fitplan_rs::cli::{parse_days, Cli, Command, TargetArgs};
use fitplan_rs::error::{PlanError, Result};
use fitplan_rs::interface::{
    display_food_list, display_meal_plan, display_recommendations, display_workout_plan,
    prompt_daily_targets, prompt_num_meals, prompt_yes_no, resolve_muscle,
};
use fitplan_rs::logging;
use fitplan_rs::models::DailyTargets;
use fitplan_rs::planner::{
    daily_targets_for, generate_meal_plan, generate_workout_plan, recommend_workouts,
    refresh_exercise, regenerate_meal, PlannerConfig, WorkoutRequest, DEFAULT_NUM_MEALS,
};

fn main() {
    logging::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => PlannerConfig::load(path)?,
        None => PlannerConfig::default(),
    };
    debug!(?config, "planner config");

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    match &cli.command {
        Command::Plan {
            targets,
            meals,
            out,
        } => cmd_plan(&cli, &config, &mut rng, targets, *meals, out.as_deref()),
        Command::Regenerate {
            targets,
            plan,
            meal,
        } => cmd_regenerate(&cli, &config, &mut rng, targets, plan, *meal),
        Command::Workout {
            days,
            equipment,
            priority,
            out,
        } => cmd_workout(&cli, &mut rng, days, equipment, priority, out.as_deref()),
        Command::Refresh {
            muscle,
            mechanics,
            equipment,
        } => cmd_refresh(&cli, &mut rng, muscle, mechanics, equipment),
        Command::Recommend { client } => cmd_recommend(&cli, &config, *client),
        Command::Foods => cmd_foods(&cli),
    }
}

/// Daily targets from a client profile, from flags, or from prompts.
fn resolve_targets(cli: &Cli, args: &TargetArgs) -> Result<DailyTargets> {
    let targets = if let Some(id) = args.client {
        let directory = load_clients(&cli.clients)?;
        let profile = directory.client(id).ok_or(PlanError::ClientNotFound(id))?;
        daily_targets_for(profile)?
    } else {
        match (args.calories, args.protein, args.carbs, args.fat) {
            (Some(calories), Some(protein), Some(carbs), Some(fat)) => DailyTargets {
                calories,
                protein,
                carbs,
                fat,
                fiber: args.fiber,
            },
            _ => prompt_daily_targets()?,
        }
    };

    if !targets.is_valid() {
        return Err(PlanError::InvalidInput(format!(
            "daily targets must be positive: {:?}",
            targets
        )));
    }

    Ok(targets)
}

/// Generate and display a full meal plan.
fn cmd_plan(
    cli: &Cli,
    config: &PlannerConfig,
    rng: &mut StdRng,
    targets: &TargetArgs,
    meals: Option<u32>,
    out: Option<&str>,
) -> Result<()> {
    let foods = load_food_catalog(&cli.foods)?;
    println!("Loaded {} foods", foods.len());

    let daily = resolve_targets(cli, targets)?;
    let num_meals = match meals {
        Some(n) => n,
        None => prompt_num_meals(DEFAULT_NUM_MEALS)?,
    };

    let plan = generate_meal_plan(&foods, &daily, num_meals, config, rng)?;
    display_meal_plan(&plan, &daily.per_meal(num_meals, config.default_fiber));

    if let Some(path) = out {
        save_meal_plan(path, &plan)?;
        println!("Meal plan saved to {}", path);
    }

    Ok(())
}

/// Regenerate one meal of a saved plan and write it back.
fn cmd_regenerate(
    cli: &Cli,
    config: &PlannerConfig,
    rng: &mut StdRng,
    targets: &TargetArgs,
    plan_path: &str,
    meal_number: u32,
) -> Result<()> {
    let foods = load_food_catalog(&cli.foods)?;
    let mut plan = load_meal_plan(plan_path)?;
    let daily = resolve_targets(cli, targets)?;

    regenerate_meal(&foods, &daily, &mut plan, meal_number, config, rng)?;

    let num_meals = plan.len() as u32;
    display_meal_plan(&plan, &daily.per_meal(num_meals, config.default_fiber));

    if prompt_yes_no("Save updated meal plan?", true)? {
        save_meal_plan(plan_path, &plan)?;
        println!("Meal plan saved to {}", plan_path);
    }

    Ok(())
}

/// Build a workout split, resolving unknown muscle names interactively.
fn cmd_workout(
    cli: &Cli,
    rng: &mut StdRng,
    days: &str,
    equipment: &[String],
    priority: &[String],
    out: Option<&str>,
) -> Result<()> {
    let exercises = load_exercise_catalog(&cli.exercises)?;

    let known: Vec<String> = exercises
        .iter()
        .filter(|e| e.is_bodybuilding())
        .flat_map(|e| e.muscles())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut muscle_groups_per_day = Vec::new();
    for day in parse_days(days) {
        let mut resolved = Vec::with_capacity(day.len());
        for muscle in &day {
            if let Some(m) = resolve_muscle(muscle, &known)? {
                resolved.push(m);
            }
        }
        muscle_groups_per_day.push(resolved);
    }

    if muscle_groups_per_day.is_empty() {
        return Err(PlanError::InvalidInput(
            "at least one training day is required".to_string(),
        ));
    }

    let request = WorkoutRequest {
        muscle_groups_per_day,
        equipment_available: equipment.to_vec(),
        priority_muscles: priority.to_vec(),
    };

    let plan = generate_workout_plan(&exercises, &request, rng);
    display_workout_plan(&plan);

    if let Some(path) = out {
        save_json(path, &plan)?;
        println!("Workout plan saved to {}", path);
    }

    Ok(())
}

fn cmd_refresh(
    cli: &Cli,
    rng: &mut StdRng,
    muscle: &str,
    mechanics: &str,
    equipment: &[String],
) -> Result<()> {
    let exercises = load_exercise_catalog(&cli.exercises)?;

    match refresh_exercise(&exercises, muscle, mechanics, equipment, rng) {
        Some(ex) => println!(
            "{} [{}] - {}, {}",
            ex.exercise_name, ex.target_muscle, ex.equipment, ex.mechanics
        ),
        None => println!("No alternative exercise matches those filters."),
    }

    Ok(())
}

fn cmd_recommend(cli: &Cli, config: &PlannerConfig, client: u64) -> Result<()> {
    let directory = load_clients(&cli.clients)?;
    let recommendations = recommend_workouts(
        &directory,
        client,
        config.knn_neighbours,
        config.max_recommendations,
    )?;
    display_recommendations(&recommendations);
    Ok(())
}

fn cmd_foods(cli: &Cli) -> Result<()> {
    let foods = load_food_catalog(&cli.foods)?;
    display_food_list(&foods, "Food Catalog");
    Ok(())
}
