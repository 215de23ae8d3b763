use std::path::PathBuf;

use clap::Parser;

use fitplan_rs::catalog::load_food_catalog;
use fitplan_rs::logging;
use fitplan_rs::planner::PlannerConfig;
use fitplan_rs::sweep::{print_table, run_sweep, write_csv, write_summary_json, SweepConfig};

#[derive(Parser, Debug)]
#[command(name = "sweep")]
#[command(about = "Measure how often meal plans fit their macro targets across a grid")]
struct Args {
    /// Daily calorie targets (comma-separated)
    #[arg(long, default_value = "1500,2000,2500,3000")]
    calories: String,

    /// Meals per day (comma-separated)
    #[arg(long, default_value = "3,4,5")]
    meals: String,

    /// Plans generated per cell
    #[arg(long, default_value = "10")]
    trials: usize,

    /// Random seed for reproducibility
    #[arg(long, default_value = "123")]
    seed: u64,

    /// Path to the food catalog CSV
    #[arg(long, default_value = "food_data_with_fiber.csv")]
    foods: PathBuf,

    /// Optional planner config JSON
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output CSV file for all cells
    #[arg(long, default_value = "sweep_results.csv")]
    csv: PathBuf,

    /// Output JSON file for the summary
    #[arg(long, default_value = "sweep_summary.json")]
    json: PathBuf,
}

fn parse_list<T: std::str::FromStr>(s: &str) -> Vec<T> {
    s.split(',')
        .filter_map(|part| part.trim().parse().ok())
        .collect()
}

fn main() {
    logging::init();
    let args = Args::parse();

    let foods = match load_food_catalog(&args.foods) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error loading food catalog {:?}: {}", args.foods, e);
            std::process::exit(1);
        }
    };
    println!("Loaded {} foods from {:?}", foods.len(), args.foods);

    let planner = match &args.config {
        Some(path) => match PlannerConfig::load(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config {:?}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => PlannerConfig::default(),
    };

    let config = SweepConfig {
        calorie_targets: parse_list(&args.calories),
        meal_counts: parse_list(&args.meals),
        trials: args.trials,
        seed: args.seed,
        planner,
    };

    if config.calorie_targets.is_empty() || config.meal_counts.is_empty() {
        eprintln!("Error: no valid calorie targets or meal counts provided");
        std::process::exit(1);
    }

    println!(
        "Sweeping {} calorie targets x {} meal counts, {} trials each...",
        config.calorie_targets.len(),
        config.meal_counts.len(),
        config.trials
    );

    let results = match run_sweep(&config, &foods) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    print_table(&results);

    if let Err(e) = write_csv(&results, &args.csv) {
        eprintln!("Error writing CSV: {}", e);
    } else {
        println!("Wrote all cells to {:?}", args.csv);
    }

    if let Err(e) = write_summary_json(&results, &args.json) {
        eprintln!("Error writing JSON: {}", e);
    } else {
        println!("Wrote summary to {:?}", args.json);
    }
}
