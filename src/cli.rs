use clap::{Parser, Subcommand};

/// fitplan: macro-constrained meal plans, workout splits, and workout
/// recommendations for coaching clients.
#[derive(Parser, Debug)]
#[command(name = "fitplan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the food catalog CSV.
    #[arg(long, global = true, default_value = "food_data_with_fiber.csv")]
    pub foods: String,

    /// Path to the exercise catalog CSV.
    #[arg(long, global = true, default_value = "exercise_database_full.csv")]
    pub exercises: String,

    /// Path to the client directory JSON.
    #[arg(long, global = true, default_value = "clients.json")]
    pub clients: String,

    /// Optional planner config JSON.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Seed for reproducible plans.
    #[arg(long, global = true)]
    pub seed: Option<u64>,
}

/// Daily targets given on the command line. Any missing value triggers prompts.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct TargetArgs {
    /// Daily calories (kcal).
    #[arg(long)]
    pub calories: Option<f64>,

    /// Daily protein (g).
    #[arg(long)]
    pub protein: Option<f64>,

    /// Daily carbs (g).
    #[arg(long)]
    pub carbs: Option<f64>,

    /// Daily fat (g).
    #[arg(long)]
    pub fat: Option<f64>,

    /// Daily fiber (g); defaults when absent.
    #[arg(long)]
    pub fiber: Option<f64>,

    /// Derive targets from this client's profile instead.
    #[arg(long, conflicts_with_all = ["calories", "protein", "carbs", "fat"])]
    pub client: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a day of meals that hit the daily macro targets.
    Plan {
        #[command(flatten)]
        targets: TargetArgs,

        /// Meals per day (prompted when absent).
        #[arg(long)]
        meals: Option<u32>,

        /// Write the plan as JSON.
        #[arg(long)]
        out: Option<String>,
    },

    /// Regenerate one meal of a saved plan, avoiding foods from other meals.
    Regenerate {
        #[command(flatten)]
        targets: TargetArgs,

        /// Saved plan JSON (rewritten in place).
        #[arg(long)]
        plan: String,

        /// Meal number to replace.
        #[arg(long)]
        meal: u32,
    },

    /// Build a workout split, e.g. --days "chest,triceps;back,biceps;legs".
    Workout {
        /// Muscles per day: days separated by ';', muscles by ','.
        #[arg(long)]
        days: String,

        /// Allowed primary equipment (comma-separated).
        #[arg(long, value_delimiter = ',')]
        equipment: Vec<String>,

        /// Priority muscles (comma-separated).
        #[arg(long, value_delimiter = ',')]
        priority: Vec<String>,

        /// Write the plan as JSON.
        #[arg(long)]
        out: Option<String>,
    },

    /// Swap in a random alternative exercise.
    Refresh {
        /// Target muscle, e.g. "biceps".
        #[arg(long)]
        muscle: String,

        /// "compound" or "isolation".
        #[arg(long)]
        mechanics: String,

        /// Allowed primary equipment (comma-separated).
        #[arg(long, value_delimiter = ',', required = true)]
        equipment: Vec<String>,
    },

    /// Recommend workouts rated highly by similar clients.
    Recommend {
        /// Client id to recommend for.
        #[arg(long)]
        client: u64,
    },

    /// List the food catalog.
    Foods,
}

/// Split "chest,triceps;back" into per-day muscle lists, dropping blanks.
pub fn parse_days(spec: &str) -> Vec<Vec<String>> {
    spec.split(';')
        .map(|day| {
            day.split(',')
                .map(|m| m.trim().to_string())
                .filter(|m| !m.is_empty())
                .collect::<Vec<_>>()
        })
        .filter(|day| !day.is_empty())
        .collect()
}
