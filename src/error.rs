use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Missing columns in {source_name}: {missing:?} (found: {found:?})")]
    MissingColumns {
        source_name: String,
        missing: Vec<String>,
        found: Vec<String>,
    },

    #[error("Client not found: {0}")]
    ClientNotFound(u64),

    #[error("Meal {0} is not part of the plan")]
    MealNotFound(u32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, PlanError>;
