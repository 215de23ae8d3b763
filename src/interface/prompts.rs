use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{PlanError, Result};
use crate::models::DailyTargets;
use crate::planner::constants::MUSCLE_MATCH_THRESHOLD;

/// Prompt for a positive number.
pub fn prompt_positive(prompt: &str, default: &str) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidInput(format!("Invalid number: {}", input)))?;

    if value <= 0.0 {
        return Err(PlanError::InvalidInput(format!(
            "{} must be positive",
            prompt
        )));
    }

    Ok(value)
}

/// Prompt for an optional fiber goal (empty means use the default).
pub fn prompt_fiber() -> Result<Option<f64>> {
    let input: String = Input::new()
        .with_prompt("Daily fiber (g, leave empty for default)")
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    input
        .parse()
        .map(Some)
        .map_err(|_| PlanError::InvalidInput(format!("Invalid number: {}", input)))
}

/// Collect daily targets interactively.
pub fn prompt_daily_targets() -> Result<DailyTargets> {
    let calories = prompt_positive("Daily calories (kcal)", "2000")?;
    let protein = prompt_positive("Daily protein (g)", "150")?;
    let carbs = prompt_positive("Daily carbs (g)", "200")?;
    let fat = prompt_positive("Daily fat (g)", "60")?;
    let fiber = prompt_fiber()?;

    Ok(DailyTargets {
        calories,
        protein,
        carbs,
        fat,
        fiber,
    })
}

/// Prompt for the number of meals per day.
pub fn prompt_num_meals(default: u32) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("How many meals per day?")
        .default(default.to_string())
        .interact_text()?;

    match input.trim().parse::<u32>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(PlanError::InvalidInput(format!(
            "Invalid meal count: {}",
            input
        ))),
    }
}

/// Known muscles ranked by similarity to `input`, best first.
///
/// Only candidates scoring above `MUSCLE_MATCH_THRESHOLD` are returned.
pub fn suggest_muscles(input: &str, known: &[String]) -> Vec<String> {
    let needle = input.trim().to_lowercase();
    let mut candidates: Vec<(&String, f64)> = known
        .iter()
        .map(|m| (m, jaro_winkler(&m.to_lowercase(), &needle)))
        .filter(|(_, score)| *score > MUSCLE_MATCH_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates.into_iter().map(|(m, _)| m.clone()).collect()
}

/// Map a user-entered muscle onto a catalog muscle.
///
/// Exact (case-insensitive) matches pass straight through; otherwise the user
/// confirms or picks a fuzzy suggestion. `None` means drop the muscle.
pub fn resolve_muscle(input: &str, known: &[String]) -> Result<Option<String>> {
    let needle = input.trim().to_lowercase();
    if known.iter().any(|m| m.to_lowercase() == needle) {
        return Ok(Some(needle));
    }

    let candidates = suggest_muscles(&needle, known);

    if candidates.is_empty() {
        println!("No matching muscle found for '{}'", input);
        return Ok(None);
    }

    if candidates.len() == 1 {
        let muscle = &candidates[0];
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", muscle))
            .default(true)
            .interact()?;
        return Ok(confirm.then(|| muscle.clone()));
    }

    let mut options: Vec<String> = candidates.into_iter().take(5).collect();
    let choices = options.len();
    options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt(format!("Which muscle did you mean by '{}'?", input))
        .items(&options)
        .default(0)
        .interact()?;

    Ok((selection < choices).then(|| options.swap_remove(selection)))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
