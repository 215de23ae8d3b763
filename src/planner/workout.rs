use std::collections::{HashMap, HashSet};

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::models::{Exercise, PlannedExercise, WorkoutDay, WorkoutPlan};
use crate::planner::constants::{exercises_per_muscle, BIG_MUSCLES};

/// Inputs for a training split.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkoutRequest {
    /// Muscles trained on each day, one entry per day.
    pub muscle_groups_per_day: Vec<Vec<String>>,
    /// Allowed primary equipment; empty means any.
    #[serde(default)]
    pub equipment_available: Vec<String>,
    /// Muscles placed first in their day.
    #[serde(default)]
    pub priority_muscles: Vec<String>,
}

/// Bodybuilding exercises grouped by lowercase muscle name.
fn group_by_muscle<'a>(
    catalog: &'a [Exercise],
    equipment: &HashSet<String>,
) -> HashMap<String, Vec<&'a Exercise>> {
    let mut grouped: HashMap<String, Vec<&Exercise>> = HashMap::new();

    for exercise in catalog.iter().filter(|e| e.is_bodybuilding()) {
        if !equipment.is_empty() && !equipment.contains(&exercise.equipment.trim().to_lowercase())
        {
            continue;
        }
        for muscle in exercise.muscles() {
            grouped.entry(muscle).or_default().push(exercise);
        }
    }

    grouped
}

/// Pick up to `count` distinct exercises for one muscle.
///
/// Starts with a random compound movement when one exists, fills with
/// isolation movements, then with anything left.
fn pick_for_muscle<'a>(
    options: &[&'a Exercise],
    count: usize,
    rng: &mut impl Rng,
) -> Vec<&'a Exercise> {
    let mut shuffled: Vec<&Exercise> = options.to_vec();
    shuffled.shuffle(rng);

    let mut selected: Vec<&Exercise> = Vec::with_capacity(count);
    let mut picked: HashSet<&str> = HashSet::new();

    let compounds: Vec<&Exercise> = shuffled.iter().copied().filter(|e| e.is_compound()).collect();
    if let Some(&first) = compounds.choose(rng) {
        if count > 0 {
            selected.push(first);
            picked.insert(first.name.as_str());
        }
    }

    let isolations = shuffled.iter().copied().filter(|e| e.is_isolation());
    let rest = shuffled.iter().copied();

    for exercise in isolations.chain(rest) {
        if selected.len() >= count {
            break;
        }
        if picked.insert(exercise.name.as_str()) {
            selected.push(exercise);
        }
    }

    selected
}

/// Build a training split from the exercise catalog.
///
/// Muscles missing from the (filtered) catalog are skipped. Within a day,
/// priority muscles come first, then chest/back/quadriceps, then the rest.
pub fn generate_workout_plan(
    catalog: &[Exercise],
    request: &WorkoutRequest,
    rng: &mut impl Rng,
) -> WorkoutPlan {
    let equipment: HashSet<String> = request
        .equipment_available
        .iter()
        .map(|e| e.trim().to_lowercase())
        .collect();
    let priority: HashSet<String> = request
        .priority_muscles
        .iter()
        .map(|m| m.trim().to_lowercase())
        .collect();

    let grouped = group_by_muscle(catalog, &equipment);
    debug!(muscles = grouped.len(), "exercise pool grouped");

    let mut days = Vec::with_capacity(request.muscle_groups_per_day.len());

    for (i, muscles) in request.muscle_groups_per_day.iter().enumerate() {
        let per_muscle = exercises_per_muscle(muscles.len());

        let mut day_priority = Vec::new();
        let mut day_big = Vec::new();
        let mut day_misc = Vec::new();

        for raw in muscles {
            let muscle = raw.trim().to_lowercase();
            let Some(options) = grouped.get(&muscle) else {
                warn!(muscle = %muscle, day = i + 1, "no exercises for muscle, skipping");
                continue;
            };

            let selected = pick_for_muscle(options, per_muscle, rng);

            if priority.contains(&muscle) {
                day_priority.extend(selected);
            } else if BIG_MUSCLES.contains(&muscle.as_str()) {
                day_big.extend(selected);
            } else {
                day_misc.extend(selected);
            }
        }

        let exercises: Vec<PlannedExercise> = day_priority
            .into_iter()
            .chain(day_big)
            .chain(day_misc)
            .map(PlannedExercise::from)
            .collect();

        days.push(WorkoutDay {
            day_number: i as u32 + 1,
            exercises,
        });
    }

    info!(days = days.len(), "workout plan generated");
    WorkoutPlan { days }
}

/// Pick a random replacement exercise.
///
/// Matches bodybuilding exercises whose target muscle list contains
/// `target_muscle`, whose mechanics equal `mechanics`, and whose equipment is
/// in `allowed_equipment` (all case-insensitive).
pub fn refresh_exercise(
    catalog: &[Exercise],
    target_muscle: &str,
    mechanics: &str,
    allowed_equipment: &[String],
    rng: &mut impl Rng,
) -> Option<PlannedExercise> {
    let muscle = target_muscle.trim().to_lowercase();
    let mechanics = mechanics.trim().to_lowercase();
    let allowed: HashSet<String> = allowed_equipment
        .iter()
        .map(|e| e.trim().to_lowercase())
        .collect();

    let matches: Vec<&Exercise> = catalog
        .iter()
        .filter(|e| e.is_bodybuilding())
        .filter(|e| e.target_muscle.to_lowercase().contains(&muscle))
        .filter(|e| e.mechanics.trim().to_lowercase() == mechanics)
        .filter(|e| allowed.contains(&e.equipment.trim().to_lowercase()))
        .collect();

    debug!(candidates = matches.len(), muscle = %muscle, "refresh candidates");
    matches.choose(rng).map(|&e| PlannedExercise::from(e))
}
