use serde::{Deserialize, Serialize};

/// An exercise catalog row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    #[serde(rename = "Exercise")]
    pub name: String,

    #[serde(rename = "Difficulty Level")]
    pub difficulty: String,

    #[serde(rename = "Target Muscle Group")]
    pub target_muscle: String,

    #[serde(rename = "Primary Equipment")]
    pub equipment: String,

    #[serde(rename = "Exercise Classification")]
    pub classification: String,

    #[serde(rename = "Mechanics")]
    pub mechanics: String,
}

impl Exercise {
    /// Lowercase muscles from the comma-separated target list.
    pub fn muscles(&self) -> Vec<String> {
        self.target_muscle
            .split(',')
            .map(|m| m.trim().to_lowercase())
            .filter(|m| !m.is_empty())
            .collect()
    }

    pub fn is_bodybuilding(&self) -> bool {
        self.classification.trim().eq_ignore_ascii_case("bodybuilding")
    }

    pub fn is_compound(&self) -> bool {
        self.mechanics.trim().eq_ignore_ascii_case("compound")
    }

    pub fn is_isolation(&self) -> bool {
        self.mechanics.trim().eq_ignore_ascii_case("isolation")
    }
}

/// An exercise as it appears in a generated plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedExercise {
    pub exercise_name: String,
    pub target_muscle: String,
    pub equipment: String,
    pub mechanics: String,
}

impl From<&Exercise> for PlannedExercise {
    fn from(exercise: &Exercise) -> Self {
        Self {
            exercise_name: exercise.name.clone(),
            target_muscle: exercise.target_muscle.clone(),
            equipment: exercise.equipment.clone(),
            mechanics: exercise.mechanics.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutDay {
    pub day_number: u32,
    pub exercises: Vec<PlannedExercise>,
}

/// A training split, days numbered from 1.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub days: Vec<WorkoutDay>,
}

impl WorkoutPlan {
    /// Number of training days.
    pub fn training_frequency(&self) -> usize {
        self.days.len()
    }
}
