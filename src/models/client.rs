use serde::{Deserialize, Serialize};

use crate::planner::constants::DEFAULT_PROTEIN_MULTIPLIER;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    #[default]
    ModeratelyActive,
    VeryActive,
    SuperActive,
}

impl ActivityLevel {
    /// Ordinal used in similarity features (1..=5).
    pub fn ordinal(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.0,
            ActivityLevel::LightlyActive => 2.0,
            ActivityLevel::ModeratelyActive => 3.0,
            ActivityLevel::VeryActive => 4.0,
            ActivityLevel::SuperActive => 5.0,
        }
    }

    /// TDEE multiplier applied to BMR.
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::SuperActive => 1.9,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    #[serde(alias = "Male")]
    Male,
    #[serde(alias = "Female")]
    Female,
    #[default]
    #[serde(alias = "Other")]
    Other,
}

impl Gender {
    pub fn ordinal(self) -> f64 {
        match self {
            Gender::Male => 0.0,
            Gender::Female => 1.0,
            Gender::Other => 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    LoseWeight,
    #[default]
    MaintainWeight,
    GainMuscle,
}

impl Goal {
    pub fn ordinal(self) -> f64 {
        match self {
            Goal::LoseWeight => 0.0,
            Goal::MaintainWeight => 1.0,
            Goal::GainMuscle => 2.0,
        }
    }

    /// Daily calorie adjustment relative to maintenance.
    pub fn calorie_offset(self) -> f64 {
        match self {
            Goal::LoseWeight => -500.0,
            Goal::MaintainWeight => 0.0,
            Goal::GainMuscle => 500.0,
        }
    }
}

fn default_protein_multiplier() -> f64 {
    DEFAULT_PROTEIN_MULTIPLIER
}

/// Client attributes used for target derivation and similarity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientProfile {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Gender,
    /// Height in cm.
    #[serde(default)]
    pub height: f64,
    /// Weight in kg.
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub activity_level: ActivityLevel,
    #[serde(default)]
    pub goal: Goal,
    /// Grams of protein per kg of bodyweight.
    #[serde(default = "default_protein_multiplier")]
    pub protein_multiplier: f64,
}

/// A client's rating of a workout plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRating {
    pub client_id: u64,
    pub workout_plan_id: u64,
    #[serde(default)]
    pub workout_name: String,
    pub rating: u8,
}

/// Clients and their workout ratings, as loaded from the directory file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientDirectory {
    #[serde(default)]
    pub clients: Vec<ClientProfile>,
    #[serde(default)]
    pub ratings: Vec<WorkoutRating>,
}

impl ClientDirectory {
    pub fn client(&self, id: u64) -> Option<&ClientProfile> {
        self.clients.iter().find(|c| c.id == id)
    }

    pub fn ratings_for(&self, client_id: u64) -> impl Iterator<Item = &WorkoutRating> {
        self.ratings.iter().filter(move |r| r.client_id == client_id)
    }

    pub fn has_ratings(&self, client_id: u64) -> bool {
        self.ratings_for(client_id).next().is_some()
    }

    /// Display name of a workout plan, from any rating that mentions it.
    pub fn workout_name(&self, workout_plan_id: u64) -> Option<&str> {
        self.ratings
            .iter()
            .find(|r| r.workout_plan_id == workout_plan_id && !r.workout_name.is_empty())
            .map(|r| r.workout_name.as_str())
    }
}
