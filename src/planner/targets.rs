use crate::error::{PlanError, Result};
use crate::models::{round2, ClientProfile, DailyTargets, Gender};
use crate::planner::constants::*;

/// Basal metabolic rate (Mifflin-St Jeor).
pub fn basal_metabolic_rate(profile: &ClientProfile, age: u32) -> f64 {
    let base = 10.0 * profile.weight + 6.25 * profile.height - 5.0 * age as f64;
    match profile.gender {
        Gender::Male => base + 5.0,
        Gender::Female | Gender::Other => base - 161.0,
    }
}

/// Derive daily calorie and macro goals from a client profile.
///
/// Calories are rounded to a whole number, macros to 2 decimals.
pub fn daily_targets_for(profile: &ClientProfile) -> Result<DailyTargets> {
    let age = profile.age.ok_or_else(|| {
        PlanError::InvalidInput(format!("client {} has no age on record", profile.id))
    })?;
    if profile.weight <= 0.0 || profile.height <= 0.0 {
        return Err(PlanError::InvalidInput(format!(
            "client {} needs a positive height and weight",
            profile.id
        )));
    }

    let maintenance = basal_metabolic_rate(profile, age) * profile.activity_level.multiplier();
    let calories = maintenance + profile.goal.calorie_offset();

    let protein = profile.weight * profile.protein_multiplier;
    let fat = calories * FAT_CALORIE_SHARE / KCAL_PER_G_FAT;
    let carbs = (calories - (protein * KCAL_PER_G_PROTEIN + fat * KCAL_PER_G_FAT)) / KCAL_PER_G_CARBS;
    let fiber = calories * FIBER_PER_1000_KCAL / 1000.0;

    let targets = DailyTargets {
        calories: calories.round(),
        protein: round2(protein),
        carbs: round2(carbs),
        fat: round2(fat),
        fiber: Some(round2(fiber)),
    };

    if !targets.is_valid() {
        return Err(PlanError::InvalidInput(format!(
            "client {} yields non-positive daily targets: {:?}",
            profile.id, targets
        )));
    }

    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, Goal};
    use assert_float_eq::*;

    fn profile() -> ClientProfile {
        ClientProfile {
            id: 1,
            name: "test".to_string(),
            age: Some(25),
            gender: Gender::Male,
            height: 175.0,
            weight: 70.0,
            activity_level: ActivityLevel::LightlyActive,
            goal: Goal::MaintainWeight,
            protein_multiplier: 1.8,
        }
    }

    #[test]
    fn test_bmr_male_and_female() {
        let mut p = profile();
        // 700 + 1093.75 - 125 + 5
        assert_float_absolute_eq!(basal_metabolic_rate(&p, 25), 1673.75, 1e-9);
        p.gender = Gender::Female;
        assert_float_absolute_eq!(basal_metabolic_rate(&p, 25), 1507.75, 1e-9);
    }

    #[test]
    fn test_daily_targets_maintain() {
        let targets = daily_targets_for(&profile()).unwrap();
        // 1673.75 * 1.375 = 2301.40625
        assert_eq!(targets.calories, 2301.0);
        assert_float_absolute_eq!(targets.protein, 126.0, 1e-9);
        assert_float_absolute_eq!(targets.fat, 63.93, 1e-9);
        assert_float_absolute_eq!(targets.carbs, 305.51, 1e-9);
        assert_float_absolute_eq!(targets.fiber.unwrap(), 32.22, 1e-9);
    }

    #[test]
    fn test_goal_offsets() {
        let mut p = profile();
        p.goal = Goal::LoseWeight;
        assert_eq!(daily_targets_for(&p).unwrap().calories, 1801.0);
        p.goal = Goal::GainMuscle;
        assert_eq!(daily_targets_for(&p).unwrap().calories, 2801.0);
    }

    #[test]
    fn test_missing_age_rejected() {
        let mut p = profile();
        p.age = None;
        assert!(matches!(
            daily_targets_for(&p),
            Err(PlanError::InvalidInput(_))
        ));
    }
}
