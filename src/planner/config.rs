use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::planner::constants::*;

/// Runtime-configurable planner settings.
///
/// Every field falls back to its constant when absent from a config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub tolerance: f64,
    pub weight_min: f64,
    pub weight_max: f64,
    pub default_fiber: f64,
    pub min_remaining_foods: usize,
    pub knn_neighbours: usize,
    pub max_recommendations: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            tolerance: MACRO_TOLERANCE,
            weight_min: OBJECTIVE_WEIGHT_MIN,
            weight_max: OBJECTIVE_WEIGHT_MAX,
            default_fiber: DEFAULT_DAILY_FIBER,
            min_remaining_foods: MIN_REMAINING_FOODS,
            knn_neighbours: KNN_NEIGHBOURS,
            max_recommendations: MAX_RECOMMENDATIONS,
        }
    }
}

impl PlannerConfig {
    /// Load a JSON config file and validate it.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: PlannerConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.tolerance) {
            return Err(PlanError::InvalidInput(format!(
                "tolerance must be in [0, 1), got {}",
                self.tolerance
            )));
        }
        if !(self.weight_min > 0.0 && self.weight_min <= self.weight_max) {
            return Err(PlanError::InvalidInput(format!(
                "objective weight range must satisfy 0 < min <= max, got {}..{}",
                self.weight_min, self.weight_max
            )));
        }
        if self.default_fiber < 0.0 {
            return Err(PlanError::InvalidInput(
                "default fiber must be non-negative".to_string(),
            ));
        }
        if self.knn_neighbours == 0 {
            return Err(PlanError::InvalidInput(
                "knn_neighbours must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"tolerance": 0.15, "min_remaining_foods": 5}"#)
            .unwrap();

        let config = PlannerConfig::load(file.path()).unwrap();
        assert_eq!(config.tolerance, 0.15);
        assert_eq!(config.min_remaining_foods, 5);
        assert_eq!(config.weight_min, OBJECTIVE_WEIGHT_MIN);
        assert_eq!(config.default_fiber, DEFAULT_DAILY_FIBER);
    }

    #[test]
    fn test_validate_rejects_bad_ranges() {
        let config = PlannerConfig {
            tolerance: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = PlannerConfig {
            weight_min: 2.0,
            weight_max: 1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        assert!(PlannerConfig::default().validate().is_ok());
    }
}
