//! User profile: constraints and goals supplied per call, never mutated.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::recipe::DietaryPreference;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    WeightLoss,
    MuscleGain,
    Maintenance,
    Endurance,
    Strength,
    Flexibility,
    GeneralFitness,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    #[serde(default)]
    pub dietary_preferences: Vec<DietaryPreference>,
    #[serde(default)]
    pub fitness_goals: Vec<FitnessGoal>,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub pantry_items: Vec<String>,
    #[serde(default)]
    pub available_equipment: Vec<String>,
    #[serde(default)]
    pub daily_calorie_target: Option<u32>,
    #[serde(default = "default_meals_per_day")]
    pub meals_per_day: u32,
}

fn default_meals_per_day() -> u32 {
    3
}

impl UserProfile {
    /// The explicit target, or a Mifflin-St Jeor estimate scaled for a
    /// moderate activity level and adjusted for weight-loss/muscle-gain
    /// goals.
    pub fn calorie_target(&self) -> u32 {
        if let Some(target) = self.daily_calorie_target {
            return target;
        }
        let bmr = 10.0 * self.weight_kg + 6.25 * self.height_cm - 5.0 * f64::from(self.age);
        let mut target = bmr * 1.55;
        if self.fitness_goals.contains(&FitnessGoal::WeightLoss) {
            target *= 0.85;
        } else if self.fitness_goals.contains(&FitnessGoal::MuscleGain) {
            target *= 1.15;
        }
        target.max(0.0) as u32
    }

    /// Contract check for the numeric fields every planner relies on.
    pub fn validate(&self) -> Result<()> {
        if self.age == 0 {
            return Err(Error::InvalidProfile("age must be positive".to_string()));
        }
        if !(self.weight_kg > 0.0) {
            return Err(Error::InvalidProfile(
                "weight_kg must be positive".to_string(),
            ));
        }
        if !(self.height_cm > 0.0) {
            return Err(Error::InvalidProfile(
                "height_cm must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
