//! Workout catalog items: exercises, equipment, and muscle targeting.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::recipe::Difficulty;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Biceps,
    Triceps,
    Core,
    Quadriceps,
    Hamstrings,
    Glutes,
    Calves,
    FullBody,
    Cardio,
}

impl MuscleGroup {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Chest => "chest",
            Self::Back => "back",
            Self::Shoulders => "shoulders",
            Self::Biceps => "biceps",
            Self::Triceps => "triceps",
            Self::Core => "core",
            Self::Quadriceps => "quadriceps",
            Self::Hamstrings => "hamstrings",
            Self::Glutes => "glutes",
            Self::Calves => "calves",
            Self::FullBody => "full_body",
            Self::Cardio => "cardio",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    Strength,
    Cardio,
    Flexibility,
    Hiit,
    Balance,
    Mixed,
}

impl WorkoutType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Cardio => "cardio",
            Self::Flexibility => "flexibility",
            Self::Hiit => "hiit",
            Self::Balance => "balance",
            Self::Mixed => "mixed",
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strength" => Ok(Self::Strength),
            "cardio" => Ok(Self::Cardio),
            "flexibility" => Ok(Self::Flexibility),
            "hiit" => Ok(Self::Hiit),
            "balance" => Ok(Self::Balance),
            "mixed" => Ok(Self::Mixed),
            other => Err(Error::UnknownItemType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseType {
    Strength,
    Cardio,
    Flexibility,
    Balance,
    Hiit,
    Compound,
    Isolation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Equipment {
    pub name: String,
    /// free_weights, machines, bodyweight, cardio, ...
    pub category: String,
    #[serde(default = "default_true")]
    pub is_required: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub description: String,
    pub muscle_groups: Vec<MuscleGroup>,
    pub exercise_type: ExerciseType,
    #[serde(default)]
    pub equipment_needed: Vec<Equipment>,
    #[serde(default = "default_sets")]
    pub sets: u32,
    #[serde(default)]
    pub reps: Option<u32>,
    #[serde(default)]
    pub duration_seconds: Option<u32>,
    #[serde(default = "default_rest")]
    pub rest_seconds: u32,
    #[serde(default = "default_exercise_difficulty")]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default = "default_calories_per_minute")]
    pub calories_per_minute: f64,
}

fn default_sets() -> u32 {
    3
}

fn default_rest() -> u32 {
    60
}

fn default_exercise_difficulty() -> Difficulty {
    Difficulty::Intermediate
}

fn default_calories_per_minute() -> f64 {
    5.0
}

impl Exercise {
    pub fn equipment_names(&self) -> Vec<String> {
        self.equipment_needed
            .iter()
            .map(|eq| eq.name.to_lowercase())
            .collect()
    }

    /// True when every required piece of equipment is in `available`.
    pub fn doable_with(&self, available: &[String]) -> bool {
        let available: Vec<String> = available.iter().map(|e| e.to_lowercase()).collect();
        self.equipment_needed
            .iter()
            .filter(|eq| eq.is_required)
            .all(|eq| available.contains(&eq.name.to_lowercase()))
    }

    /// Minutes of work this exercise represents, for calorie estimates.
    fn active_minutes(&self) -> f64 {
        if let Some(secs) = self.duration_seconds {
            return f64::from(secs) / 60.0;
        }
        match self.reps {
            // ~3 seconds per rep
            Some(reps) => f64::from(self.sets * reps) * 3.0 / 60.0,
            None => 5.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    pub id: String,
    pub name: String,
    pub description: String,
    pub exercises: Vec<Exercise>,
    pub workout_type: WorkoutType,
    #[serde(default = "default_exercise_difficulty")]
    pub difficulty: Difficulty,
    #[serde(default = "default_duration")]
    pub duration_minutes: u32,
    #[serde(default)]
    pub target_muscle_groups: Vec<MuscleGroup>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_warmup")]
    pub warmup_minutes: u32,
    #[serde(default = "default_warmup")]
    pub cooldown_minutes: u32,
}

fn default_duration() -> u32 {
    45
}

fn default_warmup() -> u32 {
    5
}

impl Workout {
    /// Total duration including warmup and cooldown.
    pub fn total_duration_minutes(&self) -> u32 {
        self.duration_minutes + self.warmup_minutes + self.cooldown_minutes
    }

    /// Distinct lowercased equipment names across all exercises.
    pub fn all_equipment_needed(&self) -> Vec<String> {
        let set: BTreeSet<String> = self
            .exercises
            .iter()
            .flat_map(Exercise::equipment_names)
            .collect();
        set.into_iter().collect()
    }

    pub fn doable_with_equipment(&self, available: &[String]) -> bool {
        self.exercises.iter().all(|ex| ex.doable_with(available))
    }

    /// Rough calorie estimate scaled by body weight against a 70 kg reference.
    pub fn estimate_calories_burned(&self, weight_kg: f64) -> u32 {
        let base: f64 = self
            .exercises
            .iter()
            .map(|ex| ex.calories_per_minute * ex.active_minutes())
            .sum();
        let weight_factor = weight_kg / 70.0;
        (base * weight_factor).round().max(0.0) as u32
    }

    /// Text blob fed to the embedder for semantic matching.
    pub fn searchable_text(&self) -> String {
        let muscles = self
            .target_muscle_groups
            .iter()
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let equipment = {
            let names = self.all_equipment_needed().join(", ");
            if names.is_empty() {
                "no equipment".to_string()
            } else {
                names
            }
        };
        let exercises = self
            .exercises
            .iter()
            .map(|ex| ex.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "{}. {}. Type: {}. Targets: {}. Equipment: {}. Exercises: {}. Duration: {} minutes.",
            self.name,
            self.description,
            self.workout_type,
            muscles,
            equipment,
            exercises,
            self.total_duration_minutes()
        )
    }
}
