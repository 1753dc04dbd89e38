//! Daily and weekly plan containers returned by the planners.
//!
//! Plans are plain data: the engine builds them and hands them back, callers
//! persist them. A weekly plan always carries exactly 7 day slots.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::recipe::Recipe;
use crate::workout::Workout;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyMealPlan {
    pub date: NaiveDate,
    pub breakfast: Option<Recipe>,
    pub lunch: Option<Recipe>,
    pub dinner: Option<Recipe>,
    #[serde(default)]
    pub snacks: Vec<Recipe>,
    #[serde(default)]
    pub notes: String,
}

impl DailyMealPlan {
    pub fn total_calories(&self) -> u32 {
        self.all_recipes().iter().map(|r| r.nutrition.calories).sum()
    }

    pub fn total_protein(&self) -> f64 {
        self.all_recipes().iter().map(|r| r.nutrition.protein_g).sum()
    }

    pub fn all_recipes(&self) -> Vec<&Recipe> {
        let mut out = Vec::new();
        if let Some(r) = &self.breakfast {
            out.push(r);
        }
        if let Some(r) = &self.lunch {
            out.push(r);
        }
        if let Some(r) = &self.dinner {
            out.push(r);
        }
        out.extend(self.snacks.iter());
        out
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPlan {
    pub id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub daily_plans: Vec<DailyMealPlan>,
    pub target_calories_per_day: u32,
    #[serde(default)]
    pub notes: String,
}

impl MealPlan {
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    pub fn average_daily_calories(&self) -> f64 {
        if self.daily_plans.is_empty() {
            return 0.0;
        }
        let total: u32 = self.daily_plans.iter().map(DailyMealPlan::total_calories).sum();
        f64::from(total) / self.daily_plans.len() as f64
    }

    /// Unique recipes across the plan, in first-use order.
    pub fn all_recipes(&self) -> Vec<&Recipe> {
        let mut seen = std::collections::HashSet::new();
        let mut out = Vec::new();
        for day in &self.daily_plans {
            for recipe in day.all_recipes() {
                if seen.insert(recipe.id.clone()) {
                    out.push(recipe);
                }
            }
        }
        out
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyWorkoutPlan {
    pub date: NaiveDate,
    #[serde(default)]
    pub workouts: Vec<Workout>,
    #[serde(default)]
    pub is_rest_day: bool,
    #[serde(default)]
    pub notes: String,
}

impl DailyWorkoutPlan {
    pub fn total_duration_minutes(&self) -> u32 {
        self.workouts.iter().map(Workout::total_duration_minutes).sum()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub daily_plans: Vec<DailyWorkoutPlan>,
    pub workout_days_per_week: u32,
    #[serde(default)]
    pub notes: String,
}

impl WorkoutPlan {
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    pub fn total_workout_days(&self) -> usize {
        self.daily_plans.iter().filter(|d| !d.is_rest_day).count()
    }

    pub fn total_rest_days(&self) -> usize {
        self.daily_plans.iter().filter(|d| d.is_rest_day).count()
    }

    /// Unique workouts across the plan, in first-use order.
    pub fn all_workouts(&self) -> Vec<&Workout> {
        let mut seen = std::collections::HashSet::new();
        let mut out = Vec::new();
        for day in &self.daily_plans {
            for workout in &day.workouts {
                if seen.insert(workout.id.clone()) {
                    out.push(workout);
                }
            }
        }
        out
    }
}
