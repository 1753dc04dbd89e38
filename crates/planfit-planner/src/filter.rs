//! Constraint filtering as an ordered pipeline of named stages.
//!
//! Stage order: type, diet, allergy, equipment, duration, difficulty. When
//! the full pipeline leaves nothing, the type stage alone is re-run over the
//! whole catalog, so the result is empty only when the catalog has no items
//! of the requested type at all.

use planfit_core::profile::UserProfile;
use planfit_core::recipe::{Difficulty, MealType, Recipe};
use planfit_core::workout::{Workout, WorkoutType};

pub struct Stage<'a, T> {
    pub name: &'static str,
    pub keep: Box<dyn Fn(&T) -> bool + 'a>,
}

impl<'a, T> Stage<'a, T> {
    pub fn new(name: &'static str, keep: impl Fn(&T) -> bool + 'a) -> Self {
        Self {
            name,
            keep: Box::new(keep),
        }
    }
}

/// Run the stages in order, returning indices into `items` of the survivors.
/// Falls back to the first stage alone when the pipeline empties out.
pub fn run_pipeline<T>(items: &[T], stages: &[Stage<'_, T>]) -> Vec<usize> {
    let mut kept: Vec<usize> = (0..items.len()).collect();
    for stage in stages {
        let before = kept.len();
        kept.retain(|&i| (stage.keep)(&items[i]));
        tracing::debug!(stage = stage.name, before, after = kept.len(), "filter stage");
    }
    if kept.is_empty() {
        if let Some(first) = stages.first() {
            kept = (0..items.len()).filter(|&i| (first.keep)(&items[i])).collect();
            tracing::debug!(
                stage = first.name,
                after = kept.len(),
                "pipeline empty, fell back to first stage"
            );
        }
    }
    kept
}

/// Ceiling used by the difficulty stage: beginner when the user only wants
/// general fitness, intermediate otherwise.
pub fn difficulty_ceiling(profile: &UserProfile) -> Difficulty {
    if profile
        .fitness_goals
        .contains(&planfit_core::profile::FitnessGoal::GeneralFitness)
    {
        Difficulty::Beginner
    } else {
        Difficulty::Intermediate
    }
}

pub fn recipe_stages<'a>(
    profile: &'a UserProfile,
    meal_type: MealType,
    max_total_minutes: Option<u32>,
) -> Vec<Stage<'a, Recipe>> {
    let mut stages = vec![
        Stage::new("type", move |r: &Recipe| r.meal_type == meal_type),
        Stage::new("diet", move |r: &Recipe| {
            profile
                .dietary_preferences
                .iter()
                .all(|p| p.accepts(&r.dietary_info))
        }),
        Stage::new("allergy", move |r: &Recipe| {
            !profile.allergies.iter().any(|a| r.contains_ingredient(a))
        }),
    ];
    if let Some(max) = max_total_minutes {
        stages.push(Stage::new("duration", move |r: &Recipe| {
            r.total_time_minutes() <= max
        }));
    }
    stages
}

pub fn workout_stages<'a>(
    profile: &'a UserProfile,
    workout_type: WorkoutType,
    max_duration_minutes: u32,
) -> Vec<Stage<'a, Workout>> {
    let ceiling = difficulty_ceiling(profile);
    // Bodyweight moves never require owned equipment.
    let mut available: Vec<String> = profile.available_equipment.clone();
    available.push("bodyweight".to_string());
    available.push("none".to_string());
    vec![
        Stage::new("type", move |w: &Workout| w.workout_type == workout_type),
        Stage::new("equipment", move |w: &Workout| {
            w.doable_with_equipment(&available)
        }),
        Stage::new("duration", move |w: &Workout| {
            w.total_duration_minutes() <= max_duration_minutes
        }),
        Stage::new("difficulty", move |w: &Workout| w.difficulty <= ceiling),
    ]
}
