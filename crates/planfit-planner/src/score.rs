//! Candidate scoring: a fixed blend of a domain signal and a semantic one.

use std::collections::BTreeSet;

use planfit_core::profile::FitnessGoal;
use planfit_core::recipe::Recipe;
use planfit_core::workout::{MuscleGroup, Workout, WorkoutType};

pub const DOMAIN_WEIGHT: f32 = 0.4;
pub const SEMANTIC_WEIGHT: f32 = 0.6;

/// Neutral value used when a signal has nothing to say (no query, no pantry,
/// no goals).
pub const NEUTRAL_SCORE: f32 = 0.5;

pub fn combined(domain: f32, semantic: f32) -> f32 {
    DOMAIN_WEIGHT * domain + SEMANTIC_WEIGHT * semantic
}

/// Fraction of the recipe's ingredients covered by the pantry. Coverage is a
/// case-folded substring match in either direction, so "rolled oats" in the
/// pantry covers an "oats" ingredient and vice versa.
pub fn pantry_score(recipe: &Recipe, pantry: &[String]) -> f32 {
    if pantry.is_empty() {
        return NEUTRAL_SCORE;
    }
    let ingredients = recipe.ingredient_names();
    if ingredients.is_empty() {
        return 0.0;
    }
    let pantry: Vec<String> = pantry.iter().map(|p| p.to_lowercase()).collect();
    let covered = ingredients
        .iter()
        .filter(|ing| {
            pantry
                .iter()
                .any(|p| ing.contains(p.as_str()) || p.contains(ing.as_str()))
        })
        .count();
    covered as f32 / ingredients.len() as f32
}

/// Overlap between the workout's target muscles and the muscles implied by
/// the user's goals.
pub fn muscle_score(workout: &Workout, goals: &[FitnessGoal]) -> f32 {
    let wanted = goal_muscle_groups(goals);
    if wanted.is_empty() {
        return NEUTRAL_SCORE;
    }
    let hits = workout
        .target_muscle_groups
        .iter()
        .filter(|m| wanted.contains(m))
        .count();
    hits as f32 / wanted.len().max(1) as f32
}

/// Workout types worth scheduling for a set of goals, in preference order.
pub fn goal_workout_types(goals: &[FitnessGoal]) -> Vec<WorkoutType> {
    let mut out = Vec::new();
    for goal in goals {
        let types: &[WorkoutType] = match goal {
            FitnessGoal::WeightLoss => {
                &[WorkoutType::Hiit, WorkoutType::Cardio, WorkoutType::Strength]
            }
            FitnessGoal::MuscleGain | FitnessGoal::Strength => &[WorkoutType::Strength],
            FitnessGoal::Maintenance => &[
                WorkoutType::Strength,
                WorkoutType::Cardio,
                WorkoutType::Flexibility,
            ],
            FitnessGoal::Endurance => &[WorkoutType::Cardio, WorkoutType::Hiit],
            FitnessGoal::Flexibility => &[WorkoutType::Flexibility],
            FitnessGoal::GeneralFitness => &[
                WorkoutType::Strength,
                WorkoutType::Cardio,
                WorkoutType::Hiit,
                WorkoutType::Flexibility,
            ],
        };
        for t in types {
            if !out.contains(t) {
                out.push(*t);
            }
        }
    }
    out
}

pub fn goal_muscle_groups(goals: &[FitnessGoal]) -> BTreeSet<MuscleGroup> {
    let mut out = BTreeSet::new();
    for goal in goals {
        let muscles: &[MuscleGroup] = match goal {
            FitnessGoal::WeightLoss | FitnessGoal::GeneralFitness => {
                &[MuscleGroup::FullBody, MuscleGroup::Cardio]
            }
            FitnessGoal::MuscleGain => &[
                MuscleGroup::Chest,
                MuscleGroup::Back,
                MuscleGroup::Shoulders,
                MuscleGroup::Quadriceps,
                MuscleGroup::Hamstrings,
            ],
            FitnessGoal::Maintenance | FitnessGoal::Flexibility => &[MuscleGroup::FullBody],
            FitnessGoal::Endurance => &[MuscleGroup::Cardio, MuscleGroup::FullBody],
            FitnessGoal::Strength => &[
                MuscleGroup::Chest,
                MuscleGroup::Back,
                MuscleGroup::Quadriceps,
                MuscleGroup::Core,
            ],
        };
        out.extend(muscles.iter().copied());
    }
    out
}
