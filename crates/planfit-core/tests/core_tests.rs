use std::fs;
use tempfile::TempDir;

use planfit_core::catalog::load_recipes;
use planfit_core::profile::{FitnessGoal, UserProfile};
use planfit_core::recipe::{DietaryPreference, MealType};
use planfit_core::sample::{sample_recipes, sample_workouts};
use planfit_core::workout::WorkoutType;

fn base_profile() -> UserProfile {
    UserProfile {
        name: "Alex".to_string(),
        age: 30,
        weight_kg: 70.0,
        height_cm: 175.0,
        dietary_preferences: vec![],
        fitness_goals: vec![],
        allergies: vec![],
        pantry_items: vec![],
        available_equipment: vec![],
        daily_calorie_target: None,
        meals_per_day: 3,
    }
}

#[test]
fn calorie_target_uses_explicit_value() {
    let mut profile = base_profile();
    profile.daily_calorie_target = Some(1800);
    assert_eq!(profile.calorie_target(), 1800);
}

#[test]
fn calorie_target_estimates_from_bmr() {
    let profile = base_profile();
    // Mifflin-St Jeor: 10*70 + 6.25*175 - 5*30 = 1643.75; *1.55 = 2547.8
    assert_eq!(profile.calorie_target(), 2547);

    let mut cutting = base_profile();
    cutting.fitness_goals = vec![FitnessGoal::WeightLoss];
    assert!(cutting.calorie_target() < profile.calorie_target());

    let mut bulking = base_profile();
    bulking.fitness_goals = vec![FitnessGoal::MuscleGain];
    assert!(bulking.calorie_target() > profile.calorie_target());
}

#[test]
fn profile_validation_rejects_zero_fields() {
    let mut profile = base_profile();
    profile.age = 0;
    assert!(profile.validate().is_err());

    let mut profile = base_profile();
    profile.weight_kg = 0.0;
    assert!(profile.validate().is_err());

    assert!(base_profile().validate().is_ok());
}

#[test]
fn dietary_acceptance_is_asymmetric() {
    use DietaryPreference::{Pescatarian, Vegan, Vegetarian};

    // A vegan-only item satisfies a vegetarian request...
    assert!(Vegetarian.accepts(&[Vegan]));
    // ...but a vegetarian-only item does not satisfy a vegan request.
    assert!(!Vegan.accepts(&[Vegetarian]));

    assert!(Pescatarian.accepts(&[Vegan]));
    assert!(Pescatarian.accepts(&[Vegetarian]));
    assert!(!Vegetarian.accepts(&[Pescatarian]));

    // Exact-match preferences.
    assert!(DietaryPreference::Keto.accepts(&[DietaryPreference::Keto]));
    assert!(!DietaryPreference::Keto.accepts(&[Vegan]));
}

#[test]
fn recipe_ingredient_matching_is_case_folded_substring() {
    let recipes = sample_recipes();
    let trail_mix = recipes.iter().find(|r| r.id == "r_trail_mix").expect("sample");
    assert!(trail_mix.contains_ingredient("nuts"));
    assert!(trail_mix.contains_ingredient("NUTS"));
    assert!(!trail_mix.contains_ingredient("shellfish"));
}

#[test]
fn searchable_text_includes_key_fields() {
    let recipes = sample_recipes();
    let oatmeal = recipes.iter().find(|r| r.id == "r_oatmeal").expect("sample");
    let text = oatmeal.searchable_text();
    assert!(text.contains("Berry Oatmeal"));
    assert!(text.contains("rolled oats"));
    assert!(text.contains("vegan"));
    assert!(text.contains("breakfast"));
}

#[test]
fn workout_duration_and_equipment() {
    let workouts = sample_workouts();
    let strength = workouts
        .iter()
        .find(|w| w.id == "w_full_body_strength")
        .expect("sample");
    assert_eq!(strength.total_duration_minutes(), 50); // 40 + 5 + 5
    assert_eq!(strength.all_equipment_needed(), vec!["dumbbells".to_string()]);
    assert!(strength.doable_with_equipment(&["dumbbells".to_string()]));
    assert!(!strength.doable_with_equipment(&["yoga mat".to_string()]));
}

#[test]
fn calorie_burn_scales_with_weight() {
    let workouts = sample_workouts();
    let run = workouts.iter().find(|w| w.id == "w_tempo_run").expect("sample");
    let light = run.estimate_calories_burned(55.0);
    let heavy = run.estimate_calories_burned(90.0);
    assert!(heavy > light);
    assert!(light > 0);
}

#[test]
fn sample_catalog_covers_all_slots() {
    let recipes = sample_recipes();
    for meal_type in [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ] {
        assert!(recipes.iter().any(|r| r.meal_type == meal_type));
    }
    let workouts = sample_workouts();
    for workout_type in [
        WorkoutType::Strength,
        WorkoutType::Cardio,
        WorkoutType::Hiit,
        WorkoutType::Flexibility,
    ] {
        assert!(workouts.iter().any(|w| w.workout_type == workout_type));
    }
}

#[test]
fn unknown_type_strings_are_rejected() {
    assert!("brunch".parse::<MealType>().is_err());
    assert!("dinner".parse::<MealType>().is_ok());
    assert!("swimming".parse::<WorkoutType>().is_err());
    assert!("hiit".parse::<WorkoutType>().is_ok());
}

#[test]
fn load_recipes_from_json_dir() {
    let tmp = TempDir::new().expect("tempdir");
    let dir = tmp.path();

    let recipes = sample_recipes();
    // One file with an array, one with a single item.
    fs::write(
        dir.join("a_batch.json"),
        serde_json::to_string(&recipes[..2]).expect("serialize"),
    )
    .expect("write");
    fs::write(
        dir.join("b_single.json"),
        serde_json::to_string(&recipes[2]).expect("serialize"),
    )
    .expect("write");

    let loaded = load_recipes(dir).expect("load");
    assert_eq!(loaded.len(), 3);
    assert_eq!(loaded[0].id, recipes[0].id);
    assert_eq!(loaded[2].id, recipes[2].id);
}
