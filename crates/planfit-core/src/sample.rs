//! Built-in sample catalog used by the binaries and as a default data set.

use crate::recipe::{Difficulty, DietaryPreference, Ingredient, MealType, Nutrition, Recipe};
use crate::workout::{
    Equipment, Exercise, ExerciseType, MuscleGroup, Workout, WorkoutType,
};

fn ing(name: &str, quantity: f64, unit: &str) -> Ingredient {
    Ingredient {
        name: name.to_string(),
        quantity,
        unit: unit.to_string(),
        optional: false,
    }
}

#[allow(clippy::too_many_arguments)]
fn recipe(
    id: &str,
    name: &str,
    description: &str,
    meal_type: MealType,
    calories: u32,
    protein_g: f64,
    ingredients: Vec<Ingredient>,
    dietary_info: Vec<DietaryPreference>,
    tags: &[&str],
) -> Recipe {
    Recipe {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        ingredients,
        instructions: vec!["Combine ingredients.".to_string(), "Serve.".to_string()],
        nutrition: Nutrition {
            calories,
            protein_g,
            carbs_g: 30.0,
            fat_g: 12.0,
            fiber_g: 4.0,
            sugar_g: 6.0,
            sodium_mg: 300.0,
        },
        prep_time_minutes: 10,
        cook_time_minutes: 15,
        servings: 1,
        meal_type,
        tags: tags.iter().map(|t| (*t).to_string()).collect(),
        dietary_info,
        difficulty: Difficulty::Beginner,
    }
}

pub fn sample_recipes() -> Vec<Recipe> {
    use DietaryPreference::{DairyFree, GlutenFree, HighProtein, Vegan, Vegetarian};
    vec![
        recipe(
            "r_oatmeal",
            "Berry Oatmeal",
            "Rolled oats simmered with oat milk, topped with mixed berries",
            MealType::Breakfast,
            320,
            9.0,
            vec![ing("rolled oats", 80.0, "g"), ing("oat milk", 250.0, "ml"), ing("blueberries", 60.0, "g")],
            vec![Vegan, Vegetarian, DairyFree],
            &["warm", "quick", "fiber"],
        ),
        recipe(
            "r_tofu_scramble",
            "Tofu Scramble",
            "Turmeric tofu scramble with spinach and cherry tomatoes",
            MealType::Breakfast,
            290,
            18.0,
            vec![ing("firm tofu", 150.0, "g"), ing("spinach", 50.0, "g"), ing("cherry tomatoes", 80.0, "g")],
            vec![Vegan, Vegetarian, GlutenFree, DairyFree],
            &["savory", "high-protein"],
        ),
        recipe(
            "r_yogurt_bowl",
            "Greek Yogurt Bowl",
            "Greek yogurt with honey and granola",
            MealType::Breakfast,
            350,
            20.0,
            vec![ing("greek yogurt", 200.0, "g"), ing("honey", 15.0, "g"), ing("granola", 40.0, "g")],
            vec![Vegetarian, HighProtein],
            &["sweet", "quick"],
        ),
        recipe(
            "r_almond_porridge",
            "Almond Butter Porridge",
            "Creamy porridge swirled with almond butter and banana",
            MealType::Breakfast,
            410,
            12.0,
            vec![ing("rolled oats", 80.0, "g"), ing("almond butter", 30.0, "g"), ing("banana", 1.0, "piece")],
            vec![Vegan, Vegetarian, DairyFree],
            &["nutty", "filling"],
        ),
        recipe(
            "r_quinoa_salad",
            "Quinoa Chickpea Salad",
            "Lemony quinoa with chickpeas, cucumber and parsley",
            MealType::Lunch,
            480,
            16.0,
            vec![ing("quinoa", 90.0, "g"), ing("chickpeas", 120.0, "g"), ing("cucumber", 100.0, "g"), ing("parsley", 10.0, "g")],
            vec![Vegan, Vegetarian, GlutenFree, DairyFree],
            &["fresh", "meal-prep"],
        ),
        recipe(
            "r_chicken_wrap",
            "Grilled Chicken Wrap",
            "Whole-wheat wrap with grilled chicken and crunchy veg",
            MealType::Lunch,
            550,
            38.0,
            vec![ing("chicken breast", 150.0, "g"), ing("whole-wheat tortilla", 1.0, "piece"), ing("lettuce", 40.0, "g")],
            vec![HighProtein],
            &["portable", "high-protein"],
        ),
        recipe(
            "r_salmon_bowl",
            "Salmon Rice Bowl",
            "Seared salmon over rice with avocado and sesame",
            MealType::Dinner,
            640,
            34.0,
            vec![ing("salmon fillet", 160.0, "g"), ing("white rice", 120.0, "g"), ing("avocado", 0.5, "piece"), ing("sesame seeds", 5.0, "g")],
            vec![DietaryPreference::Pescatarian, GlutenFree, DairyFree],
            &["omega-3"],
        ),
        recipe(
            "r_lentil_curry",
            "Red Lentil Curry",
            "Coconut red lentil curry with rice",
            MealType::Dinner,
            580,
            21.0,
            vec![ing("red lentils", 100.0, "g"), ing("coconut milk", 150.0, "ml"), ing("white rice", 100.0, "g")],
            vec![Vegan, Vegetarian, GlutenFree, DairyFree],
            &["warming", "one-pot"],
        ),
        recipe(
            "r_beef_stirfry",
            "Beef Broccoli Stir-fry",
            "Quick beef and broccoli stir-fry with soy and garlic",
            MealType::Dinner,
            610,
            36.0,
            vec![ing("beef strips", 160.0, "g"), ing("broccoli", 150.0, "g"), ing("soy sauce", 20.0, "ml")],
            vec![DairyFree, HighProtein],
            &["quick", "wok"],
        ),
        recipe(
            "r_trail_mix",
            "Trail Mix",
            "Mixed nuts, seeds and dried fruit",
            MealType::Snack,
            210,
            6.0,
            vec![ing("mixed nuts", 30.0, "g"), ing("pumpkin seeds", 15.0, "g"), ing("raisins", 20.0, "g")],
            vec![Vegan, Vegetarian, GlutenFree, DairyFree],
            &["crunchy", "portable"],
        ),
        recipe(
            "r_apple_slices",
            "Apple with Cinnamon",
            "Crisp apple slices dusted with cinnamon",
            MealType::Snack,
            120,
            0.5,
            vec![ing("apple", 1.0, "piece"), ing("cinnamon", 2.0, "g")],
            vec![Vegan, Vegetarian, GlutenFree, DairyFree],
            &["light", "sweet"],
        ),
        recipe(
            "r_cottage_toast",
            "Cottage Cheese Toast",
            "Rye toast with cottage cheese and chives",
            MealType::Snack,
            190,
            14.0,
            vec![ing("rye bread", 1.0, "slice"), ing("cottage cheese", 80.0, "g"), ing("chives", 5.0, "g")],
            vec![Vegetarian, HighProtein],
            &["savory"],
        ),
    ]
}

fn bodyweight() -> Vec<Equipment> {
    vec![Equipment {
        name: "bodyweight".to_string(),
        category: "bodyweight".to_string(),
        is_required: true,
    }]
}

fn gear(name: &str, category: &str) -> Vec<Equipment> {
    vec![Equipment {
        name: name.to_string(),
        category: category.to_string(),
        is_required: true,
    }]
}

#[allow(clippy::too_many_arguments)]
fn exercise(
    id: &str,
    name: &str,
    muscle_groups: Vec<MuscleGroup>,
    exercise_type: ExerciseType,
    equipment_needed: Vec<Equipment>,
    reps: Option<u32>,
    duration_seconds: Option<u32>,
    calories_per_minute: f64,
) -> Exercise {
    Exercise {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{name} with controlled tempo"),
        muscle_groups,
        exercise_type,
        equipment_needed,
        sets: 3,
        reps,
        duration_seconds,
        rest_seconds: 60,
        difficulty: Difficulty::Intermediate,
        instructions: Vec::new(),
        calories_per_minute,
    }
}

#[allow(clippy::too_many_arguments)]
fn workout(
    id: &str,
    name: &str,
    description: &str,
    workout_type: WorkoutType,
    difficulty: Difficulty,
    duration_minutes: u32,
    target_muscle_groups: Vec<MuscleGroup>,
    exercises: Vec<Exercise>,
) -> Workout {
    Workout {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        exercises,
        workout_type,
        difficulty,
        duration_minutes,
        target_muscle_groups,
        tags: Vec::new(),
        warmup_minutes: 5,
        cooldown_minutes: 5,
    }
}

pub fn sample_workouts() -> Vec<Workout> {
    use MuscleGroup::{Back, Cardio, Chest, Core, FullBody, Hamstrings, Quadriceps};
    vec![
        workout(
            "w_full_body_strength",
            "Full Body Strength",
            "Compound dumbbell session hitting every major group",
            WorkoutType::Strength,
            Difficulty::Intermediate,
            40,
            vec![FullBody, Chest, Back],
            vec![
                exercise("e_goblet_squat", "Goblet Squat", vec![Quadriceps], ExerciseType::Compound, gear("dumbbells", "free_weights"), Some(10), None, 6.0),
                exercise("e_db_row", "Dumbbell Row", vec![Back], ExerciseType::Compound, gear("dumbbells", "free_weights"), Some(12), None, 5.0),
                exercise("e_db_press", "Dumbbell Press", vec![Chest], ExerciseType::Compound, gear("dumbbells", "free_weights"), Some(10), None, 5.0),
            ],
        ),
        workout(
            "w_bodyweight_basics",
            "Bodyweight Basics",
            "No-equipment strength circuit for any space",
            WorkoutType::Strength,
            Difficulty::Beginner,
            30,
            vec![FullBody, Core],
            vec![
                exercise("e_pushup", "Push-up", vec![Chest, Core], ExerciseType::Compound, bodyweight(), Some(12), None, 6.0),
                exercise("e_air_squat", "Air Squat", vec![Quadriceps], ExerciseType::Compound, bodyweight(), Some(15), None, 6.0),
                exercise("e_plank", "Plank", vec![Core], ExerciseType::Isolation, bodyweight(), None, Some(60), 4.0),
            ],
        ),
        workout(
            "w_tempo_run",
            "Tempo Run",
            "Steady-state run at a comfortably hard pace",
            WorkoutType::Cardio,
            Difficulty::Intermediate,
            35,
            vec![Cardio, FullBody],
            vec![exercise("e_run", "Tempo Run", vec![Cardio], ExerciseType::Cardio, bodyweight(), None, Some(2100), 11.0)],
        ),
        workout(
            "w_bike_intervals",
            "Bike Intervals",
            "Alternating hard and easy intervals on a stationary bike",
            WorkoutType::Cardio,
            Difficulty::Beginner,
            30,
            vec![Cardio, Quadriceps],
            vec![exercise("e_bike", "Bike Intervals", vec![Cardio, Quadriceps], ExerciseType::Cardio, gear("stationary bike", "cardio"), None, Some(1800), 9.0)],
        ),
        workout(
            "w_hiit_blast",
            "HIIT Blast",
            "Short all-out circuit of burpees, mountain climbers and jumps",
            WorkoutType::Hiit,
            Difficulty::Advanced,
            20,
            vec![FullBody, Cardio],
            vec![
                exercise("e_burpee", "Burpee", vec![FullBody, Cardio], ExerciseType::Hiit, bodyweight(), Some(10), None, 12.0),
                exercise("e_mountain_climber", "Mountain Climber", vec![Core, Cardio], ExerciseType::Hiit, bodyweight(), None, Some(40), 10.0),
            ],
        ),
        workout(
            "w_morning_flow",
            "Morning Flow",
            "Gentle yoga flow to open hips and shoulders",
            WorkoutType::Flexibility,
            Difficulty::Beginner,
            20,
            vec![FullBody],
            vec![exercise("e_sun_salutation", "Sun Salutation", vec![FullBody], ExerciseType::Flexibility, gear("yoga mat", "bodyweight"), None, Some(1200), 3.0)],
        ),
        workout(
            "w_posterior_chain",
            "Posterior Chain Builder",
            "Barbell hinge work for hamstrings and back",
            WorkoutType::Strength,
            Difficulty::Advanced,
            45,
            vec![Hamstrings, Back],
            vec![
                exercise("e_deadlift", "Deadlift", vec![Hamstrings, Back], ExerciseType::Compound, gear("barbell", "free_weights"), Some(5), None, 7.0),
                exercise("e_hip_hinge", "Romanian Deadlift", vec![Hamstrings], ExerciseType::Compound, gear("barbell", "free_weights"), Some(8), None, 6.0),
            ],
        ),
        workout(
            "w_stretch_reset",
            "Evening Stretch Reset",
            "Long-hold stretches to wind down",
            WorkoutType::Flexibility,
            Difficulty::Beginner,
            15,
            vec![FullBody, Hamstrings],
            vec![exercise("e_forward_fold", "Forward Fold", vec![Hamstrings], ExerciseType::Flexibility, bodyweight(), None, Some(900), 2.5)],
        ),
    ]
}
