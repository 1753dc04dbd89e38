use std::env;

use chrono::NaiveDate;

use planfit_core::catalog::{load_recipes, load_workouts};
use planfit_core::config::{expand_path, Config};
use planfit_core::profile::{FitnessGoal, UserProfile};
use planfit_core::sample::{sample_recipes, sample_workouts};
use planfit_embed::default_embedder;
use planfit_planner::{MealPlanner, WorkoutPlanner};
use planfit_vector::{SemanticEngine, VectorCache};

fn parse_args() -> (String, Vec<String>) {
    let mut args: Vec<String> = env::args().collect();
    let prog = args.remove(0);
    if args.is_empty() {
        eprintln!("Usage: {} <mealplan|workoutplan|cache-stats|clear-cache> [args...]", prog);
        eprintln!("  mealplan    [--profile file.json] [--date YYYY-MM-DD]");
        eprintln!("  workoutplan [--profile file.json] [--date YYYY-MM-DD] [--days N]");
        std::process::exit(1);
    }
    let cmd = args.remove(0);
    (cmd, args)
}

fn build_engine(config: &Config) -> anyhow::Result<SemanticEngine> {
    let cache_dir: String = config
        .get("cache.dir")
        .unwrap_or_else(|_| "~/.planfit/embeddings".to_string());
    let max_memory_items: usize = config.get("cache.max_memory_items").unwrap_or(1000);
    let max_disk_bytes: u64 = config
        .get("cache.max_disk_bytes")
        .unwrap_or(100 * 1024 * 1024);
    let cache = VectorCache::new(expand_path(cache_dir), max_memory_items, max_disk_bytes)?;
    Ok(SemanticEngine::new(default_embedder()?, cache))
}

fn load_profile(args: &[String]) -> anyhow::Result<UserProfile> {
    if let Some(pos) = args.iter().position(|a| a == "--profile") {
        let path = args
            .get(pos + 1)
            .ok_or_else(|| anyhow::anyhow!("--profile requires a file path"))?;
        let raw = std::fs::read_to_string(expand_path(path))?;
        return Ok(serde_json::from_str(&raw)?);
    }
    // Demo profile for running against the sample catalog.
    Ok(UserProfile {
        name: "Demo".to_string(),
        age: 30,
        weight_kg: 72.0,
        height_cm: 176.0,
        dietary_preferences: Vec::new(),
        fitness_goals: vec![FitnessGoal::GeneralFitness],
        allergies: Vec::new(),
        pantry_items: Vec::new(),
        available_equipment: vec!["dumbbells".to_string(), "yoga mat".to_string()],
        daily_calorie_target: None,
        meals_per_day: 3,
    })
}

fn parse_date(args: &[String]) -> anyhow::Result<NaiveDate> {
    if let Some(pos) = args.iter().position(|a| a == "--date") {
        let raw = args
            .get(pos + 1)
            .ok_or_else(|| anyhow::anyhow!("--date requires YYYY-MM-DD"))?;
        return Ok(raw.parse()?);
    }
    Ok(chrono::Local::now().date_naive())
}

fn parse_days(args: &[String]) -> anyhow::Result<Option<u32>> {
    if let Some(pos) = args.iter().position(|a| a == "--days") {
        let raw = args
            .get(pos + 1)
            .ok_or_else(|| anyhow::anyhow!("--days requires a number"))?;
        return Ok(Some(raw.parse()?));
    }
    Ok(None)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let config = Config::load()?;
    let (cmd, args) = parse_args();
    match cmd.as_str() {
        "mealplan" => {
            let profile = load_profile(&args)?;
            let start = parse_date(&args)?;
            let recipes = match config.get::<String>("data.recipes_dir") {
                Ok(dir) => load_recipes(&expand_path(dir))?,
                Err(_) => sample_recipes(),
            };
            let planner = MealPlanner::new(recipes, build_engine(&config)?)?;
            let plan = planner.generate_weekly_plan(&profile, start)?;
            println!("🍽️  {} ({} → {})", plan.name, plan.start_date, plan.end_date);
            println!("Target: {} kcal/day", plan.target_calories_per_day);
            for day in &plan.daily_plans {
                println!("\n{} — {} kcal, {:.0} g protein", day.date, day.total_calories(), day.total_protein());
                if let Some(r) = &day.breakfast {
                    println!("  breakfast: {} ({} kcal)", r.name, r.nutrition.calories);
                }
                if let Some(r) = &day.lunch {
                    println!("  lunch:     {} ({} kcal)", r.name, r.nutrition.calories);
                }
                if let Some(r) = &day.dinner {
                    println!("  dinner:    {} ({} kcal)", r.name, r.nutrition.calories);
                }
                for r in &day.snacks {
                    println!("  snack:     {} ({} kcal)", r.name, r.nutrition.calories);
                }
            }
            println!("\nAverage: {:.0} kcal/day", plan.average_daily_calories());
        }
        "workoutplan" => {
            let profile = load_profile(&args)?;
            let start = parse_date(&args)?;
            let days = parse_days(&args)?;
            let workouts = match config.get::<String>("data.workouts_dir") {
                Ok(dir) => load_workouts(&expand_path(dir))?,
                Err(_) => sample_workouts(),
            };
            let planner = WorkoutPlanner::new(workouts, build_engine(&config)?)?;
            let plan = planner.generate_weekly_plan(&profile, start, days)?;
            println!("🏋️  {} ({} → {})", plan.name, plan.start_date, plan.end_date);
            for day in &plan.daily_plans {
                if day.is_rest_day {
                    println!("{} — rest day", day.date);
                    continue;
                }
                for w in &day.workouts {
                    println!(
                        "{} — {} ({}, {} min, ~{} kcal)",
                        day.date,
                        w.name,
                        w.workout_type,
                        w.total_duration_minutes(),
                        w.estimate_calories_burned(profile.weight_kg)
                    );
                }
                if day.workouts.is_empty() {
                    println!("{} — open (no matching workout)", day.date);
                }
            }
            println!(
                "\nWorkout days: {}, rest days: {}, est. {} kcal burned",
                plan.total_workout_days(),
                plan.total_rest_days(),
                planner.estimate_weekly_calories_burned(&plan, profile.weight_kg)
            );
        }
        "cache-stats" => {
            let engine = build_engine(&config)?;
            let stats = engine.cache_stats();
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        "clear-cache" => {
            let engine = build_engine(&config)?;
            engine.clear_cache()?;
            println!("✅ Cache cleared");
        }
        other => {
            eprintln!("Unknown command: {other}");
            std::process::exit(1);
        }
    }
    Ok(())
}
