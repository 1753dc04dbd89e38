use std::env;

use planfit_core::catalog::{load_recipes, load_workouts};
use planfit_core::config::{expand_path, Config};
use planfit_core::sample::{sample_recipes, sample_workouts};
use planfit_embed::default_embedder;
use planfit_planner::{MealPlanner, WorkoutPlanner};
use planfit_vector::{SemanticEngine, VectorCache};

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

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <meals|workouts> <query> [--limit N]", args[0]);
        eprintln!("Example: {} meals 'high protein breakfast' --limit 5", args[0]);
        std::process::exit(1);
    }
    let kind = &args[1];
    let query = &args[2];
    let mut limit = 10usize;
    if let Some(pos) = args.iter().position(|a| a == "--limit") {
        match args.get(pos + 1).and_then(|l| l.parse().ok()) {
            Some(l) => limit = l,
            None => {
                eprintln!("Error: --limit requires a number");
                std::process::exit(1);
            }
        }
    }

    let config = Config::load()?;
    println!("🔍 planfit-search\n=================");
    println!("Query: {query}");

    match kind.as_str() {
        "meals" => {
            let recipes = match config.get::<String>("data.recipes_dir") {
                Ok(dir) => load_recipes(&expand_path(dir))?,
                Err(_) => sample_recipes(),
            };
            let planner = MealPlanner::new(recipes, build_engine(&config)?)?;
            let results = planner.search(query, None, None, limit)?;
            println!("\nFound {} recipes", results.len());
            for (i, m) in results.iter().enumerate() {
                println!(
                    "  {}. score={:.4}  {}  ({}, {} kcal, {} min)",
                    i + 1,
                    m.score,
                    m.recipe.name,
                    m.recipe.meal_type,
                    m.recipe.nutrition.calories,
                    m.recipe.total_time_minutes()
                );
            }
        }
        "workouts" => {
            let workouts = match config.get::<String>("data.workouts_dir") {
                Ok(dir) => load_workouts(&expand_path(dir))?,
                Err(_) => sample_workouts(),
            };
            let planner = WorkoutPlanner::new(workouts, build_engine(&config)?)?;
            let results = planner.search(query, None, None, limit)?;
            println!("\nFound {} workouts", results.len());
            for (i, m) in results.iter().enumerate() {
                println!(
                    "  {}. score={:.4}  {}  ({}, {} min)",
                    i + 1,
                    m.score,
                    m.workout.name,
                    m.workout.workout_type,
                    m.workout.total_duration_minutes()
                );
            }
        }
        other => {
            eprintln!("Unknown catalog: {other} (expected meals or workouts)");
            std::process::exit(1);
        }
    }
    Ok(())
}
