//! Catalog loading from a directory of JSON files.
//!
//! Each `.json` file holds a single item or an array of items; files are
//! visited in sorted order so catalog insertion order is stable across runs.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

use crate::recipe::Recipe;
use crate::workout::Workout;

pub fn load_recipes(dir: &Path) -> Result<Vec<Recipe>> {
    load_items(dir)
}

pub fn load_workouts(dir: &Path) -> Result<Vec<Workout>> {
    load_items(dir)
}

fn load_items<T: DeserializeOwned>(dir: &Path) -> Result<Vec<T>> {
    let files = list_json_files(dir);
    let mut items = Vec::new();
    for file_path in &files {
        let content = fs::read_to_string(file_path)
            .with_context(|| format!("reading {}", file_path.display()))?;
        // A file may hold one item or an array of items.
        match serde_json::from_str::<Vec<T>>(&content) {
            Ok(mut batch) => items.append(&mut batch),
            Err(_) => {
                let item: T = serde_json::from_str(&content)
                    .with_context(|| format!("parsing {}", file_path.display()))?;
                items.push(item);
            }
        }
    }
    Ok(items)
}

fn list_json_files(root: &Path) -> Vec<PathBuf> {
    let mut json_files = Vec::new();
    for entry in walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            json_files.push(path.to_path_buf());
        }
    }
    json_files.sort();
    json_files
}
