//! Matching and schedule assembly on top of the semantic engine.
//!
//! Both planners share the same shape: filter the catalog through an ordered
//! stage pipeline, score survivors with a blend of a domain signal and
//! semantic similarity, then select with bounded randomness while assembling
//! daily and weekly plans.

pub mod filter;
pub mod meal;
pub mod score;
pub mod select;
pub mod workout;

pub use meal::{MealPlanner, RecipeMatch};
pub use workout::{WorkoutMatch, WorkoutPlanner};

/// How many ranked candidates the selector draws from.
pub(crate) const CANDIDATE_POOL: usize = 10;

pub(crate) fn plan_id(prefix: &str) -> String {
    let id = uuid::Uuid::new_v4().simple().to_string();
    format!("{prefix}{}", &id[..8])
}

/// Stable descending sort by score, so ties keep catalog order.
pub(crate) fn sort_scored(scored: &mut [(usize, f32)]) {
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
}
