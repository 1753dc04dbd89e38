//! Meal recommendation and daily/weekly meal plan assembly.

use std::cell::RefCell;
use std::collections::HashSet;

use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::SeedableRng;

use planfit_core::plan::{DailyMealPlan, MealPlan};
use planfit_core::profile::UserProfile;
use planfit_core::recipe::{MealType, Recipe};
use planfit_vector::{CacheStats, SemanticEngine};

use crate::filter::{recipe_stages, run_pipeline, Stage};
use crate::score::{combined, pantry_score, NEUTRAL_SCORE};
use crate::select::select_one;
use crate::{plan_id, sort_scored, CANDIDATE_POOL};

/// Calorie share per meal slot.
const BREAKFAST_SHARE: f64 = 0.25;
const LUNCH_SHARE: f64 = 0.35;
const DINNER_SHARE: f64 = 0.35;
const SNACK_SHARE: f64 = 0.10;

#[derive(Debug, Clone)]
pub struct RecipeMatch {
    pub recipe: Recipe,
    pub score: f32,
}

pub struct MealPlanner {
    recipes: Vec<Recipe>,
    vectors: Vec<Vec<f32>>,
    engine: SemanticEngine,
    rng: RefCell<StdRng>,
}

impl MealPlanner {
    pub fn new(recipes: Vec<Recipe>, engine: SemanticEngine) -> anyhow::Result<Self> {
        Self::build(recipes, engine, StdRng::from_entropy())
    }

    /// Deterministic selection for tests and reproducible plans.
    pub fn with_seed(
        recipes: Vec<Recipe>,
        engine: SemanticEngine,
        seed: u64,
    ) -> anyhow::Result<Self> {
        Self::build(recipes, engine, StdRng::seed_from_u64(seed))
    }

    fn build(recipes: Vec<Recipe>, engine: SemanticEngine, rng: StdRng) -> anyhow::Result<Self> {
        let texts: Vec<String> = recipes.iter().map(Recipe::searchable_text).collect();
        let vectors = engine.embed_batch(&texts)?;
        tracing::debug!(recipes = recipes.len(), "meal planner indexed");
        Ok(Self {
            recipes,
            vectors,
            engine,
            rng: RefCell::new(rng),
        })
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Scored catalog indices for a profile and slot, best first.
    fn ranked(
        &self,
        profile: &UserProfile,
        meal_type: MealType,
        query: Option<&str>,
    ) -> anyhow::Result<Vec<(usize, f32)>> {
        let stages = recipe_stages(profile, meal_type, None);
        let kept = run_pipeline(&self.recipes, &stages);
        let query_vec = match query {
            Some(q) => Some(self.engine.embed(q)?),
            None => None,
        };
        let mut scored: Vec<(usize, f32)> = kept
            .into_iter()
            .map(|i| {
                let semantic = match &query_vec {
                    Some(qv) => self.engine.similarity(qv, &self.vectors[i]),
                    None => NEUTRAL_SCORE,
                };
                let domain = pantry_score(&self.recipes[i], &profile.pantry_items);
                (i, combined(domain, semantic))
            })
            .collect();
        sort_scored(&mut scored);
        Ok(scored)
    }

    /// Top recipes for a meal slot under the profile's constraints.
    pub fn find_matching(
        &self,
        profile: &UserProfile,
        meal_type: MealType,
        query: Option<&str>,
        top_k: usize,
    ) -> anyhow::Result<Vec<RecipeMatch>> {
        profile.validate()?;
        let scored = self.ranked(profile, meal_type, query)?;
        Ok(scored
            .into_iter()
            .take(top_k)
            .map(|(i, score)| RecipeMatch {
                recipe: self.recipes[i].clone(),
                score,
            })
            .collect())
    }

    /// Free-text recipe search; profile and slot narrow the candidates when
    /// given.
    pub fn search(
        &self,
        query: &str,
        profile: Option<&UserProfile>,
        meal_type: Option<MealType>,
        top_k: usize,
    ) -> anyhow::Result<Vec<RecipeMatch>> {
        if let Some(p) = profile {
            p.validate()?;
        }
        let mut stages: Vec<Stage<'_, Recipe>> = Vec::new();
        if let Some(mt) = meal_type {
            stages.push(Stage::new("type", move |r: &Recipe| r.meal_type == mt));
        }
        if let Some(p) = profile {
            stages.push(Stage::new("diet", move |r: &Recipe| {
                p.dietary_preferences.iter().all(|d| d.accepts(&r.dietary_info))
            }));
            stages.push(Stage::new("allergy", move |r: &Recipe| {
                !p.allergies.iter().any(|a| r.contains_ingredient(a))
            }));
        }
        let kept = run_pipeline(&self.recipes, &stages);
        let query_vec = self.engine.embed(query)?;
        let mut scored: Vec<(usize, f32)> = kept
            .into_iter()
            .map(|i| {
                let semantic = self.engine.similarity(&query_vec, &self.vectors[i]);
                let domain = match profile {
                    Some(p) => pantry_score(&self.recipes[i], &p.pantry_items),
                    None => NEUTRAL_SCORE,
                };
                (i, combined(domain, semantic))
            })
            .collect();
        sort_scored(&mut scored);
        Ok(scored
            .into_iter()
            .take(top_k)
            .map(|(i, score)| RecipeMatch {
                recipe: self.recipes[i].clone(),
                score,
            })
            .collect())
    }

    /// Pick one recipe for a slot, respecting the day's used set and the
    /// slot's calorie budget.
    fn select_for_meal(
        &self,
        profile: &UserProfile,
        meal_type: MealType,
        target_calories: u32,
        used: &HashSet<String>,
    ) -> anyhow::Result<Option<Recipe>> {
        let scored = self.ranked(profile, meal_type, None)?;
        let ranked: Vec<&Recipe> = scored
            .iter()
            .take(CANDIDATE_POOL)
            .map(|(i, _)| &self.recipes[*i])
            .collect();
        let calories_of = |r: &Recipe| r.nutrition.calories;
        let picked = select_one(
            &ranked,
            used,
            |r| &r.id,
            Some((target_calories, &calories_of)),
            &mut self.rng.borrow_mut(),
        );
        Ok(picked.cloned())
    }

    /// One day of meals. A slot with no candidates of its type stays unset.
    pub fn generate_daily_plan(
        &self,
        profile: &UserProfile,
        date: NaiveDate,
    ) -> anyhow::Result<DailyMealPlan> {
        profile.validate()?;
        let target = profile.calorie_target();
        let mut used: HashSet<String> = HashSet::new();

        let fill = |meal_type: MealType, share: f64, used: &mut HashSet<String>| {
            let budget = (f64::from(target) * share) as u32;
            match self.select_for_meal(profile, meal_type, budget, used) {
                Ok(Some(recipe)) => {
                    used.insert(recipe.id.clone());
                    Some(recipe)
                }
                Ok(None) => None,
                Err(e) => {
                    tracing::warn!("selection failed for {meal_type}: {e}");
                    None
                }
            }
        };

        let breakfast = fill(MealType::Breakfast, BREAKFAST_SHARE, &mut used);
        let lunch = fill(MealType::Lunch, LUNCH_SHARE, &mut used);
        let dinner = fill(MealType::Dinner, DINNER_SHARE, &mut used);
        let snacks: Vec<Recipe> = fill(MealType::Snack, SNACK_SHARE, &mut used)
            .into_iter()
            .collect();

        Ok(DailyMealPlan {
            date,
            breakfast,
            lunch,
            dinner,
            snacks,
            notes: String::new(),
        })
    }

    /// Seven consecutive daily plans starting at `start_date`. Each day gets
    /// a fresh used set, so variety is enforced within a day, not across the
    /// week.
    pub fn generate_weekly_plan(
        &self,
        profile: &UserProfile,
        start_date: NaiveDate,
    ) -> anyhow::Result<MealPlan> {
        profile.validate()?;
        let mut daily_plans = Vec::with_capacity(7);
        for offset in 0..7 {
            let date = start_date + Duration::days(offset);
            daily_plans.push(self.generate_daily_plan(profile, date)?);
        }
        Ok(MealPlan {
            id: plan_id("mp_"),
            name: format!("Weekly meal plan for {}", profile.name),
            start_date,
            end_date: start_date + Duration::days(6),
            daily_plans,
            target_calories_per_day: profile.calorie_target(),
            notes: String::new(),
        })
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.engine.cache_stats()
    }

    pub fn clear_cache(&self) -> anyhow::Result<()> {
        self.engine.clear_cache()
    }
}
