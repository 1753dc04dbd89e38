//! Workout recommendation and daily/weekly schedule assembly.

use std::cell::RefCell;
use std::collections::HashSet;

use chrono::{Datelike, Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::SeedableRng;

use planfit_core::plan::{DailyWorkoutPlan, WorkoutPlan};
use planfit_core::profile::UserProfile;
use planfit_core::workout::{Workout, WorkoutType};
use planfit_vector::{CacheStats, SemanticEngine};

use crate::filter::{difficulty_ceiling, run_pipeline, workout_stages, Stage};
use crate::score::{combined, goal_workout_types, muscle_score, NEUTRAL_SCORE};
use crate::select::select_one;
use crate::{plan_id, sort_scored, CANDIDATE_POOL};

/// Duration ceiling when assembling plans.
const PLAN_MAX_DURATION: u32 = 60;
/// Looser ceiling for free-text search.
const SEARCH_MAX_DURATION: u32 = 120;
/// Flexibility sessions slotted on would-be rest days stay short.
const FLEX_DAY_MAX_DURATION: u32 = 30;

const DEFAULT_WORKOUT_DAYS: u32 = 4;

/// Weekday focus template, Monday first. `RestOrFlex` slots become rest days
/// or short flexibility sessions depending on the requested training volume.
#[derive(Debug, Clone, Copy)]
enum DayFocus {
    Training(WorkoutType),
    RestOrFlex,
}

const WEEK_FOCUS: [DayFocus; 7] = [
    DayFocus::Training(WorkoutType::Strength),
    DayFocus::Training(WorkoutType::Cardio),
    DayFocus::Training(WorkoutType::Strength),
    DayFocus::RestOrFlex,
    DayFocus::Training(WorkoutType::Strength),
    DayFocus::Training(WorkoutType::Hiit),
    DayFocus::RestOrFlex,
];

/// Which weekday offsets rest, for a requested number of training days.
fn rest_offsets(workout_days_per_week: u32) -> Vec<usize> {
    let mut offsets = Vec::new();
    if workout_days_per_week <= 4 {
        offsets.extend([3, 6]);
    }
    if workout_days_per_week <= 3 {
        offsets.push(1);
    }
    offsets
}

#[derive(Debug, Clone)]
pub struct WorkoutMatch {
    pub workout: Workout,
    pub score: f32,
}

pub struct WorkoutPlanner {
    workouts: Vec<Workout>,
    vectors: Vec<Vec<f32>>,
    engine: SemanticEngine,
    rng: RefCell<StdRng>,
}

impl WorkoutPlanner {
    pub fn new(workouts: Vec<Workout>, engine: SemanticEngine) -> anyhow::Result<Self> {
        Self::build(workouts, engine, StdRng::from_entropy())
    }

    /// Deterministic selection for tests and reproducible plans.
    pub fn with_seed(
        workouts: Vec<Workout>,
        engine: SemanticEngine,
        seed: u64,
    ) -> anyhow::Result<Self> {
        Self::build(workouts, engine, StdRng::seed_from_u64(seed))
    }

    fn build(workouts: Vec<Workout>, engine: SemanticEngine, rng: StdRng) -> anyhow::Result<Self> {
        let texts: Vec<String> = workouts.iter().map(Workout::searchable_text).collect();
        let vectors = engine.embed_batch(&texts)?;
        tracing::debug!(workouts = workouts.len(), "workout planner indexed");
        Ok(Self {
            workouts,
            vectors,
            engine,
            rng: RefCell::new(rng),
        })
    }

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    fn ranked(
        &self,
        profile: &UserProfile,
        workout_type: WorkoutType,
        query: Option<&str>,
        max_duration: u32,
    ) -> anyhow::Result<Vec<(usize, f32)>> {
        let stages = workout_stages(profile, workout_type, max_duration);
        let kept = run_pipeline(&self.workouts, &stages);
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
                let domain = muscle_score(&self.workouts[i], &profile.fitness_goals);
                (i, combined(domain, semantic))
            })
            .collect();
        sort_scored(&mut scored);
        Ok(scored)
    }

    /// Top workouts of a type under the profile's constraints.
    pub fn find_matching(
        &self,
        profile: &UserProfile,
        workout_type: WorkoutType,
        query: Option<&str>,
        top_k: usize,
    ) -> anyhow::Result<Vec<WorkoutMatch>> {
        profile.validate()?;
        let scored = self.ranked(profile, workout_type, query, PLAN_MAX_DURATION)?;
        Ok(scored
            .into_iter()
            .take(top_k)
            .map(|(i, score)| WorkoutMatch {
                workout: self.workouts[i].clone(),
                score,
            })
            .collect())
    }

    /// Free-text workout search; profile and type narrow the candidates when
    /// given.
    pub fn search(
        &self,
        query: &str,
        profile: Option<&UserProfile>,
        workout_type: Option<WorkoutType>,
        top_k: usize,
    ) -> anyhow::Result<Vec<WorkoutMatch>> {
        if let Some(p) = profile {
            p.validate()?;
        }
        let mut stages: Vec<Stage<'_, Workout>> = Vec::new();
        if let Some(wt) = workout_type {
            stages.push(Stage::new("type", move |w: &Workout| w.workout_type == wt));
        }
        if let Some(p) = profile {
            let mut available = p.available_equipment.clone();
            available.push("bodyweight".to_string());
            available.push("none".to_string());
            stages.push(Stage::new("equipment", move |w: &Workout| {
                w.doable_with_equipment(&available)
            }));
        }
        stages.push(Stage::new("duration", |w: &Workout| {
            w.total_duration_minutes() <= SEARCH_MAX_DURATION
        }));
        let kept = run_pipeline(&self.workouts, &stages);
        let query_vec = self.engine.embed(query)?;
        let mut scored: Vec<(usize, f32)> = kept
            .into_iter()
            .map(|i| {
                let semantic = self.engine.similarity(&query_vec, &self.vectors[i]);
                let domain = match profile {
                    Some(p) => muscle_score(&self.workouts[i], &p.fitness_goals),
                    None => NEUTRAL_SCORE,
                };
                (i, combined(domain, semantic))
            })
            .collect();
        sort_scored(&mut scored);
        Ok(scored
            .into_iter()
            .take(top_k)
            .map(|(i, score)| WorkoutMatch {
                workout: self.workouts[i].clone(),
                score,
            })
            .collect())
    }

    fn select_for_day(
        &self,
        profile: &UserProfile,
        workout_type: WorkoutType,
        max_duration: u32,
        used: &HashSet<String>,
    ) -> anyhow::Result<Option<Workout>> {
        let scored = self.ranked(profile, workout_type, None, max_duration)?;
        let ranked: Vec<&Workout> = scored
            .iter()
            .take(CANDIDATE_POOL)
            .map(|(i, _)| &self.workouts[*i])
            .collect();
        let picked = select_one(&ranked, used, |w| &w.id, None, &mut self.rng.borrow_mut());
        Ok(picked.cloned())
    }

    /// Preferred training focus for a weekday, honoring the user's goals
    /// where the template allows a choice.
    fn focus_for_day(&self, profile: &UserProfile, offset: usize) -> DayFocus {
        let focus = WEEK_FOCUS[offset % 7];
        if let DayFocus::Training(template_type) = focus {
            let preferred = goal_workout_types(&profile.fitness_goals);
            if !preferred.is_empty() && !preferred.contains(&template_type) {
                return DayFocus::Training(preferred[offset % preferred.len()]);
            }
        }
        focus
    }

    /// One day of training. Weekday offsets 3 and 6 are rest days.
    pub fn generate_daily_plan(
        &self,
        profile: &UserProfile,
        date: NaiveDate,
    ) -> anyhow::Result<DailyWorkoutPlan> {
        profile.validate()?;
        let offset = date.weekday().num_days_from_monday() as usize;
        self.plan_day(profile, date, offset, &[3, 6], &mut HashSet::new())
    }

    fn plan_day(
        &self,
        profile: &UserProfile,
        date: NaiveDate,
        offset: usize,
        rest_offsets: &[usize],
        used: &mut HashSet<String>,
    ) -> anyhow::Result<DailyWorkoutPlan> {
        if rest_offsets.contains(&offset) {
            return Ok(DailyWorkoutPlan {
                date,
                workouts: Vec::new(),
                is_rest_day: true,
                notes: "Rest day".to_string(),
            });
        }
        let (workout_type, max_duration) = match self.focus_for_day(profile, offset) {
            DayFocus::Training(t) => (t, PLAN_MAX_DURATION),
            DayFocus::RestOrFlex => (WorkoutType::Flexibility, FLEX_DAY_MAX_DURATION),
        };
        let mut workouts = Vec::new();
        match self.select_for_day(profile, workout_type, max_duration, used)? {
            Some(w) => {
                used.insert(w.id.clone());
                workouts.push(w);
            }
            None => {
                tracing::debug!(%workout_type, "no candidate for day, leaving it open");
            }
        }
        Ok(DailyWorkoutPlan {
            date,
            workouts,
            is_rest_day: false,
            notes: String::new(),
        })
    }

    /// A seven-day schedule. The used set spans the whole week, so workouts
    /// repeat only when the catalog runs out of alternatives.
    pub fn generate_weekly_plan(
        &self,
        profile: &UserProfile,
        start_date: NaiveDate,
        workout_days_per_week: Option<u32>,
    ) -> anyhow::Result<WorkoutPlan> {
        profile.validate()?;
        let days = workout_days_per_week
            .unwrap_or(DEFAULT_WORKOUT_DAYS)
            .clamp(1, 7);
        let rest = rest_offsets(days);
        let mut used: HashSet<String> = HashSet::new();
        let mut daily_plans = Vec::with_capacity(7);
        for offset in 0..7 {
            let date = start_date + Duration::days(offset as i64);
            daily_plans.push(self.plan_day(profile, date, offset, &rest, &mut used)?);
        }
        Ok(WorkoutPlan {
            id: plan_id("wp_"),
            name: format!("Weekly workout plan for {}", profile.name),
            start_date,
            end_date: start_date + Duration::days(6),
            daily_plans,
            workout_days_per_week: days,
            notes: String::new(),
        })
    }

    /// Estimated calories burned across the whole plan for a given body
    /// weight.
    pub fn estimate_weekly_calories_burned(&self, plan: &WorkoutPlan, weight_kg: f64) -> u32 {
        plan.daily_plans
            .iter()
            .flat_map(|d| d.workouts.iter())
            .map(|w| w.estimate_calories_burned(weight_kg))
            .sum()
    }

    /// Difficulty ceiling the filter applies for this profile.
    pub fn difficulty_ceiling(&self, profile: &UserProfile) -> planfit_core::recipe::Difficulty {
        difficulty_ceiling(profile)
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.engine.cache_stats()
    }

    pub fn clear_cache(&self) -> anyhow::Result<()> {
        self.engine.clear_cache()
    }
}
