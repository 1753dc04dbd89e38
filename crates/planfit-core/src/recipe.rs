//! Recipe catalog items: ingredients, nutrition, and dietary tagging.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Which meal slot a recipe belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            "snack" => Ok(Self::Snack),
            other => Err(Error::UnknownItemType(other.to_string())),
        }
    }
}

/// Dietary tags on recipes double as user preferences; compatibility between
/// the two is asymmetric (see [`DietaryPreference::accepts`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietaryPreference {
    None,
    Vegetarian,
    Vegan,
    Pescatarian,
    Keto,
    Paleo,
    GlutenFree,
    DairyFree,
    LowCarb,
    HighProtein,
}

impl DietaryPreference {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Vegetarian => "vegetarian",
            Self::Vegan => "vegan",
            Self::Pescatarian => "pescatarian",
            Self::Keto => "keto",
            Self::Paleo => "paleo",
            Self::GlutenFree => "gluten_free",
            Self::DairyFree => "dairy_free",
            Self::LowCarb => "low_carb",
            Self::HighProtein => "high_protein",
        }
    }

    /// Whether a recipe carrying `tags` satisfies this preference.
    ///
    /// Vegetarian accepts vegetarian or vegan recipes; vegan accepts only
    /// vegan; pescatarian accepts pescatarian, vegetarian, or vegan; `None`
    /// accepts anything; every other preference needs an exact tag.
    pub fn accepts(self, tags: &[DietaryPreference]) -> bool {
        match self {
            Self::None => true,
            Self::Vegetarian => tags
                .iter()
                .any(|t| matches!(t, Self::Vegetarian | Self::Vegan)),
            Self::Vegan => tags.contains(&Self::Vegan),
            Self::Pescatarian => tags
                .iter()
                .any(|t| matches!(t, Self::Pescatarian | Self::Vegetarian | Self::Vegan)),
            other => tags.contains(&other),
        }
    }
}

/// Difficulty levels are ordered so a ceiling comparison works directly.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    #[serde(default)]
    pub optional: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: u32,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    #[serde(default)]
    pub fiber_g: f64,
    #[serde(default)]
    pub sugar_g: f64,
    #[serde(default)]
    pub sodium_mg: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub description: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    pub nutrition: Nutrition,
    pub prep_time_minutes: u32,
    pub cook_time_minutes: u32,
    pub servings: u32,
    pub meal_type: MealType,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub dietary_info: Vec<DietaryPreference>,
    #[serde(default = "default_difficulty")]
    pub difficulty: Difficulty,
}

fn default_difficulty() -> Difficulty {
    Difficulty::Intermediate
}

impl Recipe {
    pub fn total_time_minutes(&self) -> u32 {
        self.prep_time_minutes + self.cook_time_minutes
    }

    /// Case-folded substring check against every ingredient name.
    pub fn contains_ingredient(&self, name: &str) -> bool {
        let needle = name.to_lowercase();
        self.ingredients
            .iter()
            .any(|ing| ing.name.to_lowercase().contains(&needle))
    }

    pub fn ingredient_names(&self) -> Vec<String> {
        self.ingredients
            .iter()
            .map(|ing| ing.name.to_lowercase())
            .collect()
    }

    /// Text blob fed to the embedder for semantic matching.
    pub fn searchable_text(&self) -> String {
        let ingredients = self.ingredient_names().join(", ");
        let tags = self.tags.join(", ");
        let dietary = self
            .dietary_info
            .iter()
            .map(|d| d.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "{}. {}. Ingredients: {}. Tags: {}. Dietary info: {}. Meal type: {}.",
            self.name, self.description, ingredients, tags, dietary, self.meal_type
        )
    }
}
