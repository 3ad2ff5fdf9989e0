use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    common::{generate_uuid_v7, lenient},
    llm::helpers::non_blank,
};

/// Which household members a recipe works for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Suitability {
    #[serde(default)]
    pub wife: bool,
    #[serde(default)]
    pub son: bool,
    #[serde(default)]
    pub dad: bool,
}

/// Estimated calories per serving for each household member.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Calories {
    pub wife: f64,
    pub son: f64,
    pub dad: f64,
}

impl Calories {
    fn is_plausible(&self) -> bool {
        [self.wife, self.son, self.dad]
            .iter()
            .all(|value| value.is_finite() && *value >= 0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub suitability: Suitability,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<Calories>,
    /// Net carbs per serving, in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_carbs: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub super_gut_benefit: Option<String>,
    #[serde(default)]
    pub reheat_friendly: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RejectedRecipe {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub rejected_at: DateTime<Utc>,
}

impl RejectedRecipe {
    pub fn new(recipe: &Recipe, reason: Option<String>) -> Self {
        Self {
            id: recipe.id.clone(),
            title: recipe.title.clone(),
            reason: non_blank(reason),
            rejected_at: Utc::now(),
        }
    }
}

/// A recipe as proposed by the model, before validation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedRecipe {
    #[serde(default, deserialize_with = "lenient::optional_string")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub suitability: Suitability,
    #[serde(default)]
    pub calories: Option<Calories>,
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub net_carbs: Option<f64>,
    #[serde(default)]
    pub super_gut_benefit: Option<String>,
    #[serde(default)]
    pub reheat_friendly: bool,
}

fn clean_lines(lines: Vec<String>) -> Vec<String> {
    lines
        .into_iter()
        .filter_map(|line| non_blank(Some(line)))
        .collect()
}

/// Keeps the suggestions that are complete enough to cook from.
///
/// Ids the model left out or repeated are replaced, and estimates that cannot
/// be right (negative or not finite) are dropped.
pub fn validate_suggestions(suggestions: Vec<SuggestedRecipe>) -> Vec<Recipe> {
    let mut seen_ids = HashSet::new();

    suggestions
        .into_iter()
        .filter_map(|suggestion| {
            let Some(title) = non_blank(suggestion.title) else {
                tracing::warn!("Dropping suggested recipe without a title");
                return None;
            };
            let ingredients = clean_lines(suggestion.ingredients);
            let instructions = clean_lines(suggestion.instructions);
            if ingredients.is_empty() || instructions.is_empty() {
                tracing::warn!(title = %title, "Dropping incomplete suggested recipe");
                return None;
            }

            let id = non_blank(suggestion.id)
                .filter(|id| !seen_ids.contains(id))
                .unwrap_or_else(|| generate_uuid_v7().to_string());
            seen_ids.insert(id.clone());

            Some(Recipe {
                id,
                title,
                description: non_blank(suggestion.description).unwrap_or_default(),
                ingredients,
                instructions,
                tags: clean_lines(suggestion.tags),
                suitability: suggestion.suitability,
                calories: suggestion.calories.filter(Calories::is_plausible),
                net_carbs: suggestion
                    .net_carbs
                    .filter(|carbs| carbs.is_finite() && *carbs >= 0.0),
                super_gut_benefit: non_blank(suggestion.super_gut_benefit),
                reheat_friendly: suggestion.reheat_friendly,
            })
        })
        .collect()
}
