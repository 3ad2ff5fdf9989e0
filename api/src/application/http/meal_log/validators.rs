use chrono::NaiveDate;
use scantry_core::domain::{
    meal_log::entities::SuperGutAnalysis, profile::entities::ProfileKey,
    schedule::entities::MealType,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogMealValidator {
    pub date: NaiveDate,

    #[serde(default)]
    pub slot: MealType,

    #[serde(default)]
    #[validate(length(max = 200, message = "recipeTitle is too long"))]
    pub recipe_title: Option<String>,

    #[serde(default)]
    #[validate(length(max = 2000, message = "description is too long"))]
    pub description: Option<String>,

    #[serde(default)]
    pub attendees: Vec<ProfileKey>,

    /// Result of a previous `/history/analyze` call
    #[serde(default)]
    pub analysis: Option<SuperGutAnalysis>,
}
