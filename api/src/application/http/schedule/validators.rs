use chrono::NaiveDate;
use scantry_core::domain::{profile::entities::ProfileKey, schedule::entities::MealType};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleMealValidator {
    pub date: NaiveDate,

    /// Dinner when omitted
    #[serde(default)]
    pub slot: Option<MealType>,

    #[validate(length(min = 1, message = "recipeId is required"))]
    pub recipe_id: String,

    /// Looked up from the suggested recipes when omitted
    #[serde(default)]
    pub recipe_title: Option<String>,

    #[serde(default)]
    pub attendees: Option<Vec<ProfileKey>>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WeekQuery {
    /// First day of the week, today when omitted
    pub start: Option<NaiveDate>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RemoveMealQuery {
    /// Only this slot; the whole day when omitted
    pub slot: Option<MealType>,
}
