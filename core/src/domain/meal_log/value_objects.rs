use chrono::NaiveDate;

use crate::domain::{
    llm::ports::ImagePayload,
    meal_log::entities::SuperGutAnalysis,
    profile::entities::ProfileKey,
    schedule::entities::MealType,
};

#[derive(Debug, Clone)]
pub struct LogMealInput {
    pub date: NaiveDate,
    pub slot: MealType,
    pub recipe_title: Option<String>,
    pub description: Option<String>,
    pub attendees: Vec<ProfileKey>,
    pub analysis: Option<SuperGutAnalysis>,
}

#[derive(Debug, Clone)]
pub struct AnalyzeMealInput {
    pub image: ImagePayload,
}
