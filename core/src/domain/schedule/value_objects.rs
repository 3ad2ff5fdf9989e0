use chrono::NaiveDate;

use crate::domain::{profile::entities::ProfileKey, schedule::entities::MealType};

pub const DAYS_PER_WEEK: u64 = 7;

#[derive(Debug, Clone)]
pub struct ScheduleMealInput {
    pub date: NaiveDate,
    pub slot: Option<MealType>,
    pub recipe_id: String,
    /// Looked up in the current suggestions when not given
    pub recipe_title: Option<String>,
    pub attendees: Option<Vec<ProfileKey>>,
}

#[derive(Debug, Clone)]
pub struct RemoveScheduledMealInput {
    pub date: NaiveDate,
    /// `None` clears the whole day
    pub slot: Option<MealType>,
}
