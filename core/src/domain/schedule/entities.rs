use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{common::lenient, profile::entities::ProfileKey};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    #[default]
    Dinner,
    Snack,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recipe planned for one meal of one day.
///
/// Entries saved before meal slots existed carry no `slot` and count as dinner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledMeal {
    #[serde(deserialize_with = "lenient::date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub slot: MealType,
    #[serde(deserialize_with = "lenient::string")]
    pub recipe_id: String,
    pub recipe_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendees: Option<Vec<ProfileKey>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDay {
    pub date: NaiveDate,
    pub meals: Vec<ScheduledMeal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_entries_are_dinner() {
        let meal: ScheduledMeal = serde_json::from_str(
            r#"{"date": "2025-12-01", "recipeId": "r1", "recipeTitle": "Stew"}"#,
        )
        .unwrap();

        assert_eq!(meal.slot, MealType::Dinner);
        assert_eq!(meal.attendees, None);
    }

    #[test]
    fn serializes_date_and_slot_as_strings() {
        let meal = ScheduledMeal {
            date: NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
            slot: MealType::Lunch,
            recipe_id: "r1".to_string(),
            recipe_title: "Stew".to_string(),
            attendees: Some(vec![ProfileKey::Son]),
        };

        assert_eq!(
            serde_json::to_value(&meal).unwrap(),
            serde_json::json!({
                "date": "2025-12-01",
                "slot": "lunch",
                "recipeId": "r1",
                "recipeTitle": "Stew",
                "attendees": ["son"]
            })
        );
    }
}
