use chrono::{Days, NaiveDate};
use tracing::instrument;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, services::Service},
    document::{entities::DocumentName, ports::DocumentService},
    household::ports::HouseholdService,
    llm::{helpers::non_blank, ports::LLMClient},
    schedule::{
        entities::{ScheduleDay, ScheduledMeal},
        ports::ScheduleService,
        value_objects::{DAYS_PER_WEEK, RemoveScheduledMealInput, ScheduleMealInput},
    },
    storage::ports::ObjectStoragePort,
};

fn week_of(start: NaiveDate, meals: &[ScheduledMeal]) -> Vec<ScheduleDay> {
    (0..DAYS_PER_WEEK)
        .filter_map(|offset| start.checked_add_days(Days::new(offset)))
        .map(|date| {
            let mut day: Vec<ScheduledMeal> = meals
                .iter()
                .filter(|meal| meal.date == date)
                .cloned()
                .collect();
            day.sort_by_key(|meal| meal.slot);

            ScheduleDay { date, meals: day }
        })
        .collect()
}

impl<OS, LLM> ScheduleService for Service<OS, LLM>
where
    OS: ObjectStoragePort,
    LLM: LLMClient,
{
    #[instrument(skip(self, identity), fields(identity = %identity.log_id()))]
    async fn get_schedule(&self, identity: &Identity) -> Result<Vec<ScheduledMeal>, CoreError> {
        let household_id = self.resolve_household(identity).await?;

        Ok(self
            .load_document_or_default(&household_id, DocumentName::Schedule, Vec::new())
            .await)
    }

    #[instrument(skip(self, identity), fields(identity = %identity.log_id()))]
    async fn get_week(
        &self,
        identity: &Identity,
        start: NaiveDate,
    ) -> Result<Vec<ScheduleDay>, CoreError> {
        let meals = self.get_schedule(identity).await?;
        Ok(week_of(start, &meals))
    }

    #[instrument(skip(self, identity, input), fields(identity = %identity.log_id(), date = %input.date))]
    async fn schedule_meal(
        &self,
        identity: &Identity,
        input: ScheduleMealInput,
    ) -> Result<ScheduledMeal, CoreError> {
        let recipe_id = non_blank(Some(input.recipe_id))
            .ok_or_else(|| CoreError::InvalidInput("a recipe id is required".to_string()))?;
        let household_id = self.resolve_household(identity).await?;

        let recipe_title = match non_blank(input.recipe_title) {
            Some(title) => title,
            None => self.find_recipe(&household_id, &recipe_id).await?.title,
        };

        let meal = ScheduledMeal {
            date: input.date,
            slot: input.slot.unwrap_or_default(),
            recipe_id,
            recipe_title,
            attendees: input.attendees,
        };

        self.update_document(
            &household_id,
            DocumentName::Schedule,
            Vec::new,
            |meals: &mut Vec<ScheduledMeal>| {
                meals.retain(|planned| !(planned.date == meal.date && planned.slot == meal.slot));
                meals.push(meal.clone());
                Ok(())
            },
        )
        .await?;

        Ok(meal)
    }

    #[instrument(skip(self, identity, input), fields(identity = %identity.log_id(), date = %input.date))]
    async fn remove_meal(
        &self,
        identity: &Identity,
        input: RemoveScheduledMealInput,
    ) -> Result<usize, CoreError> {
        let household_id = self.resolve_household(identity).await?;

        self.update_document(
            &household_id,
            DocumentName::Schedule,
            Vec::new,
            |meals: &mut Vec<ScheduledMeal>| {
                let before = meals.len();
                meals.retain(|meal| {
                    meal.date != input.date || input.slot.is_some_and(|slot| slot != meal.slot)
                });
                Ok(before - meals.len())
            },
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{profile::entities::ProfileKey, schedule::entities::MealType},
        test_support::{identity, test_service},
    };

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, d).unwrap()
    }

    fn plan(date: NaiveDate, slot: Option<MealType>, recipe: &str) -> ScheduleMealInput {
        ScheduleMealInput {
            date,
            slot,
            recipe_id: recipe.to_string(),
            recipe_title: Some(format!("{recipe} title")),
            attendees: None,
        }
    }

    #[tokio::test]
    async fn same_date_and_slot_is_replaced() {
        let service = test_service();
        let caller = identity("a@x.com");

        service.schedule_meal(&caller, plan(day(1), None, "r1")).await.unwrap();
        service
            .schedule_meal(&caller, plan(day(1), Some(MealType::Lunch), "r2"))
            .await
            .unwrap();
        let replaced = service
            .schedule_meal(&caller, plan(day(1), Some(MealType::Dinner), "r3"))
            .await
            .unwrap();

        let schedule = service.get_schedule(&caller).await.unwrap();
        assert_eq!(schedule.len(), 2);
        assert!(schedule.contains(&replaced));
        assert!(schedule.iter().all(|meal| meal.recipe_id != "r1"));
    }

    #[tokio::test]
    async fn week_view_spans_seven_days() {
        let service = test_service();
        let caller = identity("a@x.com");
        service.schedule_meal(&caller, plan(day(2), None, "r1")).await.unwrap();
        service
            .schedule_meal(&caller, plan(day(2), Some(MealType::Breakfast), "r2"))
            .await
            .unwrap();
        service.schedule_meal(&caller, plan(day(9), None, "r3")).await.unwrap();

        let week = service.get_week(&caller, day(1)).await.unwrap();

        assert_eq!(week.len(), 7);
        assert_eq!(week[0].date, day(1));
        assert_eq!(week[6].date, day(7));
        assert_eq!(
            week[1]
                .meals
                .iter()
                .map(|m| m.recipe_id.as_str())
                .collect::<Vec<_>>(),
            vec!["r2", "r1"]
        );
        assert!(week.iter().all(|d| d.meals.iter().all(|m| m.recipe_id != "r3")));
    }

    #[tokio::test]
    async fn remove_by_slot_or_whole_day() {
        let service = test_service();
        let caller = identity("a@x.com");
        service.schedule_meal(&caller, plan(day(3), None, "r1")).await.unwrap();
        service
            .schedule_meal(&caller, plan(day(3), Some(MealType::Lunch), "r2"))
            .await
            .unwrap();
        service.schedule_meal(&caller, plan(day(4), None, "r3")).await.unwrap();

        let removed = service
            .remove_meal(
                &caller,
                RemoveScheduledMealInput {
                    date: day(3),
                    slot: Some(MealType::Lunch),
                },
            )
            .await
            .unwrap();
        assert_eq!(removed, 1);

        let removed = service
            .remove_meal(
                &caller,
                RemoveScheduledMealInput {
                    date: day(3),
                    slot: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(removed, 1);

        let remaining = service.get_schedule(&caller).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].recipe_id, "r3");
    }

    #[tokio::test]
    async fn unknown_recipe_without_title_is_not_found() {
        let service = test_service();
        let caller = identity("a@x.com");

        let result = service
            .schedule_meal(
                &caller,
                ScheduleMealInput {
                    recipe_title: None,
                    attendees: Some(vec![ProfileKey::Wife]),
                    ..plan(day(5), None, "ghost")
                },
            )
            .await;

        assert!(matches!(result, Err(CoreError::NotFound(_))));
    }
}
