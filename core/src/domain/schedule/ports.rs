use std::future::Future;

use chrono::NaiveDate;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    schedule::{
        entities::{ScheduleDay, ScheduledMeal},
        value_objects::{RemoveScheduledMealInput, ScheduleMealInput},
    },
};

pub trait ScheduleService: Send + Sync {
    fn get_schedule(
        &self,
        identity: &Identity,
    ) -> impl Future<Output = Result<Vec<ScheduledMeal>, CoreError>> + Send;

    /// Seven consecutive days from `start`, each with its planned meals
    fn get_week(
        &self,
        identity: &Identity,
        start: NaiveDate,
    ) -> impl Future<Output = Result<Vec<ScheduleDay>, CoreError>> + Send;

    /// Plan a meal, replacing whatever was planned for the same date and slot
    fn schedule_meal(
        &self,
        identity: &Identity,
        input: ScheduleMealInput,
    ) -> impl Future<Output = Result<ScheduledMeal, CoreError>> + Send;

    /// Returns how many meals were removed
    fn remove_meal(
        &self,
        identity: &Identity,
        input: RemoveScheduledMealInput,
    ) -> impl Future<Output = Result<usize, CoreError>> + Send;
}
