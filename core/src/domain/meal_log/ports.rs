use std::future::Future;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    meal_log::{
        entities::{MealLog, SuperGutAnalysis},
        value_objects::{AnalyzeMealInput, LogMealInput},
    },
};

pub trait MealLogService: Send + Sync {
    /// Eaten meals, newest first
    fn get_history(
        &self,
        identity: &Identity,
    ) -> impl Future<Output = Result<Vec<MealLog>, CoreError>> + Send;

    /// Estimate net carbs of a plated meal. Nothing is stored.
    fn analyze_meal(
        &self,
        identity: &Identity,
        input: AnalyzeMealInput,
    ) -> impl Future<Output = Result<SuperGutAnalysis, CoreError>> + Send;

    fn log_meal(
        &self,
        identity: &Identity,
        input: LogMealInput,
    ) -> impl Future<Output = Result<MealLog, CoreError>> + Send;
}
