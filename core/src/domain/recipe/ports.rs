use std::future::Future;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    meal_log::entities::MealLog,
    recipe::{
        entities::{Recipe, RejectedRecipe},
        value_objects::{CookRecipeInput, RejectRecipeInput},
    },
};

pub trait RecipeService: Send + Sync {
    fn get_recipes(
        &self,
        identity: &Identity,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn get_rejected_recipes(
        &self,
        identity: &Identity,
    ) -> impl Future<Output = Result<Vec<RejectedRecipe>, CoreError>> + Send;

    /// Ask the model for three dinners built from the inventory, replacing the
    /// current suggestions
    fn generate_recipes(
        &self,
        identity: &Identity,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn reject_recipe(
        &self,
        identity: &Identity,
        input: RejectRecipeInput,
    ) -> impl Future<Output = Result<RejectedRecipe, CoreError>> + Send;

    /// Record that a suggested recipe was cooked
    fn cook_recipe(
        &self,
        identity: &Identity,
        input: CookRecipeInput,
    ) -> impl Future<Output = Result<MealLog, CoreError>> + Send;
}
