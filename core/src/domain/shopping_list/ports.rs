use std::future::Future;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    shopping_list::{
        entities::{ShoppingCategory, ShoppingItem},
        value_objects::AddShoppingItemInput,
    },
};

pub trait ShoppingListService: Send + Sync {
    fn get_shopping_list(
        &self,
        identity: &Identity,
    ) -> impl Future<Output = Result<Vec<ShoppingItem>, CoreError>> + Send;

    fn add_item(
        &self,
        identity: &Identity,
        input: AddShoppingItemInput,
    ) -> impl Future<Output = Result<Vec<ShoppingItem>, CoreError>> + Send;

    /// Returns the item with its new state
    fn toggle_item(
        &self,
        identity: &Identity,
        index: usize,
    ) -> impl Future<Output = Result<ShoppingItem, CoreError>> + Send;

    /// Returns the removed item
    fn remove_item(
        &self,
        identity: &Identity,
        index: usize,
    ) -> impl Future<Output = Result<ShoppingItem, CoreError>> + Send;

    /// Drop every checked item, returning what is left
    fn clear_checked(
        &self,
        identity: &Identity,
    ) -> impl Future<Output = Result<Vec<ShoppingItem>, CoreError>> + Send;

    /// Append a suggested recipe's ingredients, unchecked
    fn add_recipe_ingredients(
        &self,
        identity: &Identity,
        recipe_id: &str,
    ) -> impl Future<Output = Result<Vec<ShoppingItem>, CoreError>> + Send;

    /// Let the model sort the list into store aisles
    fn categorize(
        &self,
        identity: &Identity,
    ) -> impl Future<Output = Result<Vec<ShoppingCategory>, CoreError>> + Send;
}
