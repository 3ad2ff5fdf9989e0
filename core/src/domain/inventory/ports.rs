use std::future::Future;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    inventory::{
        entities::Ingredient,
        value_objects::{AddIngredientInput, ScanInventoryInput},
    },
};

pub trait InventoryService: Send + Sync {
    fn get_inventory(
        &self,
        identity: &Identity,
    ) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    fn add_ingredient(
        &self,
        identity: &Identity,
        input: AddIngredientInput,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;

    /// Identify ingredients in the photos and append the ones not yet in the
    /// inventory. Returns only the appended items.
    fn scan_inventory(
        &self,
        identity: &Identity,
        input: ScanInventoryInput,
    ) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    /// Returns the removed item
    fn remove_ingredient(
        &self,
        identity: &Identity,
        index: usize,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;

    fn clear_inventory(
        &self,
        identity: &Identity,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
