use tracing::instrument;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, remove_at, services::Service},
    document::{entities::DocumentName, ports::DocumentService},
    household::ports::HouseholdService,
    llm::{
        helpers::{non_blank, parse_llm_json},
        ports::LLMClient,
        prompts::categorize_shopping_list_prompt,
        schema::shopping_categories_schema,
    },
    shopping_list::{
        entities::{ShoppingCategory, ShoppingItem, SuggestedCategory, apply_categories},
        ports::ShoppingListService,
        value_objects::AddShoppingItemInput,
    },
    storage::ports::ObjectStoragePort,
};

impl<OS, LLM> ShoppingListService for Service<OS, LLM>
where
    OS: ObjectStoragePort,
    LLM: LLMClient,
{
    #[instrument(skip(self, identity), fields(identity = %identity.log_id()))]
    async fn get_shopping_list(&self, identity: &Identity) -> Result<Vec<ShoppingItem>, CoreError> {
        let household_id = self.resolve_household(identity).await?;

        Ok(self
            .load_document_or_default(&household_id, DocumentName::ShoppingList, Vec::new())
            .await)
    }

    #[instrument(skip(self, identity, input), fields(identity = %identity.log_id()))]
    async fn add_item(
        &self,
        identity: &Identity,
        input: AddShoppingItemInput,
    ) -> Result<Vec<ShoppingItem>, CoreError> {
        let name = non_blank(Some(input.name))
            .ok_or_else(|| CoreError::InvalidInput("item name cannot be empty".to_string()))?;
        let household_id = self.resolve_household(identity).await?;

        self.update_document(
            &household_id,
            DocumentName::ShoppingList,
            Vec::new,
            |items: &mut Vec<ShoppingItem>| {
                items.push(ShoppingItem::new(name));
                Ok(items.clone())
            },
        )
        .await
    }

    #[instrument(skip(self, identity), fields(identity = %identity.log_id()))]
    async fn toggle_item(&self, identity: &Identity, index: usize) -> Result<ShoppingItem, CoreError> {
        let household_id = self.resolve_household(identity).await?;

        self.update_document(
            &household_id,
            DocumentName::ShoppingList,
            Vec::new,
            |items: &mut Vec<ShoppingItem>| {
                let item = items.get_mut(index).ok_or_else(|| {
                    CoreError::NotFound(format!("shopping item #{index} does not exist"))
                })?;
                item.checked = !item.checked;
                Ok(item.clone())
            },
        )
        .await
    }

    #[instrument(skip(self, identity), fields(identity = %identity.log_id()))]
    async fn remove_item(&self, identity: &Identity, index: usize) -> Result<ShoppingItem, CoreError> {
        let household_id = self.resolve_household(identity).await?;

        self.update_document(
            &household_id,
            DocumentName::ShoppingList,
            Vec::new,
            |items: &mut Vec<ShoppingItem>| remove_at(items, index, "shopping item"),
        )
        .await
    }

    #[instrument(skip(self, identity), fields(identity = %identity.log_id()))]
    async fn clear_checked(&self, identity: &Identity) -> Result<Vec<ShoppingItem>, CoreError> {
        let household_id = self.resolve_household(identity).await?;

        self.update_document(
            &household_id,
            DocumentName::ShoppingList,
            Vec::new,
            |items: &mut Vec<ShoppingItem>| {
                items.retain(|item| !item.checked);
                Ok(items.clone())
            },
        )
        .await
    }

    #[instrument(skip(self, identity), fields(identity = %identity.log_id()))]
    async fn add_recipe_ingredients(
        &self,
        identity: &Identity,
        recipe_id: &str,
    ) -> Result<Vec<ShoppingItem>, CoreError> {
        let household_id = self.resolve_household(identity).await?;
        let recipe = self.find_recipe(&household_id, recipe_id).await?;

        self.update_document(
            &household_id,
            DocumentName::ShoppingList,
            Vec::new,
            |items: &mut Vec<ShoppingItem>| {
                items.extend(recipe.ingredients.into_iter().map(ShoppingItem::new));
                Ok(items.clone())
            },
        )
        .await
    }

    #[instrument(skip(self, identity), fields(identity = %identity.log_id()))]
    async fn categorize(&self, identity: &Identity) -> Result<Vec<ShoppingCategory>, CoreError> {
        let household_id = self.resolve_household(identity).await?;
        let items: Vec<ShoppingItem> = self
            .load_document_or_default(&household_id, DocumentName::ShoppingList, Vec::new())
            .await;
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let raw = self
            .llm_client
            .generate(
                categorize_shopping_list_prompt(&items),
                Vec::new(),
                shopping_categories_schema(),
            )
            .await?;
        let suggestions = parse_llm_json::<Vec<SuggestedCategory>>(&raw)?;

        // Items added or removed while the model was busy are kept as they are now
        self.update_document(
            &household_id,
            DocumentName::ShoppingList,
            Vec::new,
            |items: &mut Vec<ShoppingItem>| Ok(apply_categories(items, suggestions)),
        )
        .await
    }
}
