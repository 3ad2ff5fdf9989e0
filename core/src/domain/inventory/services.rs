use std::collections::HashSet;

use tracing::instrument;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, remove_at, services::Service},
    document::{entities::DocumentName, ports::DocumentService},
    household::ports::HouseholdService,
    inventory::{
        entities::{Ingredient, RecognizedIngredient},
        ports::InventoryService,
        value_objects::{AddIngredientInput, MAX_SCAN_IMAGES, ScanInventoryInput},
    },
    llm::{
        helpers::{non_blank, parse_llm_json},
        ports::LLMClient,
        prompts::identify_ingredients_prompt,
        schema::ingredients_schema,
    },
    storage::ports::ObjectStoragePort,
};

impl<OS, LLM> InventoryService for Service<OS, LLM>
where
    OS: ObjectStoragePort,
    LLM: LLMClient,
{
    #[instrument(skip(self, identity), fields(identity = %identity.log_id()))]
    async fn get_inventory(&self, identity: &Identity) -> Result<Vec<Ingredient>, CoreError> {
        let household_id = self.resolve_household(identity).await?;

        Ok(self
            .load_document_or_default(&household_id, DocumentName::Inventory, Vec::new())
            .await)
    }

    #[instrument(skip(self, identity, input), fields(identity = %identity.log_id()))]
    async fn add_ingredient(
        &self,
        identity: &Identity,
        input: AddIngredientInput,
    ) -> Result<Ingredient, CoreError> {
        let name = non_blank(Some(input.name)).ok_or_else(|| {
            CoreError::InvalidInput("ingredient name cannot be empty".to_string())
        })?;
        let household_id = self.resolve_household(identity).await?;
        let ingredient = Ingredient::manual(name, input.quantity);

        self.update_document(
            &household_id,
            DocumentName::Inventory,
            Vec::new,
            |items: &mut Vec<Ingredient>| {
                items.push(ingredient.clone());
                Ok(())
            },
        )
        .await?;

        Ok(ingredient)
    }

    #[instrument(skip(self, identity, input), fields(identity = %identity.log_id(), photos = input.images.len()))]
    async fn scan_inventory(
        &self,
        identity: &Identity,
        input: ScanInventoryInput,
    ) -> Result<Vec<Ingredient>, CoreError> {
        if input.images.is_empty() || input.images.len() > MAX_SCAN_IMAGES {
            return Err(CoreError::InvalidInput(format!(
                "between 1 and {MAX_SCAN_IMAGES} photos are required, got {}",
                input.images.len()
            )));
        }

        let household_id = self.resolve_household(identity).await?;
        let current: Vec<Ingredient> = self
            .load_document_or_default(&household_id, DocumentName::Inventory, Vec::new())
            .await;

        // 1. Ask the model, holding no lock while it thinks
        let prompt = identify_ingredients_prompt(input.images.len(), &current);
        let raw = self
            .llm_client
            .generate(prompt, input.images, ingredients_schema())
            .await?;
        let recognized: Vec<Ingredient> = parse_llm_json::<Vec<RecognizedIngredient>>(&raw)?
            .into_iter()
            .filter_map(RecognizedIngredient::into_ingredient)
            .collect();

        // 2. Merge against the inventory as it is now
        let added = self
            .update_document(
                &household_id,
                DocumentName::Inventory,
                Vec::new,
                |items: &mut Vec<Ingredient>| {
                    let mut known: HashSet<String> =
                        items.iter().map(Ingredient::match_key).collect();
                    let added: Vec<Ingredient> = recognized
                        .into_iter()
                        .filter(|ingredient| known.insert(ingredient.match_key()))
                        .collect();
                    items.extend(added.iter().cloned());
                    Ok(added)
                },
            )
            .await?;

        tracing::info!(added = added.len(), "Inventory scan merged");

        Ok(added)
    }

    #[instrument(skip(self, identity), fields(identity = %identity.log_id()))]
    async fn remove_ingredient(
        &self,
        identity: &Identity,
        index: usize,
    ) -> Result<Ingredient, CoreError> {
        let household_id = self.resolve_household(identity).await?;

        self.update_document(
            &household_id,
            DocumentName::Inventory,
            Vec::new,
            |items: &mut Vec<Ingredient>| remove_at(items, index, "ingredient"),
        )
        .await
    }

    #[instrument(skip(self, identity), fields(identity = %identity.log_id()))]
    async fn clear_inventory(&self, identity: &Identity) -> Result<(), CoreError> {
        let household_id = self.resolve_household(identity).await?;

        self.save_document(&household_id, DocumentName::Inventory, &Vec::<Ingredient>::new())
            .await
    }
}
