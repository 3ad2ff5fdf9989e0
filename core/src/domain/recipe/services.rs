use chrono::Utc;
use tracing::instrument;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, services::Service},
    document::{entities::DocumentName, ports::DocumentService},
    household::{entities::HouseholdId, ports::HouseholdService},
    inventory::entities::Ingredient,
    llm::{
        errors::AiGatewayError,
        helpers::{non_blank, parse_llm_json},
        ports::LLMClient,
        prompts::{RECIPES_PER_PLAN, meal_plan_prompt},
        schema::recipes_schema,
    },
    meal_log::entities::MealLog,
    recipe::{
        entities::{Recipe, RejectedRecipe, SuggestedRecipe, validate_suggestions},
        ports::RecipeService,
        value_objects::{CookRecipeInput, DEFAULT_RATING, RejectRecipeInput},
    },
    schedule::entities::MealType,
    storage::ports::ObjectStoragePort,
};

impl<OS, LLM> Service<OS, LLM>
where
    OS: ObjectStoragePort,
    LLM: LLMClient,
{
    /// A current suggestion, read strictly so a storage failure is not reported as "not found".
    pub(crate) async fn find_recipe(
        &self,
        household_id: &HouseholdId,
        recipe_id: &str,
    ) -> Result<Recipe, CoreError> {
        self.load_document::<Vec<Recipe>>(household_id, DocumentName::Recipes)
            .await?
            .unwrap_or_else(Vec::new)
            .into_iter()
            .find(|recipe| recipe.id == recipe_id)
            .ok_or_else(|| CoreError::NotFound(format!("recipe '{recipe_id}' not found")))
    }
}

impl<OS, LLM> RecipeService for Service<OS, LLM>
where
    OS: ObjectStoragePort,
    LLM: LLMClient,
{
    #[instrument(skip(self, identity), fields(identity = %identity.log_id()))]
    async fn get_recipes(&self, identity: &Identity) -> Result<Vec<Recipe>, CoreError> {
        let household_id = self.resolve_household(identity).await?;

        Ok(self
            .load_document_or_default(&household_id, DocumentName::Recipes, Vec::new())
            .await)
    }

    #[instrument(skip(self, identity), fields(identity = %identity.log_id()))]
    async fn get_rejected_recipes(
        &self,
        identity: &Identity,
    ) -> Result<Vec<RejectedRecipe>, CoreError> {
        let household_id = self.resolve_household(identity).await?;

        Ok(self
            .load_document_or_default(&household_id, DocumentName::Rejected, Vec::new())
            .await)
    }

    #[instrument(skip(self, identity), fields(identity = %identity.log_id()))]
    async fn generate_recipes(&self, identity: &Identity) -> Result<Vec<Recipe>, CoreError> {
        let household_id = self.resolve_household(identity).await?;

        // 1. Gather what the planner needs to know
        let (inventory, profiles, rejected) = futures::join!(
            self.load_document_or_default::<Vec<Ingredient>>(
                &household_id,
                DocumentName::Inventory,
                Vec::new()
            ),
            self.household_profiles(&household_id),
            self.load_document_or_default::<Vec<RejectedRecipe>>(
                &household_id,
                DocumentName::Rejected,
                Vec::new()
            ),
        );
        if inventory.is_empty() {
            return Err(CoreError::InvalidInput(
                "add ingredients to the inventory before planning meals".to_string(),
            ));
        }
        let rejected_titles: Vec<String> =
            rejected.into_iter().map(|recipe| recipe.title).collect();

        // 2. Ask the model
        let prompt = meal_plan_prompt(&inventory, &profiles, &rejected_titles);
        let raw = self
            .llm_client
            .generate(prompt, Vec::new(), recipes_schema())
            .await?;

        // 3. Keep only recipes that can actually be cooked
        let mut recipes = validate_suggestions(parse_llm_json::<Vec<SuggestedRecipe>>(&raw)?);
        if recipes.is_empty() {
            return Err(AiGatewayError::SchemaMismatch(
                "no complete recipe in the model response".to_string(),
            )
            .into());
        }
        recipes.truncate(RECIPES_PER_PLAN);

        self.save_document(&household_id, DocumentName::Recipes, &recipes)
            .await?;

        tracing::info!(recipes = recipes.len(), "Meal plan generated");

        Ok(recipes)
    }

    #[instrument(skip(self, identity, input), fields(identity = %identity.log_id(), recipe_id = %input.recipe_id))]
    async fn reject_recipe(
        &self,
        identity: &Identity,
        input: RejectRecipeInput,
    ) -> Result<RejectedRecipe, CoreError> {
        let household_id = self.resolve_household(identity).await?;
        let recipe = self.find_recipe(&household_id, &input.recipe_id).await?;
        let rejected = RejectedRecipe::new(&recipe, input.reason);

        self.update_document(
            &household_id,
            DocumentName::Rejected,
            Vec::new,
            |entries: &mut Vec<RejectedRecipe>| {
                entries.insert(0, rejected.clone());
                Ok(())
            },
        )
        .await?;

        self.update_document(
            &household_id,
            DocumentName::Recipes,
            Vec::new,
            |recipes: &mut Vec<Recipe>| {
                recipes.retain(|recipe| recipe.id != input.recipe_id);
                Ok(())
            },
        )
        .await?;

        Ok(rejected)
    }

    #[instrument(skip(self, identity, input), fields(identity = %identity.log_id(), recipe_id = %input.recipe_id))]
    async fn cook_recipe(
        &self,
        identity: &Identity,
        input: CookRecipeInput,
    ) -> Result<MealLog, CoreError> {
        let rating = input.rating.unwrap_or(DEFAULT_RATING);
        if !(1..=5).contains(&rating) {
            return Err(CoreError::InvalidInput(format!(
                "rating must be between 1 and 5, got {rating}"
            )));
        }

        let household_id = self.resolve_household(identity).await?;
        let recipe = self.find_recipe(&household_id, &input.recipe_id).await?;

        let log = MealLog {
            slot: Some(MealType::Dinner),
            recipe_title: Some(recipe.title),
            rating: Some(rating),
            notes: non_blank(input.notes),
            ..MealLog::new(Utc::now().date_naive())
        };

        self.update_document(
            &household_id,
            DocumentName::History,
            Vec::new,
            |history: &mut Vec<MealLog>| {
                history.insert(0, log.clone());
                Ok(())
            },
        )
        .await?;

        Ok(log)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{
        domain::inventory::{ports::InventoryService, value_objects::AddIngredientInput},
        test_support::{TestService, identity, test_service},
    };

    fn recipes_json() -> String {
        json!([
            {
                "id": "r1", "title": "Shakshuka", "description": "Eggs in sauce",
                "ingredients": ["eggs", "tomatoes"], "instructions": ["simmer", "crack eggs"],
                "tags": ["Low Carb"], "suitability": { "wife": true, "son": true, "dad": true },
                "netCarbs": 9, "reheatFriendly": true
            },
            {
                "id": "r2", "title": "Frittata", "description": "",
                "ingredients": ["eggs"], "instructions": ["bake"],
                "tags": [], "suitability": { "wife": true, "son": false, "dad": true },
                "reheatFriendly": true
            },
            {
                "id": "r3", "title": "Steak & Greens", "description": "",
                "ingredients": ["steak", "kale"], "instructions": ["sear"],
                "tags": [], "suitability": { "wife": true, "son": true, "dad": true },
                "reheatFriendly": false
            }
        ])
        .to_string()
    }

    async fn service_with_inventory() -> TestService {
        let service = test_service();
        service
            .add_ingredient(
                &identity("a@x.com"),
                AddIngredientInput {
                    name: "Eggs".to_string(),
                    quantity: Some("12".to_string()),
                },
            )
            .await
            .unwrap();
        service
    }

    #[tokio::test]
    async fn generation_needs_an_inventory() {
        let service = test_service();

        let result = service.generate_recipes(&identity("a@x.com")).await;

        assert!(matches!(result, Err(CoreError::InvalidInput(_))));
        assert!(service.llm_client.calls().is_empty());
    }

    #[tokio::test]
    async fn generated_recipes_replace_the_previous_plan() {
        let service = service_with_inventory().await;
        let caller = identity("a@x.com");
        service.llm_client.respond(recipes_json());

        let recipes = service.generate_recipes(&caller).await.unwrap();

        assert_eq!(recipes.len(), 3);
        assert_eq!(service.get_recipes(&caller).await.unwrap(), recipes);
        let prompt = &service.llm_client.calls()[0].prompt;
        assert!(prompt.contains("Eggs (12)"));
        assert!(prompt.contains("Noel (Me)"));
    }

    #[tokio::test]
    async fn failed_generation_keeps_the_previous_plan() {
        let service = service_with_inventory().await;
        let caller = identity("a@x.com");
        service.llm_client.respond(recipes_json());
        let before = service.generate_recipes(&caller).await.unwrap();
        service.llm_client.respond("[]");
        service
            .llm_client
            .fail(AiGatewayError::Request("timeout".to_string()));

        for _ in 0..2 {
            assert!(matches!(
                service.generate_recipes(&caller).await,
                Err(CoreError::AiGateway(_))
            ));
        }
        assert_eq!(service.get_recipes(&caller).await.unwrap(), before);
    }

    #[tokio::test]
    async fn rejected_recipes_move_and_are_avoided() {
        let service = service_with_inventory().await;
        let caller = identity("a@x.com");
        service.llm_client.respond(recipes_json());
        service.generate_recipes(&caller).await.unwrap();

        let rejected = service
            .reject_recipe(
                &caller,
                RejectRecipeInput {
                    recipe_id: "r2".to_string(),
                    reason: Some("Son hates it".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(rejected.title, "Frittata");
        let remaining = service.get_recipes(&caller).await.unwrap();
        assert!(remaining.iter().all(|recipe| recipe.id != "r2"));
        assert_eq!(
            service.get_rejected_recipes(&caller).await.unwrap(),
            vec![rejected]
        );

        service.llm_client.respond(recipes_json());
        service.generate_recipes(&caller).await.unwrap();
        assert!(service.llm_client.calls()[1].prompt.contains("Frittata"));

        assert!(matches!(
            service
                .reject_recipe(
                    &caller,
                    RejectRecipeInput {
                        recipe_id: "missing".to_string(),
                        reason: None,
                    },
                )
                .await,
            Err(CoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn cooking_logs_a_meal() {
        let service = service_with_inventory().await;
        let caller = identity("a@x.com");
        service.llm_client.respond(recipes_json());
        service.generate_recipes(&caller).await.unwrap();

        let log = service
            .cook_recipe(
                &caller,
                CookRecipeInput {
                    recipe_id: "r1".to_string(),
                    rating: None,
                    notes: Some("More cumin".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(log.recipe_title.as_deref(), Some("Shakshuka"));
        assert_eq!(log.rating, Some(DEFAULT_RATING));

        let household_id = service.resolve_household(&caller).await.unwrap();
        let history = service
            .object_storage
            .json(&format!("{household_id}/history.json"))
            .unwrap();
        assert_eq!(history[0]["notes"], json!("More cumin"));

        assert!(matches!(
            service
                .cook_recipe(
                    &caller,
                    CookRecipeInput {
                        recipe_id: "r1".to_string(),
                        rating: Some(9),
                        notes: None,
                    },
                )
                .await,
            Err(CoreError::InvalidInput(_))
        ));
    }
}
