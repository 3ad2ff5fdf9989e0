use axum::extract::{Path, State};
use scantry_core::domain::shopping_list::{entities::ShoppingItem, ports::ShoppingListService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AddRecipeIngredientsResponse {
    pub data: Vec<ShoppingItem>,
}

#[utoipa::path(
    post,
    path = "/from-recipe/{recipe_id}",
    tag = "shopping-list",
    summary = "Add recipe ingredients",
    description = "Appends every ingredient of a suggested recipe to the shopping list.",
    params(
        ("recipe_id" = String, Path, description = "Recipe id"),
    ),
    responses(
        (status = 200, body = AddRecipeIngredientsResponse),
        (status = 404, description = "Recipe not found")
    )
)]
pub async fn add_recipe_ingredients(
    Path(recipe_id): Path<String>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<AddRecipeIngredientsResponse>, ApiError> {
    let items = state
        .service
        .add_recipe_ingredients(&identity, &recipe_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AddRecipeIngredientsResponse { data: items }))
}
