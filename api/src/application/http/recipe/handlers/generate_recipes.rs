use axum::extract::State;
use scantry_core::domain::recipe::{entities::Recipe, ports::RecipeService};
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
pub struct GenerateRecipesResponse {
    pub data: Vec<Recipe>,
}

#[utoipa::path(
    post,
    path = "/generate",
    tag = "recipe",
    summary = "Generate recipes",
    description = "Asks the model for three dinners built from the inventory and the household profiles. The new suggestions replace the current ones; on failure nothing changes.",
    responses(
        (status = 200, body = GenerateRecipesResponse),
        (status = 502, description = "The AI service failed")
    )
)]
pub async fn generate_recipes(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GenerateRecipesResponse>, ApiError> {
    let recipes = state
        .service
        .generate_recipes(&identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GenerateRecipesResponse { data: recipes }))
}
