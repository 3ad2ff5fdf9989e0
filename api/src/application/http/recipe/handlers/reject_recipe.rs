use axum::extract::{Path, State};
use scantry_core::domain::recipe::{
    entities::RejectedRecipe, ports::RecipeService, value_objects::RejectRecipeInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        recipe::validators::RejectRecipeValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RejectRecipeResponse {
    pub data: RejectedRecipe,
}

#[utoipa::path(
    post,
    path = "/{recipe_id}/reject",
    tag = "recipe",
    summary = "Reject recipe",
    description = "Moves a suggestion to the rejected list so future suggestions avoid it.",
    params(
        ("recipe_id" = String, Path, description = "Recipe id"),
    ),
    request_body = RejectRecipeValidator,
    responses(
        (status = 200, body = RejectRecipeResponse),
        (status = 404, description = "Recipe not found")
    )
)]
pub async fn reject_recipe(
    Path(recipe_id): Path<String>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<RejectRecipeValidator>,
) -> Result<Response<RejectRecipeResponse>, ApiError> {
    let rejected = state
        .service
        .reject_recipe(
            &identity,
            RejectRecipeInput {
                recipe_id,
                reason: payload.reason,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RejectRecipeResponse { data: rejected }))
}
