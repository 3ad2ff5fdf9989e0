use axum::extract::{Path, State};
use scantry_core::domain::{
    meal_log::entities::MealLog,
    recipe::{ports::RecipeService, value_objects::CookRecipeInput},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        recipe::validators::CookRecipeValidator,
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
pub struct CookRecipeResponse {
    pub data: MealLog,
}

#[utoipa::path(
    post,
    path = "/{recipe_id}/cook",
    tag = "recipe",
    summary = "Mark recipe cooked",
    description = "Records tonight's dinner in the meal history with an optional rating and notes.",
    params(
        ("recipe_id" = String, Path, description = "Recipe id"),
    ),
    request_body = CookRecipeValidator,
    responses(
        (status = 201, body = CookRecipeResponse),
        (status = 400, description = "Rating out of range"),
        (status = 404, description = "Recipe not found")
    )
)]
pub async fn cook_recipe(
    Path(recipe_id): Path<String>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CookRecipeValidator>,
) -> Result<Response<CookRecipeResponse>, ApiError> {
    let entry = state
        .service
        .cook_recipe(
            &identity,
            CookRecipeInput {
                recipe_id,
                rating: payload.rating,
                notes: payload.notes,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CookRecipeResponse { data: entry }))
}
