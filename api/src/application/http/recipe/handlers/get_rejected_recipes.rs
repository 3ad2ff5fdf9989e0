use axum::extract::State;
use scantry_core::domain::recipe::{entities::RejectedRecipe, ports::RecipeService};
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
pub struct GetRejectedRecipesResponse {
    pub data: Vec<RejectedRecipe>,
}

#[utoipa::path(
    get,
    path = "/rejected",
    tag = "recipe",
    summary = "Get rejected recipes",
    description = "Returns recipes the household turned down, newest first.",
    responses(
        (status = 200, body = GetRejectedRecipesResponse)
    )
)]
pub async fn get_rejected_recipes(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetRejectedRecipesResponse>, ApiError> {
    let rejected = state
        .service
        .get_rejected_recipes(&identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetRejectedRecipesResponse { data: rejected }))
}
