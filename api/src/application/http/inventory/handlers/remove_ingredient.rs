use axum::extract::{Path, State};
use scantry_core::domain::inventory::{entities::Ingredient, ports::InventoryService};
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
pub struct RemoveIngredientResponse {
    pub data: Ingredient,
}

#[utoipa::path(
    delete,
    path = "/items/{index}",
    tag = "inventory",
    summary = "Remove ingredient",
    description = "Removes the ingredient at the given position and returns it.",
    params(
        ("index" = usize, Path, description = "Zero-based position in the inventory"),
    ),
    responses(
        (status = 200, body = RemoveIngredientResponse),
        (status = 404, description = "No ingredient at that position")
    )
)]
pub async fn remove_ingredient(
    Path(index): Path<usize>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<RemoveIngredientResponse>, ApiError> {
    let removed = state
        .service
        .remove_ingredient(&identity, index)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RemoveIngredientResponse { data: removed }))
}
