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
pub struct ToggleShoppingItemResponse {
    pub data: ShoppingItem,
}

#[utoipa::path(
    patch,
    path = "/items/{index}/toggle",
    tag = "shopping-list",
    summary = "Toggle shopping item",
    description = "Flips the checked state of the item at the given position.",
    params(
        ("index" = usize, Path, description = "Zero-based position in the list"),
    ),
    responses(
        (status = 200, body = ToggleShoppingItemResponse),
        (status = 404, description = "No item at that position")
    )
)]
pub async fn toggle_item(
    Path(index): Path<usize>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<ToggleShoppingItemResponse>, ApiError> {
    let item = state
        .service
        .toggle_item(&identity, index)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ToggleShoppingItemResponse { data: item }))
}
