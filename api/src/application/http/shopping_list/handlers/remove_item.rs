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
pub struct RemoveShoppingItemResponse {
    pub data: ShoppingItem,
}

#[utoipa::path(
    delete,
    path = "/items/{index}",
    tag = "shopping-list",
    summary = "Remove shopping item",
    params(
        ("index" = usize, Path, description = "Zero-based position in the list"),
    ),
    responses(
        (status = 200, body = RemoveShoppingItemResponse),
        (status = 404, description = "No item at that position")
    )
)]
pub async fn remove_item(
    Path(index): Path<usize>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<RemoveShoppingItemResponse>, ApiError> {
    let removed = state
        .service
        .remove_item(&identity, index)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RemoveShoppingItemResponse { data: removed }))
}
