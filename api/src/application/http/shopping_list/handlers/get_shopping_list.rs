use axum::extract::State;
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
pub struct GetShoppingListResponse {
    pub data: Vec<ShoppingItem>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "shopping-list",
    summary = "Get shopping list",
    responses(
        (status = 200, body = GetShoppingListResponse)
    )
)]
pub async fn get_shopping_list(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetShoppingListResponse>, ApiError> {
    let items = state
        .service
        .get_shopping_list(&identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetShoppingListResponse { data: items }))
}
