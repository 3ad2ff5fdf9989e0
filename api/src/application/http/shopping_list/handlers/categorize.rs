use axum::extract::State;
use scantry_core::domain::shopping_list::{
    entities::ShoppingCategory, ports::ShoppingListService,
};
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
pub struct CategorizeShoppingListResponse {
    pub data: Vec<ShoppingCategory>,
}

#[utoipa::path(
    post,
    path = "/categorize",
    tag = "shopping-list",
    summary = "Categorize shopping list",
    description = "Groups the list by store aisle. Items the model leaves out land in `Other`; the stored categories are updated.",
    responses(
        (status = 200, body = CategorizeShoppingListResponse),
        (status = 502, description = "The AI service failed")
    )
)]
pub async fn categorize(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<CategorizeShoppingListResponse>, ApiError> {
    let groups = state
        .service
        .categorize(&identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(CategorizeShoppingListResponse { data: groups }))
}
