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
pub struct ClearCheckedResponse {
    /// Items still unchecked
    pub data: Vec<ShoppingItem>,
}

#[utoipa::path(
    delete,
    path = "/checked",
    tag = "shopping-list",
    summary = "Clear checked items",
    responses(
        (status = 200, body = ClearCheckedResponse)
    )
)]
pub async fn clear_checked(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<ClearCheckedResponse>, ApiError> {
    let remaining = state
        .service
        .clear_checked(&identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ClearCheckedResponse { data: remaining }))
}
