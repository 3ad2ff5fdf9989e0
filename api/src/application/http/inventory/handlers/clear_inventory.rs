use axum::extract::State;
use scantry_core::domain::inventory::ports::InventoryService;
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
pub struct ClearInventoryResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "",
    tag = "inventory",
    summary = "Clear inventory",
    description = "Removes every ingredient from the household inventory.",
    responses(
        (status = 200, body = ClearInventoryResponse)
    )
)]
pub async fn clear_inventory(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<ClearInventoryResponse>, ApiError> {
    state
        .service
        .clear_inventory(&identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ClearInventoryResponse {
        message: "Inventory cleared".to_string(),
    }))
}
