use axum::extract::State;
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
pub struct GetInventoryResponse {
    pub data: Vec<Ingredient>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "inventory",
    summary = "Get inventory",
    description = "Lists the ingredients the household has on hand.",
    responses(
        (status = 200, body = GetInventoryResponse)
    )
)]
pub async fn get_inventory(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetInventoryResponse>, ApiError> {
    let inventory = state
        .service
        .get_inventory(&identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetInventoryResponse { data: inventory }))
}
