use axum::extract::{Multipart, State};
use scantry_core::domain::inventory::{
    entities::Ingredient, ports::InventoryService, value_objects::ScanInventoryInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, image_upload::read_images, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ScanInventoryResponse {
    /// Ingredients that were appended; ones already on hand are skipped
    pub data: Vec<Ingredient>,
}

#[utoipa::path(
    post,
    path = "/scan",
    tag = "inventory",
    summary = "Scan inventory photos",
    description = "Identifies ingredients in one to five photos sent as multipart `image` fields and adds the new ones to the inventory.",
    request_body(content_type = "multipart/form-data", description = "One or more `image` fields"),
    responses(
        (status = 200, body = ScanInventoryResponse),
        (status = 400, description = "No photo or too many photos"),
        (status = 502, description = "The AI service failed")
    )
)]
pub async fn scan_inventory(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    mut multipart: Multipart,
) -> Result<Response<ScanInventoryResponse>, ApiError> {
    let images = read_images(&mut multipart).await?;

    let added = state
        .service
        .scan_inventory(&identity, ScanInventoryInput { images })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ScanInventoryResponse { data: added }))
}
