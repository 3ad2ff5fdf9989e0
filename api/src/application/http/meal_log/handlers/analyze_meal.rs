use axum::extract::{Multipart, State};
use scantry_core::domain::meal_log::{
    entities::SuperGutAnalysis, ports::MealLogService, value_objects::AnalyzeMealInput,
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
pub struct AnalyzeMealResponse {
    pub data: SuperGutAnalysis,
}

#[utoipa::path(
    post,
    path = "/analyze",
    tag = "history",
    summary = "Analyze meal photo",
    description = "Estimates the net carbs of a plated meal from one multipart `image` field. Nothing is stored.",
    request_body(content_type = "multipart/form-data", description = "A single `image` field"),
    responses(
        (status = 200, body = AnalyzeMealResponse),
        (status = 400, description = "Missing image"),
        (status = 502, description = "The AI service failed")
    )
)]
pub async fn analyze_meal(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    mut multipart: Multipart,
) -> Result<Response<AnalyzeMealResponse>, ApiError> {
    let image = read_images(&mut multipart)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;

    let analysis = state
        .service
        .analyze_meal(&identity, AnalyzeMealInput { image })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeMealResponse { data: analysis }))
}
