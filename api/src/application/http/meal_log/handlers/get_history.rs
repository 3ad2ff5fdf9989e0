use axum::extract::State;
use scantry_core::domain::meal_log::{entities::MealLog, ports::MealLogService};
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
pub struct GetHistoryResponse {
    pub data: Vec<MealLog>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "history",
    summary = "Get meal history",
    description = "Meals the household has eaten, newest first.",
    responses(
        (status = 200, body = GetHistoryResponse)
    )
)]
pub async fn get_history(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetHistoryResponse>, ApiError> {
    let history = state
        .service
        .get_history(&identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetHistoryResponse { data: history }))
}
