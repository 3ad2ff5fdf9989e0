use axum::extract::State;
use scantry_core::domain::schedule::{entities::ScheduledMeal, ports::ScheduleService};
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
pub struct GetScheduleResponse {
    pub data: Vec<ScheduledMeal>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "schedule",
    summary = "Get schedule",
    description = "Every planned meal.",
    responses(
        (status = 200, body = GetScheduleResponse)
    )
)]
pub async fn get_schedule(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetScheduleResponse>, ApiError> {
    let schedule = state
        .service
        .get_schedule(&identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetScheduleResponse { data: schedule }))
}
