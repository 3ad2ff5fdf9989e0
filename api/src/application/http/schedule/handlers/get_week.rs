use axum::extract::{Query, State};
use chrono::Utc;
use scantry_core::domain::schedule::{entities::ScheduleDay, ports::ScheduleService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        schedule::validators::WeekQuery,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetWeekResponse {
    pub data: Vec<ScheduleDay>,
}

#[utoipa::path(
    get,
    path = "/week",
    tag = "schedule",
    summary = "Get week",
    description = "Seven consecutive days starting at `start`, each with its meals in slot order.",
    params(WeekQuery),
    responses(
        (status = 200, body = GetWeekResponse),
        (status = 400, description = "Invalid start date")
    )
)]
pub async fn get_week(
    Query(query): Query<WeekQuery>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetWeekResponse>, ApiError> {
    let start = query.start.unwrap_or_else(|| Utc::now().date_naive());

    let week = state
        .service
        .get_week(&identity, start)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetWeekResponse { data: week }))
}
