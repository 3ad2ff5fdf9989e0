use axum::extract::State;
use scantry_core::domain::schedule::{
    entities::ScheduledMeal, ports::ScheduleService, value_objects::ScheduleMealInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        schedule::validators::ScheduleMealValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ScheduleMealResponse {
    pub data: ScheduledMeal,
}

#[utoipa::path(
    put,
    path = "",
    tag = "schedule",
    summary = "Schedule meal",
    description = "Plans a recipe for a date and slot, replacing whatever was planned there.",
    request_body = ScheduleMealValidator,
    responses(
        (status = 200, body = ScheduleMealResponse),
        (status = 404, description = "Recipe not found and no title given")
    )
)]
pub async fn schedule_meal(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<ScheduleMealValidator>,
) -> Result<Response<ScheduleMealResponse>, ApiError> {
    let meal = state
        .service
        .schedule_meal(
            &identity,
            ScheduleMealInput {
                date: payload.date,
                slot: payload.slot,
                recipe_id: payload.recipe_id,
                recipe_title: payload.recipe_title,
                attendees: payload.attendees,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ScheduleMealResponse { data: meal }))
}
