use axum::extract::State;
use scantry_core::domain::meal_log::{
    entities::MealLog, ports::MealLogService, value_objects::LogMealInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        meal_log::validators::LogMealValidator,
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
pub struct LogMealResponse {
    pub data: MealLog,
}

#[utoipa::path(
    post,
    path = "",
    tag = "history",
    summary = "Log meal",
    description = "Records a meal that was eaten. A title or a description is required.",
    request_body = LogMealValidator,
    responses(
        (status = 201, body = LogMealResponse),
        (status = 400, description = "Neither title nor description given")
    )
)]
pub async fn log_meal(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<LogMealValidator>,
) -> Result<Response<LogMealResponse>, ApiError> {
    let entry = state
        .service
        .log_meal(
            &identity,
            LogMealInput {
                date: payload.date,
                slot: payload.slot,
                recipe_title: payload.recipe_title,
                description: payload.description,
                attendees: payload.attendees,
                analysis: payload.analysis,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(LogMealResponse { data: entry }))
}
