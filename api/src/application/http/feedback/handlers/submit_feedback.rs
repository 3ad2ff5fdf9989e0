use axum::extract::State;
use scantry_core::domain::feedback::{
    entities::FeedbackEntry, ports::FeedbackService, value_objects::SubmitFeedbackInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        feedback::validators::SubmitFeedbackValidator,
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
pub struct SubmitFeedbackResponse {
    pub data: FeedbackEntry,
}

#[utoipa::path(
    post,
    path = "",
    tag = "feedback",
    summary = "Submit feedback",
    request_body = SubmitFeedbackValidator,
    responses(
        (status = 201, body = SubmitFeedbackResponse),
        (status = 400, description = "Message is blank")
    )
)]
pub async fn submit_feedback(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<SubmitFeedbackValidator>,
) -> Result<Response<SubmitFeedbackResponse>, ApiError> {
    let entry = state
        .service
        .submit_feedback(
            &identity,
            SubmitFeedbackInput {
                kind: payload.kind,
                message: payload.message,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(SubmitFeedbackResponse { data: entry }))
}
