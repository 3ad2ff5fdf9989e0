use axum::extract::State;
use scantry_core::domain::feedback::{entities::FeedbackEntry, ports::FeedbackService};
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
pub struct GetFeedbackResponse {
    pub data: Vec<FeedbackEntry>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "feedback",
    summary = "Get feedback",
    description = "Feedback submitted by the household, newest first.",
    responses(
        (status = 200, body = GetFeedbackResponse)
    )
)]
pub async fn get_feedback(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetFeedbackResponse>, ApiError> {
    let feedback = state
        .service
        .get_feedback(&identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetFeedbackResponse { data: feedback }))
}
