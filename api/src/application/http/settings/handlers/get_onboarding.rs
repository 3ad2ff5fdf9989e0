use axum::extract::State;
use scantry_core::domain::settings::{entities::OnboardingStatus, ports::SettingsService};
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
pub struct GetOnboardingResponse {
    pub data: OnboardingStatus,
}

#[utoipa::path(
    get,
    path = "/onboarding",
    tag = "settings",
    summary = "Get onboarding status",
    description = "Checklist for new households: stock the inventory, plan a meal, invite a member.",
    responses(
        (status = 200, body = GetOnboardingResponse)
    )
)]
pub async fn get_onboarding(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetOnboardingResponse>, ApiError> {
    let status = state
        .service
        .get_onboarding(&identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetOnboardingResponse { data: status }))
}
