use axum::extract::State;
use scantry_core::domain::settings::{entities::HouseholdSettings, ports::SettingsService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
        settings::validators::UpdateSettingsValidator,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateSettingsResponse {
    pub data: HouseholdSettings,
}

#[utoipa::path(
    put,
    path = "/settings",
    tag = "settings",
    summary = "Update onboarding settings",
    request_body = UpdateSettingsValidator,
    responses(
        (status = 200, body = UpdateSettingsResponse)
    )
)]
pub async fn update_settings(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateSettingsValidator>,
) -> Result<Response<UpdateSettingsResponse>, ApiError> {
    let settings = state
        .service
        .update_settings(&identity, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateSettingsResponse { data: settings }))
}
