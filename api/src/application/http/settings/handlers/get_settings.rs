use axum::extract::State;
use scantry_core::domain::settings::{entities::HouseholdSettings, ports::SettingsService};
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
pub struct GetSettingsResponse {
    pub data: HouseholdSettings,
}

#[utoipa::path(
    get,
    path = "/settings",
    tag = "settings",
    summary = "Get settings",
    responses(
        (status = 200, body = GetSettingsResponse)
    )
)]
pub async fn get_settings(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetSettingsResponse>, ApiError> {
    let settings = state
        .service
        .get_settings(&identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetSettingsResponse { data: settings }))
}
