use axum::extract::State;
use scantry_core::domain::profile::{entities::UserProfile, ports::ProfileService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        profile::validators::UpdateProfilesValidator,
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
pub struct UpdateProfilesResponse {
    pub data: Vec<UserProfile>,
}

#[utoipa::path(
    put,
    path = "",
    tag = "profile",
    summary = "Replace profiles",
    request_body = UpdateProfilesValidator,
    responses(
        (status = 200, body = UpdateProfilesResponse),
        (status = 400, description = "Blank name or duplicate id")
    )
)]
pub async fn update_profiles(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateProfilesValidator>,
) -> Result<Response<UpdateProfilesResponse>, ApiError> {
    let profiles = payload.profiles.into_iter().map(UserProfile::from).collect();

    let saved = state
        .service
        .update_profiles(&identity, profiles)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateProfilesResponse { data: saved }))
}
