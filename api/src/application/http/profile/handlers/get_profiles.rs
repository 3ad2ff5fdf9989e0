use axum::extract::State;
use scantry_core::domain::profile::{entities::UserProfile, ports::ProfileService};
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
pub struct GetProfilesResponse {
    pub data: Vec<UserProfile>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "profile",
    summary = "Get profiles",
    description = "Family member profiles used when suggesting recipes. Defaults are returned until the household saves its own.",
    responses(
        (status = 200, body = GetProfilesResponse)
    )
)]
pub async fn get_profiles(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetProfilesResponse>, ApiError> {
    let profiles = state
        .service
        .get_profiles(&identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetProfilesResponse { data: profiles }))
}
