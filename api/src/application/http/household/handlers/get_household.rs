use axum::extract::State;
use scantry_core::domain::household::{entities::Household, ports::HouseholdService};
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
pub struct GetHouseholdResponse {
    pub data: Household,
}

#[utoipa::path(
    get,
    path = "",
    tag = "household",
    summary = "Get household",
    description = "Returns the caller's household and its members. A household is created the first time an identity is seen.",
    responses(
        (status = 200, body = GetHouseholdResponse),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn get_household(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetHouseholdResponse>, ApiError> {
    let household = state
        .service
        .get_household(&identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetHouseholdResponse { data: household }))
}
