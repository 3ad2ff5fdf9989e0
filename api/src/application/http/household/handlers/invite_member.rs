use axum::extract::State;
use scantry_core::domain::household::{
    entities::Invitation, ports::HouseholdService, value_objects::InviteMemberInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        household::validators::InviteMemberValidator,
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
pub struct InviteMemberResponse {
    pub data: Invitation,
}

#[utoipa::path(
    post,
    path = "/invite",
    tag = "household",
    summary = "Invite member",
    description = "Maps another e-mail onto the caller's household. If that e-mail already belonged to another household it is moved, and the old household id is reported.",
    request_body = InviteMemberValidator,
    responses(
        (status = 200, body = InviteMemberResponse),
        (status = 400, description = "Invalid e-mail"),
        (status = 409, description = "Caller has no household or the registry is missing")
    )
)]
pub async fn invite_member(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<InviteMemberValidator>,
) -> Result<Response<InviteMemberResponse>, ApiError> {
    let invitation = state
        .service
        .invite_member(
            &identity,
            InviteMemberInput {
                email: payload.email,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(InviteMemberResponse { data: invitation }))
}
