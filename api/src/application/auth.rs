use axum::{
    RequestPartsExt,
    extract::{FromRef, FromRequestParts, Request, State},
    http::{StatusCode, request::Parts},
    middleware::Next,
    response::Response,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use scantry_core::{
    domain::{
        authentication::{ports::IdentityVerifier, value_objects::Identity},
        common::entities::app_errors::CoreError,
    },
    infrastructure::identity::GoogleIdTokenVerifier,
};
use tracing::{debug, error};

use super::http::server::{api_entities::api_error::ApiError, app_state::AppState};

/// How callers prove who they are.
#[derive(Clone)]
pub enum Authenticator {
    /// Google ID token in `Authorization: Bearer`.
    Google(GoogleIdTokenVerifier),
    /// E-mail header injected by an authenticating reverse proxy.
    TrustedHeader(String),
}

impl Authenticator {
    async fn authenticate(&self, parts: &mut Parts) -> Result<Option<Identity>, CoreError> {
        match self {
            Authenticator::Google(verifier) => {
                let Ok(TypedHeader(Authorization(bearer))) = parts
                    .extract::<TypedHeader<Authorization<Bearer>>>()
                    .await
                else {
                    return Ok(None);
                };

                verifier.verify(bearer.token()).await.map(Some)
            }
            Authenticator::TrustedHeader(header) => {
                let email = parts.headers.get(header).and_then(|h| h.to_str().ok());

                match email {
                    Some(email) => Identity::from_email(Some(email)).map(Some),
                    None => Ok(None),
                }
            }
        }
    }
}

/// Resolves the caller and stores the [`Identity`] in the request extensions.
/// Requests without valid credentials continue without one; handlers that
/// need a caller reject them through [`RequiredIdentity`].
pub async fn auth(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let (mut parts, body) = req.into_parts();

    match state.authenticator.authenticate(&mut parts).await {
        Ok(Some(identity)) => {
            parts.extensions.insert(identity);
        }
        Ok(None) => {}
        Err(CoreError::Unauthenticated) => debug!("rejected credentials"),
        Err(e) => {
            error!("failed to verify credentials: {}", e);
            return Err(StatusCode::SERVICE_UNAVAILABLE);
        }
    }

    Ok(next.run(Request::from_parts(parts, body)).await)
}

pub struct RequiredIdentity(pub Identity);

impl<S> FromRequestParts<S> for RequiredIdentity
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(RequiredIdentity)
            .ok_or_else(|| ApiError::Unauthorized("Authentication required".to_string()))
    }
}
