use super::handlers::{
    get_household::{__path_get_household, get_household},
    invite_member::{__path_invite_member, invite_member},
};
use crate::application::{auth::auth, http::server::app_state::AppState};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_household, invite_member))]
pub struct HouseholdApiDoc;

pub fn household_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/household", state.args.server.root_path),
            get(get_household),
        )
        .route(
            &format!("{}/household/invite", state.args.server.root_path),
            post(invite_member),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
