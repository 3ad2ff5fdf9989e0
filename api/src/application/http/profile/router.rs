use super::handlers::{
    get_profiles::{__path_get_profiles, get_profiles},
    update_profiles::{__path_update_profiles, update_profiles},
};
use crate::application::{auth::auth, http::server::app_state::AppState};
use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_profiles, update_profiles))]
pub struct ProfileApiDoc;

pub fn profile_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/profiles", state.args.server.root_path),
            get(get_profiles).put(update_profiles),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
