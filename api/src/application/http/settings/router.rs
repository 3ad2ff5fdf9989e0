use super::handlers::{
    get_onboarding::{__path_get_onboarding, get_onboarding},
    get_settings::{__path_get_settings, get_settings},
    update_settings::{__path_update_settings, update_settings},
};
use crate::application::{auth::auth, http::server::app_state::AppState};
use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_settings, update_settings, get_onboarding))]
pub struct SettingsApiDoc;

pub fn settings_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/settings", state.args.server.root_path),
            get(get_settings).put(update_settings),
        )
        .route(
            &format!("{}/onboarding", state.args.server.root_path),
            get(get_onboarding),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
