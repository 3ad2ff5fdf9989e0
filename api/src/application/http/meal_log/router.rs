use super::handlers::{
    analyze_meal::{__path_analyze_meal, analyze_meal},
    get_history::{__path_get_history, get_history},
    log_meal::{__path_log_meal, log_meal},
};
use crate::application::{
    auth::auth,
    http::server::{api_entities::image_upload::MAX_IMAGE_SIZE, app_state::AppState},
};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_history, log_meal, analyze_meal))]
pub struct MealLogApiDoc;

pub fn meal_log_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/history", state.args.server.root_path),
            get(get_history).post(log_meal),
        )
        .route(
            &format!("{}/history/analyze", state.args.server.root_path),
            post(analyze_meal).layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE + 64 * 1024)),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
