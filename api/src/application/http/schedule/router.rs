use super::handlers::{
    get_schedule::{__path_get_schedule, get_schedule},
    get_week::{__path_get_week, get_week},
    remove_meal::{__path_remove_meal, remove_meal},
    schedule_meal::{__path_schedule_meal, schedule_meal},
};
use crate::application::{auth::auth, http::server::app_state::AppState};
use axum::{
    Router, middleware,
    routing::{delete, get},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_schedule, get_week, schedule_meal, remove_meal))]
pub struct ScheduleApiDoc;

pub fn schedule_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/schedule", state.args.server.root_path),
            get(get_schedule).put(schedule_meal),
        )
        .route(
            &format!("{}/schedule/week", state.args.server.root_path),
            get(get_week),
        )
        .route(
            &format!("{}/schedule/{{date}}", state.args.server.root_path),
            delete(remove_meal),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
