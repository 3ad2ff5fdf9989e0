use super::handlers::{
    get_feedback::{__path_get_feedback, get_feedback},
    submit_feedback::{__path_submit_feedback, submit_feedback},
};
use crate::application::{auth::auth, http::server::app_state::AppState};
use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_feedback, submit_feedback))]
pub struct FeedbackApiDoc;

pub fn feedback_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/feedback", state.args.server.root_path),
            get(get_feedback).post(submit_feedback),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
