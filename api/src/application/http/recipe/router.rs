use super::handlers::{
    cook_recipe::{__path_cook_recipe, cook_recipe},
    generate_recipes::{__path_generate_recipes, generate_recipes},
    get_recipes::{__path_get_recipes, get_recipes},
    get_rejected_recipes::{__path_get_rejected_recipes, get_rejected_recipes},
    reject_recipe::{__path_reject_recipe, reject_recipe},
};
use crate::application::{auth::auth, http::server::app_state::AppState};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_recipes,
    generate_recipes,
    get_rejected_recipes,
    reject_recipe,
    cook_recipe
))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/recipes", state.args.server.root_path),
            get(get_recipes),
        )
        .route(
            &format!("{}/recipes/generate", state.args.server.root_path),
            post(generate_recipes),
        )
        .route(
            &format!("{}/recipes/rejected", state.args.server.root_path),
            get(get_rejected_recipes),
        )
        .route(
            &format!("{}/recipes/{{recipe_id}}/reject", state.args.server.root_path),
            post(reject_recipe),
        )
        .route(
            &format!("{}/recipes/{{recipe_id}}/cook", state.args.server.root_path),
            post(cook_recipe),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
