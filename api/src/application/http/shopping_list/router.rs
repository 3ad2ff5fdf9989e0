use super::handlers::{
    add_item::{__path_add_item, add_item},
    add_recipe_ingredients::{__path_add_recipe_ingredients, add_recipe_ingredients},
    categorize::{__path_categorize, categorize},
    clear_checked::{__path_clear_checked, clear_checked},
    get_shopping_list::{__path_get_shopping_list, get_shopping_list},
    remove_item::{__path_remove_item, remove_item},
    toggle_item::{__path_toggle_item, toggle_item},
};
use crate::application::{auth::auth, http::server::app_state::AppState};
use axum::{
    Router, middleware,
    routing::{delete, get, patch, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_shopping_list,
    add_item,
    toggle_item,
    remove_item,
    clear_checked,
    add_recipe_ingredients,
    categorize
))]
pub struct ShoppingListApiDoc;

pub fn shopping_list_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{}/shopping-list", root_path),
            get(get_shopping_list),
        )
        .route(
            &format!("{}/shopping-list/items", root_path),
            post(add_item),
        )
        .route(
            &format!("{}/shopping-list/items/{{index}}/toggle", root_path),
            patch(toggle_item),
        )
        .route(
            &format!("{}/shopping-list/items/{{index}}", root_path),
            delete(remove_item),
        )
        .route(
            &format!("{}/shopping-list/checked", root_path),
            delete(clear_checked),
        )
        .route(
            &format!("{}/shopping-list/from-recipe/{{recipe_id}}", root_path),
            post(add_recipe_ingredients),
        )
        .route(
            &format!("{}/shopping-list/categorize", root_path),
            post(categorize),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
