use super::handlers::{
    add_ingredient::{__path_add_ingredient, add_ingredient},
    clear_inventory::{__path_clear_inventory, clear_inventory},
    get_inventory::{__path_get_inventory, get_inventory},
    remove_ingredient::{__path_remove_ingredient, remove_ingredient},
    scan_inventory::{__path_scan_inventory, scan_inventory},
};
use crate::application::{
    auth::auth,
    http::server::{api_entities::image_upload::MAX_IMAGE_SIZE, app_state::AppState},
};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{delete, get, post},
};
use scantry_core::domain::inventory::value_objects::MAX_SCAN_IMAGES;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_inventory,
    clear_inventory,
    add_ingredient,
    remove_ingredient,
    scan_inventory
))]
pub struct InventoryApiDoc;

pub fn inventory_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/inventory", state.args.server.root_path),
            get(get_inventory).delete(clear_inventory),
        )
        .route(
            &format!("{}/inventory/items", state.args.server.root_path),
            post(add_ingredient),
        )
        .route(
            &format!("{}/inventory/items/{{index}}", state.args.server.root_path),
            delete(remove_ingredient),
        )
        .route(
            &format!("{}/inventory/scan", state.args.server.root_path),
            post(scan_inventory).layer(DefaultBodyLimit::max(MAX_SCAN_IMAGES * MAX_IMAGE_SIZE)),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
