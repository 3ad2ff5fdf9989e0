use crate::application::http::{
    feedback::router::FeedbackApiDoc, health::router::HealthApiDoc,
    household::router::HouseholdApiDoc, inventory::router::InventoryApiDoc,
    meal_log::router::MealLogApiDoc, profile::router::ProfileApiDoc,
    recipe::router::RecipeApiDoc, schedule::router::ScheduleApiDoc,
    settings::router::SettingsApiDoc, shopping_list::router::ShoppingListApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Scantry API"
    ),
    nest(
        (path = "/household", api = HouseholdApiDoc),
        (path = "/inventory", api = InventoryApiDoc),
        (path = "/recipes", api = RecipeApiDoc),
        (path = "/shopping-list", api = ShoppingListApiDoc),
        (path = "/schedule", api = ScheduleApiDoc),
        (path = "/history", api = MealLogApiDoc),
        (path = "/profiles", api = ProfileApiDoc),
        (path = "/feedback", api = FeedbackApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;

/// Full document, including the routes that live at the API root.
pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    openapi.merge(SettingsApiDoc::openapi());
    openapi
}
