use axum::extract::State;
use scantry_core::domain::shopping_list::{
    entities::ShoppingItem, ports::ShoppingListService, value_objects::AddShoppingItemInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
        shopping_list::validators::AddShoppingItemValidator,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AddShoppingItemResponse {
    /// Whole list after the addition
    pub data: Vec<ShoppingItem>,
}

#[utoipa::path(
    post,
    path = "/items",
    tag = "shopping-list",
    summary = "Add shopping item",
    request_body = AddShoppingItemValidator,
    responses(
        (status = 201, body = AddShoppingItemResponse),
        (status = 400, description = "Name is blank")
    )
)]
pub async fn add_item(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<AddShoppingItemValidator>,
) -> Result<Response<AddShoppingItemResponse>, ApiError> {
    let items = state
        .service
        .add_item(&identity, AddShoppingItemInput { name: payload.name })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(AddShoppingItemResponse { data: items }))
}
