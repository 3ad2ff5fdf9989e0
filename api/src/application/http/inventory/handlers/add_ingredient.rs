use axum::extract::State;
use scantry_core::domain::inventory::{
    entities::Ingredient, ports::InventoryService, value_objects::AddIngredientInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        inventory::validators::AddIngredientValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AddIngredientResponse {
    pub data: Ingredient,
}

#[utoipa::path(
    post,
    path = "/items",
    tag = "inventory",
    summary = "Add ingredient",
    description = "Adds a manually entered ingredient to the inventory.",
    request_body = AddIngredientValidator,
    responses(
        (status = 201, body = AddIngredientResponse),
        (status = 400, description = "Name is blank")
    )
)]
pub async fn add_ingredient(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<AddIngredientValidator>,
) -> Result<Response<AddIngredientResponse>, ApiError> {
    let ingredient = state
        .service
        .add_ingredient(
            &identity,
            AddIngredientInput {
                name: payload.name,
                quantity: payload.quantity,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(AddIngredientResponse { data: ingredient }))
}
