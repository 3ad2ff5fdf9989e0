use axum::extract::{Path, Query, State};
use chrono::NaiveDate;
use scantry_core::domain::schedule::{
    ports::ScheduleService, value_objects::RemoveScheduledMealInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        schedule::validators::RemoveMealQuery,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RemoveMealResponse {
    /// Number of meals removed
    pub removed: usize,
}

#[utoipa::path(
    delete,
    path = "/{date}",
    tag = "schedule",
    summary = "Remove scheduled meal",
    description = "Removes the meal in `slot` on `date`, or every meal that day when no slot is given.",
    params(
        ("date" = String, Path, description = "Date as YYYY-MM-DD"),
        RemoveMealQuery,
    ),
    responses(
        (status = 200, body = RemoveMealResponse)
    )
)]
pub async fn remove_meal(
    Path(date): Path<NaiveDate>,
    Query(query): Query<RemoveMealQuery>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<RemoveMealResponse>, ApiError> {
    let removed = state
        .service
        .remove_meal(
            &identity,
            RemoveScheduledMealInput {
                date,
                slot: query.slot,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RemoveMealResponse { removed }))
}
