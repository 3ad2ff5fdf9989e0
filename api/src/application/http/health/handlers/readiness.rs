use axum::extract::State;
use scantry_core::domain::health::{entities::StorageHealthStatus, ports::HealthCheckService};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ReadinessResponse {
    pub data: StorageHealthStatus,
}

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness check",
    description = "Ready when the data bucket can be reached.",
    responses(
        (status = 200, body = ReadinessResponse),
        (status = 503, description = "Object storage is unreachable")
    )
)]
pub async fn readiness(
    State(state): State<AppState>,
) -> Result<Response<ReadinessResponse>, ApiError> {
    let status = state.service.readiness().await.map_err(|e| {
        warn!("readiness check failed: {}", e);
        ApiError::ServiceUnavailable("Object storage is unreachable".to_string())
    })?;

    if !status.reachable {
        return Err(ApiError::ServiceUnavailable(format!(
            "Bucket {} is unreachable",
            status.bucket
        )));
    }

    Ok(Response::OK(ReadinessResponse { data: status }))
}
