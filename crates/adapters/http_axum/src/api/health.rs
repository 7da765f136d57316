//! JSON health endpoint.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use blescan_app::ports::ReportStore;
use blescan_domain::time::Timestamp;

use crate::error::ApiError;
use crate::state::AppState;

/// Body of `GET /api/health`.
#[derive(Serialize)]
pub struct HealthBody {
    pub status: &'static str,
    pub timestamp: Timestamp,
    pub devices_received: usize,
}

/// Possible responses from the health endpoint.
pub enum HealthResponse {
    Ok(Json<HealthBody>),
}

impl IntoResponse for HealthResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/health`
pub async fn get<S>(State(state): State<AppState<S>>) -> Result<HealthResponse, ApiError>
where
    S: ReportStore + Send + Sync + 'static,
{
    let health = state.report_service.health().await?;
    Ok(HealthResponse::Ok(Json(HealthBody {
        status: "ok",
        timestamp: health.timestamp,
        devices_received: health.devices_received,
    })))
}
