//! JSON handlers for scan uploads.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use blescan_app::ports::ReportStore;
use blescan_domain::report::Report;

use crate::error::ApiError;
use crate::state::AppState;

/// Body of a successful `POST /api/esp32/ble`.
#[derive(Serialize)]
pub struct IngestBody {
    pub status: &'static str,
    /// Number of sightings in the accepted upload.
    pub received: usize,
}

/// Body of `GET /api/data`.
#[derive(Serialize)]
pub struct DataBody {
    pub total_uploads: usize,
    pub data: Vec<Report>,
}

/// Possible responses from the ingest endpoint.
pub enum IngestResponse {
    Ok(Json<IngestBody>),
}

impl IntoResponse for IngestResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<DataBody>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /api/esp32/ble`
///
/// The body is taken as raw bytes so that an empty or non-JSON upload gets
/// the same `400 No data provided` answer whatever its content type. A body
/// that cannot be read is answered with a JSON error too.
pub async fn ingest<S>(
    State(state): State<AppState<S>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<IngestResponse, ApiError>
where
    S: ReportStore + Send + Sync + 'static,
{
    let body = body?;
    let receipt = state.report_service.ingest(&body).await?;
    Ok(IngestResponse::Ok(Json(IngestBody {
        status: "ok",
        received: receipt.received,
    })))
}

/// `GET /api/data`
pub async fn list<S>(State(state): State<AppState<S>>) -> Result<ListResponse, ApiError>
where
    S: ReportStore + Send + Sync + 'static,
{
    let data = state.report_service.list_reports().await?;
    Ok(ListResponse::Ok(Json(DataBody {
        total_uploads: data.len(),
        data,
    })))
}
