//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod health;
#[allow(clippy::missing_errors_doc)]
pub mod reports;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};

use blescan_app::ports::ReportStore;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<S>() -> Router<AppState<S>>
where
    S: ReportStore + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health::get::<S>))
        // Uploads from scanners, no size cap
        .route(
            "/esp32/ble",
            post(reports::ingest::<S>).layer(DefaultBodyLimit::disable()),
        )
        .route("/data", get(reports::list::<S>))
}
