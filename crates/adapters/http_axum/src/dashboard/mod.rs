//! Server-side rendered HTML pages (no JavaScript).

pub mod home;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;

use blescan_app::ports::ReportStore;
use blescan_domain::error::BlescanError;

use crate::state::AppState;

/// Build the dashboard sub-router for SSR HTML pages.
pub fn routes<S>() -> Router<AppState<S>>
where
    S: ReportStore + Send + Sync + 'static,
{
    Router::new().route("/", get(home::index::<S>))
}

/// Failure while building a page; rendered as plain text.
pub enum DashboardError {
    Service(BlescanError),
    Render(askama::Error),
}

impl From<BlescanError> for DashboardError {
    fn from(err: BlescanError) -> Self {
        Self::Service(err)
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let message = match self {
            Self::Service(err) => {
                tracing::error!(error = %err, "dashboard query failed");
                err.to_string()
            }
            Self::Render(err) => {
                tracing::error!(error = %err, "template rendering failed");
                err.to_string()
            }
        };
        (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
    }
}
