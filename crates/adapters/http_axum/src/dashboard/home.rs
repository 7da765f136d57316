//! Status page — upload counter and the list of endpoints.

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};

use blescan_app::ports::ReportStore;

use super::DashboardError;
use crate::state::AppState;

/// One line of the endpoint list.
pub struct Endpoint {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
    /// Whether a browser can follow it (GET without body).
    pub linkable: bool,
}

const ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        method: "GET",
        path: "/api/health",
        description: "Health check",
        linkable: true,
    },
    Endpoint {
        method: "GET",
        path: "/api/data",
        description: "View received data",
        linkable: true,
    },
    Endpoint {
        method: "POST",
        path: "/api/esp32/ble",
        description: "Receive BLE data",
        linkable: false,
    },
];

/// Home page template.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    refresh_seconds: u32,
    upload_count: usize,
    endpoints: &'static [Endpoint],
}

impl IntoResponse for HomeTemplate {
    fn into_response(self) -> Response {
        match self.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => DashboardError::Render(err).into_response(),
        }
    }
}

/// `GET /` — collector status.
pub async fn index<S>(State(state): State<AppState<S>>) -> Result<HomeTemplate, DashboardError>
where
    S: ReportStore + Send + Sync + 'static,
{
    let upload_count = state.report_service.count().await?;

    Ok(HomeTemplate {
        refresh_seconds: 10,
        upload_count,
        endpoints: ENDPOINTS,
    })
}
