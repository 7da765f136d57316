//! Shared application state for axum handlers.

use std::sync::Arc;

use blescan_app::ports::ReportStore;
use blescan_app::services::report_service::ReportService;

/// Application state shared across all axum handlers.
///
/// Generic over the store type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the store itself does not need to be `Clone`;
/// only the `Arc` is cloned.
pub struct AppState<S> {
    /// Report ingestion and query service.
    pub report_service: Arc<ReportService<S>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            report_service: Arc::clone(&self.report_service),
        }
    }
}

impl<S> AppState<S>
where
    S: ReportStore + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(report_service: ReportService<S>) -> Self {
        Self {
            report_service: Arc::new(report_service),
        }
    }

    /// Create a new application state from a pre-wrapped `Arc` service.
    ///
    /// Use this when the composition root keeps its own handle on the
    /// service.
    pub fn from_arc(report_service: Arc<ReportService<S>>) -> Self {
        Self { report_service }
    }
}
