//! Axum router assembly.

use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use blescan_app::ports::ReportStore;

use crate::error::panic_response;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges API routes under `/api` and the status page at `/`.
/// Handler panics are caught and answered with a `500` JSON error; the
/// [`TraceLayer`] sits outside the catcher so those responses are logged too.
pub fn build<S>(state: AppState<S>) -> Router
where
    S: ReportStore + Send + Sync + 'static,
{
    Router::new()
        .nest("/api", crate::api::routes())
        .merge(crate::dashboard::routes())
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
