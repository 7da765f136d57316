//! Report store port — append-only storage for scan reports.

use std::future::Future;

use blescan_domain::error::BlescanError;
use blescan_domain::report::Report;

/// Append-only, ordered storage of accepted [`Report`]s.
///
/// Implementations keep arrival order: [`ReportStore::all`] returns reports
/// in the order [`ReportStore::append`] was called, and never reorders,
/// mutates or drops an entry.
pub trait ReportStore {
    /// Add a report at the end of the sequence.
    fn append(&self, report: Report) -> impl Future<Output = Result<(), BlescanError>> + Send;

    /// Number of reports stored so far.
    fn count(&self) -> impl Future<Output = Result<usize, BlescanError>> + Send;

    /// Snapshot of every stored report, oldest first.
    fn all(&self) -> impl Future<Output = Result<Vec<Report>, BlescanError>> + Send;
}
