//! In-process report store backed by a `Vec` behind a read/write lock.

use std::future::Future;
use std::sync::{PoisonError, RwLock};

use blescan_domain::error::BlescanError;
use blescan_domain::report::Report;

use crate::ports::ReportStore;

/// Errors raised by [`InMemoryReportStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A writer panicked while holding the lock; further appends are refused
    /// because the tail of the log can no longer be trusted.
    #[error("report store is poisoned by a panicked writer")]
    Poisoned,
}

impl From<StoreError> for BlescanError {
    fn from(err: StoreError) -> Self {
        Self::Storage(Box::new(err))
    }
}

/// Process-lifetime report log.
///
/// Appends take the write lock, reads take the read lock and hand out owned
/// snapshots, so no lock is ever held across an `.await`.
#[derive(Debug, Default)]
pub struct InMemoryReportStore {
    reports: RwLock<Vec<Report>>,
}

impl InMemoryReportStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a report at the end of the log.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Poisoned`] if a previous writer panicked.
    pub fn push(&self, report: Report) -> Result<(), StoreError> {
        let mut reports = self.reports.write().map_err(|_| StoreError::Poisoned)?;
        reports.push(report);
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.reports
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Owned copy of the log, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Report> {
        self.reports
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ReportStore for InMemoryReportStore {
    fn append(&self, report: Report) -> impl Future<Output = Result<(), BlescanError>> + Send {
        let result = self.push(report).map_err(BlescanError::from);
        async { result }
    }

    fn count(&self) -> impl Future<Output = Result<usize, BlescanError>> + Send {
        let count = self.len();
        async move { Ok(count) }
    }

    fn all(&self) -> impl Future<Output = Result<Vec<Report>, BlescanError>> + Send {
        let reports = self.snapshot();
        async { Ok(reports) }
    }
}
