//! Report service — use-cases for ingesting and inspecting scan uploads.

use blescan_domain::error::BlescanError;
use blescan_domain::report::{Report, ReportPayload};
use blescan_domain::summary::ScanSummary;
use blescan_domain::time::{self, Timestamp};

use crate::ports::ReportStore;

/// Outcome of a successful ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestReceipt {
    /// Number of sightings carried by the accepted report.
    pub received: usize,
}

/// Point-in-time view of the collector.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthSnapshot {
    pub timestamp: Timestamp,
    pub devices_received: usize,
}

/// Application service in front of a [`ReportStore`].
pub struct ReportService<S> {
    store: S,
}

impl<S: ReportStore> ReportService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Validate a raw upload, stamp it and append it to the store.
    ///
    /// Every call appends a new report; duplicate uploads are kept as
    /// distinct entries.
    ///
    /// # Errors
    ///
    /// Returns [`BlescanError::Validation`] when the payload is rejected (the
    /// store is left untouched), or a storage error from the store.
    #[tracing::instrument(skip(self, raw), fields(bytes = raw.len()))]
    pub async fn ingest(&self, raw: &[u8]) -> Result<IngestReceipt, BlescanError> {
        let report = ReportPayload::parse(raw)?.into_report(time::now());

        let device_id = report.device_label().into_owned();
        let summary = ScanSummary::new(&device_id, &report.devices);
        let received = summary.sighting_count();
        let lines = summary.lines();

        self.store.append(report).await?;

        tracing::info!(device_id = %device_id, devices = received, "scan report received");
        for line in &lines {
            tracing::info!(device_id = %device_id, "{line}");
        }

        Ok(IngestReceipt { received })
    }

    /// Number of reports accepted so far.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    #[tracing::instrument(skip(self))]
    pub async fn count(&self) -> Result<usize, BlescanError> {
        self.store.count().await
    }

    /// Every accepted report in arrival order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    #[tracing::instrument(skip(self))]
    pub async fn list_reports(&self) -> Result<Vec<Report>, BlescanError> {
        self.store.all().await
    }

    /// Current time and number of accepted reports.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    #[tracing::instrument(skip(self))]
    pub async fn health(&self) -> Result<HealthSnapshot, BlescanError> {
        let devices_received = self.store.count().await?;
        Ok(HealthSnapshot {
            timestamp: time::now(),
            devices_received,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory_store::InMemoryReportStore;
    use blescan_domain::error::ValidationError;
    use std::future::Future;

    const SCENARIO: &[u8] = br#"{"device_id":"esp32-1","devices":[{"name":"Phone","mac":"AA:BB:CC:DD:EE:FF","rssi":-60,"vendor":"Acme"}]}"#;

    struct BrokenStore;

    impl ReportStore for BrokenStore {
        fn append(&self, _report: Report) -> impl Future<Output = Result<(), BlescanError>> + Send {
            async { Err(BlescanError::Storage(Box::new(std::io::Error::other("full")))) }
        }

        fn count(&self) -> impl Future<Output = Result<usize, BlescanError>> + Send {
            async { Ok(0) }
        }

        fn all(&self) -> impl Future<Output = Result<Vec<Report>, BlescanError>> + Send {
            async { Ok(vec![]) }
        }
    }

    fn make_service() -> ReportService<InMemoryReportStore> {
        ReportService::new(InMemoryReportStore::new())
    }

    #[tokio::test]
    async fn should_append_exactly_one_report_when_valid() {
        let svc = make_service();

        let receipt = svc.ingest(SCENARIO).await.unwrap();

        assert_eq!(receipt, IngestReceipt { received: 1 });
        assert_eq!(svc.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn should_stamp_received_at_during_the_call() {
        let svc = make_service();

        let before = time::now();
        svc.ingest(SCENARIO).await.unwrap();
        let after = time::now();

        let reports = svc.list_reports().await.unwrap();
        assert!(reports[0].received_at >= before);
        assert!(reports[0].received_at <= after);
    }

    #[tokio::test]
    async fn should_leave_store_untouched_when_fields_missing() {
        let svc = make_service();
        svc.ingest(SCENARIO).await.unwrap();

        let result = svc.ingest(br#"{"device_id":"x"}"#).await;

        assert!(matches!(
            result,
            Err(BlescanError::Validation(ValidationError::MissingRequiredFields))
        ));
        assert_eq!(svc.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn should_reject_empty_payload() {
        let svc = make_service();
        let result = svc.ingest(b"").await;
        assert!(matches!(
            result,
            Err(BlescanError::Validation(ValidationError::NoData))
        ));
        assert_eq!(svc.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn should_keep_all_sightings_beyond_the_preview() {
        let svc = make_service();
        let devices: Vec<serde_json::Value> = (0..6)
            .map(|i| serde_json::json!({"name": format!("dev{i}"), "rssi": -40 - i}))
            .collect();
        let body = serde_json::json!({"device_id": "esp32-1", "devices": devices}).to_string();

        let receipt = svc.ingest(body.as_bytes()).await.unwrap();

        assert_eq!(receipt.received, 6);
        let reports = svc.list_reports().await.unwrap();
        assert_eq!(reports[0].devices.len(), 6);
    }

    #[tokio::test]
    async fn should_accept_loosely_typed_upload() {
        let svc = make_service();
        let body = br#"{"device_id":42,"devices":[{"name":"Phone","vendor":42},{"rssi":true},{"name":12345,"mac":null}]}"#;

        let receipt = svc.ingest(body).await.unwrap();

        assert_eq!(receipt.received, 3);
        let reports = svc.list_reports().await.unwrap();
        assert_eq!(reports[0].device_label(), "42");
        assert_eq!(reports[0].devices[2].mac, Some(serde_json::Value::Null));
    }

    #[tokio::test]
    async fn should_list_reports_in_arrival_order() {
        let svc = make_service();
        for id in ["first", "second", "third"] {
            let body = format!(r#"{{"device_id":"{id}","devices":[]}}"#);
            svc.ingest(body.as_bytes()).await.unwrap();
        }

        let ids: Vec<String> = svc
            .list_reports()
            .await
            .unwrap()
            .iter()
            .map(|r| r.device_label().into_owned())
            .collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn should_report_accepted_count_in_health() {
        let svc = make_service();
        svc.ingest(SCENARIO).await.unwrap();
        svc.ingest(SCENARIO).await.unwrap();
        let _ = svc.ingest(b"{}").await;

        let before = time::now();
        let health = svc.health().await.unwrap();

        assert_eq!(health.devices_received, 2);
        assert!(health.timestamp >= before);
    }

    #[tokio::test]
    async fn should_propagate_storage_failure() {
        let svc = ReportService::new(BrokenStore);
        let result = svc.ingest(SCENARIO).await;
        assert!(matches!(result, Err(BlescanError::Storage(_))));
    }
}
