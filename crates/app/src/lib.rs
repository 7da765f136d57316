//! # blescan-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the `ReportStore` port that storage adapters implement
//! - Provide the in-process `InMemoryReportStore` (no IO, process lifetime)
//! - Define `ReportService` — ingest an upload, count, list, health snapshot
//!
//! ## Dependency rule
//! Depends on `blescan-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod memory_store;
pub mod ports;
pub mod services;
