//! # blescan-domain
//!
//! Pure domain model for the blescan report collector.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps
//! - Define **Reports** (one upload from a scanning device)
//! - Define **Sightings** (one BLE peripheral seen during a scan)
//! - Validate raw upload payloads into reports
//! - Render the human-readable scan summary
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod report;
pub mod sighting;
pub mod summary;
