//! # blescan-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Accept scan uploads on `POST /api/esp32/ble`
//! - Serve JSON projections of the report log (`/api/health`, `/api/data`)
//! - Serve a server-side-rendered status page at `/`
//! - Map application results and errors into HTTP responses; a panicking
//!   handler becomes a `500` JSON error instead of taking the process down
//!
//! ## Dependency rule
//! Depends on `blescan-app` (for port traits and services) and `blescan-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod dashboard;
pub mod error;
pub mod router;
pub mod state;
