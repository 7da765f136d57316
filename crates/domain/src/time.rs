//! Time and timestamp helpers.

use chrono::{DateTime, Local};

/// Server-local timestamp used for `received_at` and health snapshots.
///
/// Serialized as RFC 3339 (an ISO-8601 profile) including the UTC offset.
pub type Timestamp = DateTime<Local>;

/// Return the current local time.
#[must_use]
pub fn now() -> Timestamp {
    Local::now()
}
