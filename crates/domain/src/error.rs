//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`BlescanError`] via `#[from]`.

/// Top-level error crossing the port boundaries.
#[derive(Debug, thiserror::Error)]
pub enum BlescanError {
    /// The caller sent a payload that cannot become a report.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The report store failed while processing a well-formed request.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Reasons an upload payload is rejected.
///
/// The `Display` output is returned verbatim to the caller.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// Empty body, unparseable JSON, a non-object document or `{}`.
    #[error("No data provided")]
    NoData,

    /// `device_id` or `devices` is absent or `null`.
    #[error("Missing required fields")]
    MissingRequiredFields,

    /// `devices` is not an array of sighting objects.
    #[error("Field 'devices' must be an array of sightings")]
    InvalidDevices(#[source] serde_json::Error),
}
