//! Report — one upload from a scanning device.
//!
//! Raw bodies go through [`ReportPayload::parse`], which enforces the
//! required shape, and become a [`Report`] once the server stamps them.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::sighting::Sighting;
use crate::time::Timestamp;

const DEVICE_ID: &str = "device_id";
const DEVICES: &str = "devices";
const RECEIVED_AT: &str = "received_at";

/// A stored scan upload.
///
/// Top-level keys other than `device_id`, `devices` and `received_at` are
/// kept in [`Report::extra`] and flattened back on serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Sender identifier, normally a string but stored as sent.
    pub device_id: Value,
    pub devices: Vec<Sighting>,
    pub received_at: Timestamp,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Report {
    /// Identifier for log lines: strings as-is, other values as JSON.
    #[must_use]
    pub fn device_label(&self) -> Cow<'_, str> {
        match &self.device_id {
            Value::String(id) => Cow::Borrowed(id),
            other => Cow::Owned(other.to_string()),
        }
    }

    /// Number of sightings carried by this report.
    #[must_use]
    pub fn sighting_count(&self) -> usize {
        self.devices.len()
    }
}

/// A validated upload that has not been stamped yet.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportPayload {
    pub device_id: Value,
    pub devices: Vec<Sighting>,
    pub extra: Map<String, Value>,
}

impl ReportPayload {
    /// Parse and validate a raw request body.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::NoData`] when the body is empty, is not JSON, is
    ///   not an object, or is an empty object.
    /// - [`ValidationError::MissingRequiredFields`] when `device_id` or
    ///   `devices` is absent or `null`.
    /// - [`ValidationError::InvalidDevices`] when `devices` is not an array
    ///   of objects.
    pub fn parse(raw: &[u8]) -> Result<Self, ValidationError> {
        match serde_json::from_slice::<Value>(raw) {
            Ok(Value::Object(fields)) => Self::from_fields(fields),
            _ => Err(ValidationError::NoData),
        }
    }

    /// Validate an already decoded JSON object.
    ///
    /// # Errors
    ///
    /// Same as [`ReportPayload::parse`], minus the decoding failures.
    pub fn from_fields(mut fields: Map<String, Value>) -> Result<Self, ValidationError> {
        if fields.is_empty() {
            return Err(ValidationError::NoData);
        }

        let device_id = fields.shift_remove(DEVICE_ID).filter(|v| !v.is_null());
        let devices = fields.shift_remove(DEVICES).filter(|v| !v.is_null());
        let (Some(device_id), Some(devices)) = (device_id, devices) else {
            return Err(ValidationError::MissingRequiredFields);
        };

        let devices: Vec<Sighting> =
            serde_json::from_value(devices).map_err(ValidationError::InvalidDevices)?;

        // the server owns this one
        fields.shift_remove(RECEIVED_AT);

        Ok(Self {
            device_id,
            devices,
            extra: fields,
        })
    }

    /// Stamp the payload, producing the immutable [`Report`].
    #[must_use]
    pub fn into_report(self, received_at: Timestamp) -> Report {
        Report {
            device_id: self.device_id,
            devices: self.devices,
            received_at,
            extra: self.extra,
        }
    }
}
