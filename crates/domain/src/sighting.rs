//! Sighting — one BLE peripheral observed during a scan.

use std::borrow::Cow;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A single BLE device seen by a scanner.
///
/// Every field is optional and kept as the scanner sent it, whatever its JSON
/// type. An explicit `null` is stored as `Some(Value::Null)` so it is echoed
/// back; an absent key stays `None`. Keys beyond the known ones are kept in
/// [`Sighting::extra`] and serialized back at the same level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sighting {
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<Value>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub mac: Option<Value>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub rssi: Option<Value>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub vendor: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// `Option<Value>` would turn `null` into `None`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Strings as-is, other values as compact JSON, `placeholder` for absent or
/// `null`.
fn render<'a>(value: Option<&'a Value>, placeholder: &'static str) -> Cow<'a, str> {
    match value {
        None | Some(Value::Null) => Cow::Borrowed(placeholder),
        Some(Value::String(text)) => Cow::Borrowed(text),
        Some(other) => Cow::Owned(other.to_string()),
    }
}

impl Sighting {
    /// Name to show to humans, `"Unknown"` when the scanner did not resolve one.
    #[must_use]
    pub fn display_name(&self) -> Cow<'_, str> {
        render(self.name.as_ref(), "Unknown")
    }

    #[must_use]
    pub fn display_mac(&self) -> Cow<'_, str> {
        render(self.mac.as_ref(), "N/A")
    }

    #[must_use]
    pub fn display_rssi(&self) -> Cow<'_, str> {
        render(self.rssi.as_ref(), "N/A")
    }

    #[must_use]
    pub fn display_vendor(&self) -> Cow<'_, str> {
        render(self.vendor.as_ref(), "")
    }

    /// Whether the signal strength is a JSON number (right-aligned in
    /// summaries).
    #[must_use]
    pub fn has_numeric_rssi(&self) -> bool {
        self.rssi.as_ref().is_some_and(Value::is_number)
    }
}
