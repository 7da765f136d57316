//! Human-readable rendering of a scan upload for the server log.

use crate::sighting::Sighting;

/// How many sightings are listed individually before the rest is collapsed
/// into a single "... and N more devices" line.
pub const PREVIEW_LIMIT: usize = 5;

const NAME_WIDTH: usize = 15;
const MAC_WIDTH: usize = 17;
const RSSI_WIDTH: usize = 4;

/// Fixed-width listing of the first sightings of an upload.
#[derive(Debug, Clone, Copy)]
pub struct ScanSummary<'a> {
    device_id: &'a str,
    sightings: &'a [Sighting],
}

impl<'a> ScanSummary<'a> {
    #[must_use]
    pub fn new(device_id: &'a str, sightings: &'a [Sighting]) -> Self {
        Self {
            device_id,
            sightings,
        }
    }

    #[must_use]
    pub fn device_id(&self) -> &str {
        self.device_id
    }

    #[must_use]
    pub fn sighting_count(&self) -> usize {
        self.sightings.len()
    }

    /// Number of sightings left out of the detailed listing.
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.sightings.len().saturating_sub(PREVIEW_LIMIT)
    }

    /// Detail lines for the first [`PREVIEW_LIMIT`] sightings, followed by
    /// the overflow line when some were left out.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .sightings
            .iter()
            .take(PREVIEW_LIMIT)
            .enumerate()
            .map(|(index, sighting)| detail_line(index + 1, sighting))
            .collect();

        let hidden = self.hidden_count();
        if hidden > 0 {
            lines.push(format!("  ... and {hidden} more devices"));
        }
        lines
    }
}

fn detail_line(position: usize, sighting: &Sighting) -> String {
    // numbers line up on the right, text on the left
    let rssi = if sighting.has_numeric_rssi() {
        format!("{:>RSSI_WIDTH$}", sighting.display_rssi())
    } else {
        format!("{:<RSSI_WIDTH$.RSSI_WIDTH$}", sighting.display_rssi())
    };
    format!(
        "  {position}. {:<NAME_WIDTH$.NAME_WIDTH$} {:<MAC_WIDTH$.MAC_WIDTH$} RSSI:{rssi} {}",
        sighting.display_name(),
        sighting.display_mac(),
        sighting.display_vendor(),
    )
}
