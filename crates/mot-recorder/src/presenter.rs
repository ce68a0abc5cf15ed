//! Display formatting for raw and filtered sample values

use mot_core::{FilteredSample, RawSample};

/// Formatted strings republished to the display surface on every
/// processed sample
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayUpdate {
    pub raw: String,
    pub filtered: String,
}

impl DisplayUpdate {
    pub fn new(raw: &RawSample, filtered: &FilteredSample) -> Self {
        DisplayUpdate {
            raw: format_raw(raw),
            filtered: format_filtered(filtered),
        }
    }
}

/// Raw display line, two decimals per axis
pub fn format_raw(sample: &RawSample) -> String {
    format!(
        "Raw: X={:.2}, Y={:.2}, Z={:.2}",
        sample.x, sample.y, sample.z
    )
}

/// Filtered display line, two decimals per axis
pub fn format_filtered(sample: &FilteredSample) -> String {
    format!(
        "Filtered: X={:.2}, Y={:.2}, Z={:.2}",
        sample.x, sample.y, sample.z
    )
}
