//! Sample types flowing through the filtering and recording pipeline

use crate::activity::ActivityLabel;
use serde::{Deserialize, Serialize};

/// One raw tri-axial acceleration reading as delivered by the sample source
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawSample {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl RawSample {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        RawSample { x, y, z }
    }
}

/// Smoothed counterpart of a raw sample
///
/// Filter arithmetic runs in double precision, so the filtered axes stay f64.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilteredSample {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl FilteredSample {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        FilteredSample { x, y, z }
    }
}

/// One logged sample: raw and filtered axes plus the label in effect
/// at the moment the record was produced
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleRecord {
    /// Milliseconds since the Unix epoch, assigned at record time
    pub timestamp_ms: i64,
    pub raw: RawSample,
    pub filtered: FilteredSample,
    pub label: ActivityLabel,
}

impl SampleRecord {
    pub fn new(
        timestamp_ms: i64,
        raw: RawSample,
        filtered: FilteredSample,
        label: ActivityLabel,
    ) -> Self {
        SampleRecord {
            timestamp_ms,
            raw,
            filtered,
            label,
        }
    }

    /// Persisted line format: integer timestamp, six numeric fields with
    /// exactly 4 decimal digits, label name, newline-terminated.
    pub fn csv_line(&self) -> String {
        format!(
            "{},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{}\n",
            self.timestamp_ms,
            self.raw.x,
            self.raw.y,
            self.raw.z,
            self.filtered.x,
            self.filtered.y,
            self.filtered.z,
            self.label,
        )
    }
}
