//! Mot-Core: Foundation types for motion sample smoothing and recording
//!
//! Shared sample, label, and error types used across the workspace.

pub mod activity;
pub mod error;
pub mod sample;

pub use activity::ActivityLabel;
pub use error::{MotError, MotResult};
pub use sample::{FilteredSample, RawSample, SampleRecord};
