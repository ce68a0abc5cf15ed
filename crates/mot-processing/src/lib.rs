//! Mot-Processing: Real-time smoothing of tri-axial acceleration samples
//!
//! Independent per-axis scalar Kalman filters with bounded sliding
//! windows of recent raw readings.

pub mod bank;
pub mod config;
pub mod kalman;
pub mod window;

pub use bank::{Axis, AxisFilterBank};
pub use config::NoiseParams;
pub use kalman::ScalarKalmanFilter;
pub use window::SlidingWindow;
