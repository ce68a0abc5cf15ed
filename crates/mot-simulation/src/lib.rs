//! Mot-Simulation: Tri-axial accelerometer simulation
//!
//! Provides a simulated motion sensor and a real-time sample stream for
//! development and testing without physical hardware.

pub mod accel_simulator;
pub mod motion_patterns;
pub mod sample_stream;

pub use accel_simulator::{AccelSimulator, PatternConfig, SimConfig};
pub use motion_patterns::MotionPattern;
pub use sample_stream::{
    start_sample_stream, RealTimeSampleStream, StreamCommand, StreamConfig,
};
