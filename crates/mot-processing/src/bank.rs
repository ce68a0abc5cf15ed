//! Per-axis filter bank applying the scalar Kalman model sample-by-sample

use crate::config::NoiseParams;
use crate::kalman::ScalarKalmanFilter;
use crate::window::SlidingWindow;
use mot_core::{FilteredSample, MotResult, RawSample};

/// Acceleration axes, in sample order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn all() -> [Axis; 3] {
        [Axis::X, Axis::Y, Axis::Z]
    }

    fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Three independent scalar Kalman filters plus a sliding window of raw
/// readings per axis
///
/// Axes are filtered independently even though the physical acceleration
/// vector's components can be correlated; a coupled 3-state filter is a
/// possible alternative, not a requirement.
///
/// `process` mutates all filter and window state, so callers must
/// serialize invocations: one call per incoming sample, from a single
/// consumer.
#[derive(Debug)]
pub struct AxisFilterBank {
    filters: [ScalarKalmanFilter; 3],
    windows: [SlidingWindow; 3],
    samples_processed: u64,
}

impl AxisFilterBank {
    /// Build the bank with the same (Q, R) pair for every axis
    pub fn new(params: NoiseParams) -> MotResult<Self> {
        params.validate()?;

        let filter = ScalarKalmanFilter::new(params.process_noise, params.measurement_noise)?;
        let window = SlidingWindow::new(params.window_capacity);

        Ok(AxisFilterBank {
            filters: [filter.clone(), filter.clone(), filter],
            windows: [window.clone(), window.clone(), window],
            samples_processed: 0,
        })
    }

    /// Process one raw sample through all three axis filters
    ///
    /// Per axis: push the raw reading into the window, run one
    /// predict/correct cycle, read the estimate.
    pub fn process(&mut self, raw: RawSample) -> FilteredSample {
        let readings = [raw.x, raw.y, raw.z];
        let mut filtered = [0.0f64; 3];

        for axis in Axis::all() {
            let i = axis.index();
            self.windows[i].push(readings[i]);

            self.filters[i].predict();
            self.filters[i].correct(readings[i] as f64);
            filtered[i] = self.filters[i].estimate();
        }

        self.samples_processed += 1;
        FilteredSample::new(filtered[0], filtered[1], filtered[2])
    }

    /// Sliding window of recent raw readings for one axis
    pub fn window(&self, axis: Axis) -> &SlidingWindow {
        &self.windows[axis.index()]
    }

    /// Filter state for one axis
    pub fn filter(&self, axis: Axis) -> &ScalarKalmanFilter {
        &self.filters[axis.index()]
    }

    /// Number of samples processed since construction
    pub fn samples_processed(&self) -> u64 {
        self.samples_processed
    }
}
