//! Scalar Kalman filter for smoothing one acceleration axis
//!
//! One-dimensional model with identity state transition and unit
//! observation gain: the state is the smoothed acceleration itself and
//! each sensor reading observes it directly. Process and measurement
//! noise variances are fixed at construction.

use mot_core::{MotError, MotResult};

/// Recursive scalar estimator combining the predicted state with each
/// noisy measurement, weighted by relative uncertainty
#[derive(Debug, Clone)]
pub struct ScalarKalmanFilter {
    /// Current state estimate x̂
    estimate: f64,
    /// Current error covariance P, strictly positive after construction
    covariance: f64,
    /// Process noise variance Q
    process_noise: f64,
    /// Measurement noise variance R
    measurement_noise: f64,
}

impl ScalarKalmanFilter {
    /// Create a filter with fixed noise variances
    ///
    /// Initializes x̂ = 0 and P = 1. Both variances must be strictly
    /// positive; R > 0 keeps the innovation covariance away from zero
    /// so the gain division is always safe.
    pub fn new(process_noise: f64, measurement_noise: f64) -> MotResult<Self> {
        if process_noise <= 0.0 {
            return Err(MotError::InvalidParameter {
                name: "process_noise",
                value: process_noise,
                valid_range: "> 0",
            });
        }
        if measurement_noise <= 0.0 {
            return Err(MotError::InvalidParameter {
                name: "measurement_noise",
                value: measurement_noise,
                valid_range: "> 0",
            });
        }

        Ok(ScalarKalmanFilter {
            estimate: 0.0,
            covariance: 1.0,
            process_noise,
            measurement_noise,
        })
    }

    /// Time update: x̂ is unchanged (identity transition, no control
    /// input), covariance grows by Q.
    ///
    /// Not idempotent: a second predict without an intervening
    /// [`correct`](Self::correct) double-counts process noise. Callers
    /// must alternate exactly one predict and one correct per sample.
    pub fn predict(&mut self) {
        self.covariance += self.process_noise;
    }

    /// Measurement update with reading `z`
    pub fn correct(&mut self, z: f64) {
        let innovation = z - self.estimate;
        let innovation_covariance = self.covariance + self.measurement_noise;
        let gain = self.covariance / innovation_covariance;

        self.estimate += gain * innovation;
        self.covariance *= 1.0 - gain;
    }

    /// Current state estimate x̂
    pub fn estimate(&self) -> f64 {
        self.estimate
    }

    /// Current error covariance P
    pub fn covariance(&self) -> f64 {
        self.covariance
    }

    /// Process noise variance Q
    pub fn process_noise(&self) -> f64 {
        self.process_noise
    }

    /// Measurement noise variance R
    pub fn measurement_noise(&self) -> f64 {
        self.measurement_noise
    }
}
