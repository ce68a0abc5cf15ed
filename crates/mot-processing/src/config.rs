//! Configuration for the per-axis filter bank

use mot_core::{MotError, MotResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default process noise variance Q
pub const DEFAULT_PROCESS_NOISE: f64 = 0.01;
/// Default measurement noise variance R
pub const DEFAULT_MEASUREMENT_NOISE: f64 = 0.1;
/// Default per-axis sliding window capacity
pub const DEFAULT_WINDOW_CAPACITY: usize = 50;

/// Noise variances and window sizing shared by all three axis filters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoiseParams {
    /// Process noise variance Q, must be strictly positive
    pub process_noise: f64,
    /// Measurement noise variance R, must be strictly positive
    pub measurement_noise: f64,
    /// Capacity of each axis's sliding window of raw readings
    pub window_capacity: usize,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            process_noise: DEFAULT_PROCESS_NOISE,
            measurement_noise: DEFAULT_MEASUREMENT_NOISE,
            window_capacity: DEFAULT_WINDOW_CAPACITY,
        }
    }
}

impl NoiseParams {
    pub fn new(process_noise: f64, measurement_noise: f64) -> Self {
        Self {
            process_noise,
            measurement_noise,
            window_capacity: DEFAULT_WINDOW_CAPACITY,
        }
    }

    /// Validate parameter ranges before constructing filters
    pub fn validate(&self) -> MotResult<()> {
        if self.process_noise <= 0.0 {
            return Err(MotError::InvalidParameter {
                name: "process_noise",
                value: self.process_noise,
                valid_range: "> 0",
            });
        }
        if self.measurement_noise <= 0.0 {
            return Err(MotError::InvalidParameter {
                name: "measurement_noise",
                value: self.measurement_noise,
                valid_range: "> 0",
            });
        }
        if self.window_capacity == 0 {
            return Err(MotError::InvalidParameter {
                name: "window_capacity",
                value: 0.0,
                valid_range: ">= 1",
            });
        }
        Ok(())
    }

    /// Load a parameter profile from a JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let params: NoiseParams = serde_json::from_str(&contents)?;
        params.validate()?;
        Ok(params)
    }

    /// Save this parameter profile as JSON
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_are_valid() {
        let params = NoiseParams::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.process_noise, 0.01);
        assert_eq!(params.measurement_noise, 0.1);
        assert_eq!(params.window_capacity, 50);
    }

    #[test]
    fn test_invalid_params_rejected() {
        let mut params = NoiseParams::default();
        params.process_noise = 0.0;
        assert!(params.validate().is_err());

        let mut params = NoiseParams::default();
        params.measurement_noise = -0.1;
        assert!(params.validate().is_err());

        let mut params = NoiseParams::default();
        params.window_capacity = 0;
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let params = NoiseParams::new(0.02, 0.25);
        let json = serde_json::to_string(&params).unwrap();
        let restored: NoiseParams = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, params);
    }

    #[test]
    fn test_profile_save_and_load() {
        let path = std::env::temp_dir()
            .join(format!("mot-params-save-load-{}.json", std::process::id()));

        let params = NoiseParams::new(0.02, 0.25);
        params.save(&path).unwrap();
        let restored = NoiseParams::load(&path).unwrap();
        assert_eq!(restored, params);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_rejects_invalid_profile() {
        let path = std::env::temp_dir()
            .join(format!("mot-params-invalid-{}.json", std::process::id()));

        let json = r#"{"process_noise":0.0,"measurement_noise":0.1,"window_capacity":50}"#;
        std::fs::write(&path, json).unwrap();
        assert!(NoiseParams::load(&path).is_err());

        std::fs::remove_file(&path).unwrap();
    }
}
