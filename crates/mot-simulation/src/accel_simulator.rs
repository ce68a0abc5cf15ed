//! Simulated tri-axial accelerometer source

use crate::motion_patterns::MotionPattern;
use mot_core::{MotError, MotResult, RawSample};
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

/// Configuration for accelerometer simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Sample delivery rate in Hz
    pub sample_rate: f32,
    /// Motion pattern to generate
    pub pattern: PatternConfig,
    /// Gaussian sensor noise standard deviation in m/s²
    pub noise_std: f32,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            sample_rate: 50.0, // one sample every 20ms, typical sensor cadence
            pattern: PatternConfig::from_pattern(MotionPattern::Rest),
            noise_std: 0.15,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Validate configuration before constructing a simulator
    pub fn validate(&self) -> MotResult<()> {
        if self.sample_rate <= 0.0 || self.sample_rate > 1000.0 {
            return Err(MotError::InvalidStreamConfig {
                reason: format!("Sample rate {}Hz outside (0, 1000]", self.sample_rate),
            });
        }
        if self.noise_std < 0.0 {
            return Err(MotError::InvalidStreamConfig {
                reason: format!("Noise std {} must be non-negative", self.noise_std),
            });
        }
        Ok(())
    }
}

/// Serializable pattern wrapper for config files and commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternConfig {
    pub pattern_type: String,
    pub parameters: Vec<f32>,
}

impl PatternConfig {
    pub fn from_pattern(pattern: MotionPattern) -> Self {
        match pattern {
            MotionPattern::Rest => PatternConfig {
                pattern_type: "rest".to_string(),
                parameters: Vec::new(),
            },
            MotionPattern::Walking { step_frequency, amplitude } => PatternConfig {
                pattern_type: "walking".to_string(),
                parameters: vec![step_frequency, amplitude],
            },
            MotionPattern::Climbing { step_frequency, amplitude, vertical_bias } => {
                PatternConfig {
                    pattern_type: "climbing".to_string(),
                    parameters: vec![step_frequency, amplitude, vertical_bias],
                }
            }
        }
    }

    pub fn to_pattern(&self) -> MotionPattern {
        match self.pattern_type.as_str() {
            "walking" => MotionPattern::Walking {
                step_frequency: self.parameters.first().copied().unwrap_or(1.8),
                amplitude: self.parameters.get(1).copied().unwrap_or(2.0),
            },
            "climbing" => MotionPattern::Climbing {
                step_frequency: self.parameters.first().copied().unwrap_or(1.2),
                amplitude: self.parameters.get(1).copied().unwrap_or(2.0),
                vertical_bias: self.parameters.get(2).copied().unwrap_or(0.8),
            },
            _ => MotionPattern::Rest,
        }
    }
}

/// Accelerometer simulator producing one raw sample per call
pub struct AccelSimulator {
    config: SimConfig,
    rng: rand::rngs::StdRng,
    noise_dist: Normal<f32>,
    sample_index: u64,
}

impl AccelSimulator {
    /// Create new simulator with configuration
    pub fn new(config: SimConfig) -> MotResult<Self> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0)
        });

        let rng = rand::rngs::StdRng::seed_from_u64(seed);
        let noise_dist = Normal::new(0.0, config.noise_std)
            .map_err(|e| MotError::InvalidStreamConfig {
                reason: format!("Failed to create noise distribution: {}", e),
            })?;

        Ok(AccelSimulator {
            config,
            rng,
            noise_dist,
            sample_index: 0,
        })
    }

    /// Generate the next raw sample
    pub fn next_sample(&mut self) -> RawSample {
        let time = self.sample_index as f32 / self.config.sample_rate;
        let (x, y, z) = self.config.pattern.to_pattern().acceleration_at(time);

        let sample = RawSample::new(
            x + self.noise_dist.sample(&mut self.rng),
            y + self.noise_dist.sample(&mut self.rng),
            z + self.noise_dist.sample(&mut self.rng),
        );

        self.sample_index += 1;
        sample
    }

    /// Reset simulated time (useful for restarting a session)
    pub fn reset_time(&mut self) {
        self.sample_index = 0;
    }

    /// Get current configuration
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Update configuration, keeping the current time position
    pub fn update_config(&mut self, config: SimConfig) -> MotResult<()> {
        config.validate()?;
        self.noise_dist = Normal::new(0.0, config.noise_std)
            .map_err(|e| MotError::InvalidStreamConfig {
                reason: format!("Failed to create noise distribution: {}", e),
            })?;
        self.config = config;
        Ok(())
    }
}
