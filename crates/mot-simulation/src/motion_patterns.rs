//! Pre-defined tri-axial motion patterns for realistic simulation

use std::f32::consts::PI;

/// Deterministic motion shapes the simulator layers noise on top of
///
/// Axis convention follows a phone carried upright: X lateral, Y
/// vertical, Z forward. Values are linear acceleration in m/s² with
/// gravity already removed, matching the original sensor source.
#[derive(Debug, Clone, Copy)]
pub enum MotionPattern {
    /// Device at rest, no deliberate movement
    Rest,
    /// Level walking with a periodic vertical bounce
    Walking {
        step_frequency: f32,
        amplitude: f32,
    },
    /// Stair climbing: walking plus a sustained vertical bias
    Climbing {
        step_frequency: f32,
        amplitude: f32,
        vertical_bias: f32,
    },
}

impl MotionPattern {
    /// Tri-axial acceleration (x, y, z) at the given time
    pub fn acceleration_at(&self, time: f32) -> (f32, f32, f32) {
        match self {
            MotionPattern::Rest => (0.0, 0.0, 0.0),

            MotionPattern::Walking { step_frequency, amplitude } => {
                let phase = 2.0 * PI * step_frequency * time;
                let vertical = amplitude * phase.sin();
                let lateral = 0.3 * amplitude * (0.5 * phase).sin();
                let forward = 0.5 * amplitude * (phase + PI / 4.0).cos();
                (lateral, vertical, forward)
            }

            MotionPattern::Climbing { step_frequency, amplitude, vertical_bias } => {
                let phase = 2.0 * PI * step_frequency * time;
                let vertical = vertical_bias + amplitude * phase.sin();
                let lateral = 0.2 * amplitude * (0.5 * phase).sin();
                let forward = 0.3 * amplitude * (phase + PI / 4.0).cos();
                (lateral, vertical, forward)
            }
        }
    }

    /// Get pattern description
    pub fn description(&self) -> &'static str {
        match self {
            MotionPattern::Rest => "At rest",
            MotionPattern::Walking { .. } => "Level walking",
            MotionPattern::Climbing { .. } => "Stair climbing",
        }
    }

    /// Create common preset patterns
    pub fn presets() -> Vec<(&'static str, MotionPattern)> {
        vec![
            ("Idle", MotionPattern::Rest),
            ("Slow Walk", MotionPattern::Walking {
                step_frequency: 1.4, amplitude: 1.2,
            }),
            ("Brisk Walk", MotionPattern::Walking {
                step_frequency: 2.0, amplitude: 2.5,
            }),
            ("Climbing Up", MotionPattern::Climbing {
                step_frequency: 1.2, amplitude: 2.0, vertical_bias: 0.8,
            }),
            ("Climbing Down", MotionPattern::Climbing {
                step_frequency: 1.5, amplitude: 2.2, vertical_bias: -0.8,
            }),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rest_is_zero() {
        let pattern = MotionPattern::Rest;
        assert_eq!(pattern.acceleration_at(0.0), (0.0, 0.0, 0.0));
        assert_eq!(pattern.acceleration_at(3.7), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_walking_is_periodic() {
        let pattern = MotionPattern::Walking {
            step_frequency: 2.0,
            amplitude: 1.0,
        };

        let (x0, y0, z0) = pattern.acceleration_at(0.25);
        let (x1, y1, z1) = pattern.acceleration_at(0.25 + 1.0); // two full steps later
        assert!((x0 - x1).abs() < 1e-4);
        assert!((y0 - y1).abs() < 1e-4);
        assert!((z0 - z1).abs() < 1e-4);
    }

    #[test]
    fn test_climbing_bias_shifts_vertical_mean() {
        let up = MotionPattern::Climbing {
            step_frequency: 1.2,
            amplitude: 2.0,
            vertical_bias: 0.8,
        };

        let samples = 1000;
        let mut sum = 0.0;
        for i in 0..samples {
            let (_, y, _) = up.acceleration_at(i as f32 * 0.01);
            sum += y;
        }
        let mean = sum / samples as f32;
        assert!((mean - 0.8).abs() < 0.1);
    }
}
