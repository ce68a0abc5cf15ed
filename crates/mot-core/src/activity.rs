//! Activity labels for tagging recorded motion samples

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Physical activity performed while samples were captured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityLabel {
    /// No deliberate movement
    Idle,
    /// Level walking
    Walking,
    /// Ascending stairs
    ClimbingUp,
    /// Descending stairs
    ClimbingDown,
}

impl Default for ActivityLabel {
    fn default() -> Self {
        ActivityLabel::Idle
    }
}

impl ActivityLabel {
    /// All labels, in the order the control surface presents them
    pub fn all() -> [ActivityLabel; 4] {
        [
            ActivityLabel::Idle,
            ActivityLabel::Walking,
            ActivityLabel::ClimbingUp,
            ActivityLabel::ClimbingDown,
        ]
    }

    /// Name written into persisted records
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLabel::Idle => "Idle",
            ActivityLabel::Walking => "Walking",
            ActivityLabel::ClimbingUp => "ClimbingUp",
            ActivityLabel::ClimbingDown => "ClimbingDown",
        }
    }
}

impl std::fmt::Display for ActivityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ActivityLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Idle" => Ok(ActivityLabel::Idle),
            "Walking" => Ok(ActivityLabel::Walking),
            "ClimbingUp" => Ok(ActivityLabel::ClimbingUp),
            "ClimbingDown" => Ok(ActivityLabel::ClimbingDown),
            other => Err(format!("Unknown activity label: {}", other)),
        }
    }
}
