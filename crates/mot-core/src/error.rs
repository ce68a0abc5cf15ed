//! Error handling for the motion recording workspace

use core::fmt;

/// Result type alias for workspace operations
pub type MotResult<T> = Result<T, MotError>;

/// Error type shared by all workspace crates
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum MotError {
    /// Filter or configuration parameter out of its valid range
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Offending value
        value: f64,
        /// Valid range description
        valid_range: &'static str,
    },

    /// The record sink could not be opened or created
    StoreUnavailable {
        /// Description of the failure
        reason: String,
    },

    /// An append to the record sink failed mid-session
    WriteFailure {
        /// Description of the failure
        reason: String,
    },

    /// Invalid stream or simulation configuration
    InvalidStreamConfig {
        /// Description of the configuration error
        reason: String,
    },
}

impl fmt::Display for MotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotError::InvalidParameter { name, value, valid_range } => {
                write!(f, "Invalid parameter {}: {}, valid range: {}",
                       name, value, valid_range)
            }
            MotError::StoreUnavailable { reason } => {
                write!(f, "Record store unavailable: {}", reason)
            }
            MotError::WriteFailure { reason } => {
                write!(f, "Record write failed: {}", reason)
            }
            MotError::InvalidStreamConfig { reason } => {
                write!(f, "Invalid stream configuration: {}", reason)
            }
        }
    }
}

impl std::error::Error for MotError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = MotError::InvalidParameter {
            name: "process_noise",
            value: -0.5,
            valid_range: "> 0",
        };
        let display = format!("{}", error);
        assert!(display.contains("process_noise"));
        assert!(display.contains("-0.5"));
    }

    #[test]
    fn test_error_equality() {
        let error1 = MotError::StoreUnavailable {
            reason: "permission denied".to_string(),
        };
        let error2 = MotError::StoreUnavailable {
            reason: "permission denied".to_string(),
        };
        assert_eq!(error1, error2);
    }
}
