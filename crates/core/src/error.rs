//! Error types for grid construction and kernel configuration
//!
//! Construction and configuration are the only fallible operations in the
//! kernel. Stepping, seeding, and coordinate access never fail: coordinates
//! wrap toroidally and numeric edge cases are absorbed by the transition guard.

use thiserror::Error;

/// Errors surfaced when building a grid or validating kernel parameters
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SmoothLifeError {
    /// Width or height was below one cell
    #[error("invalid grid dimensions {width}x{height}: both must be at least 1")]
    InvalidDimensions {
        /// Requested width in cells
        width: i64,
        /// Requested height in cells
        height: i64,
    },

    /// A transition or configuration parameter was out of range
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Name of the offending parameter
        name: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}

impl SmoothLifeError {
    /// Build an `InvalidParameter` error for a value that failed a constraint
    pub(crate) fn invalid_parameter(name: &'static str, value: f32, constraint: &str) -> Self {
        Self::InvalidParameter {
            name,
            reason: format!("{constraint}, got {value}"),
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, SmoothLifeError>;
