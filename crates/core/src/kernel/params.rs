//! Transition constants for the sigmoid birth/death rule

use crate::error::{Result, SmoothLifeError};
use serde::{Deserialize, Serialize};

/// Sigmoid steepness `k`
pub const DEFAULT_STEEPNESS: f32 = 20.0;
/// Birth threshold center `b`
pub const DEFAULT_BIRTH: f32 = 0.3;
/// Death threshold center `d`
pub const DEFAULT_DEATH: f32 = 0.4;
/// Time step `dt`
pub const DEFAULT_DT: f32 = 0.1;
/// Additive guard on the transition denominator `ε`
pub const DEFAULT_EPSILON: f32 = 1e-6;

/// Tunable constants of the transition rule
///
/// The defaults reproduce the reference automaton. Any field omitted from a
/// serialized config falls back to its default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionParams {
    /// Sigmoid steepness (`k`)
    pub steepness: f32,
    /// Neighborhood mean at which birth switches on (`b`)
    pub birth: f32,
    /// Neighborhood mean at which death switches on (`d`)
    pub death: f32,
    /// Integration step applied per generation (`dt`)
    pub dt: f32,
    /// Denominator guard (`ε`)
    pub epsilon: f32,
}

impl Default for TransitionParams {
    fn default() -> Self {
        Self {
            steepness: DEFAULT_STEEPNESS,
            birth: DEFAULT_BIRTH,
            death: DEFAULT_DEATH,
            dt: DEFAULT_DT,
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl TransitionParams {
    /// Check that every constant is usable by the rule
    ///
    /// # Errors
    ///
    /// Returns [`SmoothLifeError::InvalidParameter`] for non-finite values, a
    /// non-positive steepness, time step, or epsilon.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("steepness", self.steepness),
            ("birth", self.birth),
            ("death", self.death),
            ("dt", self.dt),
            ("epsilon", self.epsilon),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(SmoothLifeError::invalid_parameter(
                    name,
                    value,
                    "must be finite",
                ));
            }
        }

        let positive = [
            ("steepness", self.steepness),
            ("dt", self.dt),
            ("epsilon", self.epsilon),
        ];
        for (name, value) in positive {
            if value <= 0.0 {
                return Err(SmoothLifeError::invalid_parameter(
                    name,
                    value,
                    "must be positive",
                ));
            }
        }

        Ok(())
    }
}
