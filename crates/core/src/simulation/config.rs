//! Construction and seeding parameters for an [`Automaton`](super::Automaton)

use crate::error::{Result, SmoothLifeError};
use crate::kernel::{ExecutionMode, TransitionParams};
use serde::{Deserialize, Serialize};

/// Default grid width in cells
pub const DEFAULT_WIDTH: usize = 15;
/// Default grid height in cells
pub const DEFAULT_HEIGHT: usize = 10;
/// Default number of seed picks
pub const DEFAULT_SEED_COUNT: usize = 5;

/// Everything needed to build and seed an automaton
///
/// Deserializes from partial documents; omitted fields take their defaults.
///
/// ```toml
/// width = 64
/// height = 48
/// seed_count = 200
/// rng_seed = 42
/// mode = "sequential"
///
/// [transition]
/// dt = 0.05
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Grid width in cells
    pub width: usize,
    /// Grid height in cells
    pub height: usize,
    /// Number of random picks lit at full intensity
    pub seed_count: usize,
    /// Fixed RNG seed for reproducible seeding; `None` draws from the OS
    pub rng_seed: Option<u64>,
    /// Stepping strategy
    pub mode: ExecutionMode,
    /// Transition constants
    pub transition: TransitionParams,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed_count: DEFAULT_SEED_COUNT,
            rng_seed: None,
            mode: ExecutionMode::default(),
            transition: TransitionParams::default(),
        }
    }
}

impl SimulationConfig {
    /// Check dimensions and transition constants
    ///
    /// # Errors
    ///
    /// Returns [`SmoothLifeError::InvalidDimensions`] for a zero extent and
    /// [`SmoothLifeError::InvalidParameter`] for unusable transition constants.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SmoothLifeError::InvalidDimensions {
                width: i64::try_from(self.width).unwrap_or(i64::MAX),
                height: i64::try_from(self.height).unwrap_or(i64::MAX),
            });
        }
        self.transition.validate()
    }
}
