//! Simulation kernel: neighborhood aggregation, transition rule, seeding
//!
//! The kernel is stateless apart from its transition constants and execution
//! mode. All automaton state lives in the [`Grid`] passed to each call, so a
//! single kernel can drive any number of grids.
//!
//! # Execution modes
//!
//! - [`ExecutionMode::Parallel`] (default): rows of the next generation are
//!   computed on the rayon pool and joined before the buffer swap.
//! - [`ExecutionMode::Sequential`]: a single-threaded walk writing cell by
//!   cell through [`Grid::set_next`].
//!
//! Both modes yield bit-identical generations.
//!
//! # Example
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use smoothlife_core::{Grid, SimulationKernel};
//!
//! let mut grid = Grid::new(15, 10)?;
//! let kernel = SimulationKernel::default();
//! kernel.seed(&mut grid, 5, &mut StdRng::seed_from_u64(42));
//! kernel.step(&mut grid);
//! assert!(grid.cells().iter().all(|v| (0.0..=1.0).contains(v)));
//! # Ok::<(), smoothlife_core::SmoothLifeError>(())
//! ```

mod neighborhood;
mod params;
mod seed;
mod step;
mod transition;

pub use neighborhood::{buffer_neighborhood_mean, neighborhood_mean, NEIGHBORHOOD_SIZE};
pub use params::{
    TransitionParams, DEFAULT_BIRTH, DEFAULT_DEATH, DEFAULT_DT, DEFAULT_EPSILON,
    DEFAULT_STEEPNESS,
};
pub use seed::{seed_cells, SEED_INTENSITY};
pub use step::{step_parallel, step_sequential};
pub use transition::{sigmoid, transition};

use crate::error::Result;
use crate::grid::Grid;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

/// How a generation is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionMode {
    /// One thread, cell by cell
    Sequential,
    /// Rows spread over the rayon thread pool
    #[default]
    Parallel,
}

/// Applies the `SmoothLife` rule to a [`Grid`]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SimulationKernel {
    params: TransitionParams,
    mode: ExecutionMode,
}

impl SimulationKernel {
    /// Create a kernel with validated transition constants
    ///
    /// # Errors
    ///
    /// Returns [`crate::SmoothLifeError::InvalidParameter`] if `params` fails
    /// [`TransitionParams::validate`].
    pub fn new(params: TransitionParams) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            params,
            mode: ExecutionMode::default(),
        })
    }

    /// Select the execution mode
    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Transition constants in use
    #[must_use]
    pub fn params(&self) -> &TransitionParams {
        &self.params
    }

    /// Execution mode in use
    #[must_use]
    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    /// Light `count` randomly chosen cells at full intensity
    ///
    /// See [`seed_cells`]. Never fails on a constructed grid.
    pub fn seed<R: Rng + ?Sized>(&self, grid: &mut Grid, count: usize, rng: &mut R) {
        let picks = seed_cells(grid, count, rng);
        info!(
            "Seeded {} picks on {}x{} grid ({} distinct)",
            picks.len(),
            grid.width(),
            grid.height(),
            distinct(&picks)
        );
    }

    /// Advance the grid by one generation
    ///
    /// Every cell's next value is a function of the current generation only;
    /// the buffers are swapped exactly once at the end.
    pub fn step(&self, grid: &mut Grid) {
        match self.mode {
            ExecutionMode::Sequential => step_sequential(grid, &self.params),
            ExecutionMode::Parallel => step_parallel(grid, &self.params),
        }
    }
}

fn distinct(picks: &[(usize, usize)]) -> usize {
    let mut sorted = picks.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    sorted.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SmoothLifeError;

    #[test]
    fn test_kernel_defaults() {
        let kernel = SimulationKernel::default();
        assert_eq!(kernel.params(), &TransitionParams::default());
        assert_eq!(kernel.mode(), ExecutionMode::Parallel);
    }

    #[test]
    fn test_kernel_rejects_invalid_params() {
        let params = TransitionParams {
            steepness: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            SimulationKernel::new(params),
            Err(SmoothLifeError::InvalidParameter {
                name: "steepness",
                ..
            })
        ));
    }

    #[test]
    fn test_modes_produce_identical_generations() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let parallel = SimulationKernel::default();
        let sequential = parallel.with_mode(ExecutionMode::Sequential);

        let mut a = Grid::new(32, 24).unwrap();
        parallel.seed(&mut a, 80, &mut StdRng::seed_from_u64(5));
        let mut b = a.clone();

        for _ in 0..25 {
            parallel.step(&mut a);
            sequential.step(&mut b);
        }
        assert_eq!(a, b);
    }

    #[test]
    fn test_distinct_counts_unique_positions() {
        assert_eq!(distinct(&[(1, 1), (2, 3), (1, 1)]), 2);
        assert_eq!(distinct(&[]), 0);
    }
}
