//! Owned automaton: one grid, one kernel, a generation counter

use super::config::SimulationConfig;
use super::profiler::{ProfilerScope, StepTimer};
use super::stats::GridStats;
use super::steppable::Steppable;
use crate::error::Result;
use crate::grid::Grid;
use crate::kernel::SimulationKernel;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// A `SmoothLife` automaton held by whatever orchestrates the simulation
///
/// Bundles the grid with the kernel that evolves it. There is no global
/// instance; hosts create as many as they need and drive each through
/// [`Steppable`].
#[derive(Debug, Clone)]
pub struct Automaton {
    grid: Grid,
    kernel: SimulationKernel,
    generation: u64,
    timer: StepTimer,
}

impl Automaton {
    /// Build an unseeded automaton from a config
    ///
    /// # Errors
    ///
    /// Returns [`crate::SmoothLifeError::InvalidDimensions`] or
    /// [`crate::SmoothLifeError::InvalidParameter`] if the config is invalid.
    /// No partially built automaton is returned.
    pub fn new(config: &SimulationConfig) -> Result<Self> {
        config.validate()?;

        let grid = Grid::new(config.width, config.height)?;
        let kernel = SimulationKernel::new(config.transition)?.with_mode(config.mode);

        Ok(Self::from_parts(grid, kernel))
    }

    /// Wrap an existing grid and kernel, starting at generation zero
    #[must_use]
    pub fn from_parts(grid: Grid, kernel: SimulationKernel) -> Self {
        info!(
            "Automaton initialized: {}x{} grid, mode={:?}",
            grid.width(),
            grid.height(),
            kernel.mode()
        );

        Self {
            grid,
            kernel,
            generation: 0,
            timer: StepTimer::new(),
        }
    }

    /// Build and seed an automaton in one go
    ///
    /// Uses `config.rng_seed` when set so the lit cells are reproducible.
    ///
    /// # Errors
    ///
    /// Same as [`Automaton::new`].
    pub fn from_config(config: &SimulationConfig) -> Result<Self> {
        let mut automaton = Self::new(config)?;
        let mut rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        automaton.seed_random(config.seed_count, &mut rng);
        Ok(automaton)
    }

    /// Light `count` random cells using the supplied source
    pub fn seed_random<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) {
        self.kernel.seed(&mut self.grid, count, rng);
    }

    /// Light `count` random cells drawn from a fixed RNG seed
    pub fn seed_from(&mut self, count: usize, rng_seed: u64) {
        let mut rng = StdRng::seed_from_u64(rng_seed);
        self.seed_random(count, &mut rng);
    }

    /// Read-only access for renderers
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access for placing individual cells between steps
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Kernel driving this automaton
    #[must_use]
    pub fn kernel(&self) -> &SimulationKernel {
        &self.kernel
    }

    /// Statistics for the current generation
    #[must_use]
    pub fn stats(&self) -> GridStats {
        GridStats::collect(&self.grid, self.generation)
    }

    /// Wall time of the last step in milliseconds
    #[must_use]
    pub fn last_step_ms(&self) -> f64 {
        self.timer.last_step_ms()
    }

    /// Zero the grid and restart the generation count
    pub fn reset(&mut self) {
        self.grid.clear();
        self.generation = 0;
        self.timer = StepTimer::new();
        debug!("Automaton reset");
    }
}

impl Steppable for Automaton {
    fn step(&mut self) {
        let scope = ProfilerScope::new("automaton step");
        self.kernel.step(&mut self.grid);
        self.generation += 1;
        self.timer.record(scope.elapsed_ms());

        debug!(
            "Generation {}: step took {:.3}ms",
            self.generation,
            self.timer.last_step_ms()
        );
    }

    fn generation(&self) -> u64 {
        self.generation
    }
}
