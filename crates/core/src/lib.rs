//! `SmoothLife` Core Library
//!
//! A continuous-state cellular automaton on a fixed-size toroidal grid. Each
//! cell holds an intensity in `[0, 1]`; every generation the 3×3 neighborhood
//! mean feeds a sigmoid birth/death rule and the result is written into a
//! second buffer that is swapped in once the whole generation is computed.
//!
//! ## Layout
//!
//! - [`grid`]: double-buffered storage with wrap-around addressing
//! - [`kernel`]: neighborhood aggregation, transition rule, seeding, stepping
//! - [`simulation`]: the owned [`Automaton`], its config, statistics and the
//!   [`Steppable`] capability hosts drive once per frame
//!
//! Rendering, input and frame pacing belong to the host. The library only
//! exposes values through [`Grid::get`] and [`Grid::cells`].

pub mod error;
pub mod grid;
pub mod kernel;
pub mod simulation;

// Re-export core types
pub use error::{Result, SmoothLifeError};
pub use grid::{CellBuffer, Grid};
pub use kernel::{ExecutionMode, SimulationKernel, TransitionParams};
pub use simulation::{Automaton, GridStats, SimulationConfig, Steppable};
