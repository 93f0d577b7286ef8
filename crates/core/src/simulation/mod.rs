//! Host-facing simulation layer
//!
//! Wraps a [`Grid`](crate::Grid) and a [`SimulationKernel`](crate::SimulationKernel)
//! into an owned [`Automaton`] that hosts drive through the [`Steppable`]
//! capability, configured by a serde-friendly [`SimulationConfig`].

mod automaton;
mod config;
pub mod profiler;
mod stats;
mod steppable;

pub use automaton::Automaton;
pub use config::{SimulationConfig, DEFAULT_HEIGHT, DEFAULT_SEED_COUNT, DEFAULT_WIDTH};
pub use profiler::{ProfilerScope, StepTimer};
pub use stats::{GridStats, LIT_THRESHOLD};
pub use steppable::Steppable;
