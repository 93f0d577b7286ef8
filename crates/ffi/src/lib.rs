//! C ABI for embedding the `SmoothLife` automaton in a host application
//!
//! The host owns the frame loop and the renderer; this crate only exposes
//! construction, seeding, stepping and read access. A C header is generated
//! into the workspace root by the build script.
//!
//! Every fallible call returns a [`SmoothLifeErrorCode`] and records a
//! message retrievable with [`smoothlife_get_last_error`] on the same thread.

mod error;
mod helpers;
mod instance;
mod queries;
mod simulation;

pub use error::{smoothlife_get_last_error, smoothlife_get_last_error_code, SmoothLifeErrorCode};
pub use instance::{smoothlife_destroy, smoothlife_new, SmoothLifeInstance};
pub use queries::{
    smoothlife_copy_cells, smoothlife_dimensions, smoothlife_generation, smoothlife_get,
};
pub use simulation::{smoothlife_reset, smoothlife_seed, smoothlife_step};
