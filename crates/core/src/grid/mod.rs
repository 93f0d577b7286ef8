//! Grid storage: row-major cell buffers and the double-buffered torus

mod cell_buffer;
mod toroidal_grid;

// Re-export main types
pub use cell_buffer::CellBuffer;
pub use toroidal_grid::Grid;
