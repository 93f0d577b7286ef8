//! Per-generation update passes
//!
//! Both passes read only the current buffer and write only the next buffer,
//! then swap once. They share [`buffer_neighborhood_mean`] and [`transition`]
//! so they produce bit-identical generations.

use super::neighborhood::buffer_neighborhood_mean;
use super::params::TransitionParams;
use super::transition::transition;
use crate::grid::Grid;
use rayon::prelude::*;

/// Advance one generation on the calling thread
pub fn step_sequential(grid: &mut Grid, params: &TransitionParams) {
    let (width, height) = grid.dimensions();

    for y in 0..height {
        for x in 0..width {
            let current = grid.current();
            let average = buffer_neighborhood_mean(current, x, y);
            let next = transition(current.get(x, y), average, params);
            grid.set_next(x, y, next);
        }
    }

    grid.swap_buffers();
}

/// Advance one generation with rows spread over the rayon pool
///
/// The join at the end of `for_each` is the barrier: no value of the new
/// generation becomes readable until every row has been written.
pub fn step_parallel(grid: &mut Grid, params: &TransitionParams) {
    let width = grid.width();

    {
        let (current, next) = grid.buffers_mut();
        let values = current.as_slice();

        next.as_mut_slice()
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, cell) in row.iter_mut().enumerate() {
                    let average = buffer_neighborhood_mean(current, x, y);
                    *cell = transition(values[y * width + x], average, params);
                }
            });
    }

    grid.swap_buffers();
}
