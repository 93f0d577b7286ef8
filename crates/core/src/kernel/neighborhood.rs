//! Toroidal 3×3 neighborhood aggregation

use crate::grid::{CellBuffer, Grid};

/// Number of cells in a 3×3 block, self included
pub const NEIGHBORHOOD_SIZE: usize = 9;

/// Mean of the 3×3 block centered on an in-range position, edges wrapped
///
/// Every cell in the block carries equal weight, including the center. The
/// summation order is fixed (row by row, left to right) so that every caller
/// gets bit-identical results for the same buffer.
#[inline]
#[must_use]
pub fn buffer_neighborhood_mean(buffer: &CellBuffer, x: usize, y: usize) -> f32 {
    let width = buffer.width();
    let height = buffer.height();
    let data = buffer.as_slice();

    let columns = [(x + width - 1) % width, x, (x + 1) % width];
    let rows = [(y + height - 1) % height, y, (y + 1) % height];

    let mut sum = 0.0_f32;
    for row in rows {
        let offset = row * width;
        for col in columns {
            sum += data[offset + col];
        }
    }

    sum / NEIGHBORHOOD_SIZE as f32
}

/// Mean of the 3×3 block around `(x, y)` in the grid's current generation
///
/// Coordinates are wrapped first, so any integer position is accepted.
#[must_use]
pub fn neighborhood_mean(grid: &Grid, x: i64, y: i64) -> f32 {
    let (wx, wy) = grid.wrap(x, y);
    buffer_neighborhood_mean(grid.current(), wx, wy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_single_lit_cell_contributes_one_ninth() {
        let mut grid = Grid::new(15, 10).unwrap();
        grid.set(7, 5, 1.0);

        assert_abs_diff_eq!(neighborhood_mean(&grid, 7, 5), 1.0 / 9.0);
        assert_abs_diff_eq!(neighborhood_mean(&grid, 6, 4), 1.0 / 9.0);
        assert_abs_diff_eq!(neighborhood_mean(&grid, 8, 6), 1.0 / 9.0);
        assert_eq!(neighborhood_mean(&grid, 9, 5), 0.0);
    }

    #[test]
    fn test_corner_wraps_to_opposite_edges() {
        let mut grid = Grid::new(15, 10).unwrap();
        grid.set(14, 9, 1.0);

        // (0, 0) sees (14, 9) diagonally across both seams
        assert_abs_diff_eq!(neighborhood_mean(&grid, 0, 0), 1.0 / 9.0);
        assert_abs_diff_eq!(neighborhood_mean(&grid, 14, 0), 1.0 / 9.0);
        assert_abs_diff_eq!(neighborhood_mean(&grid, 0, 9), 1.0 / 9.0);
        assert_eq!(neighborhood_mean(&grid, 1, 1), 0.0);
    }

    #[test]
    fn test_uniform_field_mean_is_field_value() {
        let mut grid = Grid::new(4, 4).unwrap();
        for y in 0..4 {
            for x in 0..4 {
                grid.set(x, y, 0.5);
            }
        }
        assert_abs_diff_eq!(neighborhood_mean(&grid, 2, 2), 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_narrow_grid_counts_wrapped_cells_repeatedly() {
        // On a 1×1 torus every neighbor is the cell itself
        let mut grid = Grid::new(1, 1).unwrap();
        grid.set(0, 0, 0.9);
        assert_abs_diff_eq!(neighborhood_mean(&grid, 0, 0), 0.9, epsilon = 1e-5);
    }
}
