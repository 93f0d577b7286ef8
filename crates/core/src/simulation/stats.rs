//! Summary statistics over the current generation

use crate::grid::Grid;
use serde::{Deserialize, Serialize};

/// Cells at or above this intensity count as lit
pub const LIT_THRESHOLD: f32 = 0.5;

/// Aggregate view of one generation, for logs and host overlays
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridStats {
    /// Generation the statistics were taken at
    pub generation: u64,
    /// Smallest cell value
    pub min: f32,
    /// Largest cell value
    pub max: f32,
    /// Mean cell value
    pub mean: f32,
    /// Cells with value `>= LIT_THRESHOLD`
    pub lit_cells: usize,
}

impl GridStats {
    /// Collect statistics from the grid's current generation
    #[must_use]
    pub fn collect(grid: &Grid, generation: u64) -> Self {
        let cells = grid.cells();
        let (min, max, sum, lit_cells) = cells.iter().fold(
            (f32::INFINITY, f32::NEG_INFINITY, 0.0_f64, 0_usize),
            |(min, max, sum, lit), &v| {
                (
                    min.min(v),
                    max.max(v),
                    sum + f64::from(v),
                    lit + usize::from(v >= LIT_THRESHOLD),
                )
            },
        );

        Self {
            generation,
            min,
            max,
            mean: (sum / cells.len() as f64) as f32,
            lit_cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_stats_on_empty_field() {
        let grid = Grid::new(15, 10).unwrap();
        let stats = GridStats::collect(&grid, 0);
        assert_eq!(stats.min, 0.0);
        assert_eq!(stats.max, 0.0);
        assert_eq!(stats.mean, 0.0);
        assert_eq!(stats.lit_cells, 0);
    }

    #[test]
    fn test_stats_counts_lit_cells() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set(0, 0, 1.0);
        grid.set(1, 0, 0.5);
        grid.set(0, 1, 0.25);

        let stats = GridStats::collect(&grid, 3);
        assert_eq!(stats.generation, 3);
        assert_eq!(stats.max, 1.0);
        assert_eq!(stats.min, 0.0);
        assert_eq!(stats.lit_cells, 2);
        assert_relative_eq!(stats.mean, 0.4375);
    }
}
