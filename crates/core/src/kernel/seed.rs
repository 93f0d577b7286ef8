//! Random seeding of the current generation

use crate::grid::Grid;
use rand::Rng;

/// Intensity written into every seeded cell
pub const SEED_INTENSITY: f32 = 1.0;

/// Light `count` uniformly chosen cells at full intensity
///
/// Positions are drawn with replacement, so a cell may be picked more than
/// once and the number of distinct lit cells can be lower than `count`.
/// Cells that are not picked keep their value.
///
/// # Returns
///
/// The positions drawn, in draw order (duplicates included)
pub fn seed_cells<R: Rng + ?Sized>(
    grid: &mut Grid,
    count: usize,
    rng: &mut R,
) -> Vec<(usize, usize)> {
    let (width, height) = grid.dimensions();
    let mut picks = Vec::with_capacity(count);

    for _ in 0..count {
        let x = rng.random_range(0..width);
        let y = rng.random_range(0..height);
        grid.set(x as i64, y as i64, SEED_INTENSITY);
        picks.push((x, y));
    }

    picks
}
