//! Double-buffered toroidal grid
//!
//! The grid owns two equally sized [`CellBuffer`]s. Reads always go to the
//! current buffer through wrapped coordinates, writes from the kernel go to
//! the next buffer, and a generation ends with an O(1) swap of the two.

use super::cell_buffer::CellBuffer;
use crate::error::{Result, SmoothLifeError};

/// Fixed-size 2D grid of intensities in `[0, 1]` with wrap-around edges
///
/// # Invariants
///
/// - Both buffers always have dimensions `width × height`
/// - Every value stored in either buffer lies in `[0, 1]`
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    current: CellBuffer,
    next: CellBuffer,
    width: usize,
    height: usize,
}

impl Grid {
    /// Create a grid with both buffers zeroed
    ///
    /// # Errors
    ///
    /// Returns [`SmoothLifeError::InvalidDimensions`] if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(SmoothLifeError::InvalidDimensions {
                width: i64::try_from(width).unwrap_or(i64::MAX),
                height: i64::try_from(height).unwrap_or(i64::MAX),
            });
        }

        Ok(Self {
            current: CellBuffer::new(width, height),
            next: CellBuffer::new(width, height),
            width,
            height,
        })
    }

    /// Create a grid from signed extents, as passed by C hosts
    ///
    /// # Errors
    ///
    /// Returns [`SmoothLifeError::InvalidDimensions`] if either value is below 1
    /// or does not fit in `usize`.
    pub fn from_signed(width: i64, height: i64) -> Result<Self> {
        let invalid = || SmoothLifeError::InvalidDimensions { width, height };
        let w = usize::try_from(width).map_err(|_| invalid())?;
        let h = usize::try_from(height).map_err(|_| invalid())?;
        Self::new(w, h).map_err(|_| invalid())
    }

    /// Grid width in cells
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)` in cells
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of cells in one buffer
    #[must_use]
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// Always false: construction rejects empty grids
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reduce arbitrary coordinates onto the torus
    #[inline]
    #[must_use]
    pub fn wrap(&self, x: i64, y: i64) -> (usize, usize) {
        (
            x.rem_euclid(self.width as i64) as usize,
            y.rem_euclid(self.height as i64) as usize,
        )
    }

    /// Read the current generation at wrapped coordinates
    #[must_use]
    pub fn get(&self, x: i64, y: i64) -> f32 {
        let (wx, wy) = self.wrap(x, y);
        self.current.get(wx, wy)
    }

    /// Write into the current generation at wrapped coordinates
    ///
    /// The value is clamped into `[0, 1]`; NaN is stored as `0.0`.
    pub fn set(&mut self, x: i64, y: i64, value: f32) {
        let (wx, wy) = self.wrap(x, y);
        let value = if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 1.0)
        };
        self.current.set(wx, wy, value);
    }

    /// Write into the next generation at in-range coordinates
    ///
    /// The caller supplies a value already clamped to `[0, 1]`.
    ///
    /// # Panics
    ///
    /// Panics if coordinates are out of bounds
    pub fn set_next(&mut self, x: usize, y: usize, value: f32) {
        debug_assert!((0.0..=1.0).contains(&value), "unclamped value {value}");
        self.next.set(x, y, value);
    }

    /// Exchange current and next without copying any cell
    pub fn swap_buffers(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
    }

    /// Row-major view of the current generation
    #[must_use]
    pub fn cells(&self) -> &[f32] {
        self.current.as_slice()
    }

    /// Current generation as a buffer
    #[must_use]
    pub fn current(&self) -> &CellBuffer {
        &self.current
    }

    /// Split borrow: the read-only current buffer and the writable next buffer
    pub fn buffers_mut(&mut self) -> (&CellBuffer, &mut CellBuffer) {
        (&self.current, &mut self.next)
    }

    /// Reset both buffers to zero
    pub fn clear(&mut self) {
        self.current.fill(0.0);
        self.next.fill(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation_zeroed() {
        let grid = Grid::new(15, 10).unwrap();
        assert_eq!(grid.dimensions(), (15, 10));
        assert_eq!(grid.len(), 150);
        assert!(!grid.is_empty());
        assert!(grid.cells().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_grid_rejects_zero_dimensions() {
        assert_eq!(
            Grid::new(0, 10),
            Err(SmoothLifeError::InvalidDimensions {
                width: 0,
                height: 10
            })
        );
        assert!(Grid::new(10, 0).is_err());
    }

    #[test]
    fn test_grid_rejects_negative_dimensions() {
        assert_eq!(
            Grid::from_signed(10, -1),
            Err(SmoothLifeError::InvalidDimensions {
                width: 10,
                height: -1
            })
        );
        assert!(Grid::from_signed(-3, 4).is_err());
        assert!(Grid::from_signed(1, 1).is_ok());
    }

    #[test]
    fn test_wrap_handles_negative_and_overflowing_coordinates() {
        let grid = Grid::new(15, 10).unwrap();
        assert_eq!(grid.wrap(-1, -1), (14, 9));
        assert_eq!(grid.wrap(15, 10), (0, 0));
        assert_eq!(grid.wrap(31, 23), (1, 3));
    }

    #[test]
    fn test_get_wraps_toroidally() {
        let mut grid = Grid::new(15, 10).unwrap();
        grid.set(0, 0, 0.5);
        assert_eq!(grid.get(15, 0), 0.5);
        assert_eq!(grid.get(0, 10), 0.5);
        assert_eq!(grid.get(-15, -10), 0.5);
    }

    #[test]
    fn test_set_clamps_values() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.set(1, 1, 3.0);
        grid.set(2, 2, -1.0);
        grid.set(3, 3, f32::NAN);
        assert_eq!(grid.get(1, 1), 1.0);
        assert_eq!(grid.get(2, 2), 0.0);
        assert_eq!(grid.get(3, 3), 0.0);
    }

    #[test]
    fn test_set_next_is_invisible_until_swap() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set_next(1, 2, 0.25);
        assert_eq!(grid.get(1, 2), 0.0);

        grid.swap_buffers();
        assert_eq!(grid.get(1, 2), 0.25);
    }

    #[test]
    fn test_swap_exchanges_roles() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set(0, 0, 1.0);
        grid.swap_buffers();
        assert_eq!(grid.get(0, 0), 0.0);
        grid.swap_buffers();
        assert_eq!(grid.get(0, 0), 1.0);
    }

    #[test]
    fn test_clear_resets_both_buffers() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(1, 1, 1.0);
        grid.set_next(2, 2, 1.0);
        grid.clear();
        assert!(grid.cells().iter().all(|&v| v == 0.0));
        grid.swap_buffers();
        assert!(grid.cells().iter().all(|&v| v == 0.0));
    }
}
