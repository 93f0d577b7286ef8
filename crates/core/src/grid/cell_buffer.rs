//! Row-major storage for one generation of cell intensities
//!
//! A `CellBuffer` is one half of the grid's double buffer. It stores the
//! scalar channel as a flat `Vec<f32>` so whole rows can be handed to worker
//! threads as contiguous slices.

/// One W×H plane of cell values
///
/// Stores values as a flat `Vec<f32>` in row-major order (`y * width + x`).
#[derive(Debug, Clone, PartialEq)]
pub struct CellBuffer {
    data: Vec<f32>,
    width: usize,
    height: usize,
}

impl CellBuffer {
    /// Create a new buffer with given dimensions, initialized to zero
    ///
    /// # Arguments
    ///
    /// * `width` - Buffer width in cells
    /// * `height` - Buffer height in cells
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_value(width, height, 0.0)
    }

    /// Create a new buffer with given dimensions, initialized to a value
    #[must_use]
    pub fn with_value(width: usize, height: usize, value: f32) -> Self {
        Self {
            data: vec![value; width * height],
            width,
            height,
        }
    }

    /// Buffer width in cells
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Buffer height in cells
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get reference to the raw values
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Get mutable reference to the raw values
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Flat index of an in-range position
    #[inline]
    #[must_use]
    pub fn index_of(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Get value at an in-range position
    ///
    /// # Panics
    ///
    /// Panics if coordinates are out of bounds
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        assert!(
            x < self.width && y < self.height,
            "Coordinates out of bounds"
        );
        self.data[self.index_of(x, y)]
    }

    /// Set value at an in-range position
    ///
    /// # Panics
    ///
    /// Panics if coordinates are out of bounds
    pub fn set(&mut self, x: usize, y: usize, value: f32) {
        assert!(
            x < self.width && y < self.height,
            "Coordinates out of bounds"
        );
        let idx = self.index_of(x, y);
        self.data[idx] = value;
    }

    /// Fill every cell with a value
    pub fn fill(&mut self, value: f32) {
        self.data.fill(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_creation() {
        let buffer = CellBuffer::new(15, 10);
        assert_eq!(buffer.width(), 15);
        assert_eq!(buffer.height(), 10);
        assert_eq!(buffer.as_slice().len(), 150);
        assert!(buffer.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_buffer_get_set_row_major() {
        let mut buffer = CellBuffer::new(10, 10);
        buffer.set(3, 4, 0.75);
        assert_eq!(buffer.get(3, 4), 0.75);
        assert_eq!(buffer.as_slice()[4 * 10 + 3], 0.75);
        assert_eq!(buffer.index_of(3, 4), 43);
    }

    #[test]
    fn test_buffer_fill() {
        let mut buffer = CellBuffer::with_value(5, 5, 0.2);
        buffer.fill(0.9);
        assert!(buffer.as_slice().iter().all(|&v| v == 0.9));
    }

    #[test]
    #[should_panic(expected = "Coordinates out of bounds")]
    fn test_buffer_bounds_check() {
        let buffer = CellBuffer::new(10, 10);
        let _ = buffer.get(10, 5);
    }
}
