//! Grayscale ASCII rendering of a grid
//!
//! Maps each intensity to a gray level `(1 - v) * 255` (white background,
//! dark live cells) and then to a character from a light-to-dark ramp.

use smoothlife_core::Grid;

/// Characters ordered from white (gray 255) to black (gray 0)
const RAMP: &[u8] = b" .:-=+*#%@";

/// Gray level of a cell, 255 for empty and 0 for full intensity
pub fn gray_level(value: f32) -> u8 {
    ((1.0 - value.clamp(0.0, 1.0)) * 255.0) as u8
}

/// Character standing in for a gray level
pub fn shade(gray: u8) -> char {
    let darkness = 255 - usize::from(gray);
    let idx = darkness * (RAMP.len() - 1) / 255;
    char::from(RAMP[idx])
}

/// Render the current generation, one text line per grid row
pub fn render(grid: &Grid) -> String {
    let (width, height) = grid.dimensions();
    let mut out = String::with_capacity((width + 1) * height);
    for row in grid.cells().chunks(width) {
        out.extend(row.iter().map(|&v| shade(gray_level(v))));
        out.push('\n');
    }
    out
}
