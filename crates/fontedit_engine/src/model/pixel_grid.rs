//! Fixed-size binary bitmap storage for a single glyph.

use serde::{Deserialize, Serialize};

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: usize,
    pub height: usize,
}

impl Size {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A width×height grid of pixels, one bit per cell.
///
/// Pixels are stored row-major. The dimensions are fixed at construction;
/// reading or writing outside of them is a caller bug and panics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    pixels: Vec<bool>,
}

impl PixelGrid {
    /// Create an empty grid (all pixels off).
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![false; width * height],
        }
    }

    /// Create a grid from row data as produced by a font importer.
    ///
    /// Missing rows or columns are filled with unset pixels, surplus ones are ignored.
    pub fn from_rows(width: usize, height: usize, rows: &[Vec<bool>]) -> Self {
        let mut grid = Self::new(width, height);
        for (y, row) in rows.iter().enumerate().take(height) {
            for (x, &pixel) in row.iter().enumerate().take(width) {
                grid.pixels[y * width + x] = pixel;
            }
        }
        grid
    }

    /// Parse a textual picture, one line per row: `#`, `X` or `1` is a set pixel,
    /// anything else is unset. The grid is sized by the longest line.
    pub fn from_text(text: &str) -> Self {
        let rows: Vec<Vec<bool>> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().map(|c| matches!(c, '#' | 'X' | '1')).collect())
            .collect();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        Self::from_rows(width, rows.len(), &rows)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Read the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the grid.
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.pixels[self.offset(x, y)]
    }

    /// Write the pixel at (x, y). Writing the current value is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the grid.
    pub fn set_pixel(&mut self, x: usize, y: usize, value: bool) {
        let offset = self.offset(x, y);
        self.pixels[offset] = value;
    }

    /// Overwrite every pixel with the contents of `other`.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions differ.
    pub fn overwrite(&mut self, other: &PixelGrid) {
        assert_eq!(self.size(), other.size(), "bulk overwrite requires equal grid dimensions");
        self.pixels.copy_from_slice(&other.pixels);
    }

    /// The pixels of row `y`, left to right.
    pub fn row(&self, y: usize) -> &[bool] {
        assert!(y < self.height, "row {y} outside of {}x{} grid", self.width, self.height);
        &self.pixels[y * self.width..(y + 1) * self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        (0..self.height).map(move |y| self.row(y))
    }

    /// Check if the grid is empty (all pixels off).
    pub fn is_empty(&self) -> bool {
        !self.pixels.iter().any(|&p| p)
    }

    pub fn count_set(&self) -> usize {
        self.pixels.iter().filter(|&&p| p).count()
    }

    fn offset(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside of {}x{} grid",
            self.width,
            self.height
        );
        y * self.width + x
    }
}

impl std::fmt::Display for PixelGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            let line: String = row.iter().map(|&p| if p { '#' } else { '.' }).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = PixelGrid::new(8, 16);
        assert_eq!(grid.size(), Size::new(8, 16));
        assert!(grid.is_empty());
    }

    #[test]
    fn test_get_set_pixel() {
        let mut grid = PixelGrid::new(8, 2);
        grid.set_pixel(7, 1, true);
        assert!(grid.pixel(7, 1));
        assert!(!grid.pixel(0, 0));

        // same value again is fine
        grid.set_pixel(7, 1, true);
        assert_eq!(grid.count_set(), 1);

        grid.set_pixel(7, 1, false);
        assert!(grid.is_empty());
    }

    #[test]
    #[should_panic]
    fn test_out_of_bounds_write_panics() {
        let mut grid = PixelGrid::new(4, 4);
        grid.set_pixel(4, 0, true);
    }

    #[test]
    fn test_from_text() {
        let grid = PixelGrid::from_text(
            "
            #..#
            .##.
            ",
        );
        assert_eq!(grid.size(), Size::new(4, 2));
        assert_eq!(grid.row(0), &[true, false, false, true]);
        assert_eq!(grid.row(1), &[false, true, true, false]);
        assert_eq!(grid.to_string(), "#..#\n.##.\n");
    }

    #[test]
    fn test_from_rows_pads_short_rows() {
        let grid = PixelGrid::from_rows(3, 2, &[vec![true]]);
        assert_eq!(grid.row(0), &[true, false, false]);
        assert_eq!(grid.row(1), &[false, false, false]);
    }

    #[test]
    fn test_overwrite() {
        let mut a = PixelGrid::new(2, 2);
        let mut b = PixelGrid::new(2, 2);
        b.set_pixel(1, 1, true);
        a.overwrite(&b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_rows_of_zero_width_grid() {
        let grid = PixelGrid::new(0, 3);
        assert_eq!(grid.rows().count(), 3);
        assert!(grid.rows().all(|row| row.is_empty()));
    }
}
