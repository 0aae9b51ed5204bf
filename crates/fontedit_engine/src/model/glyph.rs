use serde::{Deserialize, Serialize};

use super::{BatchPixelChange, ChangeType, PixelGrid, Size};

/// One character's bitmap plus edit tracking.
///
/// `original` is captured when the face is loaded and never changes;
/// `modified` is kept in sync with `current != original` by every mutator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    index: usize,
    current: PixelGrid,
    original: PixelGrid,
    modified: bool,
}

/// Serializable glyph contents, see [`crate::FaceState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphState {
    pub current: PixelGrid,
    pub original: PixelGrid,
}

impl Glyph {
    pub fn new(index: usize, grid: PixelGrid) -> Self {
        Self {
            index,
            original: grid.clone(),
            current: grid,
            modified: false,
        }
    }

    pub(crate) fn from_state(index: usize, state: GlyphState) -> Self {
        let modified = state.current != state.original;
        Self {
            index,
            current: state.current,
            original: state.original,
            modified,
        }
    }

    pub(crate) fn state(&self) -> GlyphState {
        GlyphState {
            current: self.current.clone(),
            original: self.original.clone(),
        }
    }

    /// Position within the face.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn size(&self) -> Size {
        self.current.size()
    }

    pub fn pixels(&self) -> &PixelGrid {
        &self.current
    }

    pub fn original_pixels(&self) -> &PixelGrid {
        &self.original
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub(crate) fn apply_change(&mut self, change: &BatchPixelChange, change_type: ChangeType) {
        change.apply(&mut self.current, change_type);
        self.update_modified();
    }

    pub(crate) fn set_pixels(&mut self, pixels: &PixelGrid) {
        self.current.overwrite(pixels);
        self.update_modified();
    }

    pub(crate) fn reset(&mut self) {
        self.current.overwrite(&self.original);
        self.modified = false;
    }

    fn update_modified(&mut self) {
        self.modified = self.current != self.original;
    }
}
