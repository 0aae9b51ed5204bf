use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::{BatchPixelChange, ChangeType, Glyph, GlyphState, PixelGrid, Size};
use crate::{FontEditError, Result};

/// Empty rows above and below the glyph body (line spacing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Margins {
    pub top: usize,
    pub bottom: usize,
}

impl Margins {
    pub const fn new(top: usize, bottom: usize) -> Self {
        Self { top, bottom }
    }
}

/// Summary shown next to the glyph overview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceInfo {
    pub font_name: String,
    pub size: Size,
    pub size_without_margins: Size,
    pub glyph_count: usize,
}

/// Full state of a face, handed to and accepted from an external serializer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceState {
    pub font_name: String,
    pub size: Size,
    #[serde(default)]
    pub margins: Margins,
    pub glyphs: Vec<GlyphState>,
    #[serde(default)]
    pub active_glyph: Option<usize>,
}

/// A bitmap font: an ordered glyph collection plus metadata.
///
/// All glyphs share the face's size. Glyph indices are positions in
/// insertion order and stay stable for the lifetime of the face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    font_name: String,
    size: Size,
    margins: Margins,
    glyphs: Vec<Glyph>,
    active_glyph: Option<usize>,
}

impl Face {
    /// Create a face without glyphs.
    pub fn new(font_name: impl Into<String>, size: Size, margins: Margins) -> Self {
        Self {
            font_name: font_name.into(),
            size,
            margins,
            glyphs: Vec::new(),
            active_glyph: None,
        }
    }

    /// Create a face from a rasterized glyph set.
    pub fn with_glyphs(font_name: impl Into<String>, size: Size, margins: Margins, glyphs: Vec<PixelGrid>) -> Result<Self> {
        let mut face = Self::new(font_name, size, margins);
        for grid in glyphs {
            face.add_glyph(grid)?;
        }
        Ok(face)
    }

    /// Restore a face from a previously captured [`FaceState`].
    pub fn from_state(state: FaceState) -> Result<Self> {
        let mut glyphs = Vec::with_capacity(state.glyphs.len());
        for (index, glyph) in state.glyphs.into_iter().enumerate() {
            for grid in [&glyph.current, &glyph.original] {
                if grid.size() != state.size {
                    return Err(FontEditError::invalid_face_state(format!(
                        "glyph {index} is {} but the face is {}",
                        grid.size(),
                        state.size
                    )));
                }
            }
            glyphs.push(Glyph::from_state(index, glyph));
        }
        if let Some(active) = state.active_glyph {
            if active >= glyphs.len() {
                return Err(FontEditError::invalid_face_state(format!(
                    "active glyph {active} out of range (0..{})",
                    glyphs.len()
                )));
            }
        }
        Ok(Self {
            font_name: state.font_name,
            size: state.size,
            margins: state.margins,
            glyphs,
            active_glyph: state.active_glyph,
        })
    }

    /// Capture the full state for an external serializer.
    pub fn state(&self) -> FaceState {
        FaceState {
            font_name: self.font_name.clone(),
            size: self.size,
            margins: self.margins,
            glyphs: self.glyphs.iter().map(Glyph::state).collect(),
            active_glyph: self.active_glyph,
        }
    }

    pub fn font_name(&self) -> &str {
        &self.font_name
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn margins(&self) -> Margins {
        self.margins
    }

    /// Rows that remain when the margins are cut off.
    pub fn content_rows(&self) -> Range<usize> {
        let start = self.margins.top.min(self.size.height);
        let end = self.size.height.saturating_sub(self.margins.bottom).max(start);
        start..end
    }

    pub fn size_without_margins(&self) -> Size {
        Size::new(self.size.width, self.content_rows().len())
    }

    pub fn face_info(&self) -> FaceInfo {
        FaceInfo {
            font_name: self.font_name.clone(),
            size: self.size,
            size_without_margins: self.size_without_margins(),
            glyph_count: self.glyphs.len(),
        }
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn glyph(&self, index: usize) -> Result<&Glyph> {
        self.glyphs.get(index).ok_or_else(|| FontEditError::index_out_of_range(index, self.glyphs.len()))
    }

    fn glyph_mut(&mut self, index: usize) -> Result<&mut Glyph> {
        let len = self.glyphs.len();
        self.glyphs.get_mut(index).ok_or_else(|| FontEditError::index_out_of_range(index, len))
    }

    /// Append a glyph, returning its index.
    pub fn add_glyph(&mut self, grid: PixelGrid) -> Result<usize> {
        if grid.size() != self.size {
            return Err(FontEditError::GlyphSizeMismatch {
                expected: self.size,
                actual: grid.size(),
            });
        }
        let index = self.glyphs.len();
        self.glyphs.push(Glyph::new(index, grid));
        Ok(index)
    }

    pub fn active_glyph_index(&self) -> Option<usize> {
        self.active_glyph
    }

    pub fn active_glyph(&self) -> Option<&Glyph> {
        self.active_glyph.and_then(|index| self.glyphs.get(index))
    }

    pub fn set_active_glyph_index(&mut self, index: Option<usize>) -> Result<()> {
        if let Some(index) = index {
            self.glyph(index)?;
        }
        self.active_glyph = index;
        Ok(())
    }

    /// Apply a pixel diff to glyph `index`.
    pub fn modify_glyph(&mut self, index: usize, change: &BatchPixelChange, change_type: ChangeType) -> Result<()> {
        self.glyph_mut(index)?.apply_change(change, change_type);
        Ok(())
    }

    /// Overwrite the pixels of glyph `index` with a captured snapshot.
    pub fn set_glyph_pixels(&mut self, index: usize, pixels: &PixelGrid) -> Result<()> {
        let size = self.size;
        let glyph = self.glyph_mut(index)?;
        if pixels.size() != size {
            return Err(FontEditError::GlyphSizeMismatch {
                expected: size,
                actual: pixels.size(),
            });
        }
        glyph.set_pixels(pixels);
        Ok(())
    }

    /// Restore glyph `index` to its original pixels.
    pub fn reset_glyph(&mut self, index: usize) -> Result<()> {
        self.glyph_mut(index)?.reset();
        Ok(())
    }

    /// Restore the active glyph to its original pixels; does nothing if no glyph is active.
    pub fn reset_active_glyph(&mut self) {
        if let Some(index) = self.active_glyph {
            if let Some(glyph) = self.glyphs.get_mut(index) {
                glyph.reset();
            }
        }
    }

    /// Restore every glyph to its original pixels.
    pub fn reset(&mut self) {
        for glyph in &mut self.glyphs {
            glyph.reset();
        }
    }

    pub fn is_glyph_modified(&self, index: usize) -> Result<bool> {
        Ok(self.glyph(index)?.is_modified())
    }

    pub fn is_modified(&self) -> bool {
        self.glyphs.iter().any(Glyph::is_modified)
    }
}
