//! Glyph and face data model with change tracking.

mod face;
mod glyph;
mod pixel_change;
mod pixel_grid;

pub use face::{Face, FaceInfo, FaceState, Margins};
pub use glyph::{Glyph, GlyphState};
pub use pixel_change::{BatchPixelChange, ChangeType, PixelChange};
pub use pixel_grid::{PixelGrid, Size};
