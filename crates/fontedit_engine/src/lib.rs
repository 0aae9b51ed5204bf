//! Bitmap font model and source code export.
//!
//! - [`Face`] / [`Glyph`] / [`PixelGrid`] hold the font and track edits
//!   against the pixels the face was loaded with.
//! - [`BatchPixelChange`] is a reversible pixel diff used by the undo layer.
//! - [`export`] packs glyphs into bytes and renders them as C or Arduino source.

mod error;
pub mod export;
mod model;

pub use error::{FontEditError, Result};
pub use export::{render, BitOrder, BitPacker, ExportOptions, GlyphSelection, PackingPolicy};
pub use model::*;
