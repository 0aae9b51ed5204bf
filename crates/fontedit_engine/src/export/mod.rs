//! Export of glyph bitmaps as embeddable source code.
//!
//! Data flows glyph → [`BitPacker`] → [`Element`] stream → [`SourceCodeFormat`] → text.

mod bit_packer;
mod format;
mod source_code;

pub use bit_packer::{BitOrder, BitPacker, PackingPolicy};
pub use format::{format_for, formats, ArduinoFormat, CFormat, SourceCodeFormat};
pub use source_code::{Element, Idiom, SourceCodeGenerator};

use serde::{Deserialize, Serialize};

use crate::{Face, Result};

/// Timestamp format used for the `Created:` header line.
pub const CREATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The current local time formatted for the `Created:` header line.
pub fn timestamp_now() -> String {
    chrono::Local::now().format(CREATED_FORMAT).to_string()
}

/// Which glyphs of a face to export.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GlyphSelection {
    #[default]
    All,
    /// The given glyph indices, in the given order
    Only(Vec<usize>),
}

impl GlyphSelection {
    /// Resolve to concrete indices, validating them against `face`.
    pub fn resolve(&self, face: &Face) -> Result<Vec<usize>> {
        match self {
            GlyphSelection::All => Ok((0..face.len()).collect()),
            GlyphSelection::Only(indices) => {
                for &index in indices {
                    face.glyph(index)?;
                }
                Ok(indices.clone())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    pub packing: PackingPolicy,
    /// Export the margin rows too; otherwise only the adjusted rows are packed.
    pub include_line_spacing: bool,
    /// Array identifier; derived from the font name when unset.
    pub array_name: Option<String>,
    /// Append a `Glyph <index>` comment to every row.
    pub glyph_comments: bool,
    /// Text for the `Created:` header line.
    pub created: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            packing: PackingPolicy::default(),
            include_line_spacing: true,
            array_name: None,
            glyph_comments: false,
            created: timestamp_now(),
        }
    }
}

impl ExportOptions {
    pub fn with_packing(mut self, packing: PackingPolicy) -> Self {
        self.packing = packing;
        self
    }

    pub fn with_created(mut self, created: impl Into<String>) -> Self {
        self.created = created.into();
        self
    }

    pub fn with_array_name(mut self, name: impl Into<String>) -> Self {
        self.array_name = Some(name.into());
        self
    }

    /// Capture the current local time as creation timestamp.
    pub fn stamp_now(&mut self) {
        self.created = timestamp_now();
    }

    pub(crate) fn array_name_for(&self, face: &Face) -> String {
        match &self.array_name {
            Some(name) => c_identifier(name),
            None => c_identifier(face.font_name()),
        }
    }
}

/// Turn arbitrary text into a valid C identifier.
pub fn c_identifier(name: &str) -> String {
    let mut ident: String = name
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if ident.is_empty() {
        return "font".to_string();
    }
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}

/// Render `selection` of `face` as source code in the dialect named `dialect`.
pub fn render(face: &Face, selection: &GlyphSelection, options: &ExportOptions, dialect: &str) -> Result<String> {
    let format = format_for(dialect)?;
    let glyphs = selection.resolve(face)?;
    log::debug!("rendering {} glyph(s) of '{}' as {}", glyphs.len(), face.font_name(), format.identifier());

    let generator = SourceCodeGenerator::new(face, glyphs, options);
    let mut elements = generator.elements();
    Ok(format.render(&mut elements))
}

/// Build an element stream for `selection` of `face`.
pub fn source_code<'a>(face: &'a Face, selection: &GlyphSelection, options: &'a ExportOptions) -> Result<SourceCodeGenerator<'a>> {
    let glyphs = selection.resolve(face)?;
    Ok(SourceCodeGenerator::new(face, glyphs, options))
}

