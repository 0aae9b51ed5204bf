//! Dialect independent token stream describing an exported font.
//!
//! The stream for a face always has the shape
//!
//! ```text
//! Begin(created) BeginArray(name)
//!     ( BeginArrayRow Byte* Comment? LineBreak )*   one row per glyph
//! EndArray End
//! ```
//!
//! A [`super::SourceCodeFormat`] turns every element into text on its own.

use std::iter;

use super::{BitPacker, ExportOptions};
use crate::Face;

/// Structural role of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Idiom {
    Begin,
    BeginArray,
    Byte,
    Comment,
    BeginArrayRow,
    LineBreak,
    EndArray,
    End,
}

/// One token of the export stream together with its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// Start of output; carries the creation timestamp
    Begin(String),
    /// Start of the byte array; carries the array identifier
    BeginArray(String),
    Byte(u8),
    Comment(String),
    BeginArrayRow,
    LineBreak,
    EndArray,
    End,
}

impl Element {
    pub fn idiom(&self) -> Idiom {
        match self {
            Element::Begin(_) => Idiom::Begin,
            Element::BeginArray(_) => Idiom::BeginArray,
            Element::Byte(_) => Idiom::Byte,
            Element::Comment(_) => Idiom::Comment,
            Element::BeginArrayRow => Idiom::BeginArrayRow,
            Element::LineBreak => Idiom::LineBreak,
            Element::EndArray => Idiom::EndArray,
            Element::End => Idiom::End,
        }
    }

    /// Text payload of `Begin`, `BeginArray` and `Comment` elements.
    pub fn text(&self) -> Option<&str> {
        match self {
            Element::Begin(text) | Element::BeginArray(text) | Element::Comment(text) => Some(text),
            _ => None,
        }
    }
}

/// Produces the element stream for a set of glyphs of one face.
///
/// The generator holds no iteration state: every call to [`elements`]
/// starts a fresh, lazily packed stream.
///
/// [`elements`]: SourceCodeGenerator::elements
pub struct SourceCodeGenerator<'a> {
    face: &'a Face,
    glyphs: Vec<usize>,
    options: &'a ExportOptions,
}

impl<'a> SourceCodeGenerator<'a> {
    /// `glyphs` must be valid indices into `face`.
    pub(crate) fn new(face: &'a Face, glyphs: Vec<usize>, options: &'a ExportOptions) -> Self {
        Self { face, glyphs, options }
    }

    pub fn elements(&self) -> impl Iterator<Item = Element> + '_ {
        let packer = BitPacker::new(self.options.packing);
        let rows = if self.options.include_line_spacing {
            0..self.face.size().height
        } else {
            self.face.content_rows()
        };

        let body = self.glyphs.iter().flat_map(move |&index| {
            let glyph = &self.face.glyphs()[index];
            let bytes = packer.pack_rows(glyph.pixels(), rows.clone());
            let comment = self.options.glyph_comments.then(|| Element::Comment(format!("Glyph {index}")));

            iter::once(Element::BeginArrayRow)
                .chain(bytes.into_iter().map(Element::Byte))
                .chain(comment)
                .chain(iter::once(Element::LineBreak))
        });

        [
            Element::Begin(self.options.created.clone()),
            Element::BeginArray(self.options.array_name_for(self.face)),
        ]
        .into_iter()
        .chain(body)
        .chain([Element::EndArray, Element::End])
    }
}
