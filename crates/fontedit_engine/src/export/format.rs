//! Source code dialects.
//!
//! A dialect maps each [`Element`] to text without looking at any other
//! element. New dialects only need an implementation of
//! [`SourceCodeFormat`] and an entry in the registry below.

use super::Element;
use crate::{FontEditError, Result};

pub trait SourceCodeFormat: Sync {
    /// Short name used to select the dialect, e.g. `"c"`.
    fn identifier(&self) -> &'static str;

    /// Human readable name for format pickers.
    fn name(&self) -> &'static str;

    /// Append the text for `element` to `out`.
    fn append(&self, out: &mut String, element: &Element);

    /// Render a whole element stream.
    fn render(&self, elements: &mut dyn Iterator<Item = Element>) -> String {
        let mut out = String::new();
        for element in elements {
            self.append(&mut out, &element);
        }
        out
    }
}

/// Plain C: `const unsigned char name[] = { ... };`
#[derive(Debug, Clone, Copy, Default)]
pub struct CFormat;

impl SourceCodeFormat for CFormat {
    fn identifier(&self) -> &'static str {
        "c"
    }

    fn name(&self) -> &'static str {
        "C/C++"
    }

    fn append(&self, out: &mut String, element: &Element) {
        match element {
            Element::Begin(created) => {
                out.push_str("//\n// Font Data\n// Created: ");
                out.push_str(created);
                out.push_str("\n//\n");
            }
            Element::BeginArray(name) => {
                out.push_str(&format!("\nconst unsigned char {name}[] = {{\n"));
            }
            Element::Byte(byte) => {
                out.push_str(&format!("0x{byte:02X},"));
            }
            Element::Comment(text) => {
                out.push_str(" // ");
                out.push_str(text);
            }
            Element::BeginArrayRow => out.push('\t'),
            Element::LineBreak => out.push('\n'),
            Element::EndArray => out.push_str("};\n"),
            Element::End => out.push('\n'),
        }
    }
}

/// Arduino: the C dialect with `<Arduino.h>` and a `PROGMEM` array of `uint8_t`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArduinoFormat;

impl SourceCodeFormat for ArduinoFormat {
    fn identifier(&self) -> &'static str {
        "arduino"
    }

    fn name(&self) -> &'static str {
        "Arduino"
    }

    fn append(&self, out: &mut String, element: &Element) {
        match element {
            Element::Begin(_) => {
                CFormat.append(out, element);
                out.push_str("\n#include <Arduino.h>\n");
            }
            Element::BeginArray(name) => {
                out.push_str(&format!("\nconst uint8_t {name}[] PROGMEM = {{\n"));
            }
            _ => CFormat.append(out, element),
        }
    }
}

static FORMATS: [&dyn SourceCodeFormat; 2] = [&CFormat, &ArduinoFormat];

/// All registered dialects, in display order.
pub fn formats() -> &'static [&'static dyn SourceCodeFormat] {
    &FORMATS
}

/// Look up a dialect by its identifier, ignoring ASCII case. Surrounding
/// whitespace is not stripped.
pub fn format_for(identifier: &str) -> Result<&'static dyn SourceCodeFormat> {
    FORMATS
        .iter()
        .copied()
        .find(|format| format.identifier().eq_ignore_ascii_case(identifier))
        .ok_or_else(|| FontEditError::unknown_dialect(identifier))
}
