//! User facing export configuration, stored as TOML by the caller.

use fontedit_engine::export::format_for;
use fontedit_engine::{BitOrder, ExportOptions, FontEditError, PackingPolicy, Result};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ExportSettings {
    /// Identifier of the source code dialect ("c", "arduino")
    pub output_format: String,
    pub invert_bits: bool,
    /// Leftmost pixel in the most significant bit
    pub msb_first: bool,
    /// Export the font's top and bottom margins too
    pub include_line_spacing: bool,
    pub pad_rows: bool,
    pub glyph_comments: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            output_format: "c".to_string(),
            invert_bits: false,
            msb_first: true,
            include_line_spacing: true,
            pad_rows: true,
            glyph_comments: false,
        }
    }
}

impl ExportSettings {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let settings: Self = toml::from_str(text).map_err(FontEditError::invalid_settings)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(FontEditError::invalid_settings)
    }

    /// Fails with `UnknownDialect` if the output format is not registered.
    pub fn validate(&self) -> Result<()> {
        format_for(&self.output_format).map(|_| ())
    }

    pub fn packing_policy(&self) -> PackingPolicy {
        PackingPolicy {
            bit_order: if self.msb_first { BitOrder::MsbFirst } else { BitOrder::LsbFirst },
            invert: self.invert_bits,
            pad_rows: self.pad_rows,
        }
    }

    /// Options for one export with the given `Created:` timestamp.
    pub fn export_options(&self, created: &str) -> ExportOptions {
        let mut options = ExportOptions::default().with_packing(self.packing_policy()).with_created(created);
        options.include_line_spacing = self.include_line_spacing;
        options.glyph_comments = self.glyph_comments;
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let settings = ExportSettings::from_toml_str("output_format = \"arduino\"\ninvert_bits = true\n").unwrap();
        assert_eq!(settings.output_format, "arduino");
        assert!(settings.invert_bits);
        assert!(settings.msb_first);
        assert!(settings.include_line_spacing);
    }

    #[test]
    fn test_toml_round_trip() {
        let settings = ExportSettings {
            msb_first: false,
            glyph_comments: true,
            ..Default::default()
        };
        let text = settings.to_toml_string().unwrap();
        assert_eq!(ExportSettings::from_toml_str(&text).unwrap(), settings);
    }

    #[test]
    fn test_invalid_settings() {
        assert!(matches!(
            ExportSettings::from_toml_str("invert_bits = \"yes\""),
            Err(FontEditError::InvalidSettings { .. })
        ));
        assert!(matches!(
            ExportSettings::from_toml_str("output_format = \"basic\""),
            Err(FontEditError::UnknownDialect { .. })
        ));
    }

    #[test]
    fn test_export_options_use_given_timestamp() {
        let settings = ExportSettings {
            include_line_spacing: false,
            ..Default::default()
        };
        let options = settings.export_options("2024-01-02 03:04:05");
        assert_eq!(options.created, "2024-01-02 03:04:05");
        assert!(!options.include_line_spacing);
        assert_eq!(options.packing, settings.packing_policy());
    }

    #[test]
    fn test_packing_policy() {
        let settings = ExportSettings {
            invert_bits: true,
            msb_first: false,
            ..Default::default()
        };
        assert_eq!(
            settings.packing_policy(),
            PackingPolicy {
                bit_order: BitOrder::LsbFirst,
                invert: true,
                pad_rows: true
            }
        );
    }
}
