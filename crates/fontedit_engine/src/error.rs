//! Unified error types for fontedit_engine

use thiserror::Error;

use crate::Size;

/// Main error type for font editing and export operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FontEditError {
    // === Model Errors ===
    #[error("Glyph index {index} out of range (0..{len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Glyph size mismatch: expected {}x{}, got {}x{}", expected.width, expected.height, actual.width, actual.height)]
    GlyphSizeMismatch { expected: Size, actual: Size },

    #[error("Invalid face state: {message}")]
    InvalidFaceState { message: String },

    // === Export Errors ===
    #[error("Unknown source code dialect: '{identifier}'")]
    UnknownDialect { identifier: String },

    #[error("Invalid export settings: {message}")]
    InvalidSettings { message: String },
}

/// Result type alias for fontedit operations
pub type Result<T> = std::result::Result<T, FontEditError>;

// === Convenience constructors ===
impl FontEditError {
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    pub fn unknown_dialect(identifier: impl Into<String>) -> Self {
        Self::UnknownDialect { identifier: identifier.into() }
    }

    pub fn invalid_face_state(message: impl Into<String>) -> Self {
        Self::InvalidFaceState { message: message.into() }
    }

    pub fn invalid_settings(message: impl std::fmt::Display) -> Self {
        Self::InvalidSettings { message: message.to_string() }
    }
}
