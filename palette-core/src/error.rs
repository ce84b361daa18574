//! Error types for palette configuration and stylesheet loading.
//!
//! Picker operations themselves never fail; these cover the boundaries
//! where input comes from outside (files, command line, config).

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the picker.
#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("Unknown color name '{name}': expected <family>-<variant>")]
    UnknownColor { name: String },

    #[error("Invalid slot count {count}: expected {min}..={max}")]
    InvalidSlotCount { count: usize, min: usize, max: usize },

    #[error("Stylesheet not found: {path}")]
    StylesheetNotFound { path: PathBuf },

    #[error("Stylesheet parse error at line {line}: {message}")]
    StylesheetParse { line: usize, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for picker operations.
pub type Result<T> = std::result::Result<T, PaletteError>;
