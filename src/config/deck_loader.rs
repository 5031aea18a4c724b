//! Slide deck file loading.
//!
//! Decks are TOML or JSON documents with a top-level `slides` array:
//!
//! ```toml
//! [[slides]]
//! type = "image"
//! src = "https://example.com/hero.jpg"
//! subtitle = "POWER. DRIVEN."
//! headline = "DBX S"
//!
//! [[slides.buttons]]
//! label = "Configure"
//! target = "https://example.com/configure"
//! style = "primary"
//! ```

use crate::model::{Slide, SlideDeck};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a deck file.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeckError {
    /// Failed to read deck file.
    #[error("Failed to read deck file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Deck file content does not match the deck format.
    #[error("Invalid deck in {path}: {reason}")]
    ParseError {
        /// Path with invalid content.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// The file extension is neither `.toml` nor `.json`.
    #[error("Unsupported deck format for {path} (expected .toml or .json)")]
    UnsupportedFormat {
        /// Offending path.
        path: PathBuf,
    },
}

/// Supported deck file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckFormat {
    /// TOML document.
    Toml,
    /// JSON document.
    Json,
}

impl DeckFormat {
    /// Detect the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Some(DeckFormat::Toml),
            "json" => Some(DeckFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DeckFile {
    #[serde(default)]
    slides: Vec<Slide>,
}

/// Parse deck content in the given format.
///
/// # Errors
///
/// Returns `ParseError` (attributed to `path`) when the content is invalid.
pub fn parse_deck(contents: &str, format: DeckFormat, path: &Path) -> Result<SlideDeck, DeckError> {
    let parsed: Result<DeckFile, String> = match format {
        DeckFormat::Toml => toml::from_str(contents).map_err(|e| e.to_string()),
        DeckFormat::Json => serde_json::from_str(contents).map_err(|e| e.to_string()),
    };

    parsed
        .map(|file| SlideDeck::new(file.slides))
        .map_err(|reason| DeckError::ParseError {
            path: path.to_path_buf(),
            reason,
        })
}

/// Load a deck file, picking the parser from its extension.
///
/// An empty `slides` array is accepted; the carousel shows its empty state.
///
/// # Errors
///
/// Returns `UnsupportedFormat`, `ReadError` or `ParseError`.
pub fn load_deck(path: impl AsRef<Path>) -> Result<SlideDeck, DeckError> {
    let path = path.as_ref();
    let format = DeckFormat::from_path(path).ok_or_else(|| DeckError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let contents = std::fs::read_to_string(path).map_err(|e| DeckError::ReadError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    parse_deck(&contents, format, path)
}

/// Load `path` if given, otherwise the built-in deck.
///
/// # Errors
///
/// Same as [`load_deck`].
pub fn load_deck_or_builtin(path: Option<&Path>) -> Result<SlideDeck, DeckError> {
    match path {
        Some(path) => load_deck(path),
        None => Ok(SlideDeck::builtin()),
    }
}
