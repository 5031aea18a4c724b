//! Error types for the carousel.
//!
//! This module defines a hierarchical error taxonomy using `thiserror` for structured error
//! handling. Errors compose via `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error wrapping all domain-specific failures
//!   - [`CarouselError`] - State engine rejections (bad index, empty deck)
//!   - [`ConfigError`] - Config file read/parse failures
//!   - [`DeckError`] - Deck file read/parse failures
//!   - [`LoggingError`] - Tracing subscriber setup failures
//!   - `std::io::Error` - Terminal/TUI rendering failures
//!
//! # Error Recovery Strategy
//!
//! Core errors are **non-fatal**: an out-of-range change notification is logged and
//! dropped, leaving the carousel interactive. Config, deck, logging and terminal errors
//! happen before or outside the carousel loop and propagate to `main`.

use crate::config::{ConfigError, DeckError};
use crate::logging::LoggingError;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// The state engine rejected an operation.
    #[error("Carousel error: {0}")]
    Carousel(#[from] CarouselError),

    /// The configuration file could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The slide deck could not be loaded.
    #[error("Deck error: {0}")]
    Deck(#[from] DeckError),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal or TUI rendering error.
    ///
    /// Fatal: without a working terminal the carousel cannot be shown.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Rejections raised by the carousel state engine.
///
/// Every variant is recoverable. State is never modified when one of these is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CarouselError {
    /// A change or jump notification referenced an index outside `[0, slide_count)`.
    ///
    /// The index is signed because it crosses the boundary from the viewport engine,
    /// which is less trusted than the core.
    #[error("Slide index {index} out of range (slide count {slide_count})")]
    IndexOutOfRange {
        /// The rejected index.
        index: isize,
        /// Number of slides in the deck.
        slide_count: usize,
    },

    /// The carousel has no slides; navigation and rendering degrade to an empty state.
    #[error("Carousel has no slides")]
    EmptySlideSequence,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn index_out_of_range_message_includes_index_and_count() {
        let err = CarouselError::IndexOutOfRange {
            index: -1,
            slide_count: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("-1"), "message should include index: {msg}");
        assert!(msg.contains('3'), "message should include count: {msg}");
    }

    #[test]
    fn empty_slide_sequence_message() {
        assert_eq!(
            CarouselError::EmptySlideSequence.to_string(),
            "Carousel has no slides"
        );
    }

    #[test]
    fn carousel_error_converts_to_app_error() {
        let app: AppError = CarouselError::EmptySlideSequence.into();
        assert!(matches!(app, AppError::Carousel(_)));
    }

    #[test]
    fn io_error_converts_to_app_error() {
        let app: AppError = std::io::Error::other("broken pipe").into();
        assert!(matches!(app, AppError::Terminal(_)));
    }

    #[test]
    fn deck_error_converts_to_app_error() {
        let app: AppError = DeckError::UnsupportedFormat {
            path: PathBuf::from("deck.yaml"),
        }
        .into();
        assert!(matches!(app, AppError::Deck(_)));
        assert!(app.to_string().contains("deck.yaml"));
    }
}
