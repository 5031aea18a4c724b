//! Terminal media carousel
//!
//! Auto-advancing, directional slide carousel: a pure state engine that
//! tracks which slide is showing and which way the deck moved, driven by a
//! viewport engine and drawn by a ratatui shell.
//!
//! The crate follows the Pure Core / Impure Shell split:
//! [`model`] and [`state`] are pure, [`engine`] owns time, [`view`] owns the
//! terminal.

pub mod config;
pub mod engine;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;

#[cfg(test)]
mod tests;
