//! Internal test modules - whitebox tests with crate access
//!
//! Acceptance scenarios drive the full TUI app against a `TestBackend`
//! with an injected clock.

mod crash_regression;
