//! Viewport engine boundary.
//!
//! The carousel core never moves slides itself. It talks to the engine
//! through the narrow [`Navigator`] capability and learns about completed
//! moves through a [`SlideChange`] channel.

use std::time::Duration;

pub mod viewport;

pub use viewport::Viewport;

/// Imperative controls the core may invoke on a viewport engine.
///
/// Each call eventually produces exactly one [`SlideChange`] once the move
/// completes. Implementations must not call back into the core
/// synchronously.
pub trait Navigator {
    /// Move one slide forward.
    fn advance(&mut self);
    /// Move one slide backward.
    fn retreat(&mut self);
    /// Move to a real slide index.
    fn jump_to(&mut self, index: usize);
}

/// Notification of a completed slide transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideChange {
    /// Post-change real index. Signed because engines are not trusted to
    /// stay in range.
    pub real_index: isize,
}

/// Engine configuration handed over by the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportConfig {
    /// Wrap from the last slide to the first and back.
    pub loop_enabled: bool,
    /// Idle time before autoplay advances.
    pub autoplay_delay: Duration,
    /// Length of one slide transition.
    pub transition_speed: Duration,
    /// Whether drag gestures move slides.
    pub drag_enabled: bool,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            loop_enabled: true,
            autoplay_delay: Duration::from_millis(5000),
            transition_speed: Duration::from_millis(900),
            drag_enabled: true,
        }
    }
}
