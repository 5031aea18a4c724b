//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod deck;
pub mod direction;
pub mod error;
pub mod key_action;
pub mod motion;
pub mod slide;

// Re-export for convenience
pub use deck::SlideDeck;
pub use direction::Direction;
pub use error::{AppError, CarouselError};
pub use key_action::KeyAction;
pub use motion::{AnimationVariants, Easing, Pose, Timing};
pub use slide::{ButtonStyle, CallToAction, MediaKind, Slide, TextBlock};
