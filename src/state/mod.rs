//! Carousel state engine (pure core).
//!
//! - [`tracker`]: current/previous index and wrap-aware direction
//! - [`presentation`]: mounted overlay, motion variants, indicator keys
//! - [`carousel`]: façade binding both to a viewport engine

pub mod carousel;
pub mod presentation;
pub mod tracker;

pub use carousel::{Carousel, CarouselOptions};
pub use presentation::{
    indicator_segments, IndicatorSegment, MotionConfig, MotionSpec, OverlayFrame,
    PresentationSynchronizer, RenderModel, RestartKey,
};
pub use tracker::{
    infer_direction, CarouselState, ResetToken, Transition, TraversalTracker, UnknownWrapPolicy,
    WrapPolicy,
};
