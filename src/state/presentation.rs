//! Presentation synchronization: mounted overlay, animation variants and
//! progress indicator restart keys.
//!
//! Pure functions of [`CarouselState`] plus a small record of which overlay
//! is mounted. The rendering layer reads a [`RenderModel`] and does the
//! actual interpolation.

use super::tracker::{CarouselState, ResetToken, Transition};
use crate::model::{AnimationVariants, Direction, Easing, Pose, SlideDeck, Timing};
use std::time::Duration;

/// Travel distance and durations for one animated layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionSpec {
    /// Offset magnitude in abstract units (1000 = one viewport width).
    pub distance: f32,
    /// Enter duration.
    pub enter: Duration,
    /// Exit duration.
    pub leave: Duration,
}

impl MotionSpec {
    /// Variants for travel in `direction`.
    ///
    /// Content enters from `direction * distance` and exits toward
    /// `-direction * distance`. Entry eases out, exit eases in.
    pub fn variants(&self, direction: Direction) -> AnimationVariants {
        AnimationVariants {
            initial: Pose {
                opacity: 0.0,
                x: direction.offset(self.distance),
            },
            animate: Pose::REST,
            exit: Pose {
                opacity: 0.0,
                x: direction.reversed().offset(self.distance),
            },
            enter: Timing::new(self.enter, Easing::EaseOut),
            leave: Timing::new(self.leave, Easing::EaseIn),
        }
    }
}

/// Motion for the overlay container and the text/button groups nested in it.
///
/// Both layers share the direction sign; the nested layer travels a
/// shorter distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionConfig {
    /// Outer content container.
    pub container: MotionSpec,
    /// Nested text and button groups.
    pub item: MotionSpec,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            container: MotionSpec {
                distance: 1000.0,
                enter: Duration::from_millis(900),
                leave: Duration::from_millis(900),
            },
            item: MotionSpec {
                distance: 500.0,
                enter: Duration::from_millis(700),
                leave: Duration::from_millis(700),
            },
        }
    }
}

/// Key that forces an indicator segment's fill animation to restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RestartKey {
    /// Reset token at the time of the change.
    pub token: ResetToken,
    /// Slide position of the segment.
    pub position: usize,
}

/// One segment of the progress indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorSegment {
    /// Slide position this segment represents.
    pub position: usize,
    /// Whether this is the current slide's segment.
    pub active: bool,
    /// Fill restart key; `None` means no fill is shown.
    pub restart_key: Option<RestartKey>,
}

/// A mounted (or departing) overlay with its animation description.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayFrame {
    /// Slide whose overlay this is.
    pub slide_index: usize,
    /// Token at mount time; identifies this mount.
    pub mount_key: ResetToken,
    /// Whether the entry animation should play. The overlay present at
    /// startup appears without one.
    pub animate_entry: bool,
    /// Container variants.
    pub container: AnimationVariants,
    /// Nested group variants.
    pub item: AnimationVariants,
}

/// Everything the rendering layer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderModel<'a> {
    /// Static slide list.
    pub deck: &'a SlideDeck,
    /// Current slide, `None` for an empty deck.
    pub current_index: Option<usize>,
    /// Direction of the most recent change.
    pub direction: Direction,
    /// Token of the most recent change.
    pub reset_token: ResetToken,
    /// The single mounted overlay, `None` for an empty deck.
    pub overlay: Option<OverlayFrame>,
    /// Overlay unmounted by the most recent slide move, playing its exit.
    pub departing: Option<OverlayFrame>,
    /// One segment per slide position.
    pub indicators: Vec<IndicatorSegment>,
}

impl RenderModel<'_> {
    /// Mounted overlays. Never more than one.
    pub fn mounted_overlays(&self) -> impl Iterator<Item = &OverlayFrame> {
        self.overlay.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Mount {
    slide_index: usize,
    key: ResetToken,
    animate_entry: bool,
}

/// Decides which overlay is mounted and how everything animates.
#[derive(Debug, Clone)]
pub struct PresentationSynchronizer {
    motion: MotionConfig,
    mounted: Option<Mount>,
    departing: Option<Mount>,
}

impl PresentationSynchronizer {
    /// Synchronizer mounting the initial slide's overlay (without entry
    /// animation) when the deck is non-empty.
    pub fn new(motion: MotionConfig, initial: &CarouselState, slide_count: usize) -> Self {
        let mounted = (slide_count > 0).then_some(Mount {
            slide_index: initial.current_index,
            key: initial.reset_token,
            animate_entry: false,
        });
        Self {
            motion,
            mounted,
            departing: None,
        }
    }

    /// Re-evaluate the mounted overlay after an accepted transition.
    ///
    /// A change to the already-mounted slide keeps the overlay in place;
    /// only the indicator restarts.
    pub fn sync(&mut self, transition: &Transition) {
        if self
            .mounted
            .is_some_and(|m| m.slide_index == transition.to)
        {
            return;
        }
        self.departing = self.mounted.take();
        self.mounted = Some(Mount {
            slide_index: transition.to,
            key: transition.reset_token,
            animate_entry: true,
        });
    }

    /// Build the render model for `state`.
    pub fn present<'a>(&self, state: &CarouselState, deck: &'a SlideDeck) -> RenderModel<'a> {
        let frame = |mount: Mount| OverlayFrame {
            slide_index: mount.slide_index,
            mount_key: mount.key,
            animate_entry: mount.animate_entry,
            container: self.motion.container.variants(state.direction),
            item: self.motion.item.variants(state.direction),
        };

        let current_index = (!deck.is_empty()).then_some(state.current_index);

        RenderModel {
            deck,
            current_index,
            direction: state.direction,
            reset_token: state.reset_token,
            overlay: self.mounted.map(frame),
            departing: self.departing.map(frame),
            indicators: indicator_segments(state, deck.len()),
        }
    }
}

/// Indicator segments for every slide position.
///
/// Only the current slide's segment carries a restart key, combining the
/// reset token with the position so every change event yields a new key.
pub fn indicator_segments(state: &CarouselState, slide_count: usize) -> Vec<IndicatorSegment> {
    (0..slide_count)
        .map(|position| {
            let active = position == state.current_index;
            IndicatorSegment {
                position,
                active,
                restart_key: active.then_some(RestartKey {
                    token: state.reset_token,
                    position,
                }),
            }
        })
        .collect()
}

// ===== Tests =====

#[cfg(test)]
#[path = "presentation_tests.rs"]
mod tests;
