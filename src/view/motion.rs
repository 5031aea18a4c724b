//! Time-based animation primitives for the terminal renderer.
//!
//! Both primitives are keyed: they restart when the key handed to them by
//! the render model changes, and otherwise keep their running clock.

use crate::model::{AnimationVariants, Pose};
use crate::state::{OverlayFrame, RenderModel, ResetToken, RestartKey};
use std::time::{Duration, Instant};

/// Progress bar fill clock keyed by [`RestartKey`].
#[derive(Debug, Clone)]
pub struct ProgressClock {
    key: Option<RestartKey>,
    started: Instant,
}

impl ProgressClock {
    /// Clock with no key yet.
    pub fn new(now: Instant) -> Self {
        Self {
            key: None,
            started: now,
        }
    }

    /// Track the active segment's key. A different key restarts the fill
    /// from empty. Returns whether a restart happened.
    pub fn observe(&mut self, key: Option<RestartKey>, now: Instant) -> bool {
        if self.key == key {
            return false;
        }
        self.key = key;
        self.started = now;
        true
    }

    /// Key currently driving the fill.
    pub fn key(&self) -> Option<RestartKey> {
        self.key
    }

    /// Linear fill fraction in `[0, 1]` after running for `duration`.
    pub fn fraction(&self, now: Instant, duration: Duration) -> f32 {
        if self.key.is_none() {
            return 0.0;
        }
        if duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

/// Which animated layer of the overlay a pose is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// Outer content container.
    Container,
    /// Nested text/button group.
    Item,
}

impl Layer {
    fn variants(self, frame: &OverlayFrame) -> &AnimationVariants {
        match self {
            Layer::Container => &frame.container,
            Layer::Item => &frame.item,
        }
    }
}

/// Combined pose of a nested group: offsets add, opacities multiply.
pub fn compose(container: Pose, item: Pose) -> Pose {
    Pose {
        opacity: container.opacity * item.opacity,
        x: container.x + item.x,
    }
}

/// Mount/unmount clocks for the mounted and departing overlays.
#[derive(Debug, Clone, Default)]
pub struct OverlayAnimator {
    mounted: Option<(ResetToken, Instant)>,
    departing: Option<(ResetToken, Instant)>,
}

impl OverlayAnimator {
    /// Animator with nothing mounted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record mount/unmount times for overlays appearing in `model`.
    pub fn observe(&mut self, model: &RenderModel<'_>, now: Instant) {
        Self::track(&mut self.mounted, model.overlay.as_ref(), now);
        Self::track(&mut self.departing, model.departing.as_ref(), now);
    }

    fn track(slot: &mut Option<(ResetToken, Instant)>, frame: Option<&OverlayFrame>, now: Instant) {
        match frame {
            Some(frame) if slot.map(|(key, _)| key) != Some(frame.mount_key) => {
                *slot = Some((frame.mount_key, now));
            }
            Some(_) => {}
            None => *slot = None,
        }
    }

    /// Pose of a mounted overlay layer at `now`.
    pub fn mounted_pose(&self, frame: &OverlayFrame, layer: Layer, now: Instant) -> Pose {
        if !frame.animate_entry {
            return Pose::REST;
        }
        match self.mounted {
            Some((key, since)) if key == frame.mount_key => {
                layer.variants(frame).entering(now.saturating_duration_since(since))
            }
            // Not observed yet: about to start entering.
            _ => layer.variants(frame).initial,
        }
    }

    /// Pose of a departing overlay layer at `now`, or `None` once its exit
    /// has finished.
    pub fn departing_pose(&self, frame: &OverlayFrame, layer: Layer, now: Instant) -> Option<Pose> {
        let (key, since) = self.departing?;
        if key != frame.mount_key {
            return None;
        }
        let variants = layer.variants(frame);
        let elapsed = now.saturating_duration_since(since);
        if variants.leave.is_finished(elapsed) {
            return None;
        }
        Some(variants.leaving(elapsed))
    }
}
