//! Declarative animation descriptors handed to the rendering layer.
//!
//! Nothing here animates; these values describe the before/after poses and
//! timing of a transition so any animation primitive can interpolate them.

use std::time::Duration;

/// Opacity and horizontal offset of an animated element.
///
/// `x` is in abstract units; a container offset of 1000 corresponds to one
/// full viewport width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// 0.0 (transparent) to 1.0 (opaque).
    pub opacity: f32,
    /// Horizontal offset from the resting position.
    pub x: f32,
}

impl Pose {
    /// Fully visible at rest.
    pub const REST: Pose = Pose { opacity: 1.0, x: 0.0 };

    /// Linear blend between two poses at eased progress `t`.
    pub fn lerp(self, to: Pose, t: f32) -> Pose {
        Pose {
            opacity: self.opacity + (to.opacity - self.opacity) * t,
            x: self.x + (to.x - self.x) * t,
        }
    }
}

/// Easing curve applied to normalized progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant speed.
    #[default]
    Linear,
    /// Quadratic acceleration.
    EaseIn,
    /// Quadratic deceleration.
    EaseOut,
}

impl Easing {
    /// Map linear progress `t` in `[0, 1]` onto the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }
}

/// Duration and easing of one animation phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Phase length.
    pub duration: Duration,
    /// Curve.
    pub easing: Easing,
}

impl Timing {
    /// Create a timing.
    pub const fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// Eased progress after `elapsed`. Zero-length phases are complete.
    pub fn progress(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.easing.apply(t)
    }

    /// Whether the phase has finished after `elapsed`.
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

/// Enter/exit description for one animated element.
///
/// The element mounts at `initial`, animates to `animate` with `enter`
/// timing, and on unmount animates from its current pose to `exit` with
/// `leave` timing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationVariants {
    /// Pose at mount.
    pub initial: Pose,
    /// Resting pose.
    pub animate: Pose,
    /// Pose at the end of the exit animation.
    pub exit: Pose,
    /// Enter timing.
    pub enter: Timing,
    /// Exit timing.
    pub leave: Timing,
}

impl AnimationVariants {
    /// Pose `elapsed` after mount.
    pub fn entering(&self, elapsed: Duration) -> Pose {
        self.initial.lerp(self.animate, self.enter.progress(elapsed))
    }

    /// Pose `elapsed` after unmount.
    pub fn leaving(&self, elapsed: Duration) -> Pose {
        self.animate.lerp(self.exit, self.leave.progress(elapsed))
    }
}
