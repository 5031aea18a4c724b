//! Traversal tracking: current/previous index and wrap-aware direction.
//!
//! The tracker is purely reactive. It never predicts where the viewport
//! engine will land; it only folds the engine's change notifications into
//! [`CarouselState`].

use crate::model::{CarouselError, Direction};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Monotonically increasing token that changes once per slide-change event.
///
/// Consumers key time-based visuals on it so they restart instead of
/// continuing a previous run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ResetToken(u64);

impl ResetToken {
    /// Raw counter value.
    pub fn value(self) -> u64 {
        self.0
    }

    /// The token that follows this one.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for ResetToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How the first/last wrap-around is turned into a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WrapPolicy {
    /// Only an exact last→first move counts as forward and first→last as
    /// backward. Every other move compares linear positions.
    #[default]
    Endpoints,
    /// Direction follows the shorter way around the circular sequence.
    /// Ties fall back to the linear comparison.
    #[serde(alias = "shortest-path")]
    Shortest,
}

/// Error returned when parsing an unknown [`WrapPolicy`] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown wrap policy '{0}' (expected 'endpoints' or 'shortest')")]
pub struct UnknownWrapPolicy(pub String);

impl FromStr for WrapPolicy {
    type Err = UnknownWrapPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "endpoints" => Ok(WrapPolicy::Endpoints),
            "shortest" | "shortest-path" => Ok(WrapPolicy::Shortest),
            other => Err(UnknownWrapPolicy(other.to_string())),
        }
    }
}

/// Mutable carousel state, owned exclusively by the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CarouselState {
    /// Index of the slide currently presented.
    pub current_index: usize,
    /// Last committed index. Mirrors `current_index` once a change is
    /// applied; the pre-change index travels in [`Transition::from`].
    pub previous_index: usize,
    /// Direction of the most recent change.
    pub direction: Direction,
    /// Bumped exactly once per accepted change event.
    pub reset_token: ResetToken,
}

/// Result of one accepted change notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Index presented before the change.
    pub from: usize,
    /// Index presented after the change.
    pub to: usize,
    /// Inferred travel direction.
    pub direction: Direction,
    /// Token after the change.
    pub reset_token: ResetToken,
}

/// Infer travel direction for a move between two real indices.
///
/// Moves to the same index are always [`Direction::Still`], which also
/// makes the wrap rules vacuous for single-slide decks.
pub fn infer_direction(prev: usize, new: usize, slide_count: usize, policy: WrapPolicy) -> Direction {
    if prev == new || slide_count == 0 {
        return Direction::Still;
    }
    let last = slide_count - 1;

    match policy {
        WrapPolicy::Endpoints => {
            if prev == last && new == 0 {
                Direction::Forward
            } else if prev == 0 && new == last {
                Direction::Backward
            } else {
                Direction::between(prev, new)
            }
        }
        WrapPolicy::Shortest => {
            let forward = (new + slide_count - prev) % slide_count;
            let backward = (prev + slide_count - new) % slide_count;
            match forward.cmp(&backward) {
                std::cmp::Ordering::Less => Direction::Forward,
                std::cmp::Ordering::Greater => Direction::Backward,
                std::cmp::Ordering::Equal => Direction::between(prev, new),
            }
        }
    }
}

/// Folds viewport change notifications into [`CarouselState`].
#[derive(Debug, Clone)]
pub struct TraversalTracker {
    state: CarouselState,
    slide_count: usize,
    policy: WrapPolicy,
}

impl TraversalTracker {
    /// Tracker for a deck of `slide_count` slides, starting at index 0.
    pub fn new(slide_count: usize) -> Self {
        Self::with_policy(slide_count, WrapPolicy::default())
    }

    /// Tracker with an explicit wrap policy.
    pub fn with_policy(slide_count: usize, policy: WrapPolicy) -> Self {
        Self {
            state: CarouselState::default(),
            slide_count,
            policy,
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    /// Check a raw index from the viewport engine.
    ///
    /// # Errors
    ///
    /// `EmptySlideSequence` for an empty deck, `IndexOutOfRange` when the
    /// index is negative or not below the slide count.
    pub fn validate(&self, raw: isize) -> Result<usize, CarouselError> {
        if self.slide_count == 0 {
            return Err(CarouselError::EmptySlideSequence);
        }
        usize::try_from(raw)
            .ok()
            .filter(|&index| index < self.slide_count)
            .ok_or(CarouselError::IndexOutOfRange {
                index: raw,
                slide_count: self.slide_count,
            })
    }

    /// Apply a change notification.
    ///
    /// On success the new index becomes both current and previous, the
    /// direction is recomputed and the reset token advances by one. On
    /// error the state is untouched.
    ///
    /// # Errors
    ///
    /// See [`TraversalTracker::validate`].
    pub fn on_slide_changed(&mut self, raw: isize) -> Result<Transition, CarouselError> {
        let new_index = self.validate(raw)?;
        let prev = self.state.current_index;
        let direction = infer_direction(prev, new_index, self.slide_count, self.policy);

        self.state = CarouselState {
            current_index: new_index,
            previous_index: new_index,
            direction,
            reset_token: self.state.reset_token.next(),
        };

        debug!(
            from = prev,
            to = new_index,
            direction = %direction,
            token = %self.state.reset_token,
            "Slide changed"
        );

        Ok(Transition {
            from: prev,
            to: new_index,
            direction,
            reset_token: self.state.reset_token,
        })
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "tracker_tests.rs"]
mod tests;
