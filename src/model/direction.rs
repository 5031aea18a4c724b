//! Signed traversal direction.

use std::fmt;

/// Direction of travel between two slides.
///
/// The sign parameterizes overlay motion: content enters from
/// `sign * distance` and leaves toward `-sign * distance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Moving toward lower indices (-1).
    Backward,
    /// No movement yet, or a change event that kept the same slide (0).
    #[default]
    Still,
    /// Moving toward higher indices (+1).
    Forward,
}

impl Direction {
    /// Numeric sign: -1, 0 or +1.
    pub fn sign(self) -> i8 {
        match self {
            Direction::Backward => -1,
            Direction::Still => 0,
            Direction::Forward => 1,
        }
    }

    /// Direction from the ordering of two linear positions.
    pub fn between(from: usize, to: usize) -> Self {
        match to.cmp(&from) {
            std::cmp::Ordering::Greater => Direction::Forward,
            std::cmp::Ordering::Less => Direction::Backward,
            std::cmp::Ordering::Equal => Direction::Still,
        }
    }

    /// Scale a magnitude by this direction's sign.
    pub fn offset(self, magnitude: f32) -> f32 {
        f32::from(self.sign()) * magnitude
    }

    /// The opposite direction. `Still` stays `Still`.
    pub fn reversed(self) -> Self {
        match self {
            Direction::Backward => Direction::Forward,
            Direction::Still => Direction::Still,
            Direction::Forward => Direction::Backward,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}", self.sign())
    }
}
