//! The fixed, ordered slide sequence.

use super::slide::{ButtonStyle, CallToAction, MediaKind, Slide};
use std::sync::Arc;

/// Immutable ordered sequence of slides.
///
/// Cheap to clone; the core never mutates slide content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SlideDeck {
    slides: Arc<[Slide]>,
}

impl SlideDeck {
    /// Build a deck from slides in display order.
    pub fn new(slides: Vec<Slide>) -> Self {
        Self {
            slides: slides.into(),
        }
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Whether the deck has no slides.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Slide at a real index.
    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Index of the last slide, or `None` for an empty deck.
    pub fn last_index(&self) -> Option<usize> {
        self.slides.len().checked_sub(1)
    }

    /// Iterate slides in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Slide> {
        self.slides.iter()
    }

    /// The three-slide showcase deck used when no deck file is given.
    pub fn builtin() -> Self {
        Self::new(vec![
            Slide::new(
                MediaKind::Video,
                "https://www.astonmartin.com/-/media/models---vantage-s/final/final-video/vantage-s-desktop-hero-video-final.mp4",
            )
            .with_subtitle("THRILL. DRIVEN.")
            .with_headline("Vantage S")
            .with_action(CallToAction::new(
                "Explore",
                "https://www.astonmartin.com/en-us/models/vantage/vantage-s",
                ButtonStyle::Primary,
            ))
            .with_action(CallToAction::new(
                "Configure",
                "https://www.astonmartin.com/en-us/models/vantage/vantage-s/configure",
                ButtonStyle::Secondary,
            )),
            Slide::new(
                MediaKind::Image,
                "https://www.astonmartin.com/-/media/brand-stories/goodwood2025/final-selects/goodwood-hero-desktop-3.jpg",
            )
            .with_subtitle("GOODWOOD FESTIVAL OF SPEED 2025")
            .with_headline("Unleashing the Edge.\nSharpened.")
            .with_action(CallToAction::new(
                "Learn more",
                "https://www.astonmartin.com/en-us/our-world/news/2025/goodwood-festival-of-speed-2025",
                ButtonStyle::Primary,
            )),
            Slide::new(
                MediaKind::Image,
                "https://www.astonmartin.com/-/media/models---dbx-s/final-images/homepage/homepage-hero-new.jpg",
            )
            .with_subtitle("POWER. DRIVEN.")
            .with_headline("DBX S")
            .with_action(CallToAction::new(
                "Configure",
                "https://www.astonmartin.com/en-us/models/dbx/dbx-s",
                ButtonStyle::Primary,
            )),
        ])
    }
}

impl<'a> IntoIterator for &'a SlideDeck {
    type Item = &'a Slide;
    type IntoIter = std::slice::Iter<'a, Slide>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
