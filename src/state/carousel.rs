//! Carousel façade wiring the tracker, the synchronizer and the engine.
//!
//! Navigation requests go straight to the injected [`Navigator`]; state
//! only changes when the engine reports a completed move. This keeps a
//! single source of truth for what is on screen.

use super::presentation::{MotionConfig, PresentationSynchronizer, RenderModel};
use super::tracker::{CarouselState, Transition, TraversalTracker, WrapPolicy};
use crate::engine::{Navigator, SlideChange};
use crate::model::{CarouselError, SlideDeck};
use std::sync::mpsc::Receiver;
use tracing::{debug, warn};

/// Behavior knobs for the core.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CarouselOptions {
    /// Overlay motion.
    pub motion: MotionConfig,
    /// Wrap-around direction policy.
    pub wrap_policy: WrapPolicy,
}

/// A mounted carousel.
#[derive(Debug)]
pub struct Carousel<N: Navigator> {
    deck: SlideDeck,
    tracker: TraversalTracker,
    presenter: PresentationSynchronizer,
    navigator: N,
    changes: Option<Receiver<SlideChange>>,
}

impl<N: Navigator> Carousel<N> {
    /// Mount a carousel over `deck`, driving `navigator` and listening on
    /// `changes`.
    pub fn new(
        deck: SlideDeck,
        navigator: N,
        changes: Receiver<SlideChange>,
        options: CarouselOptions,
    ) -> Self {
        if deck.is_empty() {
            warn!("{}", CarouselError::EmptySlideSequence);
        }
        let tracker = TraversalTracker::with_policy(deck.len(), options.wrap_policy);
        let presenter = PresentationSynchronizer::new(options.motion, tracker.state(), deck.len());
        Self {
            deck,
            tracker,
            presenter,
            navigator,
            changes: Some(changes),
        }
    }

    /// The slide list.
    pub fn deck(&self) -> &SlideDeck {
        &self.deck
    }

    /// Current state.
    pub fn state(&self) -> &CarouselState {
        self.tracker.state()
    }

    /// The injected navigator.
    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Mutable access to the navigator (e.g. to tick an engine clock).
    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }

    /// Request the next slide.
    pub fn next(&mut self) {
        if self.deck.is_empty() {
            debug!("Ignoring next on empty carousel");
            return;
        }
        self.navigator.advance();
    }

    /// Request the previous slide.
    pub fn previous(&mut self) {
        if self.deck.is_empty() {
            debug!("Ignoring previous on empty carousel");
            return;
        }
        self.navigator.retreat();
    }

    /// Request a jump to `index`.
    ///
    /// # Errors
    ///
    /// `EmptySlideSequence` or `IndexOutOfRange`; nothing is forwarded.
    pub fn go_to(&mut self, index: usize) -> Result<(), CarouselError> {
        if self.deck.is_empty() {
            return Err(CarouselError::EmptySlideSequence);
        }
        if index >= self.deck.len() {
            return Err(CarouselError::IndexOutOfRange {
                index: isize::try_from(index).unwrap_or(isize::MAX),
                slide_count: self.deck.len(),
            });
        }
        self.navigator.jump_to(index);
        Ok(())
    }

    /// Request the first slide.
    pub fn first(&mut self) {
        if let Err(e) = self.go_to(0) {
            debug!("Ignoring jump to first slide: {e}");
        }
    }

    /// Request the last slide.
    pub fn last(&mut self) {
        if let Some(last) = self.deck.last_index() {
            if let Err(e) = self.go_to(last) {
                debug!("Ignoring jump to last slide: {e}");
            }
        }
    }

    /// Apply one change notification from the engine.
    ///
    /// # Errors
    ///
    /// Propagates tracker rejections; state is untouched in that case.
    pub fn on_slide_changed(&mut self, raw: isize) -> Result<Transition, CarouselError> {
        let transition = self.tracker.on_slide_changed(raw)?;
        self.presenter.sync(&transition);
        Ok(transition)
    }

    /// Apply every pending change notification in order.
    ///
    /// Rejected notifications are logged and skipped. Returns the number of
    /// accepted changes. Does nothing once unmounted.
    pub fn pump(&mut self) -> usize {
        let Some(changes) = &self.changes else {
            return 0;
        };
        let pending: Vec<SlideChange> = changes.try_iter().collect();

        let mut applied = 0;
        for change in pending {
            match self.on_slide_changed(change.real_index) {
                Ok(_) => applied += 1,
                Err(e) => warn!("Dropping slide change: {e}"),
            }
        }
        applied
    }

    /// Snapshot for the rendering layer.
    pub fn render_model(&self) -> RenderModel<'_> {
        self.presenter.present(self.tracker.state(), &self.deck)
    }

    /// Detach from the engine's change notifications.
    pub fn unmount(&mut self) {
        if self.changes.take().is_some() {
            debug!("Carousel unmounted");
        }
    }

    /// Whether change notifications are still being received.
    pub fn is_mounted(&self) -> bool {
        self.changes.is_some()
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "carousel_tests.rs"]
mod tests;
