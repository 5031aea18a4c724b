//! Terminal viewport engine: looping track, queued moves, autoplay, drag.
//!
//! Time is injected through [`Viewport::tick`] so the engine is fully
//! deterministic under test.

use super::{Navigator, SlideChange, ViewportConfig};
use std::collections::VecDeque;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Instant;
use tracing::{debug, warn};

/// Minimum horizontal drag distance, in columns, that moves a slide.
pub const DRAG_THRESHOLD: u16 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Move {
    Advance,
    Retreat,
    JumpTo(usize),
}

#[derive(Debug, Clone, Copy)]
struct InFlight {
    target: isize,
    started: Instant,
}

/// Slide viewport with an unbounded loop track.
///
/// The track position keeps counting past either end when looping; the
/// real index is the position modulo the slide count.
#[derive(Debug)]
pub struct Viewport {
    slide_count: usize,
    config: ViewportConfig,
    position: isize,
    queue: VecDeque<Move>,
    in_flight: Option<InFlight>,
    settled_at: Instant,
    drag_origin: Option<u16>,
    sender: Option<Sender<SlideChange>>,
}

impl Viewport {
    /// Engine for `slide_count` slides resting on slide 0 at `now`.
    pub fn new(slide_count: usize, config: ViewportConfig, now: Instant) -> Self {
        Self {
            slide_count,
            config,
            position: 0,
            queue: VecDeque::new(),
            in_flight: None,
            settled_at: now,
            drag_origin: None,
            sender: None,
        }
    }

    /// Subscribe to change notifications, replacing any previous subscriber.
    pub fn subscribe(&mut self) -> Receiver<SlideChange> {
        let (tx, rx) = mpsc::channel();
        self.sender = Some(tx);
        rx
    }

    /// Drop the subscriber. Later moves still happen but notify nobody.
    pub fn detach(&mut self) {
        self.sender = None;
    }

    /// Whether a subscriber is attached.
    pub fn is_attached(&self) -> bool {
        self.sender.is_some()
    }

    /// Engine configuration.
    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    /// Real index of the resting slide (0 for an empty deck).
    pub fn real_index(&self) -> usize {
        self.real_of(self.position)
    }

    /// Whether a move is animating.
    pub fn is_transitioning(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Number of requests waiting behind the in-flight move.
    pub fn pending_moves(&self) -> usize {
        self.queue.len()
    }

    /// Advance the engine clock to `now`.
    ///
    /// Completes a due transition, starts the next queued move, and fires
    /// autoplay when idle long enough. Returns how many changes were
    /// emitted.
    pub fn tick(&mut self, now: Instant) -> usize {
        if self.slide_count == 0 {
            return 0;
        }

        let mut emitted = 0;
        let mut autoplayed = false;
        loop {
            if let Some(flight) = self.in_flight {
                if now.saturating_duration_since(flight.started) < self.config.transition_speed {
                    break;
                }
                self.complete(flight, now);
                emitted += 1;
                continue;
            }

            if let Some(next) = self.queue.pop_front() {
                self.start(next, now);
            } else if !autoplayed
                && now.saturating_duration_since(self.settled_at) >= self.config.autoplay_delay
            {
                autoplayed = true;
                debug!("Autoplay advancing");
                self.start(Move::Advance, now);
            } else {
                break;
            }
        }
        emitted
    }

    /// Begin a horizontal drag at `column`.
    pub fn begin_drag(&mut self, column: u16) {
        if self.config.drag_enabled && self.slide_count > 0 {
            self.drag_origin = Some(column);
        }
    }

    /// Finish a drag at `column`.
    ///
    /// Dragging right by at least [`DRAG_THRESHOLD`] columns retreats,
    /// dragging left advances. Returns whether a move was requested.
    pub fn end_drag(&mut self, column: u16) -> bool {
        let Some(origin) = self.drag_origin.take() else {
            return false;
        };
        if column >= origin.saturating_add(DRAG_THRESHOLD) {
            self.retreat();
            true
        } else if column.saturating_add(DRAG_THRESHOLD) <= origin {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag_origin.is_some()
    }

    fn real_of(&self, position: isize) -> usize {
        if self.slide_count == 0 {
            return 0;
        }
        // slide_count fits in isize: it is the length of an allocated slice
        position.rem_euclid(self.slide_count as isize) as usize
    }

    fn target_for(&self, request: Move) -> isize {
        let real = self.real_index();
        let last = self.slide_count - 1;
        match request {
            Move::Advance if self.config.loop_enabled || real < last => self.position + 1,
            Move::Retreat if self.config.loop_enabled || real > 0 => self.position - 1,
            Move::Advance | Move::Retreat => self.position,
            Move::JumpTo(index) => self.position - real as isize + index as isize,
        }
    }

    fn start(&mut self, request: Move, now: Instant) {
        let target = self.target_for(request);
        debug!(?request, from = self.position, to = target, "Starting transition");
        self.in_flight = Some(InFlight {
            target,
            started: now,
        });
    }

    fn complete(&mut self, flight: InFlight, now: Instant) {
        self.in_flight = None;
        self.position = flight.target;
        self.settled_at = now;
        self.emit(self.real_index());
    }

    fn emit(&mut self, real_index: usize) {
        let Some(sender) = &self.sender else {
            return;
        };
        let change = SlideChange {
            real_index: real_index as isize,
        };
        if sender.send(change).is_err() {
            debug!("Change subscriber dropped, detaching");
            self.sender = None;
        }
    }

    fn enqueue(&mut self, request: Move) {
        if self.slide_count == 0 {
            return;
        }
        self.queue.push_back(request);
    }
}

impl Navigator for Viewport {
    fn advance(&mut self) {
        self.enqueue(Move::Advance);
    }

    fn retreat(&mut self) {
        self.enqueue(Move::Retreat);
    }

    fn jump_to(&mut self, index: usize) {
        if index >= self.slide_count {
            warn!(
                index,
                slide_count = self.slide_count,
                "Ignoring jump outside the slide range"
            );
            return;
        }
        self.enqueue(Move::JumpTo(index));
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "viewport_tests.rs"]
mod tests;
