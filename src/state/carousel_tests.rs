//! Tests for the carousel façade.

use super::*;
use crate::model::{Direction, MediaKind, Slide};
use std::sync::mpsc::{self, Sender};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Request {
    Advance,
    Retreat,
    JumpTo(usize),
}

/// Navigator that records requests without moving anything.
#[derive(Debug, Default)]
struct RecordingNavigator {
    requests: Vec<Request>,
}

impl Navigator for RecordingNavigator {
    fn advance(&mut self) {
        self.requests.push(Request::Advance);
    }

    fn retreat(&mut self) {
        self.requests.push(Request::Retreat);
    }

    fn jump_to(&mut self, index: usize) {
        self.requests.push(Request::JumpTo(index));
    }
}

fn deck(n: usize) -> SlideDeck {
    SlideDeck::new(
        (0..n)
            .map(|i| Slide::new(MediaKind::Image, format!("{i}.jpg")).with_headline(format!("Slide {i}")))
            .collect(),
    )
}

fn mount(n: usize) -> (Carousel<RecordingNavigator>, Sender<SlideChange>) {
    let (tx, rx) = mpsc::channel();
    let carousel = Carousel::new(
        deck(n),
        RecordingNavigator::default(),
        rx,
        CarouselOptions::default(),
    );
    (carousel, tx)
}

fn send(tx: &Sender<SlideChange>, real_index: isize) {
    tx.send(SlideChange { real_index }).expect("receiver alive");
}

// ===== Navigation pass-through =====

#[test]
fn navigation_is_forwarded_without_touching_state() {
    let (mut carousel, _tx) = mount(3);
    let before = *carousel.state();

    carousel.next();
    carousel.previous();
    carousel.go_to(2).expect("in range");

    assert_eq!(
        carousel.navigator().requests,
        vec![Request::Advance, Request::Retreat, Request::JumpTo(2)]
    );
    assert_eq!(*carousel.state(), before);
}

#[test]
fn first_and_last_jump_to_ends() {
    let (mut carousel, _tx) = mount(4);
    carousel.last();
    carousel.first();
    assert_eq!(
        carousel.navigator().requests,
        vec![Request::JumpTo(3), Request::JumpTo(0)]
    );
}

#[test]
fn go_to_out_of_range_is_rejected_and_not_forwarded() {
    let (mut carousel, _tx) = mount(3);
    let err = carousel.go_to(3).unwrap_err();
    assert_eq!(
        err,
        CarouselError::IndexOutOfRange {
            index: 3,
            slide_count: 3
        }
    );
    assert!(carousel.navigator().requests.is_empty());
}

#[test]
fn empty_carousel_degrades_to_noops() {
    let (mut carousel, tx) = mount(0);
    carousel.next();
    carousel.previous();
    carousel.first();
    carousel.last();
    assert_eq!(carousel.go_to(0), Err(CarouselError::EmptySlideSequence));
    assert!(carousel.navigator().requests.is_empty());

    send(&tx, 0);
    assert_eq!(carousel.pump(), 0);
    assert_eq!(carousel.render_model().mounted_overlays().count(), 0);
}

// ===== Change notifications =====

#[test]
fn pump_applies_changes_in_order() {
    let (mut carousel, tx) = mount(3);
    let initial = carousel.state().reset_token;
    send(&tx, 1);
    send(&tx, 2);
    send(&tx, 0);

    assert_eq!(carousel.pump(), 3);

    let state = carousel.state();
    assert_eq!(state.current_index, 0);
    assert_eq!(state.direction, Direction::Forward);
    assert_eq!(state.reset_token.value(), initial.value() + 3);
}

#[test]
fn pump_skips_out_of_range_changes() {
    let (mut carousel, tx) = mount(3);
    send(&tx, 1);
    send(&tx, 3);
    send(&tx, -1);
    send(&tx, 2);

    assert_eq!(carousel.pump(), 2);
    assert_eq!(carousel.state().current_index, 2);
    assert_eq!(carousel.state().reset_token.value(), 2);
}

#[test]
fn on_slide_changed_updates_render_model() {
    let (mut carousel, _tx) = mount(3);
    carousel.on_slide_changed(2).expect("valid index");

    let model = carousel.render_model();
    assert_eq!(model.current_index, Some(2));
    assert_eq!(model.direction, Direction::Backward);
    assert_eq!(model.overlay.map(|o| o.slide_index), Some(2));
    assert_eq!(model.departing.map(|o| o.slide_index), Some(0));
    assert_eq!(model.indicators.iter().filter(|s| s.restart_key.is_some()).count(), 1);
}

// ===== Unmount =====

#[test]
fn unmount_stops_state_updates() {
    let (mut carousel, tx) = mount(3);
    carousel.unmount();
    assert!(!carousel.is_mounted());

    // The sender side sees a closed channel once the receiver is gone.
    assert!(tx.send(SlideChange { real_index: 1 }).is_err());
    assert_eq!(carousel.pump(), 0);
    assert_eq!(carousel.state().current_index, 0);
}
