//! Tests for the terminal viewport engine.

use super::*;
use std::time::Duration;

const SPEED: Duration = Duration::from_millis(900);
const DELAY: Duration = Duration::from_millis(5000);

fn config(loop_enabled: bool) -> ViewportConfig {
    ViewportConfig {
        loop_enabled,
        autoplay_delay: DELAY,
        transition_speed: SPEED,
        drag_enabled: true,
    }
}

fn viewport(n: usize, loop_enabled: bool) -> (Viewport, Receiver<SlideChange>, Instant) {
    let start = Instant::now();
    let mut vp = Viewport::new(n, config(loop_enabled), start);
    let rx = vp.subscribe();
    (vp, rx, start)
}

fn drain(rx: &Receiver<SlideChange>) -> Vec<isize> {
    rx.try_iter().map(|c| c.real_index).collect()
}

// ===== Requests =====

#[test]
fn advance_completes_after_transition_speed() {
    let (mut vp, rx, t0) = viewport(3, true);
    vp.advance();

    assert_eq!(vp.tick(t0), 0);
    assert!(vp.is_transitioning());
    assert!(drain(&rx).is_empty(), "no change before the move completes");

    assert_eq!(vp.tick(t0 + SPEED), 1);
    assert_eq!(drain(&rx), vec![1]);
    assert_eq!(vp.real_index(), 1);
    assert!(!vp.is_transitioning());
}

#[test]
fn each_request_emits_exactly_one_change() {
    let (mut vp, rx, t0) = viewport(3, true);
    vp.advance();
    vp.advance();
    vp.retreat();
    vp.jump_to(2);

    let mut now = t0;
    for _ in 0..4 {
        vp.tick(now);
        now += SPEED;
    }
    vp.tick(now);

    assert_eq!(drain(&rx), vec![1, 2, 1, 2]);
    assert_eq!(vp.pending_moves(), 0);
}

#[test]
fn loop_advance_wraps_to_first() {
    let (mut vp, rx, t0) = viewport(3, true);
    vp.jump_to(2);
    vp.tick(t0);
    vp.tick(t0 + SPEED);
    vp.advance();
    vp.tick(t0 + SPEED);
    vp.tick(t0 + SPEED * 2);

    assert_eq!(drain(&rx), vec![2, 0]);
}

#[test]
fn loop_retreat_wraps_to_last() {
    let (mut vp, rx, t0) = viewport(3, true);
    vp.retreat();
    vp.tick(t0);
    vp.tick(t0 + SPEED);

    assert_eq!(drain(&rx), vec![2]);
}

#[test]
fn non_loop_edges_report_unchanged_index() {
    let (mut vp, rx, t0) = viewport(3, false);
    vp.retreat();
    vp.tick(t0);
    vp.tick(t0 + SPEED);

    assert_eq!(drain(&rx), vec![0]);
    assert_eq!(vp.real_index(), 0);
}

#[test]
fn jump_after_wrapping_lands_on_real_index() {
    let (mut vp, rx, t0) = viewport(3, true);
    let mut now = t0;
    for _ in 0..4 {
        vp.advance();
        vp.tick(now);
        now += SPEED;
        vp.tick(now);
    }
    vp.jump_to(0);
    vp.tick(now);
    vp.tick(now + SPEED);

    assert_eq!(drain(&rx), vec![1, 2, 0, 1, 0]);
}

#[test]
fn jump_outside_range_is_ignored() {
    let (mut vp, rx, t0) = viewport(3, true);
    vp.jump_to(3);
    vp.tick(t0);
    vp.tick(t0 + SPEED);

    assert_eq!(vp.pending_moves(), 0);
    assert!(drain(&rx).is_empty());
}

#[test]
fn zero_speed_completes_in_same_tick() {
    let t0 = Instant::now();
    let mut vp = Viewport::new(
        3,
        ViewportConfig {
            transition_speed: Duration::ZERO,
            ..config(true)
        },
        t0,
    );
    let rx = vp.subscribe();
    vp.advance();
    vp.advance();

    assert_eq!(vp.tick(t0), 2);
    assert_eq!(drain(&rx), vec![1, 2]);
}

// ===== Autoplay =====

#[test]
fn autoplay_waits_for_delay() {
    let (mut vp, rx, t0) = viewport(3, true);
    vp.tick(t0 + DELAY - Duration::from_millis(1));
    assert!(!vp.is_transitioning());

    vp.tick(t0 + DELAY);
    assert!(vp.is_transitioning());
    vp.tick(t0 + DELAY + SPEED);

    assert_eq!(drain(&rx), vec![1]);
}

#[test]
fn autoplay_timer_restarts_after_each_settle() {
    let (mut vp, rx, t0) = viewport(3, true);
    vp.advance();
    vp.tick(t0);
    let settled = t0 + SPEED;
    vp.tick(settled);

    // Not due yet: delay counts from the settle, not from creation.
    vp.tick(t0 + DELAY);
    assert!(!vp.is_transitioning());

    vp.tick(settled + DELAY);
    vp.tick(settled + DELAY + SPEED);
    assert_eq!(drain(&rx), vec![1, 2]);
}

#[test]
fn autoplay_cycles_through_loop() {
    let (mut vp, rx, t0) = viewport(3, true);
    let mut now = t0;
    for _ in 0..3 {
        now += DELAY;
        vp.tick(now);
        now += SPEED;
        vp.tick(now);
    }
    assert_eq!(drain(&rx), vec![1, 2, 0]);
}

// ===== Drag =====

#[test]
fn drag_left_advances_and_drag_right_retreats() {
    let (mut vp, rx, t0) = viewport(3, true);

    vp.begin_drag(40);
    assert!(vp.is_dragging());
    assert!(vp.end_drag(30));
    vp.tick(t0);
    vp.tick(t0 + SPEED);

    vp.begin_drag(10);
    assert!(vp.end_drag(10 + DRAG_THRESHOLD));
    vp.tick(t0 + SPEED);
    vp.tick(t0 + SPEED * 2);

    assert_eq!(drain(&rx), vec![1, 0]);
}

#[test]
fn short_drag_does_nothing() {
    let (mut vp, _rx, _t0) = viewport(3, true);
    vp.begin_drag(20);
    assert!(!vp.end_drag(22));
    assert_eq!(vp.pending_moves(), 0);
    assert!(!vp.is_dragging());
}

#[test]
fn drag_disabled_ignores_gestures() {
    let t0 = Instant::now();
    let mut vp = Viewport::new(
        3,
        ViewportConfig {
            drag_enabled: false,
            ..config(true)
        },
        t0,
    );
    vp.begin_drag(40);
    assert!(!vp.is_dragging());
    assert!(!vp.end_drag(0));
}

// ===== Subscription =====

#[test]
fn detach_stops_notifications() {
    let (mut vp, rx, t0) = viewport(3, true);
    vp.detach();
    vp.advance();
    vp.tick(t0);
    vp.tick(t0 + SPEED);

    assert!(!vp.is_attached());
    assert!(drain(&rx).is_empty());
    assert_eq!(vp.real_index(), 1);
}

#[test]
fn dropped_receiver_detaches_on_next_emit() {
    let (mut vp, rx, t0) = viewport(3, true);
    drop(rx);
    vp.advance();
    vp.tick(t0);
    vp.tick(t0 + SPEED);
    assert!(!vp.is_attached());
}

// ===== Empty deck =====

#[test]
fn empty_deck_ignores_everything() {
    let (mut vp, rx, t0) = viewport(0, true);
    vp.advance();
    vp.retreat();
    vp.jump_to(0);
    vp.begin_drag(5);

    assert_eq!(vp.tick(t0 + DELAY * 3), 0);
    assert_eq!(vp.pending_moves(), 0);
    assert_eq!(vp.real_index(), 0);
    assert!(!vp.is_dragging());
    assert!(drain(&rx).is_empty());
}
