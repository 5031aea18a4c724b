//! Regression tests for degenerate decks and terminal sizes.
//!
//! None of these may panic; the assertions pin down the fallback behavior.

use crate::model::{MediaKind, Slide, SlideDeck};
use crate::view::{ColorConfig, RunOptions, TuiApp};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::time::{Duration, Instant};

fn app(deck: SlideDeck, width: u16, height: u16, t0: Instant) -> TuiApp<TestBackend> {
    let terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
    let options = RunOptions {
        colors: ColorConfig::new(true),
        ..RunOptions::default()
    };
    TuiApp::with_terminal(terminal, deck, options, t0).expect("app")
}

fn single() -> SlideDeck {
    SlideDeck::new(vec![Slide::new(MediaKind::Image, "only.jpg").with_headline("Only")])
}

#[test]
fn single_slide_never_moves() {
    let t0 = Instant::now();
    let mut app = app(single(), 80, 24, t0);

    for code in [KeyCode::Right, KeyCode::Left, KeyCode::End] {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }
    let mut t = t0;
    for _ in 0..4 {
        app.tick(t);
        t += Duration::from_millis(900);
    }

    let state = app.carousel().state();
    assert_eq!(state.current_index, 0);
    assert_eq!(state.direction, crate::model::Direction::Still);
    app.draw(t).expect("draw");
}

#[test]
fn tiny_terminals_render() {
    let t0 = Instant::now();
    for (width, height) in [(1, 1), (2, 40), (120, 1), (5, 3)] {
        let mut app = app(SlideDeck::builtin(), width, height, t0);
        app.handle_key(KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE));
        app.draw(t0).expect("draw");
    }
}

#[test]
fn resize_to_zero_mid_transition() {
    let t0 = Instant::now();
    let mut app = app(SlideDeck::builtin(), 80, 24, t0);

    app.handle_key(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE));
    app.tick(t0);
    app.tick(t0 + Duration::from_millis(900));
    app.handle_resize(0, 0);

    assert!(app.layout().indicators.is_empty());
    app.handle_mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 0,
        row: 0,
        modifiers: KeyModifiers::NONE,
    });
}

#[test]
fn empty_deck_survives_every_input() {
    let t0 = Instant::now();
    let mut app = app(SlideDeck::new(Vec::new()), 80, 24, t0);

    for c in ['l', 'h', '1', '9', 'g', 'G'] {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }
    for kind in [
        MouseEventKind::Down(MouseButton::Left),
        MouseEventKind::Up(MouseButton::Left),
    ] {
        app.handle_mouse(MouseEvent {
            kind,
            column: 10,
            row: 10,
            modifiers: KeyModifiers::NONE,
        });
    }

    assert_eq!(app.tick(t0 + Duration::from_secs(60)), 0);
    assert!(app.carousel().render_model().overlay.is_none());
    app.draw(t0).expect("draw");
}

#[test]
fn very_long_text_is_clipped() {
    let t0 = Instant::now();
    let long = "W".repeat(500);
    let deck = SlideDeck::new(vec![Slide::new(MediaKind::Video, long.clone())
        .with_headline(long.clone())
        .with_description(format!("{long}\n{long}\n{long}"))]);
    let mut app = app(deck, 40, 10, t0);
    app.draw(t0).expect("draw");
}
