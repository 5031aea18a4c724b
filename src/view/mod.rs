//! TUI rendering and terminal management (impure shell)

pub mod backdrop;
pub mod constants;
mod help;
pub mod indicator;
pub mod layout;
pub mod motion;
pub mod overlay;
mod styles;

pub use help::render_help_overlay;
pub use layout::{render_carousel, CarouselLayout, FrameContext, HitTarget};
pub use motion::{OverlayAnimator, ProgressClock};
pub use styles::{CarouselStyles, ColorConfig};

use crate::config::keybindings::KeyBindings;
use crate::engine::{Viewport, ViewportConfig};
use crate::model::{AppError, KeyAction, SlideDeck};
use crate::state::{Carousel, CarouselOptions};
use constants::FRAME_INTERVAL;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

impl From<TuiError> for AppError {
    fn from(err: TuiError) -> Self {
        match err {
            TuiError::Io(e) => AppError::Terminal(e),
        }
    }
}

/// Everything needed to start a carousel session.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Engine behavior.
    pub viewport: ViewportConfig,
    /// Core behavior.
    pub carousel: CarouselOptions,
    /// Color output.
    pub colors: ColorConfig,
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    carousel: Carousel<Viewport>,
    key_bindings: KeyBindings,
    styles: CarouselStyles,
    animator: OverlayAnimator,
    progress: ProgressClock,
    autoplay_delay: Duration,
    layout: CarouselLayout,
    help_visible: bool,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(deck: SlideDeck, options: RunOptions) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Self::with_terminal(terminal, deck, options, Instant::now())
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q, Esc or Ctrl+C). Input is polled with the
    /// frame interval as timeout; every pass advances the engine clock and
    /// redraws.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw(Instant::now())?;

        loop {
            if event::poll(FRAME_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                    }
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    Event::Resize(width, height) => self.handle_resize(width, height),
                    _ => {}
                }
            }

            let now = Instant::now();
            self.tick(now);
            self.draw(now)?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Build the app on an existing terminal, mounting a carousel over
    /// `deck` with the engine clock starting at `now`.
    pub fn with_terminal(
        terminal: Terminal<B>,
        deck: SlideDeck,
        options: RunOptions,
        now: Instant,
    ) -> Result<Self, TuiError> {
        let size = terminal.size()?;
        let layout = CarouselLayout::compute(Rect::new(0, 0, size.width, size.height), deck.len());

        let mut viewport = Viewport::new(deck.len(), options.viewport, now);
        let changes = viewport.subscribe();
        info!(slides = deck.len(), "Mounting carousel");
        let carousel = Carousel::new(deck, viewport, changes, options.carousel);

        Ok(Self {
            terminal,
            carousel,
            key_bindings: KeyBindings::default(),
            styles: CarouselStyles::with_color_config(options.colors),
            animator: OverlayAnimator::new(),
            progress: ProgressClock::new(now),
            autoplay_delay: options.viewport.autoplay_delay,
            layout,
            help_visible: false,
        })
    }

    /// The mounted carousel.
    pub fn carousel(&self) -> &Carousel<Viewport> {
        &self.carousel
    }

    /// The terminal (for inspecting test backends).
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Whether the help popup is shown.
    pub fn help_visible(&self) -> bool {
        self.help_visible
    }

    /// Current layout.
    pub fn layout(&self) -> &CarouselLayout {
        &self.layout
    }

    /// Advance the engine to `now` and apply its notifications.
    ///
    /// Returns the number of accepted slide changes.
    pub fn tick(&mut self, now: Instant) -> usize {
        self.carousel.navigator_mut().tick(now);
        self.carousel.pump()
    }

    /// Handle a key press. Returns true when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        if self.help_visible {
            match action {
                KeyAction::Help => self.help_visible = false,
                KeyAction::Quit if key.code == KeyCode::Esc => self.help_visible = false,
                KeyAction::Quit => return true,
                _ if action.is_navigation() => {
                    debug!(?action, "Ignoring navigation while help is open");
                }
                _ => {}
            }
            return false;
        }

        self.handle_action(action)
    }

    fn handle_action(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::Next => self.carousel.next(),
            KeyAction::Previous => self.carousel.previous(),
            KeyAction::JumpTo(n) => self.jump(n.saturating_sub(1)),
            KeyAction::First => self.carousel.first(),
            KeyAction::Last => self.carousel.last(),
            KeyAction::Help => self.help_visible = true,
            KeyAction::Quit => return true,
        }
        false
    }

    fn jump(&mut self, index: usize) {
        if let Err(e) = self.carousel.go_to(index) {
            debug!("Ignoring jump: {e}");
        }
    }

    /// Handle mouse input: clicks on arrows and indicators, drags elsewhere.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                match self.layout.hit_test(mouse.column, mouse.row) {
                    Some(HitTarget::Previous) => self.carousel.previous(),
                    Some(HitTarget::Next) => self.carousel.next(),
                    Some(HitTarget::Indicator(index)) => self.jump(index),
                    None => self.carousel.navigator_mut().begin_drag(mouse.column),
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if self.carousel.navigator_mut().end_drag(mouse.column) {
                    debug!(column = mouse.column, "Drag moved slides");
                }
            }
            _ => {}
        }
    }

    /// Recompute the layout for a new terminal size.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        debug!(width, height, "Terminal resized");
        self.layout =
            CarouselLayout::compute(Rect::new(0, 0, width, height), self.carousel.deck().len());
    }

    /// Render one frame at `now`.
    pub fn draw(&mut self, now: Instant) -> Result<(), TuiError> {
        let model = self.carousel.render_model();
        self.animator.observe(&model, now);

        let active_key = model
            .indicators
            .iter()
            .find(|segment| segment.active)
            .and_then(|segment| segment.restart_key);
        self.progress.observe(active_key, now);

        let ctx = FrameContext {
            layout: &self.layout,
            animator: &self.animator,
            progress: self.progress.fraction(now, self.autoplay_delay),
            styles: &self.styles,
            help_visible: self.help_visible,
            now,
        };
        self.terminal
            .draw(|frame| render_carousel(frame, &model, &ctx))?;
        Ok(())
    }

    /// Stop listening to the engine and detach it.
    pub fn shutdown(&mut self) {
        self.carousel.unmount();
        self.carousel.navigator_mut().detach();
    }
}

/// Initialize and run the TUI application over `deck`
///
/// This is the main entry point for the TUI. It handles terminal
/// setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_deck(deck: SlideDeck, options: RunOptions) -> Result<(), TuiError> {
    let mut app = TuiApp::new(deck, options)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();
    app.shutdown();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
