//! Screen layout and frame composition.
//!
//! Pure geometry lives in [`CarouselLayout`]; [`render_carousel`] draws a
//! [`RenderModel`] into it.

use super::backdrop::Backdrop;
use super::constants::{
    ARROW_HEIGHT, ARROW_WIDTH, INDICATOR_BOTTOM_MARGIN, INDICATOR_GAP, INDICATOR_SEGMENT_WIDTH,
    OVERLAY_BOTTOM_PADDING,
};
use super::help::render_help_overlay;
use super::indicator::IndicatorBar;
use super::motion::{compose, Layer, OverlayAnimator};
use super::overlay::Overlay;
use super::styles::CarouselStyles;
use crate::state::{OverlayFrame, RenderModel};
use ratatui::{
    layout::{Alignment, Position, Rect},
    text::Line,
    widgets::Paragraph,
    Frame,
};
use std::time::Instant;

/// Clickable regions of the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// The previous-slide arrow.
    Previous,
    /// The next-slide arrow.
    Next,
    /// An indicator segment (real slide index).
    Indicator(usize),
}

/// Areas of one carousel frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselLayout {
    /// The full slide area.
    pub slide: Rect,
    /// Region the text overlay is bottom-aligned in.
    pub overlay: Rect,
    /// Previous arrow hit area.
    pub previous: Rect,
    /// Next arrow hit area.
    pub next: Rect,
    /// One rect per indicator segment.
    pub indicators: Vec<Rect>,
}

impl CarouselLayout {
    /// Compute the layout for `slide_count` slides in `area`.
    pub fn compute(area: Rect, slide_count: usize) -> Self {
        let indicator_y = area
            .bottom()
            .saturating_sub(1 + INDICATOR_BOTTOM_MARGIN)
            .max(area.y);
        let indicators = indicator_rects(area, indicator_y, slide_count);

        let overlay_bottom = indicator_y.saturating_sub(OVERLAY_BOTTOM_PADDING).max(area.y);
        let overlay = Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: overlay_bottom - area.y,
        };

        let arrow_y = area.y + area.height.saturating_sub(ARROW_HEIGHT) / 2;
        let arrow_width = ARROW_WIDTH.min(area.width / 2);
        let arrow_height = ARROW_HEIGHT.min(area.height);
        let previous = Rect {
            x: area.x,
            y: arrow_y,
            width: arrow_width,
            height: arrow_height,
        };
        let next = Rect {
            x: area.right().saturating_sub(arrow_width),
            y: arrow_y,
            width: arrow_width,
            height: arrow_height,
        };

        Self {
            slide: area,
            overlay,
            previous,
            next,
            indicators,
        }
    }

    /// What sits under a mouse position, if anything clickable.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<HitTarget> {
        let position = Position::new(column, row);
        if self.previous.contains(position) {
            return Some(HitTarget::Previous);
        }
        if self.next.contains(position) {
            return Some(HitTarget::Next);
        }
        self.indicators
            .iter()
            .position(|rect| rect.contains(position))
            .map(HitTarget::Indicator)
    }
}

/// Centered row of segments, shrunk to fit narrow screens.
fn indicator_rects(area: Rect, y: u16, count: usize) -> Vec<Rect> {
    let Ok(n) = u16::try_from(count) else {
        return Vec::new();
    };
    if n == 0 || area.height == 0 {
        return Vec::new();
    }

    let gaps = INDICATOR_GAP * (n - 1);
    let available = area.width.saturating_sub(gaps);
    let width = INDICATOR_SEGMENT_WIDTH.min(available / n);
    if width == 0 {
        return Vec::new();
    }

    let total = width * n + gaps;
    let start = area.x + (area.width - total) / 2;
    (0..n)
        .map(|i| Rect {
            x: start + i * (width + INDICATOR_GAP),
            y,
            width,
            height: 1,
        })
        .collect()
}

/// Everything a frame needs besides the model.
pub struct FrameContext<'a> {
    /// Precomputed layout.
    pub layout: &'a CarouselLayout,
    /// Overlay clocks.
    pub animator: &'a OverlayAnimator,
    /// Fill of the active indicator.
    pub progress: f32,
    /// Resolved styles.
    pub styles: &'a CarouselStyles,
    /// Whether the help popup is shown.
    pub help_visible: bool,
    /// Frame time.
    pub now: Instant,
}

/// Draw one carousel frame.
pub fn render_carousel(frame: &mut Frame, model: &RenderModel<'_>, ctx: &FrameContext<'_>) {
    let layout = ctx.layout;

    let Some(current) = model.current_index.and_then(|i| model.deck.get(i)) else {
        let empty = Paragraph::new(Line::from("No slides to show"))
            .style(ctx.styles.media_label)
            .alignment(Alignment::Center);
        let y = layout.slide.y + layout.slide.height / 2;
        frame.render_widget(
            empty,
            Rect {
                y,
                height: layout.slide.height.min(1),
                ..layout.slide
            },
        );
        if ctx.help_visible {
            render_help_overlay(frame);
        }
        return;
    };

    frame.render_widget(Backdrop::new(current, ctx.styles), layout.slide);

    if let Some(departing) = &model.departing {
        render_overlay(frame, model, departing, ctx, true);
    }
    if let Some(mounted) = &model.overlay {
        render_overlay(frame, model, mounted, ctx, false);
    }

    if model.deck.len() > 1 {
        let arrow = ctx.styles.arrow;
        frame.render_widget(
            Paragraph::new(Line::from(" ‹ ")).style(arrow).alignment(Alignment::Center),
            middle_row(layout.previous),
        );
        frame.render_widget(
            Paragraph::new(Line::from(" › ")).style(arrow).alignment(Alignment::Center),
            middle_row(layout.next),
        );
    }

    frame.render_widget(
        IndicatorBar::new(&model.indicators, &layout.indicators, ctx.progress, ctx.styles),
        layout.slide,
    );

    if ctx.help_visible {
        render_help_overlay(frame);
    }
}

fn render_overlay(
    frame: &mut Frame,
    model: &RenderModel<'_>,
    overlay: &OverlayFrame,
    ctx: &FrameContext<'_>,
    departing: bool,
) {
    let Some(slide) = model.deck.get(overlay.slide_index) else {
        return;
    };
    let poses = if departing {
        ctx.animator
            .departing_pose(overlay, Layer::Container, ctx.now)
            .zip(ctx.animator.departing_pose(overlay, Layer::Item, ctx.now))
    } else {
        Some((
            ctx.animator.mounted_pose(overlay, Layer::Container, ctx.now),
            ctx.animator.mounted_pose(overlay, Layer::Item, ctx.now),
        ))
    };
    if let Some((container, item)) = poses {
        frame.render_widget(
            Overlay::new(slide, compose(container, item), ctx.styles),
            ctx.layout.overlay,
        );
    }
}

fn middle_row(rect: Rect) -> Rect {
    Rect {
        y: rect.y + rect.height / 2,
        height: rect.height.min(1),
        ..rect
    }
}
