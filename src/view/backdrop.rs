//! Full-bleed slide background.
//!
//! Terminals cannot show the media itself, so the backdrop is a tinted
//! field with a dark gradient toward the bottom and a label naming the
//! media source.

use super::styles::CarouselStyles;
use crate::model::{MediaKind, Slide};
use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

/// Gradient darkness at `height` (0.0 = bottom row, 1.0 = top row).
///
/// 70% at the bottom, 30% at 40% height, clear at the top.
pub fn gradient_alpha(height: f32) -> f32 {
    let h = height.clamp(0.0, 1.0);
    if h <= 0.4 {
        0.7 - 0.4 * (h / 0.4)
    } else {
        0.3 * (1.0 - (h - 0.4) / 0.6)
    }
}

/// Background widget for one slide.
pub struct Backdrop<'a> {
    slide: &'a Slide,
    styles: &'a CarouselStyles,
}

impl<'a> Backdrop<'a> {
    /// Backdrop for `slide`.
    pub fn new(slide: &'a Slide, styles: &'a CarouselStyles) -> Self {
        Self { slide, styles }
    }

    fn media_label(&self) -> String {
        let glyph = match self.slide.kind {
            MediaKind::Video => '▶',
            MediaKind::Image => '■',
        };
        format!("{glyph} {}  {}", self.slide.kind.label(), self.slide.src)
    }
}

impl Widget for Backdrop<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if area.is_empty() {
            return;
        }

        let span = f32::from(area.height.saturating_sub(1).max(1));
        for y in area.top()..area.bottom() {
            let height = f32::from(area.bottom() - 1 - y) / span;
            if let Some(bg) = self.styles.backdrop(self.slide.kind, gradient_alpha(height)) {
                let row = Rect {
                    y,
                    height: 1,
                    ..area
                };
                buf.set_style(row, Style::default().bg(bg));
            }
        }

        if area.width > 4 {
            buf.set_stringn(
                area.x + 2,
                area.y,
                self.media_label(),
                usize::from(area.width - 4),
                self.styles.media_label,
            );
        }
    }
}
