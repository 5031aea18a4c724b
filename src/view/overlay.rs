//! Text and call-to-action overlay for one slide.
//!
//! The overlay is bottom-left aligned in its area and slides horizontally
//! by its pose offset, clipped at the area edges.

use super::constants::{OFFSET_UNITS_PER_VIEWPORT, OVERLAY_LEFT_PADDING};
use super::styles::{fade, CarouselStyles};
use crate::model::{Pose, Slide, TextBlock};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthChar;

/// Convert a motion offset into terminal columns for an area `width` wide.
pub fn offset_columns(x: f32, width: u16) -> i32 {
    (x * f32::from(width) / OFFSET_UNITS_PER_VIEWPORT).round() as i32
}

/// Overlay widget.
pub struct Overlay<'a> {
    slide: &'a Slide,
    pose: Pose,
    styles: &'a CarouselStyles,
}

impl<'a> Overlay<'a> {
    /// Overlay for `slide` drawn at `pose`.
    pub fn new(slide: &'a Slide, pose: Pose, styles: &'a CarouselStyles) -> Self {
        Self {
            slide,
            pose,
            styles,
        }
    }

    /// Content lines, top to bottom.
    pub fn lines(&self) -> Vec<Line<'a>> {
        let mut groups: Vec<Vec<Line<'a>>> = Vec::new();

        for block in self.slide.text_blocks() {
            let group = match block {
                TextBlock::Subtitle(text) => {
                    vec![Line::styled(text.to_uppercase(), self.styles.subtitle)]
                }
                TextBlock::Headline(text) => text
                    .lines()
                    .map(|l| Line::styled(l, self.styles.headline))
                    .collect(),
                TextBlock::Description(text) => text
                    .lines()
                    .map(|l| Line::styled(l, self.styles.description))
                    .collect(),
            };
            groups.push(group);
        }

        if !self.slide.actions.is_empty() {
            let mut spans = Vec::with_capacity(self.slide.actions.len() * 2);
            for (i, action) in self.slide.actions.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw("  "));
                }
                spans.push(Span::styled(
                    format!("  {}  ", action.label),
                    self.styles.button(action.style),
                ));
            }
            groups.push(vec![Line::from(spans)]);
        }

        let mut lines = Vec::new();
        for (i, group) in groups.into_iter().enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            lines.extend(group);
        }
        lines
    }
}

impl Widget for Overlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if area.is_empty() {
            return;
        }

        let lines = self.lines();
        let visible = lines.len().min(usize::from(area.height));
        let skip = lines.len() - visible;
        // visible <= area.height, so this fits in u16
        let top = area.bottom() - visible as u16;

        let x = i32::from(area.x)
            + i32::from(OVERLAY_LEFT_PADDING.min(area.width))
            + offset_columns(self.pose.x, area.width);

        for (row, line) in lines.iter().skip(skip).enumerate() {
            draw_clipped(buf, area, x, top + row as u16, line, self.pose.opacity);
        }
    }
}

fn draw_clipped(buf: &mut Buffer, area: Rect, x: i32, y: u16, line: &Line<'_>, opacity: f32) {
    let left = i32::from(area.left());
    let right = i32::from(area.right());
    let mut column = x;

    for span in &line.spans {
        let Some(style) = fade(line.style.patch(span.style), opacity) else {
            return;
        };
        for ch in span.content.chars() {
            let width = ch.width().unwrap_or(0) as i32;
            if width == 0 {
                continue;
            }
            if column >= left && column + width <= right {
                draw_char(buf, column as u16, y, ch, width as u16, style);
            }
            column += width;
            if column >= right {
                return;
            }
        }
    }
}

fn draw_char(buf: &mut Buffer, x: u16, y: u16, ch: char, width: u16, style: Style) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_char(ch).set_style(style);
    }
    for trailing in 1..width {
        if let Some(cell) = buf.cell_mut((x + trailing, y)) {
            cell.reset();
        }
    }
}
