//! Segmented progress indicator.

use super::styles::CarouselStyles;
use crate::state::IndicatorSegment;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

const TRACK: char = '─';
const FILL: char = '━';

/// Number of filled cells in a segment `width` wide at `fraction`.
pub fn filled_cells(width: u16, fraction: f32) -> u16 {
    (f32::from(width) * fraction.clamp(0.0, 1.0)).round() as u16
}

/// One segment per slide; the active one fills up over the autoplay delay.
pub struct IndicatorBar<'a> {
    segments: &'a [IndicatorSegment],
    rects: &'a [Rect],
    progress: f32,
    styles: &'a CarouselStyles,
}

impl<'a> IndicatorBar<'a> {
    /// One rect per segment; `progress` fills the active one.
    pub fn new(
        segments: &'a [IndicatorSegment],
        rects: &'a [Rect],
        progress: f32,
        styles: &'a CarouselStyles,
    ) -> Self {
        Self {
            segments,
            rects,
            progress,
            styles,
        }
    }
}

impl Widget for IndicatorBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (segment, rect) in self.segments.iter().zip(self.rects) {
            let rect = rect.intersection(area).intersection(buf.area);
            if rect.is_empty() {
                continue;
            }
            let filled = if segment.active {
                filled_cells(rect.width, self.progress)
            } else {
                0
            };
            for (i, x) in (rect.left()..rect.right()).enumerate() {
                let Some(cell) = buf.cell_mut((x, rect.y)) else {
                    continue;
                };
                if i < usize::from(filled) {
                    cell.set_char(FILL).set_style(self.styles.indicator_fill);
                } else {
                    cell.set_char(TRACK).set_style(self.styles.indicator_track);
                }
            }
        }
    }
}
