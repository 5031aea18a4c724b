//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

use std::time::Duration;

/// Interval between animation frames.
///
/// Also the event poll timeout, so input latency is bounded by it.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Motion offsets are expressed in these units per viewport width.
pub const OFFSET_UNITS_PER_VIEWPORT: f32 = 1000.0;

/// Rows between the bottom edge and the indicator bar.
pub const INDICATOR_BOTTOM_MARGIN: u16 = 1;

/// Preferred width of one indicator segment in columns.
pub const INDICATOR_SEGMENT_WIDTH: u16 = 8;

/// Columns between indicator segments.
pub const INDICATOR_GAP: u16 = 1;

/// Width of each navigation arrow hit area.
pub const ARROW_WIDTH: u16 = 5;

/// Height of each navigation arrow hit area.
pub const ARROW_HEIGHT: u16 = 3;

/// Left inset of the text overlay.
pub const OVERLAY_LEFT_PADDING: u16 = 8;

/// Rows kept free between the overlay and the indicator bar.
pub const OVERLAY_BOTTOM_PADDING: u16 = 2;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 70;
