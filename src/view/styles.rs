//! Carousel styling configuration.
//!
//! Colors follow the hero banner palette: white primary buttons with teal
//! text, gray secondary buttons, and a dark gradient behind the overlay.

use crate::model::{ButtonStyle, MediaKind};
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Config with colors forced on or off.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Teal used for primary button text.
pub const BRAND_TEAL: Color = Color::Rgb(0x00, 0x60, 0x5c);

/// Gray used for secondary button backgrounds.
pub const SECONDARY_GRAY: Color = Color::Rgb(0x9c, 0xa3, 0xaf);

/// Base backdrop color for video slides.
pub const VIDEO_BACKDROP: (u8, u8, u8) = (0x1f, 0x2a, 0x38);

/// Base backdrop color for image slides.
pub const IMAGE_BACKDROP: (u8, u8, u8) = (0x2e, 0x2a, 0x26);

// ===== CarouselStyles =====

/// Resolved styles for every carousel element.
#[derive(Debug, Clone, Copy)]
pub struct CarouselStyles {
    colors: bool,
    /// Small caps line above the headline.
    pub subtitle: Style,
    /// Large headline.
    pub headline: Style,
    /// Body copy.
    pub description: Style,
    /// Source label in the top-left corner.
    pub media_label: Style,
    /// Previous/next arrows.
    pub arrow: Style,
    /// Unfilled indicator track.
    pub indicator_track: Style,
    /// Filled part of the active indicator.
    pub indicator_fill: Style,
}

impl CarouselStyles {
    /// Styles with the given color configuration.
    ///
    /// If colors are disabled, styling falls back to modifiers only.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                colors: true,
                subtitle: Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::BOLD),
                headline: Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
                description: Style::default().fg(Color::Gray),
                media_label: Style::default().fg(Color::DarkGray),
                arrow: Style::default().fg(Color::White),
                indicator_track: Style::default().fg(Color::DarkGray),
                indicator_fill: Style::default().fg(Color::White),
            }
        } else {
            Self {
                colors: false,
                subtitle: Style::default().add_modifier(Modifier::BOLD),
                headline: Style::default().add_modifier(Modifier::BOLD),
                description: Style::default(),
                media_label: Style::default().add_modifier(Modifier::DIM),
                arrow: Style::default(),
                indicator_track: Style::default().add_modifier(Modifier::DIM),
                indicator_fill: Style::default(),
            }
        }
    }

    /// Whether colors are in use.
    pub fn colors_enabled(&self) -> bool {
        self.colors
    }

    /// Style for a call-to-action button.
    pub fn button(&self, style: ButtonStyle) -> Style {
        match (self.colors, style) {
            (true, ButtonStyle::Primary) => Style::default()
                .bg(Color::White)
                .fg(BRAND_TEAL)
                .add_modifier(Modifier::BOLD),
            (true, ButtonStyle::Secondary) => Style::default()
                .bg(SECONDARY_GRAY)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            (false, ButtonStyle::Primary) => Style::default().add_modifier(Modifier::REVERSED),
            (false, ButtonStyle::Secondary) => Style::default().add_modifier(Modifier::UNDERLINED),
        }
    }

    /// Backdrop color for `kind` at gradient darkness `alpha` (0 = base, 1 = black).
    pub fn backdrop(&self, kind: MediaKind, alpha: f32) -> Option<Color> {
        if !self.colors {
            return None;
        }
        let (r, g, b) = match kind {
            MediaKind::Video => VIDEO_BACKDROP,
            MediaKind::Image => IMAGE_BACKDROP,
        };
        let keep = 1.0 - alpha.clamp(0.0, 1.0);
        let shade = |c: u8| (f32::from(c) * keep).round() as u8;
        Some(Color::Rgb(shade(r), shade(g), shade(b)))
    }
}

impl Default for CarouselStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}

/// Approximate an opacity in a terminal cell.
///
/// Mostly transparent content is hidden, half transparent content is dimmed.
pub fn fade(style: Style, opacity: f32) -> Option<Style> {
    if opacity < 0.2 {
        None
    } else if opacity < 0.6 {
        Some(style.add_modifier(Modifier::DIM))
    } else {
        Some(style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_is_white_with_teal_text() {
        let styles = CarouselStyles::with_color_config(ColorConfig::new(true));
        let style = styles.button(ButtonStyle::Primary);
        assert_eq!(style.bg, Some(Color::White));
        assert_eq!(style.fg, Some(BRAND_TEAL));
    }

    #[test]
    fn secondary_button_is_gray_with_white_text() {
        let styles = CarouselStyles::with_color_config(ColorConfig::new(true));
        let style = styles.button(ButtonStyle::Secondary);
        assert_eq!(style.bg, Some(SECONDARY_GRAY));
        assert_eq!(style.fg, Some(Color::White));
    }

    #[test]
    fn no_color_drops_all_colors() {
        let styles = CarouselStyles::with_color_config(ColorConfig::new(false));
        assert_eq!(styles.headline.fg, None);
        assert_eq!(styles.button(ButtonStyle::Primary).bg, None);
        assert_eq!(styles.backdrop(MediaKind::Video, 0.5), None);
    }

    #[test]
    fn backdrop_darkens_toward_black() {
        let styles = CarouselStyles::with_color_config(ColorConfig::new(true));
        assert_eq!(
            styles.backdrop(MediaKind::Image, 0.0),
            Some(Color::Rgb(IMAGE_BACKDROP.0, IMAGE_BACKDROP.1, IMAGE_BACKDROP.2))
        );
        assert_eq!(styles.backdrop(MediaKind::Image, 1.0), Some(Color::Rgb(0, 0, 0)));
    }

    #[test]
    fn fade_hides_dims_and_keeps() {
        let base = Style::default();
        assert_eq!(fade(base, 0.0), None);
        assert_eq!(fade(base, 0.4), Some(base.add_modifier(Modifier::DIM)));
        assert_eq!(fade(base, 1.0), Some(base));
    }
}
