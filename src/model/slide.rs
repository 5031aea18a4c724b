//! Slide content types (pure, read-only configuration).

use serde::Deserialize;

/// Kind of background media a slide shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Still image background.
    Image,
    /// Looping, muted video background.
    Video,
}

impl MediaKind {
    /// Short label used by the terminal backdrop.
    pub fn label(self) -> &'static str {
        match self {
            MediaKind::Image => "IMAGE",
            MediaKind::Video => "VIDEO",
        }
    }
}

/// Visual weight of a call-to-action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    /// Filled, high-contrast button.
    #[default]
    Primary,
    /// Muted button.
    Secondary,
}

/// A call-to-action link rendered under the overlay text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CallToAction {
    /// Button label.
    pub label: String,
    /// Link target.
    pub target: String,
    /// Button style.
    #[serde(default)]
    pub style: ButtonStyle,
}

impl CallToAction {
    /// Create a call-to-action entry.
    pub fn new(label: impl Into<String>, target: impl Into<String>, style: ButtonStyle) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
            style,
        }
    }
}

/// One entry of the carousel's fixed sequence.
///
/// Text fields are optional; an empty string is treated the same as a
/// missing one so the overlay never renders blank groups.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Slide {
    /// Background media kind.
    #[serde(rename = "type")]
    pub kind: MediaKind,
    /// Background media source (URL or path).
    pub src: String,
    /// Small uppercase line above the headline.
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Main headline. May contain `\n` line breaks.
    #[serde(default)]
    pub headline: Option<String>,
    /// Body copy under the headline.
    #[serde(default)]
    pub description: Option<String>,
    /// Ordered call-to-action buttons.
    #[serde(default, rename = "buttons")]
    pub actions: Vec<CallToAction>,
}

/// A text group of the overlay, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextBlock<'a> {
    /// Uppercase kicker line.
    Subtitle(&'a str),
    /// Headline, possibly multi-line.
    Headline(&'a str),
    /// Body copy.
    Description(&'a str),
}

impl Slide {
    /// Create a slide with media only; text and actions are added with the
    /// `with_*` builders.
    pub fn new(kind: MediaKind, src: impl Into<String>) -> Self {
        Self {
            kind,
            src: src.into(),
            subtitle: None,
            headline: None,
            description: None,
            actions: Vec::new(),
        }
    }

    /// Set the subtitle.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Set the headline.
    pub fn with_headline(mut self, headline: impl Into<String>) -> Self {
        self.headline = Some(headline.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append a call-to-action.
    pub fn with_action(mut self, action: CallToAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Non-empty text groups in render order.
    pub fn text_blocks(&self) -> Vec<TextBlock<'_>> {
        fn present(s: &Option<String>) -> Option<&str> {
            s.as_deref().filter(|s| !s.is_empty())
        }

        let mut blocks = Vec::with_capacity(3);
        if let Some(s) = present(&self.subtitle) {
            blocks.push(TextBlock::Subtitle(s));
        }
        if let Some(s) = present(&self.headline) {
            blocks.push(TextBlock::Headline(s));
        }
        if let Some(s) = present(&self.description) {
            blocks.push(TextBlock::Description(s));
        }
        blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_blocks_skip_missing_and_empty_text() {
        let slide = Slide::new(MediaKind::Image, "hero.jpg")
            .with_subtitle("POWER. DRIVEN.")
            .with_headline("DBX S")
            .with_description("");

        assert_eq!(
            slide.text_blocks(),
            vec![
                TextBlock::Subtitle("POWER. DRIVEN."),
                TextBlock::Headline("DBX S"),
            ]
        );
    }

    #[test]
    fn text_blocks_borrow_from_the_slide() {
        let deck = vec![Slide::new(MediaKind::Image, "a.jpg").with_headline("First")];
        let headlines: Vec<&str> = deck
            .iter()
            .flat_map(Slide::text_blocks)
            .filter_map(|block| match block {
                TextBlock::Headline(text) => Some(text),
                _ => None,
            })
            .collect();
        assert_eq!(headlines, vec!["First"]);
    }

    #[test]
    fn text_blocks_empty_for_media_only_slide() {
        let slide = Slide::new(MediaKind::Video, "loop.mp4");
        assert!(slide.text_blocks().is_empty());
    }

    #[test]
    fn with_action_preserves_order() {
        let slide = Slide::new(MediaKind::Image, "a.jpg")
            .with_action(CallToAction::new("Explore", "/explore", ButtonStyle::Primary))
            .with_action(CallToAction::new(
                "Configure",
                "/configure",
                ButtonStyle::Secondary,
            ));

        let labels: Vec<&str> = slide.actions.iter().map(|a| a.label.as_str()).collect();
        assert_eq!(labels, vec!["Explore", "Configure"]);
    }

    #[test]
    fn deserializes_from_toml_with_defaults() {
        let slide: Slide = toml::from_str(
            r#"
            type = "video"
            src = "hero.mp4"
            headline = "Vantage S"

            [[buttons]]
            label = "Explore"
            target = "https://example.com"
            "#,
        )
        .expect("valid slide");

        assert_eq!(slide.kind, MediaKind::Video);
        assert_eq!(slide.headline.as_deref(), Some("Vantage S"));
        assert_eq!(slide.subtitle, None);
        assert_eq!(slide.actions.len(), 1);
        assert_eq!(slide.actions[0].style, ButtonStyle::Primary);
    }

    #[test]
    fn rejects_unknown_media_kind() {
        let result: Result<Slide, _> = toml::from_str(
            r#"
            type = "audio"
            src = "a.mp3"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn media_kind_labels() {
        assert_eq!(MediaKind::Image.label(), "IMAGE");
        assert_eq!(MediaKind::Video.label(), "VIDEO");
    }
}
