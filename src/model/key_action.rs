//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Navigation
    /// Advance to the next slide. Default: →/l/n
    Next,
    /// Go back to the previous slide. Default: ←/h/p
    Previous,
    /// Jump to a slide by 1-indexed number. Default: 1-9
    JumpTo(usize),
    /// Jump to the first slide. Default: g/Home
    First,
    /// Jump to the last slide. Default: G/End
    Last,

    // Application
    /// Show or hide the key binding overlay. Default: ?
    Help,
    /// Exit the application. Default: q/Esc/Ctrl+c
    Quit,
}

impl KeyAction {
    /// Whether the action is a navigation request forwarded to the viewport engine.
    pub fn is_navigation(self) -> bool {
        matches!(
            self,
            KeyAction::Next
                | KeyAction::Previous
                | KeyAction::JumpTo(_)
                | KeyAction::First
                | KeyAction::Last
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_actions_are_classified() {
        assert!(KeyAction::Next.is_navigation());
        assert!(KeyAction::Previous.is_navigation());
        assert!(KeyAction::JumpTo(3).is_navigation());
        assert!(KeyAction::First.is_navigation());
        assert!(KeyAction::Last.is_navigation());
    }

    #[test]
    fn application_actions_are_not_navigation() {
        assert!(!KeyAction::Help.is_navigation());
        assert!(!KeyAction::Quit.is_navigation());
    }

    #[test]
    fn jump_to_compares_by_payload() {
        assert_eq!(KeyAction::JumpTo(2), KeyAction::JumpTo(2));
        assert_ne!(KeyAction::JumpTo(2), KeyAction::JumpTo(3));
    }
}
