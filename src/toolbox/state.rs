//! Toolbox state record

use crate::toolbox::timer::{AutoHideTimer, PendingTimeout};
use indexmap::IndexMap;

/// Ordered mapping from button name to its state
pub type ButtonMap = IndexMap<String, ButtonState>;

/// State of a single toolbar button
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonState {
    /// Button is not rendered
    pub hidden: bool,
    /// Button is rendered but ignores clicks
    pub unclickable: bool,
    /// Side panel this button opens, if any
    pub side_container_id: Option<String>,
}

impl ButtonState {
    /// A visible button without a side panel
    pub fn shown() -> Self {
        Self::default()
    }

    /// A button that starts hidden until a feature check reveals it
    pub fn hidden() -> Self {
        Self {
            hidden: true,
            ..Self::default()
        }
    }

    /// Attach the side panel the button toggles
    #[must_use]
    pub fn with_side_container(mut self, container_id: impl Into<String>) -> Self {
        self.side_container_id = Some(container_id.into());
        self
    }
}

/// View state of the toolbox
///
/// Owned by `ToolboxController`; other components only ever see it through a
/// shared reference or a cloned snapshot.
#[derive(Debug, Clone)]
pub struct ToolboxState {
    /// Toolbox is rendered on screen
    pub visible: bool,
    /// Visibility is pinned on and auto-hide is never armed
    pub always_visible: bool,
    /// Master switch; a disabled toolbox is never shown
    pub enabled: bool,
    /// Pointer is over the toolbox
    pub hovered: bool,
    /// Entry animation of the conference subject
    pub subject_slide_in: bool,
    /// Current auto-hide delay in milliseconds
    pub timeout_ms: u64,
    /// Pending auto-hide timeout
    pub timer: AutoHideTimer,
    /// Buttons on the primary toolbar
    pub primary_toolbar_buttons: ButtonMap,
    /// Buttons on the secondary toolbar
    pub secondary_toolbar_buttons: ButtonMap,
}

impl ToolboxState {
    /// Fresh state for a new session
    pub fn new(timeout_ms: u64, always_visible: bool) -> Self {
        Self {
            visible: always_visible,
            always_visible,
            enabled: true,
            hovered: false,
            subject_slide_in: false,
            timeout_ms,
            timer: AutoHideTimer::default(),
            primary_toolbar_buttons: ButtonMap::new(),
            secondary_toolbar_buttons: ButtonMap::new(),
        }
    }

    /// The pending auto-hide timeout, if any
    pub fn pending_timeout(&self) -> Option<&PendingTimeout> {
        self.timer.pending()
    }

    /// Look a button up on either toolbar
    pub fn button(&self, name: &str) -> Option<&ButtonState> {
        self.primary_toolbar_buttons
            .get(name)
            .or_else(|| self.secondary_toolbar_buttons.get(name))
    }

    /// Mutable lookup on either toolbar, primary first
    pub fn button_mut(&mut self, name: &str) -> Option<&mut ButtonState> {
        if self.primary_toolbar_buttons.contains_key(name) {
            self.primary_toolbar_buttons.get_mut(name)
        } else {
            self.secondary_toolbar_buttons.get_mut(name)
        }
    }

    /// Whether the named button exists and is rendered
    pub fn is_button_shown(&self, name: &str) -> bool {
        self.button(name).is_some_and(|button| !button.hidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_state() -> ToolboxState {
        let mut state = ToolboxState::new(4000, false);
        state
            .primary_toolbar_buttons
            .insert("microphone".to_string(), ButtonState::shown());
        state.secondary_toolbar_buttons.insert(
            "chat".to_string(),
            ButtonState::shown().with_side_container("chat_container"),
        );
        state
            .secondary_toolbar_buttons
            .insert("dialpad".to_string(), ButtonState::hidden());
        state
    }

    #[test]
    fn test_new_state_defaults() {
        let state = ToolboxState::new(20_000, false);
        assert!(!state.visible);
        assert!(state.enabled);
        assert!(!state.hovered);
        assert_eq!(state.timeout_ms, 20_000);
        assert!(state.pending_timeout().is_none());
    }

    #[test]
    fn test_always_visible_starts_visible() {
        let state = ToolboxState::new(4000, true);
        assert!(state.visible);
        assert!(state.always_visible);
    }

    #[test]
    fn test_button_lookup_spans_both_toolbars() {
        let mut state = sample_state();
        assert!(state.is_button_shown("microphone"));
        assert!(state.is_button_shown("chat"));
        assert!(!state.is_button_shown("dialpad"));
        assert!(!state.is_button_shown("missing"));

        state.button_mut("dialpad").unwrap().hidden = false;
        assert!(state.is_button_shown("dialpad"));
        assert!(state.button_mut("missing").is_none());
    }

    #[test]
    fn test_side_container_builder() {
        let state = sample_state();
        assert_eq!(
            state.button("chat").unwrap().side_container_id.as_deref(),
            Some("chat_container")
        );
        assert_eq!(state.button("microphone").unwrap().side_container_id, None);
    }
}
