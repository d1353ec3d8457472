//! Default toolbar buttons
//!
//! The catalogue lists every button the toolbox knows how to render together
//! with its initial state. Feature buttons (dial pad, recording, shared video,
//! dial-out, etherpad) start hidden and are revealed by their feature checks.

use crate::config::ToolboxConfig;
use crate::toolbox::collaborators::{ButtonPolicy, ConferenceCapabilities};
use crate::toolbox::state::{ButtonMap, ButtonState};
use tracing::{debug, warn};

/// Name of the desktop sharing button
pub const DESKTOP_BUTTON: &str = "desktop";
/// Name of the dial pad button
pub const DIAL_PAD_BUTTON: &str = "dialpad";
/// Name of the recording button
pub const RECORDING_BUTTON: &str = "recording";
/// Name of the shared video button
pub const SHARED_VIDEO_BUTTON: &str = "sharedvideo";
/// Name of the dial-out button
pub const DIAL_OUT_BUTTON: &str = "dialout";

/// Catalogue entry: name, side container, starts hidden
const CATALOGUE: &[(&str, Option<&str>, bool)] = &[
    ("camera", None, false),
    ("chat", Some("chat_container"), false),
    ("contacts", Some("contacts_list_container"), false),
    (DESKTOP_BUTTON, None, false),
    (DIAL_OUT_BUTTON, None, true),
    (DIAL_PAD_BUTTON, None, true),
    ("etherpad", None, true),
    ("filmstrip", None, false),
    ("fodeviceselection", None, false),
    ("fullscreen", None, false),
    ("hangup", None, false),
    ("info", None, false),
    ("invite", None, false),
    ("microphone", None, false),
    ("profile", Some("profile_container"), false),
    ("raisehand", None, false),
    (RECORDING_BUTTON, None, true),
    ("settings", Some("settings_container"), false),
    (SHARED_VIDEO_BUTTON, None, true),
    ("videoquality", None, false),
];

/// Initial state of a catalogued button, `None` for unknown names
pub fn catalogue_button(name: &str) -> Option<ButtonState> {
    CATALOGUE
        .iter()
        .find(|(entry, _, _)| *entry == name)
        .map(|(_, side_container, hidden)| ButtonState {
            hidden: *hidden,
            unclickable: false,
            side_container_id: side_container.map(str::to_string),
        })
}

/// DOM-style element id of a toolbar button
pub fn element_id(name: &str) -> String {
    format!("toolbar_button_{name}")
}

/// Default button layout for both toolbars
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultButtons {
    /// Primary toolbar buttons in configured order
    pub primary: ButtonMap,
    /// Secondary toolbar buttons in configured order
    pub secondary: ButtonMap,
}

/// Compute the default button maps from static configuration
///
/// Walks `config.toolbar_buttons` in order, keeps catalogued names the policy
/// permits and places each on the primary toolbar when it is a main button,
/// otherwise on the secondary one. A name listed twice keeps its first slot.
/// The desktop button starts hidden when the conference cannot share.
pub fn compute_default_buttons(
    config: &ToolboxConfig,
    policy: &dyn ButtonPolicy,
    conference: &dyn ConferenceCapabilities,
) -> DefaultButtons {
    let mut buttons = DefaultButtons::default();

    for name in &config.toolbar_buttons {
        let Some(mut button) = catalogue_button(name) else {
            warn!("Ignoring unknown toolbar button: {}", name);
            continue;
        };

        if !policy.is_button_enabled(name) {
            debug!("Button {} disabled by policy", name);
            continue;
        }

        if buttons.primary.contains_key(name) || buttons.secondary.contains_key(name) {
            debug!("Button {} listed more than once, keeping first slot", name);
            continue;
        }

        if name == DESKTOP_BUTTON {
            button.hidden = !conference.is_desktop_sharing_enabled();
        }

        if config.is_main_button(name) {
            buttons.primary.insert(name.clone(), button);
        } else {
            buttons.secondary.insert(name.clone(), button);
        }
    }

    debug!(
        "Default buttons computed: {} primary, {} secondary",
        buttons.primary.len(),
        buttons.secondary.len()
    );

    buttons
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toolbox::collaborators::{ConfiguredButtonPolicy, StaticConference};

    fn defaults_for(config: &ToolboxConfig, conference: StaticConference) -> DefaultButtons {
        let policy = ConfiguredButtonPolicy::from_config(config);
        compute_default_buttons(config, &policy, &conference)
    }

    #[test]
    fn test_default_layout() {
        let config = ToolboxConfig::default();
        let buttons = defaults_for(&config, StaticConference::default());

        let primary: Vec<&str> = buttons.primary.keys().map(String::as_str).collect();
        assert_eq!(
            primary,
            [
                "microphone",
                "camera",
                "desktop",
                "invite",
                "fullscreen",
                "fodeviceselection",
                "hangup"
            ]
        );
        assert_eq!(buttons.secondary.get_index(0).unwrap().0, "profile");
        assert!(buttons.secondary.contains_key("chat"));
        assert!(!buttons.primary.contains_key("chat"));
    }

    #[test]
    fn test_feature_buttons_start_hidden() {
        let buttons = defaults_for(&ToolboxConfig::default(), StaticConference::default());

        for name in [DIAL_PAD_BUTTON, RECORDING_BUTTON, SHARED_VIDEO_BUTTON, DIAL_OUT_BUTTON] {
            assert!(buttons.secondary[name].hidden, "{name} should start hidden");
        }
        assert!(!buttons.secondary["chat"].hidden);
    }

    #[test]
    fn test_desktop_hidden_without_sharing_capability() {
        let conference = StaticConference {
            desktop_sharing: false,
            sip_gateway: false,
        };
        let buttons = defaults_for(&ToolboxConfig::default(), conference);
        assert!(buttons.primary[DESKTOP_BUTTON].hidden);

        let buttons = defaults_for(&ToolboxConfig::default(), StaticConference::default());
        assert!(!buttons.primary[DESKTOP_BUTTON].hidden);
    }

    #[test]
    fn test_unknown_duplicate_and_disallowed_names_skipped() {
        let config = ToolboxConfig {
            toolbar_buttons: vec![
                "chat".to_string(),
                "teleport".to_string(),
                "chat".to_string(),
                "hangup".to_string(),
                "settings".to_string(),
            ],
            main_toolbar_buttons: vec!["hangup".to_string()],
            ..ToolboxConfig::default()
        };
        let policy = ConfiguredButtonPolicy::from_names(["chat".to_string(), "hangup".to_string()]);
        let buttons = compute_default_buttons(&config, &policy, &StaticConference::default());

        assert_eq!(buttons.primary.len(), 1);
        assert_eq!(buttons.secondary.len(), 1);
        assert!(buttons.secondary.contains_key("chat"));
        assert!(!buttons.secondary.contains_key("settings"));
    }

    #[test]
    fn test_side_containers_come_from_catalogue() {
        let buttons = defaults_for(&ToolboxConfig::default(), StaticConference::default());
        assert_eq!(
            buttons.secondary["settings"].side_container_id.as_deref(),
            Some("settings_container")
        );
        assert_eq!(element_id("profile"), "toolbar_button_profile");
        assert!(catalogue_button("teleport").is_none());
    }
}
