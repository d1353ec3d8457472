//! Configuration data models
//!
//! This module defines the static configuration the toolbox controller is
//! constructed with. Every field has a default so partial JSON files load.

use serde::{Deserialize, Serialize};

/// Idle delay before the toolbox hides itself, in milliseconds
pub const DEFAULT_TOOLBAR_TIMEOUT_MS: u64 = 4000;

/// Delay used for the very first auto-hide after the session starts, in milliseconds
pub const DEFAULT_INITIAL_TOOLBAR_TIMEOUT_MS: u64 = 20_000;

/// Static toolbox configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolboxConfig {
    /// Start desktop sharing as soon as the conference allows it
    pub auto_enable_desktop_sharing: bool,
    /// Hide features that issue requests to third-party services (shared video)
    pub disable_third_party_requests: bool,
    /// Auto-hide delay applied after the first `show`, in milliseconds
    pub toolbar_timeout_ms: u64,
    /// Auto-hide delay used until the first `show`, in milliseconds
    pub initial_toolbar_timeout_ms: u64,
    /// Restricted layout rendering only the filmstrip; docking is ignored
    pub single_strip_layout: bool,
    /// Pin the toolbox visible for the whole session
    pub toolbar_always_visible: bool,
    /// Buttons permitted in the toolbox, in display order
    pub toolbar_buttons: Vec<String>,
    /// Subset of `toolbar_buttons` placed on the primary toolbar
    pub main_toolbar_buttons: Vec<String>,
}

impl ToolboxConfig {
    /// Whether `name` is listed in the permitted toolbar buttons
    pub fn lists_button(&self, name: &str) -> bool {
        self.toolbar_buttons.iter().any(|button| button == name)
    }

    /// Whether `name` belongs on the primary toolbar
    pub fn is_main_button(&self, name: &str) -> bool {
        self.main_toolbar_buttons.iter().any(|button| button == name)
    }
}

fn to_strings(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

impl Default for ToolboxConfig {
    fn default() -> Self {
        Self {
            auto_enable_desktop_sharing: false,
            disable_third_party_requests: false,
            toolbar_timeout_ms: DEFAULT_TOOLBAR_TIMEOUT_MS,
            initial_toolbar_timeout_ms: DEFAULT_INITIAL_TOOLBAR_TIMEOUT_MS,
            single_strip_layout: false,
            toolbar_always_visible: false,
            toolbar_buttons: to_strings(&[
                "microphone",
                "camera",
                "desktop",
                "invite",
                "fullscreen",
                "fodeviceselection",
                "hangup",
                "profile",
                "contacts",
                "info",
                "chat",
                "recording",
                "etherpad",
                "sharedvideo",
                "dialout",
                "settings",
                "raisehand",
                "videoquality",
                "filmstrip",
                "dialpad",
            ]),
            main_toolbar_buttons: to_strings(&[
                "microphone",
                "camera",
                "desktop",
                "invite",
                "fullscreen",
                "fodeviceselection",
                "hangup",
            ]),
        }
    }
}
