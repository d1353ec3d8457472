//! Capability contracts the toolbox controller consults
//!
//! The controller never talks to the conference engine, the authorization
//! layer or the renderer directly. It asks these traits for booleans and
//! fires view side effects through `ViewEffects`.

use crate::config::ToolboxConfig;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::info;

/// Whether a button is permitted by configuration
pub trait ButtonPolicy: Send + Sync {
    /// True if the named button may appear in the toolbox
    fn is_button_enabled(&self, name: &str) -> bool;
}

/// Capabilities of the running conference
pub trait ConferenceCapabilities: Send + Sync {
    /// Desktop sharing is available in this conference
    fn is_desktop_sharing_enabled(&self) -> bool;
    /// A SIP gateway is present, so dial-out is possible
    fn sip_gateway_enabled(&self) -> bool;
}

/// Authorization state of the local participant
pub trait AuthorizationState: Send + Sync {
    /// The participant joined as a guest
    fn is_guest_user(&self) -> bool;
    /// Roles are derived from the session token
    fn user_roles_based_on_token_enabled(&self) -> bool;
}

/// Overlays and panels that keep the toolbox from hiding
pub trait OverlayQuery: Send + Sync {
    /// A modal overlay (e.g. the ringing overlay) is on screen
    fn is_modal_overlay_visible(&self) -> bool;
    /// A side container (chat, settings, ...) is open
    fn is_side_container_visible(&self) -> bool;
}

/// Fire-and-forget view side effects
pub trait ViewEffects: Send + Sync {
    /// Drop any cached tooltip attached to the element
    fn remove_tooltip(&self, element_id: &str);
    /// One-time setup of the recording affordance
    fn init_recording_affordance(&self);
    /// Ask the conference to toggle screen sharing
    fn toggle_screen_sharing(&self);
}

/// Everything the controller consults, bundled for construction
#[derive(Clone)]
pub struct Collaborators {
    /// Button permission check
    pub buttons: Arc<dyn ButtonPolicy>,
    /// Conference capability flags
    pub conference: Arc<dyn ConferenceCapabilities>,
    /// Local participant authorization
    pub auth: Arc<dyn AuthorizationState>,
    /// Overlay and side panel visibility
    pub overlays: Arc<dyn OverlayQuery>,
    /// View side effects
    pub view: Arc<dyn ViewEffects>,
}

impl Collaborators {
    /// Standalone collaborators: policy from the config, fixed capability flags,
    /// no overlays and logged view effects
    pub fn standalone(config: &ToolboxConfig, conference: StaticConference) -> Self {
        Self {
            buttons: Arc::new(ConfiguredButtonPolicy::from_config(config)),
            conference: Arc::new(conference),
            auth: Arc::new(StaticAuthorization::default()),
            overlays: Arc::new(NoOverlays),
            view: Arc::new(LoggingViewEffects),
        }
    }
}

/// Button policy backed by the configured toolbar button list
#[derive(Debug, Clone, Default)]
pub struct ConfiguredButtonPolicy {
    enabled: HashSet<String>,
}

impl ConfiguredButtonPolicy {
    /// Permit exactly the buttons listed in `config.toolbar_buttons`
    pub fn from_config(config: &ToolboxConfig) -> Self {
        Self::from_names(config.toolbar_buttons.iter().cloned())
    }

    /// Permit the given names
    pub fn from_names(names: impl IntoIterator<Item = String>) -> Self {
        Self {
            enabled: names.into_iter().collect(),
        }
    }
}

impl ButtonPolicy for ConfiguredButtonPolicy {
    fn is_button_enabled(&self, name: &str) -> bool {
        self.enabled.contains(name)
    }
}

/// Fixed conference capability flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticConference {
    /// Desktop sharing available
    pub desktop_sharing: bool,
    /// SIP gateway present
    pub sip_gateway: bool,
}

impl Default for StaticConference {
    fn default() -> Self {
        Self {
            desktop_sharing: true,
            sip_gateway: false,
        }
    }
}

impl ConferenceCapabilities for StaticConference {
    fn is_desktop_sharing_enabled(&self) -> bool {
        self.desktop_sharing
    }

    fn sip_gateway_enabled(&self) -> bool {
        self.sip_gateway
    }
}

/// Fixed authorization flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaticAuthorization {
    /// Participant is a guest
    pub guest: bool,
    /// Token-based roles are in force
    pub roles_from_token: bool,
}

impl AuthorizationState for StaticAuthorization {
    fn is_guest_user(&self) -> bool {
        self.guest
    }

    fn user_roles_based_on_token_enabled(&self) -> bool {
        self.roles_from_token
    }
}

/// No overlay or side container is ever open
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOverlays;

impl OverlayQuery for NoOverlays {
    fn is_modal_overlay_visible(&self) -> bool {
        false
    }

    fn is_side_container_visible(&self) -> bool {
        false
    }
}

/// View effects that only log what a renderer would do
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingViewEffects;

impl ViewEffects for LoggingViewEffects {
    fn remove_tooltip(&self, element_id: &str) {
        info!("Removing tooltip of {}", element_id);
    }

    fn init_recording_affordance(&self) {
        info!("Initializing recording affordance");
    }

    fn toggle_screen_sharing(&self) {
        info!("Requesting screen sharing toggle");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_policy_matches_config() {
        let config = ToolboxConfig::default();
        let policy = ConfiguredButtonPolicy::from_config(&config);

        assert!(policy.is_button_enabled("chat"));
        assert!(policy.is_button_enabled("dialpad"));
        assert!(!policy.is_button_enabled("teleport"));
    }

    #[test]
    fn test_empty_policy_disables_everything() {
        let policy = ConfiguredButtonPolicy::default();
        assert!(!policy.is_button_enabled("microphone"));
    }

    #[test]
    fn test_standalone_collaborators() {
        let config = ToolboxConfig::default();
        let collaborators = Collaborators::standalone(&config, StaticConference::default());

        assert!(collaborators.conference.is_desktop_sharing_enabled());
        assert!(!collaborators.conference.sip_gateway_enabled());
        assert!(!collaborators.auth.is_guest_user());
        assert!(!collaborators.overlays.is_modal_overlay_visible());
        assert!(!collaborators.overlays.is_side_container_visible());
        assert!(collaborators.buttons.is_button_enabled("recording"));
    }
}
