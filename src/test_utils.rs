//! Shared test utilities for toolbox unit tests.
//!
//! This module provides common test infrastructure used across multiple test modules.
//! It is only compiled during testing (`#[cfg(test)]`).

use crate::config::ToolboxConfig;
use crate::toolbox::{
    AuthorizationState, ButtonPolicy, Collaborators, ConferenceCapabilities, OverlayQuery,
    ViewEffects,
};
use parking_lot::Mutex as PlMutex;
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::Mutex;
use tempfile::TempDir;

/// Global mutex to serialize tests that modify the `TOOLBOX_HOME` environment variable.
static HOME_LOCK: Mutex<()> = Mutex::new(());

/// Helper function to create a temporary test directory using tempfile.
/// Returns a `TempDir` that automatically cleans up when dropped.
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// RAII guard that points `TOOLBOX_HOME` at a temp directory for a test scope
/// and restores the original value when dropped.
///
/// `HOME_LOCK` is held for the guard's lifetime, so tests touching the
/// variable run one at a time even under the parallel test runner.
pub struct HomeGuard {
    original: Option<String>,
    _lock: std::sync::MutexGuard<'static, ()>,
}

#[expect(
    unsafe_code,
    reason = "Test-only code that modifies environment variables while holding HOME_LOCK."
)]
impl HomeGuard {
    /// Create a new guard that sets `TOOLBOX_HOME` to the given temp directory path.
    pub fn new(temp_dir: &TempDir) -> Self {
        let lock = HOME_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);

        let original = std::env::var(crate::config::manager::HOME_ENV_VAR).ok();
        // SAFETY: HOME_LOCK serializes every writer of this variable and the
        // guard restores it on drop.
        unsafe {
            std::env::set_var(crate::config::manager::HOME_ENV_VAR, temp_dir.path());
        }
        Self {
            original,
            _lock: lock,
        }
    }
}

#[expect(
    unsafe_code,
    reason = "Test-only code that restores environment variables while holding HOME_LOCK."
)]
impl Drop for HomeGuard {
    fn drop(&mut self) {
        // SAFETY: still holding HOME_LOCK; restores the value seen on creation.
        if let Some(ref original) = self.original {
            unsafe {
                std::env::set_var(crate::config::manager::HOME_ENV_VAR, original);
            }
        } else {
            unsafe {
                std::env::remove_var(crate::config::manager::HOME_ENV_VAR);
            }
        }
    }
}

/// View side effect recorded by `FakeEnvironment`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedEffect {
    /// `remove_tooltip` with the element id
    RemoveTooltip(String),
    /// `init_recording_affordance`
    InitRecording,
    /// `toggle_screen_sharing`
    ToggleScreenSharing,
}

/// Adjustable stand-in for every collaborator the controller consults
#[derive(Debug, Default)]
pub struct FakeEnvironment {
    /// Buttons the policy permits
    pub enabled_buttons: PlMutex<HashSet<String>>,
    /// Desktop sharing capability
    pub desktop_sharing: PlMutex<bool>,
    /// SIP gateway capability
    pub sip_gateway: PlMutex<bool>,
    /// Local participant is a guest
    pub guest: PlMutex<bool>,
    /// Token-based roles are enabled
    pub roles_from_token: PlMutex<bool>,
    /// Modal overlay visible
    pub modal_overlay: PlMutex<bool>,
    /// Side container open
    pub side_container: PlMutex<bool>,
    /// View effects fired so far
    pub effects: PlMutex<Vec<RecordedEffect>>,
}

impl FakeEnvironment {
    /// Environment permitting every button of the default configuration,
    /// with desktop sharing available and no SIP gateway
    pub fn permissive() -> Arc<Self> {
        let env = Self::default();
        env.enabled_buttons
            .lock()
            .extend(ToolboxConfig::default().toolbar_buttons);
        *env.desktop_sharing.lock() = true;
        Arc::new(env)
    }

    /// Bundle this environment as controller collaborators
    pub fn collaborators(self: &Arc<Self>) -> Collaborators {
        Collaborators {
            buttons: self.clone(),
            conference: self.clone(),
            auth: self.clone(),
            overlays: self.clone(),
            view: self.clone(),
        }
    }

    /// Forbid a button in the policy
    pub fn disable_button(&self, name: &str) {
        self.enabled_buttons.lock().remove(name);
    }

    /// Snapshot of the recorded effects
    pub fn recorded(&self) -> Vec<RecordedEffect> {
        self.effects.lock().clone()
    }
}

impl ButtonPolicy for FakeEnvironment {
    fn is_button_enabled(&self, name: &str) -> bool {
        self.enabled_buttons.lock().contains(name)
    }
}

impl ConferenceCapabilities for FakeEnvironment {
    fn is_desktop_sharing_enabled(&self) -> bool {
        *self.desktop_sharing.lock()
    }

    fn sip_gateway_enabled(&self) -> bool {
        *self.sip_gateway.lock()
    }
}

impl AuthorizationState for FakeEnvironment {
    fn is_guest_user(&self) -> bool {
        *self.guest.lock()
    }

    fn user_roles_based_on_token_enabled(&self) -> bool {
        *self.roles_from_token.lock()
    }
}

impl OverlayQuery for FakeEnvironment {
    fn is_modal_overlay_visible(&self) -> bool {
        *self.modal_overlay.lock()
    }

    fn is_side_container_visible(&self) -> bool {
        *self.side_container.lock()
    }
}

impl ViewEffects for FakeEnvironment {
    fn remove_tooltip(&self, element_id: &str) {
        self.effects
            .lock()
            .push(RecordedEffect::RemoveTooltip(element_id.to_string()));
    }

    fn init_recording_affordance(&self) {
        self.effects.lock().push(RecordedEffect::InitRecording);
    }

    fn toggle_screen_sharing(&self) {
        self.effects.lock().push(RecordedEffect::ToggleScreenSharing);
    }
}

#[test]
fn test_fake_environment_defaults() {
    let env = FakeEnvironment::permissive();
    assert!(env.is_button_enabled("dialpad"));
    env.disable_button("dialpad");
    assert!(!env.is_button_enabled("dialpad"));
    assert!(env.is_desktop_sharing_enabled());
    assert!(env.recorded().is_empty());
    let collaborators = env.collaborators();
    collaborators.view.init_recording_affordance();
    assert_eq!(env.recorded(), vec![RecordedEffect::InitRecording]);
}
