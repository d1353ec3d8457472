//! Toolbox controller implementation
//!
//! This module implements the controller that owns the toolbox view state and
//! decides, from configuration and collaborator queries, what is visible.

use crate::config::ToolboxConfig;
use crate::controller::event::{FeatureButton, ToolboxEvent};
use crate::toolbox::buttons::{
    DESKTOP_BUTTON, DIAL_OUT_BUTTON, DIAL_PAD_BUTTON, RECORDING_BUTTON, SHARED_VIDEO_BUTTON,
    compute_default_buttons, element_id,
};
use crate::toolbox::{Collaborators, TimeoutHandle, ToolboxState};
use parking_lot::Mutex;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Longest the event loop waits before re-checking the auto-hide deadline
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Toolbox visibility controller
///
/// All mutation of `ToolboxState` goes through this type. Guard failures
/// (disabled toolbox, button not permitted, unknown button) are silent no-ops.
pub struct ToolboxController {
    /// Static configuration
    config: ToolboxConfig,
    /// Policy, capability and view collaborators
    collaborators: Collaborators,
    /// Owned view state
    state: ToolboxState,
    /// Optional sink for state snapshots (taken by the renderer)
    state_sender: Option<mpsc::SyncSender<ToolboxState>>,
}

impl ToolboxController {
    /// Create a controller for a new session and populate the default buttons
    pub fn new(config: ToolboxConfig, collaborators: Collaborators) -> Self {
        let state = ToolboxState::new(
            config.initial_toolbar_timeout_ms,
            config.toolbar_always_visible,
        );

        let mut controller = Self {
            config,
            collaborators,
            state,
            state_sender: None,
        };
        controller.reset_default_buttons();

        info!(
            "Toolbox controller created ({} primary, {} secondary buttons)",
            controller.state.primary_toolbar_buttons.len(),
            controller.state.secondary_toolbar_buttons.len()
        );

        controller
    }

    /// Current view state
    pub fn state(&self) -> &ToolboxState {
        &self.state
    }

    /// Static configuration the controller was built with
    pub fn config(&self) -> &ToolboxConfig {
        &self.config
    }

    /// Publish a snapshot of the state after every event the loop applies
    pub fn set_state_sender(&mut self, sender: mpsc::SyncSender<ToolboxState>) {
        self.state_sender = Some(sender);
    }

    /// Show the toolbox and arm the auto-hide timer.
    /// A zero or absent override falls back to the current `timeout_ms`.
    pub fn show(&mut self, timeout_override_ms: Option<u64>) {
        if !self.state.enabled {
            debug!("Toolbox disabled, ignoring show");
            return;
        }
        if self.state.visible {
            return;
        }

        debug!("Showing toolbox");
        self.state.visible = true;
        self.state.subject_slide_in = true;

        if !self.state.always_visible {
            let delay_ms = timeout_override_ms
                .filter(|ms| *ms > 0)
                .unwrap_or(self.state.timeout_ms);
            self.arm_timeout(delay_ms);
            self.state.timeout_ms = self.config.toolbar_timeout_ms;
        }
    }

    /// Hide the toolbox.
    /// Unless forced, hovering, a modal overlay or an open side container
    /// postpone the hide by re-arming the timer.
    pub fn hide(&mut self, force: bool) {
        if self.state.always_visible {
            debug!("Toolbox always visible, ignoring hide");
            return;
        }

        self.clear_timeout();

        if !self.state.visible {
            return;
        }

        if !force && self.hide_blocked() {
            debug!("Toolbox in use, postponing hide");
            self.arm_timeout(self.state.timeout_ms);
            return;
        }

        debug!("Hiding toolbox");
        self.state.visible = false;
        self.state.subject_slide_in = false;
    }

    /// Dock (pin open) or undock the toolbox
    pub fn dock(&mut self, should_dock: bool) {
        if self.config.single_strip_layout {
            debug!("Single-strip layout, ignoring dock({})", should_dock);
            return;
        }

        if should_dock {
            if !self.state.visible {
                self.show(None);
            }
            self.clear_timeout();
        } else if self.state.visible {
            self.arm_timeout(self.state.timeout_ms);
        } else {
            self.show(None);
        }
    }

    /// Pointer entered or left the toolbox
    pub fn set_hovered(&mut self, hovered: bool) {
        self.state.hovered = hovered;
    }

    /// Master switch. Disabling hides the toolbox and drops the timer.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.state.enabled = enabled;

        if enabled {
            if self.state.always_visible {
                self.state.visible = true;
            }
        } else {
            self.clear_timeout();
            self.state.visible = false;
            self.state.subject_slide_in = false;
        }
    }

    /// Pin the toolbox visible. Pinning drops any pending auto-hide.
    pub fn set_always_visible(&mut self, always_visible: bool) {
        self.state.always_visible = always_visible;

        if always_visible {
            self.clear_timeout();
            if self.state.enabled {
                self.state.visible = true;
            }
        }
    }

    /// Replace the auto-hide delay used by the next arm
    pub fn set_timeout_ms(&mut self, timeout_ms: u64) {
        self.state.timeout_ms = timeout_ms;
    }

    /// Cancel the pending auto-hide, if any
    pub fn clear_timeout(&mut self) {
        if let Some(handle) = self.state.timer.clear() {
            debug!("Cleared auto-hide timeout #{}", handle.id());
        }
    }

    /// Show or hide a button the policy permits
    pub fn set_button_visibility(&mut self, name: &str, show: bool) {
        if !self.collaborators.buttons.is_button_enabled(name) {
            debug!("Button {} not enabled, ignoring visibility change", name);
            return;
        }
        self.set_button_hidden(name, !show);
    }

    /// Mark a button unclickable and drop its cached tooltip
    pub fn set_button_unclickable(&mut self, name: &str, unclickable: bool) {
        match self.state.button_mut(name) {
            Some(button) => button.unclickable = unclickable,
            None => debug!("No button named {}", name),
        }

        self.collaborators.view.remove_tooltip(&element_id(name));
    }

    /// Flip a button between hidden and shown
    pub fn toggle_button(&mut self, name: &str) {
        match self.state.button_mut(name) {
            Some(button) => button.hidden = !button.hidden,
            None => debug!("No button named {}", name),
        }
    }

    /// Toggle the first enabled secondary button opening `container_id`
    pub fn toggle_button_by_side_container(&mut self, container_id: &str) {
        let buttons = &self.collaborators.buttons;
        let target = self
            .state
            .secondary_toolbar_buttons
            .iter()
            .find(|(name, button)| {
                buttons.is_button_enabled(name)
                    && button.side_container_id.as_deref() == Some(container_id)
            })
            .map(|(name, _)| name.clone());

        match target {
            Some(name) => {
                debug!("Side container {} toggled by {}", container_id, name);
                self.toggle_button(&name);
            }
            None => debug!("No enabled button opens side container {}", container_id),
        }
    }

    /// Rebuild both button maps from configuration
    pub fn reset_default_buttons(&mut self) {
        let defaults = compute_default_buttons(
            &self.config,
            self.collaborators.buttons.as_ref(),
            self.collaborators.conference.as_ref(),
        );
        self.state.primary_toolbar_buttons = defaults.primary;
        self.state.secondary_toolbar_buttons = defaults.secondary;
    }

    /// Show the desktop sharing button if the conference can share and the
    /// policy permits it, otherwise hide it
    pub fn show_desktop_sharing_button(&mut self) {
        let visible = self.collaborators.conference.is_desktop_sharing_enabled()
            && self.collaborators.buttons.is_button_enabled(DESKTOP_BUTTON);
        self.set_button_hidden(DESKTOP_BUTTON, !visible);
    }

    /// Reveal the dial pad when asked to and permitted
    pub fn show_dial_pad_button(&mut self, show: bool) {
        if show && self.collaborators.buttons.is_button_enabled(DIAL_PAD_BUTTON) {
            self.set_button_hidden(DIAL_PAD_BUTTON, false);
        }
    }

    /// Reveal the recording button and set up its affordance
    pub fn show_recording_button(&mut self) {
        if !self.collaborators.buttons.is_button_enabled(RECORDING_BUTTON) {
            debug!("Recording button not enabled");
            return;
        }
        self.set_button_hidden(RECORDING_BUTTON, false);
        self.collaborators.view.init_recording_affordance();
    }

    /// Reveal the shared video button unless third-party requests are off
    pub fn show_shared_video_button(&mut self) {
        if self.collaborators.buttons.is_button_enabled(SHARED_VIDEO_BUTTON)
            && !self.config.disable_third_party_requests
        {
            self.set_button_hidden(SHARED_VIDEO_BUTTON, false);
        }
    }

    /// Reveal dial-out when a SIP gateway exists and the participant may use it.
    /// Guests are excluded only when roles come from the session token.
    pub fn show_dial_out_button(&mut self, show: bool) {
        let auth = &self.collaborators.auth;
        let allowed_role = !auth.user_roles_based_on_token_enabled() || !auth.is_guest_user();

        if show
            && self.collaborators.conference.sip_gateway_enabled()
            && self.collaborators.buttons.is_button_enabled(DIAL_OUT_BUTTON)
            && allowed_role
        {
            self.set_button_hidden(DIAL_OUT_BUTTON, false);
        }
    }

    /// Start desktop sharing when configured to do so automatically
    pub fn check_auto_enable_desktop_sharing(&self) {
        if self.collaborators.buttons.is_button_enabled(DESKTOP_BUTTON)
            && self.config.auto_enable_desktop_sharing
        {
            info!("Auto-enabling desktop sharing");
            self.collaborators.view.toggle_screen_sharing();
        }
    }

    /// Deliver an auto-hide expiry. Stale handles are ignored.
    pub fn fire_timeout(&mut self, handle: TimeoutHandle) -> bool {
        if !self.state.timer.take_if_current(handle) {
            debug!("Ignoring stale auto-hide timeout #{}", handle.id());
            return false;
        }

        debug!("Auto-hide timeout #{} fired", handle.id());
        self.hide(false);
        self.send_state_update();
        true
    }

    /// Fire the pending auto-hide if its deadline has passed
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(handle) = self.state.timer.take_expired(now) else {
            return false;
        };

        debug!("Auto-hide timeout #{} fired", handle.id());
        self.hide(false);
        self.send_state_update();
        true
    }

    /// Time left until the pending auto-hide fires
    pub fn time_until_timeout(&self, now: Instant) -> Option<Duration> {
        self.state.timer.time_until_deadline(now)
    }

    /// Apply one event and publish the resulting state
    pub fn handle_event(&mut self, event: ToolboxEvent) {
        debug!("Handling toolbox event: {:?}", event);

        match event {
            ToolboxEvent::Show { timeout_ms } => self.show(timeout_ms),
            ToolboxEvent::Hide { force } => self.hide(force),
            ToolboxEvent::Dock(should_dock) => self.dock(should_dock),
            ToolboxEvent::SetHovered(hovered) => self.set_hovered(hovered),
            ToolboxEvent::SetEnabled(enabled) => self.set_enabled(enabled),
            ToolboxEvent::SetAlwaysVisible(pinned) => self.set_always_visible(pinned),
            ToolboxEvent::SetButtonVisibility { name, show } => {
                self.set_button_visibility(&name, show);
            }
            ToolboxEvent::SetButtonUnclickable { name, unclickable } => {
                self.set_button_unclickable(&name, unclickable);
            }
            ToolboxEvent::ToggleSideContainer(container_id) => {
                self.toggle_button_by_side_container(&container_id);
            }
            ToolboxEvent::ShowFeature(feature) => match feature {
                FeatureButton::DesktopSharing => self.show_desktop_sharing_button(),
                FeatureButton::DialPad => self.show_dial_pad_button(true),
                FeatureButton::Recording => self.show_recording_button(),
                FeatureButton::SharedVideo => self.show_shared_video_button(),
                FeatureButton::DialOut => self.show_dial_out_button(true),
            },
            ToolboxEvent::ResetDefaultButtons => self.reset_default_buttons(),
            ToolboxEvent::CheckAutoEnableDesktopSharing => {
                self.check_auto_enable_desktop_sharing();
            }
        }

        self.send_state_update();
    }

    /// Spawn the event loop in a background thread. Only locks the controller
    /// while applying a single event or expiry. Exits when every sender is dropped.
    pub fn spawn_event_loop(
        controller: Arc<Mutex<ToolboxController>>,
        events: mpsc::Receiver<ToolboxEvent>,
    ) -> std::thread::JoinHandle<()> {
        std::thread::spawn(move || {
            use std::sync::mpsc::RecvTimeoutError;

            info!("Entering toolbox event loop");
            loop {
                let wait = controller
                    .lock()
                    .time_until_timeout(Instant::now())
                    .map_or(EVENT_POLL_INTERVAL, |left| left.min(EVENT_POLL_INTERVAL));

                match events.recv_timeout(wait) {
                    Ok(event) => {
                        controller.lock().handle_event(event);
                    }
                    Err(RecvTimeoutError::Timeout) => {
                        // Normal; fall through to the deadline check
                    }
                    Err(RecvTimeoutError::Disconnected) => {
                        info!("Toolbox event channel disconnected. Exiting event loop.");
                        break;
                    }
                }

                controller.lock().tick(Instant::now());
            }
            info!("Toolbox event loop exited");
        })
    }

    fn hide_blocked(&self) -> bool {
        self.state.hovered
            || self.collaborators.overlays.is_modal_overlay_visible()
            || self.collaborators.overlays.is_side_container_visible()
    }

    fn arm_timeout(&mut self, delay_ms: u64) {
        if self.state.always_visible {
            return;
        }

        let handle = self
            .state
            .timer
            .arm(Duration::from_millis(delay_ms), Instant::now());
        debug!("Armed auto-hide timeout #{} for {}ms", handle.id(), delay_ms);
    }

    fn set_button_hidden(&mut self, name: &str, hidden: bool) {
        match self.state.button_mut(name) {
            Some(button) => button.hidden = hidden,
            None => debug!("No button named {}", name),
        }
    }

    fn send_state_update(&self) {
        let Some(sender) = &self.state_sender else {
            return;
        };

        match sender.try_send(self.state.clone()) {
            Ok(()) => debug!("State update sent (visible = {})", self.state.visible),
            Err(mpsc::TrySendError::Full(_)) => {
                warn!("State update channel full, dropping snapshot");
            }
            Err(mpsc::TrySendError::Disconnected(_)) => {
                debug!("State update receiver gone");
            }
        }
    }
}
