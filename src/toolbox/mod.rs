//! Toolbox model module
//!
//! This module holds the data the toolbox controller operates on.
//!
//! # Overview
//!
//! - **State**: `ToolboxState` with the visibility flags, the auto-hide delay
//!   and the two ordered button maps
//! - **Timer**: `AutoHideTimer`, a single slot whose handles go stale as soon
//!   as a newer timeout is armed or the slot is cleared
//! - **Buttons**: the static button catalogue and `compute_default_buttons`
//! - **Collaborators**: traits for button policy, conference capabilities,
//!   authorization, overlay queries and view side effects
//!
//! # Visibility Lifecycle
//!
//! ```text
//! hidden --show--> visible --timer fires--> hide(false)
//!                     ^                         |
//!                     |   hovered / overlay /   |
//!                     +---- side panel open <---+  (re-arm, stay visible)
//!                                               |
//!                                               v
//!                                            hidden
//! ```
//!
//! Docking pins the toolbox visible by clearing the timer. `always_visible`
//! rejects every hide request.

pub mod buttons;
pub mod collaborators;
pub mod state;
pub mod timer;

pub use buttons::{DefaultButtons, compute_default_buttons};
pub use collaborators::{
    AuthorizationState, ButtonPolicy, Collaborators, ConferenceCapabilities,
    ConfiguredButtonPolicy, LoggingViewEffects, NoOverlays, OverlayQuery, StaticAuthorization,
    StaticConference, ViewEffects,
};
pub use state::{ButtonMap, ButtonState, ToolboxState};
pub use timer::{AutoHideTimer, PendingTimeout, TimeoutHandle};
