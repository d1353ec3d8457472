//! Toolbox controller module
//!
//! This module owns the toolbox view state and implements every operation that
//! changes it.
//!
//! # Overview
//!
//! The toolbox controller is the single writer of `ToolboxState`:
//! - **Shows and hides** the toolbox, arming the auto-hide timer on show
//! - **Defers hiding** while the pointer hovers the toolbox or an overlay or
//!   side panel is open, by re-arming the timer instead
//! - **Docks** the toolbox by clearing the timer
//! - **Toggles buttons** after asking the button policy and the conference,
//!   authorization and overlay collaborators
//!
//! # Architecture
//!
//! - `ToolboxController`: plain `&mut self` state holder
//! - `ToolboxEvent`: command enum applied by the event loop, parsable from text
//! - **Event loop**: `spawn_event_loop` runs on a background thread, locking the
//!   shared controller only while applying one event or one timer expiry
//!
//! # Event Flow
//!
//! ```text
//! input handlers → ToolboxEvent → event loop → ToolboxController
//!                                      ↓               ↓
//!                               deadline passed   ToolboxState → renderer
//!                                      ↓
//!                                 hide(false)
//! ```
//!
//! # Timer Semantics
//!
//! Only one auto-hide timeout exists at a time. Every arm or clear invalidates
//! the previous handle, so an expiry delivered for an old handle is dropped.

pub mod event;
pub mod toolbox_controller;

pub use event::{FeatureButton, ToolboxEvent};
pub use toolbox_controller::ToolboxController;
