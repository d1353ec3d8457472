//! `toolbox` - Visibility and button-state controller for a conferencing toolbox
//!
//! Shows and hides the on-screen control bar on an auto-hide timer, docks it,
//! and enables individual feature buttons from configuration and capability
//! queries. `ToolboxController` owns the state; conference, authorization,
//! overlay and rendering concerns are reached through the traits in
//! `toolbox::collaborators`.

// Module declarations
pub mod config;
pub mod controller;
pub mod error;
pub mod toolbox;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use controller::{ToolboxController, ToolboxEvent};
pub use error::{Result, ToolboxError};
