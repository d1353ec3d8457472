//! Toolbox events
//!
//! Commands delivered to the controller event loop. Each event maps onto one
//! controller operation and can be parsed from a short text command, which
//! is what the simulator reads from stdin.

use crate::error::{Result, ToolboxError};
use std::str::FromStr;

/// Feature button with its own show/enable check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureButton {
    /// Desktop sharing
    DesktopSharing,
    /// Dial pad
    DialPad,
    /// Recording
    Recording,
    /// Shared video
    SharedVideo,
    /// SIP dial-out
    DialOut,
}

impl FromStr for FeatureButton {
    type Err = ToolboxError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "desktop" => Ok(Self::DesktopSharing),
            "dialpad" => Ok(Self::DialPad),
            "recording" => Ok(Self::Recording),
            "sharedvideo" => Ok(Self::SharedVideo),
            "dialout" => Ok(Self::DialOut),
            other => Err(ToolboxError::InvalidCommand(format!("unknown feature {other}"))),
        }
    }
}

/// Command applied by the controller event loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolboxEvent {
    /// Show the toolbox, optionally overriding the auto-hide delay
    Show {
        /// Auto-hide delay override in milliseconds
        timeout_ms: Option<u64>,
    },
    /// Hide the toolbox
    Hide {
        /// Ignore hover, overlays and side panels
        force: bool,
    },
    /// Dock (`true`) or undock (`false`) the toolbox
    Dock(bool),
    /// Pointer entered or left the toolbox
    SetHovered(bool),
    /// Master enable switch
    SetEnabled(bool),
    /// Pin the toolbox visible
    SetAlwaysVisible(bool),
    /// Show or hide a button, subject to the button policy
    SetButtonVisibility {
        /// Button name
        name: String,
        /// Show when true, hide when false
        show: bool,
    },
    /// Mark a button unclickable
    SetButtonUnclickable {
        /// Button name
        name: String,
        /// New unclickable flag
        unclickable: bool,
    },
    /// A side container was toggled
    ToggleSideContainer(String),
    /// Run a feature button check
    ShowFeature(FeatureButton),
    /// Rebuild the default button maps
    ResetDefaultButtons,
    /// Start desktop sharing if configured to
    CheckAutoEnableDesktopSharing,
}

fn parse_switch(command: &str, value: Option<&str>) -> Result<bool> {
    match value {
        Some("on" | "true" | "show") => Ok(true),
        Some("off" | "false" | "hide") => Ok(false),
        _ => Err(ToolboxError::InvalidCommand(command.to_string())),
    }
}

fn required<'a>(command: &str, value: Option<&'a str>) -> Result<&'a str> {
    value.ok_or_else(|| ToolboxError::InvalidCommand(command.to_string()))
}

impl FromStr for ToolboxEvent {
    type Err = ToolboxError;

    fn from_str(line: &str) -> Result<Self> {
        let command = line.trim();
        let mut words = command.split_whitespace();
        let verb = required(command, words.next())?;

        let event = match verb {
            "show" => {
                let timeout_ms = match words.next() {
                    Some(ms) => Some(
                        ms.parse::<u64>()
                            .map_err(|_| ToolboxError::InvalidCommand(command.to_string()))?,
                    ),
                    None => None,
                };
                Self::Show { timeout_ms }
            }
            "hide" => match words.next() {
                None => Self::Hide { force: false },
                Some("force") => Self::Hide { force: true },
                Some(_) => return Err(ToolboxError::InvalidCommand(command.to_string())),
            },
            "dock" => Self::Dock(true),
            "undock" => Self::Dock(false),
            "hover" => Self::SetHovered(parse_switch(command, words.next())?),
            "enable" => Self::SetEnabled(true),
            "disable" => Self::SetEnabled(false),
            "pin" => Self::SetAlwaysVisible(parse_switch(command, words.next())?),
            "button" => {
                let name = required(command, words.next())?.to_string();
                let show = parse_switch(command, words.next())?;
                Self::SetButtonVisibility { name, show }
            }
            "unclickable" => {
                let name = required(command, words.next())?.to_string();
                let unclickable = parse_switch(command, words.next())?;
                Self::SetButtonUnclickable { name, unclickable }
            }
            "side" => Self::ToggleSideContainer(required(command, words.next())?.to_string()),
            "feature" => Self::ShowFeature(required(command, words.next())?.parse()?),
            "defaults" => Self::ResetDefaultButtons,
            "autoshare" => Self::CheckAutoEnableDesktopSharing,
            _ => return Err(ToolboxError::InvalidCommand(command.to_string())),
        };

        if words.next().is_some() {
            return Err(ToolboxError::InvalidCommand(command.to_string()));
        }

        Ok(event)
    }
}
