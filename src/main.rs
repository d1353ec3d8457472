//! `toolbox-sim` - drive the toolbox controller from the command line
//!
//! Reads one command per line from stdin (`show`, `hide force`, `dock`,
//! `hover on`, `button dialpad show`, `side chat_container`, ...), feeds them
//! to the controller event loop and prints the toolbox state after each change,
//! including hides fired by the auto-hide timer.
//!
//! Usage: `toolbox-sim [config.json] [--sip] [--no-desktop-sharing]`

use anyhow::{Context, Result};
use parking_lot::Mutex;
use std::io::BufRead;
use std::path::PathBuf;
use std::sync::{Arc, mpsc};
use toolbox::{
    config::ConfigManager,
    controller::{ToolboxController, ToolboxEvent},
    error::get_user_friendly_error,
    toolbox::{Collaborators, StaticConference, ToolboxState},
    utils,
};
use tracing::{info, warn};

/// Capacity of the snapshot channel between controller and printer
const STATE_CHANNEL_CAPACITY: usize = 32;

/// Parsed command-line arguments
struct Args {
    config_path: Option<PathBuf>,
    conference: StaticConference,
}

fn parse_args() -> Args {
    let mut args = Args {
        config_path: None,
        conference: StaticConference::default(),
    };

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--sip" => args.conference.sip_gateway = true,
            "--no-desktop-sharing" => args.conference.desktop_sharing = false,
            path => args.config_path = Some(PathBuf::from(path)),
        }
    }

    args
}

fn describe(state: &ToolboxState) -> String {
    let shown: Vec<&str> = state
        .primary_toolbar_buttons
        .iter()
        .chain(state.secondary_toolbar_buttons.iter())
        .filter(|(_, button)| !button.hidden)
        .map(|(name, _)| name.as_str())
        .collect();

    format!(
        "visible={} hovered={} always_visible={} enabled={} timer={} buttons=[{}]",
        state.visible,
        state.hovered,
        state.always_visible,
        state.enabled,
        state
            .pending_timeout()
            .map_or_else(|| "none".to_string(), |t| format!("{}ms", t.delay.as_millis())),
        shown.join(", ")
    )
}

fn main() -> Result<()> {
    let args = parse_args();

    utils::init_logging(&ConfigManager::data_dir().join("logs"))
        .context("Failed to initialize logging system")?;

    let config = match &args.config_path {
        Some(path) => ConfigManager::load_from(path),
        None => ConfigManager::load(),
    }
    .context("Failed to load toolbox configuration")?;
    info!(
        "Configuration loaded with {} toolbar buttons",
        config.toolbar_buttons.len()
    );

    let collaborators = Collaborators::standalone(&config, args.conference);
    let mut controller = ToolboxController::new(config, collaborators);

    let (state_tx, state_rx) = mpsc::sync_channel(STATE_CHANNEL_CAPACITY);
    controller.set_state_sender(state_tx);
    println!("{}", describe(controller.state()));

    let controller = Arc::new(Mutex::new(controller));
    let (event_tx, event_rx) = mpsc::channel();
    let event_loop = ToolboxController::spawn_event_loop(controller.clone(), event_rx);

    let printer = std::thread::spawn(move || {
        for state in state_rx {
            println!("{}", describe(&state));
        }
    });

    {
        let guard = controller.lock();
        guard.check_auto_enable_desktop_sharing();
    }

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read command")?;
        if line.trim().is_empty() {
            continue;
        }
        if line.trim() == "quit" {
            break;
        }

        match line.parse::<ToolboxEvent>() {
            Ok(event) => {
                if event_tx.send(event).is_err() {
                    let error = toolbox::ToolboxError::EventLoopClosed;
                    eprintln!("{}", get_user_friendly_error(&error));
                    return Err(error.into());
                }
            }
            Err(e) => {
                warn!("Rejected command: {}", e);
                eprintln!("{}", get_user_friendly_error(&e));
            }
        }
    }

    drop(event_tx);
    if event_loop.join().is_err() {
        warn!("Toolbox event loop panicked");
    }

    // The controller holds the last state sender; dropping it ends the printer
    drop(controller);
    if printer.join().is_err() {
        warn!("State printer panicked");
    }

    info!("toolbox-sim shutting down");

    Ok(())
}
