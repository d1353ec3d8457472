#![no_main]

use libfuzzer_sys::fuzz_target;
use toolbox::config::ToolboxConfig;
use toolbox::controller::{ToolboxController, ToolboxEvent};
use toolbox::toolbox::{Collaborators, StaticConference};

fuzz_target!(|data: &[u8]| {
    // Parse arbitrary command lines and apply whatever parses
    if let Ok(s) = std::str::from_utf8(data) {
        let config = ToolboxConfig::default();
        let collaborators = Collaborators::standalone(&config, StaticConference::default());
        let mut controller = ToolboxController::new(config, collaborators);

        for line in s.lines() {
            if let Ok(event) = line.parse::<ToolboxEvent>() {
                controller.handle_event(event);
            }
            let state = controller.state();
            assert!(state.enabled || !state.visible);
            assert!(!state.always_visible || state.pending_timeout().is_none());
        }
    }
});
