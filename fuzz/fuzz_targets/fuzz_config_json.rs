#![no_main]

use libfuzzer_sys::fuzz_target;
use toolbox::config::ToolboxConfig;
use toolbox::controller::ToolboxController;
use toolbox::toolbox::{Collaborators, StaticConference};

fuzz_target!(|data: &[u8]| {
    // Any config that parses must yield a controller with unique button names
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(config) = serde_json::from_str::<ToolboxConfig>(s) {
            let collaborators = Collaborators::standalone(&config, StaticConference::default());
            let controller = ToolboxController::new(config, collaborators);
            let state = controller.state();
            assert!(state
                .primary_toolbar_buttons
                .keys()
                .all(|name| !state.secondary_toolbar_buttons.contains_key(name)));
        }
    }
});
