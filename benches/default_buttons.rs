#![allow(clippy::unwrap_used)]
//! Benchmarks for default button computation and side container toggling

#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use toolbox::config::ToolboxConfig;
use toolbox::controller::ToolboxController;
use toolbox::toolbox::{
    Collaborators, ConfiguredButtonPolicy, StaticConference, compute_default_buttons,
};

fn create_large_config() -> ToolboxConfig {
    let mut config = ToolboxConfig::default();

    // Repeat the catalogue to exercise duplicate and unknown-name handling
    let base = config.toolbar_buttons.clone();
    for i in 0..20 {
        config.toolbar_buttons.extend(base.iter().cloned());
        config.toolbar_buttons.push(format!("custom{i}"));
    }

    config
}

fn bench_compute_default_buttons(c: &mut Criterion) {
    let config = create_large_config();
    let policy = ConfiguredButtonPolicy::from_config(&config);
    let conference = StaticConference::default();

    c.bench_function("compute_default_buttons", |b| {
        b.iter(|| {
            let buttons = compute_default_buttons(black_box(&config), &policy, &conference);
            black_box(buttons);
        });
    });
}

fn bench_toggle_side_container(c: &mut Criterion) {
    let config = ToolboxConfig::default();
    let collaborators = Collaborators::standalone(&config, StaticConference::default());
    let mut controller = ToolboxController::new(config, collaborators);

    c.bench_function("toggle_button_by_side_container", |b| {
        b.iter(|| {
            controller.toggle_button_by_side_container(black_box("settings_container"));
        });
    });
}

criterion_group!(
    benches,
    bench_compute_default_buttons,
    bench_toggle_side_container
);
criterion_main!(benches);
