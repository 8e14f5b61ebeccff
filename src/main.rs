//! Scene overlay main entry point.
//!
//! Runs the noodle-house demo scene headless with the debug layout overlay
//! installed, replays a recorded editing session against it and optionally
//! prints the resulting layout.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --script session.json --dump
//! ```

use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use scene_overlay::game;
use scene_overlay::replay::{layout_snapshot, load_script, replay};
use scene_overlay::resources::debugsession::DebugSession;
use scene_overlay::resources::editorconfig::EditorConfig;

/// Scene layout debug overlay
#[derive(Parser)]
#[command(version, about = "Drag and resize scene objects in a debug overlay session")]
struct Cli {
    /// Overlay configuration file (INI).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Replay script: JSON array of host inputs.
    #[arg(long, value_name = "PATH")]
    script: Option<PathBuf>,

    /// Print the final layout of every tracked target as JSON.
    #[arg(long)]
    dump: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => EditorConfig::with_path(path),
        None => EditorConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        // Missing default file is fine, an explicit one is not
        if cli.config.is_some() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        log::info!("Using default overlay config ({e})");
    }

    let inputs = match &cli.script {
        Some(path) => match load_script(path) {
            Ok(inputs) => inputs,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
        None => Vec::new(),
    };

    let mut world = game::build_world(config);

    let mut startup = Schedule::default();
    startup.add_systems(game::setup);
    startup.run(&mut world);

    let mut update = game::build_update_schedule();
    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    replay(&mut world, &mut update, &inputs);

    let session = world.resource::<DebugSession>();
    log::info!(
        "Replayed {} inputs: debug {}, {} targets, {} handle sets",
        inputs.len(),
        if session.is_enabled() { "on" } else { "off" },
        session.tracked_count(),
        session.handle_set_count()
    );

    if cli.dump {
        let layout = layout_snapshot(&mut world);
        match serde_json::to_string_pretty(&layout) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing layout: {e}");
                std::process::exit(1);
            }
        }
    }
}
