//! Wetspot main entry point.
//!
//! A grid-walking sprite prototype written in Rust using:
//! - **raylib** for windowing, graphics, and keyboard input
//! - a small sorted-array component store ([`store`]) for entities
//!
//! # Project Structure
//!
//! - [`components`] – per-entity data (sprite, animation, actor, grid mover, input hook)
//! - [`game`] – demo scene setup
//! - [`resources`] – clock, config, input, sprite atlas, render target
//! - [`sequence`] – frame sequences and the static sequence catalog
//! - [`store`] – entity IDs, component tables, merge-join iteration
//! - [`systems`] – intent, movement, animation, render, and the tick pipeline
//!
//! # Main Loop
//!
//! 1. Load `config.ini`, open the window, create the render target and atlas
//! 2. Build the demo scene
//! 3. Each frame:
//!    - Poll the keyboard into [`InputState`]
//!    - Handle quit and the debug toggle
//!    - Run one tick into the render target and present it letterboxed
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod components;
mod game;
mod resources;
mod sequence;
mod store;
mod systems;

use std::path::PathBuf;

use clap::Parser;
use raylib::prelude::*;

use crate::resources::clock::GameClock;
use crate::resources::debugmode::DebugMode;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::rendertarget::RenderTarget;
use crate::resources::spriteatlas::SpriteAtlas;
use crate::store::World;
use crate::systems::input::update_input_state;
use crate::systems::movement::Playfield;
use crate::systems::pipeline::{run_tick, set_debug_outlines};
use crate::systems::render::{RaylibRenderer, draw_debug_overlay};

/// Wetspot
#[derive(Parser)]
#[command(version, about = "Grid-walking sprite prototype with a tiny component store.")]
struct Cli {
    /// Read settings from this INI file instead of ./config.ini.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Start with the debug overlay and sprite outlines enabled.
    #[arg(long)]
    debug: bool,

    /// Write the sequence catalog as JSON and exit.
    /// Prints to stdout unless a path is given.
    #[arg(long, value_name = "PATH")]
    dump_sequences: Option<Option<PathBuf>>,
}

fn dump_sequences(path: Option<PathBuf>) -> Result<(), String> {
    let json = serde_json::to_string_pretty(&sequence::table::catalog())
        .map_err(|e| format!("Failed to serialize sequence catalog: {}", e))?;
    match path {
        Some(path) => {
            std::fs::write(&path, json)
                .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
            log::info!("Sequence catalog written to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Early-exit: dump the catalog (no window needed)
    if let Some(maybe_path) = cli.dump_sequences {
        if let Err(e) = dump_sequences(maybe_path) {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        return;
    }

    log::info!("Wetspot {} starting", env!("CARGO_PKG_VERSION"));
    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        log::warn!("{}; using defaults", e);
    }
    if cli.debug {
        config.debug_outlines = true;
    }

    // --------------- Raylib window & assets ---------------
    let mut builder = raylib::init();
    builder
        .size(config.window_width as i32, config.window_height as i32)
        .resizable()
        .title("Wetspot");
    if config.vsync {
        builder.vsync();
    }
    if config.fullscreen {
        builder.fullscreen();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);
    // Escape is polled as a regular key so the quit reason can be logged
    rl.set_exit_key(None);

    let mut render_target =
        match RenderTarget::new(&mut rl, &thread, config.render_width, config.render_height) {
            Ok(target) => target,
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        };
    let atlas = match SpriteAtlas::load(&mut rl, &thread, &config.sprites_dir) {
        Ok(atlas) => atlas,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };
    log::info!("Sprite atlas ready with {} palette image(s)", atlas.loaded_palettes());

    // --------------- Scene ---------------
    let mut world = World::new();
    if let Err(e) = game::setup(&mut world, &config) {
        log::error!("Scene setup failed: {}", e);
        std::process::exit(1);
    }
    let mut debug = DebugMode::new(cli.debug);
    set_debug_outlines(&mut world, config.debug_outlines);

    let playfield = Playfield::covering(config.render_width, config.render_height);
    let mut clock = GameClock::new();
    let mut input = InputState::default();

    // --------------- Main loop ---------------
    let quit_reason = loop {
        if rl.window_should_close() {
            break "window closed";
        }
        update_input_state(&mut input, &rl);
        if input.quit.just_pressed {
            break "escape pressed";
        }
        if input.mode_debug.just_pressed {
            let enabled = debug.toggle();
            set_debug_outlines(&mut world, enabled);
        }

        let window_w = rl.get_screen_width();
        let window_h = rl.get_screen_height();
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        let tick = {
            let mut t = d.begin_texture_mode(&thread, &mut render_target.texture);
            t.clear_background(Color::BLACK);
            let mut renderer = RaylibRenderer::new(&mut t, &atlas);
            run_tick(&mut world, &mut clock, &input, &atlas, playfield, &mut renderer)
        };
        d.draw_texture_pro(
            &render_target.texture,
            render_target.source_rect(),
            render_target.letterbox(window_w, window_h),
            Vector2::zero(),
            0.0,
            Color::WHITE,
        );
        if debug.enabled {
            let fps = d.get_fps();
            draw_debug_overlay(&mut d, tick, &world, fps);
        }
    };
    log::info!("Quitting after {} ticks: {}", clock.tick(), quit_reason);
}
