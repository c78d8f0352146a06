//! RTS-SELECT: drag-box unit selection for a scrolling 2D RTS
//!
//! Left-drag to select your units (blue), arrow keys / WASD or the screen
//! edges to scroll, Home to recentre. Selection runs on polled mouse state:
//! - press edge records the drag origin
//! - release edge picks every unit overlapping the box
//! - while held, the box outline is painted each frame

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod config;
mod game;
mod geometry;
mod input;
mod logging;
mod render;

use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::Parser;
use macroquad::prelude::{Color, Conf, KeyCode, LIGHTGRAY, clear_background, draw_text, is_key_pressed, next_frame};
use config::Settings;
use game::{GridLayout, Team, Unit, spawn_grid};
use geometry::Point;
use input::{MacroquadPointer, PointerInput};
use render::{Camera, CameraController, MacroquadOutline};

#[derive(Parser)]
#[command(name = "rts-select")]
#[command(about = "Drag-box unit selection demo")]
struct Cli {
    /// Settings file (RON). Defaults to the user config directory.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Log filter, e.g. "debug" or "rts_select=trace"
    #[arg(long)]
    log: Option<String>,
    /// Write the effective settings to the config path and exit
    #[arg(long)]
    write_config: bool,
}

fn main() -> Result<()> {
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let cli = Cli::parse();

    // An explicit --config must load; the default location may be missing or broken
    let (settings, fallback) = match &cli.config {
        Some(path) => {
            let settings = Settings::load(path)
                .with_context(|| format!("failed to load settings from {}", path.display()))?;
            (settings, None)
        }
        None => {
            let path = Settings::default_path();
            match Settings::load_or_default(&path) {
                Ok(settings) => (settings, None),
                Err(e) => (Settings::default(), Some((path, e))),
            }
        }
    };

    logging::init(cli.log.as_deref().unwrap_or(&settings.log_filter));
    if let Some((path, e)) = fallback {
        tracing::warn!(path = %path.display(), error = %e, "using default settings");
    }

    if cli.write_config {
        let path = cli.config.clone().unwrap_or_else(Settings::default_path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        std::fs::write(&path, settings.to_ron()?)
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), "wrote settings");
        return Ok(());
    }

    tracing::info!(version = VERSION, "starting");

    let conf = Conf {
        window_title: format!("RTS-SELECT v{}", VERSION),
        window_width: settings.window_width,
        window_height: settings.window_height,
        window_resizable: true,
        ..Default::default()
    };
    // Started by hand instead of #[macroquad::main] so the CLI and settings load before the window opens
    macroquad::Window::from_config(conf, run(settings));
    Ok(())
}

fn spawn_armies(settings: &Settings) -> Vec<Unit> {
    let layout = GridLayout {
        rows: settings.unit_rows,
        cols: settings.unit_cols,
        spacing: settings.unit_spacing,
        unit_size: settings.unit_size,
        jitter: settings.unit_jitter,
    };
    let mut rng = rand::thread_rng();

    let army_width = settings.unit_cols as f32 * settings.unit_spacing;
    let player_origin = Point::new(80.0, 120.0);
    let enemy_origin = player_origin.translate(Point::new(army_width + 240.0, 0.0));

    let mut units = spawn_grid(layout, player_origin, Team::Player, 0, &mut rng);
    let first_enemy = units.len() as u32;
    units.extend(spawn_grid(layout, enemy_origin, Team::Enemy, first_enemy, &mut rng));
    tracing::info!(units = units.len(), "spawned armies");
    units
}

async fn run(settings: Settings) {
    let units = spawn_armies(&settings);

    let mut camera = Camera::default();
    let controller = CameraController::new(settings.scroll_speed, settings.edge_margin);
    let pointer = MacroquadPointer::default();
    let mut input = PointerInput::new();
    let mut painter = MacroquadOutline::new(settings.outline_color);

    // Ids from the last completed drag; the input core keeps no selection of its own
    let mut selected: Vec<u32> = Vec::new();

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        controller.update(&mut camera);

        // Only the player's own units can be box-selected
        let candidates: Vec<&Unit> = units.iter().filter(|u| u.team == Team::Player).collect();

        let was_held = input.is_held();
        let picked = input.update_from(&pointer, &camera, &candidates);
        if was_held && !input.is_held() {
            selected = picked.iter().map(|u| u.id).collect();
        }

        clear_background(Color::from_rgba(24, 28, 24, 255));

        for unit in &units {
            unit.draw(&camera, selected.contains(&unit.id));
        }

        input.draw_selection(&mut painter);

        let t = camera.translation();
        let hud = format!("selected: {}  camera: ({:.0}, {:.0})", selected.len(), t.x, t.y);
        draw_text(&hud, 10.0, 20.0, 18.0, LIGHTGRAY);

        if input.is_held() {
            let origin = camera.screen_to_world(input.drag_origin());
            let drag = format!(
                "dragging from world ({:.0}, {:.0}) for {} frames",
                origin.x, origin.y, input.held_frames()
            );
            draw_text(&drag, 10.0, 40.0, 18.0, LIGHTGRAY);
        }

        next_frame().await;
    }

    tracing::info!("exiting");
}
