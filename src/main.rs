use std::sync::OnceLock;

use anyhow::{Context, Result};
use clap::Parser;
use macroquad::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use aged_life::{GameState, Settings, input, rendering};

static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Parsed once, shared by `window_conf` and `main`
fn settings() -> &'static Settings {
    SETTINGS.get_or_init(Settings::parse)
}

fn window_conf() -> Conf {
    let settings = settings();
    Conf {
        window_title: "Conway's Game of Life - Enhanced Edition".to_owned(),
        // Oversized values are rejected by `Settings::validate` in `run`
        window_width: i32::try_from(settings.width).unwrap_or(i32::MAX),
        window_height: i32::try_from(settings.height).unwrap_or(i32::MAX),
        window_resizable: false,
        ..Default::default()
    }
}

fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run(settings: &Settings) -> Result<()> {
    settings.validate().context("invalid settings")?;

    let mut state = GameState::from_settings(settings).context("failed to create simulation")?;
    let (rows, cols) = state.engine.dimensions();
    info!(
        width = settings.width,
        height = settings.height,
        rows,
        cols,
        fps = settings.fps,
        seed = ?settings.seed,
        parallel = settings.parallel,
        "simulation started"
    );

    while !state.quit_requested {
        input::handle_mouse_toggle(&mut state, settings.cell_size, mouse_position());
        state = input::process_keyboard_input(state);

        state = state.tick(get_frame_time());

        rendering::draw_grid(&state, settings.cell_size);
        if state.show_ui {
            rendering::draw_controls(&state);
        }

        next_frame().await;
    }

    info!(generation = state.generation, "simulation stopped");
    Ok(())
}

#[macroquad::main(window_conf)]
async fn main() {
    let settings = settings();
    init_logging(settings);

    if let Err(err) = run(settings).await {
        error!("{err:#}");
        std::process::exit(1);
    }
}
