//! Drives the simulation the way the frame loop does, without opening a window.

use aged_life::{
    Cell, EngineError, GameState, GridEngine, Palette, Rgb, Settings,
    domain::PALETTE_SIZE,
    ui::{glow_rects, pixel_to_cell},
};

fn glider_state() -> GameState {
    let mut state = GameState::new(8, 8, 0.15, 1.0 / 30.0).unwrap();
    for (row, col) in [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)] {
        state.engine.set(row, col, true).unwrap();
    }
    state
}

fn alive(engine: &GridEngine) -> Vec<(usize, usize)> {
    engine
        .iter_cells()
        .filter(|(_, _, cell, _)| cell.is_alive())
        .map(|(row, col, _, _)| (row, col))
        .collect()
}

#[test]
fn glider_wraps_around_the_torus() {
    let start = alive(&glider_state().engine);

    // A glider moves one cell diagonally every 4 generations, so 32 brings it home on 8x8
    let state = (0..32).fold(glider_state(), |s, _| s.advance());
    assert_eq!(state.generation, 32);
    assert_eq!(alive(&state.engine), start);
}

#[test]
fn frame_loop_steps_once_per_interval() {
    // 60 frames of 0.02s is 1.2s, or 36 intervals of 1/30s
    let state = (0..60).fold(glider_state(), |s, _| s.tick(0.02));
    assert!((35..=36).contains(&state.generation), "got {}", state.generation);
}

#[test]
fn generation_rate_holds_when_frames_do_not_divide_interval() {
    // 3s of 66.7 Hz frames against 30 generations per second
    let state = (0..200).fold(glider_state(), |s, _| s.tick(0.015));
    assert!((89..=90).contains(&state.generation), "got {}", state.generation);
}

#[test]
fn click_toggles_cell_under_cursor() {
    let settings = Settings {
        width: 120,
        height: 80,
        cell_size: 10,
        density: 0.0,
        ..Settings::default()
    };
    let mut state = GameState::from_settings(&settings).unwrap();

    let (row, col) = pixel_to_cell(35.0, 12.0, settings.cell_size).unwrap();
    assert_eq!((row, col), (1, 3));
    assert_eq!(state.toggle_cell(row, col), Ok(Cell::Alive));
    assert!(state.engine.is_alive(1, 3).unwrap());

    let (row, col) = pixel_to_cell(35.0, 85.0, settings.cell_size).unwrap();
    assert!(matches!(
        state.toggle_cell(row, col),
        Err(EngineError::OutOfBounds { row: 8, col: 3, .. })
    ));
}

#[test]
fn surviving_cells_are_colored_by_age() {
    let palette = Palette::default();
    let mut engine = GridEngine::new(4, 4).unwrap();
    for (row, col) in [(1, 1), (1, 2), (2, 1), (2, 2)] {
        engine.set(row, col, true).unwrap();
    }
    for _ in 0..3 {
        engine.step();
    }

    let age = engine.age_of(1, 1).unwrap();
    assert_eq!(age, 3);
    let glow = palette.glow_for_age(age as usize);
    assert_eq!(glow.core, palette.color_for_age(3));
    assert_eq!(glow.outer, Rgb::new(glow.core.r / 3, glow.core.g / 3, glow.core.b / 3));
    assert_eq!(glow_rects(1, 1, 12)[2].w, 11.0);
}

#[test]
fn default_palette_covers_every_age() {
    let palette = Palette::default();
    assert_eq!(palette.len(), PALETTE_SIZE);
    assert_eq!(palette.color_for_age(255), palette.colors()[255]);
    assert_ne!(palette.color_for_age(0), palette.color_for_age(128));
}
