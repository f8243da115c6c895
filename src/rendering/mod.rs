use macroquad::prelude::*;

use crate::application::GameState;
use crate::domain::{GridEngine, Palette, Rgb};
use crate::ui::{self, GRID_LINE_MIN_CELL, HELP_LINES};

pub const BACKGROUND_COLOR: Color = Color::new(20.0 / 255.0, 20.0 / 255.0, 20.0 / 255.0, 1.0);
pub const GRID_LINE_COLOR: Color = Color::new(50.0 / 255.0, 50.0 / 255.0, 50.0 / 255.0, 1.0);

/// Opaque macroquad color from a palette entry
pub fn to_color(rgb: Rgb) -> Color {
    Color::from_rgba(rgb.r, rgb.g, rgb.b, 255)
}

/// Draw every live cell as three nested rectangles colored by its age
pub fn draw_cells(engine: &GridEngine, palette: &Palette, cell_size: u32) {
    engine
        .iter_cells()
        .filter(|(_, _, cell, _)| cell.is_alive())
        .for_each(|(row, col, _, age)| {
            let glow = palette.glow_for_age(age as usize);
            let rects = ui::glow_rects(row, col, cell_size);
            for (rect, rgb) in rects.iter().zip([glow.outer, glow.middle, glow.core]) {
                draw_rectangle(rect.x, rect.y, rect.w, rect.h, to_color(rgb));
            }
        });
}

/// Draw cell boundaries across the whole grid area
pub fn draw_grid_lines(rows: usize, cols: usize, cell_size: u32) {
    if cell_size <= GRID_LINE_MIN_CELL {
        return;
    }

    let size = cell_size as f32;
    let width = screen_width();
    let height = screen_height();

    (0..=rows).for_each(|row| {
        let y = row as f32 * size;
        draw_line(0.0, y, width, y, 1.0, GRID_LINE_COLOR);
    });
    (0..=cols).for_each(|col| {
        let x = col as f32 * size;
        draw_line(x, 0.0, x, height, 1.0, GRID_LINE_COLOR);
    });
}

/// Draw the whole board: background, cells, then grid lines on top
pub fn draw_grid(state: &GameState, cell_size: u32) {
    clear_background(BACKGROUND_COLOR);
    draw_cells(&state.engine, &state.palette, cell_size);

    let (rows, cols) = state.engine.dimensions();
    draw_grid_lines(rows, cols, cell_size);
}

/// Draw the controls overlay and a short status block beneath it
pub fn draw_controls(state: &GameState) {
    HELP_LINES.iter().enumerate().for_each(|(i, text)| {
        draw_text(text, ui::TEXT_MARGIN, ui::help_line_y(i), ui::FONT_SIZE, WHITE);
    });

    let status = [
        format!("Generation: {}", state.generation),
        format!("Population: {}", state.engine.population()),
        format!("Evolve: {:.1}ms", state.last_evolution_time_ms),
        format!(
            "{} | FPS: {}",
            if state.is_running { "Running" } else { "Paused" },
            get_fps()
        ),
    ];

    let first = HELP_LINES.len() + 1;
    status.iter().enumerate().for_each(|(i, text)| {
        draw_text(text, ui::TEXT_MARGIN, ui::help_line_y(first + i), ui::FONT_SIZE, GRAY);
    });
}
