//! Screen layout: pixel/cell mapping, glow geometry and the help overlay text.

use macroquad::math::Rect;

/// Grid lines are only drawn when cells are larger than this
pub const GRID_LINE_MIN_CELL: u32 = 4;

pub const FONT_SIZE: f32 = 24.0;
pub const LINE_HEIGHT: f32 = 25.0;
pub const TEXT_MARGIN: f32 = 10.0;

/// Controls overlay, one line each
pub const HELP_LINES: &[&str] = &[
    "Controls:",
    "Space: Pause/Resume",
    "R: Random Grid",
    "C: Clear Grid",
    "Click: Toggle Cell",
    "H: Hide UI",
    "Esc: Quit",
];

/// Map a pixel position to (row, col). Positions left of or above the
/// window yield `None`; positions past the last full cell are passed
/// through so the engine can reject them.
pub fn pixel_to_cell(x: f32, y: f32, cell_size: u32) -> Option<(usize, usize)> {
    if x < 0.0 || y < 0.0 || cell_size == 0 {
        return None;
    }
    let row = (y as u32 / cell_size) as usize;
    let col = (x as u32 / cell_size) as usize;
    Some((row, col))
}

/// Rectangle of the cell body, one pixel short so neighbors stay separated
pub fn cell_rect(row: usize, col: usize, cell_size: u32) -> Rect {
    let size = cell_size as f32;
    Rect::new(col as f32 * size, row as f32 * size, size - 1.0, size - 1.0)
}

/// Grow `rect` by `dw`/`dh` in total, keeping it centered
pub fn inflate(rect: Rect, dw: f32, dh: f32) -> Rect {
    Rect::new(rect.x - dw / 2.0, rect.y - dh / 2.0, rect.w + dw, rect.h + dh)
}

/// Outer, middle and core rectangles for one live cell, in draw order
pub fn glow_rects(row: usize, col: usize, cell_size: u32) -> [Rect; 3] {
    let core = cell_rect(row, col, cell_size);
    [inflate(core, 4.0, 4.0), inflate(core, 2.0, 2.0), core]
}

/// Baseline y for the given help line
pub fn help_line_y(index: usize) -> f32 {
    TEXT_MARGIN + FONT_SIZE * 0.75 + index as f32 * LINE_HEIGHT
}
