mod cell;
mod error;
mod grid;
mod palette;

pub use cell::{Cell, MAX_AGE};
pub use error::EngineError;
pub use grid::{GridEngine, DEFAULT_LIVE_PROBABILITY};
pub use palette::{GlowLayers, Palette, Rgb, PALETTE_SIZE};
