use clap::Parser;
use thiserror::Error;

use crate::domain::DEFAULT_LIVE_PROBABILITY;

/// Command-line settings for the simulator window and grid.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(author, version, about = "Conway's Game of Life with age-colored cells", long_about = None)]
pub struct Settings {
    /// Window width in pixels
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Edge length of one cell in pixels
    #[arg(short, long, default_value_t = 12)]
    pub cell_size: u32,

    /// Generations per second while running
    #[arg(short, long, default_value_t = 30)]
    pub fps: u32,

    /// Chance of each cell starting alive when the grid is seeded
    #[arg(short, long, default_value_t = DEFAULT_LIVE_PROBABILITY)]
    pub density: f64,

    /// Seed for reproducible runs
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Compute each generation with rayon across rows
    #[arg(short, long, default_value_t = false)]
    pub parallel: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("cell size must be at least 1 pixel")]
    ZeroCellSize,

    #[error("fps must be at least 1")]
    ZeroFps,

    #[error("a {width}x{height} window cannot hold a single {cell_size}px cell")]
    WindowTooSmall {
        width: u32,
        height: u32,
        cell_size: u32,
    },

    #[error("a {width}x{height} window exceeds the largest supported size")]
    WindowTooLarge { width: u32, height: u32 },

    #[error("density {0} must be between 0.0 and 1.0")]
    InvalidDensity(f64),
}

impl Settings {
    /// Reject settings that cannot produce a playable grid
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if self.fps == 0 {
            return Err(ConfigError::ZeroFps);
        }
        if self.width < self.cell_size || self.height < self.cell_size {
            return Err(ConfigError::WindowTooSmall {
                width: self.width,
                height: self.height,
                cell_size: self.cell_size,
            });
        }
        if i32::try_from(self.width).is_err() || i32::try_from(self.height).is_err() {
            return Err(ConfigError::WindowTooLarge {
                width: self.width,
                height: self.height,
            });
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(ConfigError::InvalidDensity(self.density));
        }
        Ok(())
    }

    /// Grid size as (rows, cols); partial cells at the window edge are dropped
    pub fn grid_dimensions(&self) -> (usize, usize) {
        let cell = self.cell_size.max(1);
        ((self.height / cell) as usize, (self.width / cell) as usize)
    }

    /// Seconds between generations
    pub fn frame_interval(&self) -> f32 {
        1.0 / self.fps.max(1) as f32
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            cell_size: 12,
            fps: 30,
            density: DEFAULT_LIVE_PROBABILITY,
            seed: None,
            parallel: false,
            log_level: "info".to_owned(),
        }
    }
}
