// Domain layer - Core simulation logic
pub mod domain;

// Application layer - Settings and frame coordination
pub mod application;

// Infrastructure layer - UI layout, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, EngineError, GlowLayers, GridEngine, Palette, Rgb};
pub use application::{ConfigError, GameState, Settings};
