mod config;
mod game_state;

pub use config::{ConfigError, Settings};
pub use game_state::GameState;
