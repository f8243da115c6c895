use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, warn};

use super::Settings;
use crate::domain::{Cell, EngineError, GridEngine, Palette};

/// Most generations a single frame may run to make up for a slow frame
pub const MAX_CATCH_UP_STEPS: u32 = 4;

/// GameState orchestrates the simulation.
/// This is the application layer that coordinates domain logic.
pub struct GameState {
    pub engine: GridEngine,
    pub palette: Palette,
    pub is_running: bool,
    pub show_ui: bool,
    pub quit_requested: bool,
    pub generation: u64,
    pub update_timer: f32,
    /// Seconds between generations
    pub update_interval: f32,
    pub live_probability: f64,
    pub parallel: bool,
    pub last_evolution_time_ms: f32,
    rng: StdRng,
}

impl GameState {
    /// Create a running game with an empty grid
    pub fn new(
        rows: usize,
        cols: usize,
        live_probability: f64,
        update_interval: f32,
    ) -> Result<Self, EngineError> {
        if !(0.0..=1.0).contains(&live_probability) {
            return Err(EngineError::InvalidProbability(live_probability));
        }
        Ok(Self {
            engine: GridEngine::new(rows, cols)?,
            palette: Palette::default(),
            is_running: true,
            show_ui: true,
            quit_requested: false,
            generation: 0,
            update_timer: 0.0,
            update_interval,
            live_probability,
            parallel: false,
            last_evolution_time_ms: 0.0,
            rng: StdRng::from_os_rng(),
        })
    }

    /// Build the game described by `settings` and seed the grid
    pub fn from_settings(settings: &Settings) -> Result<Self, EngineError> {
        let (rows, cols) = settings.grid_dimensions();
        let mut state = Self::new(rows, cols, settings.density, settings.frame_interval())?;
        state.parallel = settings.parallel;
        if let Some(seed) = settings.seed {
            state.rng = StdRng::seed_from_u64(seed);
        }
        state.engine.randomize_with(&mut state.rng, state.live_probability)?;
        Ok(state)
    }

    /// Use a fixed seed for every later reseed (builder pattern)
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Set running state (builder pattern)
    pub fn with_running(mut self, running: bool) -> Self {
        self.is_running = running;
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        debug!(running = self.is_running, "toggled pause");
        self
    }

    /// Show or hide the controls overlay
    pub fn toggle_ui(mut self) -> Self {
        self.show_ui = !self.show_ui;
        self
    }

    /// Ask the frame loop to exit after this frame
    pub fn request_quit(mut self) -> Self {
        debug!("quit requested");
        self.quit_requested = true;
        self
    }

    /// Clear grid and reset generation counter
    pub fn clear(mut self) -> Self {
        self.engine.reset();
        self.generation = 0;
        debug!("grid cleared");
        self
    }

    /// Reseed the grid and reset generation counter
    pub fn randomize(mut self) -> Self {
        match self.engine.randomize_with(&mut self.rng, self.live_probability) {
            Ok(()) => {
                self.generation = 0;
                debug!(population = self.engine.population(), "grid reseeded");
            }
            Err(err) => warn!(%err, "reseed rejected"),
        }
        self
    }

    /// Flip one cell in response to a click
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<Cell, EngineError> {
        let cell = self.engine.toggle(row, col)?;
        debug!(row, col, alive = cell.is_alive(), "cell toggled");
        Ok(cell)
    }

    /// Advance exactly one generation regardless of the timer
    pub fn advance(mut self) -> Self {
        let start = std::time::Instant::now();
        if self.parallel {
            self.engine.step_parallel();
        } else {
            self.engine.step();
        }
        self.last_evolution_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.generation += 1;
        self
    }

    /// Update simulation by one frame
    /// This is the main game loop coordination
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        let mut steps = 0;
        while self.update_timer >= self.update_interval && steps < MAX_CATCH_UP_STEPS {
            self = self.advance();
            self.update_timer -= self.update_interval;
            steps += 1;
        }

        // After a long stall, drop the backlog instead of fast-forwarding
        if self.update_timer >= self.update_interval {
            self.update_timer = 0.0;
        }

        self
    }
}
