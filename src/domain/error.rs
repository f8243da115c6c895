use thiserror::Error;

/// Errors reported by the simulation core.
/// None of these are fatal; the caller decides whether to log or abort.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EngineError {
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("grid dimensions must be at least 1x1, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },

    #[error("a {rows}x{cols} grid does not fit in memory")]
    GridTooLarge { rows: usize, cols: usize },

    #[error("live probability {0} must be between 0.0 and 1.0")]
    InvalidProbability(f64),

    #[error("palette must contain at least one color")]
    EmptyPalette,
}
