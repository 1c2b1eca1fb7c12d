use thiserror::Error;

/// Errors surfaced by the plague engine.
///
/// The simulation itself is a closed numeric system; every error here comes
/// from malformed construction arguments or configuration.
#[derive(Debug, Error)]
pub enum PlagueError {
    #[error("grid must be at least 2x2 for toroidal wraparound, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("grid of {width}x{height} needs {expected} cells, got {actual}")]
    CellCountMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("{name} must be {expected}, got {value}")]
    InvalidSetting {
        name: &'static str,
        expected: &'static str,
        value: f64,
    },

    #[error("unknown setting `{0}`")]
    UnknownSetting(String),

    #[error("malformed config json: {0}")]
    ConfigJson(#[from] serde_json::Error),
}

pub type PlagueResult<T> = Result<T, PlagueError>;
