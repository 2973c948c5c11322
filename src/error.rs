use thiserror::Error;

/// Errors that can occur while playing or searching a game.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("Illegal move: {0} is not a legal move in this state")]
    IllegalMove(String),

    #[error("No legal moves")]
    NoLegalMoves,

    #[error("Cannot search a terminal state")]
    TerminalState,

    #[error("Invalid board dimensions: h={h}, v={v}, k={k} (all must be at least 1)")]
    InvalidDimensions { h: usize, v: usize, k: usize },

    #[error("Input closed before a move was entered")]
    InputClosed,

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience Result type for game operations.
pub type Result<T> = std::result::Result<T, GameError>;
