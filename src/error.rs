use thiserror::Error;

/// Errors surfaced by the game core and its persistence helpers
#[derive(Error, Debug)]
pub enum GameError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid guess: {0}")]
    InvalidGuess(String),

    #[error("Cannot build {requested} pair(s) from an empty pool")]
    EmptyRound { requested: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
