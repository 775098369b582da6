use thiserror::Error;
use crate::utils::PlayerIndex;

/// Everything that can go wrong while building or playing a game
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    #[error("Malformed game tree: {0}")]
    MalformedTree(String),

    #[error("Type mismatch: {0}")]
    TypeMismatch(String),

    #[error("Illegal move by player {player}: {mv}")]
    IllegalMove { player: PlayerIndex, mv: String },

    #[error("Not a decision node")]
    NotADecisionNode,

    #[error("Unsupported game type: {0}")]
    UnsupportedGameType(String),

    #[error("Index {index} out of range for {what} (length {len})")]
    IndexOutOfRange { what: &'static str, index: usize, len: usize },

    #[error("Game expects {expected} players, got {found}")]
    PlayerCount { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, GameError>;

impl GameError {
    /// Shorthand for the offset errors raised by history and player lookups
    pub(crate) fn out_of_range(what: &'static str, index: usize, len: usize) -> Self {
        GameError::IndexOutOfRange { what, index, len }
    }
}
