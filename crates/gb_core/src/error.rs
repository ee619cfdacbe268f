use thiserror::Error;

use crate::models::Role;

/// Errors surfaced by lineup operations.
///
/// Validation rejections (duplicate assignment, role mismatch) are ordinary
/// values: the board state is left unchanged and the caller decides how to
/// present them. Nothing here panics.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LineupError {
    #[error("player {player_id} is already assigned to {slot}")]
    AlreadyAssigned { player_id: String, slot: String },

    #[error("{slot} requires a {required}, but {player_id} is a {actual}")]
    RoleMismatch { slot: String, player_id: String, required: Role, actual: Role },

    #[error("unknown slot: {0}")]
    UnknownSlot(String),

    #[error("bench index {index} out of range (queues hold {capacity})")]
    BenchIndexOutOfRange { index: usize, capacity: usize },

    #[error("player {0} is not on the roster")]
    NotOnRoster(String),

    #[error("player {0} is not match-ready (injured or out of stamina)")]
    NotMatchReady(String),

    #[error("lineup incomplete: {filled} of {required} starters set")]
    IncompleteLineup { filled: usize, required: usize },

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for LineupError {
    fn from(err: serde_json::Error) -> Self {
        LineupError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LineupError>;
