use crate::item::ItemId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Every rejection the engine can produce. All of them are recoverable by the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Item not found: {0}")]
    NotFound(ItemId),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid vote: item {0} cannot be both winner and loser")]
    InvalidVote(ItemId),

    #[error("Insufficient items for a matchup: need at least 2, have {available}")]
    InsufficientItems { available: usize },
}

impl Error {
    /// Short machine-readable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            Error::NotFound(_) => "not_found",
            Error::InvalidInput(_) => "invalid_input",
            Error::InvalidVote(_) => "invalid_vote",
            Error::InsufficientItems { .. } => "insufficient_items",
        }
    }
}
