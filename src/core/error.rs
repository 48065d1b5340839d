//! Error types.
//!
//! Both gameplay errors are contract violations by the caller, raised
//! synchronously and never retried. Selections that are merely pointless
//! (a matched card, a locked board) are silent no-ops, not errors.

use derive_more::{Display, Error};

use super::entity::CardId;

/// Errors raised by deck building, card selection, and configuration.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Board dimension is zero, odd, or too large to square.
    #[display("Invalid board dimension {}: must be a positive even number", _0)]
    InvalidDimension(#[error(not(source))] u32),

    /// Card id does not refer to a card on this board.
    #[display("{} does not belong to this board", _0)]
    InvalidCard(#[error(not(source))] CardId),

    /// Configuration could not be parsed.
    #[display("Config error: {}", _0)]
    Config(#[error(not(source))] String),
}

impl From<toml::de::Error> for GameError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}
