//! Card instances - runtime card state.
//!
//! A `Card` is one physical card on a board: its instance id, the identity
//! it shares with its partner, and whether it is face up or already matched.

use serde::{Deserialize, Serialize};

use super::identity::Identity;
use crate::core::entity::CardId;

/// A card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique instance id (board + display position).
    pub id: CardId,

    /// Pair identity, shared with exactly one other card.
    pub identity: Identity,

    /// Is this card face up?
    pub flipped: bool,

    /// Has this card's pair been found?
    pub matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub fn new(id: CardId, identity: Identity) -> Self {
        Self {
            id,
            identity,
            flipped: false,
            matched: false,
        }
    }

    /// Face image path, derived from the identity.
    #[must_use]
    pub fn image_path(&self) -> String {
        self.identity.image_path()
    }

    /// Check if two cards form a pair.
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.id != other.id && self.identity == other.identity
    }

    /// Can this card still be turned over?
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        !self.flipped && !self.matched
    }
}
