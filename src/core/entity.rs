//! Board and card identification.
//!
//! Every board gets a fresh `BoardId` when it is built, and every card on it
//! is addressed by a `CardId` that pairs that board with the card's display
//! position.
//!
//! ## Why two parts
//!
//! A card's *identity token* (which pair it belongs to) is shared by two
//! cards, so it can't tell them apart. The `CardId` is the per-instance
//! identifier: two cards of the same pair always have different ids, and a
//! card id from a discarded board never resolves on a new one.
//!
//! ```
//! use concentration::core::{BoardId, CardId};
//!
//! let board = BoardId::next();
//! let other = BoardId::next();
//!
//! let card = CardId::new(board, 3);
//! assert!(card.belongs_to(board));
//! assert!(!card.belongs_to(other));
//! assert_eq!(card.index(), 3);
//! ```

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_BOARD_ID: AtomicU64 = AtomicU64::new(1);

/// Identifier for one board instance (one game).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardId(pub u64);

impl BoardId {
    /// Allocate a board id that no other board in this process has used.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_BOARD_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for BoardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Board({})", self.0)
    }
}

/// Unique identifier for a card instance on a board.
///
/// `index` is the card's position in the board's (shuffled) display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId {
    board: BoardId,
    index: u32,
}

impl CardId {
    /// Create a card ID for position `index` on `board`.
    #[must_use]
    pub const fn new(board: BoardId, index: u32) -> Self {
        Self { board, index }
    }

    /// The board this card was dealt onto.
    #[must_use]
    pub const fn board(self) -> BoardId {
        self.board
    }

    /// Display position on the board.
    #[must_use]
    pub const fn index(self) -> usize {
        self.index as usize
    }

    /// Check if this card was dealt onto `board`.
    #[must_use]
    pub fn belongs_to(self, board: BoardId) -> bool {
        self.board == board
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({}#{})", self.board.0, self.index)
    }
}
