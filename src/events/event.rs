//! Board events.
//!
//! The board never touches player state. Instead it emits events, and the
//! host's turn coordinator turns them into score and turn changes.
//!
//! - `CardFlipped`: first card of a turn turned over (no payload)
//! - `TurnPlayed`: a turn finished evaluating

use serde::{Deserialize, Serialize};

/// Outcome of a completed turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// Did the two cards form a pair?
    pub matched: bool,

    /// Is every card on the board now matched?
    pub game_over: bool,
}

impl TurnOutcome {
    /// A successful pair. `game_over` when it was the last one.
    #[must_use]
    pub const fn matched(game_over: bool) -> Self {
        Self {
            matched: true,
            game_over,
        }
    }

    /// A failed attempt. A miss never ends the game.
    #[must_use]
    pub const fn missed() -> Self {
        Self {
            matched: false,
            game_over: false,
        }
    }
}

/// An event emitted by the board controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BoardEvent {
    /// First card of a turn was turned over.
    CardFlipped,

    /// A turn was evaluated.
    TurnPlayed(TurnOutcome),
}

impl BoardEvent {
    /// The turn outcome, if this event completes a turn.
    #[must_use]
    pub fn outcome(&self) -> Option<TurnOutcome> {
        match self {
            BoardEvent::TurnPlayed(outcome) => Some(*outcome),
            BoardEvent::CardFlipped => None,
        }
    }

    /// Does this event end the game?
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.outcome().is_some_and(|o| o.game_over)
    }
}
