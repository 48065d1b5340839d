//! Player identification and per-player scoring data.
//!
//! ## PlayerId
//!
//! Seat index in a two-player game: `PlayerId(0)` or `PlayerId(1)`.
//!
//! ## Player
//!
//! Name, score, flip counter, and turn-holder flag. Players are owned and
//! mutated by the turn coordinator; the board only ever sees `PlayerId`s.

use serde::{Deserialize, Serialize};

/// Number of seats at the table.
pub const PLAYER_COUNT: usize = 2;

/// Player identifier (seat index, 0-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    ///
    /// ```
    /// use concentration::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(0).opponent(), PlayerId::new(1));
    /// assert_eq!(PlayerId::new(1).opponent(), PlayerId::new(0));
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Both seats, in order.
    #[must_use]
    pub const fn both() -> [PlayerId; PLAYER_COUNT] {
        [PlayerId(0), PlayerId(1)]
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// A player's public standing.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Pairs matched.
    pub score: u32,
    /// Turns played (one per completed pair of flips).
    pub flips: u32,
    pub has_turn: bool,
}

impl Player {
    /// Create a player with zeroed counters and no turn.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            score: 0,
            flips: 0,
            has_turn: false,
        }
    }

    /// Zero the counters, keeping the name.
    pub fn reset(&mut self) {
        self.score = 0;
        self.flips = 0;
        self.has_turn = false;
    }
}
