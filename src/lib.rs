//! # concentration
//!
//! Engine for a two-player memory-matching ("concentration") card game.
//!
//! ## Design Principles
//!
//! 1. **Board logic is event-driven**: The board never mutates players. It
//!    emits `BoardEvent`s and a coordinator applies them.
//!
//! 2. **Cards are addressed by instance id**: `CardId` pairs a board with a
//!    display position; identity tokens only decide whether two cards match.
//!
//! 3. **Deals are reproducible**: Decks are built from an immutable identity
//!    pool and a seeded `GameRng`.
//!
//! ## Architecture
//!
//! - **Flip delay**: The second pick of a turn locks the board and spawns a
//!   Tokio task that resolves the turn after a fixed delay. Selections made
//!   while locked are no-ops.
//!
//! ## Modules
//!
//! - `core`: Ids, players, RNG, configuration, errors
//! - `cards`: Identities and card instances
//! - `deck`: Shuffled, paired deck building
//! - `board`: Board state machine and its async controller
//! - `events`: Events emitted by the board
//! - `coordinator`: Scores, turn rotation, scoreboard view model
//! - `session`: Host glue tying the above together

pub mod core;
pub mod cards;
pub mod deck;
pub mod board;
pub mod events;
pub mod coordinator;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    BoardId, CardId, GameConfig, GameError, GameRng, Player, PlayerId, PLAYER_COUNT,
};

pub use crate::cards::{Card, Identity, IdentityPool, BASE_ALPHABET};

pub use crate::deck::DeckBuilder;

pub use crate::board::{Board, BoardController, BoardPhase, FlipOutcome, IgnoreReason, Selection};

pub use crate::events::{BoardEvent, TurnOutcome};

pub use crate::coordinator::{GameResult, ScoreLine, Scoreboard, TurnCoordinator};

pub use crate::session::Session;
