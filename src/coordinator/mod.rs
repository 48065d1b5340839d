//! Host-side turn coordination and score display data.
//!
//! The board only emits events; this module is where they become scores,
//! flip counts, and turn changes.

pub mod scoreboard;
pub mod turn;

pub use scoreboard::{ScoreLine, Scoreboard, NO_CURRENT_PLAYER};
pub use turn::{GameResult, TurnCoordinator};
