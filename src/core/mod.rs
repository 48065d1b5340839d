//! Core types: ids, players, RNG, configuration, errors.
//!
//! Everything else in the crate builds on these.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use entity::{BoardId, CardId};
pub use player::{Player, PlayerId, PLAYER_COUNT};
pub use rng::GameRng;
pub use config::{card_count, GameConfig, DEFAULT_DIMENSION, DEFAULT_FLIP_DELAY_MS};
pub use error::GameError;
