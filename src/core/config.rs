//! Game configuration.
//!
//! Hosts configure a game at startup with a `GameConfig`:
//! - `dimension`: side length of the square board (even, > 0)
//! - `flip_delay_ms`: how long a mismatched or matched pair stays face up
//! - `seed`: optional fixed seed for a reproducible deal
//!
//! Configs can be built in code or loaded from TOML:
//!
//! ```
//! use concentration::core::GameConfig;
//!
//! let config = GameConfig::from_toml_str("dimension = 6\nseed = 11").unwrap();
//! assert_eq!(config.dimension, 6);
//! assert_eq!(config.flip_delay_ms, 600);
//! assert_eq!(config.seed, Some(11));
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::error::GameError;

/// Default board side length.
pub const DEFAULT_DIMENSION: u32 = 4;

/// Default face-up time for the second card of a turn.
pub const DEFAULT_FLIP_DELAY_MS: u64 = 600;

/// Configuration for a single game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board side length. The board holds `dimension²` cards.
    pub dimension: u32,

    /// Delay between the second flip of a turn and its evaluation.
    pub flip_delay_ms: u64,

    /// Deal seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
            flip_delay_ms: DEFAULT_FLIP_DELAY_MS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse a config from TOML. Missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, GameError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the board dimension.
    #[must_use]
    pub fn with_dimension(mut self, dimension: u32) -> Self {
        self.dimension = dimension;
        self
    }

    /// Set the flip delay in milliseconds.
    #[must_use]
    pub fn with_flip_delay_ms(mut self, ms: u64) -> Self {
        self.flip_delay_ms = ms;
        self
    }

    /// Fix the deal seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Flip delay as a `Duration`.
    #[must_use]
    pub fn flip_delay(&self) -> Duration {
        Duration::from_millis(self.flip_delay_ms)
    }

    /// Check the dimension is a positive even number whose square fits.
    pub fn validate(&self) -> Result<(), GameError> {
        card_count(self.dimension).map(|_| ())
    }
}

/// Number of cards on a board of side `dimension`.
///
/// Fails with `InvalidDimension` unless `dimension` is positive, even, and
/// `dimension²` fits in a `u32`.
pub fn card_count(dimension: u32) -> Result<u32, GameError> {
    if dimension == 0 || dimension % 2 != 0 {
        return Err(GameError::InvalidDimension(dimension));
    }
    dimension
        .checked_mul(dimension)
        .ok_or(GameError::InvalidDimension(dimension))
}
