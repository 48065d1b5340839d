//! Deck building: pick identities, pair them, shuffle.
//!
//! ## Identity selection
//!
//! A board of side `D` needs `D²/2` identities. If the pool has enough, the
//! first `D²/2` are used in pool order. Otherwise the whole pool is used and
//! the shortfall is drawn from the pool *with replacement*, so some images
//! appear on more than one pair. That permissiveness is intentional: large
//! boards remain playable with a small image set.
//!
//! The extra draws live in a per-call scratch list; the pool itself is
//! immutable and never grows between deals.

use tracing::{debug, instrument};

use crate::cards::{Card, Identity, IdentityPool};
use crate::core::config::card_count;
use crate::core::entity::{BoardId, CardId};
use crate::core::error::GameError;
use crate::core::rng::GameRng;

/// Builds shuffled, paired decks from an identity pool.
#[derive(Clone, Debug, Default)]
pub struct DeckBuilder {
    pool: IdentityPool,
}

impl DeckBuilder {
    /// Create a builder dealing from `pool`.
    #[must_use]
    pub fn new(pool: IdentityPool) -> Self {
        Self { pool }
    }

    /// The pool this builder deals from.
    #[must_use]
    pub fn pool(&self) -> &IdentityPool {
        &self.pool
    }

    /// Choose the `D²/2` identities for a board of side `dimension`.
    ///
    /// # Errors
    ///
    /// `InvalidDimension` unless `dimension` is positive and even.
    pub fn identities(&self, dimension: u32, rng: &mut GameRng) -> Result<Vec<Identity>, GameError> {
        let needed = card_count(dimension)? as usize / 2;
        let base = self.pool.as_slice();

        let mut identities: Vec<Identity> = base.iter().take(needed).cloned().collect();
        while identities.len() < needed {
            // Pool is non-empty, so `choose` always yields.
            if let Some(extra) = rng.choose(base) {
                identities.push(extra.clone());
            }
        }

        if needed > base.len() {
            debug!(needed, pool = base.len(), "pool extended with repeated identities");
        }
        Ok(identities)
    }

    /// Two face-down cards per identity, in pair order (unshuffled).
    ///
    /// Card ids are assigned by position in the returned list.
    pub fn pairs(
        &self,
        dimension: u32,
        board: BoardId,
        rng: &mut GameRng,
    ) -> Result<Vec<Card>, GameError> {
        let identities = self.identities(dimension, rng)?;
        Ok(deal(board, identities.iter().flat_map(|id| [id.clone(), id.clone()])))
    }

    /// Build a shuffled deck for a board of side `dimension`.
    ///
    /// Returns `dimension²` cards. Card ids index the shuffled order, so
    /// `cards[i].id.index() == i`.
    ///
    /// # Errors
    ///
    /// `InvalidDimension` unless `dimension` is positive and even.
    #[instrument(skip(self, rng), fields(seed = rng.seed()))]
    pub fn build(
        &self,
        dimension: u32,
        board: BoardId,
        rng: &mut GameRng,
    ) -> Result<Vec<Card>, GameError> {
        let identities = self.identities(dimension, rng)?;

        let mut faces: Vec<Identity> = identities
            .iter()
            .flat_map(|id| [id.clone(), id.clone()])
            .collect();
        rng.shuffle(&mut faces);

        let cards = deal(board, faces);
        debug!(cards = cards.len(), %board, "deck built");
        Ok(cards)
    }
}

/// Lay identities out as face-down cards, numbering them in order.
fn deal(board: BoardId, faces: impl IntoIterator<Item = Identity>) -> Vec<Card> {
    faces
        .into_iter()
        .enumerate()
        .map(|(index, identity)| Card::new(CardId::new(board, index as u32), identity))
        .collect()
}
