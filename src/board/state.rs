//! Board state and the synchronous half of the flip/match state machine.
//!
//! ## Phases
//!
//! - `Idle`: no card pending
//! - `OneFlipped`: one card face up, waiting for the second pick
//! - `Evaluating`: second card face up, board locked until the turn resolves
//!
//! "All matched" is not a phase: it is a property of the cards, reported in
//! the `TurnOutcome` of the turn that matched the last pair.
//!
//! `Board` has no notion of time. `flip` moves `Idle → OneFlipped →
//! Evaluating`; `resolve` moves `Evaluating → Idle` and is called by the
//! controller once the flip delay has elapsed.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::entity::{BoardId, CardId};
use crate::core::error::GameError;
use crate::core::rng::GameRng;
use crate::deck::DeckBuilder;
use crate::events::TurnOutcome;

/// Where the board is in the current turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardPhase {
    Idle,
    OneFlipped,
    Evaluating,
}

/// Why a selection did nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// A turn is being evaluated.
    Locked,
    /// The card is the one already pending.
    AlreadyPending,
    /// The card's pair was already found.
    AlreadyMatched,
    /// The card is already face up.
    AlreadyFlipped,
}

/// Result of turning a card over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlipOutcome {
    /// Nothing changed.
    Ignored(IgnoreReason),
    /// First card of the turn; it is now pending.
    First(CardId),
    /// Second card of the turn; the board is locked until `resolve`.
    Second { pending: CardId, selected: CardId },
}

/// The live card set of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    id: BoardId,
    dimension: u32,
    cards: Vec<Card>,
    pending: Option<CardId>,
    locked: bool,
}

impl Board {
    /// Deal a fresh board of side `dimension`.
    ///
    /// # Errors
    ///
    /// `InvalidDimension` unless `dimension` is positive and even.
    pub fn deal(dimension: u32, builder: &DeckBuilder, rng: &mut GameRng) -> Result<Self, GameError> {
        let id = BoardId::next();
        let cards = builder.build(dimension, id, rng)?;
        Ok(Self {
            id,
            dimension,
            cards,
            pending: None,
            locked: false,
        })
    }

    #[must_use]
    pub fn id(&self) -> BoardId {
        self.id
    }

    #[must_use]
    pub fn dimension(&self) -> u32 {
        self.dimension
    }

    /// Cards in display order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The first card of the current turn, if one is face up.
    #[must_use]
    pub fn pending(&self) -> Option<CardId> {
        self.pending
    }

    /// Is a turn being evaluated?
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    #[must_use]
    pub fn phase(&self) -> BoardPhase {
        if self.locked {
            BoardPhase::Evaluating
        } else if self.pending.is_some() {
            BoardPhase::OneFlipped
        } else {
            BoardPhase::Idle
        }
    }

    /// Look up a card on this board.
    ///
    /// # Errors
    ///
    /// `InvalidCard` if `id` was dealt onto another board or is out of range.
    pub fn card(&self, id: CardId) -> Result<&Card, GameError> {
        self.slot(id).map(|index| &self.cards[index])
    }

    /// Card id at a display position, if the position is on the board.
    #[must_use]
    pub fn card_at(&self, index: usize) -> Option<CardId> {
        self.cards.get(index).map(|card| card.id)
    }

    /// Is every card matched?
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(|card| card.matched)
    }

    /// Pairs found so far.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.cards.iter().filter(|card| card.matched).count() / 2
    }

    /// Pairs still face down.
    #[must_use]
    pub fn remaining_pairs(&self) -> usize {
        self.cards.len() / 2 - self.matched_pairs()
    }

    /// Turn a card face up.
    ///
    /// Locked boards, matched cards, face-up cards, and the pending card
    /// itself are ignored. A second card locks the board; the caller must
    /// later call `resolve` with the returned ids.
    ///
    /// # Errors
    ///
    /// `InvalidCard` if `id` does not belong to this board.
    pub fn flip(&mut self, id: CardId) -> Result<FlipOutcome, GameError> {
        let index = self.slot(id)?;

        if self.locked {
            return Ok(FlipOutcome::Ignored(IgnoreReason::Locked));
        }
        if self.pending == Some(id) {
            return Ok(FlipOutcome::Ignored(IgnoreReason::AlreadyPending));
        }
        let card = &mut self.cards[index];
        if card.matched {
            return Ok(FlipOutcome::Ignored(IgnoreReason::AlreadyMatched));
        }
        if card.flipped {
            return Ok(FlipOutcome::Ignored(IgnoreReason::AlreadyFlipped));
        }

        card.flipped = true;
        match self.pending {
            None => {
                self.pending = Some(id);
                Ok(FlipOutcome::First(id))
            }
            Some(pending) => {
                self.locked = true;
                Ok(FlipOutcome::Second { pending, selected: id })
            }
        }
    }

    /// Finish a turn started by a `FlipOutcome::Second`.
    ///
    /// Both cards go face down and the lock is released; then, if their
    /// identities are equal, both are marked matched. Pending is cleared
    /// either way.
    ///
    /// # Errors
    ///
    /// `InvalidCard` if either id does not belong to this board.
    pub fn resolve(&mut self, pending: CardId, selected: CardId) -> Result<TurnOutcome, GameError> {
        let first = self.slot(pending)?;
        let second = self.slot(selected)?;

        self.cards[first].flipped = false;
        self.cards[second].flipped = false;
        self.locked = false;

        let matched = self.cards[first].pairs_with(&self.cards[second]);
        self.pending = None;

        if !matched {
            return Ok(TurnOutcome::missed());
        }

        self.cards[first].matched = true;
        self.cards[second].matched = true;
        Ok(TurnOutcome::matched(self.all_matched()))
    }

    fn slot(&self, id: CardId) -> Result<usize, GameError> {
        if id.belongs_to(self.id) && id.index() < self.cards.len() {
            Ok(id.index())
        } else {
            Err(GameError::InvalidCard(id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_board() -> Board {
        Board::deal(2, &DeckBuilder::default(), &mut GameRng::new(3)).unwrap()
    }

    /// Two ids with equal identities and one with a different identity.
    fn pair_and_other(board: &Board) -> (CardId, CardId, CardId) {
        let cards = board.cards();
        let first = &cards[0];
        let partner = cards.iter().find(|c| first.pairs_with(c)).unwrap();
        let other = cards.iter().find(|c| c.identity != first.identity).unwrap();
        (first.id, partner.id, other.id)
    }

    #[test]
    fn test_new_board_is_idle() {
        let board = small_board();
        assert_eq!(board.phase(), BoardPhase::Idle);
        assert_eq!(board.cards().len(), 4);
        assert_eq!(board.dimension(), 2);
        assert_eq!(board.remaining_pairs(), 2);
        assert!(!board.all_matched());
    }

    #[test]
    fn test_first_flip_sets_pending() {
        let mut board = small_board();
        let id = board.cards()[0].id;

        assert_eq!(board.flip(id), Ok(FlipOutcome::First(id)));
        assert_eq!(board.pending(), Some(id));
        assert_eq!(board.phase(), BoardPhase::OneFlipped);
        assert!(board.card(id).unwrap().flipped);
    }

    #[test]
    fn test_reselecting_pending_is_ignored() {
        let mut board = small_board();
        let id = board.cards()[0].id;
        board.flip(id).unwrap();

        assert_eq!(board.flip(id), Ok(FlipOutcome::Ignored(IgnoreReason::AlreadyPending)));
        assert_eq!(board.pending(), Some(id));
        assert!(!board.is_locked());
    }

    #[test]
    fn test_second_flip_locks() {
        let mut board = small_board();
        let (a, _, other) = pair_and_other(&board);
        board.flip(a).unwrap();

        assert_eq!(
            board.flip(other),
            Ok(FlipOutcome::Second { pending: a, selected: other })
        );
        assert_eq!(board.phase(), BoardPhase::Evaluating);
    }

    #[test]
    fn test_locked_board_ignores_flips() {
        let mut board = small_board();
        let (a, partner, other) = pair_and_other(&board);
        board.flip(a).unwrap();
        board.flip(other).unwrap();
        let before = board.clone();

        assert_eq!(board.flip(partner), Ok(FlipOutcome::Ignored(IgnoreReason::Locked)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_resolve_match() {
        let mut board = small_board();
        let (a, partner, _) = pair_and_other(&board);
        board.flip(a).unwrap();
        board.flip(partner).unwrap();

        let outcome = board.resolve(a, partner).unwrap();

        assert_eq!(outcome, TurnOutcome::matched(false));
        for id in [a, partner] {
            let card = board.card(id).unwrap();
            assert!(card.matched);
            assert!(!card.flipped);
        }
        assert_eq!(board.phase(), BoardPhase::Idle);
        assert_eq!(board.matched_pairs(), 1);
    }

    #[test]
    fn test_resolve_miss() {
        let mut board = small_board();
        let (a, _, other) = pair_and_other(&board);
        board.flip(a).unwrap();
        board.flip(other).unwrap();

        let outcome = board.resolve(a, other).unwrap();

        assert_eq!(outcome, TurnOutcome::missed());
        for id in [a, other] {
            let card = board.card(id).unwrap();
            assert!(!card.matched);
            assert!(!card.flipped);
        }
        assert_eq!(board.pending(), None);
        assert!(!board.is_locked());
    }

    #[test]
    fn test_matched_card_is_ignored() {
        let mut board = small_board();
        let (a, partner, _) = pair_and_other(&board);
        board.flip(a).unwrap();
        board.flip(partner).unwrap();
        board.resolve(a, partner).unwrap();

        assert_eq!(board.flip(a), Ok(FlipOutcome::Ignored(IgnoreReason::AlreadyMatched)));
        assert_eq!(board.phase(), BoardPhase::Idle);
    }

    #[test]
    fn test_foreign_card_is_invalid() {
        let mut board = small_board();
        let other_board = small_board();
        let foreign = other_board.cards()[0].id;

        assert_eq!(board.flip(foreign), Err(GameError::InvalidCard(foreign)));

        let out_of_range = CardId::new(board.id(), 4);
        assert_eq!(board.flip(out_of_range), Err(GameError::InvalidCard(out_of_range)));
    }

    #[test]
    fn test_card_at() {
        let board = small_board();
        assert_eq!(board.card_at(1), Some(board.cards()[1].id));
        assert_eq!(board.card_at(4), None);
    }
}
