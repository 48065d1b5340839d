//! Turn coordination: scores, flip counters, and turn rotation.
//!
//! The coordinator owns both players and reacts to `BoardEvent`s:
//!
//! - `TurnPlayed`: the acting player's `flips` always goes up; `score` goes
//!   up on a match. A miss passes the turn; a match keeps it, so the
//!   same player goes again.
//! - `TurnPlayed` with `game_over`: the result is fixed by score.
//! - `CardFlipped`: nothing.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::core::player::{Player, PlayerId, PLAYER_COUNT};
use crate::events::{BoardEvent, TurnOutcome};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Equal scores.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }
}

/// Owner of player state for a two-player game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnCoordinator {
    players: [Player; PLAYER_COUNT],
    result: Option<GameResult>,
}

impl TurnCoordinator {
    /// Seat two players. The first one starts.
    pub fn new(names: [impl Into<String>; PLAYER_COUNT]) -> Self {
        let [first, second] = names;
        let [a, b] = PlayerId::both();
        let mut players = [Player::new(a, first), Player::new(b, second)];
        players[0].has_turn = true;
        Self {
            players,
            result: None,
        }
    }

    /// Both players, in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player; PLAYER_COUNT] {
        &self.players
    }

    /// Seat ids, for handing to a board.
    #[must_use]
    pub fn player_ids(&self) -> [PlayerId; PLAYER_COUNT] {
        PlayerId::both()
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// The player holding the turn, if any.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.iter().find(|p| p.has_turn)
    }

    /// The final result, once the last pair is matched.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// React to a board event.
    pub fn apply(&mut self, event: &BoardEvent) {
        if let BoardEvent::TurnPlayed(outcome) = event {
            self.record_turn(*outcome);
        }
    }

    /// Zero every counter and give the first seat the turn.
    pub fn reset(&mut self) {
        for player in &mut self.players {
            player.reset();
        }
        self.players[0].has_turn = true;
        self.result = None;
    }

    #[instrument(skip(self))]
    fn record_turn(&mut self, outcome: TurnOutcome) {
        let Some(actor) = self.current_player().map(|p| p.id) else {
            return;
        };

        let player = &mut self.players[actor.index()];
        player.flips += 1;
        if outcome.matched {
            player.score += 1;
        } else {
            self.pass_turn(actor);
        }

        if outcome.game_over {
            let result = self.decide();
            info!(?result, "game over");
            self.result = Some(result);
        }
    }

    fn pass_turn(&mut self, from: PlayerId) {
        self.players[from.index()].has_turn = false;
        self.players[from.opponent().index()].has_turn = true;
    }

    fn decide(&self) -> GameResult {
        let [a, b] = &self.players;
        match a.score.cmp(&b.score) {
            std::cmp::Ordering::Greater => GameResult::Winner(a.id),
            std::cmp::Ordering::Less => GameResult::Winner(b.id),
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }
}
