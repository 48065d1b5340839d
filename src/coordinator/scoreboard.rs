//! Scoreboard view model.
//!
//! What a presenter needs to draw the score panel: one line per player and a
//! label naming whoever holds the turn.

use serde::{Deserialize, Serialize};

use super::turn::TurnCoordinator;

/// Label shown when no player holds the turn.
pub const NO_CURRENT_PLAYER: &str = "No current player";

/// One player's row on the scoreboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLine {
    pub name: String,
    pub score: u32,
    pub flips: u32,
    pub has_turn: bool,
}

/// Snapshot of the score panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub lines: Vec<ScoreLine>,
    pub current_player_label: String,
}

impl From<&TurnCoordinator> for Scoreboard {
    fn from(coordinator: &TurnCoordinator) -> Self {
        let lines = coordinator
            .players()
            .iter()
            .map(|p| ScoreLine {
                name: p.name.clone(),
                score: p.score,
                flips: p.flips,
                has_turn: p.has_turn,
            })
            .collect();

        let current_player_label = coordinator
            .current_player()
            .map_or_else(|| NO_CURRENT_PLAYER.to_string(), |p| p.name.clone());

        Self {
            lines,
            current_player_label,
        }
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in &self.lines {
            let marker = if line.has_turn { '>' } else { ' ' };
            writeln!(f, "{marker} {}: {} ({} flips)", line.name, line.score, line.flips)?;
        }
        write!(f, "Turn: {}", self.current_player_label)
    }
}
