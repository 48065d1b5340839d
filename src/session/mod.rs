//! A hosted game: coordinator, board controller, and the event stream
//! between them.
//!
//! `Session` is the glue a front end talks to. It forwards selections to the
//! board, feeds board events to the coordinator, and replaces the board when
//! a new game starts or the dimension changes.

use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{info, instrument};

use crate::board::{Board, BoardController, Selection};
use crate::coordinator::{GameResult, Scoreboard, TurnCoordinator};
use crate::core::config::GameConfig;
use crate::core::entity::CardId;
use crate::core::error::GameError;
use crate::core::player::PLAYER_COUNT;
use crate::events::BoardEvent;

/// One table: two players and the current board.
#[derive(Debug)]
pub struct Session {
    config: GameConfig,
    coordinator: TurnCoordinator,
    controller: BoardController,
    events: UnboundedReceiver<BoardEvent>,
}

impl Session {
    /// Seat two players and deal the first board.
    ///
    /// # Errors
    ///
    /// `InvalidDimension` if `config.dimension` is not a positive even number.
    pub fn start(config: GameConfig, names: [impl Into<String>; PLAYER_COUNT]) -> Result<Self, GameError> {
        let coordinator = TurnCoordinator::new(names);
        let (controller, events) = BoardController::start(&config, coordinator.player_ids())?;
        Ok(Self {
            config,
            coordinator,
            controller,
            events,
        })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn coordinator(&self) -> &TurnCoordinator {
        &self.coordinator
    }

    /// Current board state.
    #[must_use]
    pub fn board_snapshot(&self) -> Board {
        self.controller.snapshot()
    }

    #[must_use]
    pub fn scoreboard(&self) -> Scoreboard {
        Scoreboard::from(&self.coordinator)
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.coordinator.result()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.coordinator.is_over()
    }

    /// Select a card on the current board.
    ///
    /// # Errors
    ///
    /// `InvalidCard` if `id` is not on the current board.
    pub fn select(&mut self, id: CardId) -> Result<Selection, GameError> {
        self.controller.select_card(id)
    }

    /// Select the card at a display position.
    ///
    /// # Errors
    ///
    /// `InvalidCard` if `index` is off the board.
    pub fn select_at(&mut self, index: usize) -> Result<Selection, GameError> {
        let board = self.controller.board_id();
        let id = self
            .controller
            .snapshot()
            .card_at(index)
            .unwrap_or_else(|| CardId::new(board, u32::try_from(index).unwrap_or(u32::MAX)));
        self.select(id)
    }

    /// Wait for the next board event and apply it to the coordinator.
    ///
    /// Returns `None` once the board can emit nothing further.
    pub async fn next_event(&mut self) -> Option<BoardEvent> {
        let event = self.events.recv().await?;
        self.coordinator.apply(&event);
        Some(event)
    }

    /// Wait out any in-flight evaluation and apply every queued event.
    pub async fn settle(&mut self) -> Vec<BoardEvent> {
        self.controller.settled().await;

        let mut applied = Vec::new();
        while let Ok(event) = self.events.try_recv() {
            self.coordinator.apply(&event);
            applied.push(event);
        }
        applied
    }

    /// Discard the board and deal a new one, resetting scores.
    ///
    /// A pending evaluation on the old board is cancelled and its events are
    /// dropped.
    ///
    /// # Errors
    ///
    /// `InvalidDimension` if `dimension` is not a positive even number. The
    /// current game is left untouched in that case.
    #[instrument(skip(self))]
    pub fn new_game(&mut self, dimension: u32) -> Result<(), GameError> {
        let config = self.config.clone().with_dimension(dimension);
        let (controller, events) = BoardController::start(&config, self.coordinator.player_ids())?;

        self.controller = controller;
        self.events = events;
        self.config = config;
        self.coordinator.reset();
        info!(board = %self.controller.board_id(), "new game started");
        Ok(())
    }
}
