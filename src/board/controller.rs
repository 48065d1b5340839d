//! Board controller: card selection driven by the fixed flip delay.
//!
//! The controller owns a `Board` and an event channel. Selecting the second
//! card of a turn spawns an evaluation task that sleeps for the flip delay
//! and then resolves the turn. While that task is pending the board is
//! locked, so every other selection is a no-op.
//!
//! ```no_run
//! use concentration::board::{BoardController, Selection};
//! use concentration::core::{GameConfig, PlayerId};
//! use concentration::events::BoardEvent;
//!
//! # async fn play() -> Result<(), concentration::core::GameError> {
//! let config = GameConfig::default().with_dimension(2).with_seed(1);
//! let (mut controller, mut events) = BoardController::start(&config, PlayerId::both())?;
//!
//! let board = controller.snapshot();
//! controller.select_card(board.cards()[0].id)?;
//! controller.select_card(board.cards()[1].id)?;
//!
//! assert_eq!(events.recv().await, Some(BoardEvent::CardFlipped));
//! let played = events.recv().await; // arrives after the flip delay
//! # let _ = played;
//! # Ok(())
//! # }
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument, warn};

use super::state::{Board, FlipOutcome, IgnoreReason};
use crate::core::config::GameConfig;
use crate::core::entity::{BoardId, CardId};
use crate::core::error::GameError;
use crate::core::player::{PlayerId, PLAYER_COUNT};
use crate::core::rng::GameRng;
use crate::deck::DeckBuilder;
use crate::events::BoardEvent;

/// What a `select_card` call did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Selection {
    /// No-op; the board is unchanged and no event was emitted.
    Ignored(IgnoreReason),
    /// First card of a turn is now face up.
    Pending,
    /// Second card is face up; the turn resolves after the flip delay.
    Evaluating,
}

/// Handle to an in-flight turn evaluation.
#[derive(Debug)]
pub(crate) struct EvaluationHandle {
    task: JoinHandle<()>,
}

impl EvaluationHandle {
    pub(crate) fn cancel(&self) {
        self.task.abort();
    }

    pub(crate) fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    async fn join(self) {
        if let Err(err) = self.task.await {
            debug!(%err, "evaluation did not complete");
        }
    }
}

/// Drives one board through its turns.
///
/// Dropping the controller cancels any pending evaluation, so a discarded
/// board never emits a late `TurnPlayed`.
#[derive(Debug)]
pub struct BoardController {
    board_id: BoardId,
    board: Arc<Mutex<Board>>,
    players: [PlayerId; PLAYER_COUNT],
    flip_delay: Duration,
    events: UnboundedSender<BoardEvent>,
    evaluation: Option<EvaluationHandle>,
}

impl BoardController {
    /// Wrap a dealt board. Events are delivered on the returned receiver.
    #[must_use]
    pub fn new(
        board: Board,
        players: [PlayerId; PLAYER_COUNT],
        flip_delay: Duration,
    ) -> (Self, UnboundedReceiver<BoardEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();
        let controller = Self {
            board_id: board.id(),
            board: Arc::new(Mutex::new(board)),
            players,
            flip_delay,
            events,
            evaluation: None,
        };
        (controller, receiver)
    }

    /// Deal a board from `config` and wrap it.
    ///
    /// # Errors
    ///
    /// `InvalidDimension` if `config.dimension` is not a positive even number.
    pub fn start(
        config: &GameConfig,
        players: [PlayerId; PLAYER_COUNT],
    ) -> Result<(Self, UnboundedReceiver<BoardEvent>), GameError> {
        let mut rng = GameRng::from_seed_or_entropy(config.seed);
        let board = Board::deal(config.dimension, &DeckBuilder::default(), &mut rng)?;
        info!(board = %board.id(), dimension = config.dimension, seed = rng.seed(), "new board dealt");
        Ok(Self::new(board, players, config.flip_delay()))
    }

    #[must_use]
    pub fn board_id(&self) -> BoardId {
        self.board_id
    }

    /// The two seats this board is played by.
    #[must_use]
    pub fn players(&self) -> [PlayerId; PLAYER_COUNT] {
        self.players
    }

    #[must_use]
    pub fn flip_delay(&self) -> Duration {
        self.flip_delay
    }

    /// A copy of the board as it is right now.
    #[must_use]
    pub fn snapshot(&self) -> Board {
        lock(&self.board).clone()
    }

    /// Is a turn evaluation still waiting on its delay?
    #[must_use]
    pub fn is_evaluating(&self) -> bool {
        self.evaluation.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Select a card.
    ///
    /// The first card of a turn is flipped and `CardFlipped` is emitted. The
    /// second is flipped, the board locks, and `TurnPlayed` follows after
    /// the flip delay. Selecting while locked, re-selecting the pending
    /// card, or selecting a matched or face-up card does nothing.
    ///
    /// # Errors
    ///
    /// `InvalidCard` if `id` is not a card on this board.
    ///
    /// # Panics
    ///
    /// Must be called from within a Tokio runtime when it completes a turn.
    #[instrument(skip(self), fields(board = %self.board_id))]
    pub fn select_card(&mut self, id: CardId) -> Result<Selection, GameError> {
        let outcome = lock(&self.board).flip(id)?;

        match outcome {
            FlipOutcome::Ignored(reason) => {
                debug!(?reason, "selection ignored");
                Ok(Selection::Ignored(reason))
            }
            FlipOutcome::First(_) => {
                emit(&self.events, BoardEvent::CardFlipped);
                Ok(Selection::Pending)
            }
            FlipOutcome::Second { pending, selected } => {
                self.evaluation = Some(self.spawn_evaluation(pending, selected));
                Ok(Selection::Evaluating)
            }
        }
    }

    /// Wait until the in-flight evaluation, if any, has finished.
    pub async fn settled(&mut self) {
        if let Some(handle) = self.evaluation.take() {
            handle.join().await;
        }
    }

    fn spawn_evaluation(&self, pending: CardId, selected: CardId) -> EvaluationHandle {
        let board = Arc::clone(&self.board);
        let events = self.events.clone();
        let delay = self.flip_delay;

        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let resolved = lock(&board).resolve(pending, selected);
            match resolved {
                Ok(outcome) => {
                    info!(matched = outcome.matched, game_over = outcome.game_over, "turn played");
                    emit(&events, BoardEvent::TurnPlayed(outcome));
                }
                Err(err) => error!(%err, "turn evaluation failed"),
            }
        });

        EvaluationHandle { task }
    }
}

impl Drop for BoardController {
    fn drop(&mut self) {
        if let Some(handle) = self.evaluation.take() {
            if !handle.is_finished() {
                debug!(board = %self.board_id, "cancelling pending evaluation");
            }
            handle.cancel();
        }
    }
}

fn lock(board: &Mutex<Board>) -> MutexGuard<'_, Board> {
    board.lock().unwrap_or_else(PoisonError::into_inner)
}

fn emit(events: &UnboundedSender<BoardEvent>, event: BoardEvent) {
    if events.send(event).is_err() {
        warn!(?event, "event receiver dropped");
    }
}
