//! Board controller tests.
//!
//! These tests drive the flip/match state machine through the controller
//! with Tokio's paused clock, so the flip delay elapses instantly:
//! - Match and miss paths after the delay
//! - No-ops: re-selecting the pending card, locked board, matched cards
//! - Game over reported exactly on the last pair
//! - Foreign cards rejected

use std::time::Duration;

use concentration::board::{Board, BoardController, BoardPhase, IgnoreReason, Selection};
use concentration::core::{CardId, GameConfig, GameError, GameRng, PlayerId};
use concentration::deck::DeckBuilder;
use concentration::events::{BoardEvent, TurnOutcome};
use tokio::sync::mpsc::error::TryRecvError;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::Instant;

const DELAY: Duration = Duration::from_millis(600);

fn controller(dimension: u32, seed: u64) -> (BoardController, UnboundedReceiver<BoardEvent>) {
    let config = GameConfig::default().with_dimension(dimension).with_seed(seed);
    BoardController::start(&config, PlayerId::both()).unwrap()
}

/// Card ids grouped into pairs by identity.
fn pairs(board: &Board) -> Vec<(CardId, CardId)> {
    let mut pairs = Vec::new();
    let mut seen = vec![false; board.cards().len()];
    for (i, card) in board.cards().iter().enumerate() {
        if seen[i] {
            continue;
        }
        let j = board
            .cards()
            .iter()
            .enumerate()
            .position(|(j, other)| !seen[j] && j != i && card.pairs_with(other))
            .unwrap();
        seen[i] = true;
        seen[j] = true;
        pairs.push((card.id, board.cards()[j].id));
    }
    pairs
}

/// Two cards whose identities differ.
fn mismatch(board: &Board) -> (CardId, CardId) {
    let first = &board.cards()[0];
    let other = board
        .cards()
        .iter()
        .find(|c| c.identity != first.identity)
        .unwrap();
    (first.id, other.id)
}

/// A matching pair is marked matched after the delay.
#[tokio::test(start_paused = true)]
async fn test_match_path() {
    let (mut controller, mut events) = controller(4, 1);
    let (a, b) = pairs(&controller.snapshot())[0];
    let started = Instant::now();

    assert_eq!(controller.select_card(a), Ok(Selection::Pending));
    assert_eq!(controller.select_card(b), Ok(Selection::Evaluating));

    assert_eq!(events.recv().await, Some(BoardEvent::CardFlipped));
    assert_eq!(
        events.recv().await,
        Some(BoardEvent::TurnPlayed(TurnOutcome { matched: true, game_over: false }))
    );
    assert!(started.elapsed() >= DELAY);

    let board = controller.snapshot();
    for id in [a, b] {
        let card = board.card(id).unwrap();
        assert!(card.matched);
        assert!(!card.flipped);
    }
    assert_eq!(board.pending(), None);
    assert_eq!(board.phase(), BoardPhase::Idle);
}

/// A mismatched pair goes back face down after the delay.
#[tokio::test(start_paused = true)]
async fn test_miss_path() {
    let (mut controller, mut events) = controller(4, 2);
    let (a, b) = mismatch(&controller.snapshot());

    controller.select_card(a).unwrap();
    controller.select_card(b).unwrap();

    assert_eq!(events.recv().await, Some(BoardEvent::CardFlipped));
    assert_eq!(
        events.recv().await,
        Some(BoardEvent::TurnPlayed(TurnOutcome { matched: false, game_over: false }))
    );

    let board = controller.snapshot();
    for id in [a, b] {
        let card = board.card(id).unwrap();
        assert!(!card.matched);
        assert!(!card.flipped);
    }
    assert_eq!(board.pending(), None);
    assert!(!board.is_locked());
}

/// Both cards stay face up until the delay has fully elapsed.
#[tokio::test(start_paused = true)]
async fn test_cards_stay_up_during_delay() {
    let (mut controller, mut events) = controller(4, 3);
    let (a, b) = mismatch(&controller.snapshot());

    controller.select_card(a).unwrap();
    controller.select_card(b).unwrap();
    assert_eq!(events.recv().await, Some(BoardEvent::CardFlipped));

    tokio::time::advance(DELAY - Duration::from_millis(1)).await;

    let board = controller.snapshot();
    assert!(board.card(a).unwrap().flipped);
    assert!(board.card(b).unwrap().flipped);
    assert_eq!(board.phase(), BoardPhase::Evaluating);
    assert_eq!(events.try_recv(), Err(TryRecvError::Empty));

    controller.settled().await;
    assert_eq!(controller.snapshot().phase(), BoardPhase::Idle);
}

/// Re-selecting the pending card changes nothing and emits nothing.
#[tokio::test(start_paused = true)]
async fn test_reselect_pending_is_noop() {
    let (mut controller, mut events) = controller(4, 4);
    let id = controller.snapshot().cards()[0].id;

    controller.select_card(id).unwrap();
    let before = controller.snapshot();

    assert_eq!(
        controller.select_card(id),
        Ok(Selection::Ignored(IgnoreReason::AlreadyPending))
    );
    assert_eq!(controller.snapshot(), before);

    assert_eq!(events.recv().await, Some(BoardEvent::CardFlipped));
    assert_eq!(events.try_recv(), Err(TryRecvError::Empty));
}

/// Every selection during evaluation is a no-op.
#[tokio::test(start_paused = true)]
async fn test_locked_board_ignores_selections() {
    let (mut controller, mut events) = controller(4, 5);
    let board = controller.snapshot();
    let (a, b) = mismatch(&board);

    controller.select_card(a).unwrap();
    controller.select_card(b).unwrap();
    let locked = controller.snapshot();

    for card in board.cards() {
        assert_eq!(
            controller.select_card(card.id),
            Ok(Selection::Ignored(IgnoreReason::Locked))
        );
    }
    assert_eq!(controller.snapshot(), locked);

    controller.settled().await;
    let emitted: Vec<_> = std::iter::from_fn(|| events.try_recv().ok()).collect();
    assert_eq!(
        emitted,
        vec![
            BoardEvent::CardFlipped,
            BoardEvent::TurnPlayed(TurnOutcome::missed()),
        ]
    );
}

/// Matched cards can't be selected again.
#[tokio::test(start_paused = true)]
async fn test_matched_cards_ignored() {
    let (mut controller, _events) = controller(4, 6);
    let (a, b) = pairs(&controller.snapshot())[0];

    controller.select_card(a).unwrap();
    controller.select_card(b).unwrap();
    controller.settled().await;

    assert_eq!(
        controller.select_card(a),
        Ok(Selection::Ignored(IgnoreReason::AlreadyMatched))
    );
    assert_eq!(controller.snapshot().phase(), BoardPhase::Idle);
}

/// On a 2x2 board the first pair reports `game_over: false`, the second `true`.
#[tokio::test(start_paused = true)]
async fn test_game_over_on_last_pair() {
    let (mut controller, mut events) = controller(2, 7);
    let pairs = pairs(&controller.snapshot());
    assert_eq!(pairs.len(), 2);

    let mut outcomes = Vec::new();
    for (a, b) in pairs {
        controller.select_card(a).unwrap();
        controller.select_card(b).unwrap();
        controller.settled().await;
        while let Ok(event) = events.try_recv() {
            outcomes.extend(event.outcome());
        }
    }

    assert_eq!(
        outcomes,
        vec![TurnOutcome::matched(false), TurnOutcome::matched(true)]
    );
    assert!(controller.snapshot().all_matched());
}

/// Playing out a whole 4x4 board with misses in between.
#[tokio::test(start_paused = true)]
async fn test_full_game_with_misses() {
    let (mut controller, mut events) = controller(4, 8);
    let pairs = pairs(&controller.snapshot());

    let mut played = Vec::new();
    for (turn, (a, b)) in pairs.iter().copied().enumerate() {
        if turn + 1 < pairs.len() {
            // Miss first: this pair's first card with the next pair's first card.
            controller.select_card(a).unwrap();
            controller.select_card(pairs[turn + 1].0).unwrap();
            controller.settled().await;
        }
        controller.select_card(a).unwrap();
        controller.select_card(b).unwrap();
        controller.settled().await;

        while let Ok(event) = events.try_recv() {
            played.extend(event.outcome());
        }
    }

    let matches = played.iter().filter(|o| o.matched).count();
    assert_eq!(matches, 8);
    assert_eq!(played.len(), 15);
    assert_eq!(played.iter().filter(|o| o.game_over).count(), 1);
    assert_eq!(played.last(), Some(&TurnOutcome::matched(true)));
}

/// Cards from another board are rejected, even mid-evaluation.
#[tokio::test(start_paused = true)]
async fn test_foreign_card_rejected() {
    let (mut controller, _events) = controller(2, 9);
    let (other, _other_events) = self::controller(2, 9);
    let foreign = other.snapshot().cards()[0].id;

    assert_eq!(controller.select_card(foreign), Err(GameError::InvalidCard(foreign)));

    let (a, b) = mismatch(&controller.snapshot());
    controller.select_card(a).unwrap();
    controller.select_card(b).unwrap();
    assert_eq!(controller.select_card(foreign), Err(GameError::InvalidCard(foreign)));
}

/// A board built by hand runs with a custom delay.
#[tokio::test(start_paused = true)]
async fn test_custom_delay() {
    let board = Board::deal(2, &DeckBuilder::default(), &mut GameRng::new(11)).unwrap();
    let (a, b) = mismatch(&board);
    let (mut controller, mut events) = BoardController::new(board, PlayerId::both(), Duration::from_secs(2));
    let started = Instant::now();

    controller.select_card(a).unwrap();
    controller.select_card(b).unwrap();

    assert_eq!(events.recv().await, Some(BoardEvent::CardFlipped));
    assert_eq!(events.recv().await, Some(BoardEvent::TurnPlayed(TurnOutcome::missed())));
    assert!(started.elapsed() >= Duration::from_secs(2));
    assert_eq!(controller.players(), PlayerId::both());
}

/// Invalid dimensions never produce a controller.
#[test]
fn test_start_rejects_odd_dimension() {
    let config = GameConfig::default().with_dimension(3);
    let err = BoardController::start(&config, PlayerId::both()).unwrap_err();
    assert_eq!(err, GameError::InvalidDimension(3));
}
