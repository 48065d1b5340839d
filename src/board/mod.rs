//! The board and its flip/match state machine.
//!
//! - `Board`: card set, pending card, lock flag; synchronous transitions
//! - `BoardController`: async driver that applies the flip delay and emits
//!   `BoardEvent`s

pub mod controller;
pub mod state;

pub use controller::{BoardController, Selection};
pub use state::{Board, BoardPhase, FlipOutcome, IgnoreReason};
