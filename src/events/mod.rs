//! Events emitted by the board for the host to react to.

pub mod event;

pub use event::{BoardEvent, TurnOutcome};
