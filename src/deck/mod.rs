//! Deck building.
//!
//! `DeckBuilder` turns a board dimension into a shuffled sequence of
//! `dimension²` cards, two per identity.

pub mod builder;

pub use builder::DeckBuilder;
