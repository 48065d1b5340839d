//! Identity tokens and the base identity pool.
//!
//! An `Identity` is the value two cards of a pair share. It also names the
//! card's face image: renderers load `images/<identity>.png`.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The base alphabet every deal draws from.
pub const BASE_ALPHABET: [&str; 12] = ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L"];

/// Identity token shared by the two cards of a pair.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Identity(Arc<str>);

impl Identity {
    /// Create an identity token.
    pub fn new(token: impl Into<Arc<str>>) -> Self {
        Self(token.into())
    }

    /// The raw token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Face image path for this identity.
    ///
    /// ```
    /// use concentration::cards::Identity;
    ///
    /// assert_eq!(Identity::new("C").image_path(), "images/C.png");
    /// ```
    #[must_use]
    pub fn image_path(&self) -> String {
        format!("images/{}.png", self.0)
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for Identity {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

/// Immutable pool of identities a deck is dealt from.
///
/// The pool is never extended. When a board needs more pairs than the pool
/// holds, the deck builder draws the extra identities into its own scratch
/// list, so repeated deals never grow the pool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentityPool {
    identities: Arc<[Identity]>,
}

impl IdentityPool {
    /// Create a pool from a list of tokens.
    ///
    /// # Panics
    ///
    /// Panics if `tokens` is empty.
    pub fn new<I, T>(tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Identity>,
    {
        let identities: Arc<[Identity]> = tokens.into_iter().map(Into::into).collect();
        assert!(!identities.is_empty(), "Identity pool must not be empty");
        Self { identities }
    }

    /// Number of distinct identities in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.identities.len()
    }

    /// Always false; pools are non-empty by construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }

    /// The identities, in pool order.
    #[must_use]
    pub fn as_slice(&self) -> &[Identity] {
        &self.identities
    }
}

impl Default for IdentityPool {
    fn default() -> Self {
        Self::new(BASE_ALPHABET)
    }
}
