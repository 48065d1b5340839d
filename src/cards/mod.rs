//! Card system: identities and instances.
//!
//! ## Key Types
//!
//! - `Identity`: Pair token, also names the face image
//! - `IdentityPool`: Immutable alphabet a deck is dealt from
//! - `Card`: Runtime card state (flipped, matched)

pub mod identity;
pub mod instance;

pub use identity::{Identity, IdentityPool, BASE_ALPHABET};
pub use instance::Card;
