//! Core engine types: players, roles, errors, RNG.
//!
//! These are the fundamental building blocks the turn machinery in
//! [`crate::engine`] is built on.

pub mod error;
pub mod player;
pub mod rng;

pub use error::GameError;
pub use player::{Participant, PlayerId, Role, MAX_NAME_LEN};
pub use rng::GameRng;
