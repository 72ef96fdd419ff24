//! # coup-engine
//!
//! Rules engine for a Coup-style multiplayer elimination card game: players
//! take turns gaining and spending coins to advance their position and
//! eliminate opponents, while six character roles grant exceptions and
//! counter-moves to the base rules.
//!
//! The crate is the game's single authority. It owns the roster, the turn
//! cursor, and every coin ledger; the front end (GUI, CLI, test harness)
//! drives it one call at a time and renders whatever the query surface
//! reports. There is no persistence, no networking, and no internal
//! locking - embedders wanting concurrent access must serialize calls
//! themselves.
//!
//! ## Design
//!
//! - **Single owner**: all state lives in [`Game`]; participants are
//!   addressed by [`PlayerId`] arena indices, so back-references like "who
//!   couped me" cannot dangle.
//! - **Closed role set**: [`Role`] is an exhaustively-matched enum; a
//!   missing role case is a compile error, not a runtime surprise.
//! - **Atomic moves**: every operation validates first and mutates after.
//!   A rejected move returns a typed [`GameError`] and changes nothing.
//! - **Deterministic randomness**: the RNG used for role assignment is
//!   seeded at construction, so tests replay exactly.
//!
//! ## Example
//!
//! ```
//! use coup_engine::{Game, Role};
//!
//! let mut game = Game::new(42);
//! let alice = game.register("Alice")?;
//! let baron = game.register_with_role("Baron", Role::Baron)?;
//! game.start()?;
//!
//! game.gather(alice)?; // Alice gains 1 coin; the turn passes
//! game.gather(baron)?;
//! # Ok::<(), coup_engine::GameError>(())
//! ```
//!
//! ## Modules
//!
//! - `core`: player identity, roles, participants, errors, RNG
//! - `engine`: the turn authority, base actions, and role abilities

pub mod core;
pub mod engine;

pub use crate::core::{GameError, GameRng, Participant, PlayerId, Role, MAX_NAME_LEN};
pub use crate::engine::{
    Game, PlayerSummary, BLOCK_COUP_COST, BRIBE_COST, COUP_COST, INVEST_COST, MANDATORY_COUP_AT,
    MAX_PLAYERS, MIN_PLAYERS, SANCTION_COST, TAX_REVERSAL,
};
