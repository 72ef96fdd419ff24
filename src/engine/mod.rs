//! The game machinery: turn authority, base actions, role abilities.

pub mod abilities;
pub mod actions;
pub mod game;

pub use actions::{BRIBE_COST, COUP_COST, MANDATORY_COUP_AT, SANCTION_COST};
pub use abilities::{BLOCK_COUP_COST, INVEST_COST, TAX_REVERSAL};
pub use game::{Game, PlayerSummary, MAX_PLAYERS, MIN_PLAYERS};
