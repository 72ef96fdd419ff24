//! Error taxonomy for illegal game moves.
//!
//! Every validation failure in the engine maps to one variant here. Failures
//! are ordinary, catchable conditions: a rejected move leaves the game state
//! untouched, and retrying with different input is entirely a caller concern.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::player::Role;

/// Errors that can occur when driving the game.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GameError {
    // === Lifecycle ===
    #[error("game has not started yet")]
    NotStarted,

    #[error("game has already started")]
    AlreadyStarted,

    #[error("need at least 2 players to start")]
    NotEnoughPlayers,

    #[error("maximum 6 players allowed")]
    RosterFull,

    // === Turn ===
    #[error("not your turn")]
    NotYourTurn,

    #[error("no players in the game")]
    NoPlayers,

    #[error("no such player in this game")]
    UnknownPlayer,

    // === State ===
    #[error("player is eliminated")]
    ActorEliminated,

    #[error("target player is eliminated")]
    TargetEliminated,

    #[error("an action against yourself is not allowed")]
    SelfTarget,

    #[error("player is sanctioned")]
    Sanctioned,

    #[error("target player is not couped")]
    TargetNotCouped,

    #[error("target player has not bribed")]
    NoBribePending,

    #[error("target player did not use tax as their last action")]
    NoTaxToReverse,

    // === Resources ===
    #[error("not enough coins for {action} ({required} required)")]
    InsufficientCoins { action: String, required: u32 },

    // === Rule overrides ===
    #[error("you have 10 or more coins, must perform coup")]
    MustCoup,

    #[error("consecutive arrest of the same target is not allowed")]
    ConsecutiveArrest,

    #[error("arrest action is not available")]
    ArrestUnavailable,

    #[error("too late, this coup can no longer be blocked")]
    ReversalWindowClosed,

    // === Winner lookup ===
    #[error("game is still active")]
    GameStillActive,

    #[error("no active players found")]
    NoActivePlayers,

    // === Construction ===
    #[error("player name must be 1-9 characters")]
    InvalidName,

    #[error("player name is already taken")]
    DuplicateName,

    #[error("only the {required} can use this ability")]
    RoleRequired { required: Role },
}
