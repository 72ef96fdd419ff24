//! Player identification, roles, and per-player state.
//!
//! ## PlayerId
//!
//! Type-safe roster index. Participants are stored in registration order and
//! never removed once the game starts, so a `PlayerId` stays valid for the
//! whole game and can be used as a stable back-reference (e.g. "who couped
//! me") without dangling.
//!
//! ## Role
//!
//! Closed set of character roles. The engine dispatches role overrides by
//! matching on this enum so a missing case is a compile error.
//!
//! ## Participant
//!
//! A registered player: coin ledger plus the per-turn flags the rules engine
//! reads and clears as turns advance.

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Maximum display-name length, in characters.
pub const MAX_NAME_LEN: usize = 9;

/// Roster index of a registered participant.
///
/// Indices are 0-based in registration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw roster index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Character role of a participant.
///
/// `Unassigned` is the base player with no special abilities; games that use
/// deferred role assignment register everyone as `Unassigned` and upgrade the
/// roster via [`crate::Game::assign_random_roles`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Base player with no special abilities.
    Unassigned,
    /// Takes 3 coins on tax and can reverse other players' tax.
    Governor,
    /// Can see coin counts and sabotage arrests.
    Spy,
    /// Can invest coins and is compensated when sanctioned.
    Baron,
    /// Can block coups and forfeits to the bank when arrested.
    General,
    /// Can block bribes and raises the price of sanctions against them.
    Judge,
    /// Gains a bonus coin at turn start and pays the bank when arrested.
    Merchant,
}

impl Role {
    /// The six assignable character roles, in a fixed order.
    pub const ASSIGNABLE: [Role; 6] = [
        Role::Governor,
        Role::Spy,
        Role::Baron,
        Role::General,
        Role::Judge,
        Role::Merchant,
    ];
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Role::Unassigned => "Unassigned",
            Role::Governor => "Governor",
            Role::Spy => "Spy",
            Role::Baron => "Baron",
            Role::General => "General",
            Role::Judge => "Judge",
            Role::Merchant => "Merchant",
        };
        f.write_str(label)
    }
}

/// A registered player: coin ledger and per-turn rule flags.
///
/// All mutation goes through the [`crate::Game`] that owns the roster;
/// participants expose read-only accessors to the outside.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub(crate) name: String,
    pub(crate) role: Role,
    pub(crate) coins: u32,
    pub(crate) active: bool,
    /// Blocks gather and tax until this player's next turn begins.
    pub(crate) sanctioned: bool,
    /// When false, this player cannot perform an arrest; restored at the end
    /// of their next turn.
    pub(crate) arrest_available: bool,
    /// Set after paying for a bribe; grants one extra action this turn.
    pub(crate) bribe_pending: bool,
    /// Set when tax was this player's last action; enables Governor reversal.
    pub(crate) taxed_last: bool,
    /// Who couped this player, while the block-coup window is still open.
    pub(crate) eliminated_by: Option<PlayerId>,
}

impl Participant {
    /// Create a fresh participant: 0 coins, active, no flags set.
    ///
    /// Fails if the name is empty or longer than [`MAX_NAME_LEN`] characters.
    pub fn new(name: impl Into<String>, role: Role) -> Result<Self, GameError> {
        let name = name.into();
        let len = name.chars().count();
        if len == 0 || len > MAX_NAME_LEN {
            return Err(GameError::InvalidName);
        }

        Ok(Self {
            name,
            role,
            coins: 0,
            active: true,
            sanctioned: false,
            arrest_available: true,
            bribe_pending: false,
            taxed_last: false,
            eliminated_by: None,
        })
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Character role.
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Current coin balance.
    #[must_use]
    pub fn coins(&self) -> u32 {
        self.coins
    }

    /// Whether this player is still in the game.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether this player's economic actions are blocked.
    #[must_use]
    pub fn is_sanctioned(&self) -> bool {
        self.sanctioned
    }

    /// Whether this player may perform an arrest.
    #[must_use]
    pub fn arrest_available(&self) -> bool {
        self.arrest_available
    }

    /// Whether this player has a bribed extra action pending.
    #[must_use]
    pub fn bribe_pending(&self) -> bool {
        self.bribe_pending
    }

    /// Whether tax was this player's last action.
    #[must_use]
    pub fn taxed_last(&self) -> bool {
        self.taxed_last
    }

    /// Who couped this player, if the block window is still open.
    #[must_use]
    pub fn eliminated_by(&self) -> Option<PlayerId> {
        self.eliminated_by
    }

    // === Role predicates ===

    #[must_use]
    pub fn is_governor(&self) -> bool {
        self.role == Role::Governor
    }

    #[must_use]
    pub fn is_general(&self) -> bool {
        self.role == Role::General
    }

    #[must_use]
    pub fn is_judge(&self) -> bool {
        self.role == Role::Judge
    }

    #[must_use]
    pub fn is_merchant(&self) -> bool {
        self.role == Role::Merchant
    }

    // === Ledger mutation (crate-internal; callers validate first) ===

    pub(crate) fn add_coins(&mut self, amount: u32) {
        self.coins += amount;
    }

    /// Remove coins. Preconditions must have established `coins >= amount`.
    pub(crate) fn remove_coins(&mut self, amount: u32) {
        debug_assert!(self.coins >= amount, "ledger underflow");
        self.coins -= amount;
    }

    /// Set the sanctioned flag.
    ///
    /// A Baron being sanctioned is compensated with 1 coin. The rebate lives
    /// in the setter so no code path can sanction a Baron without paying it.
    pub(crate) fn set_sanctioned(&mut self, value: bool) {
        self.sanctioned = value;
        if value && self.role == Role::Baron {
            self.coins += 1;
        }
    }
}
