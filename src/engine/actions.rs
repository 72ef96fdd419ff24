//! The six base actions every participant can take on their turn.
//!
//! All of them share one validation preamble, checked in order: the game has
//! started, it is the actor's turn, the actor is alive, and the mandatory
//! coup rule (10+ coins outside a bribe) is not in force. Action-specific
//! preconditions follow. Only after every check passes does any state
//! change, so a rejected action is always a no-op.
//!
//! ## Bribe-aware turn advancement
//!
//! A bribed player gets one extra action: finishing an action while the
//! bribe flag is set clears the flag instead of advancing the turn.

use tracing::debug;

use crate::core::{GameError, Participant, PlayerId, Role};
use crate::engine::game::Game;

/// Coins paid for a bribe.
pub const BRIBE_COST: u32 = 4;
/// Coins paid for a sanction (one more against a Judge).
pub const SANCTION_COST: u32 = 3;
/// Coins paid for a coup.
pub const COUP_COST: u32 = 7;
/// Balance at which couping becomes mandatory.
pub const MANDATORY_COUP_AT: u32 = 10;

impl Game {
    // === Shared validation ===

    /// Started / turn-ownership / alive preamble for turn-bound actions.
    pub(crate) fn validate_turn(&self, actor: PlayerId) -> Result<&Participant, GameError> {
        if !self.started() {
            return Err(GameError::NotStarted);
        }
        let participant = self.participant(actor)?;
        if !self.is_turn_of(actor)? {
            return Err(GameError::NotYourTurn);
        }
        if !participant.is_active() {
            return Err(GameError::ActorEliminated);
        }
        Ok(participant)
    }

    /// A player holding 10+ coins may only coup, unless a bribe is pending.
    pub(crate) fn check_mandatory_coup(participant: &Participant) -> Result<(), GameError> {
        if participant.coins() >= MANDATORY_COUP_AT && !participant.bribe_pending() {
            return Err(GameError::MustCoup);
        }
        Ok(())
    }

    /// End an action: consume a pending bribe or advance the turn.
    pub(crate) fn finish_action(&mut self, actor: PlayerId) -> Result<(), GameError> {
        let participant = &mut self.roster[actor.index()];
        if participant.bribe_pending() {
            participant.bribe_pending = false;
            Ok(())
        } else {
            self.advance_turn()
        }
    }

    fn broke(action: &str, required: u32) -> GameError {
        GameError::InsufficientCoins {
            action: action.to_string(),
            required,
        }
    }

    // === Base actions ===

    /// Gather 1 coin. Blocked while sanctioned.
    pub fn gather(&mut self, actor: PlayerId) -> Result<(), GameError> {
        let participant = self.validate_turn(actor)?;
        Self::check_mandatory_coup(participant)?;
        if participant.is_sanctioned() {
            return Err(GameError::Sanctioned);
        }

        debug!(player = %self.roster[actor.index()].name(), "gather");
        self.roster[actor.index()].add_coins(1);
        self.finish_action(actor)
    }

    /// Tax: 2 coins from the treasury, 3 for a Governor. Blocked while
    /// sanctioned. Marks tax as the actor's last action so a Governor can
    /// reverse it until the actor's next turn begins.
    pub fn tax(&mut self, actor: PlayerId) -> Result<(), GameError> {
        let participant = self.validate_turn(actor)?;
        Self::check_mandatory_coup(participant)?;
        if participant.is_sanctioned() {
            return Err(GameError::Sanctioned);
        }

        let amount = if participant.is_governor() { 3 } else { 2 };
        debug!(player = %self.roster[actor.index()].name(), amount, "tax");

        let participant = &mut self.roster[actor.index()];
        participant.add_coins(amount);
        participant.taxed_last = true;
        self.finish_action(actor)
    }

    /// Bribe: pay 4 coins for one additional action this turn.
    ///
    /// Never advances the turn; the extra action is consumed by whichever
    /// action is taken next.
    pub fn bribe(&mut self, actor: PlayerId) -> Result<(), GameError> {
        let participant = self.validate_turn(actor)?;
        Self::check_mandatory_coup(participant)?;
        if participant.coins() < BRIBE_COST {
            return Err(Self::broke("bribe", BRIBE_COST));
        }

        debug!(player = %self.roster[actor.index()].name(), "bribe");
        let participant = &mut self.roster[actor.index()];
        participant.remove_coins(BRIBE_COST);
        participant.bribe_pending = true;
        Ok(())
    }

    /// Arrest a target, normally moving 1 coin from them to the actor.
    ///
    /// A General forfeits 1 coin to the bank instead of paying the arrester;
    /// a Merchant forfeits 2 to the bank. A target with no coins is still a
    /// valid arrest (nothing changes hands). The same player cannot be
    /// arrested twice in a row, and a Spy can strip the actor's ability to
    /// arrest for a turn.
    pub fn arrest(&mut self, actor: PlayerId, target: PlayerId) -> Result<(), GameError> {
        let participant = self.validate_turn(actor)?;
        Self::check_mandatory_coup(participant)?;
        if !participant.arrest_available() {
            return Err(GameError::ArrestUnavailable);
        }
        if actor == target {
            return Err(GameError::SelfTarget);
        }
        let target_ref = self.participant(target)?;
        if !target_ref.is_active() {
            return Err(GameError::TargetEliminated);
        }
        if self.last_arrested() == Some(target) {
            return Err(GameError::ConsecutiveArrest);
        }

        debug!(
            player = %self.roster[actor.index()].name(),
            target = %self.roster[target.index()].name(),
            "arrest"
        );

        let (actor_ref, target_ref) = self.pair_mut(actor, target);
        if target_ref.coins() >= 1 {
            match target_ref.role() {
                // Forfeits to the bank; the arrester gains nothing.
                Role::General => target_ref.remove_coins(1),
                Role::Merchant => {
                    let fine = target_ref.coins().min(2);
                    target_ref.remove_coins(fine);
                }
                _ => {
                    target_ref.remove_coins(1);
                    actor_ref.add_coins(1);
                }
            }
        }

        self.set_last_arrested(Some(target));
        self.finish_action(actor)
    }

    /// Sanction a target, blocking their gather and tax until their next
    /// turn begins. Costs 3 coins, 4 against a Judge. A Baron target is
    /// compensated with 1 coin.
    pub fn sanction(&mut self, actor: PlayerId, target: PlayerId) -> Result<(), GameError> {
        let participant = self.validate_turn(actor)?;
        Self::check_mandatory_coup(participant)?;

        let target_ref = self.participant(target)?;
        let cost = if target_ref.is_judge() {
            SANCTION_COST + 1
        } else {
            SANCTION_COST
        };
        if participant.coins() < cost {
            return Err(Self::broke("sanction", cost));
        }
        if actor == target {
            return Err(GameError::SelfTarget);
        }
        if !target_ref.is_active() {
            return Err(GameError::TargetEliminated);
        }

        debug!(
            player = %self.roster[actor.index()].name(),
            target = %self.roster[target.index()].name(),
            cost,
            "sanction"
        );

        let (actor_ref, target_ref) = self.pair_mut(actor, target);
        actor_ref.remove_coins(cost);
        target_ref.set_sanctioned(true);
        self.finish_action(actor)
    }

    /// Coup: pay 7 coins to eliminate a target.
    ///
    /// The elimination can still be reversed by a General until the actor
    /// completes one more full turn. This is the only action exempt from
    /// (and demanded by) the mandatory-coup rule.
    pub fn coup(&mut self, actor: PlayerId, target: PlayerId) -> Result<(), GameError> {
        let participant = self.validate_turn(actor)?;
        if participant.coins() < COUP_COST {
            return Err(Self::broke("coup", COUP_COST));
        }
        if actor == target {
            return Err(GameError::SelfTarget);
        }
        let target_ref = self.participant(target)?;
        if !target_ref.is_active() {
            return Err(GameError::TargetEliminated);
        }

        debug!(
            player = %self.roster[actor.index()].name(),
            target = %self.roster[target.index()].name(),
            "coup"
        );

        let (actor_ref, target_ref) = self.pair_mut(actor, target);
        actor_ref.remove_coins(COUP_COST);
        target_ref.active = false;
        target_ref.eliminated_by = Some(actor);
        self.finish_action(actor)
    }
}
