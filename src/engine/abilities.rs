//! Role-specific abilities.
//!
//! Baron's invest is an ordinary turn action with the usual preamble. The
//! other four are reactive: any eligible player of the right role may use
//! them out of turn, inside a timing window, and none of them advance the
//! turn.
//!
//! Timing windows:
//! - A tax can be reversed until the taxing player's next turn begins.
//! - A bribe can be voided until the bribing player's turn ends.
//! - A coup can be blocked until the couping player completes one more
//!   full turn.

use tracing::debug;

use crate::core::{GameError, PlayerId, Role};
use crate::engine::game::Game;

/// Coins a Baron pays to invest (receiving double back).
pub const INVEST_COST: u32 = 3;
/// Coins a General pays to block a coup.
pub const BLOCK_COUP_COST: u32 = 5;
/// Coins a reversed tax claws back (one more from a Governor).
pub const TAX_REVERSAL: u32 = 2;

impl Game {
    fn require_role(&self, actor: PlayerId, required: Role) -> Result<(), GameError> {
        if self.participant(actor)?.role() != required {
            return Err(GameError::RoleRequired { required });
        }
        Ok(())
    }

    /// Governor: reverse another player's tax, clawing back the coins.
    ///
    /// Valid until the target's tax flag clears (their next turn begins).
    /// Claws back 2 coins, or 3 from a Governor target, exactly undoing the
    /// original gain. Reactive: no turn ownership required.
    pub fn reverse_tax(&mut self, actor: PlayerId, target: PlayerId) -> Result<(), GameError> {
        if !self.started() {
            return Err(GameError::NotStarted);
        }
        self.require_role(actor, Role::Governor)?;
        if !self.participant(actor)?.is_active() {
            return Err(GameError::ActorEliminated);
        }
        if actor == target {
            return Err(GameError::SelfTarget);
        }
        let target_ref = self.participant(target)?;
        if !target_ref.is_active() {
            return Err(GameError::TargetEliminated);
        }
        if !target_ref.taxed_last() {
            return Err(GameError::NoTaxToReverse);
        }

        let amount = if target_ref.is_governor() {
            TAX_REVERSAL + 1
        } else {
            TAX_REVERSAL
        };
        if target_ref.coins() < amount {
            return Err(GameError::InsufficientCoins {
                action: "tax reversal".into(),
                required: amount,
            });
        }

        debug!(
            player = %self.roster[actor.index()].name(),
            target = %self.roster[target.index()].name(),
            amount,
            "tax reversed"
        );

        let target_ref = self.participant_mut(target)?;
        target_ref.remove_coins(amount);
        target_ref.taxed_last = false;
        Ok(())
    }

    /// Spy: reveal a target's coin count and sabotage their next arrest.
    ///
    /// Returns the observed balance. The target cannot perform an arrest
    /// until the end of their next turn restores the ability. Reactive: no
    /// turn ownership required and no turn effect.
    pub fn spy_on(&mut self, actor: PlayerId, target: PlayerId) -> Result<u32, GameError> {
        if !self.started() {
            return Err(GameError::NotStarted);
        }
        self.require_role(actor, Role::Spy)?;
        if !self.participant(actor)?.is_active() {
            return Err(GameError::ActorEliminated);
        }
        if actor == target {
            return Err(GameError::SelfTarget);
        }
        let target_ref = self.participant(target)?;
        if !target_ref.is_active() {
            return Err(GameError::TargetEliminated);
        }

        let observed = target_ref.coins();
        debug!(
            player = %self.roster[actor.index()].name(),
            target = %self.roster[target.index()].name(),
            observed,
            "spied on"
        );

        self.participant_mut(target)?.arrest_available = false;
        Ok(observed)
    }

    /// Baron: pay 3 coins, receive 6 back.
    ///
    /// A regular turn action: requires turn ownership and obeys the
    /// mandatory-coup rule.
    pub fn invest(&mut self, actor: PlayerId) -> Result<(), GameError> {
        if !self.started() {
            return Err(GameError::NotStarted);
        }
        self.require_role(actor, Role::Baron)?;
        let participant = self.validate_turn(actor)?;
        Self::check_mandatory_coup(participant)?;
        if participant.coins() < INVEST_COST {
            return Err(GameError::InsufficientCoins {
                action: "invest".into(),
                required: INVEST_COST,
            });
        }

        debug!(player = %self.roster[actor.index()].name(), "invest");
        // Pay 3, receive 6: net +3.
        self.roster[actor.index()].add_coins(INVEST_COST);
        self.finish_action(actor)
    }

    /// General: pay 5 coins to undo a coup, restoring the eliminated player.
    ///
    /// Valid while the block window is open - it closes once the couping
    /// player completes one more full turn. Reactive: no turn ownership
    /// required and no turn effect.
    pub fn block_coup(&mut self, actor: PlayerId, target: PlayerId) -> Result<(), GameError> {
        if !self.started() {
            return Err(GameError::NotStarted);
        }
        self.require_role(actor, Role::General)?;
        if self.participant(actor)?.coins() < BLOCK_COUP_COST {
            return Err(GameError::InsufficientCoins {
                action: "block coup".into(),
                required: BLOCK_COUP_COST,
            });
        }
        let target_ref = self.participant(target)?;
        if target_ref.is_active() {
            return Err(GameError::TargetNotCouped);
        }
        if target_ref.eliminated_by().is_none() {
            return Err(GameError::ReversalWindowClosed);
        }

        debug!(
            player = %self.roster[actor.index()].name(),
            target = %self.roster[target.index()].name(),
            "coup blocked"
        );

        self.participant_mut(actor)?.remove_coins(BLOCK_COUP_COST);
        let target_ref = self.participant_mut(target)?;
        target_ref.eliminated_by = None;
        target_ref.active = true;
        Ok(())
    }

    /// Judge: void a target's pending bribe.
    ///
    /// The bribed coins are not refunded - the target loses the 4 coins and
    /// the extra action. Reactive: no turn ownership required and no turn
    /// effect.
    pub fn block_bribe(&mut self, actor: PlayerId, target: PlayerId) -> Result<(), GameError> {
        if !self.started() {
            return Err(GameError::NotStarted);
        }
        self.require_role(actor, Role::Judge)?;
        if !self.participant(actor)?.is_active() {
            return Err(GameError::ActorEliminated);
        }
        if actor == target {
            return Err(GameError::SelfTarget);
        }
        let target_ref = self.participant(target)?;
        if !target_ref.is_active() {
            return Err(GameError::TargetEliminated);
        }
        if !target_ref.bribe_pending() {
            return Err(GameError::NoBribePending);
        }

        debug!(
            player = %self.roster[actor.index()].name(),
            target = %self.roster[target.index()].name(),
            "bribe blocked"
        );

        self.participant_mut(target)?.bribe_pending = false;
        Ok(())
    }
}
