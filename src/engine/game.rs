//! The turn authority: roster, turn ownership, win detection.
//!
//! `Game` is the single owner of all mutable state. Participants are stored
//! in an arena (registration order) and addressed by [`PlayerId`]; every
//! action and ability is a method on `Game` keyed by the acting player, so
//! there is exactly one arbiter of whose turn it is and no shared mutable
//! references anywhere.
//!
//! ## Turn advancement
//!
//! `advance_turn` applies end-of-turn cleanup to the player leaving the
//! turn, walks the cursor circularly past eliminated players, and applies
//! start-of-turn effects to the player entering. If a full circuit finds no
//! other active player the cursor stays put and the caller detects the end
//! of the game via [`Game::winner`] - with one exception: a General rich
//! enough to block the final coup keeps the game alive (see
//! [`Game::can_general_prevent_game_end`]).

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{GameError, GameRng, Participant, PlayerId, Role};

/// Minimum roster size required to start.
pub const MIN_PLAYERS: usize = 2;
/// Maximum roster size.
pub const MAX_PLAYERS: usize = 6;

/// One roster entry as rendered to the front end.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub id: PlayerId,
    pub name: String,
    pub role: Role,
    pub coins: u32,
    pub active: bool,
}

/// The game: roster, turn cursor, and rule bookkeeping.
pub struct Game {
    pub(crate) roster: Vec<Participant>,
    pub(crate) cursor: usize,
    pub(crate) started: bool,
    pub(crate) last_arrested: Option<PlayerId>,
    pub(crate) rng: GameRng,
}

impl Game {
    /// Create an empty game with a deterministic RNG seed.
    ///
    /// The seed only affects [`Game::assign_random_roles`].
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            roster: Vec::new(),
            cursor: 0,
            started: false,
            last_arrested: None,
            rng: GameRng::new(seed),
        }
    }

    /// Create an empty game seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            roster: Vec::new(),
            cursor: 0,
            started: false,
            last_arrested: None,
            rng: GameRng::from_entropy(),
        }
    }

    // === Roster lifecycle (pre-start) ===

    /// Register a base participant. Pre-start only.
    ///
    /// Returns the new player's roster ID. Names must be 1-9 characters and
    /// unique within the game.
    pub fn register(&mut self, name: &str) -> Result<PlayerId, GameError> {
        self.register_with_role(name, Role::Unassigned)
    }

    /// Register a participant with a specific role. Pre-start only.
    pub fn register_with_role(&mut self, name: &str, role: Role) -> Result<PlayerId, GameError> {
        if self.started {
            return Err(GameError::AlreadyStarted);
        }
        if self.roster.len() >= MAX_PLAYERS {
            return Err(GameError::RosterFull);
        }

        let participant = Participant::new(name, role)?;
        if self.roster.iter().any(|p| p.name() == participant.name()) {
            return Err(GameError::DuplicateName);
        }

        let id = PlayerId::new(self.roster.len() as u8);
        debug!(player = %participant.name(), role = %role, %id, "player registered");
        self.roster.push(participant);
        Ok(id)
    }

    /// Remove a participant from the roster. Pre-start only.
    ///
    /// Roster IDs of later registrants shift down by one.
    pub fn remove_player(&mut self, player: PlayerId) -> Result<(), GameError> {
        if self.started {
            return Err(GameError::AlreadyStarted);
        }
        if player.index() >= self.roster.len() {
            return Err(GameError::UnknownPlayer);
        }

        let removed = self.roster.remove(player.index());
        debug!(player = %removed.name(), "player removed");
        if self.cursor >= self.roster.len() {
            self.cursor = 0;
        }
        Ok(())
    }

    /// Remove every participant. Pre-start only.
    pub fn clear_players(&mut self) -> Result<(), GameError> {
        if self.started {
            return Err(GameError::AlreadyStarted);
        }

        self.roster.clear();
        self.cursor = 0;
        self.last_arrested = None;
        Ok(())
    }

    /// Start the game. Requires 2-6 registered players.
    ///
    /// The first registrant takes the first turn.
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.roster.len() < MIN_PLAYERS {
            return Err(GameError::NotEnoughPlayers);
        }
        if self.roster.len() > MAX_PLAYERS {
            return Err(GameError::RosterFull);
        }

        self.started = true;
        debug!(players = self.roster.len(), "game started");
        Ok(())
    }

    /// Whether the game has started.
    #[must_use]
    pub fn started(&self) -> bool {
        self.started
    }

    /// Replace every roster entry with a fresh participant of a uniformly
    /// chosen role, preserving names and positions.
    ///
    /// Coins and flags reset along with the turn cursor and arrest memory;
    /// this supports deferred role assignment where players are registered
    /// as base participants first.
    pub fn assign_random_roles(&mut self) -> Result<(), GameError> {
        if self.roster.is_empty() {
            return Err(GameError::NoPlayers);
        }

        for participant in &mut self.roster {
            let role = *self
                .rng
                .choose(&Role::ASSIGNABLE)
                .unwrap_or(&Role::Unassigned);
            let name = participant.name().to_string();
            // Name already passed validation at registration.
            *participant = Participant::new(name, role)?;
            trace!(player = %participant.name(), role = %role, "role assigned");
        }

        self.cursor = 0;
        self.last_arrested = None;
        Ok(())
    }

    // === Turn ownership ===

    /// The player whose turn it is.
    pub fn current_player(&self) -> Result<PlayerId, GameError> {
        if !self.started {
            return Err(GameError::NotStarted);
        }
        if self.roster.is_empty() {
            return Err(GameError::NoPlayers);
        }
        Ok(PlayerId::new(self.cursor as u8))
    }

    /// The name of the player whose turn it is.
    pub fn current_player_name(&self) -> Result<&str, GameError> {
        let id = self.current_player()?;
        Ok(self.roster[id.index()].name())
    }

    /// Whether it is `player`'s turn.
    ///
    /// Errors if the game has not started; an empty roster yields `false`.
    pub fn is_turn_of(&self, player: PlayerId) -> Result<bool, GameError> {
        if !self.started {
            return Err(GameError::NotStarted);
        }
        if self.roster.is_empty() {
            return Ok(false);
        }
        Ok(self.cursor == player.index())
    }

    /// Advance to the next active player's turn.
    ///
    /// Applies end-of-turn cleanup to the player leaving the turn and
    /// start-of-turn effects to the player entering it. If no other active
    /// player exists the cursor stays put (terminal state, detected via
    /// [`Game::winner`]) unless the two-player General exception applies.
    pub fn advance_turn(&mut self) -> Result<(), GameError> {
        if !self.started {
            return Err(GameError::NotStarted);
        }
        if self.active_count() == 0 {
            return Err(GameError::NoPlayers);
        }

        // End-of-turn cleanup for the player leaving the turn.
        let leaving = &mut self.roster[self.cursor];
        leaving.sanctioned = false;
        leaving.arrest_available = true;
        leaving.bribe_pending = false;
        trace!(player = %leaving.name(), "end-of-turn cleanup");

        let origin = self.cursor;
        let len = self.roster.len();
        self.cursor = (self.cursor + 1) % len;

        while !self.roster[self.cursor].is_active() {
            self.cursor = (self.cursor + 1) % len;

            if self.cursor == origin {
                // Full circuit: nobody else is active. A General with 5
                // coins in a two-player endgame gets a chance to block the
                // final coup before the game is called.
                if self.can_general_prevent_game_end() {
                    if let Some(first) = self.first_active() {
                        self.cursor = first.index();
                    }
                    debug!("turn held open for a blocking General");
                    return Ok(());
                }
                debug!("no other active player; turn stays put");
                return Ok(());
            }
        }

        // Start-of-turn effects for the player entering the turn.
        let entering_id = PlayerId::new(self.cursor as u8);
        let entering = &mut self.roster[self.cursor];

        if entering.is_merchant() && entering.coins() >= 3 {
            entering.add_coins(1);
            trace!(player = %entering.name(), "merchant passive income");
        }
        entering.taxed_last = false;

        debug!(player = %self.roster[self.cursor].name(), "turn begins");

        // A full round has passed unchallenged for anyone this player
        // couped; close those block-coup windows.
        for participant in &mut self.roster {
            if participant.eliminated_by == Some(entering_id) {
                participant.eliminated_by = None;
            }
        }

        Ok(())
    }

    // === Win detection ===

    /// The winner's name, once exactly one player remains active.
    pub fn winner(&self) -> Result<&str, GameError> {
        if !self.started {
            return Err(GameError::NotStarted);
        }

        let mut winner = None;
        let mut active = 0usize;
        for participant in &self.roster {
            if participant.is_active() {
                active += 1;
                winner = Some(participant.name());
            }
        }

        match active {
            0 => Err(GameError::NoActivePlayers),
            1 => Ok(winner.unwrap_or_default()),
            _ => Err(GameError::GameStillActive),
        }
    }

    /// Whether a two-player endgame is being held open for a General.
    ///
    /// True when exactly two players remain active and at least one of them
    /// is a General holding the 5 coins a coup block costs.
    #[must_use]
    pub fn can_general_prevent_game_end(&self) -> bool {
        if !self.started {
            return false;
        }

        let mut active = 0usize;
        let mut rich_general = false;
        for participant in &self.roster {
            if participant.is_active() {
                active += 1;
                if participant.is_general() && participant.coins() >= 5 {
                    rich_general = true;
                }
            }
        }

        active == 2 && rich_general
    }

    // === Arrest memory ===

    /// Record the most recently arrested player.
    pub fn set_last_arrested(&mut self, player: Option<PlayerId>) {
        self.last_arrested = player;
    }

    /// The most recently arrested player, if any.
    #[must_use]
    pub fn last_arrested(&self) -> Option<PlayerId> {
        self.last_arrested
    }

    // === Queries ===

    /// Number of registered participants, active or not.
    #[must_use]
    pub fn roster_len(&self) -> usize {
        self.roster.len()
    }

    /// Number of active participants.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.roster.iter().filter(|p| p.is_active()).count()
    }

    /// Names of all active participants, in roster order.
    #[must_use]
    pub fn players(&self) -> Vec<String> {
        self.roster
            .iter()
            .filter(|p| p.is_active())
            .map(|p| p.name().to_string())
            .collect()
    }

    /// Roster IDs of all active participants, in roster order.
    #[must_use]
    pub fn active_players(&self) -> Vec<PlayerId> {
        self.roster
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_active())
            .map(|(i, _)| PlayerId::new(i as u8))
            .collect()
    }

    /// Full roster snapshot for rendering: every participant with name,
    /// role label, coins, and active flag.
    #[must_use]
    pub fn roster(&self) -> Vec<PlayerSummary> {
        self.roster
            .iter()
            .enumerate()
            .map(|(i, p)| PlayerSummary {
                id: PlayerId::new(i as u8),
                name: p.name().to_string(),
                role: p.role(),
                coins: p.coins(),
                active: p.is_active(),
            })
            .collect()
    }

    /// Look up a participant by roster ID.
    pub fn participant(&self, player: PlayerId) -> Result<&Participant, GameError> {
        self.roster
            .get(player.index())
            .ok_or(GameError::UnknownPlayer)
    }

    pub(crate) fn participant_mut(
        &mut self,
        player: PlayerId,
    ) -> Result<&mut Participant, GameError> {
        self.roster
            .get_mut(player.index())
            .ok_or(GameError::UnknownPlayer)
    }

    /// Mutable access to two distinct participants at once.
    ///
    /// Callers must have validated both IDs and that they differ.
    pub(crate) fn pair_mut(
        &mut self,
        a: PlayerId,
        b: PlayerId,
    ) -> (&mut Participant, &mut Participant) {
        debug_assert_ne!(a, b, "pair_mut requires distinct players");
        let (low, high) = if a.index() < b.index() { (a, b) } else { (b, a) };
        let (head, tail) = self.roster.split_at_mut(high.index());
        let low_ref = &mut head[low.index()];
        let high_ref = &mut tail[0];
        if a.index() < b.index() {
            (low_ref, high_ref)
        } else {
            (high_ref, low_ref)
        }
    }

    pub(crate) fn first_active(&self) -> Option<PlayerId> {
        self.roster
            .iter()
            .position(|p| p.is_active())
            .map(|i| PlayerId::new(i as u8))
    }
}
