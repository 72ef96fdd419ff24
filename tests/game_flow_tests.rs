//! End-to-end game flow: lifecycle, turn rotation, elimination, winner.
//!
//! These tests drive the engine exclusively through its public surface, the
//! way a front end would.

use coup_engine::{Game, GameError, PlayerId, Role};

/// Every listed player gathers once, in turn order, `rounds` times.
fn farm(game: &mut Game, ids: &[PlayerId], rounds: u32) {
    for _ in 0..rounds {
        for &id in ids {
            game.gather(id).unwrap();
        }
    }
}

#[test]
fn lifecycle_register_start_play() {
    let mut game = Game::new(1);
    let alice = game.register("Alice").unwrap();
    let bob = game.register("Bob").unwrap();

    assert!(!game.started());
    game.start().unwrap();
    assert!(game.started());

    assert_eq!(game.current_player_name().unwrap(), "Alice");
    assert!(game.is_turn_of(alice).unwrap());
    assert!(!game.is_turn_of(bob).unwrap());
}

#[test]
fn scenario_a_gather_passes_turn() {
    let mut game = Game::new(1);
    let alice = game.register("Alice").unwrap();
    let bob = game.register("Bob").unwrap();
    game.start().unwrap();

    game.gather(alice).unwrap();

    assert_eq!(game.participant(alice).unwrap().coins(), 1);
    assert!(game.is_turn_of(bob).unwrap());
}

#[test]
fn scenario_b_baron_invests() {
    let mut game = Game::new(1);
    let baron = game.register_with_role("Baron", Role::Baron).unwrap();
    let bob = game.register("Bob").unwrap();
    game.start().unwrap();

    farm(&mut game, &[baron, bob], 3); // Baron reaches 3 coins
    game.invest(baron).unwrap();

    assert_eq!(game.participant(baron).unwrap().coins(), 6);
    assert!(game.is_turn_of(bob).unwrap());
}

#[test]
fn scenario_c_general_blocks_coup() {
    let mut game = Game::new(1);
    let alice = game.register_with_role("Alice", Role::General).unwrap();
    let bob = game.register("Bob").unwrap();
    let carol = game.register_with_role("Carol", Role::General).unwrap();
    game.start().unwrap();

    farm(&mut game, &[alice, bob, carol], 7);
    game.coup(alice, bob).unwrap();

    let bob_ref = game.participant(bob).unwrap();
    assert!(!bob_ref.is_active());
    assert_eq!(bob_ref.eliminated_by(), Some(alice));

    // Before Alice's next turn begins, Carol reverses the elimination.
    let carol_coins = game.participant(carol).unwrap().coins();
    game.block_coup(carol, bob).unwrap();

    assert!(game.participant(bob).unwrap().is_active());
    assert_eq!(game.participant(carol).unwrap().coins(), carol_coins - 5);
}

#[test]
fn scenario_d_sanction_judge_and_baron() {
    // Judge target: exactly 4 coins covers the surcharge.
    let mut game = Game::new(1);
    let alice = game.register("Alice").unwrap();
    let judge = game.register_with_role("Judge", Role::Judge).unwrap();
    game.start().unwrap();

    farm(&mut game, &[alice, judge], 4);
    game.sanction(alice, judge).unwrap();
    assert_eq!(game.participant(alice).unwrap().coins(), 0);
    assert!(game.participant(judge).unwrap().is_sanctioned());

    // Baron target: exactly 3 coins, and the Baron is compensated.
    let mut game = Game::new(1);
    let alice = game.register("Alice").unwrap();
    let baron = game.register_with_role("Baron", Role::Baron).unwrap();
    game.start().unwrap();

    farm(&mut game, &[alice, baron], 3);
    let baron_before = game.participant(baron).unwrap().coins();
    game.sanction(alice, baron).unwrap();

    assert_eq!(game.participant(alice).unwrap().coins(), 0);
    assert!(game.participant(baron).unwrap().is_sanctioned());
    assert_eq!(game.participant(baron).unwrap().coins(), baron_before + 1);
}

#[test]
fn scenario_e_roster_limits() {
    let mut game = Game::new(1);
    for name in ["P1", "P2", "P3", "P4", "P5", "P6"] {
        game.register(name).unwrap();
    }

    assert_eq!(game.register("P7"), Err(GameError::RosterFull));

    game.start().unwrap();
    assert_eq!(game.register("P8"), Err(GameError::AlreadyStarted));
}

#[test]
fn turn_rotation_skips_eliminated_players() {
    let mut game = Game::new(1);
    let alice = game.register("Alice").unwrap();
    let bob = game.register("Bob").unwrap();
    let carol = game.register("Carol").unwrap();
    game.start().unwrap();

    farm(&mut game, &[alice, bob, carol], 7);
    game.coup(alice, bob).unwrap();

    // Bob is gone: rotation is Alice -> Carol -> Alice.
    assert!(game.is_turn_of(carol).unwrap());
    game.gather(carol).unwrap();
    assert!(game.is_turn_of(alice).unwrap());
}

#[test]
fn winner_emerges_after_last_elimination() {
    let mut game = Game::new(1);
    let alice = game.register("Alice").unwrap();
    let bob = game.register("Bob").unwrap();
    game.start().unwrap();

    assert_eq!(game.winner(), Err(GameError::GameStillActive));

    farm(&mut game, &[alice, bob], 7);
    game.coup(alice, bob).unwrap();

    assert_eq!(game.winner().unwrap(), "Alice");
    assert_eq!(game.players(), vec!["Alice".to_string()]);

    // The cursor stays with the survivor; the game is over.
    assert!(game.is_turn_of(alice).unwrap());
}

#[test]
fn mandatory_coup_at_ten_coins() {
    let mut game = Game::new(1);
    let alice = game.register("Alice").unwrap();
    let bob = game.register("Bob").unwrap();
    game.start().unwrap();

    farm(&mut game, &[alice, bob], 9);
    game.tax(alice).unwrap(); // 9 -> 11
    game.tax(bob).unwrap();

    assert_eq!(game.participant(alice).unwrap().coins(), 11);
    assert_eq!(game.gather(alice), Err(GameError::MustCoup));
    assert_eq!(game.tax(alice), Err(GameError::MustCoup));

    game.coup(alice, bob).unwrap();
    assert_eq!(game.participant(alice).unwrap().coins(), 4);
    assert_eq!(game.winner().unwrap(), "Alice");
}

#[test]
fn bribe_buys_exactly_one_extra_action() {
    let mut game = Game::new(1);
    let alice = game.register("Alice").unwrap();
    let bob = game.register("Bob").unwrap();
    game.start().unwrap();

    farm(&mut game, &[alice, bob], 4);

    game.bribe(alice).unwrap(); // 4 -> 0
    assert!(game.is_turn_of(alice).unwrap());

    game.gather(alice).unwrap(); // the extra action
    assert!(game.is_turn_of(alice).unwrap());

    game.gather(alice).unwrap(); // a normal action: turn passes
    assert!(game.is_turn_of(bob).unwrap());
}

#[test]
fn deferred_role_assignment_flow() {
    let mut game = Game::new(99);
    game.register("Alice").unwrap();
    game.register("Bob").unwrap();
    game.register("Carol").unwrap();

    // Everyone registers as a base player, then roles are rolled.
    for entry in game.roster() {
        assert_eq!(entry.role, Role::Unassigned);
    }

    game.assign_random_roles().unwrap();
    game.start().unwrap();

    for entry in game.roster() {
        assert_ne!(entry.role, Role::Unassigned);
    }

    // Same seed, same deal.
    let mut replay = Game::new(99);
    replay.register("Alice").unwrap();
    replay.register("Bob").unwrap();
    replay.register("Carol").unwrap();
    replay.assign_random_roles().unwrap();
    replay.start().unwrap();

    let roles = |g: &Game| g.roster().into_iter().map(|p| p.role).collect::<Vec<_>>();
    assert_eq!(roles(&game), roles(&replay));
}

#[test]
fn roster_snapshot_reflects_state() {
    let mut game = Game::new(1);
    let alice = game.register("Alice").unwrap();
    let bob = game.register_with_role("Bob", Role::Spy).unwrap();
    game.start().unwrap();

    game.gather(alice).unwrap();

    let roster = game.roster();
    assert_eq!(roster.len(), 2);
    assert_eq!(roster[0].name, "Alice");
    assert_eq!(roster[0].coins, 1);
    assert_eq!(roster[1].role, Role::Spy);
    assert!(roster.iter().all(|p| p.active));
    assert_eq!(game.active_players(), vec![alice, bob]);
}

#[test]
fn six_player_game_runs_to_completion() {
    let mut game = Game::new(1);
    let ids: Vec<_> = ["P1", "P2", "P3", "P4", "P5", "P6"]
        .iter()
        .map(|n| game.register(n).unwrap())
        .collect();
    game.start().unwrap();

    // Simple driver: the current player coups the next active player when
    // they can afford it, otherwise gathers.
    let mut steps = 0;
    while game.winner().is_err() && steps < 1000 {
        let current = game.current_player().unwrap();
        let coins = game.participant(current).unwrap().coins();

        if coins >= 7 {
            let victim = game
                .active_players()
                .into_iter()
                .find(|&p| p != current)
                .expect("at least two active players");
            game.coup(current, victim).unwrap();
        } else {
            game.gather(current).unwrap();
        }
        steps += 1;
    }

    let winner = game.winner().unwrap().to_string();
    assert!(ids
        .iter()
        .any(|&id| game.participant(id).unwrap().name() == winner));
    assert_eq!(game.active_count(), 1);
}
