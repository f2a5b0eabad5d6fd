//! Whole-game scenarios driven through the public API.

use duel_engine::{
    Color, Game, GameError, Outcome, Piece, PieceKind, Position, Rejection, RulesConfig, Square,
};

fn sq(name: &str) -> Square {
    Square::from_algebraic(name).unwrap()
}

fn play(game: &mut Game, moves: &[&str]) {
    for m in moves {
        if let Err(e) = game.apply_uci(m) {
            panic!("{m}: {e}");
        }
    }
}

#[test]
fn fools_mate() {
    let mut game = Game::new();
    play(&mut game, &["f2f3", "e7e5", "g2g4"]);
    assert_eq!(game.outcome(), Outcome::Normal);

    let result = game.apply_move(sq("d8"), sq("h4"));
    assert!(result.applied);
    assert!(result.status.checkmate);
    assert!(result.status.in_check);
    assert!(!result.status.stalemate);
    assert_eq!(result.status.active_player, Color::White);
    assert_eq!(
        game.outcome(),
        Outcome::Checkmate {
            winner: Color::Black
        }
    );
    assert!(game.legal_moves().is_empty());
    assert_eq!(game.history_text(), "1. f2f3 e7e5 2. g2g4 Qd8h4");
}

#[test]
fn scholars_mate() {
    let mut game = Game::new();
    play(
        &mut game,
        &["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7"],
    );
    assert_eq!(
        game.outcome(),
        Outcome::Checkmate {
            winner: Color::White
        }
    );
    assert_eq!(game.captured().from(Color::Black), &[PieceKind::Pawn]);
    assert_eq!(game.history().last().unwrap().label(), "Qh5xf7");
}

#[test]
fn stalemate_kings_and_queen() {
    let game = Game::from_placement(
        "8/8/8/8/8/k7/2q5/K7",
        Color::White,
        RulesConfig::default(),
    )
    .unwrap();
    let status = game.status();
    assert!(status.stalemate);
    assert!(!status.in_check);
    assert!(!status.checkmate);
    assert!(game.is_game_over());
}

#[test]
fn stalemate_reached_by_move() {
    let mut game = Game::from_placement(
        "7k/8/6K1/8/8/8/8/5Q2",
        Color::White,
        RulesConfig::default(),
    )
    .unwrap();
    assert_eq!(game.outcome(), Outcome::Normal);
    let result = game.apply_move(sq("f1"), sq("f7"));
    assert!(result.applied);
    assert!(result.status.stalemate);
    assert_eq!(result.status.active_player, Color::Black);
    assert_eq!(game.apply_uci("h8g8"), Err(GameError::GameOver));
}

#[test]
fn pawn_double_step_only_from_start_row() {
    let mut game = Game::new();
    play(&mut game, &["e2e3", "a7a6"]);
    assert!(!game.is_legal(sq("e3"), sq("e5")));
    assert!(game.is_legal(sq("e3"), sq("e4")));
    assert!(matches!(
        game.try_move(sq("e3"), sq("e5")),
        Err(GameError::Illegal(Rejection::IllegalShape { .. }))
    ));

    // Black pawn, likewise.
    play(&mut game, &["h2h3"]);
    assert!(!game.is_legal(sq("a6"), sq("a4")));
    assert!(game.is_legal(sq("a6"), sq("a5")));
}

// The square a pawn passes over on its double step must be empty by default.
// `LANDING_SQUARE_ONLY` keeps the looser rule that only checks where it lands.
#[test]
fn double_step_over_piece_rejected_by_default() {
    let mut game = Game::new();
    play(&mut game, &["b1c3", "a7a6"]);
    // The knight on c3 sits in front of the c2 pawn.
    assert!(!game.is_legal(sq("c2"), sq("c4")));
    assert!(!game.is_legal(sq("c2"), sq("c3")));
}

#[test]
fn double_step_over_piece_allowed_when_landing_only() {
    let mut game = Game::with_config(RulesConfig::LANDING_SQUARE_ONLY);
    play(&mut game, &["b1c3", "a7a6"]);
    assert!(game.is_legal(sq("c2"), sq("c4")));
    let result = game.apply_move(sq("c2"), sq("c4"));
    assert!(result.applied);
    assert_eq!(
        game.board().get(sq("c4")),
        Some(Piece::new(Color::White, PieceKind::Pawn))
    );
    assert_eq!(
        game.board().get(sq("c3")),
        Some(Piece::new(Color::White, PieceKind::Knight))
    );
}

#[test]
fn config_loaded_from_toml() {
    let config = RulesConfig::from_toml_str("double_step_requires_clear_path = false").unwrap();
    assert_eq!(config, RulesConfig::LANDING_SQUARE_ONLY);
    let mut game = Game::with_config(config);
    play(&mut game, &["b1c3", "a7a6"]);
    assert!(game.is_legal(sq("c2"), sq("c4")));

    // An empty file keeps the defaults.
    let mut game = Game::with_config(RulesConfig::from_toml_str("").unwrap());
    play(&mut game, &["b1c3", "a7a6"]);
    assert!(!game.is_legal(sq("c2"), sq("c4")));

    // Jumping an enemy pawn is allowed too, but a single push into it is not.
    let mut game = Game::with_config(RulesConfig::LANDING_SQUARE_ONLY);
    play(&mut game, &["b1c3", "e7e5", "c3d5", "e5e4", "d5c3", "e4e3"]);
    assert!(game.is_legal(sq("e2"), sq("e4")));
    assert!(!game.is_legal(sq("e2"), sq("e3")));
    assert!(game.is_legal(sq("d2"), sq("e3")));
}

#[test]
fn knight_jumps_out_of_a_ring() {
    let game = Game::from_placement(
        "4k3/8/8/2PPP3/2PNP3/2PPP3/8/4K3",
        Color::White,
        RulesConfig::default(),
    )
    .unwrap();
    let mut dests: Vec<String> = game
        .legal_destinations(sq("d4"))
        .into_iter()
        .map(|s| s.to_algebraic())
        .collect();
    dests.sort();
    assert_eq!(dests, vec!["b3", "b5", "c2", "c6", "e2", "e6", "f3", "f5"]);

    // From the start position the b1 knight jumps over the pawn wall.
    let game = Game::new();
    assert!(game.is_legal(sq("b1"), sq("c3")));
    assert!(game.is_legal(sq("g1"), sq("h3")));
}

#[test]
fn captures_and_history_grow_and_shrink_together() {
    let mut game = Game::new();
    let moves = ["e2e4", "d7d5", "e4d5", "d8d5", "b1c3", "d5a2", "a1a2"];
    let mut sizes = vec![(0, 0)];
    for m in moves {
        game.apply_uci(m).unwrap();
        sizes.push((game.ply_count(), game.captured().len()));
    }
    assert_eq!(
        sizes,
        vec![(0, 0), (1, 0), (2, 0), (3, 1), (4, 2), (5, 2), (6, 3), (7, 4)]
    );
    assert_eq!(
        game.captured().from(Color::Black),
        &[PieceKind::Pawn, PieceKind::Queen]
    );
    assert_eq!(
        game.captured().from(Color::White),
        &[PieceKind::Pawn, PieceKind::Pawn]
    );

    for expected in sizes.iter().rev().skip(1) {
        assert!(game.undo_move());
        assert_eq!((game.ply_count(), game.captured().len()), *expected);
    }
    assert!(!game.undo_move());
}

#[test]
fn undo_removes_latest_matching_capture() {
    let mut game = Game::new();
    play(&mut game, &["e2e4", "d7d5", "e4d5", "c7c6", "d5c6", "b8c6"]);
    assert_eq!(
        game.captured().from(Color::Black),
        &[PieceKind::Pawn, PieceKind::Pawn]
    );
    assert_eq!(game.captured().from(Color::White), &[PieceKind::Pawn]);

    assert!(game.undo_move());
    assert!(game.captured().from(Color::White).is_empty());
    assert!(game.undo_move());
    assert_eq!(game.captured().from(Color::Black), &[PieceKind::Pawn]);
}

#[test]
fn check_must_be_answered() {
    let mut game = Game::new();
    play(&mut game, &["e2e4", "f7f5", "d1h5"]);
    assert_eq!(game.outcome(), Outcome::Check);
    assert_eq!(
        game.try_move(sq("a7"), sq("a6")),
        Err(GameError::Illegal(Rejection::LeavesKingInCheck))
    );
    assert!(game.is_legal(sq("g7"), sq("g6")));
    let status = game.apply_uci("g7g6").unwrap();
    assert!(!status.in_check);
}

#[test]
fn new_game_after_checkmate() {
    let mut game = Game::new();
    play(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);
    assert!(game.is_game_over());
    game.new_game();
    assert!(!game.is_game_over());
    assert_eq!(game.active_player(), Color::White);
    assert_eq!(game.legal_moves().len(), 20);
    assert!(game.history().is_empty());
}

#[test]
fn snapshot_serializes_for_collaborators() {
    let mut game = Game::new();
    play(&mut game, &["e2e4", "d7d5", "e4d5"]);
    let status = serde_json::to_value(game.status()).unwrap();
    assert_eq!(status["active_player"], "black");
    assert_eq!(status["in_check"], false);

    let captured = serde_json::to_value(game.captured()).unwrap();
    assert_eq!(captured["black"][0], "pawn");

    let record = serde_json::to_string(&game.history()[2]).unwrap();
    let back: duel_engine::MoveRecord = serde_json::from_str(&record).unwrap();
    assert_eq!(back, game.history()[2]);
}

#[test]
fn perft_from_a_played_position() {
    let mut game = Game::new();
    play(&mut game, &["e2e4", "e7e5"]);
    let position = *game.position();
    let config = *game.config();
    assert_eq!(duel_engine::perft(&position, 1, &config), game.legal_moves().len() as u64);
    assert_eq!(duel_engine::perft(&Position::startpos(), 2, &config), 400);

    let divide = duel_engine::perft::perft_divide(&position, 1, &config);
    assert!(divide.iter().any(|(m, _)| m == "e1e2"));
    assert!(divide.iter().all(|(_, nodes)| *nodes == 1));
}
