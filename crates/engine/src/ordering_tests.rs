use std::str::FromStr;

use chess::MoveGen;

use super::*;

fn legal(board: &Board, uci: &str) -> ChessMove {
    MoveGen::new_legal(board)
        .find(|mv| mv.to_string() == uci)
        .unwrap_or_else(|| panic!("{uci} is not legal here"))
}

#[test]
fn mvv_lva_prefers_cheap_attacker_on_fat_victim() {
    // White can play PxQ (e4d5), PxP (e4f5) or QxP (f2f5).
    let board = Board::from_str("k7/8/8/3q1p2/4P3/8/5Q2/K7 w - - 0 1").unwrap();
    let none = KillerTable::new();

    let pawn_takes_queen = move_score(&board, legal(&board, "e4d5"), 1, &none);
    let pawn_takes_pawn = move_score(&board, legal(&board, "e4f5"), 1, &none);
    let queen_takes_pawn = move_score(&board, legal(&board, "f2f5"), 1, &none);

    assert!(pawn_takes_queen > pawn_takes_pawn);
    assert!(pawn_takes_pawn > queen_takes_pawn);
    assert_eq!(pawn_takes_queen, 10 * 900 - 100);
}

#[test]
fn killers_outrank_every_capture() {
    let board = Board::from_str("k7/8/8/3q1p2/4P3/8/5Q2/K7 w - - 0 1").unwrap();
    let mut killers = KillerTable::new();
    let quiet = legal(&board, "f2e2");
    killers.update(4, quiet);

    let killer_score = move_score(&board, quiet, 4, &killers);
    let best_capture = move_score(&board, legal(&board, "e4d5"), 4, &killers);

    assert!(killer_score > best_capture);
    // The killer bonus applies only at its own ply.
    assert!(move_score(&board, quiet, 3, &killers) < killer_score);
}

#[test]
fn quiet_promotions_get_their_bonus() {
    let board = Board::from_str("8/P6k/8/8/8/8/8/K7 w - - 0 1").unwrap();
    let none = KillerTable::new();

    let promote = move_score(&board, legal(&board, "a7a8q"), 1, &none);
    let king_step = move_score(&board, legal(&board, "a1b1"), 1, &none);

    assert!(promote > king_step);
    assert!(promote > 0);
}

#[test]
fn hanging_a_piece_is_penalized() {
    // White knight on e2; Black rook on d6 covers d4.
    let board = Board::from_str("k7/8/3r4/8/8/8/4N3/K7 w - - 0 1").unwrap();
    let none = KillerTable::new();

    let into_the_rook = move_score(&board, legal(&board, "e2d4"), 1, &none);
    let safe_hop = move_score(&board, legal(&board, "e2g3"), 1, &none);

    assert_eq!(into_the_rook, -piece_value(Piece::Knight));
    assert_eq!(safe_hop, 0);
}

#[test]
fn order_moves_puts_the_capture_first() {
    let board = Board::from_str("k7/8/8/3q1p2/4P3/8/5Q2/K7 w - - 0 1").unwrap();
    let none = KillerTable::new();
    let mut moves: Vec<ChessMove> = MoveGen::new_legal(&board).collect();

    order_moves(&board, &mut moves, 1, &none);

    assert_eq!(moves[0], legal(&board, "e4d5"));
}

#[test]
fn killer_is_tried_before_ordinary_quiets() {
    let board = Board::default();
    let mut killers = KillerTable::new();
    let nf3 = legal(&board, "g1f3");
    killers.update(2, nf3);

    let mut moves: Vec<ChessMove> = MoveGen::new_legal(&board).collect();
    order_moves(&board, &mut moves, 2, &killers);

    // No captures exist at the start, so the killer leads outright.
    assert_eq!(moves[0], nf3);
}
