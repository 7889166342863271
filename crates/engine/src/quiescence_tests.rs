use std::str::FromStr;

use crate::eval::INFINITY;

use super::*;

fn quiesce(fen: &str) -> Score {
    let board = Board::from_str(fen).unwrap();
    let mut nodes = 0;
    quiescence(&board, -INFINITY, INFINITY, &mut nodes)
}

#[test]
fn quiet_position_returns_the_static_eval() {
    let fens = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "8/5k2/3p4/8/8/3P4/5K2/8 w - - 0 1",
    ];
    for fen in fens {
        let board = Board::from_str(fen).unwrap();
        assert_eq!(quiesce(fen), evaluate(&board), "{fen}");
    }
}

#[test]
fn a_hanging_queen_is_collected() {
    // The e4 pawn takes the undefended queen on d5.
    let fen = "4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1";
    let board = Board::from_str(fen).unwrap();
    assert!(quiesce(fen) > evaluate(&board) + 800);
}

#[test]
fn a_losing_exchange_is_declined() {
    // Nxd6 would trade the knight for a defended pawn; standing pat
    // keeps the static score.
    let fen = "4k3/2p5/3p4/8/4N3/8/8/4K3 w - - 0 1";
    let board = Board::from_str(fen).unwrap();
    assert_eq!(quiesce(fen), evaluate(&board));
}

#[test]
fn checkmate_and_stalemate_are_adjudicated_first() {
    let mated = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3";
    assert_eq!(quiesce(mated), -MATE);

    let stalemate = "k7/8/1Q6/8/8/8/8/1K6 b - - 0 1";
    assert_eq!(quiesce(stalemate), DRAW);
}
