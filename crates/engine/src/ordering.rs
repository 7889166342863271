//! Move ordering for alpha-beta pruning.
//!
//! Moves likely to cause a cutoff are searched first: winning captures
//! (MVV-LVA), then killers and promotions, with quiet moves onto squares
//! the opponent controls pushed to the back.

use std::cmp::Reverse;

use chess::{Board, ChessMove, Piece};

use crate::attacks::{captured_piece, is_capture, is_square_attacked};
use crate::eval::{piece_value, Score};
use crate::killers::KillerTable;

/// Ordering score for a killer move. Above every capture score
/// (the best capture, pawn takes queen, reaches 8 900).
const KILLER_BONUS: Score = 10_000;

/// Flat ordering bonus for promotions.
const PROMOTION_BONUS: Score = 900;

/// MVV-LVA: most valuable victim first, least valuable attacker as the
/// tie-break. En passant takes a pawn. Only meaningful for captures.
pub(crate) fn capture_score(board: &Board, mv: ChessMove) -> Score {
    let victim = captured_piece(board, mv).unwrap_or(Piece::Pawn);
    let attacker = board.piece_on(mv.get_source()).unwrap_or(Piece::Pawn);
    10 * piece_value(victim) - piece_value(attacker)
}

/// Ordering score for `mv` at `ply`; higher sorts earlier. The first
/// matching rule wins:
///
/// 1. captures by MVV-LVA,
/// 2. quiet killer moves recorded at this ply,
/// 3. promotions,
/// 4. moves onto a square the opponent attacks (penalized by the value
///    of the piece being hung),
/// 5. everything else at zero.
pub fn move_score(board: &Board, mv: ChessMove, ply: usize, killers: &KillerTable) -> Score {
    if is_capture(board, mv) {
        return capture_score(board, mv);
    }
    if killers.contains(ply, mv) {
        return KILLER_BONUS;
    }
    if mv.get_promotion().is_some() {
        return PROMOTION_BONUS;
    }
    if is_square_attacked(board, mv.get_dest(), !board.side_to_move()) {
        let mover = board.piece_on(mv.get_source()).unwrap_or(Piece::Pawn);
        return -piece_value(mover);
    }
    0
}

/// Sorts `moves` so the likeliest cutoffs come first. The sort is
/// stable: equally scored moves keep their generation order.
pub fn order_moves(board: &Board, moves: &mut [ChessMove], ply: usize, killers: &KillerTable) {
    moves.sort_by_cached_key(|&mv| Reverse(move_score(board, mv, ply, killers)));
}

/// Sorts captures for quiescence by MVV-LVA alone.
pub(crate) fn order_captures(board: &Board, moves: &mut [ChessMove]) {
    moves.sort_by_cached_key(|&mv| Reverse(capture_score(board, mv)));
}

#[cfg(test)]
#[path = "ordering_tests.rs"]
mod ordering_tests;
