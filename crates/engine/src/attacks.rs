//! Capture and attack queries over the rules engine.
//!
//! The `chess` crate answers "which moves are legal"; the ordering and
//! quiescence heuristics additionally need to know what a move captures
//! and which squares the opponent controls. Everything here is derived
//! from the crate's board and attack-table primitives.

use chess::{
    get_bishop_moves, get_king_moves, get_knight_moves, get_pawn_attacks, get_rook_moves, Board,
    ChessMove, Color, Piece, Square, EMPTY,
};

/// True if `mv` is an en passant capture: a pawn moving diagonally onto
/// an empty square can only be taking the just-passed pawn.
pub fn is_en_passant(board: &Board, mv: ChessMove) -> bool {
    board.piece_on(mv.get_source()) == Some(Piece::Pawn)
        && mv.get_source().get_file() != mv.get_dest().get_file()
        && board.piece_on(mv.get_dest()).is_none()
}

/// True if `mv` captures anything, en passant included.
pub fn is_capture(board: &Board, mv: ChessMove) -> bool {
    board.piece_on(mv.get_dest()).is_some() || is_en_passant(board, mv)
}

/// The piece kind `mv` captures, if any. En passant takes a pawn.
pub fn captured_piece(board: &Board, mv: ChessMove) -> Option<Piece> {
    board.piece_on(mv.get_dest()).or_else(|| {
        if is_en_passant(board, mv) {
            Some(Piece::Pawn)
        } else {
            None
        }
    })
}

/// True if any piece of `by` attacks `sq`.
///
/// Works backwards from the target: each piece kind's attack set is
/// looked up from `sq` and intersected with that kind's pieces of the
/// attacking color.
pub fn is_square_attacked(board: &Board, sq: Square, by: Color) -> bool {
    let occupied = *board.combined();
    let them = *board.color_combined(by);

    let straight = (*board.pieces(Piece::Rook) | *board.pieces(Piece::Queen)) & them;
    if get_rook_moves(sq, occupied) & straight != EMPTY {
        return true;
    }
    let diagonal = (*board.pieces(Piece::Bishop) | *board.pieces(Piece::Queen)) & them;
    if get_bishop_moves(sq, occupied) & diagonal != EMPTY {
        return true;
    }
    if get_knight_moves(sq) & *board.pieces(Piece::Knight) & them != EMPTY {
        return true;
    }
    // A pawn of `by` attacks sq exactly where a pawn of the other color
    // standing on sq would attack.
    if get_pawn_attacks(sq, !by, *board.pieces(Piece::Pawn) & them) != EMPTY {
        return true;
    }
    get_king_moves(sq) & *board.pieces(Piece::King) & them != EMPTY
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
