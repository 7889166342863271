//! Negamax search with alpha-beta pruning.

use chess::{Board, BoardStatus, ChessMove, MoveGen};

use crate::attacks::is_capture;
use crate::eval::{Score, DRAW, INFINITY, MATE};
use crate::killers::KillerTable;
use crate::ordering::order_moves;
use crate::quiescence::quiescence;

/// Searches the position and returns the best root move with its score.
///
/// Root moves are tried in generation order and every one is searched
/// over the full window; ties keep the first move found, so the result
/// is deterministic. Returns `None` only when the side to move has no
/// legal moves; in a lost position the first move still comes back.
pub fn pick_best_move(
    board: &Board,
    depth: u8,
    killers: &mut KillerTable,
    nodes: &mut u64,
) -> Option<(ChessMove, Score)> {
    let moves: Vec<ChessMove> = MoveGen::new_legal(board).collect();
    let first = *moves.first()?;

    let mut best = first;
    let mut best_score = -INFINITY;

    for mv in moves {
        let after = board.make_move_new(mv);
        *nodes += 1;
        let score = -search(
            &after,
            depth.saturating_sub(1),
            -INFINITY,
            INFINITY,
            killers,
            nodes,
        );
        if score > best_score {
            best_score = score;
            best = mv;
        }
    }

    Some((best, best_score))
}

/// Recursive negamax over a fail-hard alpha-beta window.
///
/// Checkmate and stalemate are adjudicated before anything else; at
/// depth zero the verdict comes from [`quiescence`], never from a flat
/// evaluation. A quiet move that fails high is remembered in the killer
/// table for its ply.
pub fn search(
    board: &Board,
    depth: u8,
    mut alpha: Score,
    beta: Score,
    killers: &mut KillerTable,
    nodes: &mut u64,
) -> Score {
    match board.status() {
        BoardStatus::Checkmate => return -MATE,
        BoardStatus::Stalemate => return DRAW,
        BoardStatus::Ongoing => {}
    }

    if depth == 0 {
        return quiescence(board, alpha, beta, nodes);
    }

    let mut moves: Vec<ChessMove> = MoveGen::new_legal(board).collect();
    // An ongoing position always has a legal move; running dry here
    // means the rules engine broke its contract.
    debug_assert!(!moves.is_empty());
    order_moves(board, &mut moves, depth as usize, killers);

    for mv in moves {
        let after = board.make_move_new(mv);
        *nodes += 1;
        let score = -search(&after, depth - 1, -beta, -alpha, killers, nodes);
        if score >= beta {
            // Fail high: the opponent will not allow this line. Quiet
            // cutoff moves are worth trying early in sibling nodes.
            if !is_capture(board, mv) {
                killers.update(depth as usize, mv);
            }
            return beta;
        }
        if score > alpha {
            alpha = score;
        }
    }

    alpha
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
