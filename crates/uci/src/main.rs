//! UCI front-end for the Cobalt engine.
//!
//! Translates the line-based UCI protocol on stdin/stdout into calls
//! into the engine core and prints the answers back. The search runs
//! synchronously on this thread; the GUI waits for `bestmove`.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use chess::{Board, ChessMove, MoveGen};
use cobalt_engine::{AlphaBetaEngine, Engine};

/// Bounds of the Depth spin option advertised over UCI. The upper bound
/// matches the killer table's ply coverage.
const MIN_DEPTH: u8 = 1;
const MAX_DEPTH: u8 = cobalt_engine::MAX_PLY as u8;
const DEFAULT_DEPTH: u8 = 3;

fn main() {
    env_logger::init();

    // UCI engines communicate via stdin/stdout.
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let mut engine = AlphaBetaEngine::new();
    let mut board = Board::default();
    let mut depth = DEFAULT_DEPTH;

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let parts: Vec<&str> = line.trim().split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0] {
            "uci" => {
                writeln!(stdout, "id name {}", engine.name()).ok();
                writeln!(stdout, "id author {}", engine.author()).ok();
                writeln!(
                    stdout,
                    "option name Depth type spin default {DEFAULT_DEPTH} min {MIN_DEPTH} max {MAX_DEPTH}"
                )
                .ok();
                writeln!(stdout, "uciok").ok();
                stdout.flush().ok();
            }
            "isready" => {
                writeln!(stdout, "readyok").ok();
                stdout.flush().ok();
            }
            "setoption" => {
                // Example: setoption name Depth value 4
                if let Some(d) = parse_depth_option(&parts[1..]) {
                    depth = d.clamp(MIN_DEPTH, MAX_DEPTH);
                } else {
                    log::warn!("ignoring unsupported option: {line}");
                }
            }
            "ucinewgame" => {
                board = Board::default();
                engine.new_game();
            }
            "position" => match parse_position(&parts[1..]) {
                Some(pos) => board = pos,
                None => log::warn!("ignoring malformed position command: {line}"),
            },
            "go" => {
                // Time controls are not supported; search the fixed depth.
                let result = engine.search(&board, depth);
                match result.best_move {
                    Some(mv) => writeln!(stdout, "bestmove {mv}").ok(),
                    None => writeln!(stdout, "bestmove (none)").ok(),
                };
                stdout.flush().ok();
            }
            "quit" => break,
            _ => {
                // Ignore unknown commands, as the protocol requires.
            }
        }
    }
}

/// Parses `setoption name Depth value N`. The option name is matched
/// case-insensitively; GUIs differ on capitalization.
fn parse_depth_option(args: &[&str]) -> Option<u8> {
    let name_at = args.iter().position(|&a| a == "name")?;
    if !args.get(name_at + 1)?.eq_ignore_ascii_case("depth") {
        return None;
    }
    let value_at = args.iter().position(|&a| a == "value")?;
    args.get(value_at + 1)?.parse().ok()
}

/// Builds the board described by a `position` command body:
/// `[startpos | fen <fields>] [moves m1 m2 ...]`.
fn parse_position(args: &[&str]) -> Option<Board> {
    let moves_at = args.iter().position(|&a| a == "moves");
    let setup = &args[..moves_at.unwrap_or(args.len())];

    let mut board = match setup.first() {
        Some(&"startpos") | None => Board::default(),
        Some(&"fen") => Board::from_str(&setup[1..].join(" ")).ok()?,
        Some(_) => return None,
    };

    if let Some(at) = moves_at {
        for &txt in &args[at + 1..] {
            match find_legal_move(&board, txt) {
                Some(mv) => board = board.make_move_new(mv),
                None => {
                    log::warn!("illegal or unparsable move {txt}, ignoring the rest");
                    break;
                }
            }
        }
    }
    Some(board)
}

/// Matches UCI move text against the legal moves, so promotion and
/// castling encodings always agree with the rules engine.
fn find_legal_move(board: &Board, txt: &str) -> Option<ChessMove> {
    MoveGen::new_legal(board).find(|mv| mv.to_string() == txt)
}
