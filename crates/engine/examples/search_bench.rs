//! Search benchmark for profiling with cargo-flamegraph.
//!
//! Runs fixed-depth searches over positions from different game phases
//! and reports nodes and nodes/sec per position.
//!
//! Usage:
//!   cargo flamegraph --example search_bench -p cobalt_engine

use std::str::FromStr;
use std::time::Instant;

use chess::Board;
use cobalt_engine::{pick_best_move, KillerTable};

/// Positions covering different game phases and complexity levels
const TEST_POSITIONS: &[(&str, &str)] = &[
    (
        "Start",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    ),
    (
        "Sicilian",
        "rnbqkbnr/pp1ppppp/8/2p5/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2",
    ),
    (
        "Kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    ),
    (
        "Complex",
        "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 1",
    ),
    ("Rook endgame", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1"),
];

const DEPTH: u8 = 4;

fn main() {
    println!("=== Search Benchmark ===");
    println!("Depth per position: {DEPTH}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = std::time::Duration::ZERO;

    for (name, fen) in TEST_POSITIONS {
        let board = Board::from_str(fen).expect("valid test FEN");
        let mut killers = KillerTable::new();
        let mut nodes = 0u64;

        print!("{name:.<20}");

        let start = Instant::now();
        let result = pick_best_move(&board, DEPTH, &mut killers, &mut nodes);
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;

        let nps = if elapsed.as_secs_f64() > 0.0 {
            nodes as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };
        let best = result.map(|(mv, _)| mv.to_string()).unwrap_or_default();

        println!(" {best:>6} {nodes:>10} nodes, {nps:>10.0} nodes/sec ({elapsed:>8.3?})");
    }

    println!();
    println!("{:=<70}", "");
    let avg_nps = if total_time.as_secs_f64() > 0.0 {
        total_nodes as f64 / total_time.as_secs_f64()
    } else {
        0.0
    };
    println!("TOTAL: {total_nodes} nodes in {total_time:.3?} ({avg_nps:.0} nodes/sec)");
}
