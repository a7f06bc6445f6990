//! Perft (performance test) for move generation correctness verification.

use crate::chess_move::Move;
use crate::make_move::{apply, undo};
use crate::movegen::legal_moves;
use crate::position::Position;

/// Count the number of leaf nodes at the given depth.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number of
/// legal moves (bulk-counting: no apply/undo needed at the leaf).
pub fn perft(position: &mut Position, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = legal_moves(position);

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in &moves {
        apply(position, mv);
        nodes += perft(position, depth - 1);
        undo(position, mv);
    }
    nodes
}

fn uci_like(mv: &Move) -> String {
    let mut s = format!("{}{}", mv.from, mv.to);
    if let Some(promo) = mv.promotion {
        s.push(promo.fen_char());
    }
    s
}

/// Run perft with a per-move breakdown, sorted alphabetically by move string.
/// Useful when diagnosing a node-count mismatch against a known-correct tool.
pub fn divide(position: &mut Position, depth: usize) -> Vec<(String, u64)> {
    let moves = legal_moves(position);
    let mut results: Vec<(String, u64)> = moves
        .iter()
        .map(|mv| {
            apply(position, mv);
            let count = if depth <= 1 { 1 } else { perft(position, depth - 1) };
            undo(position, mv);
            (uci_like(mv), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
