//! Perft (performance test) for legality validation.
//!
//! Perft counts the leaf nodes of the legal-move tree to a given depth, which
//! can be compared against known-correct values. Castling, en passant and
//! promotion cannot occur from the starting position before depth 5, so the
//! standard counts apply up to depth 4.

use crate::legality::legal_moves;
use crate::{Position, RulesConfig};

/// Counts the number of leaf nodes at the given depth.
pub fn perft(position: &Position, depth: u32, config: &RulesConfig) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = legal_moves(position, config);

    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .iter()
        .map(|m| perft(&position.after(m.from, m.to), depth - 1, config))
        .sum()
}

/// Perft with divide: node counts below each root move, sorted by move.
pub fn perft_divide(position: &Position, depth: u32, config: &RulesConfig) -> Vec<(String, u64)> {
    let mut results: Vec<(String, u64)> = legal_moves(position, config)
        .into_iter()
        .map(|m| {
            let nodes = if depth > 1 {
                perft(&position.after(m.from, m.to), depth - 1, config)
            } else {
                1
            };
            (m.to_coordinate(), nodes)
        })
        .collect();

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
