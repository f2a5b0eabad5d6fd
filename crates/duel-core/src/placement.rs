//! Board placement notation (the piece-placement field of FEN).
//!
//! Rows are written from row 0 (rank 8) to row 7 (rank 1), separated by `/`.
//! Digits stand for runs of empty squares; letters are pieces, uppercase for
//! white and lowercase for black.

use crate::{Board, Piece, Square};
use thiserror::Error;

/// Errors that can occur when parsing a placement string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("invalid placement: expected 8 rows, got {0}")]
    InvalidRowCount(usize),

    #[error("invalid character '{ch}' in rank {rank}")]
    InvalidCharacter { ch: char, rank: u8 },

    #[error("rank {rank} has {squares} squares, expected 8")]
    InvalidRowWidth { rank: u8, squares: u32 },
}

/// Parses a placement string into a board.
pub fn parse(placement: &str) -> Result<Board, PlacementError> {
    let rows: Vec<&str> = placement.trim().split('/').collect();
    if rows.len() != 8 {
        return Err(PlacementError::InvalidRowCount(rows.len()));
    }

    let mut board = Board::empty();
    for (row, text) in rows.iter().enumerate() {
        let rank = 8 - row as u8;
        let mut col = 0u32;
        for c in text.chars() {
            if let Some(run) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                col += run;
            } else if let Some(piece) = Piece::from_placement_char(c) {
                if let Some(sq) = Square::new(row as u8, col as u8) {
                    board.set(sq, Some(piece));
                }
                col += 1;
            } else {
                return Err(PlacementError::InvalidCharacter { ch: c, rank });
            }
            if col > 8 {
                break;
            }
        }
        if col != 8 {
            return Err(PlacementError::InvalidRowWidth { rank, squares: col });
        }
    }

    Ok(board)
}

/// Writes a board in placement notation.
pub fn write(board: &Board) -> String {
    let mut out = String::with_capacity(64);

    for row in 0..8u8 {
        let mut empty_count = 0;
        for col in 0..8u8 {
            let piece = Square::new(row, col).and_then(|sq| board.get(sq));
            match piece {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    out.push(piece.to_placement_char());
                }
                None => empty_count += 1,
            }
        }
        if empty_count > 0 {
            out.push_str(&empty_count.to_string());
        }
        if row < 7 {
            out.push('/');
        }
    }

    out
}
