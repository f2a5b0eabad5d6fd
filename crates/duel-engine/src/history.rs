//! Move history and captured-piece tallies.

use crate::label::move_label;
use duel_core::{Board, Color, Move, Piece, PieceKind, Square};
use serde::{Deserialize, Serialize};

/// One applied ply, with the board as it stood before the move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    /// The piece that moved, as it was before the move.
    pub piece: Piece,
    /// The piece that stood on `to`, if any.
    pub captured: Option<Piece>,
    /// Full board snapshot taken before the move.
    pub board_before: Board,
}

impl MoveRecord {
    /// Returns the move as a from/to pair.
    #[inline]
    pub const fn mov(&self) -> Move {
        Move::new(self.from, self.to)
    }

    /// Returns the short label for this move (e.g., "Bf1xb5").
    pub fn label(&self) -> String {
        move_label(self)
    }
}

/// Piece kinds removed from the board, grouped by the color they belonged to.
///
/// `white` holds the white pieces black has captured, and vice versa.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CapturedPieces {
    pub white: Vec<PieceKind>,
    pub black: Vec<PieceKind>,
}

impl CapturedPieces {
    /// Returns the kinds captured from `color`, oldest first.
    pub fn from(&self, color: Color) -> &[PieceKind] {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    fn list_mut(&mut self, color: Color) -> &mut Vec<PieceKind> {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    /// Appends a captured piece under its own color.
    pub fn record(&mut self, piece: Piece) {
        self.list_mut(piece.color).push(piece.kind);
    }

    /// Removes the most recent entry matching `piece`. Returns false if none exists.
    pub fn unrecord(&mut self, piece: Piece) -> bool {
        let list = self.list_mut(piece.color);
        match list.iter().rposition(|&kind| kind == piece.kind) {
            Some(index) => {
                list.remove(index);
                true
            }
            None => false,
        }
    }

    /// Total number of captured pieces of both colors.
    pub fn len(&self) -> usize {
        self.white.len() + self.black.len()
    }

    pub fn is_empty(&self) -> bool {
        self.white.is_empty() && self.black.is_empty()
    }

    pub fn clear(&mut self) {
        self.white.clear();
        self.black.clear();
    }
}

/// Stack of applied moves, most recent last.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct History {
    records: Vec<MoveRecord>,
}

impl History {
    pub const fn new() -> Self {
        History {
            records: Vec::new(),
        }
    }

    pub fn push(&mut self, record: MoveRecord) {
        self.records.push(record);
    }

    pub fn pop(&mut self) -> Option<MoveRecord> {
        self.records.pop()
    }

    pub fn last(&self) -> Option<&MoveRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn as_slice(&self) -> &[MoveRecord] {
        &self.records
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
