//! The 8×8 board grid.

use crate::{placement, Color, Piece, PieceKind, PlacementError, Square};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An 8×8 grid where each cell holds a piece or is empty.
///
/// `Board` is `Copy`: every clone is a fully independent snapshot, which the
/// engine relies on when it tries out hypothetical moves.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Placement string of the standard starting position.
    pub const STANDARD_PLACEMENT: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    /// Back-row order from the `a` file to the `h` file.
    pub const BACK_ROW: [PieceKind; 8] = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];

    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// Creates the standard starting position.
    pub fn standard() -> Self {
        let mut board = Board::empty();
        for color in Color::ALL {
            let back = color.back_row() as usize;
            let pawns = color.pawn_start_row() as usize;
            for (col, kind) in Self::BACK_ROW.into_iter().enumerate() {
                board.cells[back][col] = Some(Piece::new(color, kind));
                board.cells[pawns][col] = Some(Piece::new(color, PieceKind::Pawn));
            }
        }
        board
    }

    /// Parses a board from placement notation.
    pub fn from_placement(s: &str) -> Result<Self, PlacementError> {
        placement::parse(s)
    }

    /// Writes the board in placement notation.
    pub fn to_placement(&self) -> String {
        placement::write(self)
    }

    /// Returns the piece on the given square, if any.
    #[inline]
    pub const fn get(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize]
    }

    /// Returns true if no piece stands on the square.
    #[inline]
    pub const fn is_empty_at(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    /// Places a piece on (or clears) a square.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.cells[sq.row() as usize][sq.col() as usize] = piece;
    }

    /// Removes and returns the piece on a square.
    #[inline]
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize].take()
    }

    /// Moves whatever stands on `from` to `to`, returning the displaced occupant of `to`.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving = self.take(from);
        let captured = self.get(to);
        self.set(to, moving);
        captured
    }

    /// Returns a copy of the board with the piece on `from` moved to `to`.
    pub fn with_move(&self, from: Square, to: Square) -> Board {
        let mut next = *self;
        next.relocate(from, to);
        next
    }

    /// Finds the square holding the given color's king.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, p)| p.color == color && p.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Iterates over occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|p| (sq, p)))
    }

    /// Iterates over the squares holding pieces of the given color.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color == color)
    }

    /// Counts pieces matching the given color and kind.
    pub fn count(&self, color: Color, kind: PieceKind) -> usize {
        self.pieces_of(color).filter(|(_, p)| p.kind == kind).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_placement())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{} ", 8 - row)?;
            for cell in cells {
                let c = cell.map_or('.', |p| p.to_placement_char());
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "  abcdefgh")
    }
}
