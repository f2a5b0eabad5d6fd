//! Position representation: the board, the side to move, and the king index.

use duel_core::{Board, Color, Piece, PieceKind, PlacementError, Square};
use serde::{Deserialize, Serialize};

/// Where each color's king stands.
///
/// Kept in step with the board so check tests do not need a board scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct KingPositions {
    pub white: Option<Square>,
    pub black: Option<Square>,
}

impl KingPositions {
    /// Locates both kings by scanning the board.
    pub fn scan(board: &Board) -> Self {
        KingPositions {
            white: board.find_king(Color::White),
            black: board.find_king(Color::Black),
        }
    }

    #[inline]
    pub const fn get(&self, color: Color) -> Option<Square> {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    #[inline]
    pub fn set(&mut self, color: Color, sq: Option<Square>) {
        match color {
            Color::White => self.white = sq,
            Color::Black => self.black = sq,
        }
    }
}

/// A board together with the side to move.
///
/// Serialized as the board and side to move only; the king index is rebuilt
/// on deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "PositionParts", into = "PositionParts")]
pub struct Position {
    /// Piece placement. Only changed through `play` and `restore`.
    board: Board,

    /// The side to move.
    pub side_to_move: Color,

    /// King squares, kept equal to the kings on `board`.
    kings: KingPositions,
}

#[derive(Serialize, Deserialize)]
struct PositionParts {
    board: Board,
    side_to_move: Color,
}

impl From<PositionParts> for Position {
    fn from(parts: PositionParts) -> Self {
        Position::new(parts.board, parts.side_to_move)
    }
}

impl From<Position> for PositionParts {
    fn from(position: Position) -> Self {
        PositionParts {
            board: position.board,
            side_to_move: position.side_to_move,
        }
    }
}

impl Position {
    /// Creates a position from a board, locating the kings.
    pub fn new(board: Board, side_to_move: Color) -> Self {
        Position {
            board,
            side_to_move,
            kings: KingPositions::scan(&board),
        }
    }

    /// Creates the standard starting position, white to move.
    pub fn startpos() -> Self {
        Self::new(Board::standard(), Color::White)
    }

    /// Creates a position from placement notation.
    pub fn from_placement(placement: &str, side_to_move: Color) -> Result<Self, PlacementError> {
        Ok(Self::new(Board::from_placement(placement)?, side_to_move))
    }

    /// Returns the piece placement.
    #[inline]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the king index.
    #[inline]
    pub const fn kings(&self) -> KingPositions {
        self.kings
    }

    /// Returns the square of `color`'s king, if it is on the board.
    #[inline]
    pub const fn king(&self, color: Color) -> Option<Square> {
        self.kings.get(color)
    }

    /// Returns the piece on the given square, if any.
    #[inline]
    pub const fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.get(sq)
    }

    /// Plays a move without checking it, returning the captured piece.
    ///
    /// The piece on `from` goes to `to`, the king index follows a king move
    /// (or loses a captured king), and the side to move flips.
    pub fn play(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving = self.board.get(from);
        let captured = self.board.relocate(from, to);
        if let Some(taken) = captured.filter(|p| p.kind == PieceKind::King) {
            self.kings.set(taken.color, None);
        }
        if let Some(piece) = moving.filter(|p| p.kind == PieceKind::King) {
            self.kings.set(piece.color, Some(to));
        }
        self.side_to_move = self.side_to_move.opposite();
        captured
    }

    /// Returns the position after playing a move, leaving `self` untouched.
    pub fn after(&self, from: Square, to: Square) -> Position {
        let mut next = *self;
        next.play(from, to);
        next
    }

    /// Replaces the board (e.g., from a history snapshot) and rescans the kings.
    pub fn restore(&mut self, board: Board, side_to_move: Color) {
        self.board = board;
        self.side_to_move = side_to_move;
        self.kings = KingPositions::scan(&board);
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}
