//! Move legality.
//!
//! A move is checked in a fixed order, cheapest test first:
//! 1. both squares on the board
//! 2. a piece of the side to move on the origin
//! 3. no piece of the same color on the destination
//! 4. the piece's movement shape (including obstruction)
//! 5. the mover's king is not attacked once the move is played
//!
//! The last step plays the move on a copy of the board, so a rejected
//! candidate never touches the caller's board.

use crate::attacks::{deltas, piece_attacks, would_be_in_check};
use crate::{Position, RulesConfig};
use duel_core::{Board, Move, Piece, PieceKind, Square};
use thiserror::Error;

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("square is off the board")]
    OutOfBounds,

    #[error("no piece on {0}")]
    EmptyOrigin(Square),

    #[error("piece on {0} belongs to the other player")]
    NotYourPiece(Square),

    #[error("{0} is occupied by a piece of the same color")]
    SelfCapture(Square),

    #[error("{kind} cannot move from {from} to {to}")]
    IllegalShape {
        kind: PieceKind,
        from: Square,
        to: Square,
    },

    #[error("move would leave the king in check")]
    LeavesKingInCheck,
}

/// Returns true if `piece` on `from` may move to `to` by its movement shape.
///
/// Occupancy of the destination by a friendly piece is not considered here.
/// Only pawns differ from their attack geometry: they advance straight onto
/// empty squares and move diagonally only to capture.
pub fn has_valid_shape(
    board: &Board,
    piece: Piece,
    from: Square,
    to: Square,
    config: &RulesConfig,
) -> bool {
    if piece.kind != PieceKind::Pawn {
        return piece_attacks(board, piece, from, to);
    }

    let (d_row, d_col) = deltas(from, to);
    let direction = piece.color.pawn_direction();

    if d_col == 0 {
        if d_row == direction {
            return board.is_empty_at(to);
        }
        if d_row == 2 * direction && from.row() == piece.color.pawn_start_row() {
            let passed_clear = !config.double_step_requires_clear_path
                || from
                    .offset(direction, 0)
                    .is_some_and(|passed| board.is_empty_at(passed));
            return passed_clear && board.is_empty_at(to);
        }
        false
    } else if d_col.abs() == 1 && d_row == direction {
        board.get(to).is_some_and(|target| target.color != piece.color)
    } else {
        false
    }
}

/// Checks whether the side to move may move the piece on `from` to `to`.
pub fn check_move(
    position: &Position,
    from: Square,
    to: Square,
    config: &RulesConfig,
) -> Result<(), Rejection> {
    let board = position.board();
    let active = position.side_to_move;

    let piece = board.get(from).ok_or(Rejection::EmptyOrigin(from))?;
    if piece.color != active {
        return Err(Rejection::NotYourPiece(from));
    }

    if board.get(to).is_some_and(|target| target.color == piece.color) {
        return Err(Rejection::SelfCapture(to));
    }

    if !has_valid_shape(board, piece, from, to, config) {
        return Err(Rejection::IllegalShape {
            kind: piece.kind,
            from,
            to,
        });
    }

    let after = board.with_move(from, to);
    let king = if piece.kind == PieceKind::King {
        Some(to)
    } else {
        position.king(active)
    };
    if king.is_some_and(|king| would_be_in_check(&after, active, king)) {
        return Err(Rejection::LeavesKingInCheck);
    }

    Ok(())
}

/// Checks a move given as raw coordinates, which may lie off the board.
///
/// The destination is bounds-checked before the origin.
pub fn check_move_coords(
    position: &Position,
    from: (i32, i32),
    to: (i32, i32),
    config: &RulesConfig,
) -> Result<(), Rejection> {
    let to = Square::from_coords(to.0, to.1).ok_or(Rejection::OutOfBounds)?;
    let from = Square::from_coords(from.0, from.1).ok_or(Rejection::OutOfBounds)?;
    check_move(position, from, to, config)
}

/// Returns true if the side to move may move the piece on `from` to `to`.
pub fn is_legal(position: &Position, from: Square, to: Square, config: &RulesConfig) -> bool {
    check_move(position, from, to, config).is_ok()
}

/// Raw-coordinate variant of [`is_legal`]; off-board squares are never legal.
pub fn is_legal_coords(
    position: &Position,
    from: (i32, i32),
    to: (i32, i32),
    config: &RulesConfig,
) -> bool {
    check_move_coords(position, from, to, config).is_ok()
}

/// Returns every square the piece on `from` may legally move to.
pub fn legal_destinations(position: &Position, from: Square, config: &RulesConfig) -> Vec<Square> {
    Square::all()
        .filter(|&to| is_legal(position, from, to, config))
        .collect()
}

/// Returns every legal move for the side to move, ordered by origin then destination.
pub fn legal_moves(position: &Position, config: &RulesConfig) -> Vec<Move> {
    position
        .board()
        .pieces_of(position.side_to_move)
        .flat_map(|(from, _)| {
            legal_destinations(position, from, config)
                .into_iter()
                .map(move |to| Move::new(from, to))
        })
        .collect()
}

/// Returns true if the side to move has at least one legal move.
pub fn has_any_legal_move(position: &Position, config: &RulesConfig) -> bool {
    position
        .board()
        .pieces_of(position.side_to_move)
        .any(|(from, _)| Square::all().any(|to| is_legal(position, from, to, config)))
}
