//! Core types for the rules engine.
//!
//! This crate provides the board model shared by the engine:
//! - [`Piece`], [`PieceKind`] and [`Color`] for piece representation
//! - [`Square`] for board coordinates
//! - [`Move`] for move representation
//! - [`Board`], an 8×8 grid of pieces, with placement notation parsing

mod board;
mod color;
mod mov;
mod piece;
pub mod placement;
mod square;

pub use board::Board;
pub use color::Color;
pub use mov::Move;
pub use piece::{Piece, PieceKind};
pub use placement::PlacementError;
pub use square::{Square, SquareError};
