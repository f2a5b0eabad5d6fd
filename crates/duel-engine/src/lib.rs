//! Rules engine for a two-player chess game.
//!
//! This crate provides:
//! - [`attacks`] - attack geometry for every piece kind
//! - [`legality`] - move legality, including the self-check filter
//! - [`status`] - check, checkmate and stalemate evaluation
//! - [`Game`] - turn order, move application, history and undo
//! - Move labels and a numbered history listing
//! - [`RulesConfig`] - the tunable parts of the rule set, loadable from TOML
//!
//! The rule set has no castling, en passant or promotion, and no draw rules
//! other than stalemate.
//!
//! # Example
//!
//! ```
//! use duel_engine::{Game, Outcome};
//!
//! let mut game = Game::new();
//! for m in ["f2f3", "e7e5", "g2g4", "d8h4"] {
//!     game.apply_uci(m).unwrap();
//! }
//! assert!(game.status().checkmate);
//! assert!(matches!(game.outcome(), Outcome::Checkmate { .. }));
//!
//! game.undo_move();
//! assert_eq!(game.ply_count(), 3);
//! ```

pub mod attacks;
mod config;
mod game;
pub mod history;
pub mod label;
pub mod legality;
pub mod perft;
mod position;
pub mod status;

pub use attacks::{attacks, is_in_check, is_path_clear, would_be_in_check};
pub use config::{ConfigError, RulesConfig};
pub use game::{Game, GameError, MoveResult};
pub use history::{CapturedPieces, History, MoveRecord};
pub use label::{history_text, move_label};
pub use legality::{has_any_legal_move, is_legal, legal_moves, Rejection};
pub use perft::perft;
pub use position::{KingPositions, Position};
pub use status::{GameStatus, Outcome};

pub use duel_core::{Board, Color, Move, Piece, PieceKind, Square};
