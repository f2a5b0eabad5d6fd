//! Check, checkmate and stalemate evaluation.

use crate::attacks::would_be_in_check;
use crate::legality::has_any_legal_move;
use crate::{Position, RulesConfig};
use duel_core::Color;
use serde::{Deserialize, Serialize};

/// State of the game from the point of view of the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum Outcome {
    /// Not in check, legal moves available.
    Normal,
    /// In check, legal moves available.
    Check,
    /// In check with no legal move; `winner` delivered the mate.
    Checkmate { winner: Color },
    /// Not in check with no legal move.
    Stalemate,
}

impl Outcome {
    /// Returns true once no further move can be played.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Outcome::Checkmate { .. } | Outcome::Stalemate)
    }

    /// Returns true if the side to move is in check (including checkmate).
    #[inline]
    pub const fn is_check(self) -> bool {
        matches!(self, Outcome::Check | Outcome::Checkmate { .. })
    }
}

/// Status flags exposed to collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameStatus {
    pub in_check: bool,
    pub checkmate: bool,
    pub stalemate: bool,
    pub active_player: Color,
}

impl GameStatus {
    /// Builds the status flags for `outcome` with `active_player` to move.
    pub const fn new(outcome: Outcome, active_player: Color) -> Self {
        GameStatus {
            in_check: outcome.is_check(),
            checkmate: matches!(outcome, Outcome::Checkmate { .. }),
            stalemate: matches!(outcome, Outcome::Stalemate),
            active_player,
        }
    }
}

/// Returns true if the side to move is in check.
pub fn is_in_check(position: &Position) -> bool {
    let color = position.side_to_move;
    position
        .king(color)
        .is_some_and(|king| would_be_in_check(position.board(), color, king))
}

/// Evaluates the position for the side to move.
///
/// The check test runs first; the legal-move search then separates check
/// from checkmate, or a normal position from stalemate.
pub fn evaluate(position: &Position, config: &RulesConfig) -> Outcome {
    let in_check = is_in_check(position);
    let can_move = has_any_legal_move(position, config);

    match (in_check, can_move) {
        (true, true) => Outcome::Check,
        (true, false) => Outcome::Checkmate {
            winner: position.side_to_move.opposite(),
        },
        (false, true) => Outcome::Normal,
        (false, false) => Outcome::Stalemate,
    }
}
