//! Game management: turn order, move application, status, and undo.
//!
//! The [`Game`] struct owns the live position and everything derived from
//! the moves played so far:
//! - Move history with a board snapshot per ply, for undo
//! - Captured-piece tallies
//! - The last move played
//! - Check / checkmate / stalemate status for the side to move

use crate::attacks::would_be_in_check;
use crate::history::{CapturedPieces, History, MoveRecord};
use crate::label::history_text;
use crate::legality::{self, Rejection};
use crate::status::{self, GameStatus, Outcome};
use crate::{KingPositions, Position, RulesConfig};
use duel_core::{Board, Color, Move, PieceKind, Square};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, trace};

/// Error type for game operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The move is not legal in the current position.
    #[error("illegal move: {0}")]
    Illegal(#[from] Rejection),
    /// The game has already ended.
    #[error("game has already ended")]
    GameOver,
    /// The move string could not be parsed.
    #[error("invalid move notation: {0:?}")]
    InvalidNotation(String),
    /// A custom setup does not describe a playable position.
    #[error("invalid setup: {0}")]
    InvalidSetup(String),
}

/// Result of submitting a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    /// Whether the move was played. A refused move changes nothing.
    pub applied: bool,
    /// Status after the command, for the side now to move.
    pub status: GameStatus,
}

/// A game in progress.
#[derive(Debug, Clone)]
pub struct Game {
    /// Current position.
    position: Position,
    /// Applied moves, most recent last.
    history: History,
    /// Kinds removed from the board, by the color they belonged to.
    captured: CapturedPieces,
    /// The most recently applied move.
    last_move: Option<Move>,
    /// Status of the current position.
    outcome: Outcome,
    config: RulesConfig,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with the standard starting position.
    pub fn new() -> Self {
        Self::with_config(RulesConfig::default())
    }

    /// Creates a new game with the standard starting position and the given rules.
    pub fn with_config(config: RulesConfig) -> Self {
        let position = Position::startpos();
        Game {
            outcome: status::evaluate(&position, &config),
            position,
            history: History::new(),
            captured: CapturedPieces::default(),
            last_move: None,
            config,
        }
    }

    /// Creates a game from a custom position.
    ///
    /// Each side must have exactly one king, and the side that just moved
    /// must not be in check. The status is evaluated at once, so a setup may
    /// start out already in check, checkmate or stalemate.
    pub fn from_position(position: Position, config: RulesConfig) -> Result<Self, GameError> {
        for color in Color::ALL {
            let kings = position.board().count(color, PieceKind::King);
            if kings != 1 {
                return Err(GameError::InvalidSetup(format!(
                    "{} has {} kings, expected 1",
                    color, kings
                )));
            }
        }

        let waiting = position.side_to_move.opposite();
        if position
            .king(waiting)
            .is_some_and(|king| would_be_in_check(position.board(), waiting, king))
        {
            return Err(GameError::InvalidSetup(format!(
                "{} is in check with {} to move",
                waiting, position.side_to_move
            )));
        }

        Ok(Game {
            outcome: status::evaluate(&position, &config),
            position,
            history: History::new(),
            captured: CapturedPieces::default(),
            last_move: None,
            config,
        })
    }

    /// Creates a game from placement notation.
    pub fn from_placement(
        placement: &str,
        side_to_move: Color,
        config: RulesConfig,
    ) -> Result<Self, GameError> {
        let position = Position::from_placement(placement, side_to_move)
            .map_err(|e| GameError::InvalidSetup(e.to_string()))?;
        Self::from_position(position, config)
    }

    /// Resets to the standard starting position, keeping the rules configuration.
    pub fn new_game(&mut self) {
        *self = Self::with_config(self.config);
        debug!("new game");
    }

    /// Returns the rules configuration.
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Returns a reference to the current position.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        self.position.board()
    }

    /// Returns the side to move.
    pub fn active_player(&self) -> Color {
        self.position.side_to_move
    }

    /// Returns where `color`'s king stands.
    pub fn king_position(&self, color: Color) -> Option<Square> {
        self.position.king(color)
    }

    /// Returns both king squares.
    pub fn king_positions(&self) -> KingPositions {
        self.position.kings()
    }

    /// Returns the status of the current position.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the status flags for the side to move.
    pub fn status(&self) -> GameStatus {
        GameStatus::new(self.outcome, self.position.side_to_move)
    }

    /// Returns true if the side to move is in check.
    pub fn is_check(&self) -> bool {
        self.outcome.is_check()
    }

    /// Returns true once checkmate or stalemate has been reached.
    pub fn is_game_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Returns the move history, oldest first.
    pub fn history(&self) -> &[MoveRecord] {
        self.history.as_slice()
    }

    /// Returns the number of half-moves (plies) played.
    pub fn ply_count(&self) -> usize {
        self.history.len()
    }

    /// Returns the captured-piece tallies.
    pub fn captured(&self) -> &CapturedPieces {
        &self.captured
    }

    /// Returns the most recently applied move.
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Returns the numbered move list, e.g. "1. e2e4 e7e5 2. Kg1f3".
    pub fn history_text(&self) -> String {
        history_text(self.history.as_slice())
    }

    /// Returns the current board in placement notation.
    pub fn to_placement(&self) -> String {
        self.position.board().to_placement()
    }

    /// Explains why a move would be refused, or returns `Ok` if it is legal.
    pub fn check_move(&self, from: Square, to: Square) -> Result<(), Rejection> {
        legality::check_move(&self.position, from, to, &self.config)
    }

    /// Returns true if the side to move may play `from` → `to`.
    pub fn is_legal(&self, from: Square, to: Square) -> bool {
        legality::is_legal(&self.position, from, to, &self.config)
    }

    /// Raw-coordinate variant of [`Game::is_legal`]; off-board input is never legal.
    pub fn is_legal_coords(&self, from: (i32, i32), to: (i32, i32)) -> bool {
        legality::is_legal_coords(&self.position, from, to, &self.config)
    }

    /// Returns every legal destination for the piece on `from` (move hints).
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        legality::legal_destinations(&self.position, from, &self.config)
    }

    /// Returns all legal moves for the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        legality::legal_moves(&self.position, &self.config)
    }

    /// Submits a move. Illegal moves are refused without any state change.
    pub fn apply_move(&mut self, from: Square, to: Square) -> MoveResult {
        match self.try_move(from, to) {
            Ok(status) => MoveResult {
                applied: true,
                status,
            },
            Err(e) => {
                trace!(%from, %to, error = %e, "move refused");
                MoveResult {
                    applied: false,
                    status: self.status(),
                }
            }
        }
    }

    /// Submits a move given as raw coordinates, which may lie off the board.
    pub fn apply_coords(&mut self, from: (i32, i32), to: (i32, i32)) -> MoveResult {
        match (
            Square::from_coords(from.0, from.1),
            Square::from_coords(to.0, to.1),
        ) {
            (Some(from), Some(to)) => self.apply_move(from, to),
            _ => {
                trace!(?from, ?to, "move refused: off the board");
                MoveResult {
                    applied: false,
                    status: self.status(),
                }
            }
        }
    }

    /// Submits a move given in coordinate notation (e.g., "e2e4").
    pub fn apply_uci(&mut self, notation: &str) -> Result<GameStatus, GameError> {
        let m = Move::from_coordinate(notation.trim())
            .ok_or_else(|| GameError::InvalidNotation(notation.to_string()))?;
        self.try_move(m.from, m.to)
    }

    /// Submits a move, reporting why it was refused.
    pub fn try_move(&mut self, from: Square, to: Square) -> Result<GameStatus, GameError> {
        if self.outcome.is_terminal() {
            return Err(GameError::GameOver);
        }
        self.check_move(from, to)?;
        let piece = self
            .position
            .piece_at(from)
            .ok_or(Rejection::EmptyOrigin(from))?;

        let board_before = *self.position.board();
        let captured = self.position.play(from, to);

        self.history.push(MoveRecord {
            from,
            to,
            piece,
            captured,
            board_before,
        });
        if let Some(captured) = captured {
            self.captured.record(captured);
        }
        self.last_move = Some(Move::new(from, to));
        self.outcome = status::evaluate(&self.position, &self.config);

        debug!(
            %from,
            %to,
            piece = %piece,
            captured = ?captured.map(|p| p.kind),
            outcome = ?self.outcome,
            "move applied"
        );
        if let Outcome::Checkmate { winner } = self.outcome {
            info!(%winner, plies = self.history.len(), "checkmate");
        } else if self.outcome == Outcome::Stalemate {
            info!(plies = self.history.len(), "stalemate");
        }

        Ok(self.status())
    }

    /// Takes back the most recent move. Returns false if there is none.
    ///
    /// Undo is also available after checkmate or stalemate.
    pub fn undo_move(&mut self) -> bool {
        let Some(record) = self.history.pop() else {
            return false;
        };

        let side = self.position.side_to_move.opposite();
        self.position.restore(record.board_before, side);
        if let Some(captured) = record.captured {
            self.captured.unrecord(captured);
        }
        self.last_move = self.history.last().map(MoveRecord::mov);
        self.outcome = status::evaluate(&self.position, &self.config);

        debug!(from = %record.from, to = %record.to, "move undone");
        true
    }
}
