//! Attack geometry for all piece kinds.
//!
//! Everything here is a pure function of a board snapshot. Turn order and
//! self-check are ignored: the question is only whether a piece could reach
//! a square if it were allowed to.

use duel_core::{Board, Color, Piece, PieceKind, Square};

/// Row and column deltas from `from` to `to`.
#[inline]
pub(crate) fn deltas(from: Square, to: Square) -> (i32, i32) {
    (
        to.row() as i32 - from.row() as i32,
        to.col() as i32 - from.col() as i32,
    )
}

/// Returns true if every square strictly between `from` and `to` is empty.
///
/// The walk steps by the sign of each delta, so it is only meaningful for
/// squares on a shared row, column or diagonal.
pub fn is_path_clear(board: &Board, from: Square, to: Square) -> bool {
    let (d_row, d_col) = deltas(from, to);
    let step = (d_row.signum(), d_col.signum());

    let mut current = from.offset(step.0, step.1);
    while let Some(sq) = current {
        if sq == to {
            return true;
        }
        if !board.is_empty_at(sq) {
            return false;
        }
        current = sq.offset(step.0, step.1);
    }
    true
}

/// Returns true if `piece`, standing on `from`, attacks `to`.
pub fn piece_attacks(board: &Board, piece: Piece, from: Square, to: Square) -> bool {
    let (d_row, d_col) = deltas(from, to);
    let (abs_row, abs_col) = (d_row.abs(), d_col.abs());

    match piece.kind {
        PieceKind::Pawn => abs_col == 1 && d_row == piece.color.pawn_direction(),
        PieceKind::Rook => {
            (d_row == 0 || d_col == 0) && from != to && is_path_clear(board, from, to)
        }
        PieceKind::Bishop => abs_row == abs_col && from != to && is_path_clear(board, from, to),
        PieceKind::Queen => {
            (d_row == 0 || d_col == 0 || abs_row == abs_col)
                && from != to
                && is_path_clear(board, from, to)
        }
        PieceKind::Knight => (abs_row == 2 && abs_col == 1) || (abs_row == 1 && abs_col == 2),
        PieceKind::King => abs_row <= 1 && abs_col <= 1 && from != to,
    }
}

/// Returns true if the piece on `attacker` attacks `target`.
///
/// An empty `attacker` square attacks nothing.
pub fn attacks(board: &Board, attacker: Square, target: Square) -> bool {
    match board.get(attacker) {
        Some(piece) => piece_attacks(board, piece, attacker, target),
        None => false,
    }
}

/// Returns true if any piece of color `by` attacks `target`.
pub fn is_square_attacked(board: &Board, target: Square, by: Color) -> bool {
    board
        .pieces_of(by)
        .any(|(sq, piece)| piece_attacks(board, piece, sq, target))
}

/// Returns true if a king of `color` standing on `king_square` would be attacked.
pub fn would_be_in_check(board: &Board, color: Color, king_square: Square) -> bool {
    is_square_attacked(board, king_square, color.opposite())
}

/// Returns true if `color`'s king is attacked on `board`.
///
/// The king is located by scanning the board; a board without that king is
/// never in check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    board
        .find_king(color)
        .is_some_and(|king| would_be_in_check(board, color, king))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn board(placement: &str) -> Board {
        Board::from_placement(placement).unwrap()
    }

    fn targets(board: &Board, from: Square) -> Vec<String> {
        Square::all()
            .filter(|&to| attacks(board, from, to))
            .map(|to| to.to_algebraic())
            .collect()
    }

    #[test]
    fn knight_attacks_center() {
        let b = board("8/8/8/8/3N4/8/8/8");
        assert_eq!(targets(&b, sq("d4")).len(), 8);
    }

    #[test]
    fn knight_attacks_corner() {
        let b = board("8/8/8/8/8/8/8/N7");
        let mut t = targets(&b, sq("a1"));
        t.sort();
        assert_eq!(t, vec!["b3", "c2"]);
    }

    #[test]
    fn knight_jumps_over_pieces() {
        let b = board("8/8/8/2ppp3/2pNp3/2ppp3/8/8");
        assert_eq!(targets(&b, sq("d4")).len(), 8);
    }

    #[test]
    fn king_attacks_neighbourhood() {
        let b = board("8/8/8/8/3K4/8/8/8");
        assert_eq!(targets(&b, sq("d4")).len(), 8);
        assert!(!attacks(&b, sq("d4"), sq("d4")));
        let corner = board("8/8/8/8/8/8/8/K7");
        assert_eq!(targets(&corner, sq("a1")).len(), 3);
    }

    #[test]
    fn pawn_attacks_only_diagonals() {
        let b = board("8/8/8/8/3P4/8/8/8");
        let mut t = targets(&b, sq("d4"));
        t.sort();
        assert_eq!(t, vec!["c5", "e5"]);
        assert!(!attacks(&b, sq("d4"), sq("d5")));

        let b = board("8/8/8/3p4/8/8/8/8");
        let mut t = targets(&b, sq("d5"));
        t.sort();
        assert_eq!(t, vec!["c4", "e4"]);
    }

    #[test]
    fn pawn_attack_ignores_target_occupancy() {
        // An empty diagonal still counts as attacked.
        let b = board("8/8/8/8/8/8/4P3/8");
        assert!(attacks(&b, sq("e2"), sq("d3")));
        assert!(attacks(&b, sq("e2"), sq("f3")));
    }

    #[test]
    fn rook_blocked_by_piece() {
        let b = board("8/8/8/8/R2p4/8/8/8");
        assert!(attacks(&b, sq("a4"), sq("b4")));
        assert!(attacks(&b, sq("a4"), sq("d4")));
        assert!(!attacks(&b, sq("a4"), sq("e4")));
        assert!(attacks(&b, sq("a4"), sq("a8")));
        assert!(!attacks(&b, sq("a4"), sq("b5")));
    }

    #[test]
    fn bishop_and_queen_lines() {
        let b = board("8/8/8/8/3B4/8/8/8");
        assert!(attacks(&b, sq("d4"), sq("a7")));
        assert!(attacks(&b, sq("d4"), sq("h8")));
        assert!(!attacks(&b, sq("d4"), sq("d5")));

        let q = board("8/8/8/8/3Q4/8/8/8");
        assert_eq!(targets(&q, sq("d4")).len(), 27);
        assert!(!attacks(&q, sq("d4"), sq("e6")));
    }

    #[test]
    fn empty_attacker_attacks_nothing() {
        let b = Board::empty();
        assert!(!attacks(&b, sq("d4"), sq("d5")));
    }

    #[test]
    fn path_clear_excludes_endpoints() {
        let b = board("8/8/8/8/r6r/8/8/8");
        assert!(is_path_clear(&b, sq("a4"), sq("h4")));
        let blocked = board("8/8/8/8/r2n3r/8/8/8");
        assert!(!is_path_clear(&blocked, sq("a4"), sq("h4")));
        assert!(is_path_clear(&blocked, sq("a4"), sq("d4")));
    }

    #[test]
    fn check_detection() {
        let b = board("4k3/8/8/8/8/8/8/4RK2");
        assert!(is_in_check(&b, Color::Black));
        assert!(!is_in_check(&b, Color::White));
        assert!(would_be_in_check(&b, Color::Black, sq("e7")));
        assert!(!would_be_in_check(&b, Color::Black, sq("d8")));
    }

    #[test]
    fn no_king_is_never_in_check() {
        let b = board("8/8/8/8/8/8/8/4R3");
        assert!(!is_in_check(&b, Color::Black));
    }

    #[test]
    fn startpos_attacks() {
        let b = Board::standard();
        assert!(is_square_attacked(&b, sq("e3"), Color::White));
        assert!(!is_square_attacked(&b, sq("e4"), Color::White));
        assert!(is_square_attacked(&b, sq("f6"), Color::Black));
        assert!(!is_in_check(&b, Color::White));
        assert!(!is_in_check(&b, Color::Black));
    }
}
