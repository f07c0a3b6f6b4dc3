//! Move execution and legality.
//!
//! `execute` mutates a board in place and reports whether the fifty-move
//! counter resets (any capture or pawn-family move). `is_legal` never
//! touches the real board: it simulates on a probe copy and asks whether
//! the mover's king survives, except for castling, which additionally
//! walks the king square by square to rule out passing through check.

use super::state::Board;
use super::types::{CastleSide, Move, Piece, Position};

impl Move {
    /// Apply this move to `board`.
    ///
    /// Returns true when the move captures or moves a pawn-family piece,
    /// the two events that reset the fifty-move counter. The caller must
    /// have drawn the move from legality filtering first; executing an
    /// illegal move corrupts the position.
    pub(crate) fn execute(&self, board: &mut Board) -> bool {
        match *self {
            Move::Normal { from, to } => execute_relocation(board, from, to),
            Move::Ranged { from, to } => {
                let capture = !board.is_empty(to);
                board[to] = None;
                let attacker = board[from].as_mut().expect("ranged attacker present");
                attacker.has_moved = true;
                capture || attacker.kind.is_pawn_like()
            }
            Move::DoublePawn { from, to } => {
                let skipped = Position::new((from.row() + to.row()) / 2, from.col());
                let mover = board[from].as_ref().expect("pawn present").color;
                board.set_pawn_skip(mover, Some(skipped));
                execute_relocation(board, from, to);
                true
            }
            Move::EnPassant { from, to } => {
                execute_relocation(board, from, to);
                // The captured pawn sits beside the mover, on the column
                // it just landed on.
                board[Position::new(from.row(), to.col())] = None;
                true
            }
            Move::Castle { side, king } => {
                let row = king.row();
                execute_relocation(board, king, Position::new(row, side.king_to_col()));
                execute_relocation(
                    board,
                    Position::new(row, side.rook_from_col()),
                    Position::new(row, side.rook_to_col()),
                );
                false
            }
            Move::Promotion { from, to, kind } => {
                let pawn = board[from].take().expect("promoting pawn present");
                board[to] = Some(Piece {
                    kind,
                    has_moved: true,
                    ..pawn
                });
                true
            }
        }
    }

    /// Returns true if executing this move would not leave the mover's
    /// own king in check
    #[must_use]
    pub(crate) fn is_legal(&self, board: &Board) -> bool {
        match *self {
            Move::Castle { side, king } => castle_is_legal(board, side, king),
            _ => {
                let player = board[self.from()].as_ref().expect("mover present").color;
                let mut copy = board.probe_copy();
                self.execute(&mut copy);
                !copy.is_in_check(player)
            }
        }
    }
}

/// Lift the piece off `from`, mark it moved, and drop it on `to`.
/// Returns true when the relocation captured or moved a pawn-family
/// piece.
fn execute_relocation(board: &mut Board, from: Position, to: Position) -> bool {
    let mut piece = board[from].take().expect("moving piece present");
    piece.has_moved = true;
    let capture = !board.is_empty(to);
    let pawn_like = piece.kind.is_pawn_like();
    board[to] = Some(piece);
    capture || pawn_like
}

/// Castling has a stricter rule than simulate-then-check: the king may
/// not start in check nor pass through an attacked square on the way.
fn castle_is_legal(board: &Board, side: CastleSide, king: Position) -> bool {
    let player = board[king].as_ref().expect("castling king present").color;

    if board.is_in_check(player) {
        return false;
    }

    let dir = side.king_dir();
    let mut copy = board.probe_copy();
    let mut king_pos = king;

    for _ in 0..2 {
        Move::Normal {
            from: king_pos,
            to: king_pos + dir,
        }
        .execute(&mut copy);
        king_pos = king_pos + dir;

        if copy.is_in_check(player) {
            return false;
        }
    }

    true
}
