//! Move types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::PieceKind;
use super::square::{Direction, Position};

/// Which wing a castle happens on.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    /// Direction the king travels when castling on this side
    #[inline]
    #[must_use]
    pub(crate) const fn king_dir(self) -> Direction {
        match self {
            CastleSide::KingSide => Direction::EAST,
            CastleSide::QueenSide => Direction::WEST,
        }
    }

    /// Column the king lands on
    #[inline]
    #[must_use]
    pub(crate) const fn king_to_col(self) -> i8 {
        match self {
            CastleSide::KingSide => 6,
            CastleSide::QueenSide => 2,
        }
    }

    /// Column the rook starts on
    #[inline]
    #[must_use]
    pub(crate) const fn rook_from_col(self) -> i8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    /// Column the rook lands on
    #[inline]
    #[must_use]
    pub(crate) const fn rook_to_col(self) -> i8 {
        match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        }
    }
}

/// One move, pseudo-legal or legal depending on where it came from.
///
/// Each variant carries only the squares it needs; derived squares (the
/// skipped square of a double push, the captured pawn of an en passant,
/// the rook's path in a castle) are computed from the variant's fields.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Move {
    /// Relocate a piece, capturing whatever occupies the destination
    Normal { from: Position, to: Position },
    /// Two-square pawn push, recording the skipped square for en passant
    DoublePawn { from: Position, to: Position },
    /// Diagonal pawn capture onto the skipped square of the opponent's
    /// double push on the previous ply
    EnPassant { from: Position, to: Position },
    /// King and rook castle; `king` is the king's current square
    Castle { side: CastleSide, king: Position },
    /// Non-displacing capture: the target square is emptied but the
    /// attacker stays put
    Ranged { from: Position, to: Position },
    /// Pawn reaches the far rank and becomes `kind`
    Promotion {
        from: Position,
        to: Position,
        kind: PieceKind,
    },
}

impl Move {
    /// The square the moving piece starts on
    #[inline]
    #[must_use]
    pub fn from(self) -> Position {
        match self {
            Move::Normal { from, .. }
            | Move::DoublePawn { from, .. }
            | Move::EnPassant { from, .. }
            | Move::Ranged { from, .. }
            | Move::Promotion { from, .. } => from,
            Move::Castle { king, .. } => king,
        }
    }

    /// The destination square (the target square for ranged captures,
    /// the king's landing square for castles)
    #[inline]
    #[must_use]
    pub fn to(self) -> Position {
        match self {
            Move::Normal { to, .. }
            | Move::DoublePawn { to, .. }
            | Move::EnPassant { to, .. }
            | Move::Ranged { to, .. }
            | Move::Promotion { to, .. } => to,
            Move::Castle { side, king } => Position::new(king.row(), side.king_to_col()),
        }
    }

    /// The promotion target, if this is a promotion move
    #[inline]
    #[must_use]
    pub fn promotion(self) -> Option<PieceKind> {
        match self {
            Move::Promotion { kind, .. } => Some(kind),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_castle(self) -> bool {
        matches!(self, Move::Castle { .. })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Castle {
                side: CastleSide::KingSide,
                ..
            } => write!(f, "O-O"),
            Move::Castle {
                side: CastleSide::QueenSide,
                ..
            } => write!(f, "O-O-O"),
            Move::Promotion { from, to, kind } => write!(f, "{from}{to}={kind}"),
            Move::Ranged { from, to } => write!(f, "{from}x{to} (ranged)"),
            _ => write!(f, "{}{}", self.from(), self.to()),
        }
    }
}

/// A move that passed legality filtering.
///
/// Only the enumeration methods on [`crate::game::GameState`] can create
/// one, so `make_move` can skip re-validation: holding a `LegalMove` is
/// proof the legality check was already paid for. The wrapper is only as
/// fresh as the position it was enumerated from; applying it after
/// another move is a contract violation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LegalMove {
    mv: Move,
}

impl LegalMove {
    #[inline]
    #[must_use]
    pub(crate) fn new(mv: Move) -> Self {
        LegalMove { mv }
    }

    /// The underlying move
    #[inline]
    #[must_use]
    pub fn mv(self) -> Move {
        self.mv
    }
}

impl From<LegalMove> for Move {
    fn from(legal: LegalMove) -> Move {
        legal.mv
    }
}

impl fmt::Display for LegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.mv.fmt(f)
    }
}
