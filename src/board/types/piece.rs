//! Piece and player types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Direction;

/// The two sides of a game.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Player {
    White,
    Black,
}

impl Player {
    /// Both players in index order (White=0, Black=1)
    pub const BOTH: [Player; 2] = [Player::White, Player::Black];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Player::White => 0,
            Player::Black => 1,
        }
    }

    /// Returns the opposing player
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Pawn forward direction (White moves up the board, toward row 0)
    #[inline]
    #[must_use]
    pub(crate) const fn forward(self) -> Direction {
        match self {
            Player::White => Direction::NORTH,
            Player::Black => Direction::SOUTH,
        }
    }

    /// Back rank row (7 for White, 0 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn back_row(self) -> i8 {
        match self {
            Player::White => 7,
            Player::Black => 0,
        }
    }

    /// Pawn starting row (6 for White, 1 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_row(self) -> i8 {
        match self {
            Player::White => 6,
            Player::Black => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::White => write!(f, "White"),
            Player::Black => write!(f, "Black"),
        }
    }
}

/// Piece kinds, including the civilization variants.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Bishop,
    Knight,
    Rook,
    Queen,
    King,
    RomanBishop,
    Tank,
    Horseman,
    VikingPawn,
    BritonPawn,
}

impl PieceKind {
    /// All piece kinds in index order
    pub const ALL: [PieceKind; 11] = [
        PieceKind::Pawn,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::RomanBishop,
        PieceKind::Tank,
        PieceKind::Horseman,
        PieceKind::VikingPawn,
        PieceKind::BritonPawn,
    ];

    /// Promotion choices offered to a promoting pawn, queen last
    pub const PROMOTION_KINDS: [PieceKind; 4] = [
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
    ];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Bishop => 1,
            PieceKind::Knight => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
            PieceKind::RomanBishop => 6,
            PieceKind::Tank => 7,
            PieceKind::Horseman => 8,
            PieceKind::VikingPawn => 9,
            PieceKind::BritonPawn => 10,
        }
    }

    /// Returns true for the pawn family (standard and civilization pawns).
    ///
    /// Moving any of these resets the fifty-move counter.
    #[inline]
    #[must_use]
    pub const fn is_pawn_like(self) -> bool {
        matches!(
            self,
            PieceKind::Pawn | PieceKind::VikingPawn | PieceKind::BritonPawn
        )
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Bishop => "Bishop",
            PieceKind::Knight => "Knight",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
            PieceKind::RomanBishop => "Roman Bishop",
            PieceKind::Tank => "Tank",
            PieceKind::Horseman => "Horseman",
            PieceKind::VikingPawn => "Viking Pawn",
            PieceKind::BritonPawn => "Briton Pawn",
        };
        write!(f, "{name}")
    }
}

/// A piece on the board.
///
/// `has_moved` flips to true the first time a move executes through the
/// piece and never resets; castling rights and double pawn pushes depend
/// on it. The king ability flags are fixed at construction and select the
/// Roman (extra orthogonal step) or Egyptian (extra diagonal step)
/// movement upgrades.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Player,
    pub has_moved: bool,
    pub(crate) roman_king: bool,
    pub(crate) egyptian_king: bool,
}

impl Piece {
    #[must_use]
    pub fn new(kind: PieceKind, color: Player) -> Self {
        Piece {
            kind,
            color,
            has_moved: false,
            roman_king: false,
            egyptian_king: false,
        }
    }

    /// A king with the Roman extra orthogonal step
    #[must_use]
    pub fn roman_king(color: Player) -> Self {
        Piece {
            roman_king: true,
            ..Piece::new(PieceKind::King, color)
        }
    }

    /// A king with the Egyptian extra diagonal step
    #[must_use]
    pub fn egyptian_king(color: Player) -> Self {
        Piece {
            egyptian_king: true,
            ..Piece::new(PieceKind::King, color)
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}
