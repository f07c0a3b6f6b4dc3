//! Starting armies and civilization selection.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::state::Board;
use super::types::{Piece, PieceKind, Player, Position};

/// A named starting army with variant movement rules.
///
/// Selected independently per side at game setup; each selection only
/// rewrites that side's pieces.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Civilization {
    /// The classic chess array
    #[default]
    Standard,
    /// Bishops become Roman bishops; the king gains an extra orthogonal
    /// step through an empty square
    Rome,
    /// Rooks become tanks; the king gains an extra diagonal step through
    /// an empty square
    Egypt,
    /// Pawns become Viking pawns; knights become horsemen
    Vikings,
    /// Pawns become Briton pawns
    Britons,
}

impl Civilization {
    /// All selectable civilizations, in menu order
    pub const ALL: [Civilization; 5] = [
        Civilization::Standard,
        Civilization::Rome,
        Civilization::Egypt,
        Civilization::Vikings,
        Civilization::Britons,
    ];

    fn back_rank(self) -> [PieceKind; 8] {
        let mut rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for kind in &mut rank {
            *kind = match (self, *kind) {
                (Civilization::Rome, PieceKind::Bishop) => PieceKind::RomanBishop,
                (Civilization::Egypt, PieceKind::Rook) => PieceKind::Tank,
                (Civilization::Vikings, PieceKind::Knight) => PieceKind::Horseman,
                _ => *kind,
            };
        }
        rank
    }

    fn pawn_kind(self) -> PieceKind {
        match self {
            Civilization::Vikings => PieceKind::VikingPawn,
            Civilization::Britons => PieceKind::BritonPawn,
            _ => PieceKind::Pawn,
        }
    }

    fn king(self, color: Player) -> Piece {
        match self {
            Civilization::Rome => Piece::roman_king(color),
            Civilization::Egypt => Piece::egyptian_king(color),
            _ => Piece::new(PieceKind::King, color),
        }
    }
}

impl fmt::Display for Civilization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Civilization::Standard => "Standard",
            Civilization::Rome => "Rome",
            Civilization::Egypt => "Egypt",
            Civilization::Vikings => "Vikings",
            Civilization::Britons => "Britons",
        };
        write!(f, "{name}")
    }
}

impl Board {
    /// A fully populated starting board with each side's army drawn from
    /// its civilization selection
    #[must_use]
    pub fn initial(white: Civilization, black: Civilization) -> Board {
        let mut board = Board::empty();
        board.place_army(Player::White, white);
        board.place_army(Player::Black, black);
        board
    }

    fn place_army(&mut self, color: Player, civ: Civilization) {
        let back = color.back_row();
        for (c, &kind) in civ.back_rank().iter().enumerate() {
            let pos = Position::new(back, c as i8);
            self[pos] = Some(if kind == PieceKind::King {
                civ.king(color)
            } else {
                Piece::new(kind, color)
            });
        }

        let pawn_row = color.pawn_row();
        for c in 0..8 {
            self[Position::new(pawn_row, c)] = Some(Piece::new(civ.pawn_kind(), color));
        }
    }
}
