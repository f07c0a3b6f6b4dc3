//! The board: piece storage, lookup, and position-level rule queries.

use std::fmt;
use std::ops::{Index, IndexMut};

use super::counting::Counting;
use super::types::{Direction, Move, Piece, PieceKind, Player, Position};

/// An 8x8 board of optionally-occupied squares.
///
/// The board owns every piece on it and additionally remembers, per
/// player, the square that player's most recent double pawn push skipped
/// over. That memory is only honored for the single reply that follows
/// the push; [`crate::game::GameState::make_move`] clears it before every
/// move. The board knows nothing about turn order or game history.
#[derive(Clone, Debug)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8],
    pawn_skip: [Option<Position>; 2],
}

impl Board {
    /// An empty board with no pieces and no en-passant memory
    #[must_use]
    pub fn empty() -> Self {
        Board {
            grid: Default::default(),
            pawn_skip: [None, None],
        }
    }

    /// Pure bounds check; independent of board contents
    #[inline]
    #[must_use]
    pub fn is_inside(pos: Position) -> bool {
        (0..8).contains(&pos.row()) && (0..8).contains(&pos.col())
    }

    /// Returns true if the square holds no piece
    #[inline]
    #[must_use]
    pub fn is_empty(&self, pos: Position) -> bool {
        self[pos].is_none()
    }

    /// Borrow the piece at `pos`, if any
    #[inline]
    #[must_use]
    pub fn piece_at(&self, pos: Position) -> Option<&Piece> {
        self[pos].as_ref()
    }

    fn cell(&self, pos: Position) -> &Option<Piece> {
        assert!(Board::is_inside(pos), "position {pos} is off the board");
        &self.grid[pos.row() as usize][pos.col() as usize]
    }

    fn cell_mut(&mut self, pos: Position) -> &mut Option<Piece> {
        assert!(Board::is_inside(pos), "position {pos} is off the board");
        &mut self.grid[pos.row() as usize][pos.col() as usize]
    }

    /// The square skipped by `player`'s last double pawn push, if it is
    /// still honorable
    #[inline]
    #[must_use]
    pub fn pawn_skip(&self, player: Player) -> Option<Position> {
        self.pawn_skip[player.index()]
    }

    pub(crate) fn set_pawn_skip(&mut self, player: Player, pos: Option<Position>) {
        self.pawn_skip[player.index()] = pos;
    }

    /// All occupied squares
    pub fn piece_positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..8).flat_map(move |r| {
            (0..8).filter_map(move |c| {
                let pos = Position::new(r, c);
                (!self.is_empty(pos)).then_some(pos)
            })
        })
    }

    /// All squares occupied by `player`'s pieces
    pub fn piece_positions_for(&self, player: Player) -> impl Iterator<Item = Position> + '_ {
        self.piece_positions()
            .filter(move |&pos| self[pos].as_ref().is_some_and(|p| p.color == player))
    }

    /// Returns true if any opposing piece could capture `player`'s king
    /// from where it stands.
    ///
    /// This walks raw pseudo-legal threats only. Legality filtering calls
    /// back into this query on simulated positions, so routing it through
    /// the filtered generator would recurse forever.
    #[must_use]
    pub fn is_in_check(&self, player: Player) -> bool {
        self.piece_positions_for(player.opponent())
            .any(|pos| self.piece_threatens_king(pos))
    }

    /// An independent copy for probing move legality.
    ///
    /// Pieces are deep-copied; en-passant memory is deliberately not,
    /// since a probe only ever asks "is the mover in check afterwards".
    #[must_use]
    pub fn probe_copy(&self) -> Board {
        Board {
            grid: self.grid.clone(),
            pawn_skip: [None, None],
        }
    }

    /// Tally every piece on the board by color and kind
    #[must_use]
    pub fn count_pieces(&self) -> Counting {
        let mut counting = Counting::new();
        for pos in self.piece_positions() {
            let piece = self[pos].as_ref().expect("enumerated square is occupied");
            counting.increment(piece.color, piece.kind);
        }
        counting
    }

    /// Returns true if neither side retains mating material
    #[must_use]
    pub fn insufficient_material(&self) -> bool {
        let counting = self.count_pieces();

        is_king_v_king(&counting)
            || is_king_bishop_v_king(&counting)
            || is_king_knight_v_king(&counting)
            || self.is_king_bishop_v_king_bishop(&counting)
    }

    fn is_king_bishop_v_king_bishop(&self, counting: &Counting) -> bool {
        if counting.total() != 4 {
            return false;
        }
        if counting.white(PieceKind::Bishop) != 1 || counting.black(PieceKind::Bishop) != 1 {
            return false;
        }

        // Two kings and two bishops; drawn only when the bishops sit on
        // same-colored squares.
        let white_bishop = self.find_piece(Player::White, PieceKind::Bishop);
        let black_bishop = self.find_piece(Player::Black, PieceKind::Bishop);

        match (white_bishop, black_bishop) {
            (Some(w), Some(b)) => w.square_color() == b.square_color(),
            _ => false,
        }
    }

    fn find_piece(&self, color: Player, kind: PieceKind) -> Option<Position> {
        self.piece_positions_for(color)
            .find(|&pos| self[pos].as_ref().is_some_and(|p| p.kind == kind))
    }

    fn is_unmoved_king_and_rook(&self, king_pos: Position, rook_pos: Position) -> bool {
        if self.is_empty(king_pos) || self.is_empty(rook_pos) {
            return false;
        }

        let king = self[king_pos].as_ref().expect("occupied");
        let rook = self[rook_pos].as_ref().expect("occupied");

        king.kind == PieceKind::King
            && rook.kind == PieceKind::Rook
            && !king.has_moved
            && !rook.has_moved
    }

    /// King-side castling rights: king and h-rook both on their start
    /// squares and never moved. Path emptiness and check safety are the
    /// castle move's own job.
    #[must_use]
    pub fn castle_rights_ks(&self, player: Player) -> bool {
        let row = player.back_row();
        self.is_unmoved_king_and_rook(Position::new(row, 4), Position::new(row, 7))
    }

    /// Queen-side castling rights: king and a-rook both on their start
    /// squares and never moved
    #[must_use]
    pub fn castle_rights_qs(&self, player: Player) -> bool {
        let row = player.back_row();
        self.is_unmoved_king_and_rook(Position::new(row, 4), Position::new(row, 0))
    }

    fn has_pawn_in_position(&self, player: Player, from_candidates: &[Position], skip: Position) -> bool {
        for &pos in from_candidates.iter().filter(|&&p| Board::is_inside(p)) {
            let Some(piece) = self.piece_at(pos) else {
                continue;
            };
            if piece.color != player || !piece.kind.is_pawn_like() {
                continue;
            }

            // A correctly placed pawn exists; the capture still has to
            // survive the self-check filter.
            let mv = Move::EnPassant {
                from: pos,
                to: skip,
            };
            if mv.is_legal(self) {
                return true;
            }
        }
        false
    }

    /// Returns true if `player` can legally capture en passant right now
    #[must_use]
    pub fn can_capture_en_passant(&self, player: Player) -> bool {
        let Some(skip) = self.pawn_skip(player.opponent()) else {
            return false;
        };

        // Squares a pawn of `player` would capture from.
        let candidates = match player {
            Player::White => [skip + Direction::SOUTH_WEST, skip + Direction::SOUTH_EAST],
            Player::Black => [skip + Direction::NORTH_WEST, skip + Direction::NORTH_EAST],
        };

        self.has_pawn_in_position(player, &candidates, skip)
    }
}

fn is_king_v_king(counting: &Counting) -> bool {
    counting.total() == 2
}

fn is_king_bishop_v_king(counting: &Counting) -> bool {
    counting.total() == 3
        && (counting.white(PieceKind::Bishop) == 1 || counting.black(PieceKind::Bishop) == 1)
}

fn is_king_knight_v_king(counting: &Counting) -> bool {
    counting.total() == 3
        && (counting.white(PieceKind::Knight) == 1 || counting.black(PieceKind::Knight) == 1)
}

impl Index<Position> for Board {
    type Output = Option<Piece>;

    fn index(&self, pos: Position) -> &Self::Output {
        self.cell(pos)
    }
}

impl IndexMut<Position> for Board {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        self.cell_mut(pos)
    }
}

impl Index<(i8, i8)> for Board {
    type Output = Option<Piece>;

    fn index(&self, (row, col): (i8, i8)) -> &Self::Output {
        self.cell(Position::new(row, col))
    }
}

impl IndexMut<(i8, i8)> for Board {
    fn index_mut(&mut self, (row, col): (i8, i8)) -> &mut Self::Output {
        self.cell_mut(Position::new(row, col))
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::initial(
            crate::board::Civilization::Standard,
            crate::board::Civilization::Standard,
        )
    }
}

fn piece_char(piece: &Piece) -> char {
    let c = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Bishop => 'b',
        PieceKind::Knight => 'n',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
        PieceKind::RomanBishop => 'c',
        PieceKind::Tank => 't',
        PieceKind::Horseman => 'h',
        PieceKind::VikingPawn => 'v',
        PieceKind::BritonPawn => 'u',
    };
    match piece.color {
        Player::White => c.to_ascii_uppercase(),
        Player::Black => c,
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..8 {
            write!(f, "{} ", 8 - r)?;
            for c in 0..8 {
                match &self[(r, c)] {
                    Some(piece) => write!(f, "{} ", piece_char(piece))?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}
