//! Pseudo-legal move generation and king-threat detection.
//!
//! Everything here is occupancy-aware but check-blind: a generated move
//! may still leave the mover's own king in check. Legality filtering
//! lives on [`Move::is_legal`]; keeping the two layers apart is what lets
//! `Board::is_in_check` call into this module without recursing.

use once_cell::sync::Lazy;

use super::state::Board;
use super::types::{CastleSide, Direction, Move, Piece, PieceKind, Player, Position};

const ORTHOGONAL: [Direction; 4] = [
    Direction::NORTH,
    Direction::SOUTH,
    Direction::EAST,
    Direction::WEST,
];

const DIAGONAL: [Direction; 4] = [
    Direction::NORTH_WEST,
    Direction::NORTH_EAST,
    Direction::SOUTH_WEST,
    Direction::SOUTH_EAST,
];

const ALL_DIRECTIONS: [Direction; 8] = [
    Direction::NORTH,
    Direction::SOUTH,
    Direction::EAST,
    Direction::WEST,
    Direction::NORTH_WEST,
    Direction::NORTH_EAST,
    Direction::SOUTH_WEST,
    Direction::SOUTH_EAST,
];

/// Knight-shaped jump offsets, composed from compass directions.
///
/// The Roman bishop's jump component shares the same shape, so both
/// pieces read this table.
static KNIGHT_OFFSETS: Lazy<[Direction; 8]> = Lazy::new(|| {
    let mut offsets = [Direction::NORTH; 8];
    let mut i = 0;
    for v_dir in [Direction::NORTH, Direction::SOUTH] {
        for h_dir in [Direction::WEST, Direction::EAST] {
            offsets[i] = 2 * v_dir + h_dir; // two ranks, one file
            offsets[i + 1] = 2 * h_dir + v_dir; // two files, one rank
            i += 2;
        }
    }
    offsets
});

impl Board {
    /// All pseudo-legal moves for the piece at `from`; empty if the
    /// square is unoccupied
    #[must_use]
    pub(crate) fn pseudo_legal_moves(&self, from: Position) -> Vec<Move> {
        let Some(piece) = self.piece_at(from) else {
            return Vec::new();
        };
        let piece = piece.clone();

        match piece.kind {
            PieceKind::Pawn => self.pawn_moves(from, &piece),
            PieceKind::Bishop => self.slide_moves(from, piece.color, &DIAGONAL),
            PieceKind::Knight => self.jump_moves(from, piece.color, &*KNIGHT_OFFSETS),
            PieceKind::Rook => self.slide_moves(from, piece.color, &ORTHOGONAL),
            PieceKind::Queen => self.slide_moves(from, piece.color, &ALL_DIRECTIONS),
            PieceKind::King => self.king_moves(from, &piece),
            PieceKind::RomanBishop => self.roman_bishop_moves(from, piece.color),
            PieceKind::Tank => self.tank_moves(from, piece.color),
            PieceKind::Horseman => self.jump_moves(from, piece.color, &ALL_DIRECTIONS),
            PieceKind::VikingPawn => self.viking_pawn_moves(from, &piece),
            PieceKind::BritonPawn => self.briton_pawn_moves(from, &piece),
        }
    }

    /// Returns true if the piece at `from` attacks the enemy king where
    /// it currently stands. Used by check detection only; never consults
    /// legality.
    #[must_use]
    pub(crate) fn piece_threatens_king(&self, from: Position) -> bool {
        let Some(piece) = self.piece_at(from) else {
            return false;
        };
        let piece = piece.clone();

        match piece.kind {
            // Pawns threaten diagonally only; forward pushes (and the
            // Viking pawn's forward capture) do not give check.
            PieceKind::Pawn | PieceKind::VikingPawn | PieceKind::BritonPawn => {
                self.pawn_threatens(from, &piece)
            }
            // The king's threat set is its step targets; castle
            // candidates are irrelevant (their destination is empty).
            PieceKind::King => self
                .king_step_targets(from, &piece)
                .into_iter()
                .any(|to| self.holds_enemy_king(to, piece.color)),
            _ => self
                .pseudo_legal_moves(from)
                .into_iter()
                .any(|mv| self.holds_enemy_king(mv.to(), piece.color)),
        }
    }

    fn holds_enemy_king(&self, pos: Position, attacker: Player) -> bool {
        self.piece_at(pos)
            .is_some_and(|p| p.kind == PieceKind::King && p.color != attacker)
    }

    fn can_move_to(&self, pos: Position) -> bool {
        Board::is_inside(pos) && self.is_empty(pos)
    }

    fn can_capture_at(&self, pos: Position, color: Player) -> bool {
        Board::is_inside(pos)
            && self
                .piece_at(pos)
                .is_some_and(|target| target.color != color)
    }

    /// Walk each ray square by square: empty squares pass through, an
    /// enemy square is included and stops the ray, a friendly square
    /// stops it outright.
    fn slide_targets(&self, from: Position, color: Player, dirs: &[Direction]) -> Vec<Position> {
        let mut targets = Vec::new();
        for &dir in dirs {
            let mut pos = from + dir;
            while Board::is_inside(pos) {
                match self.piece_at(pos) {
                    None => targets.push(pos),
                    Some(target) => {
                        if target.color != color {
                            targets.push(pos);
                        }
                        break;
                    }
                }
                pos = pos + dir;
            }
        }
        targets
    }

    fn slide_moves(&self, from: Position, color: Player, dirs: &[Direction]) -> Vec<Move> {
        self.slide_targets(from, color, dirs)
            .into_iter()
            .map(|to| Move::Normal { from, to })
            .collect()
    }

    /// Fixed-offset jumps, each destination validated independently
    fn jump_moves(&self, from: Position, color: Player, offsets: &[Direction]) -> Vec<Move> {
        offsets
            .iter()
            .map(|&off| from + off)
            .filter(|&to| self.can_move_to(to) || self.can_capture_at(to, color))
            .map(|to| Move::Normal { from, to })
            .collect()
    }

    // ---- King ----

    fn king_step_targets(&self, from: Position, piece: &Piece) -> Vec<Position> {
        let mut targets = Vec::new();
        for dir in ALL_DIRECTIONS {
            let to = from + dir;
            if !Board::is_inside(to) {
                continue;
            }
            if self.can_move_to(to) || self.can_capture_at(to, piece.color) {
                targets.push(to);
            }

            // The Roman and Egyptian upgrades allow a second step in the
            // upgraded directions when the first square is empty.
            let extra = (piece.roman_king && dir.is_orthogonal())
                || (piece.egyptian_king && dir.is_diagonal());
            if extra && self.is_empty(to) {
                let two = to + dir;
                if self.can_move_to(two) || self.can_capture_at(two, piece.color) {
                    targets.push(two);
                }
            }
        }
        targets
    }

    fn is_unmoved_rook(&self, pos: Position) -> bool {
        self.piece_at(pos)
            .is_some_and(|p| p.kind == PieceKind::Rook && !p.has_moved)
    }

    fn can_castle(&self, from: Position, piece: &Piece, side: CastleSide) -> bool {
        if piece.has_moved {
            return false;
        }

        let row = from.row();
        let rook_pos = Position::new(row, side.rook_from_col());
        let between: &[i8] = match side {
            CastleSide::KingSide => &[5, 6],
            CastleSide::QueenSide => &[1, 2, 3],
        };

        self.is_unmoved_rook(rook_pos)
            && between
                .iter()
                .all(|&c| self.is_empty(Position::new(row, c)))
    }

    fn king_moves(&self, from: Position, piece: &Piece) -> Vec<Move> {
        let mut moves: Vec<Move> = self
            .king_step_targets(from, piece)
            .into_iter()
            .map(|to| Move::Normal { from, to })
            .collect();

        for side in [CastleSide::KingSide, CastleSide::QueenSide] {
            if self.can_castle(from, piece, side) {
                moves.push(Move::Castle { side, king: from });
            }
        }
        moves
    }

    // ---- Pawns ----

    fn pawn_threatens(&self, from: Position, piece: &Piece) -> bool {
        let forward = piece.color.forward();
        [Direction::WEST, Direction::EAST].into_iter().any(|dir| {
            let to = from + forward + dir;
            Board::is_inside(to) && self.holds_enemy_king(to, piece.color)
        })
    }

    fn promotion_moves(from: Position, to: Position) -> Vec<Move> {
        PieceKind::PROMOTION_KINDS
            .iter()
            .map(|&kind| Move::Promotion { from, to, kind })
            .collect()
    }

    fn is_promotion_row(pos: Position) -> bool {
        pos.row() == 0 || pos.row() == 7
    }

    /// A relocation that promotes when it reaches the far rank
    fn advance_or_promote(from: Position, to: Position, moves: &mut Vec<Move>) {
        if Self::is_promotion_row(to) {
            moves.extend(Self::promotion_moves(from, to));
        } else {
            moves.push(Move::Normal { from, to });
        }
    }

    fn pawn_moves(&self, from: Position, piece: &Piece) -> Vec<Move> {
        let forward = piece.color.forward();
        let mut moves = Vec::new();

        // Forward pushes.
        let one = from + forward;
        if self.can_move_to(one) {
            Self::advance_or_promote(from, one, &mut moves);

            let two = one + forward;
            if !piece.has_moved && self.can_move_to(two) {
                moves.push(Move::DoublePawn { from, to: two });
            }
        }

        // Diagonal captures, en passant included.
        for dir in [Direction::WEST, Direction::EAST] {
            let to = from + forward + dir;
            if Some(to) == self.pawn_skip(piece.color.opponent()) {
                moves.push(Move::EnPassant { from, to });
            } else if self.can_capture_at(to, piece.color) {
                Self::advance_or_promote(from, to, &mut moves);
            }
        }

        moves
    }

    /// Viking pawns: the forward step may also capture, and diagonal
    /// captures promote like forward ones.
    fn viking_pawn_moves(&self, from: Position, piece: &Piece) -> Vec<Move> {
        let forward = piece.color.forward();
        let mut moves = Vec::new();

        let one = from + forward;
        if self.can_move_to(one) || self.can_capture_at(one, piece.color) {
            Self::advance_or_promote(from, one, &mut moves);

            let two = one + forward;
            if !piece.has_moved && self.can_move_to(two) {
                moves.push(Move::DoublePawn { from, to: two });
            }
        }

        for dir in [Direction::WEST, Direction::EAST] {
            let to = from + forward + dir;
            if Some(to) == self.pawn_skip(piece.color.opponent()) {
                moves.push(Move::EnPassant { from, to });
            } else if self.can_capture_at(to, piece.color) {
                Self::advance_or_promote(from, to, &mut moves);
            }
        }

        moves
    }

    /// Briton pawns: standard movement plus a non-displacing shot two
    /// squares straight ahead. The shot and the diagonal attacks leave
    /// the pawn in place, so neither promotes.
    fn briton_pawn_moves(&self, from: Position, piece: &Piece) -> Vec<Move> {
        let forward = piece.color.forward();
        let mut moves = Vec::new();

        let one = from + forward;
        if self.can_move_to(one) {
            Self::advance_or_promote(from, one, &mut moves);

            let two = one + forward;
            if !piece.has_moved && self.can_move_to(two) {
                moves.push(Move::DoublePawn { from, to: two });
            }
            if self.can_capture_at(two, piece.color) {
                moves.push(Move::Ranged { from, to: two });
            }
        }

        for dir in [Direction::WEST, Direction::EAST] {
            let to = from + forward + dir;
            if Some(to) == self.pawn_skip(piece.color.opponent()) {
                moves.push(Move::EnPassant { from, to });
            } else if self.can_capture_at(to, piece.color) {
                moves.push(Move::Ranged { from, to });
            }
        }

        moves
    }

    // ---- Civilization pieces ----

    /// Tanks step one square in any direction, capturing without
    /// displacing, and fire an orthogonal two-square shot that cannot
    /// pass through an occupied square.
    fn tank_moves(&self, from: Position, color: Player) -> Vec<Move> {
        let mut moves = Vec::new();

        for dir in ALL_DIRECTIONS {
            let to = from + dir;
            if self.can_move_to(to) {
                moves.push(Move::Normal { from, to });
            } else if self.can_capture_at(to, color) {
                moves.push(Move::Ranged { from, to });
            }
        }

        for dir in ORTHOGONAL {
            let mid = from + dir;
            let target = from + 2 * dir;
            if self.can_move_to(mid) && self.can_capture_at(target, color) {
                moves.push(Move::Ranged { from, to: target });
            }
        }

        moves
    }

    /// Roman bishops combine the diagonal slide with knight-shaped jumps
    fn roman_bishop_moves(&self, from: Position, color: Player) -> Vec<Move> {
        let mut moves = self.slide_moves(from, color, &DIAGONAL);
        moves.extend(self.jump_moves(from, color, &*KNIGHT_OFFSETS));
        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Civilization;

    fn place(board: &mut Board, row: i8, col: i8, kind: PieceKind, color: Player) {
        board[Position::new(row, col)] = Some(Piece::new(kind, color));
    }

    fn targets(board: &Board, from: Position) -> Vec<Position> {
        board
            .pseudo_legal_moves(from)
            .into_iter()
            .map(|mv| mv.to())
            .collect()
    }

    #[test]
    fn test_rook_rays_stop_at_pieces() {
        let mut board = Board::empty();
        place(&mut board, 4, 4, PieceKind::Rook, Player::White);
        place(&mut board, 4, 6, PieceKind::Pawn, Player::Black);
        place(&mut board, 6, 4, PieceKind::Pawn, Player::White);

        let tos = targets(&board, Position::new(4, 4));
        // East ray: captures on g4, does not pass beyond.
        assert!(tos.contains(&Position::new(4, 6)));
        assert!(!tos.contains(&Position::new(4, 7)));
        // South ray: stops before the friendly pawn.
        assert!(tos.contains(&Position::new(5, 4)));
        assert!(!tos.contains(&Position::new(6, 4)));
        // North and west rays run to the edge.
        assert!(tos.contains(&Position::new(0, 4)));
        assert!(tos.contains(&Position::new(4, 0)));
    }

    #[test]
    fn test_knight_jumps() {
        let mut board = Board::empty();
        place(&mut board, 7, 1, PieceKind::Knight, Player::White);
        place(&mut board, 5, 0, PieceKind::Pawn, Player::White);

        let tos = targets(&board, Position::new(7, 1));
        assert_eq!(tos.len(), 2); // a3 blocked by friendly pawn
        assert!(tos.contains(&Position::new(5, 2)));
        assert!(tos.contains(&Position::new(6, 3)));
    }

    #[test]
    fn test_pawn_initial_moves() {
        let board = Board::initial(Civilization::Standard, Civilization::Standard);
        let tos = targets(&board, Position::new(6, 4));
        assert_eq!(tos.len(), 2);
        assert!(tos.contains(&Position::new(5, 4)));
        assert!(tos.contains(&Position::new(4, 4)));
    }

    #[test]
    fn test_pawn_blocked_cannot_push() {
        let mut board = Board::empty();
        place(&mut board, 6, 4, PieceKind::Pawn, Player::White);
        place(&mut board, 5, 4, PieceKind::Knight, Player::Black);

        assert!(targets(&board, Position::new(6, 4)).is_empty());
    }

    #[test]
    fn test_pawn_promotion_moves() {
        let mut board = Board::empty();
        place(&mut board, 1, 0, PieceKind::Pawn, Player::White);

        let moves = board.pseudo_legal_moves(Position::new(1, 0));
        assert_eq!(moves.len(), 4);
        assert!(moves.iter().all(|mv| mv.promotion().is_some()));
    }

    #[test]
    fn test_pawn_diagonal_capture_promotes() {
        let mut board = Board::empty();
        place(&mut board, 1, 4, PieceKind::Pawn, Player::White);
        place(&mut board, 0, 4, PieceKind::Rook, Player::Black); // push blocked
        place(&mut board, 0, 5, PieceKind::Knight, Player::Black);

        let moves = board.pseudo_legal_moves(Position::new(1, 4));
        assert_eq!(moves.len(), 4);
        assert!(moves
            .iter()
            .all(|mv| mv.to() == Position::new(0, 5) && mv.promotion().is_some()));
    }

    #[test]
    fn test_pawn_en_passant_candidate() {
        let mut board = Board::empty();
        place(&mut board, 3, 4, PieceKind::Pawn, Player::White);
        place(&mut board, 3, 5, PieceKind::Pawn, Player::Black);
        board.set_pawn_skip(Player::Black, Some(Position::new(2, 5)));

        let moves = board.pseudo_legal_moves(Position::new(3, 4));
        assert!(moves.iter().any(|mv| matches!(
            mv,
            Move::EnPassant { to, .. } if *to == Position::new(2, 5)
        )));
    }

    #[test]
    fn test_king_steps_and_castle_candidates() {
        let mut board = Board::empty();
        place(&mut board, 7, 4, PieceKind::King, Player::White);
        place(&mut board, 7, 7, PieceKind::Rook, Player::White);
        place(&mut board, 7, 0, PieceKind::Rook, Player::White);

        let moves = board.pseudo_legal_moves(Position::new(7, 4));
        let castles: Vec<_> = moves.iter().filter(|mv| mv.is_castle()).collect();
        assert_eq!(castles.len(), 2);
    }

    #[test]
    fn test_castle_candidate_requires_clear_path() {
        let mut board = Board::empty();
        place(&mut board, 7, 4, PieceKind::King, Player::White);
        place(&mut board, 7, 7, PieceKind::Rook, Player::White);
        place(&mut board, 7, 5, PieceKind::Bishop, Player::White);

        let moves = board.pseudo_legal_moves(Position::new(7, 4));
        assert!(!moves.iter().any(|mv| mv.is_castle()));
    }

    #[test]
    fn test_castle_candidate_requires_unmoved_rook() {
        let mut board = Board::empty();
        place(&mut board, 7, 4, PieceKind::King, Player::White);
        let mut rook = Piece::new(PieceKind::Rook, Player::White);
        rook.has_moved = true;
        board[Position::new(7, 7)] = Some(rook);

        let moves = board.pseudo_legal_moves(Position::new(7, 4));
        assert!(!moves.iter().any(|mv| mv.is_castle()));
    }

    #[test]
    fn test_roman_king_extra_orthogonal_step() {
        let mut board = Board::empty();
        board[Position::new(4, 4)] = Some(Piece::roman_king(Player::White));

        let tos = targets(&board, Position::new(4, 4));
        assert!(tos.contains(&Position::new(2, 4))); // two north
        assert!(tos.contains(&Position::new(4, 6))); // two east
        assert!(!tos.contains(&Position::new(2, 2))); // not diagonal
    }

    #[test]
    fn test_roman_king_extra_step_needs_empty_intermediate() {
        let mut board = Board::empty();
        board[Position::new(4, 4)] = Some(Piece::roman_king(Player::White));
        place(&mut board, 3, 4, PieceKind::Pawn, Player::Black);

        let tos = targets(&board, Position::new(4, 4));
        assert!(tos.contains(&Position::new(3, 4))); // capture one north
        assert!(!tos.contains(&Position::new(2, 4))); // cannot jump over
    }

    #[test]
    fn test_egyptian_king_extra_diagonal_step() {
        let mut board = Board::empty();
        board[Position::new(4, 4)] = Some(Piece::egyptian_king(Player::Black));

        let tos = targets(&board, Position::new(4, 4));
        assert!(tos.contains(&Position::new(2, 2)));
        assert!(tos.contains(&Position::new(6, 6)));
        assert!(!tos.contains(&Position::new(2, 4)));
    }

    #[test]
    fn test_horseman_steps_one_square() {
        let mut board = Board::empty();
        place(&mut board, 4, 4, PieceKind::Horseman, Player::White);
        place(&mut board, 3, 4, PieceKind::Pawn, Player::Black);
        place(&mut board, 5, 4, PieceKind::Pawn, Player::White);

        let moves = board.pseudo_legal_moves(Position::new(4, 4));
        assert_eq!(moves.len(), 7); // 8 directions minus the friendly square
        assert!(moves
            .iter()
            .all(|mv| matches!(mv, Move::Normal { .. })));
    }

    #[test]
    fn test_tank_step_and_ranged_capture() {
        let mut board = Board::empty();
        place(&mut board, 4, 4, PieceKind::Tank, Player::White);
        place(&mut board, 4, 5, PieceKind::Pawn, Player::Black);

        let moves = board.pseudo_legal_moves(Position::new(4, 4));
        assert!(moves.iter().any(|mv| matches!(
            mv,
            Move::Ranged { to, .. } if *to == Position::new(4, 5)
        )));
        assert!(moves.iter().any(|mv| matches!(
            mv,
            Move::Normal { to, .. } if *to == Position::new(3, 4)
        )));
    }

    #[test]
    fn test_tank_two_square_shot_requires_clear_lane() {
        let mut board = Board::empty();
        place(&mut board, 4, 4, PieceKind::Tank, Player::White);
        place(&mut board, 4, 6, PieceKind::Rook, Player::Black);

        let moves = board.pseudo_legal_moves(Position::new(4, 4));
        assert!(moves.iter().any(|mv| matches!(
            mv,
            Move::Ranged { to, .. } if *to == Position::new(4, 6)
        )));

        // Block the lane: the shot disappears.
        place(&mut board, 4, 5, PieceKind::Pawn, Player::White);
        let moves = board.pseudo_legal_moves(Position::new(4, 4));
        assert!(!moves.iter().any(|mv| matches!(
            mv,
            Move::Ranged { to, .. } if *to == Position::new(4, 6)
        )));
    }

    #[test]
    fn test_tank_has_no_diagonal_shot() {
        let mut board = Board::empty();
        place(&mut board, 4, 4, PieceKind::Tank, Player::White);
        place(&mut board, 2, 2, PieceKind::Rook, Player::Black);

        let moves = board.pseudo_legal_moves(Position::new(4, 4));
        assert!(!moves.iter().any(|mv| mv.to() == Position::new(2, 2)));
    }

    #[test]
    fn test_roman_bishop_slides_and_jumps() {
        let mut board = Board::empty();
        place(&mut board, 4, 4, PieceKind::RomanBishop, Player::White);
        place(&mut board, 2, 2, PieceKind::Pawn, Player::Black);

        let tos = targets(&board, Position::new(4, 4));
        assert!(tos.contains(&Position::new(3, 3)));
        assert!(tos.contains(&Position::new(2, 2))); // capture ends the ray
        assert!(!tos.contains(&Position::new(1, 1)));
        assert!(tos.contains(&Position::new(2, 5))); // knight-shaped jump
        assert!(tos.contains(&Position::new(5, 6)));
        assert!(!tos.contains(&Position::new(4, 6))); // no orthogonal slide
    }

    #[test]
    fn test_viking_pawn_captures_forward() {
        let mut board = Board::empty();
        place(&mut board, 4, 4, PieceKind::VikingPawn, Player::White);
        place(&mut board, 3, 4, PieceKind::Pawn, Player::Black);

        let moves = board.pseudo_legal_moves(Position::new(4, 4));
        assert!(moves.iter().any(|mv| matches!(
            mv,
            Move::Normal { to, .. } if *to == Position::new(3, 4)
        )));
    }

    #[test]
    fn test_viking_pawn_double_push_hurdles_enemy() {
        let mut board = Board::empty();
        place(&mut board, 6, 4, PieceKind::VikingPawn, Player::White);
        place(&mut board, 5, 4, PieceKind::Pawn, Player::Black);

        // An enemy directly ahead does not block the double push; only
        // the landing square must be empty.
        let moves = board.pseudo_legal_moves(Position::new(6, 4));
        assert!(moves.iter().any(|mv| matches!(
            mv,
            Move::DoublePawn { to, .. } if *to == Position::new(4, 4)
        )));

        place(&mut board, 4, 4, PieceKind::Knight, Player::Black);
        let moves = board.pseudo_legal_moves(Position::new(6, 4));
        assert!(!moves.iter().any(|mv| matches!(mv, Move::DoublePawn { .. })));
    }

    #[test]
    fn test_viking_pawn_diagonal_capture_promotes() {
        let mut board = Board::empty();
        place(&mut board, 1, 4, PieceKind::VikingPawn, Player::White);
        place(&mut board, 0, 4, PieceKind::Rook, Player::Black);
        place(&mut board, 0, 3, PieceKind::Knight, Player::Black);

        let moves = board.pseudo_legal_moves(Position::new(1, 4));
        // Forward capture promotes, and so does the diagonal one.
        let promo_targets: Vec<_> = moves
            .iter()
            .filter(|mv| mv.promotion().is_some())
            .map(|mv| mv.to())
            .collect();
        assert!(promo_targets.contains(&Position::new(0, 4)));
        assert!(promo_targets.contains(&Position::new(0, 3)));
    }

    #[test]
    fn test_briton_pawn_ranged_shot() {
        let mut board = Board::empty();
        place(&mut board, 6, 4, PieceKind::BritonPawn, Player::White);
        place(&mut board, 4, 4, PieceKind::Knight, Player::Black);

        let moves = board.pseudo_legal_moves(Position::new(6, 4));
        assert!(moves.iter().any(|mv| matches!(
            mv,
            Move::Ranged { to, .. } if *to == Position::new(4, 4)
        )));
        // The push onto the occupied square is not offered.
        assert!(!moves.iter().any(|mv| matches!(
            mv,
            Move::Normal { to, .. } | Move::DoublePawn { to, .. } if *to == Position::new(4, 4)
        )));
    }

    #[test]
    fn test_briton_pawn_diagonal_attack_is_ranged() {
        let mut board = Board::empty();
        place(&mut board, 4, 4, PieceKind::BritonPawn, Player::White);
        place(&mut board, 3, 3, PieceKind::Pawn, Player::Black);

        let moves = board.pseudo_legal_moves(Position::new(4, 4));
        assert!(moves.iter().any(|mv| matches!(
            mv,
            Move::Ranged { to, .. } if *to == Position::new(3, 3)
        )));
    }

    #[test]
    fn test_pawn_threat_is_diagonal_only() {
        let mut board = Board::empty();
        place(&mut board, 4, 4, PieceKind::Pawn, Player::White);
        place(&mut board, 3, 4, PieceKind::King, Player::Black);

        assert!(!board.piece_threatens_king(Position::new(4, 4)));

        let mut board = Board::empty();
        place(&mut board, 4, 4, PieceKind::Pawn, Player::White);
        place(&mut board, 3, 3, PieceKind::King, Player::Black);
        assert!(board.piece_threatens_king(Position::new(4, 4)));
    }

    #[test]
    fn test_tank_threatens_through_shot() {
        let mut board = Board::empty();
        place(&mut board, 4, 4, PieceKind::Tank, Player::Black);
        place(&mut board, 4, 2, PieceKind::King, Player::White);

        assert!(board.piece_threatens_king(Position::new(4, 4)));

        // Blocking the lane removes the threat.
        place(&mut board, 4, 3, PieceKind::Pawn, Player::White);
        assert!(!board.piece_threatens_king(Position::new(4, 4)));
    }

    #[test]
    fn test_initial_position_move_count() {
        let board = Board::initial(Civilization::Standard, Civilization::Standard);
        let total: usize = board
            .piece_positions_for(Player::White)
            .map(|pos| board.pseudo_legal_moves(pos).len())
            .sum();
        assert_eq!(total, 20);
    }
}
