//! Game orchestration: turn order, legality filtering, and termination.

use std::collections::HashMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, LegalMove, PieceKind, Player, Position};

/// Why a finished game ended.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EndReason {
    Checkmate,
    Stalemate,
    FiftyMoveRule,
    InsufficientMaterial,
    ThreefoldRepetition,
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EndReason::Checkmate => "checkmate",
            EndReason::Stalemate => "stalemate",
            EndReason::FiftyMoveRule => "fifty-move rule",
            EndReason::InsufficientMaterial => "insufficient material",
            EndReason::ThreefoldRepetition => "threefold repetition",
        };
        write!(f, "{name}")
    }
}

/// The terminal result of a game. Created once when the game ends and
/// never re-derived.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameOutcome {
    /// The winning player; `None` for draws
    pub winner: Option<Player>,
    pub reason: EndReason,
}

impl GameOutcome {
    /// A win by checkmate
    #[must_use]
    pub fn win(winner: Player) -> Self {
        GameOutcome {
            winner: Some(winner),
            reason: EndReason::Checkmate,
        }
    }

    /// A draw for the given reason
    #[must_use]
    pub fn draw(reason: EndReason) -> Self {
        GameOutcome {
            winner: None,
            reason,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner {
            Some(player) => write!(f, "{player} wins by {}", self.reason),
            None => write!(f, "draw by {}", self.reason),
        }
    }
}

/// Canonical position identity for the threefold-repetition rule.
///
/// Two positions repeat when the same side is to move and every square
/// holds the same kind and color of piece. Castling rights and en-passant
/// availability are deliberately omitted, matching the behavior this
/// engine is the authority for; see DESIGN.md.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
struct StateSignature {
    squares: [Option<(Player, PieceKind)>; 64],
    to_move: Player,
}

impl StateSignature {
    fn of(board: &Board, to_move: Player) -> Self {
        let mut squares = [None; 64];
        for pos in board.piece_positions() {
            let piece = board.piece_at(pos).expect("enumerated square is occupied");
            squares[(pos.row() * 8 + pos.col()) as usize] = Some((piece.color, piece.kind));
        }
        StateSignature { squares, to_move }
    }
}

/// The authoritative game: a live board, the side to move, and the
/// bookkeeping the draw rules need.
///
/// Moves flow one way: [`legal_moves_for_piece`](Self::legal_moves_for_piece)
/// or [`all_legal_moves_for`](Self::all_legal_moves_for) produce
/// [`LegalMove`]s, the caller picks one, and
/// [`make_move`](Self::make_move) applies it. `make_move` trusts its
/// input; a `LegalMove` enumerated from an earlier position is stale and
/// applying it is a contract violation.
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
    /// Half-moves since the last capture or pawn-family move
    no_capture_or_pawn_moves: u32,
    state_history: HashMap<StateSignature, u32>,
}

impl GameState {
    /// Start a game from `board` with `player` to move
    #[must_use]
    pub fn new(player: Player, board: Board) -> Self {
        let mut state_history = HashMap::new();
        state_history.insert(StateSignature::of(&board, player), 1);

        GameState {
            board,
            current_player: player,
            outcome: None,
            no_capture_or_pawn_moves: 0,
            state_history,
        }
    }

    /// The live board. Read-only; mutation goes through `make_move`.
    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move
    #[inline]
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// The terminal result, if the game is over
    #[inline]
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Returns true once a terminal result has been recorded
    #[inline]
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Every legal move for the piece on `pos`; empty if the square is
    /// empty or holds an opposing piece
    #[must_use]
    pub fn legal_moves_for_piece(&self, pos: Position) -> Vec<LegalMove> {
        if !Board::is_inside(pos) {
            return Vec::new();
        }
        match self.board.piece_at(pos) {
            Some(piece) if piece.color == self.current_player => self
                .board
                .pseudo_legal_moves(pos)
                .into_iter()
                .filter(|mv| mv.is_legal(&self.board))
                .map(LegalMove::new)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Every legal move `player` could make on the current board
    #[must_use]
    pub fn all_legal_moves_for(&self, player: Player) -> Vec<LegalMove> {
        self.board
            .piece_positions_for(player)
            .flat_map(|pos| self.board.pseudo_legal_moves(pos))
            .filter(|mv| mv.is_legal(&self.board))
            .map(LegalMove::new)
            .collect::<Vec<_>>()
    }

    /// Apply a legal move, flip the turn, and evaluate termination.
    ///
    /// Callers must re-read [`board`](Self::board),
    /// [`current_player`](Self::current_player), and
    /// [`outcome`](Self::outcome) afterward.
    pub fn make_move(&mut self, legal: &LegalMove) {
        let mv = legal.mv();

        // A skip square is only honorable for the single reply after the
        // double push, so the mover's memory is cleared before anything
        // else happens.
        self.board.set_pawn_skip(self.current_player, None);

        let resets_counter = mv.execute(&mut self.board);
        if resets_counter {
            self.no_capture_or_pawn_moves = 0;
            // A capture or pawn move makes every earlier position
            // unreachable; their repetition counts no longer matter.
            self.state_history.clear();
        } else {
            self.no_capture_or_pawn_moves += 1;
        }

        self.current_player = self.current_player.opponent();
        let repetitions = self.record_state();

        #[cfg(feature = "logging")]
        log::debug!(
            "applied {mv}; {} to move, halfmove clock {}",
            self.current_player,
            self.no_capture_or_pawn_moves
        );

        self.check_for_game_over(repetitions);
    }

    fn record_state(&mut self) -> u32 {
        let signature = StateSignature::of(&self.board, self.current_player);
        let count = self.state_history.entry(signature).or_insert(0);
        *count += 1;
        *count
    }

    fn fifty_move_rule(&self) -> bool {
        self.no_capture_or_pawn_moves / 2 >= 50
    }

    /// Evaluate the terminal conditions in their fixed order. Runs after
    /// every move; once an outcome is set it is never overwritten.
    fn check_for_game_over(&mut self, repetitions: u32) {
        let outcome = if self.all_legal_moves_for(self.current_player).is_empty() {
            if self.board.is_in_check(self.current_player) {
                Some(GameOutcome::win(self.current_player.opponent()))
            } else {
                Some(GameOutcome::draw(EndReason::Stalemate))
            }
        } else if self.board.insufficient_material() {
            Some(GameOutcome::draw(EndReason::InsufficientMaterial))
        } else if self.fifty_move_rule() {
            Some(GameOutcome::draw(EndReason::FiftyMoveRule))
        } else if repetitions >= 3 {
            Some(GameOutcome::draw(EndReason::ThreefoldRepetition))
        } else {
            None
        };

        if let Some(outcome) = outcome {
            #[cfg(feature = "logging")]
            log::debug!("game over: {outcome}");
            self.outcome = Some(outcome);
        }
    }
}
