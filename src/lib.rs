//! A rules engine for chess with selectable civilization armies.
//!
//! Each side picks a [`board::Civilization`] at setup; some replace a
//! standard piece kind with a variant one and some upgrade the king.
//! [`game::GameState`] owns the live board, filters pseudo-legal moves
//! down to [`board::LegalMove`]s, and declares the outcome.
//!
//! ```
//! use civchess::{Civilization, GameState, Player};
//! use civchess::board::Board;
//!
//! let board = Board::initial(Civilization::Rome, Civilization::Egypt);
//! let game = GameState::new(Player::White, board);
//! assert!(!game.all_legal_moves_for(Player::White).is_empty());
//! assert!(game.outcome().is_none());
//! ```

pub mod board;
pub mod game;

pub use board::{Board, Civilization, LegalMove, Move, Piece, PieceKind, Player, Position};
pub use game::{EndReason, GameOutcome, GameState};
