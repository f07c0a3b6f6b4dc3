//! Board representation and movement rules.
//!
//! The board is an 8x8 grid of optional pieces, row 0 at the top where
//! Black starts. Move generation lives in [`movegen`], execution and
//! legality in [`execute`], and the starting armies in [`setup`].
//!
//! # Example
//! ```
//! use civchess::board::{Board, Civilization, Player};
//!
//! let board = Board::initial(Civilization::Standard, Civilization::Vikings);
//! assert!(!board.is_in_check(Player::White));
//! ```

mod counting;
mod error;
mod execute;
mod movegen;
mod setup;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use counting::Counting;
pub use error::PositionError;
pub use setup::Civilization;
pub use state::Board;
pub use types::{
    CastleSide, Direction, LegalMove, Move, Piece, PieceKind, Player, Position, SquareColor,
};
