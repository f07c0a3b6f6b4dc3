//! Core rules-engine types.
//!
//! This module contains the fundamental value types used throughout the
//! engine:
//! - `Player`, `PieceKind`, and `Piece` - sides and pieces
//! - `Position`, `Direction`, and `SquareColor` - board geometry
//! - `Move`, `CastleSide`, and `LegalMove` - move representation

mod moves;
mod piece;
mod square;

// Re-export all public types
pub use moves::{CastleSide, LegalMove, Move};
pub use piece::{Piece, PieceKind, Player};
pub use square::{Direction, Position, SquareColor};
