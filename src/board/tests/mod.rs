//! Board and game integration tests.
//!
//! Tests are organized into separate files by category:
//! - `rules.rs` - full-game scenarios (mates, draws, castling, promotion)
//! - `variants.rs` - civilization armies playing through the game layer
//! - `proptest.rs` - property-based random playouts


use crate::board::{Board, LegalMove, Position};
use crate::game::GameState;

/// Find the legal move from `from` to `to`, panicking with a readable
/// message when it does not exist.
fn find_move(game: &GameState, from: Position, to: Position) -> LegalMove {
    game.legal_moves_for_piece(from)
        .into_iter()
        .find(|legal| legal.mv().to() == to)
        .unwrap_or_else(|| panic!("no legal move {from}{to}"))
}

fn play(game: &mut GameState, from: (i8, i8), to: (i8, i8)) {
    let mv = find_move(
        game,
        Position::new(from.0, from.1),
        Position::new(to.0, to.1),
    );
    game.make_move(&mv);
}

fn standard_game() -> GameState {
    use crate::board::{Civilization, Player};
    GameState::new(
        Player::White,
        Board::initial(Civilization::Standard, Civilization::Standard),
    )
}
