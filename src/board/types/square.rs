//! Board geometry: positions, directions, and square colors.

use std::fmt;
use std::ops::{Add, Mul};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::PositionError;

/// A square coordinate as (row, column).
///
/// Row 0 is the top of the board (Black's back rank), row 7 the bottom
/// (White's back rank). Coordinates may hold out-of-range values
/// transiently while walking rays off the board; every consumer filters
/// with [`crate::board::Board::is_inside`] before touching the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    row: i8,
    col: i8,
}

impl Position {
    /// Create a position from in-range coordinates.
    ///
    /// # Panics
    /// Panics if either coordinate falls outside 0-7. Use the
    /// `TryFrom<(i8, i8)>` impl for checked construction from untrusted
    /// input.
    #[inline]
    #[must_use]
    pub const fn new(row: i8, col: i8) -> Self {
        assert!(row >= 0 && row < 8 && col >= 0 && col < 8);
        Position { row, col }
    }

    /// Get the row (0-7, where 0 = Black's back rank)
    #[inline]
    #[must_use]
    pub const fn row(self) -> i8 {
        self.row
    }

    /// Get the column (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn col(self) -> i8 {
        self.col
    }

    /// The color of this square on the checkered board.
    ///
    /// Used for the same-colored-bishops insufficient-material rule.
    #[inline]
    #[must_use]
    pub const fn square_color(self) -> SquareColor {
        if (self.row + self.col) % 2 == 0 {
            SquareColor::Light
        } else {
            SquareColor::Dark
        }
    }

    #[inline]
    #[must_use]
    pub(crate) const fn unchecked(row: i8, col: i8) -> Self {
        Position { row, col }
    }
}

impl Add<Direction> for Position {
    type Output = Position;

    fn add(self, dir: Direction) -> Position {
        Position::unchecked(self.row + dir.row_delta(), self.col + dir.col_delta())
    }
}

impl TryFrom<(i8, i8)> for Position {
    type Error = PositionError;

    fn try_from((row, col): (i8, i8)) -> Result<Self, Self::Error> {
        if !(0..8).contains(&row) {
            return Err(PositionError::RowOutOfBounds { row });
        }
        if !(0..8).contains(&col) {
            return Err(PositionError::ColOutOfBounds { col });
        }
        Ok(Position { row, col })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Algebraic notation; off-board coordinates render as raw pairs.
        if (0..8).contains(&self.row) && (0..8).contains(&self.col) {
            write!(f, "{}{}", (self.col as u8 + b'a') as char, 8 - self.row)
        } else {
            write!(f, "({},{})", self.row, self.col)
        }
    }
}

/// The color of a board square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SquareColor {
    Light,
    Dark,
}

/// A movement delta as (row delta, column delta).
///
/// Directions compose by vector addition and scalar multiplication, which
/// is how the variant pieces' jump offsets are built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Direction {
    row_delta: i8,
    col_delta: i8,
}

impl Direction {
    pub const NORTH: Direction = Direction::new(-1, 0);
    pub const SOUTH: Direction = Direction::new(1, 0);
    pub const EAST: Direction = Direction::new(0, 1);
    pub const WEST: Direction = Direction::new(0, -1);
    pub const NORTH_EAST: Direction = Direction::new(-1, 1);
    pub const NORTH_WEST: Direction = Direction::new(-1, -1);
    pub const SOUTH_EAST: Direction = Direction::new(1, 1);
    pub const SOUTH_WEST: Direction = Direction::new(1, -1);

    #[inline]
    #[must_use]
    pub const fn new(row_delta: i8, col_delta: i8) -> Self {
        Direction {
            row_delta,
            col_delta,
        }
    }

    #[inline]
    #[must_use]
    pub const fn row_delta(self) -> i8 {
        self.row_delta
    }

    #[inline]
    #[must_use]
    pub const fn col_delta(self) -> i8 {
        self.col_delta
    }

    /// Returns true for the four rank/file directions
    #[inline]
    #[must_use]
    pub const fn is_orthogonal(self) -> bool {
        self.row_delta == 0 || self.col_delta == 0
    }

    /// Returns true for the four diagonal directions
    #[inline]
    #[must_use]
    pub const fn is_diagonal(self) -> bool {
        self.row_delta != 0 && self.col_delta != 0
    }
}

impl Add for Direction {
    type Output = Direction;

    fn add(self, other: Direction) -> Direction {
        Direction::new(
            self.row_delta + other.row_delta,
            self.col_delta + other.col_delta,
        )
    }
}

impl Mul<Direction> for i8 {
    type Output = Direction;

    fn mul(self, dir: Direction) -> Direction {
        Direction::new(self * dir.row_delta(), self * dir.col_delta())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_accessors() {
        let pos = Position::new(3, 5);
        assert_eq!(pos.row(), 3);
        assert_eq!(pos.col(), 5);
    }

    #[test]
    fn test_position_try_from_rejects_out_of_bounds() {
        assert_eq!(
            Position::try_from((8, 0)),
            Err(PositionError::RowOutOfBounds { row: 8 })
        );
        assert_eq!(
            Position::try_from((0, -3)),
            Err(PositionError::ColOutOfBounds { col: -3 })
        );
        assert_eq!(Position::try_from((7, 7)), Ok(Position::new(7, 7)));
    }

    #[test]
    fn test_position_plus_direction() {
        let pos = Position::new(4, 4);
        assert_eq!(pos + Direction::NORTH, Position::new(3, 4));
        assert_eq!(pos + Direction::SOUTH_EAST, Position::new(5, 5));
    }

    #[test]
    fn test_position_can_walk_off_board() {
        let off = Position::new(0, 0) + Direction::NORTH_WEST;
        assert_eq!(off.row(), -1);
        assert_eq!(off.col(), -1);
    }

    #[test]
    fn test_direction_composition() {
        assert_eq!(
            Direction::NORTH + Direction::EAST,
            Direction::NORTH_EAST
        );
        let knight_hop = 2 * Direction::NORTH + Direction::EAST;
        assert_eq!(knight_hop, Direction::new(-2, 1));
    }

    #[test]
    fn test_direction_orientation() {
        assert!(Direction::NORTH.is_orthogonal());
        assert!(!Direction::NORTH.is_diagonal());
        assert!(Direction::SOUTH_WEST.is_diagonal());
    }

    #[test]
    fn test_square_color_parity() {
        assert_eq!(Position::new(0, 0).square_color(), SquareColor::Light);
        assert_eq!(Position::new(0, 1).square_color(), SquareColor::Dark);
        assert_eq!(Position::new(7, 2).square_color(), SquareColor::Dark);
    }

    #[test]
    fn test_display_algebraic() {
        assert_eq!(Position::new(7, 0).to_string(), "a1");
        assert_eq!(Position::new(0, 7).to_string(), "h8");
        assert_eq!(Position::new(4, 4).to_string(), "e4");
    }
}
