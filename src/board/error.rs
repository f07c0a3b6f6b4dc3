//! Error types for board operations.

use std::fmt;

/// Error type for out-of-bounds position construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionError {
    /// Row outside the board (must be 0-7)
    RowOutOfBounds { row: i8 },
    /// Column outside the board (must be 0-7)
    ColOutOfBounds { col: i8 },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            PositionError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
        }
    }
}

impl std::error::Error for PositionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_out_of_bounds_display() {
        let err = PositionError::RowOutOfBounds { row: 9 };
        assert!(err.to_string().contains('9'));
        assert!(err.to_string().contains("Row"));
    }

    #[test]
    fn test_col_out_of_bounds_display() {
        let err = PositionError::ColOutOfBounds { col: -1 };
        assert!(err.to_string().contains("-1"));
        assert!(err.to_string().contains("Column"));
    }

    #[test]
    fn test_error_equality() {
        let err1 = PositionError::RowOutOfBounds { row: 8 };
        let err2 = PositionError::RowOutOfBounds { row: 8 };
        assert_eq!(err1, err2);
    }
}
