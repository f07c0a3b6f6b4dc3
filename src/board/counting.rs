//! Per-side material tallies.

use super::types::{PieceKind, Player};

const NUM_KINDS: usize = PieceKind::ALL.len();

/// A transient per-color, per-kind piece tally.
///
/// Built on demand by [`crate::board::Board::count_pieces`] for the
/// insufficient-material checks; never persisted.
#[derive(Clone, Debug, Default)]
pub struct Counting {
    counts: [[u8; NUM_KINDS]; 2],
    total: u32,
}

impl Counting {
    #[must_use]
    pub fn new() -> Self {
        Counting::default()
    }

    pub(crate) fn increment(&mut self, color: Player, kind: PieceKind) {
        self.counts[color.index()][kind.index()] += 1;
        self.total += 1;
    }

    /// White's count of the given kind
    #[inline]
    #[must_use]
    pub fn white(&self, kind: PieceKind) -> u8 {
        self.counts[Player::White.index()][kind.index()]
    }

    /// Black's count of the given kind
    #[inline]
    #[must_use]
    pub fn black(&self, kind: PieceKind) -> u8 {
        self.counts[Player::Black.index()][kind.index()]
    }

    /// Total pieces on the board, both sides
    #[inline]
    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }
}
