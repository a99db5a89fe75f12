//! Board position: sparse hex -> piece mapping and the one-hive check

use crate::bfs::{bfs, UNBOUNDED};
use crate::board::Hex;
use crate::pieces::Piece;
use rustc_hash::FxHashMap;

/// Error placing a piece on a position
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("hex {0:?} is already occupied")]
    Occupied(Hex),
}

/// A board position: which hex cells are occupied and by what.
///
/// At most one piece per hex. `Clone` produces a fully independent copy with
/// no shared mutable state, which is what the board-wide query hands to each
/// concurrent per-piece evaluation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Position {
    grid: FxHashMap<Hex, Piece>,
}

impl Position {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a position from piece placements
    pub fn from_pieces(pieces: &[(Hex, Piece)]) -> Result<Self, PlacementError> {
        let mut position = Self::new();
        for &(hex, piece) in pieces {
            position.place(hex, piece)?;
        }
        Ok(position)
    }

    /// Place a piece on an empty cell
    pub fn place(&mut self, hex: Hex, piece: Piece) -> Result<(), PlacementError> {
        if self.grid.contains_key(&hex) {
            return Err(PlacementError::Occupied(hex));
        }
        self.grid.insert(hex, piece);
        Ok(())
    }

    /// Remove and return the piece at `hex`, if any
    pub fn remove(&mut self, hex: Hex) -> Option<Piece> {
        self.grid.remove(&hex)
    }

    pub fn is_occupied(&self, hex: Hex) -> bool {
        self.grid.contains_key(&hex)
    }

    pub fn piece_at(&self, hex: Hex) -> Option<&Piece> {
        self.grid.get(&hex)
    }

    /// Iterate pieces on the board
    pub fn pieces(&self) -> impl Iterator<Item = (Hex, Piece)> + '_ {
        self.grid.iter().map(|(&hex, &piece)| (hex, piece))
    }

    /// Number of occupied cells
    pub fn len(&self) -> usize {
        self.grid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    /// Run `f` with the piece at `hex` temporarily removed.
    ///
    /// The piece is restored to the same cell on every exit path, including
    /// an unwind out of `f`. Panics if `hex` is vacant; callers must check
    /// occupancy first.
    pub fn with_piece_removed<T>(&mut self, hex: Hex, f: impl FnOnce(&mut Self) -> T) -> T {
        struct Restore<'a> {
            position: &'a mut Position,
            hex: Hex,
            piece: Option<Piece>,
        }

        impl Drop for Restore<'_> {
            fn drop(&mut self) {
                if let Some(piece) = self.piece.take() {
                    self.position.grid.insert(self.hex, piece);
                }
            }
        }

        let piece = match self.grid.remove(&hex) {
            Some(piece) => piece,
            None => panic!("with_piece_removed: no piece at {hex:?}"),
        };
        let mut guard = Restore {
            position: self,
            hex,
            piece: Some(piece),
        };
        f(&mut *guard.position)
    }

    /// Check that the occupied cells form a single connected cluster,
    /// enforcing the one-hive rule. An empty position is vacuously connected.
    ///
    /// Recomputed from scratch on every candidate move; boards stay small
    /// enough that a full traversal beats incremental bookkeeping.
    pub fn is_connected(&self) -> bool {
        let Some(&start) = self.grid.keys().next() else {
            return true;
        };

        let buckets = bfs(start, UNBOUNDED, |hex| {
            hex.adjacent()
                .into_iter()
                .filter(|n| self.grid.contains_key(n))
                .collect()
        });

        let reached: usize = buckets.iter().map(Vec::len).sum();
        reached == self.grid.len()
    }
}
