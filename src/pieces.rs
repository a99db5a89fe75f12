//! Piece and player definitions

use serde::{Deserialize, Serialize};

/// Creature kind, determining the movement rule a piece follows
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Creature {
    QueenBee,
    Beetle,
    Spider,
    Grasshopper,
    SoldierAnt,
}

impl Creature {
    /// Whether this creature may move onto an occupied cell
    pub fn can_climb(self) -> bool {
        matches!(self, Creature::Beetle)
    }
}

/// Player color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Single-bit mask, used to record which colors an empty cell touches
    pub(crate) fn mask(self) -> u8 {
        match self {
            Color::Black => 1 << 0,
            Color::White => 1 << 1,
        }
    }
}

/// A creature tile belonging to one player
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub creature: Creature,
    pub color: Color,
}

impl Piece {
    pub const fn new(creature: Creature, color: Color) -> Self {
        Self { creature, color }
    }
}
