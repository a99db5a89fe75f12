//! Hex board geometry with cube coordinates

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Cube hex coordinates, constrained to `q + r + s == 0`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hex {
    q: i32,
    r: i32,
    s: i32,
}

impl Hex {
    /// Create a hex, asserting the cube-coordinate invariant.
    ///
    /// Panics if `q + r + s != 0` — a malformed coordinate is a programming
    /// error, not a recoverable condition.
    pub const fn new(q: i32, r: i32, s: i32) -> Self {
        assert!(q + r + s == 0, "cube coordinates must sum to zero");
        Self { q, r, s }
    }

    pub const fn q(&self) -> i32 {
        self.q
    }

    pub const fn r(&self) -> i32 {
        self.r
    }

    pub const fn s(&self) -> i32 {
        self.s
    }

    /// Distance between two hexes in the cube metric
    pub fn distance_to(&self, other: Hex) -> i32 {
        let dq = (self.q - other.q).abs();
        let dr = (self.r - other.r).abs();
        let ds = (self.s - other.s).abs();
        (dq + dr + ds) / 2
    }

    /// Get neighbor in a direction
    pub fn neighbor(&self, direction: Direction) -> Hex {
        *self + direction.vector()
    }

    /// The six neighbors in clockwise direction order, starting at `Up`.
    ///
    /// The ordering matters: slide legality looks at each neighbor's cyclic
    /// previous and next entries in this array.
    pub fn adjacent(&self) -> [Hex; 6] {
        Direction::ALL.map(|d| self.neighbor(d))
    }
}

impl Add for Hex {
    type Output = Hex;

    fn add(self, rhs: Hex) -> Hex {
        Hex::new(self.q + rhs.q, self.r + rhs.r, self.s + rhs.s)
    }
}

impl Sub for Hex {
    type Output = Hex;

    fn sub(self, rhs: Hex) -> Hex {
        Hex::new(self.q - rhs.q, self.r - rhs.r, self.s - rhs.s)
    }
}

/// The six hex directions in clockwise order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    UpRight,
    DownRight,
    Down,
    DownLeft,
    UpLeft,
}

impl Direction {
    /// All directions in clockwise order, starting at `Up`
    pub const ALL: [Direction; 6] = [
        Direction::Up,
        Direction::UpRight,
        Direction::DownRight,
        Direction::Down,
        Direction::DownLeft,
        Direction::UpLeft,
    ];

    /// Unit vector for this direction
    pub const fn vector(self) -> Hex {
        match self {
            Direction::Up => Hex::new(0, -1, 1),
            Direction::UpRight => Hex::new(1, -1, 0),
            Direction::DownRight => Hex::new(1, 0, -1),
            Direction::Down => Hex::new(0, 1, -1),
            Direction::DownLeft => Hex::new(-1, 1, 0),
            Direction::UpLeft => Hex::new(-1, 0, 1),
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::UpRight => Direction::DownLeft,
            Direction::DownRight => Direction::UpLeft,
            Direction::Down => Direction::Up,
            Direction::DownLeft => Direction::UpRight,
            Direction::UpLeft => Direction::DownRight,
        }
    }
}
