//! Hive Core - legal-move generation for the hex tile-placement game
//!
//! This crate provides the move-generation core:
//! - Board geometry (hex grid with cube coordinates)
//! - Piece and player types
//! - Generic breadth-first traversal over hex cells
//! - Board position with the one-hive connectivity check
//! - Per-creature move rules, board-wide move and placement queries
//!
//! Turn sequencing, win detection and placement bookkeeping are the caller's
//! concern; this crate only answers where a piece may go.

pub mod bfs;
pub mod board;
pub mod moves;
pub mod pieces;
pub mod position;

// Re-exports for convenient access
pub use bfs::{bfs, UNBOUNDED};
pub use board::{Direction, Hex};
pub use moves::MoveError;
pub use pieces::{Color, Creature, Piece};
pub use position::{PlacementError, Position};
