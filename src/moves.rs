//! Per-creature move rules and board-wide move generation

use crate::bfs::{bfs, UNBOUNDED};
use crate::board::{Direction, Hex};
use crate::pieces::{Color, Creature};
use crate::position::Position;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, trace};

/// Spider moves exactly this many slide steps
const SPIDER_STEPS: usize = 3;

/// Error querying moves for a piece
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The queried origin holds no piece. A caller contract violation, never
    /// a game-rule outcome: an immobile piece reports an empty set instead.
    #[error("no piece at {0:?}")]
    VacantOrigin(Hex),
}

impl Position {
    /// All cells the piece at `origin` may legally move to this turn.
    ///
    /// The piece is lifted off the board for the duration of the evaluation;
    /// if the remaining hive is disconnected the piece cannot move at all and
    /// the result is empty, without consulting its creature rule.
    pub fn available_moves(&mut self, origin: Hex) -> Result<FxHashSet<Hex>, MoveError> {
        let piece = *self.piece_at(origin).ok_or(MoveError::VacantOrigin(origin))?;

        let moves = self.with_piece_removed(origin, |hive| {
            if !hive.is_connected() {
                trace!(?origin, "move would split the hive");
                return FxHashSet::default();
            }

            match piece.creature {
                Creature::QueenBee | Creature::Beetle => hive
                    .slide_steps(origin, piece.creature.can_climb())
                    .into_iter()
                    .collect(),
                Creature::Grasshopper => hive.jump_moves(origin),
                Creature::Spider => hive.crawl_moves_at_depth(origin, SPIDER_STEPS),
                Creature::SoldierAnt => hive.crawl_moves(origin),
            }
        });

        Ok(moves)
    }

    /// Single slide steps from `origin`: the adjacent cells the piece can
    /// reach without losing contact with the hive or squeezing through a
    /// blocked gap. With `allow_climbing`, occupied cells are also reachable.
    ///
    /// Also serves as the neighbor function for the spider and soldier-ant
    /// traversals, which model those pieces as sliding one cell at a time.
    fn slide_steps(&self, origin: Hex, allow_climbing: bool) -> Vec<Hex> {
        let adjacent = origin.adjacent();

        let mut steps = Vec::new();
        for i in 0..adjacent.len() {
            let dest = adjacent[i];
            let prev = adjacent[(i + 5) % 6];
            let next = adjacent[(i + 1) % 6];

            let dest_occupied = self.is_occupied(dest);
            let prev_occupied = self.is_occupied(prev);
            let next_occupied = self.is_occupied(next);

            // The slide would lose all contact with the hive.
            if !dest_occupied && !prev_occupied && !next_occupied {
                continue;
            }
            // The gap between two occupied cells is too narrow to slide through.
            if !dest_occupied && prev_occupied && next_occupied {
                continue;
            }
            // An occupied destination takes a climbing creature.
            if dest_occupied && !allow_climbing {
                continue;
            }

            steps.push(dest);
        }
        steps
    }

    /// Grasshopper rule: jump over a contiguous run of occupied cells to the
    /// first empty cell beyond it. Directions with an empty adjacent cell
    /// contribute nothing.
    fn jump_moves(&self, origin: Hex) -> FxHashSet<Hex> {
        let mut moves = FxHashSet::default();
        for direction in Direction::ALL {
            let mut target = origin.neighbor(direction);
            if !self.is_occupied(target) {
                continue;
            }
            while self.is_occupied(target) {
                target = target.neighbor(direction);
            }
            moves.insert(target);
        }
        moves
    }

    /// Spider rule: the cells at exactly `steps` slide steps from `origin`.
    /// Empty when every path dead-ends earlier; shorter paths don't count.
    fn crawl_moves_at_depth(&self, origin: Hex, steps: usize) -> FxHashSet<Hex> {
        let buckets = bfs(origin, steps, |hex| self.slide_steps(hex, false));
        buckets[steps].iter().copied().collect()
    }

    /// Soldier-ant rule: every cell reachable by any number of slide steps.
    fn crawl_moves(&self, origin: Hex) -> FxHashSet<Hex> {
        bfs(origin, UNBOUNDED, |hex| self.slide_steps(hex, false))
            .into_iter()
            .skip(1)
            .flatten()
            .collect()
    }

    /// Legal moves for every piece of `color`, keyed by origin. Origins whose
    /// piece has no legal move are omitted.
    ///
    /// Each piece is evaluated in parallel against its own copy of the
    /// position, so the temporary removals never observe each other.
    pub fn all_available_moves(&self, color: Color) -> FxHashMap<Hex, FxHashSet<Hex>> {
        let origins: Vec<Hex> = self
            .pieces()
            .filter(|&(_, piece)| piece.color == color)
            .map(|(hex, _)| hex)
            .collect();

        let moves: FxHashMap<Hex, FxHashSet<Hex>> = origins
            .into_par_iter()
            .filter_map(|origin| {
                let mut scratch = self.clone();
                let moves = scratch
                    .available_moves(origin)
                    .expect("origin enumerated from this position");
                (!moves.is_empty()).then_some((origin, moves))
            })
            .collect();

        debug!(?color, movable = moves.len(), "board-wide move generation");
        moves
    }

    /// Cells where a new piece of `color` may be placed during the drop
    /// phase: empty, adjacent to the hive, and touching no opposing piece.
    ///
    /// The opening turns, where the touching rule does not yet apply, are the
    /// caller's concern.
    pub fn legal_placements(&self, color: Color) -> FxHashSet<Hex> {
        // Bitmask per empty frontier cell of the colors it touches.
        let mut touching: FxHashMap<Hex, u8> = FxHashMap::default();
        for (hex, piece) in self.pieces() {
            for neighbor in hex.adjacent() {
                if self.is_occupied(neighbor) {
                    continue;
                }
                *touching.entry(neighbor).or_default() |= piece.color.mask();
            }
        }

        touching
            .into_iter()
            .filter(|&(_, mask)| mask == color.mask())
            .map(|(hex, _)| hex)
            .collect()
    }
}
