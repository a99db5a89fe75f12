//! Breadth-first traversal over hex cells, bucketed by depth

use crate::board::Hex;
use rustc_hash::FxHashSet;

/// Sentinel for [`bfs`]'s `max_depth`: traverse until no new cells are found.
pub const UNBOUNDED: usize = 0;

/// Breadth-first search from `start`, returning the reached cells grouped by
/// depth. Bucket 0 is exactly `[start]`; bucket `d` holds the cells first
/// reached in `d` steps.
///
/// `neighbors` supplies the expansion for each cell and may consult board
/// occupancy or any other state; the traversal itself only deduplicates
/// against a global visited set.
///
/// A `max_depth` of [`UNBOUNDED`] (zero) traverses until a bucket comes up
/// empty. A positive `max_depth` stops there, and the result is padded with
/// empty buckets so it always holds `max_depth + 1` entries even when the
/// reachable cells run out early.
pub fn bfs<F>(start: Hex, max_depth: usize, mut neighbors: F) -> Vec<Vec<Hex>>
where
    F: FnMut(Hex) -> Vec<Hex>,
{
    let mut visited = FxHashSet::default();
    visited.insert(start);

    let mut buckets = vec![vec![start]];

    let mut depth = 1;
    while max_depth == UNBOUNDED || depth <= max_depth {
        let mut bucket = Vec::new();
        for &hex in &buckets[depth - 1] {
            for neighbor in neighbors(hex) {
                if visited.insert(neighbor) {
                    bucket.push(neighbor);
                }
            }
        }
        let exhausted = bucket.is_empty();
        buckets.push(bucket);
        if exhausted {
            break;
        }
        depth += 1;
    }

    while buckets.len() <= max_depth {
        buckets.push(Vec::new());
    }

    buckets
}
