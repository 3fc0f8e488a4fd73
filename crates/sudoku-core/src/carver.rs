//! Puzzle carving: blanking cells of a full solution.

use crate::rng::SimpleRng;
use crate::{Grid, Position};

/// Carver that derives a playable puzzle from a solved grid
pub struct Carver {
    rng: SimpleRng,
}

impl Default for Carver {
    fn default() -> Self {
        Self::new()
    }
}

impl Carver {
    /// Create a new carver seeded from the platform entropy source
    pub fn new() -> Self {
        Self {
            rng: SimpleRng::new(),
        }
    }

    /// Create a carver with a specific seed for reproducibility
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SimpleRng::with_seed(seed),
        }
    }

    /// Return a copy of `solution` with exactly `remove_count` distinct
    /// cells set to empty, chosen at random without replacement.
    ///
    /// Selection retries random positions until one still holding a digit
    /// is found, so it never re-blanks a cell. Surviving cells keep the
    /// solution's values untouched. No uniqueness-of-solution check is
    /// performed; the carved puzzle may admit other valid completions.
    ///
    /// # Panics
    ///
    /// Panics if `remove_count > 81`; the rejection loop could never
    /// finish otherwise. The difficulty table stays well below this.
    pub fn carve(&mut self, solution: &Grid, remove_count: usize) -> Grid {
        assert!(remove_count <= 81, "cannot remove more than 81 cells");

        let mut puzzle = *solution;
        let mut removed = 0;

        while removed < remove_count {
            let pos = Position::new(self.rng.next_usize(9), self.rng.next_usize(9));
            if puzzle.value(pos) != 0 {
                puzzle.set(pos, None);
                removed += 1;
            }
        }

        puzzle
    }
}
