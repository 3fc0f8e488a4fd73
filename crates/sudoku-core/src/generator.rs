//! Full-solution generation via randomized backtracking.

use crate::rng::SimpleRng;
use crate::{Grid, Position};

/// Generator of complete, rule-valid solution grids
pub struct Generator {
    rng: SimpleRng,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a new generator seeded from the platform entropy source
    pub fn new() -> Self {
        Self {
            rng: SimpleRng::new(),
        }
    }

    /// Create a generator with a specific seed for reproducibility
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SimpleRng::with_seed(seed),
        }
    }

    /// Generate a fully-filled valid grid.
    ///
    /// Every row, column, and 3x3 box of the result is a permutation of
    /// 1..=9. Starting from an empty board the search always succeeds, so
    /// there is no failure path to surface.
    pub fn generate(&mut self) -> Grid {
        let mut grid = Grid::new();
        let filled = self.fill_from(&mut grid, 0);
        debug_assert!(filled, "an empty board is always completable");
        grid
    }

    /// Depth-first backtracking over cells in row-major order.
    ///
    /// `index` is the row-major cell index to continue from. Returns true
    /// once all 81 cells are filled; on failure the grid is left exactly as
    /// it was when the call was made.
    fn fill_from(&mut self, grid: &mut Grid, index: usize) -> bool {
        // Skip to the next empty cell
        let mut index = index;
        while index < 81 {
            if grid.value(Position::new(index / 9, index % 9)) == 0 {
                break;
            }
            index += 1;
        }
        if index == 81 {
            return true;
        }
        let pos = Position::new(index / 9, index % 9);

        let mut candidates: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        self.rng.shuffle(&mut candidates);

        for &value in &candidates {
            if grid.allows(pos, value) {
                grid.set(pos, Some(value));
                if self.fill_from(grid, index + 1) {
                    return true;
                }
                // Undo before trying the next candidate
                grid.set(pos, None);
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_is_solution(grid: &Grid) {
        assert!(grid.is_complete());
        assert!(grid.is_valid());
    }

    #[test]
    fn test_generate_produces_valid_solution() {
        let mut generator = Generator::with_seed(42);
        assert_is_solution(&generator.generate());
    }

    #[test]
    fn test_rows_cols_boxes_are_permutations() {
        let mut generator = Generator::with_seed(7);
        let grid = generator.generate();
        let values = grid.values();

        let expected: Vec<u8> = (1..=9).collect();
        for i in 0..9 {
            let mut row: Vec<u8> = (0..9).map(|j| values[i][j]).collect();
            let mut col: Vec<u8> = (0..9).map(|j| values[j][i]).collect();
            let mut boxed: Vec<u8> = (0..9)
                .map(|j| values[(i / 3) * 3 + j / 3][(i % 3) * 3 + j % 3])
                .collect();
            row.sort_unstable();
            col.sort_unstable();
            boxed.sort_unstable();
            assert_eq!(row, expected, "row {} is not a permutation", i);
            assert_eq!(col, expected, "col {} is not a permutation", i);
            assert_eq!(boxed, expected, "box {} is not a permutation", i);
        }
    }

    #[test]
    fn test_repeated_generation_terminates() {
        // Termination property across many runs, whatever candidate order
        // the random stream produced.
        let mut generator = Generator::new();
        for _ in 0..25 {
            assert_is_solution(&generator.generate());
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = Generator::with_seed(123).generate();
        let b = Generator::with_seed(123).generate();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_vary() {
        let a = Generator::with_seed(1).generate();
        let b = Generator::with_seed(2).generate();
        // A collision here would mean the seed is being ignored.
        assert_ne!(a, b);
    }
}
