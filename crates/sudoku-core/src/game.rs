//! Game session state and evaluation.

use serde::{Deserialize, Serialize};

use crate::{Carver, Difficulty, Generator, Grid, Position};

/// Evaluation status of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellStatus {
    /// Given at puzzle creation; never flagged either way
    Fixed,
    /// Matches the stored solution
    Correct,
    /// Differs from the stored solution (empty cells included)
    Incorrect,
}

/// Result of checking the board against the stored solution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    /// True iff every cell matches the solution
    pub all_correct: bool,
    /// Per-cell status, row-major
    pub cells: [[CellStatus; 9]; 9],
}

/// Render-ready view of a fresh session: the puzzle and its given cells
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub puzzle: [[u8; 9]; 9],
    pub fixed: [[bool; 9]; 9],
}

/// Serializable session state for the export hook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedGame {
    /// The puzzle as carved (givens only)
    pub puzzle: String,
    /// The current board including user entries
    pub board: String,
    /// The stored solution
    pub solution: String,
    /// Difficulty name
    pub difficulty: String,
}

/// One game of Sudoku: the carved puzzle, its solution, and user entries.
///
/// A session is created fresh for every new game and replaced wholesale on
/// the next one; there is no hidden shared state.
pub struct GameSession {
    /// Current board, mutated in place by user entries
    board: Grid,
    /// The stored solution the board is checked against
    solution: Grid,
    /// True at cells that were given at puzzle creation
    fixed: [[bool; 9]; 9],
    /// True at cells whose current digit was entered by the user
    user_filled: [[bool; 9]; 9],
    /// Difficulty level
    difficulty: Difficulty,
}

impl GameSession {
    /// Start a new game: generate a solution, carve the puzzle for
    /// `difficulty`, and mark the surviving cells as fixed.
    pub fn new(difficulty: Difficulty) -> Self {
        let mut generator = Generator::new();
        let mut carver = Carver::new();
        Self::from_generated(&mut generator, &mut carver, difficulty)
    }

    /// Start a new game with a fixed seed for reproducibility
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        let mut generator = Generator::with_seed(seed);
        // Decorrelate the carving stream from the fill stream
        let mut carver = Carver::with_seed(seed.wrapping_add(1));
        Self::from_generated(&mut generator, &mut carver, difficulty)
    }

    fn from_generated(
        generator: &mut Generator,
        carver: &mut Carver,
        difficulty: Difficulty,
    ) -> Self {
        let solution = generator.generate();
        let board = carver.carve(&solution, difficulty.cells_to_remove());
        Self::from_grids(board, solution, [[false; 9]; 9], difficulty)
    }

    /// Assemble a session from known grids; `fixed` is derived from the
    /// non-zero cells of `board` that are not flagged as user-filled.
    fn from_grids(
        board: Grid,
        solution: Grid,
        user_filled: [[bool; 9]; 9],
        difficulty: Difficulty,
    ) -> Self {
        let mut fixed = [[false; 9]; 9];
        for pos in Position::all() {
            fixed[pos.row][pos.col] =
                board.value(pos) != 0 && !user_filled[pos.row][pos.col];
        }
        Self {
            board,
            solution,
            fixed,
            user_filled,
            difficulty,
        }
    }

    /// Whether the cell was given at puzzle creation
    pub fn is_fixed(&self, pos: Position) -> bool {
        self.fixed[pos.row][pos.col]
    }

    /// Whether the cell currently holds a user entry
    pub fn is_user_filled(&self, pos: Position) -> bool {
        self.user_filled[pos.row][pos.col]
    }

    /// Enter a digit at a cell.
    ///
    /// Returns false without touching the board if the cell is fixed or the
    /// digit is outside 1..=9. No Sudoku-rule check is made at write time;
    /// conflicts only surface at evaluation. Re-entering a cell overwrites
    /// the previous user digit.
    pub fn set_cell(&mut self, pos: Position, digit: u8) -> bool {
        if self.is_fixed(pos) || !(1..=9).contains(&digit) {
            return false;
        }
        self.board.set(pos, Some(digit));
        self.user_filled[pos.row][pos.col] = true;
        true
    }

    /// Remove a single user entry, leaving fixed cells untouched
    pub fn clear_cell(&mut self, pos: Position) {
        if self.user_filled[pos.row][pos.col] {
            self.board.set(pos, None);
            self.user_filled[pos.row][pos.col] = false;
        }
    }

    /// Compare the board against the stored solution cell by cell.
    ///
    /// This is stricter than Sudoku-rule validity: the user must reproduce
    /// the exact generated solution, not merely any valid completion.
    pub fn evaluate(&self) -> Evaluation {
        let mut all_correct = true;
        let mut cells = [[CellStatus::Fixed; 9]; 9];

        for pos in Position::all() {
            let matches = self.board.value(pos) == self.solution.value(pos);
            if !matches {
                all_correct = false;
            }
            if !self.is_fixed(pos) {
                cells[pos.row][pos.col] = if matches {
                    CellStatus::Correct
                } else {
                    CellStatus::Incorrect
                };
            }
        }

        Evaluation { all_correct, cells }
    }

    /// Reset every user-filled cell to empty. Idempotent; fixed cells are
    /// untouched.
    pub fn clear_user_inputs(&mut self) {
        for pos in Position::all() {
            if self.user_filled[pos.row][pos.col] {
                self.board.set(pos, None);
                self.user_filled[pos.row][pos.col] = false;
            }
        }
    }

    /// Render-ready view of the current board and its given cells
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            puzzle: self.board.values(),
            fixed: self.fixed,
        }
    }

    /// Export the session state for external use
    pub fn to_saved(&self) -> SavedGame {
        let mut puzzle = self.board;
        for pos in Position::all() {
            if self.user_filled[pos.row][pos.col] {
                puzzle.set(pos, None);
            }
        }
        SavedGame {
            puzzle: puzzle.to_string_compact(),
            board: self.board.to_string_compact(),
            solution: self.solution.to_string_compact(),
            difficulty: self.difficulty.name().to_string(),
        }
    }

    /// Restore a session from exported state, `None` if any grid string is
    /// malformed
    pub fn from_saved(saved: &SavedGame) -> Option<Self> {
        let puzzle = Grid::from_string(&saved.puzzle)?;
        let board = Grid::from_string(&saved.board)?;
        let solution = Grid::from_string(&saved.solution)?;
        let difficulty = Difficulty::from_name(&saved.difficulty);

        let mut user_filled = [[false; 9]; 9];
        for pos in Position::all() {
            user_filled[pos.row][pos.col] = puzzle.value(pos) == 0 && board.value(pos) != 0;
        }
        Some(Self::from_grids(board, solution, user_filled, difficulty))
    }

    // Getters
    pub fn board(&self) -> &Grid {
        &self.board
    }
    pub fn solution(&self) -> &Grid {
        &self.solution
    }
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}
