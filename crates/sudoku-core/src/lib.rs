//! Core Sudoku engine.
//!
//! Pure data and algorithm logic for a single-player Sudoku game: a
//! randomized backtracking solution generator, a puzzle carver that blanks
//! cells according to a difficulty level, and a game session that tracks
//! user entries and checks them against the stored solution. Rendering and
//! input handling live in the consuming frontend (see the `sudoku-wasm`
//! crate for the browser boundary).

mod carver;
mod difficulty;
mod game;
mod generator;
mod grid;
mod rng;

pub use carver::Carver;
pub use difficulty::Difficulty;
pub use game::{CellStatus, Evaluation, GameSession, SavedGame, Snapshot};
pub use generator::Generator;
pub use grid::{Grid, Position};
