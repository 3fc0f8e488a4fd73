//! WebAssembly boundary for the browser Sudoku game.
//!
//! Exposes the core game session to the page's JS layer: starting a game,
//! entering digits through the number picker, checking entries against the
//! stored solution, and clearing user input. Rendering, click handling, and
//! CSS stay on the JS side; the page re-renders from the snapshot this
//! crate hands over.

use sudoku_core::{Difficulty, GameSession, Position, SavedGame};
use wasm_bindgen::prelude::*;

#[cfg(test)]
mod tests;

// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

#[cfg(target_arch = "wasm32")]
fn console_log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
fn console_log(_msg: &str) {}

fn position(row: usize, col: usize) -> Option<Position> {
    (row < 9 && col < 9).then(|| Position::new(row, col))
}

/// The game controller driven by the page
#[wasm_bindgen]
pub struct SudokuGame {
    session: GameSession,
}

#[wasm_bindgen]
impl SudokuGame {
    /// Create a game at the named difficulty ("easy", "medium", "hard",
    /// "expert"; unknown names fall back to easy)
    #[wasm_bindgen(constructor)]
    pub fn new(difficulty: &str) -> SudokuGame {
        let difficulty = Difficulty::from_name(difficulty);
        console_log(&format!("new {} game", difficulty));
        SudokuGame {
            session: GameSession::new(difficulty),
        }
    }

    /// Start a new game, replacing all session state
    #[wasm_bindgen]
    pub fn new_game(&mut self, difficulty: &str) {
        let difficulty = Difficulty::from_name(difficulty);
        console_log(&format!("new {} game", difficulty));
        self.session = GameSession::new(difficulty);
    }

    /// Current board and fixed-cell mask as `{ puzzle, fixed }` — the page
    /// renders one DOM cell per position from this
    #[wasm_bindgen]
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.session.snapshot())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Enter a digit (1..=9) at a cell. Returns false if the cell is fixed
    /// or the coordinates/digit are out of range; the board is untouched
    /// in that case.
    #[wasm_bindgen]
    pub fn set_cell(&mut self, row: usize, col: usize, digit: u8) -> bool {
        match position(row, col) {
            Some(pos) => self.session.set_cell(pos, digit),
            None => false,
        }
    }

    /// Remove the user entry at a cell, if any
    #[wasm_bindgen]
    pub fn clear_cell(&mut self, row: usize, col: usize) {
        if let Some(pos) = position(row, col) {
            self.session.clear_cell(pos);
        }
    }

    /// Check all entries against the stored solution, returning
    /// `{ all_correct, cells }` with per-cell "Fixed" / "Correct" /
    /// "Incorrect" statuses for the page to map to CSS classes
    #[wasm_bindgen]
    pub fn evaluate(&self) -> Result<JsValue, JsValue> {
        let evaluation = self.session.evaluate();
        console_log(&format!("evaluate: all_correct={}", evaluation.all_correct));
        serde_wasm_bindgen::to_value(&evaluation).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Whether every cell currently matches the solution
    #[wasm_bindgen]
    pub fn all_correct(&self) -> bool {
        self.session.evaluate().all_correct
    }

    /// Reset every user-filled cell to empty
    #[wasm_bindgen]
    pub fn clear_user_inputs(&mut self) {
        self.session.clear_user_inputs();
    }

    /// Digit at a cell (0 if empty or out of range) for single-cell
    /// re-render
    #[wasm_bindgen]
    pub fn cell_value(&self, row: usize, col: usize) -> u8 {
        position(row, col).map_or(0, |pos| self.session.board().value(pos))
    }

    /// Whether the cell was given at puzzle creation
    #[wasm_bindgen]
    pub fn is_fixed(&self, row: usize, col: usize) -> bool {
        position(row, col).is_some_and(|pos| self.session.is_fixed(pos))
    }

    /// Current difficulty name
    #[wasm_bindgen]
    pub fn difficulty(&self) -> String {
        self.session.difficulty().to_string()
    }

    /// Export the session state as JSON (no consumer contract is defined;
    /// this is an optional hook for the page)
    #[wasm_bindgen]
    pub fn state_json(&self) -> String {
        serde_json::to_string(&self.session.to_saved()).unwrap_or_default()
    }

    /// Restore session state from exported JSON
    #[wasm_bindgen]
    pub fn load_state_json(&mut self, json: &str) -> bool {
        let saved: SavedGame = match serde_json::from_str(json) {
            Ok(saved) => saved,
            Err(_) => return false,
        };
        match GameSession::from_saved(&saved) {
            Some(session) => {
                self.session = session;
                true
            }
            None => false,
        }
    }
}
