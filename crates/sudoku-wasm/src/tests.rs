//! Tests for the wasm game controller.
//!
//! The JsValue-returning surface needs `wasm-pack test`; everything else
//! runs on the host.

use crate::SudokuGame;

fn find_empty(game: &SudokuGame) -> (usize, usize) {
    for row in 0..9 {
        for col in 0..9 {
            if game.cell_value(row, col) == 0 {
                return (row, col);
            }
        }
    }
    unreachable!("carved puzzle always has empty cells");
}

fn find_fixed(game: &SudokuGame) -> (usize, usize) {
    for row in 0..9 {
        for col in 0..9 {
            if game.is_fixed(row, col) {
                return (row, col);
            }
        }
    }
    unreachable!("carved puzzle always has fixed cells");
}

#[test]
fn test_new_game_difficulties() {
    for name in ["easy", "medium", "hard", "expert"] {
        let game = SudokuGame::new(name);
        assert_eq!(game.difficulty(), name);
    }
}

#[test]
fn test_unknown_difficulty_falls_back_to_easy() {
    let game = SudokuGame::new("impossible");
    assert_eq!(game.difficulty(), "easy");
}

#[test]
fn test_empty_cell_count_matches_difficulty() {
    let game = SudokuGame::new("expert");
    let mut empty = 0;
    for row in 0..9 {
        for col in 0..9 {
            if game.cell_value(row, col) == 0 {
                empty += 1;
            }
        }
    }
    assert_eq!(empty, 60);
}

#[test]
fn test_set_cell_and_clear_cell() {
    let mut game = SudokuGame::new("easy");
    let (row, col) = find_empty(&game);

    assert!(game.set_cell(row, col, 5));
    assert_eq!(game.cell_value(row, col), 5);
    assert!(!game.is_fixed(row, col));

    game.clear_cell(row, col);
    assert_eq!(game.cell_value(row, col), 0);
}

#[test]
fn test_set_cell_rejects_fixed_and_out_of_range() {
    let mut game = SudokuGame::new("easy");
    let (row, col) = find_fixed(&game);
    let before = game.cell_value(row, col);

    assert!(!game.set_cell(row, col, before % 9 + 1));
    assert_eq!(game.cell_value(row, col), before);

    let (row, col) = find_empty(&game);
    assert!(!game.set_cell(row, col, 0));
    assert!(!game.set_cell(row, col, 10));
    assert!(!game.set_cell(9, 0, 5));
    assert!(!game.set_cell(0, 9, 5));
}

#[test]
fn test_fresh_board_is_not_all_correct() {
    let game = SudokuGame::new("easy");
    assert!(!game.all_correct());
}

#[test]
fn test_clear_user_inputs_resets_entries() {
    let mut game = SudokuGame::new("medium");
    let (row, col) = find_empty(&game);
    game.set_cell(row, col, 7);

    game.clear_user_inputs();
    assert_eq!(game.cell_value(row, col), 0);
}

#[test]
fn test_new_game_replaces_state() {
    let mut game = SudokuGame::new("easy");
    let (row, col) = find_empty(&game);
    game.set_cell(row, col, 7);

    game.new_game("hard");
    assert_eq!(game.difficulty(), "hard");
    // A fresh session carries no user entries
    for row in 0..9 {
        for col in 0..9 {
            assert_eq!(game.is_fixed(row, col), game.cell_value(row, col) != 0);
        }
    }
}

#[test]
fn test_state_json_roundtrip() {
    let mut game = SudokuGame::new("hard");
    let (row, col) = find_empty(&game);
    game.set_cell(row, col, 3);

    let json = game.state_json();
    assert!(json.contains("\"difficulty\":\"hard\""));

    let mut restored = SudokuGame::new("easy");
    assert!(restored.load_state_json(&json));
    assert_eq!(restored.difficulty(), "hard");
    assert_eq!(restored.cell_value(row, col), 3);
    assert!(!restored.is_fixed(row, col));
}

#[test]
fn test_load_state_json_rejects_garbage() {
    let mut game = SudokuGame::new("easy");
    assert!(!game.load_state_json("not json"));
    assert!(!game.load_state_json("{\"puzzle\":\"123\",\"board\":\"456\",\"solution\":\"789\",\"difficulty\":\"easy\"}"));
    // The original game is untouched after a failed load
    assert_eq!(game.difficulty(), "easy");
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    use crate::SudokuGame;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn test_snapshot_shape() {
        let game = SudokuGame::new("easy");
        let snapshot = game.snapshot().unwrap();
        assert!(!snapshot.is_null());
    }

    #[wasm_bindgen_test]
    fn test_evaluate_returns_object() {
        let game = SudokuGame::new("easy");
        let evaluation = game.evaluate().unwrap();
        assert!(!evaluation.is_null());
    }
}
