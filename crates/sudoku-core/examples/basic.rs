//! Basic example of using the Sudoku engine

use sudoku_core::{CellStatus, Difficulty, GameSession, Position};

fn main() {
    // Start a new medium game
    println!("Starting a medium game...\n");
    let mut session = GameSession::new(Difficulty::Medium);

    println!("Puzzle ({} cells removed):", Difficulty::Medium.cells_to_remove());
    println!("{}", session.board());
    println!("Empty cells: {}", session.board().empty_count());

    // Fill one empty cell with the right digit and one with a wrong digit
    let empty: Vec<Position> = Position::all()
        .filter(|&p| session.board().value(p) == 0)
        .collect();
    let good = empty[0];
    let bad = empty[1];

    session.set_cell(good, session.solution().value(good));
    session.set_cell(bad, session.solution().value(bad) % 9 + 1);

    // Check the board against the stored solution
    let evaluation = session.evaluate();
    println!("All correct: {}", evaluation.all_correct);
    println!(
        "({}, {}) -> {:?}",
        good.row, good.col, evaluation.cells[good.row][good.col]
    );
    println!(
        "({}, {}) -> {:?}",
        bad.row, bad.col, evaluation.cells[bad.row][bad.col]
    );
    assert_eq!(evaluation.cells[good.row][good.col], CellStatus::Correct);
    assert_eq!(evaluation.cells[bad.row][bad.col], CellStatus::Incorrect);

    // Wipe the user entries and export the state
    session.clear_user_inputs();
    let saved = session.to_saved();
    println!("\nExported state:");
    println!("  board:      {}", saved.board);
    println!("  difficulty: {}", saved.difficulty);
}
