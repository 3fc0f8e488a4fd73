//! The 9x9 grid and cell positions.

use serde::{Deserialize, Serialize};

/// A cell position on the 9x9 grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position (row and col must be in 0..9)
    pub fn new(row: usize, col: usize) -> Self {
        debug_assert!(row < 9 && col < 9);
        Self { row, col }
    }

    /// Iterate over all 81 positions in row-major order
    pub fn all() -> impl Iterator<Item = Position> {
        (0..9).flat_map(|row| (0..9).map(move |col| Position::new(row, col)))
    }

    /// Index of the 3x3 box containing this position (0..9)
    pub fn box_index(&self) -> usize {
        (self.row / 3) * 3 + self.col / 3
    }
}

/// A 9x9 Sudoku grid of digits, 0 meaning empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: [[u8; 9]; 9],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self { cells: [[0; 9]; 9] }
    }

    /// Get the digit at a position, `None` if the cell is empty
    pub fn get(&self, pos: Position) -> Option<u8> {
        match self.cells[pos.row][pos.col] {
            0 => None,
            v => Some(v),
        }
    }

    /// Raw digit at a position, 0 meaning empty
    pub fn value(&self, pos: Position) -> u8 {
        self.cells[pos.row][pos.col]
    }

    /// Set the digit at a position, `None` to clear it
    pub fn set(&mut self, pos: Position, value: Option<u8>) {
        debug_assert!(value.map_or(true, |v| (1..=9).contains(&v)));
        self.cells[pos.row][pos.col] = value.unwrap_or(0);
    }

    /// All cell values as a 9x9 matrix
    pub fn values(&self) -> [[u8; 9]; 9] {
        self.cells
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> usize {
        Position::all().filter(|&p| self.value(p) == 0).count()
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        81 - self.empty_count()
    }

    /// Check whether every cell is filled
    pub fn is_complete(&self) -> bool {
        self.empty_count() == 0
    }

    /// Check whether placing `value` at `pos` keeps the grid rule-valid.
    ///
    /// Returns false iff `value` already appears in the row, the column, or
    /// the 3x3 box containing `pos`. The cell at `pos` itself is expected
    /// to be empty.
    pub fn allows(&self, pos: Position, value: u8) -> bool {
        for x in 0..9 {
            if self.cells[pos.row][x] == value {
                return false;
            }
            if self.cells[x][pos.col] == value {
                return false;
            }
        }

        let start_row = pos.row - pos.row % 3;
        let start_col = pos.col - pos.col % 3;
        for row in start_row..start_row + 3 {
            for col in start_col..start_col + 3 {
                if self.cells[row][col] == value {
                    return false;
                }
            }
        }

        true
    }

    /// Check that no row, column, or box contains a duplicate non-zero digit
    pub fn is_valid(&self) -> bool {
        for i in 0..9 {
            let mut row_seen = [false; 10];
            let mut col_seen = [false; 10];
            let mut box_seen = [false; 10];

            for j in 0..9 {
                let r = self.cells[i][j];
                if r != 0 {
                    if row_seen[r as usize] {
                        return false;
                    }
                    row_seen[r as usize] = true;
                }

                let c = self.cells[j][i];
                if c != 0 {
                    if col_seen[c as usize] {
                        return false;
                    }
                    col_seen[c as usize] = true;
                }

                let b = self.cells[(i / 3) * 3 + j / 3][(i % 3) * 3 + j % 3];
                if b != 0 {
                    if box_seen[b as usize] {
                        return false;
                    }
                    box_seen[b as usize] = true;
                }
            }
        }
        true
    }

    /// Serialize to an 81-character digit string in row-major order
    pub fn to_string_compact(&self) -> String {
        let mut s = String::with_capacity(81);
        for pos in Position::all() {
            s.push((b'0' + self.value(pos)) as char);
        }
        s
    }

    /// Parse an 81-character digit string ('0' or '.' for empty cells)
    pub fn from_string(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != 81 {
            return None;
        }

        let mut grid = Self::new();
        for (i, c) in chars.iter().enumerate() {
            let value = match c {
                '0' | '.' => 0,
                '1'..='9' => *c as u8 - b'0',
                _ => return None,
            };
            grid.cells[i / 9][i % 9] = value;
        }
        Some(grid)
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..9 {
            if row % 3 == 0 && row != 0 {
                writeln!(f, "------+-------+------")?;
            }
            for col in 0..9 {
                if col % 3 == 0 && col != 0 {
                    write!(f, "| ")?;
                }
                match self.cells[row][col] {
                    0 => write!(f, ". ")?,
                    v => write!(f, "{} ", v)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
