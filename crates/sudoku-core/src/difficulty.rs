//! Difficulty levels and their cell-removal counts.

use serde::{Deserialize, Serialize};

/// Difficulty level of a puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Easy
    }
}

impl Difficulty {
    /// Number of cells removed from a full solution at this level
    pub fn cells_to_remove(&self) -> usize {
        match self {
            Difficulty::Easy => 30,
            Difficulty::Medium => 40,
            Difficulty::Hard => 50,
            Difficulty::Expert => 60,
        }
    }

    /// All difficulty levels, easiest first
    pub fn all_levels() -> &'static [Difficulty] {
        &[
            Difficulty::Easy,
            Difficulty::Medium,
            Difficulty::Hard,
            Difficulty::Expert,
        ]
    }

    /// Parse a difficulty from its lowercase name, case-insensitively.
    ///
    /// Unknown names fall back to `Easy`, the level a fresh page starts on.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            "expert" => Difficulty::Expert,
            _ => Difficulty::Easy,
        }
    }

    /// The lowercase name used at the frontend boundary
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removal_counts() {
        assert_eq!(Difficulty::Easy.cells_to_remove(), 30);
        assert_eq!(Difficulty::Medium.cells_to_remove(), 40);
        assert_eq!(Difficulty::Hard.cells_to_remove(), 50);
        assert_eq!(Difficulty::Expert.cells_to_remove(), 60);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Difficulty::from_name("easy"), Difficulty::Easy);
        assert_eq!(Difficulty::from_name("Medium"), Difficulty::Medium);
        assert_eq!(Difficulty::from_name("HARD"), Difficulty::Hard);
        assert_eq!(Difficulty::from_name("expert"), Difficulty::Expert);
        // Unknown names fall back to Easy
        assert_eq!(Difficulty::from_name("nightmare"), Difficulty::Easy);
    }

    #[test]
    fn test_name_roundtrip() {
        for &level in Difficulty::all_levels() {
            assert_eq!(Difficulty::from_name(level.name()), level);
        }
    }
}
