//! High score leaderboard
//!
//! Process-lifetime only, tracks the top 10 runs. Nothing here touches disk;
//! a fresh process starts with an empty board.

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Final score of the run
    pub score: u64,
    /// Seconds survived
    pub time_survived: f32,
    /// Skill rank at the end of the run (0-5)
    pub skill_rank: u8,
}

/// High score leaderboard, sorted descending by score
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u64) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Get the rank a score would achieve (1-indexed, None if doesn't qualify)
    pub fn potential_rank(&self, score: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Add a finished run to the leaderboard (if it qualifies)
    /// Returns the rank achieved (1-indexed) or None if didn't qualify
    pub fn add_score(&mut self, score: u64, time_survived: f32, skill_rank: u8) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = HighScoreEntry {
            score,
            time_survived,
            skill_rank,
        };

        // Insertion point, sorted descending by score
        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);

        Some(rank)
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_score_never_qualifies() {
        let board = HighScores::new();
        assert!(!board.qualifies(0));
        assert!(board.qualifies(5));
    }

    #[test]
    fn scores_insert_sorted_descending() {
        let mut board = HighScores::new();
        assert_eq!(board.add_score(100, 30.0, 2), Some(1));
        assert_eq!(board.add_score(300, 60.0, 4), Some(1));
        assert_eq!(board.add_score(200, 45.0, 3), Some(2));
        let scores: Vec<u64> = board.entries.iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![300, 200, 100]);
        assert_eq!(board.top_score(), Some(300));
    }

    #[test]
    fn board_truncates_to_max_entries() {
        let mut board = HighScores::new();
        for score in 1..=15u64 {
            board.add_score(score * 10, score as f32, 1);
        }
        assert_eq!(board.entries.len(), MAX_HIGH_SCORES);
        // Lowest surviving entry is 60; 50 no longer qualifies
        assert!(!board.qualifies(50));
        assert_eq!(board.potential_rank(155), Some(1));
    }
}
