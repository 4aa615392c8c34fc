//! Session high score leaderboard
//!
//! Kept in memory for the lifetime of the scene (runs do not persist
//! across sessions); serde support lets an embedding surface show or
//! ship the table however it likes.

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Final score of the run
    pub score: u64,
    /// Ticks the run survived
    pub ticks: u64,
}

/// High score leaderboard, best first
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u64) -> bool {
        self.entries.len() < MAX_HIGH_SCORES
            || self.entries.last().is_some_and(|e| score > e.score)
    }

    /// Record a finished run; keeps the table sorted and truncated.
    /// Returns the entry's rank (0-based) if it made the table.
    pub fn record(&mut self, score: u64, ticks: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self
            .entries
            .iter()
            .position(|e| score > e.score)
            .unwrap_or(self.entries.len());
        self.entries.insert(rank, HighScoreEntry { score, ticks });
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    pub fn best(&self) -> Option<&HighScoreEntry> {
        self.entries.first()
    }
}
