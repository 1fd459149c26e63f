/*
highscores.rs

Copyright 2025 The Broken Calculator authors

This file is part of Broken Calculator.

Broken Calculator is free software: you can redistribute it and/or modify it
under the terms of the GNU General Public License as published by the Free
Software Foundation, either version 3 of the License, or (at your option) any
later version.

Broken Calculator is distributed in the hope that it will be useful, but
WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more
details.

You should have received a copy of the GNU General Public License along with
Broken Calculator. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Manage high scores of the completed rounds.
//!
//! The main object, [`HighScores`], maintains a scoreboard for each difficulty tier.
//! The scoreboards only live as long as the session.

use log::debug;
use std::collections::HashMap;
use std::time::SystemTime;

/// Number of entries per scoreboard (number of top scores to keep).
const BOARD_SIZE: usize = 10;

/// Object that represent a score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    /// Total points of the round.
    pub points: u32,

    /// Completion timestamp, which is used to display the date and time in the scoreboard.
    pub when: SystemTime,
}

/// Sorted list of the top scores for a tier.
#[derive(Debug, Clone, Default)]
struct ScoreBoard {
    /// Sorted list of the top scores, best first.
    top: Vec<Score>,
}

impl ScoreBoard {
    /// Add a score to the scoreboard and return the position in the board, or None if the
    /// score does not make it to the board.
    ///
    /// The returned position starts at 1 (top score). A new score goes after the older scores
    /// with the same points.
    fn add_score(&mut self, points: u32, when: SystemTime) -> Option<usize> {
        let index: usize = self.top.partition_point(|s| s.points >= points);
        if index >= BOARD_SIZE {
            return None;
        }
        self.top.insert(index, Score { points, when });
        self.top.truncate(BOARD_SIZE);
        Some(index + 1)
    }
}

/// List of the scoreboards, indexed by the tier label.
#[derive(Debug, Clone, Default)]
pub struct HighScores {
    board: HashMap<String, ScoreBoard>,
}

impl HighScores {
    /// Create a [`HighScores`] object.
    pub fn new() -> Self {
        Self {
            board: HashMap::new(),
        }
    }

    /// Add the score to the scoreboard of the given tier and return the position in the
    /// scoreboard, or None if the score does not make it to the board.
    ///
    /// The returned position starts at 1 (top score).
    pub fn add_score(&mut self, tier: &str, points: u32) -> Option<usize> {
        let position: Option<usize> = self
            .board
            .entry(tier.to_string())
            .or_default()
            .add_score(points, SystemTime::now());
        debug!("{tier} score {points}: position {position:?}");
        position
    }

    /// Return the scores for the given tier, best first.
    ///
    /// Return None when the scoreboard is empty.
    pub fn get_scores(&self, tier: &str) -> Option<&Vec<Score>> {
        self.board.get(tier).map(|b| &b.top).filter(|t| !t.is_empty())
    }

    /// Return the tiers that have scores, sorted by name.
    pub fn tiers(&self) -> Vec<&str> {
        let mut tiers: Vec<&str> = self.board.keys().map(String::as_str).collect();
        tiers.sort_unstable();
        tiers
    }

    /// Return whether the list of scoreboards is empty (no score for any tier).
    pub fn is_empty(&self) -> bool {
        self.board.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_are_sorted_by_points() {
        let mut scores: HighScores = HighScores::new();
        assert!(scores.is_empty());
        assert_eq!(scores.add_score("Easy", 100), Some(1));
        assert_eq!(scores.add_score("Easy", 150), Some(1));
        assert_eq!(scores.add_score("Easy", 120), Some(2));
        assert_eq!(scores.add_score("Easy", 120), Some(3));
        let points: Vec<u32> = scores
            .get_scores("Easy")
            .unwrap()
            .iter()
            .map(|s| s.points)
            .collect();
        assert_eq!(points, vec![150, 120, 120, 100]);
        assert!(scores.get_scores("Hard").is_none());
    }

    #[test]
    fn board_keeps_ten_scores() {
        let mut scores: HighScores = HighScores::new();
        for points in 1..=10 {
            assert!(scores.add_score("Hard", points * 10).is_some());
        }
        assert_eq!(scores.add_score("Hard", 5), None);
        assert_eq!(scores.add_score("Hard", 55), Some(6));
        let board: &Vec<Score> = scores.get_scores("Hard").unwrap();
        assert_eq!(board.len(), BOARD_SIZE);
        assert_eq!(board.last().map(|s| s.points), Some(20));
    }

    #[test]
    fn tiers_are_separate() {
        let mut scores: HighScores = HighScores::new();
        scores.add_score("Medium", 80);
        scores.add_score("Any", 90);
        assert_eq!(scores.tiers(), vec!["Any", "Medium"]);
        assert_eq!(scores.get_scores("Medium").map(|b| b.len()), Some(1));
    }
}
