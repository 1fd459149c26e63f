/*
score.rs

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

//! Compute the points of an accepted equation.
//!
//! More complex equations earn more points:
//!
//! | Feature                                   | Points                       |
//! |-------------------------------------------|------------------------------|
//! | Any equation                              | 10                           |
//! | Each operator                             | 5                            |
//! | Each `*` and each `/`                     | 3 more                       |
//! | Each opening parenthesis                  | 10                           |
//! | Length                                    | 1 per 3 characters, up to 20 |
//! | Two different operators                   | 10                           |
//! | Three or four different operators         | 15                           |
//! | Each number with two or more digits       | 2 per digit                  |

use super::strip_whitespace;

/// Points for any accepted equation.
const BASE_POINTS: u32 = 10;

/// Maximum points for the equation length.
const MAX_LENGTH_POINTS: u32 = 20;

const OPERATORS: [char; 4] = ['+', '-', '*', '/'];

/// [`ScoreCalculator`] object.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScoreCalculator;

impl ScoreCalculator {
    /// Create the object.
    pub fn new() -> Self {
        Self
    }

    /// Return the points of the given equation, which uses canonical operator symbols.
    pub fn calculate_score(&self, equation: &str) -> u32 {
        let equation: String = strip_whitespace(equation);
        let count = |symbol: char| equation.chars().filter(|c| *c == symbol).count() as u32;

        let mut score: u32 = BASE_POINTS;

        score += OPERATORS.iter().map(|op| count(*op)).sum::<u32>() * 5;
        score += count('*') * 3;
        score += count('/') * 3;
        score += count('(') * 10;
        score += (equation.chars().count() as u32 / 3).min(MAX_LENGTH_POINTS);

        let distinct_operators: usize = OPERATORS
            .iter()
            .filter(|op| equation.contains(**op))
            .count();
        score += match distinct_operators {
            0 | 1 => 0,
            2 => 10,
            _ => 15,
        };

        for number in extract_numbers(&equation) {
            let digits: u32 = number.chars().count() as u32;
            if digits > 1 {
                score += digits * 2;
            }
        }
        score
    }
}

/// Return the runs of consecutive digits, from left to right.
pub fn extract_numbers(equation: &str) -> Vec<&str> {
    equation
        .split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
        .collect()
}
