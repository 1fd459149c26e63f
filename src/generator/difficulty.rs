/*
difficulty.rs

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

//! Difficulty tiers.

use clap::ValueEnum;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use strum_macros::FromRepr;

/// Target range when the round has no difficulty tier.
const ANY_TARGET: RangeInclusive<u32> = 10..=200;

/// Number of broken keys when the round has no difficulty tier.
const ANY_BROKEN_COUNT: RangeInclusive<usize> = 3..=7;

/// Puzzle difficulty level.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialOrd,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    FromRepr,
    Default,
)]
#[serde(rename_all = "lowercase")]
#[repr(i32)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

impl Difficulty {
    /// Range of the target numbers.
    pub fn target_range(self) -> RangeInclusive<u32> {
        match self {
            Difficulty::Easy => 10..=50,
            Difficulty::Medium => 50..=100,
            Difficulty::Hard => 100..=200,
        }
    }

    /// Number of keys to break.
    pub fn broken_count(self) -> usize {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Medium => 5,
            Difficulty::Hard => 7,
        }
    }

    /// Return the difficulty that matches the given name, ignoring case.
    pub fn from_name(name: &str) -> Option<Difficulty> {
        Difficulty::from_str(name, true).ok()
    }
}

/// Return the label of an optional tier, used as the scoreboard key.
pub fn label(difficulty: Option<Difficulty>) -> String {
    match difficulty {
        Some(d) => d.to_string(),
        None => "Any".to_string(),
    }
}

/// Draw the target number and the number of keys to break for a round.
///
/// Without a tier, both values are drawn uniformly from the widest ranges.
pub fn round_parameters<R: Rng + ?Sized>(
    difficulty: Option<Difficulty>,
    rng: &mut R,
) -> (u32, usize) {
    match difficulty {
        Some(d) => (rng.random_range(d.target_range()), d.broken_count()),
        None => (
            rng.random_range(ANY_TARGET),
            rng.random_range(ANY_BROKEN_COUNT),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn tier_parameters_stay_in_range() {
        let mut rng: StdRng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            for d in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
                let (target, count) = round_parameters(Some(d), &mut rng);
                assert!(d.target_range().contains(&target));
                assert_eq!(count, d.broken_count());
            }
        }
    }

    #[test]
    fn tierless_parameters_stay_in_range() {
        let mut rng: StdRng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let (target, count) = round_parameters(None, &mut rng);
            assert!((10..=200).contains(&target));
            assert!((3..=7).contains(&count));
        }
    }

    #[test]
    fn names_and_indexes() {
        assert_eq!(Difficulty::from_name("HARD"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_name("medium"), Some(Difficulty::Medium));
        assert_eq!(Difficulty::from_name("extreme"), None);
        assert_eq!(Difficulty::from_repr(0), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_repr(3), None);
        assert_eq!(label(Some(Difficulty::Medium)), "Medium");
        assert_eq!(label(None), "Any");
    }
}
