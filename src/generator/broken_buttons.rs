/*
broken_buttons.rs

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

//! Choose the broken keys of a round.
//!
//! A few keys are never broken so that the target stays reachable: `1` and `+` for targets up
//! to 50, and `2`, `*`, and `+` for larger targets.
//! The remaining keys are drawn at random, and the draw is checked with a rough reachability
//! estimate (see [`BrokenButtonValidator::validate_solvable`]).
//! When the check fails, a new draw is made with one key less, until the check passes or no
//! key is broken anymore.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::BTreeSet;

use crate::keys::{ALL_KEYS, Key};

/// Targets up to this value only need `1` and `+`.
const SMALL_TARGET: u32 = 50;

/// Return the keys that must stay working for the given target.
pub fn required_working(target: u32) -> BTreeSet<Key> {
    if target <= SMALL_TARGET {
        BTreeSet::from([Key::One, Key::Plus])
    } else {
        BTreeSet::from([Key::Two, Key::Multiply, Key::Plus])
    }
}

/// [`BrokenButtonValidator`] object.
#[derive(Debug, Default)]
pub struct BrokenButtonValidator {
    /// Number of draws it took to generate the last set of broken keys.
    pub attempts: usize,
}

impl BrokenButtonValidator {
    /// Create the object.
    pub fn new() -> Self {
        Self { attempts: 0 }
    }

    /// Generate and return the set of broken keys for the given target.
    ///
    /// At most `count` keys are broken. Fewer keys are returned when the draws with `count`
    /// keys do not pass the reachability check. With a `count` of zero, no key is broken.
    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        target: u32,
        count: usize,
        rng: &mut R,
    ) -> BTreeSet<Key> {
        let required: BTreeSet<Key> = required_working(target);
        let mut breakable: Vec<Key> = ALL_KEYS
            .iter()
            .filter(|k| !required.contains(k))
            .copied()
            .collect();

        self.attempts = 0;
        let mut count: usize = count.min(breakable.len());
        loop {
            self.attempts += 1;
            if count == 0 {
                debug!("Target {target}: no broken key");
                return BTreeSet::new();
            }

            breakable.shuffle(rng);
            let broken: BTreeSet<Key> = breakable[..count].iter().copied().collect();
            if Self::validate_solvable(target, &broken) {
                debug!(
                    "Target {target}: {count} broken keys after {} attempt(s): {broken:?}",
                    self.attempts
                );
                return broken;
            }
            debug!("Target {target}: {broken:?} is not solvable, retrying with fewer keys");
            count -= 1;
        }
    }

    /// Whether the target looks reachable with the keys that are not broken.
    ///
    /// The check is an estimate of the largest reachable value, not a solver:
    ///
    /// * The largest working digit times 10.
    /// * If `+` works, the sum of the working digits times 5 replaces that estimate.
    /// * If `*` works and at least two digits work, the square of the largest working digit
    ///   raises the estimate when it is larger.
    pub fn validate_solvable(target: u32, broken: &BTreeSet<Key>) -> bool {
        let working: Vec<Key> = ALL_KEYS
            .iter()
            .filter(|k| !broken.contains(k))
            .copied()
            .collect();

        if !working.iter().any(|k| k.is_operator()) {
            return false;
        }

        let digits: Vec<u32> = working.iter().filter_map(|k| k.digit()).collect();
        let Some(max_digit) = digits.iter().max().copied() else {
            return false;
        };

        let mut max_reachable: u32 = max_digit * 10;
        if working.contains(&Key::Plus) {
            max_reachable = digits.iter().sum::<u32>() * 5;
        }
        if working.contains(&Key::Multiply) && digits.len() >= 2 {
            max_reachable = max_reachable.max(max_digit * max_digit);
        }
        max_reachable >= target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn keys(symbols: &str) -> BTreeSet<Key> {
        symbols.chars().filter_map(Key::from_symbol).collect()
    }

    #[test]
    fn protected_keys_depend_on_target() {
        assert_eq!(required_working(50), keys("1+"));
        assert_eq!(required_working(51), keys("2*+"));
    }

    #[test]
    fn large_target_keeps_multiplication() {
        let mut rng: StdRng = StdRng::seed_from_u64(42);
        let mut validator: BrokenButtonValidator = BrokenButtonValidator::new();
        for _ in 0..500 {
            let broken: BTreeSet<Key> = validator.generate(200, 7, &mut rng);
            assert!(broken.len() <= 7);
            assert!(BrokenButtonValidator::validate_solvable(200, &broken));
            for k in [Key::Two, Key::Multiply, Key::Plus] {
                assert!(!broken.contains(&k));
            }
        }
    }

    #[test]
    fn small_target_keeps_one_and_plus() {
        let mut rng: StdRng = StdRng::seed_from_u64(3);
        let mut validator: BrokenButtonValidator = BrokenButtonValidator::new();
        for target in 10..=50 {
            let broken: BTreeSet<Key> = validator.generate(target, 3, &mut rng);
            assert!(broken.len() <= 3);
            assert!(!broken.contains(&Key::One));
            assert!(!broken.contains(&Key::Plus));
        }
    }

    #[test]
    fn count_is_capped_by_breakable_keys() {
        let mut rng: StdRng = StdRng::seed_from_u64(5);
        let mut validator: BrokenButtonValidator = BrokenButtonValidator::new();
        let broken: BTreeSet<Key> = validator.generate(10, 100, &mut rng);
        assert!(broken.len() <= 14);
        assert!(BrokenButtonValidator::validate_solvable(10, &broken) || broken.is_empty());
    }

    #[test]
    fn zero_count_breaks_nothing() {
        let mut rng: StdRng = StdRng::seed_from_u64(1);
        let mut validator: BrokenButtonValidator = BrokenButtonValidator::new();
        assert!(validator.generate(120, 0, &mut rng).is_empty());
        assert_eq!(validator.attempts, 1);
    }

    #[test]
    fn unreachable_target_backs_off_to_nothing() {
        // 1+2+...+9 = 45, times 5 is 225: no draw can reach 1000
        let mut rng: StdRng = StdRng::seed_from_u64(9);
        let mut validator: BrokenButtonValidator = BrokenButtonValidator::new();
        let broken: BTreeSet<Key> = validator.generate(1000, 4, &mut rng);
        assert!(broken.is_empty());
        assert_eq!(validator.attempts, 5);
    }

    #[test]
    fn solvable_estimate() {
        assert!(BrokenButtonValidator::validate_solvable(200, &BTreeSet::new()));
        // No operator at all
        assert!(!BrokenButtonValidator::validate_solvable(10, &keys("+-*/")));
        // No digit at all
        assert!(!BrokenButtonValidator::validate_solvable(10, &keys("0123456789")));
        // Only 9 and +: 9 * 5 = 45
        let broken: BTreeSet<Key> = keys("012345678-*/()");
        assert!(BrokenButtonValidator::validate_solvable(45, &broken));
        assert!(!BrokenButtonValidator::validate_solvable(46, &broken));
        // Only 9 and -: 9 * 10 = 90
        let broken: BTreeSet<Key> = keys("012345678+*/");
        assert!(BrokenButtonValidator::validate_solvable(90, &broken));
        assert!(!BrokenButtonValidator::validate_solvable(91, &broken));
        // 1, 9, and *: 9 * 10 = 90 is larger than 9 * 9
        let broken: BTreeSet<Key> = keys("02345678+-/");
        assert!(BrokenButtonValidator::validate_solvable(90, &broken));
        // 1, 2 and + and *: sum 3 * 5 = 15, 2 * 2 = 4
        let broken: BTreeSet<Key> = keys("03456789-/");
        assert!(BrokenButtonValidator::validate_solvable(15, &broken));
        assert!(!BrokenButtonValidator::validate_solvable(16, &broken));
    }
}
