/*
generator.rs

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

//! Generate random puzzles.
//!
//! A puzzle is composed of two parts:
//!
//! * A target number.
//!   Its range depends on the [`difficulty::Difficulty`] tier, and
//!   [`difficulty::round_parameters`] draws it together with the number of keys to break.
//!
//! * A set of broken keys.
//!   You create it with a [`broken_buttons::BrokenButtonValidator`] object and its
//!   [`broken_buttons::BrokenButtonValidator::generate`] method.
//!   The method never breaks the keys that the target requires, and breaks fewer keys when
//!   the target does not look reachable anymore.
//!
//! [`generate_puzzle`] does both steps.

pub mod broken_buttons;
pub mod difficulty;

use rand::Rng;
use serde::Serialize;
use std::collections::BTreeSet;

use crate::keys::Key;

/// A generated puzzle.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Puzzle {
    /// Difficulty tier, or None for a round without tier.
    pub difficulty: Option<difficulty::Difficulty>,

    /// Number that the equations must equal.
    pub target: u32,

    /// Keys that the player cannot use.
    pub broken_keys: BTreeSet<Key>,
}

/// Draw a target and a set of broken keys for the given tier.
pub fn generate_puzzle<R: Rng + ?Sized>(
    validator: &mut broken_buttons::BrokenButtonValidator,
    difficulty: Option<difficulty::Difficulty>,
    rng: &mut R,
) -> Puzzle {
    let (target, count) = difficulty::round_parameters(difficulty, rng);
    Puzzle {
        difficulty,
        target,
        broken_keys: validator.generate(target, count, rng),
    }
}
