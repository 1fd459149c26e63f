/*
game.rs

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

//! Manage the round in progress.
//!
//! A round starts with a target number and a set of broken keys.
//! The player types equations with the working keys and submits them.
//! Each equation that equals the target and that is not the same as a previous one earns
//! points.
//! The round is completed after [`EQUATIONS_PER_ROUND`] accepted equations. After that, the
//! player actions are ignored until a new round starts.

use log::debug;
use rand::Rng;
use serde::Serialize;
use std::collections::BTreeSet;

use crate::equation::errors::EquationError;
use crate::equation::score::ScoreCalculator;
use crate::equation::validator::EquationValidator;
use crate::generator::broken_buttons::{BrokenButtonValidator, required_working};
use crate::generator::difficulty::Difficulty;
use crate::generator::{self, Puzzle};
use crate::keys::{self, Key};
use crate::player_input::PlayerInput;

/// Number of equations to complete a round.
pub const EQUATIONS_PER_ROUND: usize = 5;

/// An accepted equation.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct EquationRecord {
    /// Equation as displayed, with the `×` and `÷` symbols.
    pub equation: String,

    /// Points earned by the equation.
    pub score: u32,
}

impl EquationRecord {
    /// Return the line that the front-end displays in the list of equations.
    pub fn display(&self, target: u32) -> String {
        format!("{} = {target} (+{} pts)", self.equation, self.score)
    }
}

/// State of the round.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum RoundState {
    InProgress,
    Completed,
}

/// Read-only copy of the round, for the front-end.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RoundSnapshot {
    pub difficulty: Option<Difficulty>,
    pub target: u32,
    pub broken_keys: BTreeSet<Key>,
    pub current_input: String,
    pub equations: Vec<EquationRecord>,
    pub total_score: u32,
    pub completed: bool,
}

/// Manage the status of the round in progress.
#[derive(Debug, Default)]
pub struct Game {
    /// Difficulty tier of the round, or None for a round without tier.
    difficulty: Option<Difficulty>,

    /// Number that the equations must equal.
    target: u32,

    /// Keys that the player cannot use.
    broken_keys: BTreeSet<Key>,

    /// Accepted equations, in submission order.
    equations: Vec<EquationRecord>,

    /// Equation being typed.
    player_input: PlayerInput,

    /// Sum of the points of the accepted equations.
    total_score: u32,

    /// Whether the round has all its equations.
    completed: bool,

    equation_validator: EquationValidator,
    score_calculator: ScoreCalculator,
    broken_validator: BrokenButtonValidator,
}

impl Game {
    /// Create a [`Game`] object.
    ///
    /// No round is in progress until [`Game::start_round`] or [`Game::set_puzzle`] is called.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new round for the given tier.
    pub fn start_round(&mut self, difficulty: Option<Difficulty>) {
        self.start_round_with(difficulty, &mut rand::rng());
    }

    /// Start a new round for the given tier, drawing the puzzle with the provided generator.
    pub fn start_round_with<R: Rng + ?Sized>(
        &mut self,
        difficulty: Option<Difficulty>,
        rng: &mut R,
    ) {
        let puzzle: Puzzle =
            generator::generate_puzzle(&mut self.broken_validator, difficulty, rng);
        self.set_puzzle(puzzle);
    }

    /// Start a new round with the given puzzle.
    ///
    /// The keys that the target requires are removed from the broken keys.
    pub fn set_puzzle(&mut self, puzzle: Puzzle) {
        let required: BTreeSet<Key> = required_working(puzzle.target);
        let mut broken_keys: BTreeSet<Key> = puzzle.broken_keys;
        broken_keys.retain(|k| !required.contains(k));

        self.difficulty = puzzle.difficulty;
        self.target = puzzle.target;
        self.broken_keys = broken_keys;
        self.equations.clear();
        self.player_input.clear();
        self.total_score = 0;
        self.completed = false;
        debug!(
            "New round: difficulty {:?}, target {}, broken keys {:?}",
            self.difficulty, self.target, self.broken_keys
        );
    }

    /// Whether the given key is broken.
    pub fn is_key_broken(&self, key: Key) -> bool {
        self.broken_keys.contains(&key)
    }

    /// Add the key to the equation being typed and return whether it was added.
    ///
    /// Broken keys are not added, and nothing is added once the round is completed.
    pub fn append_input(&mut self, key: Key) -> bool {
        if self.completed || self.is_key_broken(key) {
            return false;
        }
        self.player_input.push(key);
        true
    }

    /// Add the key with the given symbol and return whether it was added.
    ///
    /// The display symbols `×` and `÷` are accepted. Symbols that are not keys are ignored.
    pub fn append_symbol(&mut self, symbol: char) -> bool {
        match Key::from_symbol(symbol) {
            Some(key) => self.append_input(key),
            None => false,
        }
    }

    /// Clear the equation being typed.
    pub fn clear_input(&mut self) {
        if !self.completed {
            self.player_input.clear();
        }
    }

    /// Remove the last symbol of the equation being typed.
    pub fn backspace(&mut self) {
        if !self.completed {
            self.player_input.pop();
        }
    }

    /// Submit the equation being typed.
    ///
    /// Return the points earned by the equation, or None if the round is already completed, in
    /// which case the submission is ignored.
    ///
    /// # Errors
    ///
    /// The [`EquationError`] that explains why the equation is refused. The round does not
    /// change.
    pub fn submit(&mut self) -> Result<Option<u32>, EquationError> {
        if self.completed {
            debug!("Round completed: submission ignored");
            return Ok(None);
        }
        if self.player_input.is_blank() {
            return Err(EquationError::EmptyEquation);
        }

        let equation: String = keys::normalize(self.player_input.as_str());
        self.equation_validator
            .validate(&equation, self.target)
            .inspect_err(|e| debug!("Equation {equation} refused: {e}"))?;

        if !self.is_equation_unique(&equation) {
            debug!("Equation {equation} refused: already used");
            return Err(EquationError::DuplicateEquation);
        }

        let score: u32 = self.score_calculator.calculate_score(&equation);
        self.equations.push(EquationRecord {
            equation: keys::to_display(&equation),
            score,
        });
        self.total_score += score;
        self.player_input.clear();
        debug!(
            "Equation {equation} accepted: {score} points, total {}",
            self.total_score
        );

        if self.equations.len() >= EQUATIONS_PER_ROUND {
            self.completed = true;
            debug!("Round completed with {} points", self.total_score);
        }
        Ok(Some(score))
    }

    /// Whether no accepted equation is the same as the given one.
    fn is_equation_unique(&self, equation: &str) -> bool {
        !self.equations.iter().any(|record| {
            self.equation_validator
                .are_equivalent(equation, &keys::normalize(&record.equation))
        })
    }

    /// Difficulty tier of the round.
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    /// Number that the equations must equal.
    pub fn target(&self) -> u32 {
        self.target
    }

    /// Keys that the player cannot use.
    pub fn broken_keys(&self) -> &BTreeSet<Key> {
        &self.broken_keys
    }

    /// Equation being typed, in canonical symbols.
    pub fn current_input(&self) -> &str {
        self.player_input.as_str()
    }

    /// Accepted equations, in submission order.
    pub fn equations(&self) -> &[EquationRecord] {
        &self.equations
    }

    /// Sum of the points of the accepted equations.
    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    /// Whether the round has all its equations.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Progress of the round.
    pub fn state(&self) -> RoundState {
        if self.completed {
            RoundState::Completed
        } else {
            RoundState::InProgress
        }
    }

    /// Number of draws it took to generate the broken keys of the last random round.
    pub fn generator_attempts(&self) -> usize {
        self.broken_validator.attempts
    }

    /// Return a copy of the round.
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            difficulty: self.difficulty,
            target: self.target,
            broken_keys: self.broken_keys.clone(),
            current_input: self.player_input.as_str().to_string(),
            equations: self.equations.clone(),
            total_score: self.total_score,
            completed: self.completed,
        }
    }
}
