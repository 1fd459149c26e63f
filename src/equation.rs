/*
equation.rs

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

//! Check and score the equations that the player builds.
//!
//! * [`validator::EquationValidator`] screens the equation text (characters, parentheses,
//!   operator placement), evaluates it with [`evaluator::evaluate`], and compares the value
//!   with the target.
//!   It also decides whether two equations are the same, so that the player cannot submit an
//!   equation twice.
//! * [`score::ScoreCalculator`] gives points to accepted equations.
//! * [`errors::EquationError`] lists the reasons for refusing an equation.
//!
//! All these functions work on canonical text, where the multiplication is `*` and the
//! division is `/`. See [`crate::keys::normalize`].

pub mod errors;
pub mod evaluator;
pub mod score;
pub mod validator;

/// Remove all whitespace from the equation.
pub fn strip_whitespace(equation: &str) -> String {
    equation.chars().filter(|c| !c.is_whitespace()).collect()
}
