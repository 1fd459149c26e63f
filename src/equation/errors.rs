/*
errors.rs

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

//! Reasons for refusing an equation.
//!
//! All these errors are the player's mistakes. They are returned to the front-end, which
//! displays the message, and they never change the round.

use thiserror::Error;

/// Type of errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EquationError {
    /// Nothing to evaluate.
    #[error("Equation is empty")]
    EmptyEquation,

    /// A character is not a digit, an operator, a parenthesis, or a decimal point.
    #[error("Invalid characters in equation")]
    InvalidCharacters,

    /// A closing parenthesis without an opening one, or an opening one never closed.
    #[error("Unbalanced parentheses")]
    UnbalancedParentheses,

    /// Misplaced operator or decimal point.
    #[error("Invalid operator placement")]
    InvalidOperatorPlacement,

    #[error("Division by zero")]
    DivisionByZero,

    /// The equation passed the character checks but cannot be evaluated.
    #[error("Invalid equation")]
    InvalidEquation,

    /// The equation does not equal the target.
    #[error("Equals {value:.2}, not {target}")]
    WrongResult { value: f64, target: u32 },

    /// An equivalent equation was already accepted in the round.
    #[error("Equation already used!")]
    DuplicateEquation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(EquationError::EmptyEquation.to_string(), "Equation is empty");
        assert_eq!(
            EquationError::DuplicateEquation.to_string(),
            "Equation already used!"
        );
        assert_eq!(
            EquationError::WrongResult {
                value: 7.0 / 3.0,
                target: 12
            }
            .to_string(),
            "Equals 2.33, not 12"
        );
    }
}
