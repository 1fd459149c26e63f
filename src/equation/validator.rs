/*
validator.rs

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

//! Verify the equations that the player submits.

use log::debug;

use super::errors::EquationError;
use super::evaluator;
use super::strip_whitespace;

/// Maximum distance between the value of an equation and the target.
const TOLERANCE: f64 = 1e-4;

/// Binary operators.
const OPERATORS: [char; 4] = ['+', '-', '*', '/'];

/// [`EquationValidator`] object.
#[derive(Debug, Default, Clone, Copy)]
pub struct EquationValidator;

impl EquationValidator {
    /// Create the object.
    pub fn new() -> Self {
        Self
    }

    /// Verify that the equation is well-formed and equals the target, and return its value.
    ///
    /// The equation must use canonical operator symbols (`*` and `/`). Whitespace is ignored.
    ///
    /// # Errors
    ///
    /// The first check that fails gives the error, in that order: empty equation, invalid
    /// characters, unbalanced parentheses, operator or decimal point placement, evaluation,
    /// and comparison with the target.
    pub fn validate(&self, equation: &str, target: u32) -> Result<f64, EquationError> {
        let equation: String = strip_whitespace(equation);

        if equation.is_empty() {
            return Err(EquationError::EmptyEquation);
        }
        if !equation
            .chars()
            .all(|c| c.is_ascii_digit() || OPERATORS.contains(&c) || "().".contains(c))
        {
            return Err(EquationError::InvalidCharacters);
        }
        if !Self::check_balanced_parentheses(&equation) {
            return Err(EquationError::UnbalancedParentheses);
        }
        if !Self::check_valid_operators(&equation) {
            return Err(EquationError::InvalidOperatorPlacement);
        }

        let value: f64 = evaluator::evaluate(&equation)?;
        if (value - f64::from(target)).abs() < TOLERANCE {
            Ok(value)
        } else {
            debug!("{equation} equals {value}, not {target}");
            Err(EquationError::WrongResult { value, target })
        }
    }

    /// Whether the parentheses are balanced.
    ///
    /// Scanning from the left, there are never more closing than opening parentheses, and both
    /// counts are equal at the end.
    fn check_balanced_parentheses(equation: &str) -> bool {
        let mut open: i64 = 0;
        for c in equation.chars() {
            match c {
                '(' => open += 1,
                ')' => open -= 1,
                _ => (),
            }
            if open < 0 {
                return false;
            }
        }
        open == 0
    }

    /// Whether the operators and the decimal points are correctly placed.
    ///
    /// * The equation does not start with `+`, `*`, or `/` (a leading `-` is a negative number).
    /// * The equation does not end with an operator or a decimal point.
    /// * Two operators do not follow each other, unless the second one is a `-`, which is then
    ///   the sign of the next number.
    /// * Each decimal point sits between two digits.
    fn check_valid_operators(equation: &str) -> bool {
        let chars: Vec<char> = equation.chars().collect();
        let (Some(first), Some(last)) = (chars.first(), chars.last()) else {
            return false;
        };

        if "+*/".contains(*first) || "+-*/.".contains(*last) {
            return false;
        }

        for pair in chars.windows(2) {
            if OPERATORS.contains(&pair[0]) && OPERATORS.contains(&pair[1]) && pair[1] != '-' {
                return false;
            }
        }

        chars.iter().enumerate().all(|(i, c)| {
            *c != '.'
                || (i > 0
                    && chars[i - 1].is_ascii_digit()
                    && chars.get(i + 1).is_some_and(|n| n.is_ascii_digit()))
        })
    }

    /// Whether two equations are considered the same.
    ///
    /// Equations are the same when they are identical once whitespace is removed, or when they
    /// have the same value and the same length.
    /// This is only an approximation: `2+3` and `3+2` are the same, but `2+3` and `1+1+3` are
    /// not, and `1+8` and `3*3` are.
    pub fn are_equivalent(&self, equation1: &str, equation2: &str) -> bool {
        let equation1: String = strip_whitespace(equation1);
        let equation2: String = strip_whitespace(equation2);

        if equation1 == equation2 {
            return true;
        }
        match (
            evaluator::evaluate(&equation1),
            evaluator::evaluate(&equation2),
        ) {
            (Ok(v1), Ok(v2)) => v1 == v2 && equation1.chars().count() == equation2.chars().count(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(equation: &str, target: u32) -> Result<f64, EquationError> {
        EquationValidator::new().validate(equation, target)
    }

    #[test]
    fn accepts_equations_equal_to_target() {
        for equation in [
            "12",
            "6*2",
            "24/2",
            "(2+4)*2",
            "20-8",
            "-8+20",
            "3*-2+18",
            "1.5*8",
            " 10 + 2 ",
            "13-0.5-0.5",
        ] {
            assert_eq!(validate(equation, 12), Ok(12.0), "{equation}");
        }
    }

    #[test]
    fn tolerance() {
        // 37/3 = 12.333...
        assert!(validate("37/3", 12).is_err());
        assert!(validate("12.00001", 12).is_ok());
        assert!(validate("12.001", 12).is_err());
    }

    #[test]
    fn empty() {
        assert_eq!(validate("", 5), Err(EquationError::EmptyEquation));
        assert_eq!(validate("   ", 5), Err(EquationError::EmptyEquation));
    }

    #[test]
    fn invalid_characters() {
        for equation in ["2x3", "2×3", "a", "2^3", "1,5", "2%"] {
            assert_eq!(
                validate(equation, 6),
                Err(EquationError::InvalidCharacters),
                "{equation}"
            );
        }
    }

    #[test]
    fn unbalanced_parentheses() {
        for equation in ["(1+2", "1+2)", ")1+2(", "((3)"] {
            assert_eq!(
                validate(equation, 3),
                Err(EquationError::UnbalancedParentheses),
                "{equation}"
            );
        }
    }

    #[test]
    fn operator_placement() {
        for equation in [
            "+3", "*3", "/3", "3+", "3-", "3.", "1++2", "1*/2", "1-+2", "1*+2", ".5", "1..2",
            "(.5)", "2.+1",
        ] {
            assert_eq!(
                validate(equation, 3),
                Err(EquationError::InvalidOperatorPlacement),
                "{equation}"
            );
        }
    }

    #[test]
    fn minus_after_operator_is_a_sign() {
        assert_eq!(validate("5--2", 7), Ok(7.0));
        assert_eq!(validate("-3+10", 7), Ok(7.0));
        assert_eq!(validate("14/-2*-1", 7), Ok(7.0));
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(validate("1/0", 1), Err(EquationError::DivisionByZero));
        assert_eq!(validate("4/(2-2)", 100), Err(EquationError::DivisionByZero));
    }

    #[test]
    fn evaluation_failures() {
        assert_eq!(validate("1.2.3", 1), Err(EquationError::InvalidEquation));
        assert_eq!(validate("2(3)", 6), Err(EquationError::InvalidEquation));
        assert_eq!(validate("()", 0), Err(EquationError::InvalidEquation));
        assert_eq!(validate("05+7", 12), Err(EquationError::InvalidEquation));
        assert_eq!(validate("012", 12), Err(EquationError::InvalidEquation));
        assert_eq!(validate("0+12", 12), Ok(12.0));
        assert_eq!(validate("00+12", 12), Ok(12.0));
        assert_eq!(validate("05.5+6.5", 12), Ok(12.0));
    }

    #[test]
    fn wrong_result() {
        assert_eq!(
            validate("2+2", 5),
            Err(EquationError::WrongResult {
                value: 4.0,
                target: 5
            })
        );
    }

    #[test]
    fn equivalence() {
        let v: EquationValidator = EquationValidator::new();
        assert!(v.are_equivalent("2+3", "2+3"));
        assert!(v.are_equivalent("2 + 3", "2+3"));
        assert!(v.are_equivalent("2+3", "3+2"));
        assert!(v.are_equivalent("1+4", "2+3"));
        assert!(!v.are_equivalent("2+3", "1+1+3"));
        assert!(!v.are_equivalent("2+3", "2+4"));
        assert!(!v.are_equivalent("1/0", "2/0"));
    }
}
