/*
evaluator.rs

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

//! Evaluate arithmetic expressions.
//!
//! The evaluator only knows numbers, the four operators, and parentheses:
//!
//! ```text
//! expression = term { ("+" | "-") term }
//! term       = unary { ("*" | "/") unary }
//! unary      = ("+" | "-") unary | primary
//! primary    = number | "(" expression ")"
//! number     = digit { digit } [ "." digit { digit } ]
//! ```
//!
//! Integers with leading zeros, such as `05`, are refused. Decimal numbers may start with
//! zeros (`0.5`, `05.5`).
//!
//! Computations use [`f64`], so `7/2` is `3.5`.
//! Integers above 2^53 (about 16 digits) lose precision: `100000000000000001` reads as
//! `100000000000000000`.

use std::iter::Peekable;
use std::str::Chars;

use super::errors::EquationError;

/// Maximum number of nested parentheses and unary operators.
const MAX_DEPTH: usize = 256;

/// Recursive descent parser that computes the value while parsing.
struct Parser<'a> {
    chars: Peekable<Chars<'a>>,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(expression: &'a str) -> Self {
        Self {
            chars: expression.chars().peekable(),
            depth: 0,
        }
    }

    /// Consume the next character if it is the expected one.
    fn eat(&mut self, expected: char) -> bool {
        self.chars.next_if_eq(&expected).is_some()
    }

    fn expression(&mut self) -> Result<f64, EquationError> {
        let mut value: f64 = self.term()?;
        loop {
            if self.eat('+') {
                value += self.term()?;
            } else if self.eat('-') {
                value -= self.term()?;
            } else {
                return Ok(value);
            }
        }
    }

    fn term(&mut self) -> Result<f64, EquationError> {
        let mut value: f64 = self.unary()?;
        loop {
            if self.eat('*') {
                value *= self.unary()?;
            } else if self.eat('/') {
                let divisor: f64 = self.unary()?;
                if divisor == 0.0 {
                    return Err(EquationError::DivisionByZero);
                }
                value /= divisor;
            } else {
                return Ok(value);
            }
        }
    }

    fn unary(&mut self) -> Result<f64, EquationError> {
        if self.eat('-') {
            Ok(-self.nested(Self::unary)?)
        } else if self.eat('+') {
            self.nested(Self::unary)
        } else {
            self.primary()
        }
    }

    fn primary(&mut self) -> Result<f64, EquationError> {
        if self.eat('(') {
            let value: f64 = self.nested(Self::expression)?;
            if !self.eat(')') {
                return Err(EquationError::InvalidEquation);
            }
            return Ok(value);
        }
        self.number()
    }

    fn number(&mut self) -> Result<f64, EquationError> {
        let mut literal: String = String::new();
        while let Some(c) = self.chars.next_if(|c| c.is_ascii_digit() || *c == '.') {
            literal.push(c);
        }
        if !literal.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(EquationError::InvalidEquation);
        }
        // Integers cannot have leading zeros, except zero itself (`0`, `00`)
        if !literal.contains('.')
            && literal.starts_with('0')
            && literal.chars().any(|c| c != '0')
        {
            return Err(EquationError::InvalidEquation);
        }
        literal
            .parse::<f64>()
            .map_err(|_| EquationError::InvalidEquation)
    }

    /// Run a rule one nesting level deeper.
    fn nested(
        &mut self,
        rule: fn(&mut Self) -> Result<f64, EquationError>,
    ) -> Result<f64, EquationError> {
        if self.depth >= MAX_DEPTH {
            return Err(EquationError::InvalidEquation);
        }
        self.depth += 1;
        let value = rule(self);
        self.depth -= 1;
        value
    }
}

/// Compute the value of the given expression, which must not contain whitespace.
///
/// # Errors
///
/// [`EquationError::DivisionByZero`] when a divisor evaluates to zero, and
/// [`EquationError::InvalidEquation`] when the expression does not follow the grammar.
pub fn evaluate(expression: &str) -> Result<f64, EquationError> {
    let mut parser: Parser = Parser::new(expression);
    let value: f64 = parser.expression()?;
    if parser.chars.peek().is_some() {
        return Err(EquationError::InvalidEquation);
    }
    Ok(value)
}
