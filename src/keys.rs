/*
keys.rs

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

//! Calculator keypad.
//!
//! The keypad has 16 keys: the ten digits, the four operators, and the two parentheses.
//! Internally, equations use the canonical operator symbols (`*` and `/`). The front-end
//! displays the multiplication and the division with `×` and `÷`. Both forms are accepted
//! when the player types a key, and [`normalize`] converts display text back to canonical text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display symbol for the multiplication.
pub const DISPLAY_MULTIPLY: char = '×';

/// Display symbol for the division.
pub const DISPLAY_DIVIDE: char = '÷';

/// Calculator key.
///
/// The declaration order is the keypad order, which is also the sort order of key sets.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    #[serde(rename = "0")]
    Zero,
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "-")]
    Minus,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
    #[serde(rename = "(")]
    OpenParenthesis,
    #[serde(rename = ")")]
    CloseParenthesis,
}

/// All the keys of the keypad.
pub const ALL_KEYS: [Key; 16] = [
    Key::Zero,
    Key::One,
    Key::Two,
    Key::Three,
    Key::Four,
    Key::Five,
    Key::Six,
    Key::Seven,
    Key::Eight,
    Key::Nine,
    Key::Plus,
    Key::Minus,
    Key::Multiply,
    Key::Divide,
    Key::OpenParenthesis,
    Key::CloseParenthesis,
];

impl Key {
    /// Return the key for the given symbol, or None if no key has that symbol.
    ///
    /// Both the canonical (`*`, `/`) and the display (`×`, `÷`) symbols are recognized.
    pub fn from_symbol(symbol: char) -> Option<Key> {
        let key: Key = match symbol {
            '0' => Key::Zero,
            '1' => Key::One,
            '2' => Key::Two,
            '3' => Key::Three,
            '4' => Key::Four,
            '5' => Key::Five,
            '6' => Key::Six,
            '7' => Key::Seven,
            '8' => Key::Eight,
            '9' => Key::Nine,
            '+' => Key::Plus,
            '-' => Key::Minus,
            '*' | DISPLAY_MULTIPLY => Key::Multiply,
            '/' | DISPLAY_DIVIDE => Key::Divide,
            '(' => Key::OpenParenthesis,
            ')' => Key::CloseParenthesis,
            _ => return None,
        };
        Some(key)
    }

    /// Canonical symbol, used in equations that are evaluated.
    pub fn symbol(self) -> char {
        match self {
            Key::Zero => '0',
            Key::One => '1',
            Key::Two => '2',
            Key::Three => '3',
            Key::Four => '4',
            Key::Five => '5',
            Key::Six => '6',
            Key::Seven => '7',
            Key::Eight => '8',
            Key::Nine => '9',
            Key::Plus => '+',
            Key::Minus => '-',
            Key::Multiply => '*',
            Key::Divide => '/',
            Key::OpenParenthesis => '(',
            Key::CloseParenthesis => ')',
        }
    }

    /// Symbol printed on the keypad.
    pub fn display_symbol(self) -> char {
        match self {
            Key::Multiply => DISPLAY_MULTIPLY,
            Key::Divide => DISPLAY_DIVIDE,
            k => k.symbol(),
        }
    }

    /// Numeric value of a digit key, or None for the other keys.
    pub fn digit(self) -> Option<u32> {
        self.symbol().to_digit(10)
    }

    /// Whether the key is one of the four operators.
    pub fn is_operator(self) -> bool {
        matches!(
            self,
            Key::Plus | Key::Minus | Key::Multiply | Key::Divide
        )
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_symbol())
    }
}

/// Replace the display symbols of the multiplication and the division by their canonical
/// symbols.
pub fn normalize(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            DISPLAY_MULTIPLY => '*',
            DISPLAY_DIVIDE => '/',
            c => c,
        })
        .collect()
}

/// Replace the canonical symbols of the multiplication and the division by their display
/// symbols.
pub fn to_display(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '*' => DISPLAY_MULTIPLY,
            '/' => DISPLAY_DIVIDE,
            c => c,
        })
        .collect()
}
