/*
player_input.rs

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

//! Manage the equation that the player is typing.
//!
//! The text holds canonical symbols only (`*` and `/`), one per key press.

use serde::Serialize;

use crate::keys::Key;

/// Equation being typed.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct PlayerInput {
    text: String,
}

impl PlayerInput {
    /// Reset the object.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Add the symbol of the key at the end of the equation.
    pub fn push(&mut self, key: Key) {
        self.text.push(key.symbol());
    }

    /// Remove the last symbol and return its key, or None if the equation is empty.
    pub fn pop(&mut self) -> Option<Key> {
        self.text.pop().and_then(Key::from_symbol)
    }

    /// Return the equation.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether the equation is empty or only contains whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
