/*
main.rs

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

mod application;
mod cli_options;
mod config;
mod equation;
mod game;
mod generator;
mod highscores;
mod keys;
mod player_input;

use std::io;
use std::process::ExitCode;

use self::application::Application;
use self::cli_options::Command;

fn main() -> ExitCode {
    let difficulty = match cli_options::parse() {
        Command::Exit(ret) => return ExitCode::from(ret),
        Command::Play(difficulty) => difficulty,
    };

    let mut app: Application = Application::new(difficulty);
    match app.run(io::stdin().lock(), &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
