/*
cli_options.rs

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

//! Process command-line options.
//!
//! Without options, the game starts in the console. The other options are intended for
//! developers tuning the puzzle generator and the scores.
//!
//! # Examples
//!
//! Generate three puzzles at the hard difficulty level:
//!
//! ```text
//! $ broken-calculator -c 3 -f hard
//! 117  broken: 0 4 5 7 ( - ÷
//! 182  broken: 1 3 6 8 9 ) ÷
//! 140  broken: 0 3 5 8 - ( )
//! ```
//!
//! Check and score an equation:
//!
//! ```text
//! $ broken-calculator -e '(3+4)*6' -t 42
//! (3+4)×6 = 42: 45 pts
//! ```

use clap::Parser;
use log::{LevelFilter, debug};
use std::collections::BTreeSet;

use crate::config::COPYRIGHT_NOTICE;
use crate::equation::score::ScoreCalculator;
use crate::equation::validator::EquationValidator;
use crate::generator::broken_buttons::BrokenButtonValidator;
use crate::generator::difficulty::Difficulty;
use crate::generator::{self, Puzzle};
use crate::keys::{self, Key};

/// Build arithmetic equations with a broken calculator.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Difficulty level of the rounds (target and broken keys of any level if not set)
    #[arg(value_enum, short = 'f', long)]
    difficulty: Option<Difficulty>,

    /// Number of puzzles to generate and print, instead of playing
    #[arg(short, long, group = "generate")]
    count: Option<usize>,

    /// Print the generated puzzles in JSON format
    #[arg(short, long, default_value_t = false, requires = "generate")]
    json: bool,

    /// Print some statistics after generating the puzzles
    #[arg(short, long, default_value_t = false, requires = "generate")]
    summary: bool,

    /// Equation to check and score, instead of playing
    #[arg(
        short = 'e',
        long,
        allow_hyphen_values = true,
        requires = "target",
        conflicts_with = "generate"
    )]
    check: Option<String>,

    /// Target number of the equation to check
    #[arg(short, long, requires = "check")]
    target: Option<u32>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// What to do once the options are processed.
#[derive(Debug, PartialEq)]
pub enum Command {
    /// Exit with the given code.
    Exit(u8),

    /// Play in the console at the given tier.
    Play(Option<Difficulty>),
}

/// Parse and process command-line options.
pub fn parse() -> Command {
    let args: Args = Args::parse();

    let mut builder = env_logger::Builder::from_default_env();
    if args.debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();

    process(&args)
}

fn process(args: &Args) -> Command {
    if let (Some(equation), Some(target)) = (&args.check, args.target) {
        return Command::Exit(check(equation, target));
    }
    if let Some(count) = args.count {
        return Command::Exit(generate(args.difficulty, count, args.json, args.summary));
    }
    Command::Play(args.difficulty)
}

/// Validate and score an equation. Return the exit code.
fn check(equation: &str, target: u32) -> u8 {
    let equation: String = keys::normalize(equation);
    match EquationValidator::new().validate(&equation, target) {
        Ok(_) => {
            println!(
                "{} = {target}: {} pts",
                keys::to_display(&equation),
                ScoreCalculator::new().calculate_score(&equation)
            );
            0
        }
        Err(e) => {
            eprintln!("Invalid Equation: {e}");
            1
        }
    }
}

/// Generate and print puzzles. Return the exit code.
fn generate(difficulty: Option<Difficulty>, count: usize, json: bool, summary: bool) -> u8 {
    let mut rng = rand::rng();
    let mut validator: BrokenButtonValidator = BrokenButtonValidator::new();
    let mut puzzles: Vec<Puzzle> = Vec::with_capacity(count);
    let mut attempts: usize = 0;

    for i in 0..count {
        debug!("Iteration {i}");
        puzzles.push(generator::generate_puzzle(
            &mut validator,
            difficulty,
            &mut rng,
        ));
        attempts += validator.attempts;
    }

    if json {
        match serde_json::to_string_pretty(&puzzles) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Cannot serialize the puzzles: {e}");
                return 1;
            }
        }
    } else {
        for puzzle in &puzzles {
            println!("{}", format_puzzle(puzzle));
        }
    }

    if summary && count > 0 {
        let broken: usize = puzzles.iter().map(|p| p.broken_keys.len()).sum();
        println!(
            "
   average broken keys = {}
average draws per game = {}
      reduced key sets = {}",
            broken as f32 / count as f32,
            attempts as f32 / count as f32,
            attempts - count
        );
    }
    0
}

/// Return a line with the target and the broken keys of the puzzle.
fn format_puzzle(puzzle: &Puzzle) -> String {
    format!("{:>3}  broken: {}", puzzle.target, format_keys(&puzzle.broken_keys))
}

fn format_keys(keys: &BTreeSet<Key>) -> String {
    if keys.is_empty() {
        return "none".to_string();
    }
    keys.iter()
        .map(Key::to_string)
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("broken-calculator").chain(argv.iter().copied()))
    }

    #[test]
    fn play_by_default() {
        let a: Args = args(&[]).unwrap();
        assert_eq!(process(&a), Command::Play(None));
        let a: Args = args(&["-f", "medium"]).unwrap();
        assert_eq!(process(&a), Command::Play(Some(Difficulty::Medium)));
    }

    #[test]
    fn check_requires_a_target() {
        assert!(args(&["--check", "1+2"]).is_err());
        let a: Args = args(&["-e", "-3+10", "-t", "7"]).unwrap();
        assert_eq!(a.check.as_deref(), Some("-3+10"));
        assert_eq!(process(&a), Command::Exit(0));
        let a: Args = args(&["-e", "3+10", "-t", "7"]).unwrap();
        assert_eq!(process(&a), Command::Exit(1));
    }

    #[test]
    fn generation_options() {
        assert!(args(&["--json"]).is_err());
        assert!(args(&["--summary"]).is_err());
        assert!(args(&["-c", "2", "-e", "1", "-t", "1"]).is_err());
        let a: Args = args(&["-c", "3", "-f", "hard", "-j", "-s"]).unwrap();
        assert_eq!(a.count, Some(3));
        assert!(a.json && a.summary);
        assert_eq!(process(&a), Command::Exit(0));
    }

    #[test]
    fn puzzle_lines() {
        let puzzle: Puzzle = Puzzle {
            difficulty: None,
            target: 42,
            broken_keys: BTreeSet::from([Key::Zero, Key::Divide, Key::Seven]),
        };
        assert_eq!(format_puzzle(&puzzle), " 42  broken: 0 7 ÷");
        let puzzle: Puzzle = Puzzle {
            broken_keys: BTreeSet::new(),
            ..puzzle
        };
        assert_eq!(format_puzzle(&puzzle), " 42  broken: none");
    }
}
