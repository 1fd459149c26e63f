/*
application.rs

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

//! Console front-end.
//!
//! The player types one command or one equation per line.
//! An equation is typed key by key into the calculator, so a line that uses a broken key is
//! refused before it is submitted.

use chrono::{DateTime, Local};
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, BufRead, Write};

use crate::config;
use crate::game::{EQUATIONS_PER_ROUND, Game};
use crate::generator::difficulty::{self, Difficulty};
use crate::highscores::HighScores;
use crate::keys::{ALL_KEYS, Key};

const RULES: &str = "\
Broken Calculator Rules:
1. Create equations that equal the target number
2. Some buttons are broken and can't be used
3. Each correct equation earns points
4. More complex equations earn more points
5. Try to get the highest score possible!";

const COMMANDS: &str = "\
Commands:
  <equation>                  type and submit an equation, such as 3×4+2 or 3*4+2
  new [easy|medium|hard|any]  start a new round (also new 1, new 2, new 3)
  status                      show the round
  json                        show the round in JSON format
  scores                      show the high scores
  help                        show this help
  quit                        leave the game";

/// The console application.
pub struct Application {
    /// Round in progress.
    game: Game,

    /// Tier of the next rounds, or None for rounds without tier.
    difficulty: Option<Difficulty>,

    /// Scoreboards of the session.
    highscores: HighScores,

    rng: StdRng,
}

impl Application {
    /// Create an [`Application`] object and start the first round.
    pub fn new(difficulty: Option<Difficulty>) -> Self {
        Self::with_rng(difficulty, StdRng::from_os_rng())
    }

    /// Create an [`Application`] object that draws its puzzles from the given generator.
    pub fn with_rng(difficulty: Option<Difficulty>, rng: StdRng) -> Self {
        let mut app: Application = Self {
            game: Game::new(),
            difficulty,
            highscores: HighScores::new(),
            rng,
        };
        app.game.start_round_with(difficulty, &mut app.rng);
        app
    }

    /// Return the round in progress.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Return the round in progress for modification.
    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    /// Read and process lines until the end of the input or the `quit` command.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> io::Result<()> {
        writeln!(
            output,
            "{} {}\nType help for the rules and the commands.\n",
            config::PACKAGE_NAME,
            config::VERSION
        )?;
        self.print_status(output)?;
        for line in input.lines() {
            if !self.handle_line(line?.trim(), output)? {
                break;
            }
        }
        Ok(())
    }

    /// Process a line and return whether the application continues.
    fn handle_line<W: Write>(&mut self, line: &str, output: &mut W) -> io::Result<bool> {
        let mut words = line.split_whitespace();
        match words.next() {
            None => (),
            Some("quit" | "exit") => return Ok(false),
            Some("help") => writeln!(output, "{RULES}\n\n{COMMANDS}")?,
            Some("status") => self.print_status(output)?,
            Some("json") => match serde_json::to_string_pretty(&self.game.snapshot()) {
                Ok(s) => writeln!(output, "{s}")?,
                Err(e) => writeln!(output, "Cannot serialize the round: {e}")?,
            },
            Some("scores") => self.print_scores(output)?,
            Some("new") => match words.next() {
                None => self.new_round(output)?,
                Some(name) => match parse_tier(name) {
                    Some(difficulty) => {
                        self.difficulty = difficulty;
                        self.new_round(output)?;
                    }
                    None => writeln!(output, "Unknown difficulty: {name}")?,
                },
            },
            Some(_) => self.play(line, output)?,
        }
        Ok(true)
    }

    /// Type the equation key by key, and submit it.
    fn play<W: Write>(&mut self, equation: &str, output: &mut W) -> io::Result<()> {
        self.game.clear_input();
        let refused: Vec<char> = equation
            .chars()
            .filter(|c| !c.is_whitespace())
            .filter(|c| !self.game.append_symbol(*c))
            .collect();
        if !refused.is_empty() {
            self.game.clear_input();
            let keys: Vec<String> = refused.iter().map(char::to_string).collect();
            return writeln!(
                output,
                "Invalid Equation: these keys are broken or do not exist: {}",
                keys.join(" ")
            );
        }

        match self.game.submit() {
            Ok(Some(points)) => {
                writeln!(
                    output,
                    "Correct! +{points} pts ({}/{EQUATIONS_PER_ROUND})",
                    self.game.equations().len()
                )?;
                if self.game.is_completed() {
                    self.complete_round(output)?;
                }
            }
            Ok(None) => writeln!(output, "The round is over, type new to play again")?,
            Err(e) => {
                self.game.clear_input();
                writeln!(output, "Invalid Equation: {e}")?;
            }
        }
        Ok(())
    }

    /// Record the score of the completed round and start a new one.
    fn complete_round<W: Write>(&mut self, output: &mut W) -> io::Result<()> {
        let total: u32 = self.game.total_score();
        writeln!(output, "\nExcellent Work!\nFinal Score: {total}")?;
        let tier: String = difficulty::label(self.difficulty);
        if let Some(position) = self.highscores.add_score(&tier, total) {
            writeln!(output, "New high score: #{position} for {tier}")?;
        }
        writeln!(output)?;
        self.new_round(output)
    }

    fn new_round<W: Write>(&mut self, output: &mut W) -> io::Result<()> {
        self.game.start_round_with(self.difficulty, &mut self.rng);
        debug!(
            "Round generated after {} attempt(s)",
            self.game.generator_attempts()
        );
        self.print_status(output)
    }

    fn print_status<W: Write>(&self, output: &mut W) -> io::Result<()> {
        writeln!(
            output,
            "Difficulty: {}",
            difficulty::label(self.game.difficulty())
        )?;
        writeln!(output, "Target: {}", self.game.target())?;
        writeln!(output, "Keys: {}", self.keypad())?;
        writeln!(
            output,
            "Equations ({}/{EQUATIONS_PER_ROUND}):",
            self.game.equations().len()
        )?;
        for record in self.game.equations() {
            writeln!(output, "  {}", record.display(self.game.target()))?;
        }
        writeln!(output, "Total Score: {}", self.game.total_score())
    }

    /// Return the keypad, with broken keys replaced by `#`.
    fn keypad(&self) -> String {
        let keys: Vec<String> = ALL_KEYS
            .iter()
            .map(|k: &Key| {
                if self.game.is_key_broken(*k) {
                    "#".to_string()
                } else {
                    k.to_string()
                }
            })
            .collect();
        keys.join(" ")
    }

    fn print_scores<W: Write>(&self, output: &mut W) -> io::Result<()> {
        if self.highscores.is_empty() {
            return writeln!(output, "No high score yet");
        }
        for tier in self.highscores.tiers() {
            writeln!(output, "{tier}:")?;
            for (i, score) in self
                .highscores
                .get_scores(tier)
                .into_iter()
                .flatten()
                .enumerate()
            {
                let dt: DateTime<Local> = DateTime::from(score.when);
                writeln!(output, "  {:>2}. {:>5}  {}", i + 1, score.points, dt.format("%c"))?;
            }
        }
        Ok(())
    }
}

/// Return the tier for the given name or index, `Some(None)` for rounds without tier, or None
/// if the name is unknown.
fn parse_tier(name: &str) -> Option<Option<Difficulty>> {
    if name.eq_ignore_ascii_case("any") {
        return Some(None);
    }
    if let Ok(index) = name.parse::<i32>() {
        return index
            .checked_sub(1)
            .and_then(Difficulty::from_repr)
            .map(Some);
    }
    Difficulty::from_name(name).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::Puzzle;
    use std::collections::BTreeSet;
    use std::io::Cursor;

    fn app(target: u32, broken: &[Key]) -> Application {
        let mut app: Application =
            Application::with_rng(Some(Difficulty::Easy), StdRng::seed_from_u64(4));
        app.game_mut().set_puzzle(Puzzle {
            difficulty: Some(Difficulty::Easy),
            target,
            broken_keys: broken.iter().copied().collect::<BTreeSet<Key>>(),
        });
        app
    }

    fn run(app: &mut Application, input: &str) -> String {
        let mut output: Vec<u8> = Vec::new();
        app.run(Cursor::new(input), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn shows_the_round_and_the_rules() {
        let mut app: Application = app(24, &[Key::Seven, Key::Divide]);
        let output: String = run(&mut app, "help\nstatus\njson\n");
        assert!(output.contains("Target: 24"));
        assert!(output.contains("Keys: 0 1 2 3 4 5 6 # 8 9 + - × # ( )"));
        assert!(output.contains("Broken Calculator Rules:"));
        assert!(output.contains("quit"));
        assert!(output.contains("\"broken_keys\": [\n    \"7\",\n    \"/\"\n  ]"));
    }

    #[test]
    fn accepts_and_refuses_equations() {
        let mut app: Application = app(24, &[Key::Seven]);
        let output: String = run(&mut app, "4×6\n4*6\n27-3\n2+2\n1/0\n");
        assert!(output.contains("Correct! +19 pts (1/5)"));
        assert!(output.contains("Invalid Equation: Equation already used!"));
        assert!(output.contains("Invalid Equation: these keys are broken or do not exist: 7"));
        assert!(output.contains("Invalid Equation: Equals 4.00, not 24"));
        assert!(output.contains("Invalid Equation: Division by zero"));
        assert_eq!(app.game().equations().len(), 1);
        assert_eq!(app.game().current_input(), "");
    }

    #[test]
    fn completed_round_is_recorded() {
        let mut app: Application = app(12, &[]);
        let output: String = run(
            &mut app,
            "12\n6*2\n24/2\n(2+4)*2\n10+1+1\nscores\nquit\nstatus\n",
        );
        assert!(output.contains("Excellent Work!"));
        assert!(output.contains("New high score: #1 for Easy"));
        assert!(output.contains("Easy:"));
        // A new round started after the completed one
        assert!(app.game().equations().is_empty());
        assert!(!app.game().is_completed());
        // Nothing is processed after quit
        assert_eq!(output.matches("Target:").count(), 2);
    }

    #[test]
    fn new_rounds() {
        let mut app: Application = app(12, &[]);
        let output: String = run(&mut app, "new hard\nnew 2\nnew any\nnew extreme\nscores\n");
        assert!(output.contains("Difficulty: Hard"));
        assert!(output.contains("Difficulty: Medium"));
        assert!(output.contains("Difficulty: Any"));
        assert!(output.contains("Unknown difficulty: extreme"));
        assert!(output.contains("No high score yet"));
        assert_eq!(app.game().difficulty(), None);
    }

    #[test]
    fn tier_names() {
        assert_eq!(parse_tier("any"), Some(None));
        assert_eq!(parse_tier("1"), Some(Some(Difficulty::Easy)));
        assert_eq!(parse_tier("3"), Some(Some(Difficulty::Hard)));
        assert_eq!(parse_tier("4"), None);
        assert_eq!(parse_tier("0"), None);
        assert_eq!(parse_tier("Medium"), Some(Some(Difficulty::Medium)));
    }
}
