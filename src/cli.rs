// Copyright 2025 The termdrill Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt::Display;
use std::fmt::Formatter;
use std::io::BufRead;
use std::io::Write;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use termdrill_core::QuizDirection;
use termdrill_core::TinyRng;
use termdrill_core::error::Fallible;

use crate::cmd::check::check_store;
use crate::cmd::entries::add_entry;
use crate::cmd::entries::clear_entries;
use crate::cmd::entries::delete_entry;
use crate::cmd::entries::list_entries;
use crate::cmd::entries::show_entry;
use crate::cmd::export::export_glossary;
use crate::cmd::menu::run_menu;
use crate::cmd::study::flip_cards;
use crate::cmd::study::take_quiz;
use crate::console::Console;
use crate::context::Context;
use crate::store::Store;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the glossary file. Created empty if it doesn't exist.
    #[arg(long, global = true, default_value = "dfq_data.txt")]
    data_file: String,
    /// Seed for shuffling. By default, the current time is used.
    #[arg(long, global = true)]
    seed: Option<u64>,
    /// Use sample entries and never write to the glossary file.
    #[arg(long, global = true)]
    test_mode: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive menu. This is the default.
    Menu,
    /// Take a multiple-choice quiz.
    Quiz {
        /// Which side of each entry to choose from the answers.
        #[arg(long, default_value_t = Direction::Definition)]
        direction: Direction,
    },
    /// Go through every entry as a flash card.
    Flash,
    /// Print all entries, sorted by term.
    List,
    /// Print the definition of a term.
    Search { term: String },
    /// Add an entry.
    Add {
        term: String,
        definition: String,
        /// Overwrite the definition if the term already exists.
        #[arg(long)]
        replace: bool,
    },
    /// Delete an entry.
    Delete { term: String },
    /// Delete all entries.
    Clear,
    /// Check that the glossary file parses.
    Check,
    /// Export the glossary as JSON.
    Export {
        /// Optional path to the output file. By default, the output is printed to stdout.
        #[arg(long)]
        output: Option<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, PartialEq)]
enum Direction {
    /// Show the term, choose the definition.
    Definition,
    /// Show the definition, choose the term.
    Term,
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Definition => write!(f, "definition"),
            Direction::Term => write!(f, "term"),
        }
    }
}

impl From<Direction> for QuizDirection {
    fn from(value: Direction) -> Self {
        match value {
            Direction::Definition => QuizDirection::TermToDefinition,
            Direction::Term => QuizDirection::DefinitionToTerm,
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

pub fn entrypoint() -> Fallible<()> {
    let cli: Cli = Cli::parse();
    run(cli, &Console::stdio())
}

fn run<R: BufRead, W: Write>(cli: Cli, console: &Console<R, W>) -> Fallible<()> {
    let store = Store::new(&cli.data_file);
    let test_mode: bool = cli.test_mode;
    let seed: u64 = cli.seed.unwrap_or_else(clock_seed);
    log::debug!("Using seed {seed}.");
    let open = |store: Store| Context::open(store, test_mode, TinyRng::from_seed(seed));
    match cli.command.unwrap_or(Command::Menu) {
        // `check` inspects the file as it is, without creating it first.
        Command::Check => check_store(&store, console),
        Command::Menu => run_menu(&mut open(store)?, console),
        Command::Quiz { direction } => {
            take_quiz(&mut open(store)?, direction.into(), console).map(|_| ())
        }
        Command::Flash => flip_cards(&mut open(store)?, console).map(|_| ()),
        Command::List => {
            list_entries(&open(store)?.glossary, console);
            console.check()
        }
        Command::Search { term } => {
            show_entry(&open(store)?.glossary, &term, console);
            console.check()
        }
        Command::Add {
            term,
            definition,
            replace,
        } => add_entry(&mut open(store)?, &term, &definition, replace, console),
        Command::Delete { term } => delete_entry(&mut open(store)?, &term, console),
        Command::Clear => clear_entries(&mut open(store)?, console),
        Command::Export { output } => export_glossary(&open(store)?.glossary, output),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use clap::CommandFactory;
    use tempfile::tempdir;

    use super::*;

    fn run_args(args: &[&str]) -> Fallible<String> {
        let console = Console::new(Cursor::new(Vec::new()), Vec::new());
        run(Cli::parse_from(args), &console)?;
        Ok(String::from_utf8_lossy(&console.into_writer()).to_string())
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["termdrill"]);
        assert_eq!(cli.data_file, "dfq_data.txt");
        assert!(cli.command.is_none());
        assert!(!cli.test_mode);
    }

    #[test]
    fn test_quiz_direction() {
        let cli = Cli::parse_from(["termdrill", "quiz", "--direction", "term", "--seed", "7"]);
        assert_eq!(cli.seed, Some(7));
        match cli.command {
            Some(Command::Quiz { direction }) => {
                assert_eq!(QuizDirection::from(direction), QuizDirection::DefinitionToTerm)
            }
            _ => panic!("expected the quiz command"),
        }
    }

    #[test]
    fn test_check_does_not_create_file() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("data.txt");
        let data_file = path.display().to_string();
        assert!(run_args(&["termdrill", "check", "--data-file", &data_file]).is_err());
        assert!(!path.exists());
        Ok(())
    }

    #[test]
    fn test_test_mode_leaves_disk_alone() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("data.txt");
        let data_file = path.display().to_string();
        let args = [
            "termdrill",
            "add",
            "cat",
            "feline",
            "--test-mode",
            "--data-file",
            &data_file,
        ];
        let text = run_args(&args)?;
        assert!(text.contains("> Successfully added entry for 'cat'."));
        assert!(!path.exists());
        Ok(())
    }

    #[test]
    fn test_list_creates_missing_file() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("data.txt");
        let data_file = path.display().to_string();
        let text = run_args(&["termdrill", "list", "--data-file", &data_file])?;
        assert_eq!(text, "> There aren't any entries to display\n");
        assert!(path.is_file());
        Ok(())
    }
}
