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

use std::io::BufRead;
use std::io::Write;

use termdrill_core::FlashOutcome;
use termdrill_core::FlashSession;
use termdrill_core::QuizDirection;
use termdrill_core::QuizOutcome;
use termdrill_core::QuizRunner;
use termdrill_core::build;
use termdrill_core::error::Fallible;

use crate::console::Console;
use crate::context::Context;

/// Build a fresh bank from the glossary and take the quiz on the console.
pub fn take_quiz<R: BufRead, W: Write>(
    ctx: &mut Context,
    direction: QuizDirection,
    console: &Console<R, W>,
) -> Fallible<QuizOutcome> {
    let bank = build(&ctx.glossary, direction, &mut ctx.rng);
    let outcome = QuizRunner::new(&mut ctx.rng).run(&bank, &mut &*console, &mut &*console);
    console.check()?;
    log::debug!("Quiz outcome: {outcome:?}");
    Ok(outcome)
}

pub fn flip_cards<R: BufRead, W: Write>(
    ctx: &mut Context,
    console: &Console<R, W>,
) -> Fallible<FlashOutcome> {
    let outcome =
        FlashSession::new(&mut ctx.rng).run(&ctx.glossary, &mut &*console, &mut &*console);
    console.check()?;
    log::debug!("Flash card outcome: {outcome:?}");
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use tempfile::tempdir;
    use termdrill_core::Score;
    use termdrill_core::TinyRng;

    use super::*;
    use crate::store::Store;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_quiz_on_empty_glossary() -> Fallible<()> {
        let dir = tempdir()?;
        let mut ctx = Context::open(
            Store::new(dir.path().join("data.txt")),
            false,
            TinyRng::from_seed(1),
        )?;
        let console = console("\n");
        let outcome = take_quiz(&mut ctx, QuizDirection::TermToDefinition, &console)?;
        assert_eq!(outcome, QuizOutcome::Insufficient);
        let text = String::from_utf8_lossy(&console.into_writer()).to_string();
        assert!(text.contains("There aren't enough entries to generate a quiz."));
        assert!(!text.contains("Question"));
        Ok(())
    }

    #[test]
    fn test_quiz_with_garbage_answers() -> Fallible<()> {
        let dir = tempdir()?;
        let mut ctx = Context::open(
            Store::new(dir.path().join("data.txt")),
            true,
            TinyRng::from_seed(1),
        )?;
        // Start, then for each question a bad answer and a pause, then the
        // final pause.
        let mut script = String::from("\n");
        for _ in 0..ctx.glossary.len() {
            script.push_str("nope\n\n");
        }
        script.push('\n');
        let console = console(&script);
        let outcome = take_quiz(&mut ctx, QuizDirection::DefinitionToTerm, &console)?;
        assert_eq!(
            outcome,
            QuizOutcome::Completed(Score {
                correct: 0,
                total: 10
            })
        );
        let text = String::from_utf8_lossy(&console.into_writer()).to_string();
        assert!(text.contains("> Your score: 0/10"));
        Ok(())
    }

    #[test]
    fn test_quit_quiz_hides_score() -> Fallible<()> {
        let dir = tempdir()?;
        let mut ctx = Context::open(
            Store::new(dir.path().join("data.txt")),
            true,
            TinyRng::from_seed(1),
        )?;
        let console = console("\nquit\n");
        let outcome = take_quiz(&mut ctx, QuizDirection::TermToDefinition, &console)?;
        assert_eq!(outcome, QuizOutcome::Aborted { answered: 0 });
        let text = String::from_utf8_lossy(&console.into_writer()).to_string();
        assert!(!text.contains("Your score"));
        Ok(())
    }

    #[test]
    fn test_flash_cards_to_the_end() -> Fallible<()> {
        let dir = tempdir()?;
        let mut ctx = Context::open(
            Store::new(dir.path().join("data.txt")),
            true,
            TinyRng::from_seed(1),
        )?;
        let script = "\n".repeat(1 + ctx.glossary.len() * 2 + 1);
        let console = console(&script);
        let outcome = flip_cards(&mut ctx, &console)?;
        assert_eq!(outcome, FlashOutcome::Completed { shown: 10 });
        let text = String::from_utf8_lossy(&console.into_writer()).to_string();
        assert!(text.contains("> You've reached the end!"));
        Ok(())
    }
}
