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

use std::cell::Cell;
use std::cell::RefCell;
use std::io::BufRead;
use std::io::StdinLock;
use std::io::Stdout;
use std::io::Write;

use termdrill_core::FlashEvent;
use termdrill_core::Input;
use termdrill_core::Output;
use termdrill_core::QuizEvent;
use termdrill_core::error::Fallible;

const DIVIDER_WIDTH: usize = 69;

/// A line-oriented terminal. Methods take `&self` so that a quiz can use
/// the same console as both its input and its output channel.
pub struct Console<R, W> {
    reader: RefCell<R>,
    writer: RefCell<W>,
    /// The first I/O error seen. Channel methods can't return errors, so
    /// they stash it here for [`Console::check`].
    error: RefCell<Option<std::io::Error>>,
    closed: Cell<bool>,
}

impl Console<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader: RefCell::new(reader),
            writer: RefCell::new(writer),
            error: RefCell::new(None),
            closed: Cell::new(false),
        }
    }

    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.writer.into_inner()
    }

    /// Whether the input has reached end of file.
    pub fn is_closed(&self) -> bool {
        self.closed.get()
    }

    /// Return the first I/O error recorded since the last check.
    pub fn check(&self) -> Fallible<()> {
        match self.error.borrow_mut().take() {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }

    pub fn print(&self, text: &str) {
        let result = writeln!(self.writer.borrow_mut(), "{text}");
        self.record(result);
    }

    pub fn div(&self) {
        self.print(&"-".repeat(DIVIDER_WIDTH));
    }

    /// Print an entry the way listings and feedback show it.
    pub fn entry(&self, term: &str, definition: &str) {
        self.print(&format_entry(term, definition));
    }

    /// Write text without a line break, so the reply goes on the same line.
    pub fn prompt(&self, text: &str) {
        let mut writer = self.writer.borrow_mut();
        let result = write!(writer, "{text}").and_then(|_| writer.flush());
        drop(writer);
        self.record(result);
    }

    /// Show a prompt and read one line. `None` at end of input.
    pub fn ask(&self, prompt: &str) -> Option<String> {
        self.prompt(prompt);
        self.read_line()
    }

    pub fn pause(&self, prompt: &str) {
        let _ = self.ask(prompt);
    }

    /// Ask a yes/no question until the answer is `y` or `n`.
    pub fn confirm(&self, prompt: &str) -> Option<bool> {
        loop {
            match self.ask(prompt)?.to_lowercase().as_str() {
                "y" => return Some(true),
                "n" => return Some(false),
                _ => continue,
            }
        }
    }

    fn read_line(&self) -> Option<String> {
        if self.closed.get() {
            return None;
        }
        let mut line = String::new();
        match self.reader.borrow_mut().read_line(&mut line) {
            Ok(0) => {
                self.closed.set(true);
                None
            }
            Ok(_) => {
                let len = line.trim_end_matches(['\n', '\r']).len();
                line.truncate(len);
                Some(line)
            }
            Err(e) => {
                self.closed.set(true);
                self.record(Err(e));
                None
            }
        }
    }

    fn record(&self, result: std::io::Result<()>) {
        if let Err(e) = result {
            let mut slot = self.error.borrow_mut();
            if slot.is_none() {
                log::debug!("Console I/O error: {e}");
                *slot = Some(e);
            }
        }
    }
}

pub fn format_entry(term: &str, definition: &str) -> String {
    format!("> {term}\n      {definition}")
}

impl<R: BufRead, W: Write> Input for &Console<R, W> {
    fn next_token(&mut self) -> Option<String> {
        self.read_line()
    }
}

impl<R: BufRead, W: Write> Output<QuizEvent> for &Console<R, W> {
    fn emit(&mut self, event: QuizEvent) {
        match event {
            QuizEvent::InsufficientEntries => {
                self.print("> There aren't enough entries to generate a quiz.");
                self.pause("> Press ENTER to go back. ");
            }
            QuizEvent::Started { instructions, .. } => {
                self.print(&format!("> {instructions}"));
                self.pause("> Press ENTER to start. ");
                self.div();
            }
            QuizEvent::Question {
                number,
                total,
                prompt,
                choices,
            } => {
                self.print(&format!("> Question {number} of {total}:"));
                self.print(&format!("\n  {prompt}\n"));
                for (idx, choice) in choices.iter().enumerate() {
                    self.print(&format!("  {} - {choice}", idx + 1));
                }
                self.print("");
                self.prompt("> Enter your answer (1-4) or 'quit' to go back: ");
            }
            QuizEvent::Correct => {
                self.div();
                self.print("> CORRECT!");
                self.after_feedback();
            }
            QuizEvent::Incorrect { term, definition } => {
                self.div();
                self.print("> INCORRECT!");
                self.entry(&term, &definition);
                self.after_feedback();
            }
            QuizEvent::Finished(score) => {
                self.print(&format!("> Your score: {score}"));
                self.pause("> Press ENTER to go back. ");
            }
        }
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    fn after_feedback(&self) {
        self.div();
        self.pause("> Press ENTER to continue. ");
        self.div();
    }
}

impl<R: BufRead, W: Write> Output<FlashEvent> for &Console<R, W> {
    fn emit(&mut self, event: FlashEvent) {
        match event {
            FlashEvent::InsufficientEntries => {
                self.print("> There aren't enough entries.");
                self.pause("> Press ENTER to go back. ");
            }
            FlashEvent::Started { .. } => {
                self.print("> Random cards will be displayed one at a time.");
                self.print("> Press ENTER to continue or enter 'quit' at any");
                self.print("  time to go back.");
                self.div();
                self.pause("> Press ENTER to start. ");
            }
            FlashEvent::Front { term, .. } => {
                self.div();
                self.prompt(&format!("> {term} "));
            }
            FlashEvent::Back { definition } => {
                self.prompt(&format!("      {definition} "));
            }
            FlashEvent::EndOfDeck => {
                self.div();
                self.print("> You've reached the end!");
                self.pause("> Press ENTER to go back. ");
            }
        }
    }
}
