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

//! The multiple-choice quiz state machine.
//!
//! A session goes `NotStarted -> InProgress -> {Completed, Aborted}`. An
//! empty bank never starts: it ends in `Insufficient` straight away.
//!
//! Input that is neither a valid choice number nor the quit token counts as
//! a wrong answer. The question is not asked again.

use std::fmt::Display;
use std::fmt::Formatter;

use crate::channel::Input;
use crate::channel::Output;
use crate::channel::QUIT_TOKEN;
use crate::rng::TinyRng;
use crate::rng::shuffled;
use crate::types::bank::MAX_CANDIDATES;
use crate::types::bank::Question;
use crate::types::bank::QuizBank;
use crate::types::direction::QuizDirection;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

impl Display for Score {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.correct, self.total)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizEvent {
    /// The bank has no questions, so no quiz is given.
    InsufficientEntries,
    /// The quiz is about to start.
    Started {
        instructions: &'static str,
        total: usize,
    },
    /// A question, with its choices in display order. Choice `n` is
    /// selected by the token `n`.
    Question {
        number: usize,
        total: usize,
        prompt: String,
        choices: Vec<String>,
    },
    Correct,
    /// A wrong or unreadable answer, with the pair that was expected.
    Incorrect { term: String, definition: String },
    /// The final tally. Only emitted when every question was answered.
    Finished(Score),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizState {
    NotStarted,
    InProgress,
    Completed,
    Aborted,
    Insufficient,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizOutcome {
    Insufficient,
    Completed(Score),
    Aborted { answered: usize },
}

/// What a raw token means for a question with `choices` options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// Zero-based index into the displayed choices.
    Choice(usize),
    Quit,
    Malformed,
}

impl Selection {
    pub fn parse(token: Option<&str>, choices: usize) -> Self {
        let token = match token {
            Some(token) => token,
            None => return Selection::Quit,
        };
        if token == QUIT_TOKEN {
            return Selection::Quit;
        }
        // Only the literal tokens "1" through "4" are choices; "01" or "+1"
        // are not.
        let valid = token.len() == 1 && token.as_bytes()[0].is_ascii_digit();
        match token.parse::<usize>() {
            Ok(n) if valid && (1..=MAX_CANDIDATES).contains(&n) && n <= choices => {
                Selection::Choice(n - 1)
            }
            _ => Selection::Malformed,
        }
    }
}

/// The mutable state of one quiz.
#[derive(Clone, Debug)]
pub struct QuizSession {
    state: QuizState,
    /// Index of the next question to ask.
    index: usize,
    correct: usize,
    total: usize,
}

impl QuizSession {
    pub fn new(total: usize) -> Self {
        Self {
            state: QuizState::NotStarted,
            index: 0,
            correct: 0,
            total,
        }
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn score(&self) -> Score {
        Score {
            correct: self.correct,
            total: self.total,
        }
    }

    /// Leave `NotStarted`. Returns false when there is nothing to ask.
    ///
    /// # Panics
    ///
    /// Panics if the session has already been started.
    pub fn start(&mut self) -> bool {
        assert_eq!(self.state, QuizState::NotStarted);
        if self.total == 0 {
            self.state = QuizState::Insufficient;
            false
        } else {
            self.state = QuizState::InProgress;
            true
        }
    }

    /// Record the answer to the current question. `chosen` is the displayed
    /// choice the user picked, if any. Returns whether it was correct.
    ///
    /// # Panics
    ///
    /// Panics unless the session is in progress.
    pub fn answer(&mut self, question: &Question, chosen: Option<&str>) -> bool {
        assert_eq!(self.state, QuizState::InProgress);
        let correct = chosen == Some(question.answer());
        if correct {
            self.correct += 1;
        }
        self.index += 1;
        if self.index == self.total {
            self.state = QuizState::Completed;
        }
        correct
    }

    /// Abandon the quiz. No score is reported afterwards.
    ///
    /// # Panics
    ///
    /// Panics unless the session is in progress.
    pub fn quit(&mut self) {
        assert_eq!(self.state, QuizState::InProgress);
        self.state = QuizState::Aborted;
    }

    pub fn answered(&self) -> usize {
        self.index
    }
}

/// Drives a [`QuizSession`] over a bank.
pub struct QuizRunner<'a> {
    rng: &'a mut TinyRng,
}

impl<'a> QuizRunner<'a> {
    pub fn new(rng: &'a mut TinyRng) -> Self {
        Self { rng }
    }

    /// Ask every question in the bank, in bank order.
    pub fn run(
        &mut self,
        bank: &QuizBank,
        input: &mut impl Input,
        output: &mut impl Output<QuizEvent>,
    ) -> QuizOutcome {
        let mut session = QuizSession::new(bank.len());
        if !session.start() {
            output.emit(QuizEvent::InsufficientEntries);
            return QuizOutcome::Insufficient;
        }
        let direction: QuizDirection = bank.direction();
        output.emit(QuizEvent::Started {
            instructions: direction.instructions(),
            total: bank.len(),
        });
        for (idx, question) in bank.questions().iter().enumerate() {
            let choices: Vec<String> = shuffled(question.candidates(), self.rng);
            output.emit(QuizEvent::Question {
                number: idx + 1,
                total: bank.len(),
                prompt: question.prompt().to_string(),
                choices: choices.clone(),
            });
            let token: Option<String> = input.next_token();
            let chosen: Option<&str> = match Selection::parse(token.as_deref(), choices.len()) {
                Selection::Quit => {
                    session.quit();
                    log::debug!("Quiz aborted after {} answers.", session.answered());
                    return QuizOutcome::Aborted {
                        answered: session.answered(),
                    };
                }
                Selection::Choice(pos) => Some(choices[pos].as_str()),
                Selection::Malformed => None,
            };
            if session.answer(question, chosen) {
                output.emit(QuizEvent::Correct);
            } else {
                let (term, definition) = direction.as_pair(question.prompt(), question.answer());
                output.emit(QuizEvent::Incorrect {
                    term: term.to_string(),
                    definition: definition.to_string(),
                });
            }
        }
        let score = session.score();
        log::debug!("Quiz completed with score {score}.");
        output.emit(QuizEvent::Finished(score));
        QuizOutcome::Completed(score)
    }
}
