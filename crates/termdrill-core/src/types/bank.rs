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

use crate::types::direction::QuizDirection;

/// The most candidates a question can offer.
pub const MAX_CANDIDATES: usize = 4;

/// A single multiple-choice question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    /// The first candidate is the correct answer; the rest are distractors.
    candidates: Vec<String>,
}

impl Question {
    /// # Panics
    ///
    /// Panics if `candidates` is empty: a question needs its answer.
    pub fn new(prompt: impl Into<String>, candidates: Vec<String>) -> Self {
        assert!(!candidates.is_empty());
        Self {
            prompt: prompt.into(),
            candidates,
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn answer(&self) -> &str {
        &self.candidates[0]
    }
}

/// An ordered set of questions, keyed by prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizBank {
    direction: QuizDirection,
    questions: Vec<Question>,
}

impl QuizBank {
    pub fn new(direction: QuizDirection) -> Self {
        Self {
            direction,
            questions: Vec::new(),
        }
    }

    pub fn direction(&self) -> QuizDirection {
        self.direction
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, prompt: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.prompt() == prompt)
    }

    /// Add a question. If one with the same prompt exists it is replaced,
    /// keeping its position.
    pub fn insert(&mut self, question: Question) {
        match self
            .questions
            .iter()
            .position(|q| q.prompt() == question.prompt())
        {
            Some(idx) => self.questions[idx] = question,
            None => self.questions.push(question),
        }
    }
}
