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

//! The channels a study session talks through.
//!
//! Sessions never touch stdin or stdout directly: they pull tokens from an
//! [`Input`] and push events into an [`Output`]. The terminal frontend
//! implements both; tests use a `VecDeque<String>` and a `Vec<E>`.

use std::collections::VecDeque;

/// The token that ends a session early.
pub const QUIT_TOKEN: &str = "quit";

pub trait Input {
    /// Read the next token. `None` means the input is exhausted.
    fn next_token(&mut self) -> Option<String>;
}

pub trait Output<E> {
    fn emit(&mut self, event: E);
}

impl Input for VecDeque<String> {
    fn next_token(&mut self) -> Option<String> {
        self.pop_front()
    }
}

impl<E> Output<E> for Vec<E> {
    fn emit(&mut self, event: E) {
        self.push(event);
    }
}

/// Whether a token asks to leave the session. An exhausted input counts.
pub fn is_quit(token: Option<&str>) -> bool {
    match token {
        Some(token) => token == QUIT_TOKEN,
        None => true,
    }
}

/// Build a scripted input from string literals.
#[cfg(test)]
pub fn script<'a>(tokens: impl IntoIterator<Item = &'a str>) -> VecDeque<String> {
    tokens.into_iter().map(|t| t.to_string()).collect()
}
