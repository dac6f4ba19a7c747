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

use crate::types::entry::Entry;

/// Which side of an entry is shown, and which side is picked from the choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizDirection {
    /// Show the term, choose the definition.
    TermToDefinition,
    /// Show the definition, choose the term.
    DefinitionToTerm,
}

impl QuizDirection {
    pub fn prompt<'a>(&self, entry: &'a Entry) -> &'a str {
        match self {
            QuizDirection::TermToDefinition => entry.term(),
            QuizDirection::DefinitionToTerm => entry.definition(),
        }
    }

    pub fn answer<'a>(&self, entry: &'a Entry) -> &'a str {
        match self {
            QuizDirection::TermToDefinition => entry.definition(),
            QuizDirection::DefinitionToTerm => entry.term(),
        }
    }

    /// Given a prompt and its answer, return them as `(term, definition)`.
    pub fn as_pair<'a>(&self, prompt: &'a str, answer: &'a str) -> (&'a str, &'a str) {
        match self {
            QuizDirection::TermToDefinition => (prompt, answer),
            QuizDirection::DefinitionToTerm => (answer, prompt),
        }
    }

    pub fn instructions(&self) -> &'static str {
        match self {
            QuizDirection::TermToDefinition => "Match the term to the correct definition.",
            QuizDirection::DefinitionToTerm => "Match the definition to the correct term.",
        }
    }
}

impl Display for QuizDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizDirection::TermToDefinition => write!(f, "term-to-definition"),
            QuizDirection::DefinitionToTerm => write!(f, "definition-to-term"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Fallible;

    #[test]
    fn test_sides() -> Fallible<()> {
        let entry = Entry::new("dapper", "marked by up-to-dateness in dress and manners")?;
        let forward = QuizDirection::TermToDefinition;
        let reverse = QuizDirection::DefinitionToTerm;
        assert_eq!(forward.prompt(&entry), "dapper");
        assert_eq!(forward.answer(&entry), entry.definition());
        assert_eq!(reverse.prompt(&entry), entry.definition());
        assert_eq!(reverse.answer(&entry), "dapper");
        Ok(())
    }

    #[test]
    fn test_as_pair_puts_term_first() {
        assert_eq!(
            QuizDirection::TermToDefinition.as_pair("cat", "feline"),
            ("cat", "feline")
        );
        assert_eq!(
            QuizDirection::DefinitionToTerm.as_pair("feline", "cat"),
            ("cat", "feline")
        );
    }
}
