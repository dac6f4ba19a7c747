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

use serde::Serialize;

use crate::error::Fallible;
use crate::error::fail;

/// Separates the term from the definition on each line of a glossary file.
pub const DELIMITER: &str = "||";

/// A term and its definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Entry {
    term: String,
    definition: String,
}

impl Entry {
    /// Construct an entry. Both sides are trimmed, must be non-empty, and
    /// must not contain the file delimiter, since the file format has no
    /// escaping.
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Fallible<Self> {
        let term: String = term.into().trim().to_string();
        let definition: String = definition.into().trim().to_string();
        if term.is_empty() {
            return fail("term is empty.");
        }
        if definition.is_empty() {
            return fail(format!("definition for '{term}' is empty."));
        }
        if term.contains(DELIMITER) {
            return fail(format!("term '{term}' contains the reserved sequence '{DELIMITER}'."));
        }
        if definition.contains(DELIMITER) {
            return fail(format!(
                "definition for '{term}' contains the reserved sequence '{DELIMITER}'."
            ));
        }
        Ok(Self { term, definition })
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }
}
