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

use crate::types::entry::Entry;

/// The term to definition mapping. Terms are unique. Iteration follows
/// insertion order; replacing a definition keeps the term where it was.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Glossary {
    entries: Vec<Entry>,
}

impl Glossary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a glossary from entries. When a term repeats, the later
    /// definition wins.
    pub fn from_entries(entries: impl IntoIterator<Item = Entry>) -> Self {
        let mut glossary = Self::new();
        for entry in entries {
            glossary.upsert(entry);
        }
        glossary
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn get(&self, term: &str) -> Option<&str> {
        self.position(term).map(|idx| self.entries[idx].definition())
    }

    pub fn contains(&self, term: &str) -> bool {
        self.position(term).is_some()
    }

    /// Return a copy of this glossary with the entry added, or with the
    /// term's definition replaced if it already exists.
    pub fn with_entry(&self, entry: Entry) -> Self {
        let mut copy = self.clone();
        copy.upsert(entry);
        copy
    }

    /// Return a copy of this glossary without the given term. Removing a
    /// term that doesn't exist is not an error.
    pub fn without_term(&self, term: &str) -> Self {
        let entries: Vec<Entry> = self
            .entries
            .iter()
            .filter(|entry| entry.term() != term)
            .cloned()
            .collect();
        Self { entries }
    }

    /// Entries sorted by term, then by definition.
    pub fn sorted(&self) -> Vec<&Entry> {
        let mut entries: Vec<&Entry> = self.entries.iter().collect();
        entries.sort_by(|a, b| {
            a.term()
                .cmp(b.term())
                .then_with(|| a.definition().cmp(b.definition()))
        });
        entries
    }

    fn position(&self, term: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.term() == term)
    }

    fn upsert(&mut self, entry: Entry) {
        match self.position(entry.term()) {
            Some(idx) => self.entries[idx] = entry,
            None => self.entries.push(entry),
        }
    }
}
