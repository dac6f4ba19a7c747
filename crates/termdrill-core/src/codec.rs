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

//! Reading and writing glossary files.
//!
//! A glossary file holds one entry per line, with the term and the
//! definition separated by `||`:
//!
//! ```text
//! term1||definition1
//! term2||definition2
//! ```
//!
//! There is no escaping, so the delimiter can't appear inside a term or a
//! definition. Lines where it does are rejected rather than guessed at.

use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;

use crate::types::entry::DELIMITER;
use crate::types::entry::Entry;
use crate::types::glossary::Glossary;

#[derive(Debug, PartialEq)]
pub struct ParserError {
    pub message: String,
    pub source_path: String,
    pub line_num: usize,
}

impl ParserError {
    fn new(message: impl Into<String>, source_path: &str, line_num: usize) -> Self {
        ParserError {
            message: message.into(),
            source_path: source_path.to_string(),
            line_num,
        }
    }
}

impl Display for ParserError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} Location: {}:{}",
            self.message,
            self.source_path,
            self.line_num + 1
        )
    }
}

impl Error for ParserError {}

/// Parse the contents of a glossary file.
///
/// # Arguments
/// * `source_path` - A reference path for error messages
/// * `text` - The file contents
pub fn parse_glossary(source_path: &str, text: &str) -> Result<Glossary, ParserError> {
    let mut entries = Vec::new();
    for (line_num, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        entries.push(parse_line(source_path, line, line_num)?);
    }
    Ok(Glossary::from_entries(entries))
}

fn parse_line(source_path: &str, line: &str, line_num: usize) -> Result<Entry, ParserError> {
    let parts: Vec<&str> = line.split(DELIMITER).collect();
    match parts.as_slice() {
        [term, definition] => Entry::new(*term, *definition)
            .map_err(|e| ParserError::new(capitalize(e.message()), source_path, line_num)),
        [_] => Err(ParserError::new(
            format!("Missing '{DELIMITER}' between term and definition."),
            source_path,
            line_num,
        )),
        _ => Err(ParserError::new(
            format!("Found more than one '{DELIMITER}' on a single line."),
            source_path,
            line_num,
        )),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Render a glossary in the file format, in glossary order.
pub fn serialize_glossary(glossary: &Glossary) -> String {
    let mut out = String::new();
    for entry in glossary.iter() {
        out.push_str(entry.term());
        out.push_str(DELIMITER);
        out.push_str(entry.definition());
        out.push('\n');
    }
    out
}
