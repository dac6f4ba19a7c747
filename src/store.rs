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

use std::fs::read_to_string;
use std::fs::write;
use std::path::Path;
use std::path::PathBuf;

use termdrill_core::Glossary;
use termdrill_core::error::Fallible;
use termdrill_core::parse_glossary;
use termdrill_core::serialize_glossary;

/// The glossary file on disk.
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Write an empty glossary file, replacing whatever was there.
    pub fn create(&self) -> Fallible<()> {
        self.save(&Glossary::new())
    }

    pub fn load(&self) -> Fallible<Glossary> {
        let text = read_to_string(&self.path)?;
        let glossary = parse_glossary(&self.path.display().to_string(), &text)?;
        log::debug!(
            "Loaded {} entries from {}.",
            glossary.len(),
            self.path.display()
        );
        Ok(glossary)
    }

    pub fn save(&self, glossary: &Glossary) -> Fallible<()> {
        write(&self.path, serialize_glossary(glossary))?;
        log::debug!(
            "Saved {} entries to {}.",
            glossary.len(),
            self.path.display()
        );
        Ok(())
    }
}
