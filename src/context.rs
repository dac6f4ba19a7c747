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

use termdrill_core::Glossary;
use termdrill_core::TinyRng;
use termdrill_core::error::Fallible;
use termdrill_core::sample::sample_glossary;

use crate::store::Store;

/// Everything a command needs, passed explicitly.
pub struct Context {
    pub store: Store,
    pub glossary: Glossary,
    /// In test mode the glossary holds sample data and nothing is written.
    pub test_mode: bool,
    pub rng: TinyRng,
}

impl Context {
    /// Open the store, creating an empty file if it doesn't exist yet.
    /// In test mode the file is neither read nor created.
    pub fn open(store: Store, test_mode: bool, rng: TinyRng) -> Fallible<Self> {
        let glossary = if test_mode {
            sample_glossary()
        } else {
            if !store.exists() {
                log::debug!("Creating {}.", store.path().display());
                store.create()?;
            }
            store.load()?
        };
        Ok(Self {
            store,
            glossary,
            test_mode,
            rng,
        })
    }

    /// Replace the glossary and persist it, unless in test mode.
    /// Returns whether the change was written.
    pub fn commit(&mut self, glossary: Glossary) -> Fallible<bool> {
        self.glossary = glossary;
        if self.test_mode {
            log::warn!("Test mode is on, not saving to {}.", self.store.path().display());
            return Ok(false);
        }
        self.store.save(&self.glossary)?;
        Ok(true)
    }

    /// Reload the glossary from the store. This leaves test mode.
    pub fn reload(&mut self) -> Fallible<()> {
        self.glossary = self.store.load()?;
        self.test_mode = false;
        Ok(())
    }

    pub fn enable_test_mode(&mut self) {
        self.glossary = sample_glossary();
        self.test_mode = true;
    }
}
