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

use std::io::BufRead;
use std::io::Write;

use termdrill_core::error::Fallible;
use termdrill_core::fail;

use crate::console::Console;
use crate::store::Store;

/// Check that the glossary file exists and parses.
pub fn check_store<R: BufRead, W: Write>(store: &Store, console: &Console<R, W>) -> Fallible<()> {
    if !store.exists() {
        return fail(format!("{} does not exist.", store.path().display()));
    }
    let glossary = store.load()?;
    console.print(&format!(
        "> {}: {} entries, no problems found.",
        store.path().display(),
        glossary.len()
    ));
    Ok(())
}
