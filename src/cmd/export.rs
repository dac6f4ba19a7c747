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

use std::fs::write;

use termdrill_core::Glossary;
use termdrill_core::error::Fallible;

/// Export the glossary as a JSON array of `{term, definition}` objects,
/// either to a file or to stdout.
pub fn export_glossary(glossary: &Glossary, output: Option<String>) -> Fallible<()> {
    let json: String = render_json(glossary)?;
    match output {
        Some(path) => {
            write(&path, json)?;
            log::debug!("Exported {} entries to {path}.", glossary.len());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn render_json(glossary: &Glossary) -> Fallible<String> {
    Ok(serde_json::to_string_pretty(glossary)?)
}
