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

use crate::types::entry::Entry;
use crate::types::glossary::Glossary;

/// Vocabulary used when the program runs in test mode.
///
/// Source: <https://www.vocabulary.com/lists/17051>
const SAMPLE: [(&str, &str); 10] = [
    ("aftermath", "the consequences of a (catastrophic) event"),
    ("caprice", "a sudden desire"),
    ("dapper", "marked by up-to-dateness in dress and manners"),
    ("fiddle-faddle", "trivial nonsense"),
    ("heyday", "the period of greatest prosperity or productivity"),
    (
        "prate",
        "speak about unimportant matters rapidly and incessantly",
    ),
    ("revered", "profoundly honored"),
    ("timbre", "the distinctive property of a complex sound"),
    ("upsurge", "a sudden or abrupt strong increase"),
    ("whimsy", "an odd or fanciful or capricious idea"),
];

pub fn sample_glossary() -> Glossary {
    Glossary::from_entries(
        SAMPLE
            .iter()
            .filter_map(|(term, definition)| Entry::new(*term, *definition).ok()),
    )
}
