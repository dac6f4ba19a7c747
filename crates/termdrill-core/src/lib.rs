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

//! termdrill-core: the study engine behind termdrill.
//!
//! This library provides:
//! - The glossary model and its `term||definition` file format
//! - Multiple-choice quiz bank generation with distractors
//! - The quiz and flash card session state machines
//! - A small seedable PRNG used for every shuffle

pub mod builder;
pub mod channel;
pub mod codec;
pub mod error;
pub mod flash;
pub mod rng;
pub mod runner;
pub mod sample;
pub mod types;

// Re-exports for convenience
pub use builder::build;
pub use channel::{Input, Output, QUIT_TOKEN};
pub use codec::{ParserError, parse_glossary, serialize_glossary};
pub use error::{ErrorReport, Fallible, fail};
pub use flash::{FlashEvent, FlashOutcome, FlashSession};
pub use rng::TinyRng;
pub use runner::{QuizEvent, QuizOutcome, QuizRunner, Score};
pub use types::bank::{Question, QuizBank};
pub use types::direction::QuizDirection;
pub use types::entry::Entry;
pub use types::glossary::Glossary;
