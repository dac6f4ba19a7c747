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

use crate::rng::TinyRng;
use crate::rng::shuffle;
use crate::types::bank::MAX_CANDIDATES;
use crate::types::bank::Question;
use crate::types::bank::QuizBank;
use crate::types::direction::QuizDirection;
use crate::types::glossary::Glossary;

/// Build a multiple-choice quiz bank from a glossary.
///
/// Each entry becomes a question whose prompt is the side selected by
/// `direction`. The correct answer is the other side, and comes first in the
/// candidate list. Distractors are drawn from the other entries' answers by
/// walking a freshly shuffled pool and keeping values not yet in the list,
/// until there are four candidates or the pool runs out. With fewer than four
/// distinct answers in the glossary, questions simply have fewer candidates.
pub fn build(glossary: &Glossary, direction: QuizDirection, rng: &mut TinyRng) -> QuizBank {
    let pool: Vec<&str> = glossary.iter().map(|e| direction.answer(e)).collect();
    let mut bank = QuizBank::new(direction);
    for entry in glossary.iter() {
        let pool: Vec<&str> = shuffle(pool.clone(), rng);
        let mut candidates: Vec<String> = vec![direction.answer(entry).to_string()];
        for value in pool {
            if candidates.len() == MAX_CANDIDATES {
                break;
            }
            if !candidates.iter().any(|c| c == value) {
                candidates.push(value.to_string());
            }
        }
        bank.insert(Question::new(direction.prompt(entry), candidates));
    }
    log::debug!(
        "Built a {direction} quiz bank with {} questions from {} entries.",
        bank.len(),
        glossary.len()
    );
    bank
}
