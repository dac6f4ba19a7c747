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

use crate::channel::Input;
use crate::channel::Output;
use crate::channel::is_quit;
use crate::rng::TinyRng;
use crate::rng::shuffle;
use crate::types::entry::Entry;
use crate::types::glossary::Glossary;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlashEvent {
    InsufficientEntries,
    Started { total: usize },
    /// The front of a card: the term.
    Front { number: usize, total: usize, term: String },
    /// The back of a card: the definition.
    Back { definition: String },
    EndOfDeck,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashOutcome {
    Insufficient,
    Completed { shown: usize },
    Aborted { shown: usize },
}

/// Shows every entry once, in random order. After each side of a card, one
/// token is read: the quit token ends the session, anything else moves on.
pub struct FlashSession<'a> {
    rng: &'a mut TinyRng,
}

impl<'a> FlashSession<'a> {
    pub fn new(rng: &'a mut TinyRng) -> Self {
        Self { rng }
    }

    pub fn run(
        &mut self,
        glossary: &Glossary,
        input: &mut impl Input,
        output: &mut impl Output<FlashEvent>,
    ) -> FlashOutcome {
        if glossary.is_empty() {
            output.emit(FlashEvent::InsufficientEntries);
            return FlashOutcome::Insufficient;
        }
        let cards: Vec<&Entry> = shuffle(glossary.iter().collect(), self.rng);
        let total = cards.len();
        output.emit(FlashEvent::Started { total });
        for (idx, card) in cards.into_iter().enumerate() {
            output.emit(FlashEvent::Front {
                number: idx + 1,
                total,
                term: card.term().to_string(),
            });
            if is_quit(input.next_token().as_deref()) {
                return FlashOutcome::Aborted { shown: idx };
            }
            output.emit(FlashEvent::Back {
                definition: card.definition().to_string(),
            });
            if is_quit(input.next_token().as_deref()) {
                return FlashOutcome::Aborted { shown: idx + 1 };
            }
        }
        output.emit(FlashEvent::EndOfDeck);
        FlashOutcome::Completed { shown: total }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::channel::script;
    use crate::sample::sample_glossary;

    #[test]
    fn test_empty_glossary() {
        let mut rng = TinyRng::from_seed(0);
        let mut events: Vec<FlashEvent> = Vec::new();
        let outcome =
            FlashSession::new(&mut rng).run(&Glossary::new(), &mut script(["x"]), &mut events);
        assert_eq!(outcome, FlashOutcome::Insufficient);
        assert_eq!(events, vec![FlashEvent::InsufficientEntries]);
    }

    #[test]
    fn test_every_card_shown_once() {
        let glossary = sample_glossary();
        let tokens: Vec<&str> = vec![""; glossary.len() * 2];
        let mut rng = TinyRng::from_seed(17);
        let mut events: Vec<FlashEvent> = Vec::new();
        let outcome = FlashSession::new(&mut rng).run(&glossary, &mut script(tokens), &mut events);
        assert_eq!(
            outcome,
            FlashOutcome::Completed {
                shown: glossary.len()
            }
        );
        let terms: HashSet<String> = events
            .iter()
            .filter_map(|e| match e {
                FlashEvent::Front { term, .. } => Some(term.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(terms.len(), glossary.len());
        assert_eq!(events.last(), Some(&FlashEvent::EndOfDeck));
    }

    #[test]
    fn test_back_follows_front() {
        let glossary = sample_glossary();
        let mut rng = TinyRng::from_seed(3);
        let mut events: Vec<FlashEvent> = Vec::new();
        FlashSession::new(&mut rng).run(&glossary, &mut script(["", "quit"]), &mut events);
        let term = match &events[1] {
            FlashEvent::Front { term, .. } => term.clone(),
            other => panic!("expected a card front, got {other:?}"),
        };
        assert_eq!(
            events[2],
            FlashEvent::Back {
                definition: glossary.get(&term).unwrap_or_default().to_string()
            }
        );
    }

    #[test]
    fn test_quit_on_front() {
        let glossary = sample_glossary();
        let mut rng = TinyRng::from_seed(3);
        let mut events: Vec<FlashEvent> = Vec::new();
        let outcome =
            FlashSession::new(&mut rng).run(&glossary, &mut script(["", "", "quit"]), &mut events);
        assert_eq!(outcome, FlashOutcome::Aborted { shown: 1 });
        assert!(!events.contains(&FlashEvent::EndOfDeck));
    }

    #[test]
    fn test_quit_on_back() {
        let glossary = sample_glossary();
        let mut rng = TinyRng::from_seed(3);
        let mut events: Vec<FlashEvent> = Vec::new();
        let outcome =
            FlashSession::new(&mut rng).run(&glossary, &mut script(["next", "quit"]), &mut events);
        assert_eq!(outcome, FlashOutcome::Aborted { shown: 1 });
    }
}
