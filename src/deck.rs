// Copyright 2025 Fernando Borretti
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

use crate::types::card::Card;
use crate::types::record::Record;

/// The cards eligible for study, in source order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    #[cfg(test)]
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Keeps the records flagged as useful for study and numbers the
    /// resulting cards from 1.
    pub fn from_records(records: Vec<Record>) -> Self {
        let total = records.len();
        let mut cards = Vec::new();
        for record in records.into_iter().filter(Record::is_eligible) {
            let (term, translation) = match (record.word, record.english_translation) {
                (Some(term), Some(translation)) => (term, translation),
                (term, _) => {
                    log::warn!(
                        "Skipping record without a term or translation: {}",
                        term.as_deref().unwrap_or("<no term>")
                    );
                    continue;
                }
            };
            let card = Card::new(cards.len() + 1, term, translation)
                .with_romanization(record.romanization)
                .with_example(
                    record.example_sentence_native,
                    record.example_sentence_english,
                )
                .with_level(record.cefr_level)
                .with_frequency(record.frequency_index);
            cards.push(card);
        }
        log::debug!("Kept {} of {} records.", cards.len(), total);
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
