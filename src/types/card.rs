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

use serde::Serialize;
use serde_json::Number;

/// A single vocabulary card. Immutable once the deck is loaded.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Position in the deck, starting at 1.
    id: usize,
    /// The Korean term, shown on the front.
    term: String,
    /// The English translation, shown on the back.
    translation: String,
    romanization: Option<String>,
    example_sentence: Option<String>,
    example_translation: Option<String>,
    /// The CEFR level label, e.g. `A1`.
    level: Option<String>,
    /// Rank in the source frequency list.
    frequency: Option<Number>,
}

impl Card {
    pub fn new(id: usize, term: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            id,
            term: term.into(),
            translation: translation.into(),
            romanization: None,
            example_sentence: None,
            example_translation: None,
            level: None,
            frequency: None,
        }
    }

    pub fn with_romanization(mut self, romanization: Option<String>) -> Self {
        self.romanization = non_empty(romanization);
        self
    }

    pub fn with_example(mut self, sentence: Option<String>, translation: Option<String>) -> Self {
        self.example_sentence = non_empty(sentence);
        self.example_translation = non_empty(translation);
        self
    }

    /// Empty labels are treated as no label at all.
    pub fn with_level(mut self, level: Option<String>) -> Self {
        self.level = non_empty(level);
        self
    }

    pub fn with_frequency(mut self, frequency: Option<Number>) -> Self {
        self.frequency = frequency;
        self
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn translation(&self) -> &str {
        &self.translation
    }

    pub fn romanization(&self) -> Option<&str> {
        self.romanization.as_deref()
    }

    pub fn example_sentence(&self) -> Option<&str> {
        self.example_sentence.as_deref()
    }

    pub fn example_translation(&self) -> Option<&str> {
        self.example_translation.as_deref()
    }

    pub fn level(&self) -> Option<&str> {
        self.level.as_deref()
    }

    pub fn frequency(&self) -> Option<&Number> {
        self.frequency.as_ref()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_optionals_are_dropped() {
        let card = Card::new(1, "사과", "apple")
            .with_romanization(Some("sagwa".to_string()))
            .with_example(Some(" ".to_string()), None)
            .with_level(Some(String::new()));
        assert_eq!(card.romanization(), Some("sagwa"));
        assert_eq!(card.example_sentence(), None);
        assert_eq!(card.level(), None);
    }

    #[test]
    fn test_serialize() -> Result<(), serde_json::Error> {
        let card = Card::new(3, "물", "water")
            .with_level(Some("A1".to_string()))
            .with_frequency(Some(Number::from(42)));
        let json = serde_json::to_value(&card)?;
        assert_eq!(json["id"], 3);
        assert_eq!(json["term"], "물");
        assert_eq!(json["level"], "A1");
        assert_eq!(json["frequency"], 42);
        assert!(json["exampleSentence"].is_null());
        Ok(())
    }
}
