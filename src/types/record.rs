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

use serde::Deserialize;
use serde_json::Number;

/// An entry of the upstream deck document, as published. Unknown keys are
/// ignored and every key may be absent or null.
#[derive(Debug, Default, Deserialize)]
pub struct Record {
    pub useful_for_flashcard: Option<bool>,
    pub word: Option<String>,
    pub english_translation: Option<String>,
    pub romanization: Option<String>,
    pub example_sentence_native: Option<String>,
    pub example_sentence_english: Option<String>,
    pub cefr_level: Option<String>,
    pub frequency_index: Option<Number>,
}

impl Record {
    pub fn is_eligible(&self) -> bool {
        self.useful_for_flashcard.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_record() -> Result<(), serde_json::Error> {
        let record: Record = serde_json::from_str(
            r#"{
                "word": "사과",
                "english_translation": "apple",
                "romanization": "sagwa",
                "example_sentence_native": "사과를 먹어요.",
                "example_sentence_english": "I eat an apple.",
                "cefr_level": "A1",
                "frequency_index": 1203,
                "useful_for_flashcard": true,
                "part_of_speech": "noun"
            }"#,
        )?;
        assert!(record.is_eligible());
        assert_eq!(record.word.as_deref(), Some("사과"));
        assert_eq!(record.cefr_level.as_deref(), Some("A1"));
        assert_eq!(record.frequency_index, Some(Number::from(1203)));
        Ok(())
    }

    #[test]
    fn test_missing_flag_is_not_eligible() -> Result<(), serde_json::Error> {
        let record: Record = serde_json::from_str(r#"{"word": "물", "cefr_level": null}"#)?;
        assert!(!record.is_eligible());
        assert_eq!(record.cefr_level, None);
        Ok(())
    }

    #[test]
    fn test_wrong_type_is_an_error() {
        let result: Result<Record, _> = serde_json::from_str(r#"{"useful_for_flashcard": "yes"}"#);
        assert!(result.is_err());
    }
}
