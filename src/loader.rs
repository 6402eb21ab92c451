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

use std::fmt::Display;
use std::fmt::Formatter;
use std::path::PathBuf;
use std::time::Instant;

use serde_json::Value;

use crate::deck::Deck;
use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::error::fail;
use crate::session::Session;
use crate::types::category::Category;
use crate::types::record::Record;

/// The published deck of Korean flashcards.
pub const DEFAULT_SOURCE: &str = "https://raw.githubusercontent.com/vbvss199/Language-Learning-decks/main/korean_flashcards_2.5flash_5k_true.json";

const ELIGIBILITY_FLAG: &str = "useful_for_flashcard";

/// Where the deck document comes from.
#[derive(Clone, Debug, PartialEq)]
pub enum DeckSource {
    Url(String),
    File(PathBuf),
}

impl DeckSource {
    /// Anything that is not an `http(s)` URL is taken to be a file path.
    pub fn parse(source: &str) -> Self {
        if source.starts_with("http://") || source.starts_with("https://") {
            DeckSource::Url(source.to_string())
        } else {
            DeckSource::File(PathBuf::from(source))
        }
    }
}

impl Default for DeckSource {
    fn default() -> Self {
        DeckSource::parse(DEFAULT_SOURCE)
    }
}

impl Display for DeckSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DeckSource::Url(url) => write!(f, "{url}"),
            DeckSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Fetches and parses the deck. Every failure, whether transport, status,
/// or parse, comes back as a single human-readable message.
pub async fn load_deck(source: &DeckSource) -> Fallible<Deck> {
    log::debug!("Loading deck from {source}...");
    let start = Instant::now();
    let text = match source {
        DeckSource::Url(url) => fetch(url).await?,
        DeckSource::File(path) => tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ErrorReport::new(format!("Failed to read flashcards: {e}")))?,
    };
    let deck = parse_document(&text)?;
    if deck.is_empty() {
        log::warn!("No cards in {source} are marked as useful for study.");
    }
    let duration = start.elapsed().as_millis();
    log::debug!("Deck of {} cards loaded in {duration}ms.", deck.len());
    Ok(deck)
}

async fn fetch(url: &str) -> Fallible<String> {
    let response = reqwest::get(url)
        .await
        .map_err(|e| ErrorReport::new(format!("Failed to fetch flashcards: {e}")))?;
    let status = response.status();
    if !status.is_success() {
        return fail(format!(
            "Failed to fetch flashcards (HTTP {})",
            status.as_u16()
        ));
    }
    response
        .text()
        .await
        .map_err(|e| ErrorReport::new(format!("Failed to fetch flashcards: {e}")))
}

/// Parses the deck document. Only entries flagged as useful for study are
/// decoded field by field, so a malformed entry that would be dropped anyway
/// cannot fail the load.
pub fn parse_document(text: &str) -> Fallible<Deck> {
    let entries: Vec<Value> = serde_json::from_str(text).map_err(parse_error)?;
    let mut records = Vec::new();
    for entry in entries {
        let eligible = match &entry {
            Value::Object(fields) => fields.get(ELIGIBILITY_FLAG) == Some(&Value::Bool(true)),
            other => {
                return fail(format!(
                    "Failed to parse flashcards: expected an object, found {other}"
                ));
            }
        };
        if eligible {
            let record: Record = serde_json::from_value(entry).map_err(parse_error)?;
            records.push(record);
        }
    }
    Ok(Deck::from_records(records))
}

fn parse_error(e: serde_json::Error) -> ErrorReport {
    ErrorReport::new(format!("Failed to parse flashcards: {e}"))
}

/// The three observable states of the one-shot load.
pub enum LoadStatus {
    Loading,
    Failed(String),
    Ready(Session),
}

impl LoadStatus {
    pub fn from_result(result: Fallible<Deck>, selected: Category) -> Self {
        match result {
            Ok(deck) => LoadStatus::Ready(Session::new(deck, selected)),
            Err(e) => {
                log::error!("{e}");
                LoadStatus::Failed(e.message().to_string())
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LoadStatus::Loading => "loading",
            LoadStatus::Failed(_) => "error",
            LoadStatus::Ready(_) => "ready",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_parse_source() {
        assert_eq!(
            DeckSource::parse("https://example.com/deck.json"),
            DeckSource::Url("https://example.com/deck.json".to_string())
        );
        assert_eq!(
            DeckSource::parse("./deck.json"),
            DeckSource::File(PathBuf::from("./deck.json"))
        );
        assert!(matches!(DeckSource::default(), DeckSource::Url(_)));
    }

    #[test]
    fn test_parse_document() -> Fallible<()> {
        let deck = parse_document(
            r#"[
                {"useful_for_flashcard": true, "word": "사과", "english_translation": "apple", "cefr_level": "A1"},
                {"useful_for_flashcard": false, "word": "바나나", "english_translation": "banana"}
            ]"#,
        )?;
        assert_eq!(deck.len(), 1);
        assert_eq!(deck.cards()[0].term(), "사과");
        Ok(())
    }

    #[test]
    fn test_parse_malformed_document() {
        let err = parse_document("[{").err();
        assert!(err.is_some_and(|e| e.message().starts_with("Failed to parse flashcards")));
        assert!(parse_document(r#"{"word": "사과"}"#).is_err());
        assert!(parse_document("[1, 2]").is_err());
    }

    #[test]
    fn test_ineligible_entries_are_not_decoded() -> Fallible<()> {
        let deck = parse_document(
            r#"[
                {"useful_for_flashcard": true, "word": "사과", "english_translation": "apple"},
                {"useful_for_flashcard": false, "word": "바나나", "english_translation": "banana", "frequency_index": "n/a"},
                {"useful_for_flashcard": "yes", "word": 7},
                {"word": null, "cefr_level": ["A1"]}
            ]"#,
        )?;
        assert_eq!(deck.len(), 1);
        assert_eq!(deck.cards()[0].term(), "사과");
        assert_eq!(deck.cards()[0].id(), 1);
        Ok(())
    }

    #[test]
    fn test_malformed_eligible_entry_fails() {
        let err = parse_document(
            r#"[{"useful_for_flashcard": true, "word": "사과", "english_translation": "apple", "frequency_index": "n/a"}]"#,
        )
        .err();
        assert!(err.is_some_and(|e| e.message().starts_with("Failed to parse flashcards")));
    }

    #[tokio::test]
    async fn test_load_from_file() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("deck.json");
        write(
            &path,
            r#"[{"useful_for_flashcard": true, "word": "물", "english_translation": "water"}]"#,
        )?;
        let deck = load_deck(&DeckSource::File(path)).await?;
        assert_eq!(deck.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let source = DeckSource::File(PathBuf::from("./derpherp.json"));
        let err = load_deck(&source).await.err();
        assert!(err.is_some_and(|e| e.message().starts_with("Failed to read flashcards")));
    }

    #[test]
    fn test_status_from_result() {
        let status = LoadStatus::from_result(fail("boom"), Category::All);
        assert_eq!(status.label(), "error");
        assert!(matches!(status, LoadStatus::Failed(ref m) if m == "boom"));
        let status = LoadStatus::from_result(Ok(Deck::default()), Category::All);
        assert_eq!(status.label(), "ready");
        assert_eq!(LoadStatus::Loading.label(), "loading");
    }
}
