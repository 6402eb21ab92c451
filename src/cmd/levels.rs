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

use crate::error::Fallible;
use crate::filter::categories;
use crate::loader::DeckSource;
use crate::loader::load_deck;

pub async fn print_levels(source: &DeckSource) -> Fallible<()> {
    let deck = load_deck(source).await?;
    for category in categories(&deck) {
        println!("{category}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs::write;
    use std::path::PathBuf;

    use tempfile::tempdir;

    use super::*;

    #[tokio::test]
    async fn test_non_existent_file() {
        let source = DeckSource::File(PathBuf::from("./derpherp.json"));
        assert!(print_levels(&source).await.is_err());
    }

    #[tokio::test]
    async fn test_file() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("deck.json");
        write(
            &path,
            r#"[{"useful_for_flashcard": true, "word": "물", "english_translation": "water", "cefr_level": "A1"}]"#,
        )?;
        print_levels(&DeckSource::File(path)).await
    }
}
