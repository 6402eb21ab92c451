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

use clap::ValueEnum;
use serde::Serialize;

use crate::deck::Deck;
use crate::error::Fallible;
use crate::filter::category_counts;
use crate::loader::DeckSource;
use crate::loader::load_deck;
use crate::types::category::Category;

#[derive(ValueEnum, Clone)]
pub enum StatsFormat {
    /// Plain text output.
    Text,
    /// JSON output.
    Json,
}

impl Display for StatsFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsFormat::Text => write!(f, "text"),
            StatsFormat::Json => write!(f, "json"),
        }
    }
}

pub async fn print_deck_stats(source: &DeckSource, format: StatsFormat) -> Fallible<()> {
    let deck = load_deck(source).await?;
    let stats = Stats::of(&deck);
    match format {
        StatsFormat::Text => {
            print!("{}", stats.to_text());
        }
        StatsFormat::Json => {
            let stats_json = serde_json::to_string_pretty(&stats)?;
            println!("{stats_json}");
        }
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    card_count: usize,
    unlevelled_count: usize,
    levels: Vec<LevelCount>,
}

#[derive(Serialize)]
pub struct LevelCount {
    level: Category,
    count: usize,
}

impl Stats {
    pub fn of(deck: &Deck) -> Self {
        let levels: Vec<LevelCount> = category_counts(deck)
            .into_iter()
            .filter(|(level, _)| *level != Category::All)
            .map(|(level, count)| LevelCount { level, count })
            .collect();
        let levelled: usize = levels.iter().map(|l| l.count).sum();
        Self {
            card_count: deck.len(),
            unlevelled_count: deck.len() - levelled,
            levels,
        }
    }

    fn to_text(&self) -> String {
        let mut out = format!("Cards: {}\n", self.card_count);
        for level in &self.levels {
            out.push_str(&format!("{}: {}\n", level.level, level.count));
        }
        if self.unlevelled_count > 0 {
            out.push_str(&format!("No level: {}\n", self.unlevelled_count));
        }
        out
    }
}
