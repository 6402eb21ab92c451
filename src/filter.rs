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

use std::collections::BTreeSet;

use crate::deck::Deck;
use crate::types::card::Card;
use crate::types::category::Category;

/// The selectable categories: `All` first, then every distinct level in the
/// deck in ascending order.
pub fn categories(deck: &Deck) -> Vec<Category> {
    let levels: BTreeSet<&str> = deck.cards().iter().filter_map(Card::level).collect();
    let mut result = Vec::with_capacity(levels.len() + 1);
    result.push(Category::All);
    result.extend(
        levels
            .into_iter()
            .filter(|level| *level != Category::All.label())
            .map(Category::parse),
    );
    result
}

/// Positions in the deck of the cards matching `selected`, in deck order.
pub fn matching_indices(deck: &Deck, selected: &Category) -> Vec<usize> {
    deck.cards()
        .iter()
        .enumerate()
        .filter(|(_, card)| selected.matches(card.level()))
        .map(|(idx, _)| idx)
        .collect()
}

/// The cards matching `selected`, in deck order. A category absent from the
/// deck yields nothing.
pub fn filtered_view<'a>(deck: &'a Deck, selected: &Category) -> Vec<&'a Card> {
    matching_indices(deck, selected)
        .into_iter()
        .map(|idx| &deck.cards()[idx])
        .collect()
}

/// Number of cards per category, in `categories` order.
pub fn category_counts(deck: &Deck) -> Vec<(Category, usize)> {
    categories(deck)
        .into_iter()
        .map(|category| {
            let count = filtered_view(deck, &category).len();
            (category, count)
        })
        .collect()
}
