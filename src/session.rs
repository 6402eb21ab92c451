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

use crate::deck::Deck;
use crate::error::Fallible;
use crate::filter::categories;
use crate::filter::matching_indices;
use crate::navigator::Navigator;
use crate::types::card::Card;
use crate::types::category::Category;

/// A study session over a loaded deck.
///
/// The category list and the filtered view are derived values. They are
/// recomputed only in `load` and `select`, the two places where their inputs
/// change, and navigation is reset at the same time.
pub struct Session {
    deck: Deck,
    categories: Vec<Category>,
    selected: Category,
    view: Vec<usize>,
    nav: Navigator,
}

impl Session {
    pub fn new(deck: Deck, selected: Category) -> Self {
        let mut session = Self {
            deck: Deck::default(),
            categories: Vec::new(),
            selected,
            view: Vec::new(),
            nav: Navigator::new(),
        };
        session.load(deck);
        session
    }

    /// Replaces the deck, keeping the current selection.
    pub fn load(&mut self, deck: Deck) {
        self.deck = deck;
        self.categories = categories(&self.deck);
        self.refilter();
    }

    /// Selects a category. Re-selecting the current one changes nothing.
    pub fn select(&mut self, category: Category) {
        if category == self.selected {
            return;
        }
        log::debug!("Selected category {category}.");
        self.selected = category;
        self.refilter();
    }

    fn refilter(&mut self) {
        self.view = matching_indices(&self.deck, &self.selected);
        self.nav.reset();
    }

    pub fn next(&mut self) -> Fallible<()> {
        self.nav.next(self.view.len())
    }

    pub fn previous(&mut self) -> Fallible<()> {
        self.nav.previous(self.view.len())
    }

    pub fn toggle_reveal(&mut self) -> Fallible<()> {
        self.nav.toggle_reveal(self.view.len())
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn selected(&self) -> &Category {
        &self.selected
    }

    pub fn total(&self) -> usize {
        self.view.len()
    }

    pub fn position(&self) -> usize {
        self.nav.position()
    }

    pub fn revealed(&self) -> bool {
        self.nav.revealed()
    }

    /// The card under the cursor, or `None` when the view is empty.
    pub fn current(&self) -> Option<&Card> {
        self.view
            .get(self.nav.position())
            .map(|idx| &self.deck.cards()[*idx])
    }

    /// The one-based number of the current card, zero when there is none.
    pub fn ordinal(&self) -> usize {
        if self.view.is_empty() {
            0
        } else {
            self.nav.position() + 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: usize, term: &str, level: &str) -> Card {
        Card::new(id, term, "-").with_level(Some(level.to_string()))
    }

    fn two_fruits() -> Deck {
        Deck::new(vec![card(1, "사과", "A1"), card(2, "바나나", "A2")])
    }

    fn current_term(session: &Session) -> Option<&str> {
        session.current().map(Card::term)
    }

    #[test]
    fn test_all_shows_first_card() {
        let session = Session::new(two_fruits(), Category::All);
        assert_eq!(session.total(), 2);
        assert_eq!(session.position(), 0);
        assert_eq!(current_term(&session), Some("사과"));
        assert_eq!(session.ordinal(), 1);
    }

    #[test]
    fn test_select_resets_position() -> Fallible<()> {
        let mut session = Session::new(two_fruits(), Category::All);
        session.next()?;
        session.toggle_reveal()?;
        session.select(Category::parse("A2"));
        assert_eq!(session.total(), 1);
        assert_eq!(session.position(), 0);
        assert!(!session.revealed());
        assert_eq!(current_term(&session), Some("바나나"));
        Ok(())
    }

    #[test]
    fn test_reselecting_keeps_state() -> Fallible<()> {
        let mut session = Session::new(two_fruits(), Category::All);
        session.next()?;
        session.toggle_reveal()?;
        session.select(Category::All);
        assert_eq!(session.position(), 1);
        assert!(session.revealed());
        Ok(())
    }

    #[test]
    fn test_single_card_next() -> Fallible<()> {
        let mut session = Session::new(two_fruits(), Category::parse("A1"));
        session.next()?;
        assert_eq!(session.position(), 0);
        assert_eq!(current_term(&session), Some("사과"));
        Ok(())
    }

    #[test]
    fn test_unknown_selection_is_empty_not_error() {
        let mut session = Session::new(two_fruits(), Category::parse("C1"));
        assert_eq!(session.total(), 0);
        assert_eq!(session.current(), None);
        assert_eq!(session.ordinal(), 0);
        assert!(session.next().is_err());
        assert!(session.toggle_reveal().is_err());
        assert!(!session.revealed());
    }

    #[test]
    fn test_reload_resets_navigation() -> Fallible<()> {
        let mut session = Session::new(two_fruits(), Category::All);
        session.next()?;
        session.toggle_reveal()?;
        session.load(Deck::new(vec![card(1, "물", "A1"), card(2, "불", "B1")]));
        assert_eq!(session.position(), 0);
        assert!(!session.revealed());
        assert_eq!(current_term(&session), Some("물"));
        assert_eq!(session.categories().len(), 3);
        assert_eq!(session.deck().len(), 2);
        Ok(())
    }

    #[test]
    fn test_categories_follow_deck() {
        let session = Session::new(two_fruits(), Category::All);
        let labels: Vec<&str> = session.categories().iter().map(Category::label).collect();
        assert_eq!(labels, vec!["All", "A1", "A2"]);
        assert_eq!(session.selected(), &Category::All);
    }
}
