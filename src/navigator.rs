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
use crate::error::fail;

/// Where we are in the filtered view, and whether the back of the card is
/// showing. Every operation takes the current length of the view; with an
/// empty view they are rejected and the state is left untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Navigator {
    position: usize,
    revealed: bool,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// Advances to the next card, wrapping to the first.
    pub fn next(&mut self, len: usize) -> Fallible<()> {
        require_cards(len)?;
        self.move_to((self.position + 1) % len);
        Ok(())
    }

    /// Steps back to the previous card, wrapping to the last.
    pub fn previous(&mut self, len: usize) -> Fallible<()> {
        require_cards(len)?;
        let position = if self.position == 0 {
            len - 1
        } else {
            self.position - 1
        };
        self.move_to(position);
        Ok(())
    }

    pub fn toggle_reveal(&mut self, len: usize) -> Fallible<()> {
        require_cards(len)?;
        self.revealed = !self.revealed;
        Ok(())
    }

    /// Back to the first card, front side up. Called whenever the view
    /// itself is replaced.
    pub fn reset(&mut self) {
        self.move_to(0);
    }

    fn move_to(&mut self, position: usize) {
        self.position = position;
        self.revealed = false;
    }
}

fn require_cards(len: usize) -> Fallible<()> {
    if len == 0 {
        fail("there are no cards to navigate.")
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps() -> Fallible<()> {
        let mut nav = Navigator::new();
        nav.next(3)?;
        nav.next(3)?;
        assert_eq!(nav.position(), 2);
        nav.next(3)?;
        assert_eq!(nav.position(), 0);
        Ok(())
    }

    #[test]
    fn test_previous_wraps() -> Fallible<()> {
        let mut nav = Navigator::new();
        nav.previous(4)?;
        assert_eq!(nav.position(), 3);
        nav.previous(4)?;
        assert_eq!(nav.position(), 2);
        Ok(())
    }

    #[test]
    fn test_full_cycle_returns_to_start() -> Fallible<()> {
        for len in 1..=7 {
            for start in 0..len {
                let mut nav = Navigator::new();
                for _ in 0..start {
                    nav.next(len)?;
                }
                for _ in 0..len {
                    nav.next(len)?;
                }
                assert_eq!(nav.position(), start);
                for _ in 0..len {
                    nav.previous(len)?;
                }
                assert_eq!(nav.position(), start);
            }
        }
        Ok(())
    }

    #[test]
    fn test_single_card_next_stays_put() -> Fallible<()> {
        let mut nav = Navigator::new();
        nav.next(1)?;
        assert_eq!(nav.position(), 0);
        nav.previous(1)?;
        assert_eq!(nav.position(), 0);
        Ok(())
    }

    #[test]
    fn test_toggle_twice_restores() -> Fallible<()> {
        let mut nav = Navigator::new();
        nav.toggle_reveal(2)?;
        assert!(nav.revealed());
        nav.toggle_reveal(2)?;
        assert!(!nav.revealed());
        assert_eq!(nav.position(), 0);
        Ok(())
    }

    #[test]
    fn test_moving_hides_the_answer() -> Fallible<()> {
        let mut nav = Navigator::new();
        nav.toggle_reveal(2)?;
        nav.next(2)?;
        assert!(!nav.revealed());
        nav.toggle_reveal(2)?;
        nav.previous(2)?;
        assert!(!nav.revealed());
        nav.toggle_reveal(1)?;
        nav.next(1)?;
        assert!(!nav.revealed());
        nav.toggle_reveal(2)?;
        nav.reset();
        assert!(!nav.revealed());
        Ok(())
    }

    #[test]
    fn test_empty_view_is_rejected() {
        let mut nav = Navigator::new();
        assert!(nav.next(0).is_err());
        assert!(nav.previous(0).is_err());
        assert!(nav.toggle_reveal(0).is_err());
        assert_eq!(nav, Navigator::new());
    }
}
