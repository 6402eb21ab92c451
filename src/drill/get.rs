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

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use maud::Markup;
use maud::html;

use crate::drill::state::ServerState;
use crate::drill::template::page_template;
use crate::loader::LoadStatus;
use crate::session::Session;
use crate::types::card::Card;

pub async fn get_handler(State(state): State<ServerState>) -> (StatusCode, Html<String>) {
    let status = state.lock();
    let (body, refresh) = match &*status {
        LoadStatus::Loading => (
            html! {
                p.loading { "Loading flashcards..." }
            },
            true,
        ),
        LoadStatus::Failed(message) => (
            html! {
                p.error { (message) }
            },
            false,
        ),
        LoadStatus::Ready(session) => (render_session(session), false),
    };
    let html = page_template(body, refresh);
    (StatusCode::OK, Html(html.into_string()))
}

fn render_session(session: &Session) -> Markup {
    let selector = level_selector(session);
    match session.current() {
        None => html! {
            (selector)
            p.error { "No flashcards found for this CEFR level." }
        },
        Some(card) => {
            let flip_label = if session.revealed() {
                "Show Korean"
            } else {
                "Show English"
            };
            let counter = format!("Card {} of {}", session.ordinal(), session.total());
            html! {
                (selector)
                form.study action="/" method="post" {
                    button.card .revealed[session.revealed()] data-card=(card.id()) type="submit" name="action" value="Flip" title="Flip the card. Shortcut: space." {
                        @if session.revealed() {
                            (card_back(card))
                        } @else {
                            (card_front(card))
                        }
                    }
                    div.controls {
                        button #previous type="submit" name="action" value="Previous" title="Previous card. Shortcut: left arrow." { "Previous" }
                        button #flip type="submit" name="action" value="Flip" { (flip_label) }
                        button #next type="submit" name="action" value="Next" title="Next card. Shortcut: right arrow." { "Next" }
                    }
                }
                p.counter { (counter) }
            }
        }
    }
}

/// Only worth showing when the deck has at least one level. A selection the
/// deck doesn't have is listed too, so the control matches the page.
fn level_selector(session: &Session) -> Markup {
    if session.categories().len() <= 1 {
        return html! {};
    }
    let selected = session.selected();
    let missing = !session.categories().contains(selected);
    html! {
        form.levels action="/" method="post" {
            label for="level" { "Choose CEFR Level:" }
            select #level name="level" {
                @if missing {
                    option value=(selected.label()) selected {
                        (selected.label())
                    }
                }
                @for category in session.categories() {
                    option value=(category.label()) selected[category == session.selected()] {
                        (category.label())
                    }
                }
            }
            button #select type="submit" name="action" value="Select" { "Go" }
        }
    }
}

fn card_front(card: &Card) -> Markup {
    html! {
        span.face.front {
            span.term { (card.term()) }
            span.hint { "(Click to flip)" }
        }
    }
}

fn card_back(card: &Card) -> Markup {
    let level = card.level().unwrap_or("-");
    let frequency = card
        .frequency()
        .map(|f| f.to_string())
        .unwrap_or_else(|| "-".to_string());
    html! {
        span.face.back {
            span.translation { (card.translation()) }
            @if let Some(romanization) = card.romanization() {
                span.romanization { "[" (romanization) "]" }
            }
            @if let Some(sentence) = card.example_sentence() {
                span.example {
                    span.sentence { "\"" (sentence) "\"" }
                    @if let Some(translation) = card.example_translation() {
                        span.sentence-translation { "\"" (translation) "\"" }
                    }
                }
            }
            span.meta { "CEFR: " (level) " | Freq: " (frequency) }
        }
    }
}
