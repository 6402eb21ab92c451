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

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::drill::state::ServerState;
use crate::loader::LoadStatus;
use crate::types::card::Card;
use crate::types::category::Category;

/// Everything the page shows, as JSON.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    status: &'static str,
    message: Option<String>,
    deck_size: usize,
    categories: Vec<Category>,
    selected: Option<Category>,
    position: usize,
    total: usize,
    revealed: bool,
    card: Option<Card>,
}

impl Snapshot {
    pub fn of(status: &LoadStatus) -> Self {
        let mut snapshot = Snapshot {
            status: status.label(),
            message: None,
            deck_size: 0,
            categories: Vec::new(),
            selected: None,
            position: 0,
            total: 0,
            revealed: false,
            card: None,
        };
        match status {
            LoadStatus::Loading => {}
            LoadStatus::Failed(message) => {
                snapshot.message = Some(message.clone());
            }
            LoadStatus::Ready(session) => {
                snapshot.deck_size = session.deck().len();
                snapshot.categories = session.categories().to_vec();
                snapshot.selected = Some(session.selected().clone());
                snapshot.position = session.position();
                snapshot.total = session.total();
                snapshot.revealed = session.revealed();
                snapshot.card = session.current().cloned();
            }
        }
        snapshot
    }
}

pub async fn state_handler(State(state): State<ServerState>) -> Json<Snapshot> {
    let status = state.lock();
    Json(Snapshot::of(&status))
}
