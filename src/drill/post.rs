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

use axum::Form;
use axum::extract::State;
use axum::response::Redirect;
use serde::Deserialize;

use crate::drill::state::ServerState;
use crate::error::Fallible;
use crate::error::fail;
use crate::loader::LoadStatus;
use crate::types::category::Category;

#[derive(Debug, Deserialize, PartialEq)]
enum Action {
    Previous,
    Flip,
    Next,
    Select,
}

#[derive(Deserialize)]
pub struct FormData {
    action: Action,
    level: Option<String>,
}

pub async fn post_handler(
    State(state): State<ServerState>,
    Form(form): Form<FormData>,
) -> Redirect {
    match action_handler(&state, form) {
        Ok(_) => {}
        Err(e) => {
            log::error!("{e}");
        }
    }
    Redirect::to("/")
}

fn action_handler(state: &ServerState, form: FormData) -> Fallible<()> {
    let mut status = state.lock();
    let session = match &mut *status {
        LoadStatus::Ready(session) => session,
        other => return fail(format!("cannot act while the deck is {}.", other.label())),
    };
    log::debug!("Action: {:?}", form.action);
    match form.action {
        Action::Previous => session.previous(),
        Action::Flip => session.toggle_reveal(),
        Action::Next => session.next(),
        Action::Select => match form.level {
            Some(level) => {
                session.select(Category::parse(&level));
                Ok(())
            }
            None => fail("no level selected."),
        },
    }
}
