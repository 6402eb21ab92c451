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

use std::time::Duration;

use axum::Router;
use axum::http::HeaderName;
use axum::http::StatusCode;
use axum::http::header::CACHE_CONTROL;
use axum::http::header::CONTENT_TYPE;
use axum::response::Html;
use axum::routing::get;
use tokio::net::TcpListener;
use tokio::net::TcpStream;
use tokio::signal::ctrl_c;
use tokio::time::sleep;

use crate::drill::api::state_handler;
use crate::drill::get::get_handler;
use crate::drill::post::post_handler;
use crate::drill::state::ServerState;
use crate::error::Fallible;
use crate::loader::DeckSource;
use crate::loader::LoadStatus;
use crate::loader::load_deck;
use crate::types::category::Category;

pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub source: DeckSource,
    /// The category selected when the deck arrives.
    pub level: Category,
    pub open_browser: bool,
}

pub async fn start_server(config: ServerConfig) -> Fallible<()> {
    let state = ServerState::new(config.source);

    // The deck is fetched exactly once, in the background, so the page can
    // show a loading state in the meantime. If the server stops first the
    // result is dropped.
    tokio::spawn(load_in_background(state.clone(), config.level));

    let app = Router::new();
    let app = app.route("/", get(get_handler).post(post_handler));
    let app = app.route("/api/state", get(state_handler));
    let app = app.route("/script.js", get(script));
    let app = app.route("/style.css", get(stylesheet));
    let app = app.fallback(not_found_handler);
    let app = app.with_state(state);
    let bind = format!("{}:{}", config.host, config.port);

    if config.open_browser {
        let url = format!("http://{bind}/");
        let target = bind.clone();
        tokio::spawn(async move {
            loop {
                if let Ok(stream) = TcpStream::connect(target.as_str()).await {
                    drop(stream);
                    break;
                }
                sleep(Duration::from_millis(1)).await;
            }
            if let Err(e) = open::that(&url) {
                log::warn!("Could not open {url}: {e}");
            }
        });
    }

    log::debug!("Starting server on {bind}");
    let listener = TcpListener::bind(bind.as_str()).await?;
    println!("Serving flashcards on http://{bind}/");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn load_in_background(state: ServerState, level: Category) {
    let result = load_deck(&state.source).await;
    *state.lock() = LoadStatus::from_result(result, level);
}

async fn shutdown_signal() {
    match ctrl_c().await {
        Ok(()) => log::debug!("Shutting down."),
        Err(e) => {
            log::error!("Cannot listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    }
}

async fn script() -> (StatusCode, [(HeaderName, &'static str); 1], &'static str) {
    (
        StatusCode::OK,
        [(CONTENT_TYPE, "text/javascript")],
        include_str!("script.js"),
    )
}

async fn stylesheet() -> (StatusCode, [(HeaderName, &'static str); 2], &'static [u8]) {
    let bytes = include_bytes!("style.css");
    (
        StatusCode::OK,
        [
            (CONTENT_TYPE, "text/css"),
            (CACHE_CONTROL, "public, max-age=604800, immutable"),
        ],
        bytes,
    )
}

async fn not_found_handler() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html("Not Found".to_string()))
}
