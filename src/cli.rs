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

use clap::Parser;

use crate::cmd::levels::print_levels;
use crate::cmd::stats::StatsFormat;
use crate::cmd::stats::print_deck_stats;
use crate::drill::server::ServerConfig;
use crate::drill::server::start_server;
use crate::error::Fallible;
use crate::loader::DEFAULT_SOURCE;
use crate::loader::DeckSource;
use crate::types::category::Category;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Drill flashcards in the browser.
    Drill {
        /// URL or path of the deck document.
        #[arg(long, default_value = DEFAULT_SOURCE)]
        source: String,
        /// The address to bind to.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// The port to listen on.
        #[arg(long, default_value_t = 8000)]
        port: u16,
        /// The CEFR level to start with.
        #[arg(long, default_value = "All")]
        level: String,
        /// Don't open the browser.
        #[arg(long)]
        no_open: bool,
    },
    /// List the CEFR levels in the deck.
    Levels {
        /// URL or path of the deck document.
        #[arg(long, default_value = DEFAULT_SOURCE)]
        source: String,
    },
    /// Print deck statistics.
    Stats {
        /// URL or path of the deck document.
        #[arg(long, default_value = DEFAULT_SOURCE)]
        source: String,
        /// Output format.
        #[arg(long, default_value_t = StatsFormat::Text)]
        format: StatsFormat,
    },
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Drill {
            source,
            host,
            port,
            level,
            no_open,
        } => {
            let config = ServerConfig {
                host,
                port,
                source: DeckSource::parse(&source),
                level: Category::parse(&level),
                open_browser: !no_open,
            };
            start_server(config).await
        }
        Command::Levels { source } => print_levels(&DeckSource::parse(&source)).await,
        Command::Stats { source, format } => {
            print_deck_stats(&DeckSource::parse(&source), format).await
        }
    }
}
