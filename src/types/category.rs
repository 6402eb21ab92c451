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

use serde::Serialize;
use serde::Serializer;

const ALL: &str = "All";

/// A proficiency filter: every card, or only cards with a given level.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Category {
    #[default]
    All,
    Level(String),
}

impl Category {
    /// Parses a selector value. The literal `All` always means no filter.
    pub fn parse(label: &str) -> Self {
        if label == ALL {
            Category::All
        } else {
            Category::Level(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Category::All => ALL,
            Category::Level(level) => level,
        }
    }

    pub fn matches(&self, level: Option<&str>) -> bool {
        match self {
            Category::All => true,
            Category::Level(wanted) => level == Some(wanted.as_str()),
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
