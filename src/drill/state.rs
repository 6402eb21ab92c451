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

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

use crate::loader::DeckSource;
use crate::loader::LoadStatus;

#[derive(Clone)]
pub struct ServerState {
    pub source: DeckSource,
    pub mutable: Arc<Mutex<LoadStatus>>,
}

impl ServerState {
    pub fn new(source: DeckSource) -> Self {
        Self {
            source,
            mutable: Arc::new(Mutex::new(LoadStatus::Loading)),
        }
    }

    /// Every handler holds the lock for the whole request and never
    /// panics while holding it, so a poisoned lock still holds a
    /// consistent status.
    pub fn lock(&self) -> MutexGuard<'_, LoadStatus> {
        self.mutable.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
