/*
 * Copyright 2019-2020 Wren Powell
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

use super::data_store::{BlockId, BlockKey, DataStore};
use super::open_store::OpenStore;

type BlockMap = Arc<Mutex<HashMap<BlockKey, Vec<u8>>>>;

/// The configuration for opening a [`MemoryStore`].
///
/// Every [`MemoryStore`] opened from the same `MemoryConfig` (or a clone of it) shares the same
/// blocks, so a repository can be closed and reopened without losing its data.
///
/// [`MemoryStore`]: crate::store::MemoryStore
#[derive(Debug, Clone)]
pub struct MemoryConfig {
    id: Uuid,
    blocks: BlockMap,
}

impl MemoryConfig {
    /// Create a new `MemoryConfig` which points to a new empty store.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            blocks: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenStore for MemoryConfig {
    type Store = MemoryStore;

    fn open(&self) -> crate::Result<Self::Store> {
        Ok(MemoryStore {
            blocks: Arc::clone(&self.blocks),
        })
    }

    fn lock_id(&self) -> crate::Result<String> {
        Ok(format!("memory:{}", self.id.as_hyphenated()))
    }
}

/// A `DataStore` which stores data in memory.
///
/// Unlike other `DataStore` implementations, data in a `MemoryStore` is not stored persistently
/// and is only accessible to the current process. This data store is useful for testing.
///
/// You can use [`MemoryConfig`] to open a data store of this type.
///
/// None of the methods in this data store will ever return `Err`.
///
/// [`MemoryConfig`]: crate::store::MemoryConfig
#[derive(Debug)]
pub struct MemoryStore {
    blocks: BlockMap,
}

impl DataStore for MemoryStore {
    fn write_block(&mut self, key: BlockKey, data: &[u8]) -> anyhow::Result<()> {
        self.blocks.lock().unwrap().insert(key, data.to_owned());
        Ok(())
    }

    fn read_block(&mut self, key: BlockKey) -> anyhow::Result<Option<Vec<u8>>> {
        Ok(self.blocks.lock().unwrap().get(&key).cloned())
    }

    fn remove_block(&mut self, key: BlockKey) -> anyhow::Result<()> {
        self.blocks.lock().unwrap().remove(&key);
        Ok(())
    }

    fn list_blocks(&mut self) -> anyhow::Result<Vec<BlockId>> {
        Ok(self
            .blocks
            .lock()
            .unwrap()
            .keys()
            .filter_map(|key| match key {
                BlockKey::Data(id) => Some(*id),
                _ => None,
            })
            .collect())
    }
}
