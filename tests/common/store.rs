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

use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::anyhow;
use rstest::*;
use tempfile::{tempdir, TempDir};

use mailroom::store::{
    BlockId, BlockKey, DataStore, DirectoryConfig, DirectoryStore, MemoryConfig, MemoryStore,
    OpenStore,
};
use mailroom::Settings;

/// A fixture value which owns the temporary directory its data lives in.
///
/// The directory is deleted when this is dropped.
pub struct WithTempDir<T> {
    pub directory: TempDir,
    pub value: T,
}

impl<T> WithTempDir<T> {
    /// Create a temporary directory and build a value from its path.
    fn build(f: impl FnOnce(&TempDir) -> T) -> Self {
        let directory = tempdir().unwrap();
        let value = f(&directory);
        Self { directory, value }
    }
}

impl<T> Deref for WithTempDir<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> DerefMut for WithTempDir<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

/// A config for a memory store whose writes to the key table can be made to fail.
///
/// Every store opened from this config, and from clones of it, shares the same switch.
#[derive(Debug, Clone, Default)]
pub struct FailingConfig {
    inner: MemoryConfig,
    fail_super: Arc<AtomicBool>,
}

impl FailingConfig {
    /// Make writes to `BlockKey::Super` fail until this is called with `false`.
    pub fn fail_commits(&self, fail: bool) {
        self.fail_super.store(fail, Ordering::SeqCst);
    }
}

impl OpenStore for FailingConfig {
    type Store = FailingStore;

    fn open(&self) -> mailroom::Result<Self::Store> {
        Ok(FailingStore {
            inner: self.inner.open()?,
            fail_super: Arc::clone(&self.fail_super),
        })
    }

    fn lock_id(&self) -> mailroom::Result<String> {
        self.inner.lock_id()
    }
}

#[derive(Debug)]
pub struct FailingStore {
    inner: MemoryStore,
    fail_super: Arc<AtomicBool>,
}

impl DataStore for FailingStore {
    fn write_block(&mut self, key: BlockKey, data: &[u8]) -> anyhow::Result<()> {
        if key == BlockKey::Super && self.fail_super.load(Ordering::SeqCst) {
            return Err(anyhow!("No space left on device."));
        }
        self.inner.write_block(key, data)
    }

    fn read_block(&mut self, key: BlockKey) -> anyhow::Result<Option<Vec<u8>>> {
        self.inner.read_block(key)
    }

    fn remove_block(&mut self, key: BlockKey) -> anyhow::Result<()> {
        self.inner.remove_block(key)
    }

    fn list_blocks(&mut self) -> anyhow::Result<Vec<BlockId>> {
        self.inner.list_blocks()
    }
}

#[fixture]
pub fn memory_config() -> MemoryConfig {
    MemoryConfig::new()
}

#[fixture]
pub fn failing_config() -> FailingConfig {
    FailingConfig::default()
}

#[fixture]
pub fn directory_config() -> WithTempDir<DirectoryConfig> {
    WithTempDir::build(|directory| DirectoryConfig {
        path: directory.path().join("store"),
    })
}

#[fixture]
pub fn directory_store(directory_config: WithTempDir<DirectoryConfig>) -> WithTempDir<DirectoryStore> {
    let store = directory_config.open().unwrap();
    WithTempDir {
        directory: directory_config.directory,
        value: store,
    }
}

/// Settings which put named stores in a temporary directory.
#[fixture]
pub fn settings() -> WithTempDir<Settings> {
    WithTempDir::build(|directory| Settings {
        data_dir: directory.path().to_path_buf(),
        log_level: String::from("debug"),
    })
}
