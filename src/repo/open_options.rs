/*
 * Copyright 2019-2021 Wren Powell
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

use crate::store::{BlockKey, DataStore, OpenStore};

use super::lock::lock_store;
use super::value::{Key, Value, ValueRepo};

/// The mode to use to open a repository.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum OpenMode {
    /// Open an existing repository, failing if it doesn't exist.
    Open,

    /// Open an existing repository or create a new one if it doesn't exist.
    Create,

    /// Create a new repository, failing if it already exists.
    CreateNew,
}

/// Open or create a repository.
///
/// This type is a builder used to open or create repositories. Typically, when using `OpenOptions`,
/// you'll first call [`new`], then chain method calls to configure how the repository will be
/// opened, and then finally call [`open`].
///
/// To open or create a repository, you'll need a value which implements [`OpenStore`] to pass to
/// [`open`]. You can think of this value as the configuration necessary to open the backing data
/// store.
///
/// # Examples
/// ```
/// use mailroom::repo::{OpenOptions, OpenMode, ValueRepo};
/// use mailroom::store::MemoryConfig;
///
/// let store_config = MemoryConfig::new();
/// let mut repo: ValueRepo<String, u64> = OpenOptions::new()
///     .mode(OpenMode::Create)
///     .open(&store_config)
///     .unwrap();
/// ```
///
/// [`new`]: crate::repo::OpenOptions::new
/// [`open`]: crate::repo::OpenOptions::open
/// [`OpenStore`]: crate::store::OpenStore
#[derive(Debug, Clone)]
pub struct OpenOptions {
    mode: OpenMode,
}

impl Default for OpenOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenOptions {
    /// Create a new `OpenOptions`.
    pub fn new() -> Self {
        Self {
            mode: OpenMode::Open,
        }
    }

    /// The mode to use to open the repository.
    ///
    /// If this is not specified, the default mode is `OpenMode::Open`.
    pub fn mode(&mut self, mode: OpenMode) -> &mut Self {
        self.mode = mode;
        self
    }

    /// Open or create the repository in the data store opened from `config`.
    ///
    /// The data store stays locked until the returned repository is dropped.
    ///
    /// # Errors
    /// - `Error::NotFound`: The mode is `OpenMode::Open` and there is no repository.
    /// - `Error::AlreadyExists`: The mode is `OpenMode::CreateNew` and a repository already exists.
    /// - `Error::Locked`: The data store is already open in this process.
    /// - `Error::UnsupportedRepo`: The repository is an unsupported format.
    /// - `Error::UnsupportedStore`: The data store is an unsupported format.
    /// - `Error::Corrupt`: The repository is corrupt. This is most likely unrecoverable.
    /// - `Error::Store`: An error occurred with the data store.
    /// - `Error::Io`: An I/O error occurred.
    pub fn open<K, V, C>(&self, config: &C) -> crate::Result<ValueRepo<K, V>>
    where
        K: Key,
        V: Value,
        C: OpenStore,
    {
        let mut store = config.open()?;
        let lock = lock_store(config.lock_id()?)?;

        let version = store
            .read_block(BlockKey::Version)
            .map_err(crate::Error::Store)?;

        match (self.mode, version) {
            (OpenMode::Open, None) => Err(crate::Error::NotFound),
            (OpenMode::CreateNew, Some(_)) => Err(crate::Error::AlreadyExists),
            (_, Some(version)) => ValueRepo::open_repo(Box::new(store), lock, &version),
            (_, None) => ValueRepo::create_repo(Box::new(store), lock),
        }
    }
}
