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

#![cfg(feature = "store-directory")]

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use uuid::Uuid;

use super::data_store::{BlockId, BlockKey, DataStore};
use super::open_store::OpenStore;

/// The format version of a directory store.
///
/// This is written to the `version` file in the store's root.
const FORMAT_VERSION: &str = "3f1c5e0a-6b2d-11ee-9c43-2b7f6a0d91e4";

/// Map an I/O error which occurs while opening the store to `Error::Store`.
fn store_error(error: io::Error) -> crate::Error {
    crate::Error::Store(anyhow::Error::from(error))
}

/// The paths which make up a directory store, relative to its root.
#[derive(Debug, Clone)]
struct Layout {
    root: PathBuf,
}

impl Layout {
    fn version_file(&self) -> PathBuf {
        self.root.join("version")
    }

    fn blocks(&self) -> PathBuf {
        self.root.join("store")
    }

    fn data(&self) -> PathBuf {
        self.blocks().join("data")
    }

    fn stage(&self) -> PathBuf {
        self.root.join("stage")
    }

    /// Data blocks are sharded by the first two hex digits of their ID.
    fn block(&self, key: BlockKey) -> PathBuf {
        match key {
            BlockKey::Data(id) => {
                let name = id.to_string();
                self.data().join(&name[..2]).join(name)
            }
            BlockKey::Super => self.blocks().join("super"),
            BlockKey::Version => self.blocks().join("version"),
        }
    }
}

/// Check the format version of the store at `path`, writing it if the store is new.
fn check_version(path: &Path) -> crate::Result<()> {
    match fs::read_to_string(path) {
        Ok(version) if version == FORMAT_VERSION => Ok(()),
        Ok(_) => Err(crate::Error::UnsupportedStore),
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            let mut file = File::create(path).map_err(store_error)?;
            file.write_all(FORMAT_VERSION.as_bytes())?;
            file.sync_all()?;
            Ok(())
        }
        Err(error) => Err(store_error(error)),
    }
}

/// The configuration for opening a [`DirectoryStore`].
///
/// [`DirectoryStore`]: crate::store::DirectoryStore
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(docsrs, doc(cfg(feature = "store-directory")))]
pub struct DirectoryConfig {
    /// The path of the directory store.
    pub path: PathBuf,
}

impl OpenStore for DirectoryConfig {
    type Store = DirectoryStore;

    fn open(&self) -> crate::Result<Self::Store> {
        let layout = Layout {
            root: self.path.clone(),
        };

        for directory in [layout.data(), layout.stage()] {
            fs::create_dir_all(directory).map_err(store_error)?;
        }
        check_version(&layout.version_file())?;

        tracing::debug!(path = %self.path.display(), "opened directory store");

        Ok(DirectoryStore { layout })
    }

    fn lock_id(&self) -> crate::Result<String> {
        Ok(format!("directory:{}", fs::canonicalize(&self.path)?.display()))
    }
}

/// A `DataStore` which stores data in a directory in the local file system.
///
/// Each block is a file. Blocks are written to a staging directory first and then renamed into
/// place, so a block is either fully written or absent.
///
/// You can use [`DirectoryConfig`] to open a data store of this type.
///
/// [`DirectoryConfig`]: crate::store::DirectoryConfig
#[derive(Debug)]
#[cfg_attr(docsrs, doc(cfg(feature = "store-directory")))]
pub struct DirectoryStore {
    layout: Layout,
}

impl DataStore for DirectoryStore {
    fn write_block(&mut self, key: BlockKey, data: &[u8]) -> anyhow::Result<()> {
        let destination = self.layout.block(key);
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent)?;
        }

        let staged = self.layout.stage().join(Uuid::new_v4().to_string());
        let mut file = File::create(&staged)?;
        file.write_all(data)?;
        file.sync_all()?;
        fs::rename(&staged, &destination)
            .with_context(|| format!("failed to move block into {}", destination.display()))?;

        // Clear out files left behind by writes which were interrupted.
        for entry in fs::read_dir(self.layout.stage())? {
            fs::remove_file(entry?.path())?;
        }

        Ok(())
    }

    fn read_block(&mut self, key: BlockKey) -> anyhow::Result<Option<Vec<u8>>> {
        match fs::read(self.layout.block(key)) {
            Ok(data) => Ok(Some(data)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn remove_block(&mut self, key: BlockKey) -> anyhow::Result<()> {
        match fs::remove_file(self.layout.block(key)) {
            Err(error) if error.kind() != io::ErrorKind::NotFound => Err(error.into()),
            _ => Ok(()),
        }
    }

    fn list_blocks(&mut self) -> anyhow::Result<Vec<BlockId>> {
        let mut ids = Vec::new();

        for shard in fs::read_dir(self.layout.data())? {
            for block in fs::read_dir(shard?.path())? {
                let file_name = block?.file_name();
                let uuid = file_name
                    .to_str()
                    .and_then(|name| Uuid::parse_str(name).ok())
                    .ok_or_else(|| anyhow!("Invalid block file name {:?}.", file_name))?;
                ids.push(BlockId::from(uuid));
            }
        }

        Ok(ids)
    }
}
