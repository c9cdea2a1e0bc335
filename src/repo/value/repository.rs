/*
 * Copyright 2019 Wren Powell
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

use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::marker::PhantomData;

use rmp_serde::{from_read, to_vec};
use uuid::Uuid;

use crate::repo::lock::Lock;
use crate::store::{BlockId, BlockKey, DataStore};

use super::iter::Keys;
use super::key::{Key, Value};

/// The current repository format version ID.
///
/// This must be changed any time a backwards-incompatible change is made to the repository
/// format.
const VERSION_ID: Uuid = Uuid::from_u128(0x5b93b6a4_362f_11ea_b8a5_309c230b49ee);

/// A persistent, map-like collection.
///
/// A `ValueRepo` maps keys of type `K` to values of type `V` and stores them persistently in a
/// [`DataStore`]. Values are serialized and deserialized automatically using a space-efficient
/// binary format.
///
/// Each value is written to its own block as soon as it is inserted, but the table which maps keys
/// to blocks is only written when [`commit`] is called. Changes made to the repository are not
/// visible to anyone who opens the data store until they are committed, and [`rollback`] discards
/// them. Blocks which are no longer referenced are removed from the data store on commit.
///
/// The data store is locked for as long as the repository is open. You can open or create a
/// repository using [`OpenOptions`].
///
/// [`DataStore`]: crate::store::DataStore
/// [`commit`]: crate::repo::ValueRepo::commit
/// [`rollback`]: crate::repo::ValueRepo::rollback
/// [`OpenOptions`]: crate::repo::OpenOptions
#[derive(Debug)]
pub struct ValueRepo<K: Key, V: Value> {
    store: Box<dyn DataStore>,
    key_table: HashMap<K, BlockId>,
    lock: Lock<String>,
    marker: PhantomData<fn() -> V>,
}

/// Read and deserialize the table of keys from the `store`.
fn read_key_table<K: Key>(store: &mut dyn DataStore) -> crate::Result<HashMap<K, BlockId>> {
    let serialized_table = store
        .read_block(BlockKey::Super)
        .map_err(crate::Error::Store)?
        .ok_or(crate::Error::Corrupt)?;
    from_read(serialized_table.as_slice()).map_err(|_| crate::Error::Corrupt)
}

impl<K: Key, V: Value> ValueRepo<K, V> {
    /// Create a new repository in the given `store`.
    pub(in crate::repo) fn create_repo(
        mut store: Box<dyn DataStore>,
        lock: Lock<String>,
    ) -> crate::Result<Self> {
        store
            .write_block(BlockKey::Version, VERSION_ID.as_bytes())
            .map_err(crate::Error::Store)?;

        let mut repo = Self {
            store,
            key_table: HashMap::new(),
            lock,
            marker: PhantomData,
        };
        repo.commit()?;

        tracing::debug!(lock_id = %repo.lock.id(), "created repository");

        Ok(repo)
    }

    /// Open the existing repository in the given `store`.
    ///
    /// `version` is the contents of the store's version block.
    pub(in crate::repo) fn open_repo(
        mut store: Box<dyn DataStore>,
        lock: Lock<String>,
        version: &[u8],
    ) -> crate::Result<Self> {
        let version = Uuid::from_slice(version).map_err(|_| crate::Error::Corrupt)?;
        if version != VERSION_ID {
            return Err(crate::Error::UnsupportedRepo);
        }

        let key_table = read_key_table(store.as_mut())?;

        tracing::debug!(lock_id = %lock.id(), keys = key_table.len(), "opened repository");

        Ok(Self {
            store,
            key_table,
            lock,
            marker: PhantomData,
        })
    }

    /// Return whether the given `key` exists in this repository.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.key_table.contains_key(key)
    }

    /// Insert a new key-value pair.
    ///
    /// If `key` is already in the repository, its value is replaced.
    ///
    /// # Errors
    /// - `Error::Serialize`: The `value` could not be serialized.
    /// - `Error::Store`: An error occurred with the data store.
    pub fn insert(&mut self, key: K, value: &V) -> crate::Result<()> {
        let serialized_value = to_vec(value).map_err(|_| crate::Error::Serialize)?;

        // Values are never overwritten in place so that the committed key table always points to
        // intact blocks.
        let block_id = BlockId::random();
        self.store
            .write_block(BlockKey::Data(block_id), serialized_value.as_slice())
            .map_err(crate::Error::Store)?;
        self.key_table.insert(key, block_id);

        Ok(())
    }

    /// Remove the value associated with `key` from the repository.
    ///
    /// This returns `true` if the value was removed or `false` if it didn't exist.
    ///
    /// The space used by the given value isn't freed until `commit` is called.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.key_table.remove(key).is_some()
    }

    /// Return the value associated with `key`.
    ///
    /// # Errors
    /// - `Error::NotFound`: There is no value associated with `key`.
    /// - `Error::Deserialize`: The value could not be deserialized.
    /// - `Error::Corrupt`: The block containing the value is missing.
    /// - `Error::Store`: An error occurred with the data store.
    pub fn get<Q>(&mut self, key: &Q) -> crate::Result<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let block_id = *self.key_table.get(key).ok_or(crate::Error::NotFound)?;
        let serialized_value = self
            .store
            .read_block(BlockKey::Data(block_id))
            .map_err(crate::Error::Store)?
            .ok_or(crate::Error::Corrupt)?;

        from_read(serialized_value.as_slice()).map_err(|_| crate::Error::Deserialize)
    }

    /// Return an iterator over all the keys in this repository.
    pub fn keys(&self) -> Keys<'_, K> {
        Keys(self.key_table.keys())
    }

    /// Return the number of values in this repository.
    pub fn len(&self) -> usize {
        self.key_table.len()
    }

    /// Return whether this repository contains no values.
    pub fn is_empty(&self) -> bool {
        self.key_table.is_empty()
    }

    /// Commit changes which have been made to the repository.
    ///
    /// This writes the table of keys to the data store and then removes any blocks which are no
    /// longer referenced by it. If this returns `Err`, the previously committed state is still
    /// intact.
    ///
    /// # Errors
    /// - `Error::Serialize`: The table of keys could not be serialized.
    /// - `Error::Store`: An error occurred with the data store.
    pub fn commit(&mut self) -> crate::Result<()> {
        let serialized_table = to_vec(&self.key_table).map_err(|_| crate::Error::Serialize)?;
        self.store
            .write_block(BlockKey::Super, serialized_table.as_slice())
            .map_err(crate::Error::Store)?;

        // Remove blocks which were replaced or removed since the last commit.
        let referenced = self.key_table.values().copied().collect::<HashSet<_>>();
        let mut removed = 0usize;
        for block_id in self.store.list_blocks().map_err(crate::Error::Store)? {
            if !referenced.contains(&block_id) {
                self.store
                    .remove_block(BlockKey::Data(block_id))
                    .map_err(crate::Error::Store)?;
                removed += 1;
            }
        }

        tracing::debug!(
            lock_id = %self.lock.id(),
            keys = self.key_table.len(),
            removed,
            "committed repository"
        );

        Ok(())
    }

    /// Roll back all changes made since the last commit.
    ///
    /// # Errors
    /// - `Error::Corrupt`: The repository is corrupt. This is most likely unrecoverable.
    /// - `Error::Store`: An error occurred with the data store.
    pub fn rollback(&mut self) -> crate::Result<()> {
        self.key_table = read_key_table(self.store.as_mut())?;
        Ok(())
    }

    /// Consume this repository and return the wrapped `DataStore`.
    ///
    /// Uncommitted changes are discarded and the data store is unlocked.
    pub fn into_store(self) -> Box<dyn DataStore> {
        self.store
    }
}
