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

use std::hash::Hash;
use std::sync::{Arc, Mutex, Weak};

use once_cell::sync::Lazy;
use weak_table::WeakHashSet;

/// The locks currently held on data stores in this process, identified by their lock IDs.
static STORE_LOCKS: Lazy<Mutex<LockTable<String>>> = Lazy::new(|| Mutex::new(LockTable::new()));

/// A lock acquired on a resource.
///
/// The lock is released when this value is dropped.
#[derive(Debug)]
pub struct Lock<T>(Arc<T>);

impl<T> Lock<T> {
    /// The ID of the locked resource.
    pub fn id(&self) -> &T {
        &self.0
    }
}

/// A value which keeps track of locks on resources identified by generic IDs.
///
/// This locks resources between threads in a process using weak references.
#[derive(Debug)]
pub struct LockTable<T: Eq + Hash>(WeakHashSet<Weak<T>>);

impl<T: Eq + Hash> LockTable<T> {
    /// Create a new empty `LockTable`.
    pub fn new() -> Self {
        Self(WeakHashSet::new())
    }

    /// Attempt to acquire a lock on the given `id`.
    ///
    /// This returns a new lock or `None` if the resource is already locked.
    pub fn acquire_lock(&mut self, id: T) -> Option<Lock<T>> {
        if self.0.contains(&id) {
            None
        } else {
            let id_arc = Arc::from(id);
            self.0.insert(Arc::clone(&id_arc));
            Some(Lock(id_arc))
        }
    }
}

/// Lock the data store with the given `id` for as long as the returned lock is held.
///
/// # Errors
/// - `Error::Locked`: The data store is already open in this process.
pub fn lock_store(id: String) -> crate::Result<Lock<String>> {
    let lock = STORE_LOCKS
        .lock()
        .unwrap()
        .acquire_lock(id)
        .ok_or(crate::Error::Locked)?;
    tracing::debug!(lock_id = %lock.id(), "acquired store lock");
    Ok(lock)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_is_released_on_drop() {
        let mut table = LockTable::new();

        let lock = table.acquire_lock(1);
        assert!(lock.is_some());
        assert!(table.acquire_lock(1).is_none());
        assert!(table.acquire_lock(2).is_some());

        drop(lock);
        assert!(table.acquire_lock(1).is_some());
    }

    #[test]
    fn global_store_lock_rejects_second_holder() {
        let id = format!("test:{}", uuid::Uuid::new_v4());

        let lock = lock_store(id.clone()).unwrap();
        assert!(matches!(lock_store(id.clone()), Err(crate::Error::Locked)));

        drop(lock);
        assert!(lock_store(id).is_ok());
    }
}
