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

use std::ops::Deref;

use crate::repo::{OpenMode, OpenOptions, ValueRepo};
use crate::store::OpenStore;
#[cfg(feature = "store-directory")]
use crate::Settings;

use super::donor::Donor;

type DonorRepo = ValueRepo<String, Donor>;

/// Commit `repo`, rolling back to the last commit if that fails.
///
/// Either the changes are committed or they are gone when this returns.
fn commit_or_rollback(repo: &mut DonorRepo) -> crate::Result<()> {
    if let Err(error) = repo.commit() {
        if let Err(rollback_error) = repo.rollback() {
            tracing::warn!(error = %rollback_error, "failed to roll back donor collection");
        }
        return Err(error);
    }
    Ok(())
}

/// A persistent mapping from donor names to [`Donor`] values.
///
/// A `DonorCollection` owns an open repository for as long as it is open. Every operation which
/// changes the collection is committed before it returns, so changes survive closing and reopening
/// the store.
///
/// The collection is closed explicitly with [`db_close`], after which every operation fails with
/// `Error::Closed`. If a collection is dropped while it is still open, it is closed automatically.
///
/// [`Donor`]: crate::Donor
/// [`db_close`]: crate::DonorCollection::db_close
#[derive(Debug)]
pub struct DonorCollection {
    repo: Option<DonorRepo>,
}

impl DonorCollection {
    /// Open the store with the given `name`, creating it if it doesn't exist.
    ///
    /// The store is located in the data directory configured in the environment. See
    /// [`Settings::from_env`] for details.
    ///
    /// # Errors
    /// - `Error::Locked`: The store is already open in this process.
    /// - `Error::UnsupportedRepo`: The store contains an unsupported repository format.
    /// - `Error::Corrupt`: The store is corrupt.
    /// - `Error::Store`: An error occurred with the data store.
    /// - `Error::Io`: An I/O error occurred.
    ///
    /// [`Settings::from_env`]: crate::Settings::from_env
    #[cfg(feature = "store-directory")]
    pub fn open(name: &str) -> crate::Result<Self> {
        Self::open_in(&Settings::from_env(), name)
    }

    /// Open the store with the given `name` in the data directory from `settings`.
    ///
    /// See [`open`] for details.
    ///
    /// [`open`]: crate::DonorCollection::open
    #[cfg(feature = "store-directory")]
    pub fn open_in(settings: &Settings, name: &str) -> crate::Result<Self> {
        Self::with_store(&settings.store_config(name))
    }

    /// Open the store from the given `config`, creating it if it doesn't exist.
    ///
    /// See [`open`] for details.
    ///
    /// [`open`]: crate::DonorCollection::open
    pub fn with_store(config: &impl OpenStore) -> crate::Result<Self> {
        let repo: DonorRepo = OpenOptions::new().mode(OpenMode::Create).open(config)?;
        tracing::info!(donors = repo.len(), "opened donor collection");
        Ok(Self { repo: Some(repo) })
    }

    fn repo(&self) -> crate::Result<&DonorRepo> {
        self.repo.as_ref().ok_or(crate::Error::Closed)
    }

    fn repo_mut(&mut self) -> crate::Result<&mut DonorRepo> {
        self.repo.as_mut().ok_or(crate::Error::Closed)
    }

    /// Return whether this collection has been closed.
    pub fn is_closed(&self) -> bool {
        self.repo.is_none()
    }

    /// Add a new donor with the given `name` and no donations.
    ///
    /// This returns `true` if the donor was added. If there is already a donor with the given
    /// `name`, it is left untouched and this returns `false`.
    ///
    /// # Errors
    /// - `Error::Closed`: The collection has been closed.
    /// - `Error::Serialize`: The donor could not be serialized.
    /// - `Error::Store`: An error occurred with the data store.
    #[tracing::instrument(skip(self))]
    pub fn add_donor(&mut self, name: &str) -> crate::Result<bool> {
        let repo = self.repo_mut()?;

        if repo.contains(name) {
            tracing::debug!("donor already exists");
            return Ok(false);
        }

        repo.insert(name.to_string(), &Donor::new(name, []))?;
        commit_or_rollback(repo)?;

        Ok(true)
    }

    /// Return the donor with the given `name`.
    ///
    /// The returned [`DonorEntry`] can be used to read the donor and to process new donations,
    /// which are persisted immediately.
    ///
    /// # Errors
    /// - `Error::Closed`: The collection has been closed.
    /// - `Error::NotFound`: There is no donor with the given `name`.
    /// - `Error::Deserialize`: The donor could not be deserialized.
    /// - `Error::Store`: An error occurred with the data store.
    ///
    /// [`DonorEntry`]: crate::DonorEntry
    pub fn donor(&mut self, name: &str) -> crate::Result<DonorEntry<'_>> {
        let repo = self.repo_mut()?;
        let donor = repo.get(name)?;

        Ok(DonorEntry {
            repo,
            key: name.to_string(),
            donor,
        })
    }

    /// Remove the donor with the given `name`.
    ///
    /// # Errors
    /// - `Error::Closed`: The collection has been closed.
    /// - `Error::NotFound`: There is no donor with the given `name`.
    /// - `Error::Store`: An error occurred with the data store.
    #[tracing::instrument(skip(self))]
    pub fn del_donor(&mut self, name: &str) -> crate::Result<()> {
        let repo = self.repo_mut()?;

        if !repo.remove(name) {
            return Err(crate::Error::NotFound);
        }
        commit_or_rollback(repo)
    }

    /// Record a donation of `amount` from the donor with the given `name`.
    ///
    /// If there is no donor with the given `name`, one is created first. This always returns
    /// `true` on success.
    ///
    /// # Errors
    /// - `Error::Closed`: The collection has been closed.
    /// - `Error::Deserialize`: The donor could not be deserialized.
    /// - `Error::Serialize`: The donor could not be serialized.
    /// - `Error::Store`: An error occurred with the data store.
    #[tracing::instrument(skip(self))]
    pub fn process_donation(&mut self, name: &str, amount: f64) -> crate::Result<bool> {
        self.add_donor(name)?;
        self.donor(name)?.process(amount)
    }

    /// Return whether there is a donor with the given `name`.
    ///
    /// # Errors
    /// - `Error::Closed`: The collection has been closed.
    pub fn contains(&self, name: &str) -> crate::Result<bool> {
        Ok(self.repo()?.contains(name))
    }

    /// Return the names of all donors, sorted.
    ///
    /// # Errors
    /// - `Error::Closed`: The collection has been closed.
    pub fn names(&self) -> crate::Result<Vec<String>> {
        let mut names = self.repo()?.keys().cloned().collect::<Vec<_>>();
        names.sort();
        Ok(names)
    }

    /// Return the number of donors.
    ///
    /// # Errors
    /// - `Error::Closed`: The collection has been closed.
    pub fn len(&self) -> crate::Result<usize> {
        Ok(self.repo()?.len())
    }

    /// Return whether there are no donors.
    ///
    /// # Errors
    /// - `Error::Closed`: The collection has been closed.
    pub fn is_empty(&self) -> crate::Result<bool> {
        Ok(self.repo()?.is_empty())
    }

    /// Return every donor in the collection, sorted by name.
    ///
    /// # Errors
    /// - `Error::Closed`: The collection has been closed.
    /// - `Error::Deserialize`: A donor could not be deserialized.
    /// - `Error::Store`: An error occurred with the data store.
    pub fn donors(&mut self) -> crate::Result<Vec<Donor>> {
        let names = self.names()?;
        let repo = self.repo_mut()?;
        names.iter().map(|name| repo.get(name)).collect()
    }

    /// Commit and close the store.
    ///
    /// Once the collection is closed, every operation fails with `Error::Closed`. The store is
    /// unlocked even if committing fails.
    ///
    /// # Errors
    /// - `Error::Closed`: The collection has already been closed.
    /// - `Error::Serialize`: The table of donors could not be serialized.
    /// - `Error::Store`: An error occurred with the data store.
    pub fn db_close(&mut self) -> crate::Result<()> {
        let mut repo = self.repo.take().ok_or(crate::Error::Closed)?;
        repo.commit()?;
        tracing::info!("closed donor collection");
        Ok(())
    }
}

impl Drop for DonorCollection {
    fn drop(&mut self) {
        if let Some(mut repo) = self.repo.take() {
            if let Err(error) = repo.commit() {
                tracing::warn!(%error, "failed to commit donor collection while closing it");
            }
        }
    }
}

/// A donor fetched from a [`DonorCollection`].
///
/// This dereferences to the [`Donor`], and donations processed through it are written back to the
/// collection immediately.
///
/// This value is created by [`DonorCollection::donor`].
///
/// [`DonorCollection`]: crate::DonorCollection
/// [`Donor`]: crate::Donor
/// [`DonorCollection::donor`]: crate::DonorCollection::donor
#[derive(Debug)]
pub struct DonorEntry<'a> {
    repo: &'a mut DonorRepo,
    key: String,
    donor: Donor,
}

impl<'a> DonorEntry<'a> {
    /// Record a donation of `amount` and commit it to the collection.
    ///
    /// This always returns `true` on success. If this returns `Err`, neither this entry nor the
    /// collection records the donation.
    ///
    /// # Errors
    /// - `Error::Serialize`: The donor could not be serialized.
    /// - `Error::Store`: An error occurred with the data store.
    pub fn process(&mut self, amount: f64) -> crate::Result<bool> {
        let mut donor = self.donor.clone();
        let processed = donor.process(amount);
        self.repo.insert(self.key.clone(), &donor)?;
        commit_or_rollback(self.repo)?;
        self.donor = donor;

        tracing::debug!(name = %self.key, amount, count = self.donor.count(), "processed donation");

        Ok(processed)
    }

    /// Consume this entry and return a copy of the donor.
    pub fn into_inner(self) -> Donor {
        self.donor
    }
}

impl<'a> Deref for DonorEntry<'a> {
    type Target = Donor;

    fn deref(&self) -> &Self::Target {
        &self.donor
    }
}
