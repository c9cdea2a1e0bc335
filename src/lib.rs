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

//! `mailroom` is a library for tracking donors and their donations.
//!
//! Donors are recorded in a [`DonorCollection`], which persists them to a small embedded
//! key-value store on the local file system. The crate is split into layers:
//! - [`Donor`] is a record of one contributor's name and donation history.
//! - [`DonorCollection`] is a persistent mapping from donor names to donors with an explicit
//! open/close lifecycle.
//! - [`ValueRepo`] is the persistent, map-like collection the donor collection is built on.
//! - A [`DataStore`] stores the repository's blocks of data. `DirectoryStore` stores data in a
//! directory in the local file system and `MemoryStore` stores data in memory.
//!
//! # Examples
//! ```
//! use mailroom::DonorCollection;
//! use mailroom::store::MemoryConfig;
//!
//! fn main() -> mailroom::Result<()> {
//!     let config = MemoryConfig::new();
//!     let mut collection = DonorCollection::with_store(&config)?;
//!
//!     assert!(collection.add_donor("Abraham Lincoln")?);
//!     collection.donor("Abraham Lincoln")?.process(87.00)?;
//!
//!     collection.db_close()?;
//!
//!     // The donation survives closing and reopening the store.
//!     let mut collection = DonorCollection::with_store(&config)?;
//!     assert_eq!(collection.donor("Abraham Lincoln")?.count(), 1);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//! Some functionality is gated behind cargo features:
//!
//! Type | Cargo Feature
//! --- | ---
//! `DirectoryStore` | `store-directory`
//! `mailroom` binary | `cli`
//!
//! Both are enabled by default.
//!
//! [`Donor`]: crate::Donor
//! [`DonorCollection`]: crate::DonorCollection
//! [`ValueRepo`]: crate::repo::ValueRepo
//! [`DataStore`]: crate::store::DataStore

pub use uuid;

pub use config::Settings;
pub use donor::{
    format_report, letter_file_name, Attribute, Donor, DonorCollection, DonorEntry, ReportRow,
};
pub use error::{Error, Result};

#[macro_use]
mod id;

mod config;
mod donor;
mod error;
pub mod repo;
pub mod store;
