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

//! Low-level backends for data storage.
//!
//! This module provides low-level data storage backends called data stores. A data store provides
//! only the most basic storage operations, and doesn't have to worry about features like key
//! lookup, serialization, or atomic commits. Those features are implemented at a higher level in
//! [`crate::repo`].
//!
//! All data stores implement the [`DataStore`] trait.
//!
//! For each data store, there is a corresponding type which provides the necessary configuration to
//! open that data store. These config types implement [`OpenStore`]. Typically, you'll pass these
//! config types to [`OpenOptions`] or [`DonorCollection::with_store`].
//!
//! [`DataStore`]: crate::store::DataStore
//! [`OpenStore`]: crate::store::OpenStore
//! [`OpenOptions`]: crate::repo::OpenOptions
//! [`DonorCollection::with_store`]: crate::DonorCollection::with_store

pub use self::data_store::{BlockId, BlockKey, DataStore};
#[cfg(feature = "store-directory")]
pub use self::directory_store::{DirectoryConfig, DirectoryStore};
pub use self::memory_store::{MemoryConfig, MemoryStore};
pub use self::open_store::OpenStore;

mod data_store;
mod directory_store;
mod memory_store;
mod open_store;
