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

//! High-level abstractions for data storage.
//!
//! This module provides [`ValueRepo`], a repository which is backed by a [`DataStore`] and maps
//! keys to serialized values. You can open or create a repository using [`OpenOptions`].
//!
//! # Locking
//! A repository cannot be open more than once simultaneously. Once a repository is opened, it is
//! locked from further open attempts within the same process until the repository is dropped.
//! However, **repositories can not protect against concurrent access from multiple processes or
//! machines**. Opening a repository from multiple processes or machines simultaneously may cause
//! data loss.
//!
//! # Atomicity
//! Changes made to a repository are not persisted to the data store until those changes are
//! committed. Committing a repository is atomic as long as the data store's `write_block` is;
//! interrupting a commit will never leave the repository in an inconsistent state. If the
//! repository is dropped, any uncommitted changes are rolled back automatically.
//!
//! [`ValueRepo`]: crate::repo::ValueRepo
//! [`DataStore`]: crate::store::DataStore
//! [`OpenOptions`]: crate::repo::OpenOptions

pub use self::open_options::{OpenMode, OpenOptions};
pub use self::value::{Key, Keys, Value, ValueRepo};

mod lock;
mod open_options;
mod value;
