/*
 * Copyright 2019 Garrett Powell
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
use std::io;
use std::result;

use thiserror::Error as DeriveError;

use crate::donor::Attribute;

/// The error type for operations with a donor collection or repository.
#[derive(Debug, DeriveError)]
pub enum Error {
    /// A resource already exists.
    #[error("A resource already exists.")]
    AlreadyExists,

    /// A resource was not found.
    #[error("A resource was not found.")]
    NotFound,

    /// The attribute is derived from other data and cannot be assigned.
    #[error("The attribute `{0}` is read-only.")]
    ReadOnly(Attribute),

    /// There is no attribute with the given name.
    #[error("There is no attribute named `{0}`.")]
    UnknownAttribute(String),

    /// The collection has been closed.
    #[error("The collection has been closed.")]
    Closed,

    /// The repository is locked.
    #[error("The repository is locked.")]
    Locked,

    /// The repository is corrupt.
    #[error("The repository is corrupt.")]
    Corrupt,

    /// This repository format is not supported by this version of the library.
    #[error("This repository format is not supported by this version of the library.")]
    UnsupportedRepo,

    /// This data store format is not supported by this version of the library.
    #[error("This data store format is not supported by this version of the library.")]
    UnsupportedStore,

    /// A value could not be serialized.
    #[error("A value could not be serialized.")]
    Serialize,

    /// A value could not be deserialized.
    #[error("A value could not be deserialized.")]
    Deserialize,

    /// An error occurred with the data store.
    #[error("An error occurred with the data store: {0}")]
    Store(#[source] anyhow::Error),

    /// An I/O error occurred.
    #[error("{0}")]
    Io(#[from] io::Error),
}

/// The result type for operations with a donor collection or repository.
pub type Result<T> = result::Result<T, Error>;
