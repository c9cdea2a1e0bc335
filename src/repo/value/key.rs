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

use std::hash::Hash;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A type which can be used as a key in a [`ValueRepo`].
///
/// [`ValueRepo`]: crate::repo::ValueRepo
pub trait Key: Eq + Hash + Clone + Serialize + DeserializeOwned {}

impl<T> Key for T where T: Eq + Hash + Clone + Serialize + DeserializeOwned {}

/// A type which can be stored as a value in a [`ValueRepo`].
///
/// [`ValueRepo`]: crate::repo::ValueRepo
pub trait Value: Serialize + DeserializeOwned {}

impl<T> Value for T where T: Serialize + DeserializeOwned {}
