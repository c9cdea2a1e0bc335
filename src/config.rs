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

//! Settings loaded from environment variables.

use std::path::PathBuf;

#[cfg(feature = "store-directory")]
use crate::store::DirectoryConfig;

/// The environment variable which sets the directory that named stores are created in.
const DATA_DIR_VAR: &str = "MAILROOM_DATA_DIR";

/// The environment variable which sets the tracing filter directive.
const LOG_LEVEL_VAR: &str = "RUST_LOG";

/// Settings with sensible defaults.
///
/// Reads from environment variables:
/// - `MAILROOM_DATA_DIR`: the directory which contains named stores (default: `"."`)
/// - `RUST_LOG`: the tracing filter directive (default: `"info"`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// The directory which contains named stores.
    pub data_dir: PathBuf,

    /// The tracing filter directive.
    pub log_level: String,
}

impl Settings {
    /// Load settings from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            data_dir: std::env::var_os(DATA_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            log_level: std::env::var(LOG_LEVEL_VAR).unwrap_or(defaults.log_level),
        }
    }

    /// Return the path of the store with the given `name`.
    pub fn store_path(&self, name: &str) -> PathBuf {
        self.data_dir.join(name)
    }

    /// Return the config for opening the store with the given `name`.
    #[cfg(feature = "store-directory")]
    pub fn store_config(&self, name: &str) -> DirectoryConfig {
        DirectoryConfig {
            path: self.store_path(name),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            log_level: "info".to_string(),
        }
    }
}
