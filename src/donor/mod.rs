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

//! Donors and the persistent collection which stores them.
//!
//! A [`Donor`] records a contributor's name and donation history. A [`DonorCollection`] maps donor
//! names to donors and persists them in a [`ValueRepo`].
//!
//! [`Donor`]: crate::Donor
//! [`DonorCollection`]: crate::DonorCollection
//! [`ValueRepo`]: crate::repo::ValueRepo

pub use self::collection::{DonorCollection, DonorEntry};
pub use self::donor::{Attribute, Donor};
pub use self::report::{format_report, letter_file_name, ReportRow};

mod collection;
mod donor;
mod report;
