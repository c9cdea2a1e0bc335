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

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A named attribute of a [`Donor`].
///
/// [`Donor`]: crate::Donor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// The donor's name.
    Name,

    /// The number of donations.
    Count,

    /// The sum of all donations.
    Donations,
}

impl Attribute {
    fn as_str(&self) -> &'static str {
        match self {
            Attribute::Name => "name",
            Attribute::Count => "count",
            Attribute::Donations => "donations",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Attribute {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Attribute::Name),
            "count" => Ok(Attribute::Count),
            "donations" => Ok(Attribute::Donations),
            other => Err(crate::Error::UnknownAttribute(other.to_string())),
        }
    }
}

/// A record of one contributor's name and donation history.
///
/// The name is fixed when the donor is created, and the only way to change a donor is to
/// [`process`] a new donation. The number of donations and their total are always computed from
/// the recorded history, so they can never disagree with it.
///
/// [`process`]: crate::Donor::process
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donor {
    name: String,
    donations: Vec<f64>,
}

impl Donor {
    /// Create a new donor with the given `name` and initial donation `amounts`.
    ///
    /// # Examples
    /// ```
    /// use mailroom::Donor;
    ///
    /// let honest_abe = Donor::new("Abraham Lincoln", [87.00, 18.65]);
    /// assert_eq!(honest_abe.count(), 2);
    ///
    /// let teddy = Donor::new("Theodore Roosevelt", []);
    /// assert_eq!(teddy.count(), 0);
    /// ```
    pub fn new(name: impl Into<String>, amounts: impl IntoIterator<Item = f64>) -> Self {
        Self {
            name: name.into(),
            donations: amounts.into_iter().collect(),
        }
    }

    /// Record a donation of `amount`.
    ///
    /// This always returns `true`.
    pub fn process(&mut self, amount: f64) -> bool {
        self.donations.push(amount);
        true
    }

    /// The donor's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The number of donations recorded.
    pub fn count(&self) -> usize {
        self.donations.len()
    }

    /// The sum of all donations recorded.
    pub fn donations(&self) -> f64 {
        self.donations.iter().sum()
    }

    /// The average donation, or `0.0` if there are no donations.
    pub fn average(&self) -> f64 {
        match self.count() {
            0 => 0.0,
            count => self.donations() / count as f64,
        }
    }

    /// The donations recorded, oldest first.
    pub fn history(&self) -> &[f64] {
        &self.donations
    }

    /// The most recent donation, if any.
    pub fn last_donation(&self) -> Option<f64> {
        self.donations.last().copied()
    }

    /// Assign `value` to the given `attribute`.
    ///
    /// Every attribute of a donor is either fixed at creation or derived from its donation history,
    /// so this always fails.
    ///
    /// # Errors
    /// - `Error::ReadOnly`: The `attribute` cannot be assigned.
    pub fn set_attribute(&mut self, attribute: Attribute, value: f64) -> crate::Result<()> {
        tracing::debug!(%attribute, value, name = %self.name, "rejected attribute assignment");
        Err(crate::Error::ReadOnly(attribute))
    }

    /// Render a thank-you letter for this donor.
    pub fn thank_you_letter(&self) -> String {
        match self.last_donation() {
            Some(last) => format!(
                "Dear {name},\n\n\
                 Thank you for your generous donation of ${last:.2}.\n\
                 With {count} gift(s) totaling ${total:.2}, your support makes our work possible.\n\n\
                 Sincerely,\n\
                 The Mailroom\n",
                name = self.name,
                last = last,
                count = self.count(),
                total = self.donations(),
            ),
            None => format!(
                "Dear {name},\n\n\
                 Thank you for your interest in our work. We hope to count you among our donors \
                 soon.\n\n\
                 Sincerely,\n\
                 The Mailroom\n",
                name = self.name,
            ),
        }
    }
}
