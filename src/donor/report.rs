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

use std::cmp::Ordering;
use std::fmt::Write as _;
use std::fs::{create_dir_all, write};
use std::path::{Path, PathBuf};

use super::collection::DonorCollection;
use super::donor::Donor;

/// The width of the donor name column in a formatted report.
const NAME_WIDTH: usize = 26;

/// A summary of one donor's giving.
///
/// This value is created by [`DonorCollection::report`].
///
/// [`DonorCollection::report`]: crate::DonorCollection::report
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    /// The donor's name.
    pub name: String,

    /// The sum of the donor's donations.
    pub total: f64,

    /// The number of donations.
    pub count: usize,

    /// The average donation.
    pub average: f64,
}

impl From<&Donor> for ReportRow {
    fn from(donor: &Donor) -> Self {
        Self {
            name: donor.name().to_string(),
            total: donor.donations(),
            count: donor.count(),
            average: donor.average(),
        }
    }
}

impl ReportRow {
    /// Order rows by total descending, then by name.
    ///
    /// Totals are compared with the IEEE 754 total order, so a NaN total still sorts
    /// consistently.
    fn report_order(&self, other: &Self) -> Ordering {
        other
            .total
            .total_cmp(&self.total)
            .then_with(|| self.name.cmp(&other.name))
    }
}

/// Format `rows` as a fixed-width table with a header.
pub fn format_report(rows: &[ReportRow]) -> String {
    let mut report = format!(
        "{:<width$}| {:>11} | {:>9} | {:>12}\n",
        "Donor Name",
        "Total Given",
        "Num Gifts",
        "Average Gift",
        width = NAME_WIDTH,
    );
    report.push_str(&"-".repeat(NAME_WIDTH + 41));
    report.push('\n');

    for row in rows {
        // Writing to a `String` can't fail.
        let _ = writeln!(
            report,
            "{:<width$} ${:>11.2}   {:>9}  ${:>12.2}",
            row.name,
            row.total,
            row.count,
            row.average,
            width = NAME_WIDTH,
        );
    }

    report
}

/// Return the name of the file a letter to the donor with the given `name` is written to.
///
/// Every character other than an ASCII letter, digit, `-` or `_` is replaced with `_`, so the
/// file name never contains a path separator or a `..` component.
pub fn letter_file_name(name: &str) -> String {
    let stem = name
        .trim()
        .chars()
        .map(|c| match c {
            'A'..='Z' | 'a'..='z' | '0'..='9' | '-' | '_' => c,
            _ => '_',
        })
        .collect::<String>();
    format!("{}.txt", stem)
}

impl DonorCollection {
    /// Return a summary row for every donor, largest total first.
    ///
    /// Donors with the same total are ordered by name.
    ///
    /// # Errors
    /// - `Error::Closed`: The collection has been closed.
    /// - `Error::Deserialize`: A donor could not be deserialized.
    /// - `Error::Store`: An error occurred with the data store.
    pub fn report(&mut self) -> crate::Result<Vec<ReportRow>> {
        let mut rows = self
            .donors()?
            .iter()
            .map(ReportRow::from)
            .collect::<Vec<_>>();
        rows.sort_by(ReportRow::report_order);
        Ok(rows)
    }

    /// Write a thank-you letter for every donor to a file in `directory`.
    ///
    /// The directory is created if it doesn't exist. This returns the paths of the files which
    /// were written.
    ///
    /// # Errors
    /// - `Error::Closed`: The collection has been closed.
    /// - `Error::Deserialize`: A donor could not be deserialized.
    /// - `Error::Store`: An error occurred with the data store.
    /// - `Error::Io`: An I/O error occurred.
    #[tracing::instrument(skip(self, directory), fields(directory = %directory.display()))]
    pub fn send_letters(&mut self, directory: &Path) -> crate::Result<Vec<PathBuf>> {
        create_dir_all(directory)?;

        let mut paths = Vec::new();
        for donor in self.donors()? {
            let path = directory.join(letter_file_name(donor.name()));
            write(&path, donor.thank_you_letter())?;
            paths.push(path);
        }

        tracing::info!(letters = paths.len(), "wrote thank-you letters");

        Ok(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, total: f64, count: usize) -> ReportRow {
        ReportRow {
            name: name.to_string(),
            total,
            count,
            average: total / count as f64,
        }
    }

    #[test]
    fn rows_are_ordered_by_total_then_name() {
        let mut rows = vec![row("Bea", 10.0, 1), row("Cal", 50.0, 2), row("Abe", 10.0, 2)];
        rows.sort_by(ReportRow::report_order);

        let names = rows.iter().map(|row| row.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["Cal", "Abe", "Bea"]);
    }

    #[test]
    fn report_has_header_and_one_line_per_row() {
        let report = format_report(&[row("Abraham Lincoln", 105.65, 2)]);
        let lines = report.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Donor Name"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[2].starts_with("Abraham Lincoln"));
        assert!(lines[2].contains("105.65"));
    }

    #[test]
    fn nan_totals_sort_without_panicking() {
        let mut rows = (0..40)
            .map(|i| {
                let total = if i % 3 == 0 { f64::NAN } else { i as f64 };
                row(&format!("Donor {}", i), total, 1)
            })
            .collect::<Vec<_>>();
        rows.sort_by(ReportRow::report_order);

        assert_eq!(rows.len(), 40);
        let finite = rows
            .iter()
            .map(|row| row.total)
            .filter(|total| !total.is_nan())
            .collect::<Vec<_>>();
        assert!(finite.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn letter_file_name_replaces_spaces() {
        assert_eq!(letter_file_name("Abraham Lincoln"), "Abraham_Lincoln.txt");
    }

    #[test]
    fn letter_file_name_strips_path_components() {
        assert_eq!(letter_file_name("../escaped"), "___escaped.txt");
        assert_eq!(letter_file_name("A/B"), "A_B.txt");
        assert_eq!(letter_file_name("C:\\Users"), "C__Users.txt");
    }
}
