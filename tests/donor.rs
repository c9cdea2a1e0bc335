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

use mailroom::{Attribute, Donor};
use common::*;

mod common;

#[fixture]
fn honest_abe() -> Donor {
    Donor::new("Abraham Lincoln", [87.00, 18.65])
}

#[fixture]
fn teddy() -> Donor {
    Donor::new("Theodore Roosevelt", [])
}

#[rstest]
fn initial_donations_are_counted_and_summed(honest_abe: Donor) {
    assert_that!(honest_abe.name()).is_equal_to("Abraham Lincoln");
    assert_that!(honest_abe.count()).is_equal_to(2);
    assert_that!(honest_abe.donations()).is_equal_to(105.65);
}

#[rstest]
fn donor_without_donations_is_empty(teddy: Donor) {
    assert_that!(teddy.count()).is_equal_to(0);
    assert_that!(teddy.donations()).is_equal_to(0.0);
    assert_that!(teddy.average()).is_equal_to(0.0);
    assert_that!(teddy.last_donation()).is_none();
}

#[rstest]
fn assigning_derived_attributes_errs(teddy: Donor) {
    let mut teddy = teddy;

    assert!(matches!(
        teddy.set_attribute(Attribute::Count, 1.0),
        Err(mailroom::Error::ReadOnly(Attribute::Count))
    ));
    assert!(matches!(
        teddy.set_attribute(Attribute::Donations, 1000000.00),
        Err(mailroom::Error::ReadOnly(Attribute::Donations))
    ));

    assert_that!(teddy.count()).is_equal_to(0);
    assert_that!(teddy.donations()).is_equal_to(0.0);
}

#[rstest]
fn assigning_name_errs(honest_abe: Donor) {
    let mut honest_abe = honest_abe;

    assert!(matches!(
        honest_abe.set_attribute(Attribute::Name, 0.0),
        Err(mailroom::Error::ReadOnly(Attribute::Name))
    ));
    assert_that!(honest_abe.name()).is_equal_to("Abraham Lincoln");
}

#[test]
fn attributes_parse_from_names() -> anyhow::Result<()> {
    assert_eq!("count".parse::<Attribute>()?, Attribute::Count);
    assert_eq!("donations".parse::<Attribute>()?, Attribute::Donations);
    assert_eq!("name".parse::<Attribute>()?, Attribute::Name);
    assert_eq!(Attribute::Donations.to_string(), "donations");

    assert!(matches!(
        "average".parse::<Attribute>(),
        Err(mailroom::Error::UnknownAttribute(name)) if name == "average"
    ));

    Ok(())
}

#[test]
fn process_donation() {
    let mut honest_abe = Donor::new("Abraham Lincoln", []);

    assert_that!(honest_abe.count()).is_equal_to(0);
    assert_that!(honest_abe.donations()).is_equal_to(0.0);

    assert_that!(honest_abe.process(307.65)).is_true();

    assert_that!(honest_abe.count()).is_equal_to(1);
    assert_that!(honest_abe.donations()).is_equal_to(307.65);
    assert_that!(honest_abe.last_donation()).is_some().is_equal_to(307.65);
}

#[test]
fn history_keeps_donation_order() {
    let mut donor = Donor::new("Ada Lovelace", [10.0]);
    donor.process(30.0);
    donor.process(20.0);

    assert_that!(donor.history()).is_equal_to(&[10.0, 30.0, 20.0][..]);
    assert_that!(donor.average()).is_equal_to(20.0);
    assert_that!(donor.last_donation()).is_some().is_equal_to(20.0);
}

#[rstest]
fn thank_you_letter_names_donor_and_amounts(honest_abe: Donor) {
    let letter = honest_abe.thank_you_letter();

    assert!(letter.starts_with("Dear Abraham Lincoln,"));
    assert!(letter.contains("$18.65"));
    assert!(letter.contains("$105.65"));
    assert!(letter.contains("2 gift(s)"));
}

#[rstest]
fn thank_you_letter_without_donations(teddy: Donor) {
    let letter = teddy.thank_you_letter();

    assert!(letter.starts_with("Dear Theodore Roosevelt,"));
    assert!(!letter.contains('$'));
}
