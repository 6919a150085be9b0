// Copyright (C) 2025 The Dialplan Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::get_phone_util;
use super::region_code::RegionCode;
use crate::{CountryCodeSource, ParseError, PhoneNumber};

fn number(country_code: i32, national_number: u64) -> PhoneNumber {
    let mut builder = PhoneNumber::builder();
    builder
        .set_country_code(country_code)
        .set_national_number(national_number);
    builder.build().unwrap()
}

#[test]
fn parse_national_number_with_national_prefix() {
    let phone_util = get_phone_util();
    let gb_number = number(44, 2087654321);

    assert_eq!(
        gb_number,
        phone_util
            .parse("020 8765 4321", Some(RegionCode::gb()))
            .unwrap()
    );
    assert_eq!(
        gb_number,
        phone_util
            .parse("+44 20 8765 4321", Some(RegionCode::gb()))
            .unwrap()
    );
    // With an explicit calling code no default region is needed.
    assert_eq!(
        gb_number,
        phone_util.parse("+44 20 8765 4321", None).unwrap()
    );
}

#[test]
fn parse_nanpa_number_in_all_the_ways_it_is_written() {
    let phone_util = get_phone_util();
    let us_number = number(1, 6502530000);

    for input in [
        "650 253 0000",
        "1 650 253 0000",
        "+1 650 253 0000",
        "+1 (650) 253-0000",
        "011 1 650 253 0000",
        "\u{FF0B}\u{FF11} \u{FF16}\u{FF15}\u{FF10} 253 0000",
    ] {
        assert_eq!(
            us_number,
            phone_util.parse(input, Some(RegionCode::us())).unwrap(),
            "failed for {input}"
        );
    }
}

#[test]
fn parse_number_with_extension() {
    let phone_util = get_phone_util();
    let mut builder = PhoneNumber::builder();
    builder
        .set_country_code(44)
        .set_national_number(2087654321)
        .set_extension("456");
    let gb_with_extension = builder.build().unwrap();

    for input in [
        "020 8765 4321 ext. 456",
        "020 8765 4321 x456",
        "020 8765 4321 extension 456",
        "+44 20 8765 4321;ext=456",
    ] {
        assert_eq!(
            gb_with_extension,
            phone_util.parse(input, Some(RegionCode::gb())).unwrap(),
            "failed for {input}"
        );
    }
}

#[test]
fn parse_with_international_dialing_prefix() {
    let phone_util = get_phone_util();

    // Dialed from the US with its 011 prefix.
    assert_eq!(
        number(44, 2087654321),
        phone_util
            .parse("011 44 20 8765 4321", Some(RegionCode::us()))
            .unwrap()
    );
    // Dialed from South Africa with 00; the national prefix written after
    // the calling code is still stripped.
    assert_eq!(
        phone_util.parse("+27 83 307 7082", None).unwrap(),
        phone_util
            .parse("00270833077082", Some(RegionCode::za()))
            .unwrap()
    );
}

#[test]
fn parse_accepts_every_way_a_za_number_is_written() {
    let phone_util = get_phone_util();
    for input in [
        "+270833077082",
        "0833077089",
        "+27833077084",
        "+270112781905",
        "0117681906",
        "+27112781907",
        "00270833077082",
        "(012)7681907",
        " (012) 7681908",
    ] {
        let parsed = phone_util.parse(input, Some(RegionCode::za())).unwrap();
        assert!(
            phone_util.is_valid_number_for_region(&parsed, RegionCode::za()),
            "failed for {input}: parsed as {parsed:?}"
        );
    }
}

#[test]
fn parse_keeps_italian_leading_zero() {
    let phone_util = get_phone_util();

    let fixed_line = phone_util
        .parse("02 3661 8300", Some(RegionCode::it()))
        .unwrap();
    assert_eq!(39, fixed_line.country_code());
    assert_eq!(236618300, fixed_line.national_number());
    assert!(fixed_line.italian_leading_zero());
    assert!(!fixed_line.has_number_of_leading_zeros());
    assert_eq!(
        "0236618300",
        phone_util.get_national_significant_number(&fixed_line)
    );

    // More than one leading zero is carried in a separate count; the last
    // digit never counts as part of the zero prefix.
    let multiple_zeros = phone_util
        .parse("000 345 678", Some(RegionCode::it()))
        .unwrap();
    assert!(multiple_zeros.italian_leading_zero());
    assert_eq!(3, multiple_zeros.number_of_leading_zeros());
    assert_eq!(345678, multiple_zeros.national_number());
    assert_eq!(
        "000345678",
        phone_util.get_national_significant_number(&multiple_zeros)
    );
}

#[test]
fn parse_rejects_input_without_a_number_in_it() {
    let phone_util = get_phone_util();
    assert_eq!(
        ParseError::NotANumber,
        phone_util
            .parse("this is not a phone number", Some(RegionCode::us()))
            .unwrap_err()
    );
    assert_eq!(
        ParseError::NotANumber,
        phone_util
            .parse("1 Still not a number", Some(RegionCode::us()))
            .unwrap_err()
    );
}

#[test]
fn parse_rejects_unknown_country_code() {
    let phone_util = get_phone_util();
    assert_eq!(
        ParseError::InvalidCountryCode,
        phone_util.parse("+210 3456 56789", None).unwrap_err()
    );
    // Without a plus sign the default region must supply the calling code.
    assert_eq!(
        ParseError::InvalidCountryCode,
        phone_util.parse("650 253 0000", None).unwrap_err()
    );
}

#[test]
fn parse_rejects_numbers_of_impossible_length() {
    let phone_util = get_phone_util();
    assert_eq!(
        ParseError::TooShortAfterIdd,
        phone_util.parse("011", Some(RegionCode::us())).unwrap_err()
    );
    assert_eq!(
        ParseError::TooShortNsn,
        phone_util.parse("+44 2", None).unwrap_err()
    );
    assert_eq!(
        ParseError::TooLong,
        phone_util
            .parse("01495 72553301873 810104", Some(RegionCode::gb()))
            .unwrap_err()
    );
}

#[test]
fn parse_consumes_calling_code_written_without_plus() {
    let phone_util = get_phone_util();
    assert_eq!(
        number(44, 2087654321),
        phone_util
            .parse("44 20 8765 4321", Some(RegionCode::gb()))
            .unwrap()
    );

    let kept = phone_util
        .parse_and_keep_raw_input("44 20 8765 4321", Some(RegionCode::gb()))
        .unwrap();
    assert_eq!(
        CountryCodeSource::FromNumberWithoutPlusSign,
        kept.country_code_source()
    );
}

#[test]
fn parse_and_keep_raw_input_records_provenance() {
    let phone_util = get_phone_util();

    let plus = phone_util
        .parse_and_keep_raw_input("+44 20 8765 4321", Some(RegionCode::gb()))
        .unwrap();
    assert_eq!("+44 20 8765 4321", plus.raw_input());
    assert_eq!(
        CountryCodeSource::FromNumberWithPlusSign,
        plus.country_code_source()
    );

    let national = phone_util
        .parse_and_keep_raw_input("020 8765 4321", Some(RegionCode::gb()))
        .unwrap();
    assert_eq!(
        CountryCodeSource::FromDefaultCountry,
        national.country_code_source()
    );

    let idd = phone_util
        .parse_and_keep_raw_input("011 44 20 8765 4321", Some(RegionCode::us()))
        .unwrap();
    assert_eq!(CountryCodeSource::FromNumberWithIdd, idd.country_code_source());

    // The raw-input-keeping entry point produces a different value than the
    // plain one for the same input.
    assert_ne!(
        phone_util.parse("020 8765 4321", Some(RegionCode::gb())).unwrap(),
        national
    );
}

#[test]
fn parse_applies_argentinian_transform_rule() {
    let phone_util = get_phone_util();

    // The nationally dialed mobile form (0 + area code + 15) is rewritten
    // into the international 9-prefixed form, not just stripped.
    let mobile = phone_util
        .parse("0343155551212", Some(RegionCode::ar()))
        .unwrap();
    assert_eq!(number(54, 93435551212), mobile);
    assert_eq!(
        mobile,
        phone_util.parse("+54 9 343 555 1212", None).unwrap()
    );

    // A plain fixed line only loses its national prefix.
    assert_eq!(
        number(54, 1187654321),
        phone_util.parse("011 8765-4321", Some(RegionCode::ar())).unwrap()
    );
}

#[test]
fn parse_non_geographical_toll_free_number() {
    let phone_util = get_phone_util();
    let number_800 = phone_util.parse("+800 1234 5678", None).unwrap();
    assert_eq!(number(800, 12345678), number_800);
    assert_eq!(
        Some(RegionCode::un001()),
        phone_util.get_region_code_for_number(&number_800)
    );
}

#[test]
fn parse_converts_vanity_letters() {
    let phone_util = get_phone_util();
    let parsed = phone_util
        .parse("0800 4 PIZZA", Some(RegionCode::nz()))
        .unwrap();
    assert_eq!(64, parsed.country_code());
    assert_eq!(800474992, parsed.national_number());
}

#[test]
fn parsed_numbers_survive_an_e164_round_trip() {
    let phone_util = get_phone_util();
    for (input, region) in [
        ("650 253 0000", RegionCode::us()),
        ("020 8765 4321", RegionCode::gb()),
        ("02 3661 8300", RegionCode::it()),
        ("0343155551212", RegionCode::ar()),
        ("0833077089", RegionCode::za()),
    ] {
        let parsed = phone_util.parse(input, Some(region)).unwrap();
        let e164 = phone_util.format(&parsed, crate::PhoneNumberFormat::E164);
        assert_eq!(
            parsed,
            phone_util.parse(&e164, None).unwrap(),
            "round trip failed for {input}"
        );
    }
}
