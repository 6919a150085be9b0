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
use crate::{PhoneNumber, PhoneNumberFormat};

fn number(country_code: i32, national_number: u64) -> PhoneNumber {
    let mut builder = PhoneNumber::builder();
    builder
        .set_country_code(country_code)
        .set_national_number(national_number);
    builder.build().unwrap()
}

#[test]
fn format_us_number_in_every_style() {
    let phone_util = get_phone_util();
    let us_number = number(1, 6502530000);

    assert_eq!(
        "650 253 0000",
        phone_util.format(&us_number, PhoneNumberFormat::National)
    );
    assert_eq!(
        "+1 650 253 0000",
        phone_util.format(&us_number, PhoneNumberFormat::International)
    );
    assert_eq!(
        "+16502530000",
        phone_util.format(&us_number, PhoneNumberFormat::E164)
    );
    assert_eq!(
        "tel:+1-650-253-0000",
        phone_util.format(&us_number, PhoneNumberFormat::Rfc3966)
    );
}

#[test]
fn format_applies_the_national_prefix_rule() {
    let phone_util = get_phone_util();

    let gb_fixed = number(44, 2087654321);
    assert_eq!(
        "020 8765 4321",
        phone_util.format(&gb_fixed, PhoneNumberFormat::National)
    );
    assert_eq!(
        "+44 20 8765 4321",
        phone_util.format(&gb_fixed, PhoneNumberFormat::International)
    );

    let gb_mobile = number(44, 7912345678);
    assert_eq!(
        "07912 345678",
        phone_util.format(&gb_mobile, PhoneNumberFormat::National)
    );

    let de_number = number(49, 301234567);
    assert_eq!(
        "030 1234567",
        phone_util.format(&de_number, PhoneNumberFormat::National)
    );

    let nz_number = number(64, 33316005);
    assert_eq!(
        "03-331 6005",
        phone_util.format(&nz_number, PhoneNumberFormat::National)
    );
    assert_eq!(
        "+64 3-331 6005",
        phone_util.format(&nz_number, PhoneNumberFormat::International)
    );
}

#[test]
fn format_keeps_italian_leading_zero() {
    let phone_util = get_phone_util();
    let it_number = phone_util
        .parse("02 3661 8300", Some(RegionCode::it()))
        .unwrap();

    assert_eq!(
        "02 3661 8300",
        phone_util.format(&it_number, PhoneNumberFormat::National)
    );
    assert_eq!(
        "+39 02 3661 8300",
        phone_util.format(&it_number, PhoneNumberFormat::International)
    );
    assert_eq!(
        "+390236618300",
        phone_util.format(&it_number, PhoneNumberFormat::E164)
    );
}

#[test]
fn format_ar_mobile_differs_between_national_and_international() {
    let phone_util = get_phone_util();
    // The international form carries the 9 prefix; dialed nationally the
    // mobile marker 15 sits after the area code instead.
    let ar_mobile = number(54, 91187654321);

    assert_eq!(
        "011 15 8765-4321",
        phone_util.format(&ar_mobile, PhoneNumberFormat::National)
    );
    assert_eq!(
        "+54 9 11 8765-4321",
        phone_util.format(&ar_mobile, PhoneNumberFormat::International)
    );
    assert_eq!(
        "+5491187654321",
        phone_util.format(&ar_mobile, PhoneNumberFormat::E164)
    );
}

#[test]
fn format_with_carrier_code_fills_the_template_slot() {
    let phone_util = get_phone_util();
    let ar_fixed = number(54, 1187654320);

    assert_eq!(
        "011 8765-4320",
        phone_util.format(&ar_fixed, PhoneNumberFormat::National)
    );
    assert_eq!(
        "011 14 8765-4320",
        phone_util.format_national_number_with_carrier_code(&ar_fixed, "14")
    );
    // A template without a carrier slot ignores the carrier code.
    assert_eq!(
        "650 253 0000",
        phone_util.format_national_number_with_carrier_code(&number(1, 6502530000), "15")
    );
}

#[test]
fn format_with_preferred_carrier_code_prefers_the_stored_one() {
    let phone_util = get_phone_util();

    let mut builder = PhoneNumber::builder();
    builder
        .set_country_code(54)
        .set_national_number(1187654320)
        .set_preferred_domestic_carrier_code("19");
    let with_stored_carrier = builder.build().unwrap();
    assert_eq!(
        "011 19 8765-4320",
        phone_util.format_national_number_with_preferred_carrier_code(&with_stored_carrier, "15")
    );

    // No stored carrier: the fallback fills the slot.
    assert_eq!(
        "011 15 8765-4320",
        phone_util
            .format_national_number_with_preferred_carrier_code(&number(54, 1187654320), "15")
    );

    // A stored empty carrier code means the subscriber wants none dialed.
    let mut builder = PhoneNumber::builder();
    builder
        .set_country_code(54)
        .set_national_number(1187654320)
        .set_preferred_domestic_carrier_code("");
    let with_empty_carrier = builder.build().unwrap();
    assert_eq!(
        "011 8765-4320",
        phone_util.format_national_number_with_preferred_carrier_code(&with_empty_carrier, "15")
    );
}

#[test]
fn format_out_of_country_uses_the_dialing_regions_prefix() {
    let phone_util = get_phone_util();
    let us_number = number(1, 6502530000);
    let gb_number = number(44, 2087654321);

    assert_eq!(
        "00 1 650 253 0000",
        phone_util.format_out_of_country_calling_number(&us_number, RegionCode::de())
    );
    assert_eq!(
        "011 44 20 8765 4321",
        phone_util.format_out_of_country_calling_number(&gb_number, RegionCode::us())
    );
    assert_eq!(
        "011 54 9 11 8765-4321",
        phone_util
            .format_out_of_country_calling_number(&number(54, 91187654321), RegionCode::us())
    );
}

#[test]
fn format_out_of_country_within_the_same_plan() {
    let phone_util = get_phone_util();

    // Within the North American plan, crossing the country only adds the 1.
    assert_eq!(
        "1 650 253 0000",
        phone_util.format_out_of_country_calling_number(&number(1, 6502530000), RegionCode::bs())
    );
    // Within one region it is simply the national format.
    let it_number = phone_util
        .parse("02 3661 8300", Some(RegionCode::it()))
        .unwrap();
    assert_eq!(
        "02 3661 8300",
        phone_util.format_out_of_country_calling_number(&it_number, RegionCode::it())
    );
    // An unknown dialing region degrades to the international format.
    assert_eq!(
        "+1 650 253 0000",
        phone_util.format_out_of_country_calling_number(&number(1, 6502530000), RegionCode::zz())
    );
}

#[test]
fn format_renders_the_extension_in_the_styles_notation() {
    let phone_util = get_phone_util();
    let mut builder = PhoneNumber::builder();
    builder
        .set_country_code(44)
        .set_national_number(2087654321)
        .set_extension("456");
    let gb_with_extension = builder.build().unwrap();

    assert_eq!(
        "020 8765 4321 ext. 456",
        phone_util.format(&gb_with_extension, PhoneNumberFormat::National)
    );
    assert_eq!(
        "+44 20 8765 4321 ext. 456",
        phone_util.format(&gb_with_extension, PhoneNumberFormat::International)
    );
    assert_eq!(
        "tel:+44-20-8765-4321;ext=456",
        phone_util.format(&gb_with_extension, PhoneNumberFormat::Rfc3966)
    );
    // E164 carries no extension.
    assert_eq!(
        "+442087654321",
        phone_util.format(&gb_with_extension, PhoneNumberFormat::E164)
    );
}

#[test]
fn format_unknown_calling_code_degrades_to_bare_digits() {
    let phone_util = get_phone_util();
    let unknown = number(999, 12345678);

    assert_eq!(
        "12345678",
        phone_util.format(&unknown, PhoneNumberFormat::National)
    );
    assert_eq!(
        "12345678",
        phone_util.format(&unknown, PhoneNumberFormat::International)
    );
    // E164 needs no plan, only the calling code itself.
    assert_eq!(
        "+99912345678",
        phone_util.format(&unknown, PhoneNumberFormat::E164)
    );
}

#[test]
fn format_non_geographical_number() {
    let phone_util = get_phone_util();
    let toll_free = number(800, 12345678);

    assert_eq!(
        "+800 1234 5678",
        phone_util.format(&toll_free, PhoneNumberFormat::International)
    );
    assert_eq!(
        "1234 5678",
        phone_util.format(&toll_free, PhoneNumberFormat::National)
    );
}

#[test]
fn formatting_a_canonical_e164_input_is_idempotent() {
    let phone_util = get_phone_util();
    for e164 in ["+16502530000", "+442087654321", "+390236618300", "+80012345678"] {
        let parsed = phone_util.parse(e164, None).unwrap();
        assert_eq!(e164, phone_util.format(&parsed, PhoneNumberFormat::E164));
    }
}

#[test]
fn get_national_significant_number_restores_leading_zeros() {
    let phone_util = get_phone_util();
    assert_eq!(
        "6502530000",
        phone_util.get_national_significant_number(&number(1, 6502530000))
    );

    let multiple_zeros = phone_util
        .parse("000 345 678", Some(RegionCode::it()))
        .unwrap();
    assert_eq!(
        "000345678",
        phone_util.get_national_significant_number(&multiple_zeros)
    );
}
