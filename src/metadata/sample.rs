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

//! A small hand-written dataset covering a handful of regions, deliberately
//! simplified from the real numbering plans so expected results can be
//! verified by hand. Used by the test suite and the benchmarks, and usable
//! as a template for wiring up a real dataset.
//!
//! Covered: NANPA with two regions sharing calling code 1 (US as main
//! region, BS told apart by leading digits), GB, DE (variable lengths with
//! a deliberate gap), IT (significant leading zeros, no national prefix),
//! NZ, AR (national-prefix transform rule and carrier codes), ZA, and the
//! non-geographical toll-free zone 800.

use super::types::{NumberFormat, PhoneMetadata, PhoneNumberDesc};

fn desc(pattern: &str, possible_length: &[i32]) -> PhoneNumberDesc {
    PhoneNumberDesc {
        national_number_pattern: Some(pattern.to_string()),
        possible_length: possible_length.to_vec(),
        possible_length_local_only: Vec::new(),
    }
}

fn desc_with_local(
    pattern: &str,
    possible_length: &[i32],
    local_only: &[i32],
) -> PhoneNumberDesc {
    PhoneNumberDesc {
        national_number_pattern: Some(pattern.to_string()),
        possible_length: possible_length.to_vec(),
        possible_length_local_only: local_only.to_vec(),
    }
}

/// A number class the region has no numbers of. The `-1` sentinel keeps it
/// apart from "lengths inherited from the general description".
fn absent() -> PhoneNumberDesc {
    PhoneNumberDesc {
        national_number_pattern: None,
        possible_length: vec![-1],
        possible_length_local_only: Vec::new(),
    }
}

/// All number classes absent; regions fill in the ones they have.
fn base(id: &str, country_code: i32) -> PhoneMetadata {
    PhoneMetadata {
        id: id.to_string(),
        country_code,
        general_desc: absent(),
        fixed_line: absent(),
        mobile: absent(),
        toll_free: absent(),
        premium_rate: absent(),
        shared_cost: absent(),
        personal_number: absent(),
        voip: absent(),
        pager: absent(),
        uan: absent(),
        voicemail: absent(),
        ..Default::default()
    }
}

fn fmt(pattern: &str, format: &str, leading_digits: &[&str]) -> NumberFormat {
    NumberFormat {
        pattern: pattern.to_string(),
        format: format.to_string(),
        leading_digits_pattern: leading_digits.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    }
}

fn fmt_np(
    pattern: &str,
    format: &str,
    leading_digits: &[&str],
    national_prefix_rule: &str,
) -> NumberFormat {
    NumberFormat {
        national_prefix_formatting_rule: Some(national_prefix_rule.to_string()),
        ..fmt(pattern, format, leading_digits)
    }
}

fn us() -> PhoneMetadata {
    PhoneMetadata {
        international_prefix: Some("011".to_string()),
        national_prefix: Some("1".to_string()),
        main_country_for_code: true,
        // 242 belongs to the Bahamas, which shares the calling code.
        general_desc: desc_with_local("[13-689]\\d{9}|2[0-35-9]\\d{8}", &[10], &[7]),
        fixed_line: desc_with_local("[13-689]\\d{9}|2[0-35-9]\\d{8}", &[10], &[7]),
        mobile: desc("[13-689]\\d{9}|2[0-35-9]\\d{8}", &[10]),
        toll_free: desc("800[2-9]\\d{6}", &[10]),
        premium_rate: desc("900[2-9]\\d{6}", &[10]),
        number_format: vec![
            fmt("(\\d{3})(\\d{4})", "$1-$2", &[]),
            fmt("(\\d{3})(\\d{3})(\\d{4})", "$1 $2 $3", &[]),
        ],
        same_mobile_and_fixed_line_pattern: true,
        ..base("US", 1)
    }
}

fn bs() -> PhoneMetadata {
    PhoneMetadata {
        international_prefix: Some("011".to_string()),
        national_prefix: Some("1".to_string()),
        leading_digits: Some("242".to_string()),
        general_desc: desc("242[2-9]\\d{6}", &[10]),
        fixed_line: desc("242[2-5]\\d{6}", &[10]),
        mobile: desc("242[3-9]\\d{6}", &[10]),
        ..base("BS", 1)
    }
}

fn gb() -> PhoneMetadata {
    PhoneMetadata {
        international_prefix: Some("00".to_string()),
        national_prefix: Some("0".to_string()),
        main_country_for_code: true,
        general_desc: desc("[1-9]\\d{9}", &[10]),
        fixed_line: desc("[12]\\d{9}", &[10]),
        mobile: desc("7[1-9]\\d{8}", &[10]),
        number_format: vec![
            fmt_np("(\\d{2})(\\d{4})(\\d{4})", "$1 $2 $3", &["[12]"], "0$1"),
            fmt_np("(\\d{4})(\\d{6})", "$1 $2", &["7"], "0$1"),
        ],
        ..base("GB", 44)
    }
}

fn de() -> PhoneMetadata {
    PhoneMetadata {
        international_prefix: Some("00".to_string()),
        national_prefix: Some("0".to_string()),
        main_country_for_code: true,
        // No German number is ten digits long in this dataset: a length in
        // the middle of the range that nothing uses, for exercising the
        // possible/valid distinction.
        general_desc: desc("[1-9]\\d{5,10}", &[6, 7, 8, 9, 11]),
        fixed_line: desc("[1-9]\\d{5,8}", &[6, 7, 8, 9]),
        mobile: desc("15\\d{9}", &[11]),
        number_format: vec![
            fmt_np("(\\d{2})(\\d{4,8})", "$1 $2", &["3[02]|40|69|89"], "0$1"),
            fmt_np("(15\\d{2})(\\d{7})", "$1 $2", &["15"], "0$1"),
            fmt_np("(\\d{3})(\\d{3,8})", "$1 $2", &["[2-9]"], "0$1"),
        ],
        ..base("DE", 49)
    }
}

fn it() -> PhoneMetadata {
    PhoneMetadata {
        international_prefix: Some("00".to_string()),
        // No national prefix: the leading zero of fixed lines is part of the
        // national significant number itself.
        general_desc: desc("0\\d{8,9}|3\\d{8,9}|8\\d{7}", &[8, 9, 10]),
        fixed_line: desc("0\\d{8,9}", &[9, 10]),
        mobile: desc("3\\d{8,9}", &[9, 10]),
        toll_free: desc("80\\d{6}", &[8]),
        number_format: vec![
            fmt("(\\d{2})(\\d{4})(\\d{4})", "$1 $2 $3", &["0[26]"]),
            fmt("(\\d{3})(\\d{3})(\\d{3,4})", "$1 $2 $3", &["[03]"]),
            fmt("(\\d{3})(\\d{5})", "$1 $2", &["8"]),
        ],
        ..base("IT", 39)
    }
}

fn nz() -> PhoneMetadata {
    PhoneMetadata {
        international_prefix: Some("00".to_string()),
        national_prefix: Some("0".to_string()),
        general_desc: desc("[23479]\\d{7,9}", &[8, 9, 10]),
        fixed_line: desc("[34679]\\d{7}", &[8]),
        mobile: desc("2[0-4]\\d{6,8}", &[8, 9, 10]),
        number_format: vec![
            fmt_np("(\\d)(\\d{3})(\\d{4})", "$1-$2 $3", &["[34679]"], "0$1"),
            fmt_np("(\\d{2})(\\d{3})(\\d{3,5})", "$1-$2 $3", &["2"], "0$1"),
        ],
        ..base("NZ", 64)
    }
}

fn ar() -> PhoneMetadata {
    PhoneMetadata {
        international_prefix: Some("00".to_string()),
        national_prefix: Some("0".to_string()),
        // Mobile numbers dialed nationally carry a "15" after the area code;
        // parsing rewrites them into the international "9"-prefixed form
        // instead of just cutting the prefix off.
        national_prefix_for_parsing: Some("0(?:(11|343|3715)15)?".to_string()),
        national_prefix_transform_rule: Some("9$1".to_string()),
        general_desc: desc("11\\d{8}|[2368]\\d{9}|9\\d{10}", &[10, 11]),
        fixed_line: desc("11\\d{8}|[2368]\\d{9}", &[10]),
        mobile: desc("9\\d{10}", &[11]),
        number_format: vec![
            NumberFormat {
                domestic_carrier_code_formatting_rule: Some("0$1 $CC".to_string()),
                ..fmt_np("(\\d{2})(\\d{4})(\\d{4})", "$1 $2-$3", &["11"], "0$1")
            },
            fmt_np("(\\d{4})(\\d{2})(\\d{4})", "$1 $2-$3", &["[2368]"], "0$1"),
            fmt_np("(9)(\\d{2})(\\d{4})(\\d{4})", "$2 15 $3-$4", &["9"], "0$1"),
        ],
        intl_number_format: vec![
            fmt("(\\d{2})(\\d{4})(\\d{4})", "$1 $2-$3", &["11"]),
            fmt("(\\d{4})(\\d{2})(\\d{4})", "$1 $2-$3", &["[2368]"]),
            fmt("(9)(\\d{2})(\\d{4})(\\d{4})", "$1 $2 $3-$4", &["9"]),
        ],
        ..base("AR", 54)
    }
}

fn za() -> PhoneMetadata {
    PhoneMetadata {
        international_prefix: Some("00".to_string()),
        national_prefix: Some("0".to_string()),
        general_desc: desc("[1-9]\\d{8}", &[9]),
        fixed_line: desc("(?:1[0-8]|2[1-478]|3[1-69]|4\\d|5[1346-8])\\d{7}", &[9]),
        mobile: desc("(?:6\\d|7[0-46-9]|8[1-9])\\d{7}", &[9]),
        number_format: vec![fmt_np(
            "(\\d{2})(\\d{3})(\\d{4})",
            "$1 $2 $3",
            &[],
            "0$1",
        )],
        ..base("ZA", 27)
    }
}

/// International toll-free numbers: a calling code without a country.
fn universal_toll_free() -> PhoneMetadata {
    PhoneMetadata {
        main_country_for_code: true,
        general_desc: desc("\\d{8}", &[8]),
        toll_free: desc("\\d{8}", &[8]),
        number_format: vec![fmt("(\\d{4})(\\d{4})", "$1 $2", &[])],
        ..base("001", 800)
    }
}

/// The whole sample dataset, ready for [`super::MetadataRegistry::new`].
pub fn sample_metadata() -> Vec<PhoneMetadata> {
    vec![
        us(),
        bs(),
        gb(),
        de(),
        it(),
        nz(),
        ar(),
        za(),
        universal_toll_free(),
    ]
}
