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

/// Describes one class of numbers inside a region's numbering plan
/// (fixed-line, mobile, toll-free, ...): the pattern a national significant
/// number of that class matches, and the digit lengths it may have.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneNumberDesc {
    /// Unanchored regular expression the whole national significant number
    /// must match. Empty means "no numbers of this class exist".
    pub national_number_pattern: Option<String>,

    /// The lengths a number of this class may have. When empty, the lengths
    /// of the general description apply. A single entry of `-1` marks a
    /// class with no numbers at all.
    pub possible_length: Vec<i32>,

    /// Lengths that are only dialable locally (e.g. US numbers without the
    /// area code). These never overlap with `possible_length`.
    pub possible_length_local_only: Vec<i32>,
}

impl PhoneNumberDesc {
    pub fn national_number_pattern(&self) -> &str {
        self.national_number_pattern.as_deref().unwrap_or("")
    }

    pub fn has_national_number_pattern(&self) -> bool {
        self.national_number_pattern.is_some()
    }

    /// Returns `true` if numbers of this class exist at all. A lone `-1`
    /// possible length is the dataset's way of saying they don't.
    pub fn has_possible_number_data(&self) -> bool {
        self.possible_length.len() != 1 || self.possible_length.first() != Some(&-1)
    }
}

/// One formatting rule of a region: which numbers it applies to and the
/// template they are rendered with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberFormat {
    /// Pattern the whole national significant number must match for this
    /// rule to apply, with capturing groups feeding the template.
    pub pattern: String,

    /// Output template, `$1`-style group references separated by punctuation,
    /// e.g. `"$1 $2-$3"`.
    pub format: String,

    /// Prefix patterns narrowing the rule before the full pattern is tried,
    /// ordered from least to most specific. Only the last (most detailed)
    /// entry is used for plain formatting; the as-you-type formatter walks
    /// the list as digits arrive.
    pub leading_digits_pattern: Vec<String>,

    /// How the national prefix is attached when rendering in national
    /// format, e.g. `"0$1"` or `"($1)"`. `$NP` and `$FG` placeholders are
    /// accepted and expanded against the region's national prefix.
    pub national_prefix_formatting_rule: Option<String>,

    /// Whether the national prefix may be omitted when formatting (relevant
    /// for as-you-type formatting, where the prefix may not have been typed).
    pub national_prefix_optional_when_formatting: bool,

    /// Template used instead of the national-prefix rule when a domestic
    /// carrier code is rendered; `$CC` marks the carrier-code slot.
    pub domestic_carrier_code_formatting_rule: Option<String>,
}

impl NumberFormat {
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn leading_digits_pattern(&self) -> &[String] {
        &self.leading_digits_pattern
    }

    pub fn national_prefix_formatting_rule(&self) -> &str {
        self.national_prefix_formatting_rule.as_deref().unwrap_or("")
    }

    pub fn domestic_carrier_code_formatting_rule(&self) -> &str {
        self.domestic_carrier_code_formatting_rule
            .as_deref()
            .unwrap_or("")
    }
}

/// The complete numbering plan of one region (or of one non-geographical
/// calling code, in which case `id` is `"001"`).
///
/// This is pure data: regions are described, not subclassed. The engine
/// reads it through [`crate::MetadataRegistry`] and never mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneMetadata {
    /// CLDR two-letter region code, e.g. `"GB"`.
    pub id: String,

    /// The country calling code, e.g. 44.
    pub country_code: i32,

    /// Pattern matching the international dialing prefix used from this
    /// region, e.g. `"00"` for most of the world, `"011"` for NANPA.
    pub international_prefix: Option<String>,

    /// The prefix to show when formatting out-of-country numbers for this
    /// region, when `international_prefix` is a pattern matching several.
    pub preferred_international_prefix: Option<String>,

    /// The national dialing prefix, e.g. `"0"`.
    pub national_prefix: Option<String>,

    /// Pattern matching the national prefix (and possibly a carrier code)
    /// when parsing. Defaults to `national_prefix` when absent.
    pub national_prefix_for_parsing: Option<String>,

    /// Replacement applied to a `national_prefix_for_parsing` match instead
    /// of plain stripping, e.g. Argentina's `"9$1"` which rewrites rather
    /// than removes.
    pub national_prefix_transform_rule: Option<String>,

    /// Extension prefix preferred by the region when formatting, overriding
    /// the default `" ext. "`.
    pub preferred_extn_prefix: Option<String>,

    /// When several regions share a calling code, a pattern of national
    /// number prefixes specific to this region, used to tell them apart.
    pub leading_digits: Option<String>,

    /// Marks the region the shared formatting rules live on when several
    /// regions share one calling code (e.g. US for calling code 1). A
    /// dataset designation, never computed.
    pub main_country_for_code: bool,

    pub general_desc: PhoneNumberDesc,
    pub fixed_line: PhoneNumberDesc,
    pub mobile: PhoneNumberDesc,
    pub toll_free: PhoneNumberDesc,
    pub premium_rate: PhoneNumberDesc,
    pub shared_cost: PhoneNumberDesc,
    pub personal_number: PhoneNumberDesc,
    pub voip: PhoneNumberDesc,
    pub pager: PhoneNumberDesc,
    pub uan: PhoneNumberDesc,
    pub voicemail: PhoneNumberDesc,

    /// Ordered formatting rules; the first applicable rule wins.
    pub number_format: Vec<NumberFormat>,

    /// Overrides `number_format` for non-national styles when present.
    pub intl_number_format: Vec<NumberFormat>,

    /// Set when the fixed-line and mobile ranges are indistinguishable, so
    /// classification can report FIXED_LINE_OR_MOBILE without matching both
    /// patterns.
    pub same_mobile_and_fixed_line_pattern: bool,
}

impl PhoneMetadata {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn country_code(&self) -> i32 {
        self.country_code
    }

    pub fn international_prefix(&self) -> &str {
        self.international_prefix.as_deref().unwrap_or("")
    }

    pub fn preferred_international_prefix(&self) -> &str {
        self.preferred_international_prefix.as_deref().unwrap_or("")
    }

    pub fn has_preferred_international_prefix(&self) -> bool {
        self.preferred_international_prefix.is_some()
    }

    pub fn national_prefix(&self) -> &str {
        self.national_prefix.as_deref().unwrap_or("")
    }

    pub fn has_national_prefix(&self) -> bool {
        self.national_prefix.is_some()
    }

    /// The pattern used to recognize the national prefix while parsing,
    /// falling back to the literal national prefix.
    pub fn national_prefix_for_parsing(&self) -> &str {
        self.national_prefix_for_parsing
            .as_deref()
            .unwrap_or_else(|| self.national_prefix())
    }

    pub fn national_prefix_transform_rule(&self) -> &str {
        self.national_prefix_transform_rule.as_deref().unwrap_or("")
    }

    pub fn preferred_extn_prefix(&self) -> &str {
        self.preferred_extn_prefix.as_deref().unwrap_or("")
    }

    pub fn has_preferred_extn_prefix(&self) -> bool {
        self.preferred_extn_prefix.is_some()
    }

    pub fn leading_digits(&self) -> &str {
        self.leading_digits.as_deref().unwrap_or("")
    }

    pub fn has_leading_digits(&self) -> bool {
        self.leading_digits.is_some()
    }
}
