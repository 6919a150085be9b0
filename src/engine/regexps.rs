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

use std::collections::HashMap;

use regex::Regex;

use crate::regexp_cache::RegexCache;

use super::constants::{
    CAPTURE_UP_TO_SECOND_NUMBER_START, DIGITS, MIN_LENGTH_FOR_NSN, PLUS_CHARS,
    RFC3966_EXTN_PREFIX, STAR_SIGN, VALID_ALPHA, VALID_PUNCTUATION,
};

/// Builds the pattern matching every way an extension can be written at the
/// end of a number: the RFC 3966 `;ext=` form, explicit labels such as
/// "ext." or "extension", single-character labels such as "x" or "#", and
/// the American "- 1234#" suffix form. Only the extension digits are
/// captured; whichever capture group is non-empty holds them.
fn create_extn_pattern() -> String {
    let explicit_labels =
        "e?xt(?:ensi(?:o\u{0301}?|\u{00F3}))?n?|\u{FF45}?\u{FF58}\u{FF54}\u{FF4E}?|\u{0434}\u{043E}\u{0431}|anexo";
    let ambiguous_labels = "[x\u{FF58}#\u{FF03}~\u{FF5E}]|int|\u{FF49}\u{FF4E}\u{FF54}";
    let separators = "[ \u{00A0}\\t,]*";
    let after_label = "[:\\.\u{FF0E}]?[ \u{00A0}\\t,-]*";
    let ext_suffix = "#?";
    format!(
        "{rfc}({digits}{{1,7}})\
        |{separators}(?:{explicit_labels}){after_label}({digits}{{1,7}}){ext_suffix}\
        |{separators}(?:{ambiguous_labels}){after_label}({digits}{{1,9}}){ext_suffix}\
        |[- ]+({digits}{{1,6}})#",
        rfc = RFC3966_EXTN_PREFIX,
        digits = DIGITS,
        separators = separators,
        explicit_labels = explicit_labels,
        ambiguous_labels = ambiguous_labels,
        after_label = after_label,
        ext_suffix = ext_suffix,
    )
}

/// The precompiled regular expressions and character mappings shared by all
/// engine components. Built once per engine; all fields are immutable after
/// construction.
pub(crate) struct EngineRegexps {
    /// Lazily compiled metadata patterns live here.
    pub regexp_cache: RegexCache,

    /// Keypad letters (uppercase) to the digit they stand for.
    pub alpha_mappings: HashMap<char, char>,

    /// Union of `alpha_mappings` and the identity mapping on ASCII digits,
    /// kept separate for performance.
    pub alpha_phone_mappings: HashMap<char, char>,

    /// One or more plus signs (ASCII or fullwidth) at the start of input.
    pub plus_chars_pattern: Regex,

    /// Characters that may plausibly start a phone number: digits and plus
    /// signs. Leading text before the first such character carries no
    /// information and is cut away before parsing.
    pub valid_start_char_pattern: Regex,

    /// Trailing characters to drop: anything that is not alphanumeric or a
    /// closing `#` (which may terminate an extension).
    pub unwanted_end_char_pattern: Regex,

    /// Marker that a second phone number follows; everything matched after
    /// the captured head belongs to that second number.
    pub capture_up_to_second_number_start_pattern: Regex,

    /// Groups of number-grouping punctuation.
    pub separator_pattern: Regex,

    /// Whole-input shape check for anything that could be a phone number:
    /// either exactly the minimum NSN length in digits, or optional plus
    /// signs followed by at least three digits with punctuation, with an
    /// optional extension suffix. Case-insensitive.
    pub valid_phone_number_pattern: Regex,

    /// Recognized extension suffix, anchored to the end of the number.
    pub extn_pattern: Regex,

    /// At least three keypad letters somewhere in the number, marking a
    /// "vanity" number whose letters should be converted rather than
    /// stripped.
    pub valid_alpha_phone_pattern: Regex,

    /// The first `$n` group reference in a format template. `$1` itself is
    /// not used because some plans (e.g. Argentina) start their template at
    /// a later group.
    pub first_group_capturing_pattern: Regex,

    /// The `$CC` carrier-code slot in a carrier formatting rule.
    pub carrier_code_pattern: Regex,

    /// Distinguishes regions with one international dialing prefix (plain
    /// digits, possibly a wait-for-tone tilde) from regions whose
    /// `international_prefix` is a pattern covering several.
    pub single_international_prefix: Regex,

    /// A format template usable by the as-you-type formatter: the first
    /// group must survive into the output so no digits are lost while
    /// typing.
    pub eligible_format_pattern: Regex,

    /// A national-prefix formatting rule consisting of the first group only
    /// (possibly parenthesized), i.e. one that doesn't actually render the
    /// prefix. Unbalanced parentheses are deliberately allowed.
    pub first_group_only_prefix_pattern: Regex,
}

impl EngineRegexps {
    pub fn new() -> Self {
        let extn_patterns = create_extn_pattern();
        // The two-digit alternative comes last so a full-length match is
        // always preferred over a bare short number.
        let valid_phone_number = format!(
            "[{plus}]*(?:[{punct}{star}]*{digits}){{3,}}[{punct}{star}{digits}{alpha}]*|{digits}{{{min_nsn}}}",
            plus = PLUS_CHARS,
            punct = VALID_PUNCTUATION,
            star = STAR_SIGN,
            digits = DIGITS,
            alpha = VALID_ALPHA,
            min_nsn = MIN_LENGTH_FOR_NSN,
        );

        let mut instance = Self {
            regexp_cache: RegexCache::with_capacity(128),
            alpha_mappings: HashMap::new(),
            alpha_phone_mappings: HashMap::new(),
            plus_chars_pattern: Regex::new(&format!("[{}]+", PLUS_CHARS)).unwrap(),
            valid_start_char_pattern: Regex::new(&format!("[{}{}]", PLUS_CHARS, DIGITS)).unwrap(),
            unwanted_end_char_pattern: Regex::new(r"[^\p{N}\p{L}#]").unwrap(),
            capture_up_to_second_number_start_pattern: Regex::new(
                CAPTURE_UP_TO_SECOND_NUMBER_START,
            )
            .unwrap(),
            separator_pattern: Regex::new(&format!("[{}]+", VALID_PUNCTUATION)).unwrap(),
            valid_phone_number_pattern: Regex::new(&format!(
                "(?i)^(?:{})(?:{})?$",
                valid_phone_number, extn_patterns
            ))
            .unwrap(),
            extn_pattern: Regex::new(&format!("(?i)(?:{})$", extn_patterns)).unwrap(),
            valid_alpha_phone_pattern: Regex::new("(?:.*?[A-Za-z]){3}.*").unwrap(),
            first_group_capturing_pattern: Regex::new(r"(\$\d)").unwrap(),
            carrier_code_pattern: Regex::new(r"\$CC").unwrap(),
            single_international_prefix: Regex::new(
                "[\\d]+(?:[~\u{2053}\u{223C}\u{FF5E}][\\d]+)?",
            )
            .unwrap(),
            eligible_format_pattern: Regex::new(&format!(
                "[{punct}]*\\$1[{punct}]*(\\$\\d[{punct}]*)*",
                punct = VALID_PUNCTUATION
            ))
            .unwrap(),
            first_group_only_prefix_pattern: Regex::new(r"\(?\$1\)?").unwrap(),
        };
        instance.initialize_mappings();
        instance
    }

    fn initialize_mappings(&mut self) {
        let mut alpha_map = HashMap::with_capacity(26);
        for (letters, digit) in [
            ("ABC", '2'),
            ("DEF", '3'),
            ("GHI", '4'),
            ("JKL", '5'),
            ("MNO", '6'),
            ("PQRS", '7'),
            ("TUV", '8'),
            ("WXYZ", '9'),
        ] {
            for letter in letters.chars() {
                alpha_map.insert(letter, digit);
            }
        }
        // Uppercase keys only; lookups uppercase the input character.
        self.alpha_mappings = alpha_map;

        let mut combined = HashMap::with_capacity(40);
        combined.extend(self.alpha_mappings.iter());
        for d in '0'..='9' {
            combined.insert(d, d);
        }
        self.alpha_phone_mappings = combined;
    }
}
