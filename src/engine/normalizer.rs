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
use std::sync::Arc;

use dec_from_char::normalize_decimals;

use super::constants::MIN_LENGTH_FOR_NSN;
use super::errors::ParseError;
use super::regexps::EngineRegexps;
use crate::regex_util::RegexFullMatch;

/// Cleans free-form input down to the character set the rest of the engine
/// works on: locates the number inside surrounding text, maps digits of any
/// script to ASCII, converts keypad letters on vanity numbers, and splits
/// off extensions.
#[derive(Clone)]
pub(crate) struct Normalizer {
    reg_exps: Arc<EngineRegexps>,
}

/// Keeps every character of `input` that has an entry in `normalization_map`
/// (keys are uppercase), mapped through it. When `remove_non_matches` is
/// false, unmapped characters are passed through instead of dropped.
fn normalize_with_map(
    normalization_map: &HashMap<char, char>,
    remove_non_matches: bool,
    input: &str,
) -> String {
    let mut normalized = String::with_capacity(input.len());
    for character in input.chars() {
        let upper = character.to_ascii_uppercase();
        if let Some(replacement) = normalization_map.get(&upper) {
            normalized.push(*replacement);
        } else if !remove_non_matches {
            normalized.push(character);
        }
    }
    normalized
}

impl Normalizer {
    pub fn new(reg_exps: Arc<EngineRegexps>) -> Self {
        Self { reg_exps }
    }

    /// Extracts the portion of `input` that could be a phone number: skips
    /// leading text up to the first digit or plus sign, trims trailing
    /// punctuation, and cuts away a second number glued on at the end.
    pub fn extract_possible_number(&self, input: &str) -> Result<String, ParseError> {
        let start = match self.reg_exps.valid_start_char_pattern.find(input) {
            Some(first_valid) => first_valid.start(),
            None => return Err(ParseError::NotANumber),
        };
        let mut number = input[start..].to_string();
        self.trim_unwanted_end_chars(&mut number);

        let second_number_start = self
            .reg_exps
            .capture_up_to_second_number_start_pattern
            .captures(&number)
            .and_then(|captures| captures.get(1))
            .map(|head| head.end());
        if let Some(head_end) = second_number_start {
            number.truncate(head_end);
            self.trim_unwanted_end_chars(&mut number);
        }

        if number.is_empty() {
            Err(ParseError::NotANumber)
        } else {
            Ok(number)
        }
    }

    fn trim_unwanted_end_chars(&self, number: &mut String) {
        while let Some(last) = number.chars().next_back() {
            let mut buf = [0u8; 4];
            if self
                .reg_exps
                .unwanted_end_char_pattern
                .full_match(last.encode_utf8(&mut buf))
            {
                number.truncate(number.len() - last.len_utf8());
            } else {
                break;
            }
        }
    }

    /// Checks whether a string has the rough shape of a phone number. This
    /// only filters out obvious garbage; the real validity check happens
    /// against a numbering plan later.
    pub fn is_viable_phone_number(&self, number: &str) -> bool {
        if number.len() < MIN_LENGTH_FOR_NSN {
            return false;
        }
        self.reg_exps.valid_phone_number_pattern.full_match(number)
    }

    /// Normalizes a number to plain ASCII digits. When the input carries at
    /// least three keypad letters it is treated as a vanity number and the
    /// letters are converted; otherwise every non-digit is dropped.
    pub fn normalize(&self, number: &str) -> String {
        let decimalized = normalize_decimals(number);
        if self
            .reg_exps
            .valid_alpha_phone_pattern
            .full_match(&decimalized)
        {
            normalize_with_map(&self.reg_exps.alpha_phone_mappings, true, &decimalized)
        } else {
            self.normalize_digits_only(&decimalized)
        }
    }

    /// Keeps decimal digits only, with digits of any script mapped to their
    /// ASCII value.
    pub fn normalize_digits_only(&self, number: &str) -> String {
        normalize_decimals(number)
            .chars()
            .filter(char::is_ascii_digit)
            .collect()
    }

    /// Strips a trailing extension off `number` and returns its digits, or
    /// `None` (leaving `number` untouched) when no extension is written on
    /// it. Stripping is refused if what remains would no longer look like a
    /// phone number.
    pub fn maybe_strip_extension(&self, number: &mut String) -> Option<String> {
        let (head_end, extension) = {
            let captures = self.reg_exps.extn_pattern.captures(number)?;
            let whole_match = captures.get(0)?;
            let extension = (1..captures.len())
                .filter_map(|group| captures.get(group))
                .map(|m| m.as_str())
                .find(|text| !text.is_empty())?
                .to_string();
            (whole_match.start(), extension)
        };
        if !self.is_viable_phone_number(&number[..head_end]) {
            return None;
        }
        number.truncate(head_end);
        Some(self.normalize_digits_only(&extension))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn normalizer() -> Normalizer {
        Normalizer::new(Arc::new(EngineRegexps::new()))
    }

    #[test]
    fn extract_possible_number_strips_text_and_trailing_junk() {
        let normalizer = normalizer();
        assert_eq!(
            "0800-345-600",
            normalizer.extract_possible_number("Tel:0800-345-600").unwrap()
        );
        assert_eq!(
            "0800 FOR PIZZA",
            normalizer.extract_possible_number("Tel:0800 FOR PIZZA").unwrap()
        );
        // Trailing non-alphanumeric characters are removed.
        assert_eq!(
            "650) 253-0000",
            normalizer.extract_possible_number("(650) 253-0000..- ..").unwrap()
        );
        assert_eq!(
            ParseError::NotANumber,
            normalizer.extract_possible_number("Num-..").unwrap_err()
        );
    }

    #[test]
    fn extract_possible_number_cuts_a_glued_second_number() {
        let normalizer = normalizer();
        // The leading "(" is not a valid start character and is cut away.
        assert_eq!(
            "530) 583-6985 x302",
            normalizer
                .extract_possible_number("(530) 583-6985 x302/x2303")
                .unwrap()
        );
    }

    #[test]
    fn viability_requires_enough_digits() {
        let normalizer = normalizer();
        assert!(normalizer.is_viable_phone_number("1 650 253 0000"));
        assert!(normalizer.is_viable_phone_number("+1 650 253 0000"));
        assert!(normalizer.is_viable_phone_number("0800-4-PIZZA"));
        assert!(!normalizer.is_viable_phone_number("1"));
        // Only one or two digits with alpha characters is not viable.
        assert!(!normalizer.is_viable_phone_number("1+1"));
    }

    #[test]
    fn normalize_converts_vanity_letters_when_there_are_enough() {
        let normalizer = normalizer();
        assert_eq!("0800774992", normalizer.normalize("0800-7-PIZZA"));
        // Fewer than three letters means the letters are stripped instead.
        assert_eq!("080074", normalizer.normalize("0800-7-4-A"));
    }

    #[test]
    fn normalize_digits_only_maps_other_scripts() {
        let normalizer = normalizer();
        assert_eq!(
            "6502530000",
            normalizer.normalize_digits_only("\u{FF16}\u{FF15}\u{FF10}-253-0000")
        );
        assert_eq!("123", normalizer.normalize_digits_only("a1b2c3"));
    }

    #[test]
    fn strips_extension_written_several_ways() {
        let normalizer = normalizer();
        for (input, expected_number, expected_extension) in [
            ("1234567890 ext. 7246433", "1234567890", "7246433"),
            ("1234567890x7246433", "1234567890", "7246433"),
            ("1234567890;ext=7246433", "1234567890", "7246433"),
            ("1234567890 extension 7246433", "1234567890", "7246433"),
        ] {
            let mut number = input.to_string();
            assert_eq!(
                Some(expected_extension.to_string()),
                normalizer.maybe_strip_extension(&mut number),
                "failed for {input}"
            );
            assert_eq!(expected_number, number, "failed for {input}");
        }

        let mut no_extension = "1234567890".to_string();
        assert_eq!(None, normalizer.maybe_strip_extension(&mut no_extension));
        assert_eq!("1234567890", no_extension);
    }
}
