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

use std::sync::Arc;

use log::trace;

use super::constants::MAX_LENGTH_COUNTRY_CODE;
use super::enums::PhoneNumberFormat;
use super::formatter::Formatter;
use super::regexps::EngineRegexps;
use crate::metadata::{MetadataRegistry, NumberFormat, PhoneMetadata};
use crate::regex_util::{RegexConsume, RegexFullMatch};

/// How far country-code resolution has come on the digits typed so far.
enum CallingCodeProgress {
    /// The calling code is fixed; the remaining digits are national.
    Resolved { code: i32, national_start: usize },
    /// Too few digits yet to decide.
    Pending,
    /// The typed digits cannot start with any known calling code.
    Unknown,
}

/// Live formatter for one input field: feed it characters as the user types
/// and it returns the best formatting of everything typed so far.
///
/// The output after every keystroke is a function of the complete keystroke
/// history alone — the only state carried across keystrokes is the history
/// itself plus the index of the template currently locked in, and the lock
/// never changes the result, only which of several still-matching templates
/// is preferred. Deleting a character therefore simply replays the shortened
/// history. Instances are single-threaded by design; each input field gets
/// its own.
///
/// Typing any character that is neither a digit nor a leading plus sign
/// stops formatting: from then on the input is echoed back verbatim, since
/// the user has taken over punctuation themselves.
pub struct AsYouTypeFormatter {
    registry: Arc<MetadataRegistry>,
    reg_exps: Arc<EngineRegexps>,
    formatter: Formatter,
    default_region: String,
    /// Everything typed, verbatim.
    typed: String,
    /// Index into the candidate template list of the template currently
    /// locked in, if any.
    locked_format: Option<usize>,
}

impl AsYouTypeFormatter {
    pub(crate) fn new(
        registry: Arc<MetadataRegistry>,
        reg_exps: Arc<EngineRegexps>,
        default_region: &str,
    ) -> Self {
        let formatter = Formatter::new(Arc::clone(&registry), Arc::clone(&reg_exps));
        Self {
            registry,
            reg_exps,
            formatter,
            default_region: default_region.to_string(),
            typed: String::new(),
            locked_format: None,
        }
    }

    /// Appends one typed character and returns the formatted result for the
    /// whole input so far.
    pub fn input_digit(&mut self, character: char) -> String {
        self.typed.push(character);
        self.derive_output()
    }

    /// Removes the most recently typed character (backspace) and returns
    /// the formatted result for the remaining input. The shortened history
    /// is formatted from scratch; nothing is undone incrementally.
    pub fn remove_last(&mut self) -> String {
        self.typed.pop();
        self.derive_output()
    }

    /// Forgets all input, returning the formatter to its initial state.
    pub fn clear(&mut self) {
        self.typed.clear();
        self.locked_format = None;
    }

    fn derive_output(&mut self) -> String {
        let registry = Arc::clone(&self.registry);
        let typed = self.typed.clone();
        if typed.is_empty() {
            self.locked_format = None;
            return typed;
        }

        let (has_plus, digits) = match typed.strip_prefix(['+', '\u{FF0B}']) {
            Some(rest) => (true, rest),
            None => (false, typed.as_str()),
        };
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            // The user typed their own punctuation; echo the input verbatim.
            self.locked_format = None;
            return typed;
        }

        if has_plus {
            return match self.resolve_calling_code(digits) {
                CallingCodeProgress::Resolved {
                    code,
                    national_start,
                } => {
                    let mut code_buffer = itoa::Buffer::new();
                    let prefix = format!("+{} ", code_buffer.format(code));
                    self.format_international(&registry, code, &digits[national_start..], &prefix)
                }
                CallingCodeProgress::Pending | CallingCodeProgress::Unknown => {
                    self.locked_format = None;
                    typed
                }
            };
        }

        let Some(metadata) = registry.metadata_for_region(&self.default_region) else {
            trace!("no metadata for region {}; echoing input", self.default_region);
            self.locked_format = None;
            return typed;
        };

        if let Some((idd_digits, after_idd)) = self.split_idd(metadata, digits) {
            return match self.resolve_calling_code(after_idd) {
                CallingCodeProgress::Resolved {
                    code,
                    national_start,
                } => {
                    let mut code_buffer = itoa::Buffer::new();
                    let prefix = format!("{} {} ", idd_digits, code_buffer.format(code));
                    self.format_international(&registry, code, &after_idd[national_start..], &prefix)
                }
                CallingCodeProgress::Pending | CallingCodeProgress::Unknown => {
                    self.locked_format = None;
                    typed
                }
            };
        }

        // Nationally dialed: pull a literal national prefix off the front so
        // the templates see the national significant number.
        let national_prefix = metadata.national_prefix();
        let (prefix_extracted, national) = if !national_prefix.is_empty()
            && digits.len() > national_prefix.len()
            && digits.starts_with(national_prefix)
        {
            (true, &digits[national_prefix.len()..])
        } else {
            (false, digits)
        };
        self.format_with_templates(metadata, national, "", true, prefix_extracted, &typed)
    }

    fn format_international(
        &mut self,
        registry: &MetadataRegistry,
        country_calling_code: i32,
        national: &str,
        prefix: &str,
    ) -> String {
        let region_code = registry.main_region_for_calling_code(country_calling_code);
        let Some(metadata) =
            registry.metadata_for_region_or_calling_code(country_calling_code, region_code)
        else {
            self.locked_format = None;
            return format!("{}{}", prefix, national).trim_end().to_string();
        };
        // With no national digits yet the prefix alone is shown, without its
        // trailing separator.
        let fallback = format!("{}{}", prefix, national).trim_end().to_string();
        self.format_with_templates(metadata, national, prefix, false, false, &fallback)
    }

    /// Runs the template search over the complete national digit history and
    /// renders the result. `fallback` is returned unchanged when no template
    /// fits the digits typed so far.
    fn format_with_templates(
        &mut self,
        metadata: &PhoneMetadata,
        national: &str,
        prefix: &str,
        national_style: bool,
        prefix_extracted: bool,
        fallback: &str,
    ) -> String {
        let formats = &metadata.number_format;
        let candidates = self.narrow_candidates(formats, national, national_style, prefix_extracted);

        // The locked template is kept as long as it still fits; only when a
        // keystroke invalidates it does the search start over across all
        // candidates, using the whole digit history.
        let chosen = self
            .locked_format
            .filter(|index| *index < formats.len() && candidates.contains(index))
            .filter(|index| self.pattern_full_match(&formats[*index], national))
            .or_else(|| {
                candidates
                    .iter()
                    .copied()
                    .find(|index| self.pattern_full_match(&formats[*index], national))
            });

        let Some(index) = chosen else {
            self.locked_format = None;
            return fallback.to_string();
        };
        if self.locked_format != Some(index) {
            trace!("locking onto format template {}", index);
            self.locked_format = Some(index);
        }

        let number_format = &formats[index];
        let applied_national_prefix = if national_style && prefix_extracted {
            metadata.national_prefix()
        } else {
            ""
        };
        let style = if national_style {
            PhoneNumberFormat::National
        } else {
            PhoneNumberFormat::International
        };
        let Ok(rendered) = self.formatter.format_nsn_using_pattern_with_carrier(
            national,
            number_format,
            style,
            applied_national_prefix,
            None,
        ) else {
            return fallback.to_string();
        };

        // A national prefix that the plan renders through its formatting
        // rule is already part of the output; otherwise it is written back
        // in front, separated.
        if prefix_extracted && number_format.national_prefix_formatting_rule().is_empty() {
            return format!("{} {}", metadata.national_prefix(), rendered);
        }
        format!("{}{}", prefix, rendered)
    }

    /// The indices of the templates still compatible with the digits typed
    /// so far. Templates whose output would drop digits, or whose pattern
    /// branches, cannot format a growing number and are never candidates.
    fn narrow_candidates(
        &self,
        formats: &[NumberFormat],
        national: &str,
        national_style: bool,
        prefix_extracted: bool,
    ) -> Vec<usize> {
        let mut kept = Vec::new();
        for (index, number_format) in formats.iter().enumerate() {
            if number_format.pattern().contains('|') {
                continue;
            }
            if !self
                .reg_exps
                .eligible_format_pattern
                .full_match(number_format.format())
            {
                continue;
            }
            if national_style && !prefix_extracted {
                // Without the national prefix in the input, a template that
                // insists on rendering it would fabricate digits.
                let prefix_rule = number_format.national_prefix_formatting_rule();
                if !prefix_rule.is_empty()
                    && !number_format.national_prefix_optional_when_formatting
                    && !self
                        .reg_exps
                        .first_group_only_prefix_pattern
                        .full_match(prefix_rule)
                {
                    continue;
                }
            }
            let leading_digits = number_format.leading_digits_pattern();
            if !leading_digits.is_empty() && national.len() >= 3 {
                let narrowing_index = (national.len() - 3).min(leading_digits.len() - 1);
                let Ok(regex) = self
                    .reg_exps
                    .regexp_cache
                    .get_regex(&leading_digits[narrowing_index])
                else {
                    continue;
                };
                if regex.find_start(national).is_none() {
                    continue;
                }
            }
            kept.push(index);
        }
        kept
    }

    fn pattern_full_match(&self, number_format: &NumberFormat, national: &str) -> bool {
        match self.reg_exps.regexp_cache.get_regex(number_format.pattern()) {
            Ok(regex) => regex.full_match(national),
            Err(_) => false,
        }
    }

    /// Greedy calling-code extraction on a digit prefix: the longest known
    /// calling code wins. With fewer than three digits available, an unknown
    /// prefix may still grow into a known one, so it stays pending.
    fn resolve_calling_code(&self, digits: &str) -> CallingCodeProgress {
        if digits.is_empty() {
            return CallingCodeProgress::Pending;
        }
        if digits.starts_with('0') {
            return CallingCodeProgress::Unknown;
        }
        for length in (1..=MAX_LENGTH_COUNTRY_CODE.min(digits.len())).rev() {
            let Ok(code) = digits[..length].parse::<i32>() else {
                continue;
            };
            if self.registry.has_calling_code(code) {
                return CallingCodeProgress::Resolved {
                    code,
                    national_start: length,
                };
            }
        }
        if digits.len() >= MAX_LENGTH_COUNTRY_CODE {
            CallingCodeProgress::Unknown
        } else {
            CallingCodeProgress::Pending
        }
    }

    /// Splits the international dialing prefix off the typed digits, when
    /// they start with one and the digits after it could hold a calling
    /// code.
    fn split_idd<'a>(
        &self,
        metadata: &PhoneMetadata,
        digits: &'a str,
    ) -> Option<(&'a str, &'a str)> {
        let idd = metadata.international_prefix();
        if idd.is_empty() {
            return None;
        }
        let regex = self.reg_exps.regexp_cache.get_regex(idd).ok()?;
        let matched = regex.find_start(digits)?;
        if matched.end() == 0 {
            return None;
        }
        let after = &digits[matched.end()..];
        // Calling codes never start with zero, so this was a national number
        // that merely resembles the prefix.
        if after.starts_with('0') {
            return None;
        }
        Some((&digits[..matched.end()], after))
    }
}
