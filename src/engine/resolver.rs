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

use super::classifier::Classifier;
use super::constants::{MAX_LENGTH_COUNTRY_CODE, MIN_LENGTH_FOR_NSN};
use super::errors::{LengthError, ParseError, ParseErrorInternal};
use super::extractor::NationalNumberExtractor;
use super::normalizer::Normalizer;
use super::regexps::EngineRegexps;
use crate::interfaces::MatcherApi;
use crate::metadata::{MetadataRegistry, PhoneMetadata};
use crate::phonenumber::CountryCodeSource;
use crate::regex_util::RegexConsume;

/// The outcome of country-code resolution: the calling code, how it was
/// written in the input, and the remaining (normalized) national number.
pub(crate) struct ResolvedCountryCode {
    pub country_code: i32,
    pub source: CountryCodeSource,
    pub national_number: String,
}

/// Works out which country calling code a number belongs to, consuming the
/// international dialing prefix or leading plus sign where present.
#[derive(Clone)]
pub(crate) struct CountryCodeResolver {
    registry: Arc<MetadataRegistry>,
    reg_exps: Arc<EngineRegexps>,
    normalizer: Normalizer,
    extractor: NationalNumberExtractor,
    classifier: Classifier,
    matcher: Arc<dyn MatcherApi>,
}

impl CountryCodeResolver {
    pub fn new(
        registry: Arc<MetadataRegistry>,
        reg_exps: Arc<EngineRegexps>,
        normalizer: Normalizer,
        extractor: NationalNumberExtractor,
        classifier: Classifier,
        matcher: Arc<dyn MatcherApi>,
    ) -> Self {
        Self {
            registry,
            reg_exps,
            normalizer,
            extractor,
            classifier,
            matcher,
        }
    }

    /// Resolves the country calling code of `number` (a possible number,
    /// still unnormalized) and returns it together with the rest of the
    /// digits. `default_metadata` is the numbering plan of the region the
    /// number was dialed from, when known.
    ///
    /// Resolution order: an explicit plus sign or the default region's
    /// international dialing prefix means the calling code follows and is
    /// matched greedily (longest known code of up to three digits wins);
    /// otherwise, if the digits happen to start with the default region's
    /// own calling code and read better with it removed, it is consumed;
    /// failing that, the default region's calling code applies without
    /// consuming anything.
    pub fn resolve(
        &self,
        number: &str,
        default_metadata: Option<&PhoneMetadata>,
    ) -> Result<ResolvedCountryCode, ParseErrorInternal> {
        let possible_idd_prefix = default_metadata
            .map(PhoneMetadata::international_prefix)
            .unwrap_or_default();

        let mut full_number = number.to_string();
        let source =
            self.strip_international_prefix_and_normalize(&mut full_number, possible_idd_prefix)?;

        if source != CountryCodeSource::FromDefaultCountry {
            if full_number.len() <= MIN_LENGTH_FOR_NSN {
                return Err(ParseError::TooShortAfterIdd.into());
            }
            if let Some(resolved) = self.extract_calling_code(&full_number, source) {
                return Ok(resolved);
            }
            // A plus sign or IDD was written, so the digits after it must
            // start with a known calling code.
            return Err(ParseError::InvalidCountryCode.into());
        }

        let Some(metadata) = default_metadata else {
            return Err(ParseError::InvalidCountryCode.into());
        };

        // No plus sign and no IDD, but people sometimes write the calling
        // code anyway. Consume it when the number reads better without it.
        let default_code = metadata.country_code();
        let mut code_buffer = itoa::Buffer::new();
        let code_digits = code_buffer.format(default_code);
        if let Some(rest) = full_number.strip_prefix(code_digits) {
            let general_desc = &metadata.general_desc;
            let mut potential_national = rest.to_string();
            self.extractor
                .maybe_strip_national_prefix_and_carrier_code(&mut potential_national, metadata)?;

            let stripped_matches = self
                .matcher
                .match_national_number(&potential_national, general_desc, false);
            let unstripped_matches = self
                .matcher
                .match_national_number(&full_number, general_desc, false);
            let unstripped_too_long = matches!(
                self.classifier
                    .test_number_length_with_unknown_type(&full_number, metadata),
                Err(LengthError::TooLong)
            );
            if (!unstripped_matches && stripped_matches) || unstripped_too_long {
                trace!(
                    "treating leading {} as the calling code of the default region",
                    code_digits
                );
                return Ok(ResolvedCountryCode {
                    country_code: default_code,
                    source: CountryCodeSource::FromNumberWithoutPlusSign,
                    national_number: potential_national,
                });
            }
        }

        Ok(ResolvedCountryCode {
            country_code: default_code,
            source: CountryCodeSource::FromDefaultCountry,
            national_number: full_number,
        })
    }

    /// Strips a leading plus sign or the given international dialing prefix
    /// from `number`, normalizing it in the process, and reports which of
    /// the two was found.
    fn strip_international_prefix_and_normalize(
        &self,
        number: &mut String,
        possible_idd_prefix: &str,
    ) -> Result<CountryCodeSource, ParseErrorInternal> {
        if let Some(after_plus) = self.reg_exps.plus_chars_pattern.consume_start(number) {
            *number = self.normalizer.normalize(after_plus);
            return Ok(CountryCodeSource::FromNumberWithPlusSign);
        }

        *number = self.normalizer.normalize(number);
        if possible_idd_prefix.is_empty() {
            return Ok(CountryCodeSource::FromDefaultCountry);
        }
        let idd_regex = self.reg_exps.regexp_cache.get_regex(possible_idd_prefix)?;
        if let Some(idd_match) = idd_regex.find_start(number) {
            // A zero right after the IDD cannot start a calling code, so the
            // match was a false positive (e.g. a national number that merely
            // resembles the prefix).
            let rest = &number[idd_match.end()..];
            if rest.chars().find(char::is_ascii_digit) != Some('0') {
                let match_end = idd_match.end();
                number.drain(..match_end);
                return Ok(CountryCodeSource::FromNumberWithIdd);
            }
        }
        Ok(CountryCodeSource::FromDefaultCountry)
    }

    /// Greedily matches the longest known calling code (up to three digits)
    /// at the start of `full_number`.
    fn extract_calling_code(
        &self,
        full_number: &str,
        source: CountryCodeSource,
    ) -> Option<ResolvedCountryCode> {
        // Calling codes never start with zero.
        if full_number.starts_with('0') {
            return None;
        }
        for length in (1..=MAX_LENGTH_COUNTRY_CODE).rev() {
            if full_number.len() < length {
                continue;
            }
            let candidate: i32 = match full_number[..length].parse() {
                Ok(code) => code,
                Err(_) => continue,
            };
            if self.registry.has_calling_code(candidate) {
                return Some(ResolvedCountryCode {
                    country_code: candidate,
                    source,
                    national_number: full_number[length..].to_string(),
                });
            }
        }
        None
    }
}
