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

use fast_cat::concat_str;
use log::warn;

use super::constants::{DEFAULT_EXTN_PREFIX, PLUS_SIGN, RFC3966_EXTN_PREFIX, RFC3966_PREFIX};
use super::enums::PhoneNumberFormat;
use super::national_significant_number;
use super::regexps::EngineRegexps;
use crate::metadata::{MetadataRegistry, NumberFormat, PhoneMetadata};
use crate::phonenumber::PhoneNumber;
use crate::regex_util::{RegexConsume, RegexFullMatch};
use crate::regexp_cache::InvalidRegexError;

/// Renders [`PhoneNumber`] values into display strings by applying the
/// owning numbering plan's format templates.
#[derive(Clone)]
pub(crate) struct Formatter {
    registry: Arc<MetadataRegistry>,
    reg_exps: Arc<EngineRegexps>,
}

impl Formatter {
    pub fn new(registry: Arc<MetadataRegistry>, reg_exps: Arc<EngineRegexps>) -> Self {
        Self { registry, reg_exps }
    }

    /// Formats a number in the requested style. A number whose calling code
    /// is not served by any plan is rendered as its bare national
    /// significant number.
    pub fn format(
        &self,
        number: &PhoneNumber,
        format: PhoneNumberFormat,
    ) -> Result<String, InvalidRegexError> {
        if number.national_number() == 0 && !number.raw_input().is_empty() {
            // Nothing was parsed out of the input; the raw input, when kept,
            // is the most useful thing we can show.
            return Ok(number.raw_input().to_string());
        }

        let country_calling_code = number.country_code();
        let mut formatted = national_significant_number(number);
        if format == PhoneNumberFormat::E164 {
            // E164 needs no formatting rules, only the calling code.
            self.prefix_with_country_calling_code(
                country_calling_code,
                PhoneNumberFormat::E164,
                &mut formatted,
            );
            return Ok(formatted);
        }
        if !self.registry.has_calling_code(country_calling_code) {
            return Ok(formatted);
        }

        let region_code = self
            .registry
            .main_region_for_calling_code(country_calling_code);
        let Some(metadata) = self
            .registry
            .metadata_for_region_or_calling_code(country_calling_code, region_code)
        else {
            return Ok(formatted);
        };
        let national_significant = formatted;
        let mut formatted = self.format_nsn(&national_significant, metadata, format)?;
        formatted.push_str(&self.formatted_extension(number, metadata, format));
        self.prefix_with_country_calling_code(country_calling_code, format, &mut formatted);
        Ok(formatted)
    }

    /// National format with an explicit carrier selection code spliced into
    /// the template, for plans that dial carriers this way (e.g. Colombia,
    /// Brazil).
    pub fn format_national_number_with_carrier_code(
        &self,
        number: &PhoneNumber,
        carrier_code: &str,
    ) -> Result<String, InvalidRegexError> {
        let country_calling_code = number.country_code();
        let national_significant = national_significant_number(number);
        if !self.registry.has_calling_code(country_calling_code) {
            return Ok(national_significant);
        }
        let region_code = self
            .registry
            .main_region_for_calling_code(country_calling_code);
        let Some(metadata) = self
            .registry
            .metadata_for_region_or_calling_code(country_calling_code, region_code)
        else {
            return Ok(national_significant);
        };
        let mut formatted = self.format_nsn_with_carrier(
            &national_significant,
            metadata,
            PhoneNumberFormat::National,
            Some(carrier_code),
        )?;
        formatted.push_str(&self.formatted_extension(
            number,
            metadata,
            PhoneNumberFormat::National,
        ));
        Ok(formatted)
    }

    /// Like [`Self::format_national_number_with_carrier_code`], but the
    /// carrier code stored on the number wins over `fallback_carrier_code`.
    /// A stored empty carrier code means "no carrier", on purpose.
    pub fn format_national_with_preferred_carrier_code(
        &self,
        number: &PhoneNumber,
        fallback_carrier_code: &str,
    ) -> Result<String, InvalidRegexError> {
        let carrier_code = if number.has_preferred_domestic_carrier_code() {
            number.preferred_domestic_carrier_code()
        } else {
            fallback_carrier_code
        };
        self.format_national_number_with_carrier_code(number, carrier_code)
    }

    /// Formats a number for dialing from `calling_from`: national format
    /// within the same plan, and otherwise the international format behind
    /// the dialing region's out-of-country prefix.
    pub fn format_out_of_country_calling_number(
        &self,
        number: &PhoneNumber,
        calling_from: &str,
    ) -> Result<String, InvalidRegexError> {
        let Some(metadata_calling_from) = self.registry.metadata_for_region(calling_from) else {
            warn!(
                "trying to format for dialing from unknown region {}; using the international format",
                calling_from
            );
            return self.format(number, PhoneNumberFormat::International);
        };

        let country_calling_code = number.country_code();
        let national_significant = national_significant_number(number);
        if !self.registry.has_calling_code(country_calling_code) {
            return Ok(national_significant);
        }

        if country_calling_code == metadata_calling_from.country_code() {
            if country_calling_code == 1 {
                // Within the North American plan numbers are dialed across
                // countries as 1 + ten digits.
                let national = self.format(number, PhoneNumberFormat::National)?;
                return Ok(concat_str!("1 ", &national));
            }
            return self.format(number, PhoneNumberFormat::National);
        }

        let idd_prefix = metadata_calling_from.international_prefix();
        // Regions whose IDD pattern covers several prefixes get the
        // preferred one written out, or fall back to the "+" form.
        let international_prefix_for_formatting = if self
            .reg_exps
            .single_international_prefix
            .full_match(idd_prefix)
        {
            idd_prefix
        } else {
            metadata_calling_from.preferred_international_prefix()
        };

        let region_code = self
            .registry
            .main_region_for_calling_code(country_calling_code);
        let Some(metadata) = self
            .registry
            .metadata_for_region_or_calling_code(country_calling_code, region_code)
        else {
            return Ok(national_significant);
        };
        let mut formatted = self.format_nsn(
            &national_significant,
            metadata,
            PhoneNumberFormat::International,
        )?;
        formatted.push_str(&self.formatted_extension(
            number,
            metadata,
            PhoneNumberFormat::International,
        ));

        if international_prefix_for_formatting.is_empty() {
            self.prefix_with_country_calling_code(
                country_calling_code,
                PhoneNumberFormat::International,
                &mut formatted,
            );
            return Ok(formatted);
        }
        let mut code_buffer = itoa::Buffer::new();
        let code_digits = code_buffer.format(country_calling_code);
        Ok(concat_str!(
            international_prefix_for_formatting,
            " ",
            code_digits,
            " ",
            &formatted
        ))
    }

    pub fn format_nsn(
        &self,
        national_significant: &str,
        metadata: &PhoneMetadata,
        format: PhoneNumberFormat,
    ) -> Result<String, InvalidRegexError> {
        self.format_nsn_with_carrier(national_significant, metadata, format, None)
    }

    fn format_nsn_with_carrier(
        &self,
        national_significant: &str,
        metadata: &PhoneMetadata,
        format: PhoneNumberFormat,
        carrier_code: Option<&str>,
    ) -> Result<String, InvalidRegexError> {
        // Plans without dedicated international templates reuse the
        // national ones.
        let available_formats = if metadata.intl_number_format.is_empty()
            || format == PhoneNumberFormat::National
        {
            &metadata.number_format
        } else {
            &metadata.intl_number_format
        };

        match self.choose_formatting_pattern(available_formats, national_significant)? {
            Some(number_format) => self.format_nsn_using_pattern_with_carrier(
                national_significant,
                number_format,
                format,
                metadata.national_prefix(),
                carrier_code,
            ),
            None => Ok(national_significant.to_string()),
        }
    }

    /// Picks the first template whose leading-digits pattern and full
    /// pattern both match the number. Only the last (most refined)
    /// leading-digits pattern of each template is consulted.
    pub fn choose_formatting_pattern<'a>(
        &self,
        available_formats: &'a [NumberFormat],
        national_significant: &str,
    ) -> Result<Option<&'a NumberFormat>, InvalidRegexError> {
        for number_format in available_formats {
            let leading_digits_ok = match number_format.leading_digits_pattern().last() {
                Some(leading_digits) => self
                    .reg_exps
                    .regexp_cache
                    .get_regex(leading_digits)?
                    .matches_start(national_significant),
                None => true,
            };
            if !leading_digits_ok {
                continue;
            }
            let pattern = self
                .reg_exps
                .regexp_cache
                .get_regex(number_format.pattern())?;
            if pattern.full_match(national_significant) {
                return Ok(Some(number_format));
            }
        }
        Ok(None)
    }

    /// Applies one format template. In the national style the template's
    /// first group slot is first rewritten by the carrier-code rule or the
    /// national-prefix rule, when the plan declares one.
    pub fn format_nsn_using_pattern_with_carrier(
        &self,
        national_significant: &str,
        number_format: &NumberFormat,
        format: PhoneNumberFormat,
        national_prefix: &str,
        carrier_code: Option<&str>,
    ) -> Result<String, InvalidRegexError> {
        let pattern = self
            .reg_exps
            .regexp_cache
            .get_regex(number_format.pattern())?;

        let mut format_rule = number_format.format().to_string();
        if format == PhoneNumberFormat::National {
            let carrier = carrier_code.filter(|code| !code.is_empty());
            let carrier_rule = number_format.domestic_carrier_code_formatting_rule();
            let prefix_rule = number_format.national_prefix_formatting_rule();
            if let (Some(carrier), false) = (carrier, carrier_rule.is_empty()) {
                let carrier_rule = self
                    .reg_exps
                    .carrier_code_pattern
                    .replace(carrier_rule, carrier)
                    .into_owned();
                format_rule = self
                    .reg_exps
                    .first_group_capturing_pattern
                    .replace(&format_rule, carrier_rule.as_str())
                    .into_owned();
            } else if !national_prefix.is_empty() && !prefix_rule.is_empty() {
                let prefix_rule = prefix_rule
                    .replace("$NP", national_prefix)
                    .replace("$FG", "$1");
                format_rule = self
                    .reg_exps
                    .first_group_capturing_pattern
                    .replace(&format_rule, prefix_rule.as_str())
                    .into_owned();
            }
        }

        let mut formatted = pattern
            .replace(national_significant, format_rule.as_str())
            .into_owned();
        if format == PhoneNumberFormat::Rfc3966 {
            // RFC 3966 allows hyphens only; grouping punctuation from the
            // template is rewritten.
            if let Some(leading_separators) =
                self.reg_exps.separator_pattern.find_start(&formatted)
            {
                let end = leading_separators.end();
                formatted.drain(..end);
            }
            formatted = self
                .reg_exps
                .separator_pattern
                .replace_all(&formatted, "-")
                .into_owned();
        }
        Ok(formatted)
    }

    /// The extension suffix in the style's notation, or an empty string.
    pub fn formatted_extension(
        &self,
        number: &PhoneNumber,
        metadata: &PhoneMetadata,
        format: PhoneNumberFormat,
    ) -> String {
        let extension = number.extension();
        if extension.is_empty() {
            return String::new();
        }
        if format == PhoneNumberFormat::Rfc3966 {
            return concat_str!(RFC3966_EXTN_PREFIX, extension);
        }
        if metadata.has_preferred_extn_prefix() {
            concat_str!(metadata.preferred_extn_prefix(), extension)
        } else {
            concat_str!(DEFAULT_EXTN_PREFIX, extension)
        }
    }

    /// Puts the calling code (and style-specific lead-in) in front of an
    /// already nationally-formatted number.
    pub fn prefix_with_country_calling_code(
        &self,
        country_calling_code: i32,
        format: PhoneNumberFormat,
        formatted: &mut String,
    ) {
        let mut code_buffer = itoa::Buffer::new();
        let code_digits = code_buffer.format(country_calling_code);
        match format {
            PhoneNumberFormat::E164 => {
                *formatted = concat_str!(PLUS_SIGN, code_digits, formatted);
            }
            PhoneNumberFormat::International => {
                *formatted = concat_str!(PLUS_SIGN, code_digits, " ", formatted);
            }
            PhoneNumberFormat::Rfc3966 => {
                *formatted = concat_str!(RFC3966_PREFIX, PLUS_SIGN, code_digits, "-", formatted);
            }
            PhoneNumberFormat::National => {}
        }
    }
}
