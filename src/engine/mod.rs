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

//! The engine proper: the parsing pipeline and the operations built on it.
//!
//! [`PhoneNumberUtil`] is the entry point; the pipeline stages behind it
//! (normalizer, country-code resolver, national-number extractor,
//! classifier, formatter) are separate values so each can be reasoned about
//! and tested on its own, all sharing one compiled-regex pool and one
//! metadata registry.

mod asyoutype;
mod classifier;
mod constants;
mod enums;
mod errors;
mod extractor;
mod formatter;
mod normalizer;
mod regexps;
mod resolver;

use std::sync::Arc;

use log::error;

pub use asyoutype::AsYouTypeFormatter;
pub use enums::{NumberLengthType, PhoneNumberFormat, PhoneNumberType};
pub use errors::{LengthError, ParseError};

use classifier::Classifier;
use constants::{MAX_LENGTH_FOR_NSN, MIN_LENGTH_FOR_NSN, REGION_CODE_FOR_NON_GEO_ENTITY};
use errors::ParseErrorInternal;
use extractor::NationalNumberExtractor;
use formatter::Formatter;
use normalizer::Normalizer;
use regexps::EngineRegexps;
use resolver::CountryCodeResolver;

use crate::i18n::RegionCode;
use crate::interfaces::MatcherApi;
use crate::metadata::{MetadataRegistry, PhoneMetadata};
use crate::phonenumber::{PhoneNumber, PhoneNumberBuilder};
use crate::regex_based_matcher::RegexBasedMatcher;
use crate::regex_util::RegexConsume;

/// The national significant number as a digit string, leading zeros
/// restored from the presence fields the integer cannot hold.
pub(crate) fn national_significant_number(number: &PhoneNumber) -> String {
    let mut national_number = String::new();
    if number.italian_leading_zero() && number.number_of_leading_zeros() > 0 {
        national_number = "0".repeat(number.number_of_leading_zeros() as usize);
    }
    let mut buffer = itoa::Buffer::new();
    national_number.push_str(buffer.format(number.national_number()));
    national_number
}

/// Leading zeros survive parsing through two fields: a flag that at least
/// one is present, and a count when there is more than one. The last digit
/// is never counted as a zero prefix, so an all-zero number keeps one digit.
fn set_italian_leading_zeros_if_present(national_number: &str, builder: &mut PhoneNumberBuilder) {
    if national_number.len() > 1 && national_number.starts_with('0') {
        builder.set_italian_leading_zero(true);
        let mut zeros = 0;
        for character in national_number[..national_number.len() - 1].chars() {
            if character == '0' {
                zeros += 1;
            } else {
                break;
            }
        }
        if zeros > 1 {
            builder.set_number_of_leading_zeros(zeros);
        }
    }
}

/// The engine's entry point: parses free-form input into [`PhoneNumber`]
/// values and validates, classifies and formats them against the numbering
/// plans in its registry.
///
/// One instance serves any number of threads; all state is immutable after
/// construction.
pub struct PhoneNumberUtil {
    registry: Arc<MetadataRegistry>,
    reg_exps: Arc<EngineRegexps>,
    normalizer: Normalizer,
    resolver: CountryCodeResolver,
    extractor: NationalNumberExtractor,
    classifier: Classifier,
    formatter: Formatter,
}

impl PhoneNumberUtil {
    pub fn new(registry: MetadataRegistry) -> Self {
        Self::with_registry(Arc::new(registry))
    }

    /// Builds an engine sharing an already-shared registry, e.g. one
    /// obtained from [`MetadataRegistry::shared_with`].
    pub fn with_registry(registry: Arc<MetadataRegistry>) -> Self {
        let reg_exps = Arc::new(EngineRegexps::new());
        let matcher: Arc<dyn MatcherApi> = Arc::new(RegexBasedMatcher::new());
        let normalizer = Normalizer::new(Arc::clone(&reg_exps));
        let extractor = NationalNumberExtractor::new(Arc::clone(&reg_exps), Arc::clone(&matcher));
        let classifier = Classifier::new(Arc::clone(&matcher));
        let resolver = CountryCodeResolver::new(
            Arc::clone(&registry),
            Arc::clone(&reg_exps),
            normalizer.clone(),
            extractor.clone(),
            classifier.clone(),
            Arc::clone(&matcher),
        );
        let formatter = Formatter::new(Arc::clone(&registry), Arc::clone(&reg_exps));
        Self {
            registry,
            reg_exps,
            normalizer,
            resolver,
            extractor,
            classifier,
            formatter,
        }
    }

    /// Parses free-form input into a phone number. `default_region` supplies
    /// the numbering plan for input that carries no calling code of its own;
    /// input starting with `+` parses without it.
    pub fn parse(&self, input: &str, default_region: Option<&str>) -> Result<PhoneNumber, ParseError> {
        self.parse_helper(input, default_region, false)
            .map_err(ParseErrorInternal::into_public)
    }

    /// Like [`Self::parse`], additionally recording the verbatim input, how
    /// the calling code was written, and any carrier code dialed before the
    /// number. Two numbers parsed from differently-written input compare
    /// unequal under this entry point.
    pub fn parse_and_keep_raw_input(
        &self,
        input: &str,
        default_region: Option<&str>,
    ) -> Result<PhoneNumber, ParseError> {
        self.parse_helper(input, default_region, true)
            .map_err(ParseErrorInternal::into_public)
    }

    fn parse_helper(
        &self,
        input: &str,
        default_region: Option<&str>,
        keep_raw_input: bool,
    ) -> Result<PhoneNumber, ParseErrorInternal> {
        let mut possible_number = self.normalizer.extract_possible_number(input)?;
        if !self.normalizer.is_viable_phone_number(&possible_number) {
            return Err(ParseError::NotANumber.into());
        }

        let default_metadata =
            default_region.and_then(|region| self.registry.metadata_for_region(region));
        let starts_with_plus = self
            .reg_exps
            .plus_chars_pattern
            .find_start(&possible_number)
            .is_some();
        if default_metadata.is_none() && !starts_with_plus {
            // Without a plus sign the calling code can only come from the
            // default region, and there isn't a usable one.
            return Err(ParseError::InvalidCountryCode.into());
        }

        let mut builder = PhoneNumber::builder();
        if keep_raw_input {
            builder.set_raw_input(input);
        }

        if let Some(extension) = self.normalizer.maybe_strip_extension(&mut possible_number) {
            builder.set_extension(extension);
        }

        let resolved = self.resolver.resolve(&possible_number, default_metadata)?;
        if keep_raw_input {
            builder.set_country_code_source(resolved.source);
        }
        let country_code = resolved.country_code;
        builder.set_country_code(country_code);

        // When the number turned out to belong to a different plan than the
        // default region's (explicit calling code), switch metadata.
        let metadata = match default_metadata {
            Some(default_metadata) if default_metadata.country_code() == country_code => {
                Some(default_metadata)
            }
            _ => {
                let region = self.registry.main_region_for_calling_code(country_code);
                self.registry
                    .metadata_for_region_or_calling_code(country_code, region)
            }
        };

        let mut national_number = resolved.national_number;
        if national_number.len() < MIN_LENGTH_FOR_NSN {
            return Err(ParseError::TooShortNsn.into());
        }

        if let Some(metadata) = metadata {
            let mut potential_national = national_number.clone();
            let carrier_code = self
                .extractor
                .maybe_strip_national_prefix_and_carrier_code(&mut potential_national, metadata)?;
            // The strip holds only if it leaves a plausible number behind;
            // otherwise those digits belonged to the number itself.
            let still_long_enough = potential_national.len() >= MIN_LENGTH_FOR_NSN
                && !matches!(
                    self.classifier
                        .test_number_length_with_unknown_type(&potential_national, metadata),
                    Err(LengthError::TooShort)
                );
            if still_long_enough {
                national_number = potential_national;
                if keep_raw_input {
                    if let Some(carrier_code) = carrier_code {
                        builder.set_preferred_domestic_carrier_code(carrier_code);
                    }
                }
            }
        }

        if national_number.len() < MIN_LENGTH_FOR_NSN {
            return Err(ParseError::TooShortNsn.into());
        }
        if national_number.len() > MAX_LENGTH_FOR_NSN {
            return Err(ParseError::TooLong.into());
        }
        if let Some(metadata) = metadata {
            match self
                .classifier
                .test_number_length_with_unknown_type(&national_number, metadata)
            {
                Err(LengthError::TooShort) => return Err(ParseError::TooShortNsn.into()),
                Err(LengthError::TooLong) => return Err(ParseError::TooLong.into()),
                // A length between the plan's bounds that no range uses
                // still parses; validity is reported separately.
                _ => {}
            }
        }

        set_italian_leading_zeros_if_present(&national_number, &mut builder);
        let national_value: u64 = national_number
            .parse()
            .map_err(|_| ParseErrorInternal::from(ParseError::NotANumber))?;
        builder.set_national_number(national_value);
        builder
            .build()
            .map_err(|_| ParseErrorInternal::from(ParseError::NotANumber))
    }

    /// Renders a number in the requested style. Formatting always produces a
    /// string: a number whose calling code no plan serves comes back as its
    /// bare digits, and a broken metadata pattern degrades to the E.164 form
    /// after logging.
    pub fn format(&self, number: &PhoneNumber, format: PhoneNumberFormat) -> String {
        match self.formatter.format(number, format) {
            Ok(formatted) => formatted,
            Err(err) => {
                error!("formatting failed on a broken metadata pattern: {}", err);
                let mut formatted = national_significant_number(number);
                self.formatter.prefix_with_country_calling_code(
                    number.country_code(),
                    PhoneNumberFormat::E164,
                    &mut formatted,
                );
                formatted
            }
        }
    }

    /// Formats a number for dialing from the given region: national format
    /// when dialing within the number's own plan, and otherwise the
    /// region's international dialing prefix followed by the international
    /// format.
    pub fn format_out_of_country_calling_number(
        &self,
        number: &PhoneNumber,
        calling_from: &str,
    ) -> String {
        match self
            .formatter
            .format_out_of_country_calling_number(number, calling_from)
        {
            Ok(formatted) => formatted,
            Err(err) => {
                error!("formatting failed on a broken metadata pattern: {}", err);
                self.format(number, PhoneNumberFormat::International)
            }
        }
    }

    /// National format with a carrier selection code spliced in, for plans
    /// whose templates define a carrier-code slot.
    pub fn format_national_number_with_carrier_code(
        &self,
        number: &PhoneNumber,
        carrier_code: &str,
    ) -> String {
        match self
            .formatter
            .format_national_number_with_carrier_code(number, carrier_code)
        {
            Ok(formatted) => formatted,
            Err(err) => {
                error!("formatting failed on a broken metadata pattern: {}", err);
                self.format(number, PhoneNumberFormat::National)
            }
        }
    }

    /// Like [`Self::format_national_number_with_carrier_code`], preferring
    /// the carrier code stored on the number (by the raw-input-keeping
    /// parse) over `fallback_carrier_code`.
    pub fn format_national_number_with_preferred_carrier_code(
        &self,
        number: &PhoneNumber,
        fallback_carrier_code: &str,
    ) -> String {
        match self
            .formatter
            .format_national_with_preferred_carrier_code(number, fallback_carrier_code)
        {
            Ok(formatted) => formatted,
            Err(err) => {
                error!("formatting failed on a broken metadata pattern: {}", err);
                self.format(number, PhoneNumberFormat::National)
            }
        }
    }

    /// The national significant number as a digit string, leading zeros
    /// included.
    pub fn get_national_significant_number(&self, number: &PhoneNumber) -> String {
        national_significant_number(number)
    }

    /// Whether the number is valid under the numbering plan of the region
    /// it belongs to. A valid number can still classify as
    /// [`PhoneNumberType::Unknown`]: validity is about the plan's general
    /// shape, not about a type range claiming the number.
    pub fn is_valid_number(&self, number: &PhoneNumber) -> bool {
        let Some(region_code) = self.get_region_code_for_number(number) else {
            return false;
        };
        self.is_valid_number_for_region(number, region_code)
    }

    /// Validity against one specific region's plan. False when the region
    /// does not serve the number's calling code at all.
    pub fn is_valid_number_for_region(&self, number: &PhoneNumber, region_code: &str) -> bool {
        let country_code = number.country_code();
        let Some(metadata) = self
            .registry
            .metadata_for_region_or_calling_code(country_code, region_code)
        else {
            return false;
        };
        if region_code != REGION_CODE_FOR_NON_GEO_ENTITY
            && metadata.country_code() != country_code
        {
            return false;
        }
        let national_number = national_significant_number(number);
        self.classifier
            .is_structurally_valid(&national_number, metadata)
    }

    /// Classifies a number by the plan ranges it matches.
    pub fn get_number_type(&self, number: &PhoneNumber) -> PhoneNumberType {
        let Some(region_code) = self.get_region_code_for_number(number) else {
            return PhoneNumberType::Unknown;
        };
        let Some(metadata) = self
            .registry
            .metadata_for_region_or_calling_code(number.country_code(), region_code)
        else {
            return PhoneNumberType::Unknown;
        };
        let national_number = national_significant_number(number);
        self.classifier.number_type(&national_number, metadata)
    }

    /// Fast plausibility check on digit count alone; cheaper than
    /// [`Self::is_valid_number`] and accepting of local-only lengths.
    pub fn is_possible_number(&self, number: &PhoneNumber) -> bool {
        self.is_possible_number_with_reason(number).is_ok()
    }

    /// Digit-count check with the reason a number fails it.
    pub fn is_possible_number_with_reason(
        &self,
        number: &PhoneNumber,
    ) -> Result<NumberLengthType, LengthError> {
        let country_code = number.country_code();
        if !self.registry.has_calling_code(country_code) {
            return Err(LengthError::InvalidCountryCode);
        }
        let region_code = self.registry.main_region_for_calling_code(country_code);
        let Some(metadata) = self
            .registry
            .metadata_for_region_or_calling_code(country_code, region_code)
        else {
            return Err(LengthError::InvalidCountryCode);
        };
        let national_number = national_significant_number(number);
        self.classifier
            .test_number_length_with_unknown_type(&national_number, metadata)
    }

    /// The region a number belongs to. With several regions sharing the
    /// calling code, their leading-digits patterns (or, failing those, which
    /// region's ranges recognize the number) decide; `None` when nothing
    /// does.
    pub fn get_region_code_for_number(&self, number: &PhoneNumber) -> Option<&str> {
        let country_code = number.country_code();
        let regions = self.registry.regions_for_calling_code(country_code);
        match regions {
            [] => None,
            [only] => Some(only.as_str()),
            regions => {
                let national_number = national_significant_number(number);
                for region in regions {
                    let Some(metadata) = self.registry.metadata_for_region(region) else {
                        continue;
                    };
                    if metadata.has_leading_digits() {
                        match self
                            .reg_exps
                            .regexp_cache
                            .get_regex(metadata.leading_digits())
                        {
                            Ok(regex) => {
                                if regex.find_start(&national_number).is_some() {
                                    return Some(region.as_str());
                                }
                            }
                            Err(err) => {
                                error!("broken leading-digits pattern for {}: {}", region, err);
                            }
                        }
                    } else if self.classifier.number_type(&national_number, metadata)
                        != PhoneNumberType::Unknown
                    {
                        return Some(region.as_str());
                    }
                }
                None
            }
        }
    }

    /// The dataset-designated main region for a calling code, e.g. `"US"`
    /// for 1, or `"ZZ"` for an unknown calling code.
    pub fn get_region_code_for_country_code(&self, country_calling_code: i32) -> &str {
        self.registry
            .main_region_for_calling_code(country_calling_code)
    }

    /// The calling code a region dials under, or 0 for an unknown region.
    pub fn get_country_code_for_region(&self, region_code: &str) -> i32 {
        self.registry
            .metadata_for_region(region_code)
            .map(PhoneMetadata::country_code)
            .unwrap_or(0)
    }

    pub fn get_supported_regions(&self) -> impl Iterator<Item = &str> {
        self.registry.supported_regions()
    }

    pub fn get_supported_calling_codes(&self) -> impl Iterator<Item = i32> + '_ {
        self.registry.supported_calling_codes()
    }

    pub fn get_supported_global_network_calling_codes(&self) -> impl Iterator<Item = i32> + '_ {
        self.registry.supported_global_network_calling_codes()
    }

    /// The number types a region's plan assigns at least one range to.
    /// Empty for an unknown region.
    pub fn get_supported_types_for_region(&self, region_code: &str) -> Vec<PhoneNumberType> {
        self.registry
            .metadata_for_region(region_code)
            .map(classifier::supported_types_for_metadata)
            .unwrap_or_default()
    }

    /// Whether this is a region the registry has a plan for (and not the
    /// `001` pseudo-region of non-geographical calling codes).
    pub fn is_valid_region_code(&self, region_code: &str) -> bool {
        region_code != RegionCode::get_unknown() && self.registry.is_valid_region_code(region_code)
    }

    /// A live formatter for one input field in the given region.
    pub fn get_as_you_type_formatter(&self, region_code: &str) -> AsYouTypeFormatter {
        AsYouTypeFormatter::new(
            Arc::clone(&self.registry),
            Arc::clone(&self.reg_exps),
            region_code,
        )
    }
}
