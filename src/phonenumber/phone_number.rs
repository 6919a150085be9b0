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

use super::builder::PhoneNumberBuilder;

/// How the country calling code of a parsed number was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountryCodeSource {
    Unspecified,
    /// The number began with an explicit `+` (or fullwidth variant).
    FromNumberWithPlusSign,
    /// The number began with the default region's international dialing
    /// prefix, e.g. `00` or `011`.
    FromNumberWithIdd,
    /// The number carried its calling code without a `+`.
    FromNumberWithoutPlusSign,
    /// No calling code was present; the default region supplied it.
    FromDefaultCountry,
}

/// A parsed phone number.
///
/// Values are immutable: they are created through [`PhoneNumberBuilder`]
/// and never modified afterwards. Equality and hashing cover *every* field,
/// including `raw_input`, `country_code_source`, `italian_leading_zero` and
/// `preferred_domestic_carrier_code` — two values denoting the same dialable
/// number but produced from different input, or with a field explicitly set
/// to its default versus left unset, are distinct values. Callers wanting a
/// "same subscriber" comparison must compare the dialable fields themselves.
///
/// Every optional field tracks presence explicitly (`Option`, not a sentinel
/// value), which is what keeps "unset" and "set to the default" apart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PhoneNumber {
    pub(super) country_code: Option<i32>,
    pub(super) national_number: Option<u64>,
    pub(super) extension: Option<String>,
    pub(super) italian_leading_zero: Option<bool>,
    pub(super) number_of_leading_zeros: Option<i32>,
    pub(super) raw_input: Option<String>,
    pub(super) country_code_source: Option<CountryCodeSource>,
    pub(super) preferred_domestic_carrier_code: Option<String>,
}

impl PhoneNumber {
    pub fn builder() -> PhoneNumberBuilder {
        PhoneNumberBuilder::new()
    }

    /// The country calling code, or 0 on a partial value that has none.
    pub fn country_code(&self) -> i32 {
        self.country_code.unwrap_or(0)
    }

    pub fn has_country_code(&self) -> bool {
        self.country_code.is_some()
    }

    /// The national significant number as an integer. Leading zeros are not
    /// representable here; see [`Self::italian_leading_zero`].
    pub fn national_number(&self) -> u64 {
        self.national_number.unwrap_or(0)
    }

    pub fn has_national_number(&self) -> bool {
        self.national_number.is_some()
    }

    pub fn extension(&self) -> &str {
        self.extension.as_deref().unwrap_or("")
    }

    pub fn has_extension(&self) -> bool {
        self.extension.is_some()
    }

    /// Whether the textual form of the national number carries a leading
    /// zero that the integer field cannot hold (e.g. Italian fixed lines).
    pub fn italian_leading_zero(&self) -> bool {
        self.italian_leading_zero.unwrap_or(false)
    }

    pub fn has_italian_leading_zero(&self) -> bool {
        self.italian_leading_zero.is_some()
    }

    /// How many leading zeros the textual form carries; meaningful only
    /// when [`Self::italian_leading_zero`] is set. Defaults to 1.
    pub fn number_of_leading_zeros(&self) -> i32 {
        self.number_of_leading_zeros.unwrap_or(1)
    }

    pub fn has_number_of_leading_zeros(&self) -> bool {
        self.number_of_leading_zeros.is_some()
    }

    /// The input the number was parsed from, verbatim. Populated only by
    /// the raw-input-keeping parse entry point.
    pub fn raw_input(&self) -> &str {
        self.raw_input.as_deref().unwrap_or("")
    }

    pub fn has_raw_input(&self) -> bool {
        self.raw_input.is_some()
    }

    pub fn country_code_source(&self) -> CountryCodeSource {
        self.country_code_source
            .unwrap_or(CountryCodeSource::Unspecified)
    }

    pub fn has_country_code_source(&self) -> bool {
        self.country_code_source.is_some()
    }

    pub fn preferred_domestic_carrier_code(&self) -> &str {
        self.preferred_domestic_carrier_code
            .as_deref()
            .unwrap_or("")
    }

    pub fn has_preferred_domestic_carrier_code(&self) -> bool {
        self.preferred_domestic_carrier_code.is_some()
    }

    /// A builder pre-populated with this value, for deriving a modified
    /// copy. The original is left untouched.
    pub fn to_builder(&self) -> PhoneNumberBuilder {
        PhoneNumberBuilder::from_number(self.clone())
    }
}
