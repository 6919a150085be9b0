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

use thiserror::Error;

use super::phone_number::{CountryCodeSource, PhoneNumber};

/// Returned by [`PhoneNumberBuilder::build`] when a required field is
/// missing or structurally out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IncompleteNumberError {
    #[error("a complete phone number needs a positive country calling code")]
    MissingCountryCode,
    #[error("a complete phone number needs a national number")]
    MissingNationalNumber,
}

/// Mutable staging area for constructing [`PhoneNumber`] values.
///
/// The parsing pipeline fills fields in as it learns them, so the builder
/// supports two finishing modes: [`Self::build`] insists on the fields a
/// complete number needs (positive country code and a national number),
/// while [`Self::build_partial`] hands out whatever has been set so far —
/// used for intermediate values such as a raw-input-only record.
///
/// The builder performs structural checks only; whether the number is valid
/// under any numbering plan is the validator's business, not the builder's.
#[derive(Debug, Clone, Default)]
pub struct PhoneNumberBuilder {
    number: PhoneNumber,
}

impl PhoneNumberBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub(super) fn from_number(number: PhoneNumber) -> Self {
        Self { number }
    }

    pub fn set_country_code(&mut self, country_code: i32) -> &mut Self {
        self.number.country_code = Some(country_code);
        self
    }

    pub fn set_national_number(&mut self, national_number: u64) -> &mut Self {
        self.number.national_number = Some(national_number);
        self
    }

    pub fn set_extension(&mut self, extension: impl Into<String>) -> &mut Self {
        self.number.extension = Some(extension.into());
        self
    }

    pub fn clear_extension(&mut self) -> &mut Self {
        self.number.extension = None;
        self
    }

    pub fn set_italian_leading_zero(&mut self, italian_leading_zero: bool) -> &mut Self {
        self.number.italian_leading_zero = Some(italian_leading_zero);
        self
    }

    pub fn set_number_of_leading_zeros(&mut self, number_of_leading_zeros: i32) -> &mut Self {
        self.number.number_of_leading_zeros = Some(number_of_leading_zeros);
        self
    }

    pub fn set_raw_input(&mut self, raw_input: impl Into<String>) -> &mut Self {
        self.number.raw_input = Some(raw_input.into());
        self
    }

    pub fn clear_raw_input(&mut self) -> &mut Self {
        self.number.raw_input = None;
        self
    }

    pub fn set_country_code_source(&mut self, source: CountryCodeSource) -> &mut Self {
        self.number.country_code_source = Some(source);
        self
    }

    pub fn set_preferred_domestic_carrier_code(
        &mut self,
        carrier_code: impl Into<String>,
    ) -> &mut Self {
        self.number.preferred_domestic_carrier_code = Some(carrier_code.into());
        self
    }

    pub fn has_country_code(&self) -> bool {
        self.number.country_code.is_some()
    }

    pub fn country_code(&self) -> i32 {
        self.number.country_code()
    }

    /// Finishes a complete number. Fails when the country code is absent or
    /// non-positive, or when no national number has been set.
    pub fn build(&self) -> Result<PhoneNumber, IncompleteNumberError> {
        match self.number.country_code {
            Some(code) if code > 0 => {}
            _ => return Err(IncompleteNumberError::MissingCountryCode),
        }
        if self.number.national_number.is_none() {
            return Err(IncompleteNumberError::MissingNationalNumber);
        }
        Ok(self.number.clone())
    }

    /// Finishes a partial number: whatever fields are set, exactly as set.
    pub fn build_partial(&self) -> PhoneNumber {
        self.number.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_requires_country_code_and_national_number() {
        let mut builder = PhoneNumberBuilder::new();
        assert_eq!(
            Err(IncompleteNumberError::MissingCountryCode),
            builder.build()
        );

        builder.set_country_code(44);
        assert_eq!(
            Err(IncompleteNumberError::MissingNationalNumber),
            builder.build()
        );

        builder.set_national_number(2087654321);
        let number = builder.build().unwrap();
        assert_eq!(44, number.country_code());
        assert_eq!(2087654321, number.national_number());
    }

    #[test]
    fn zero_country_code_is_not_complete() {
        let mut builder = PhoneNumberBuilder::new();
        builder.set_country_code(0).set_national_number(12345);
        assert_eq!(
            Err(IncompleteNumberError::MissingCountryCode),
            builder.build()
        );
        // A partial build still hands the staged fields out.
        assert_eq!(0, builder.build_partial().country_code());
    }

    #[test]
    fn partial_build_keeps_presence_distinctions() {
        let mut builder = PhoneNumberBuilder::new();
        builder.set_raw_input("+1 650 253 00 00");
        let partial = builder.build_partial();
        assert!(partial.has_raw_input());
        assert!(!partial.has_country_code());
        assert!(!partial.has_country_code_source());
    }
}
