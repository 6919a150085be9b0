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
use strum::IntoEnumIterator;

use super::enums::{NumberLengthType, PhoneNumberType};
use super::errors::LengthError;
use crate::interfaces::MatcherApi;
use crate::metadata::{PhoneMetadata, PhoneNumberDesc};

/// Returns the description block of a numbering plan that covers numbers of
/// the given type. `Unknown` and `FixedLineOrMobile` get the general
/// description; callers needing the merged fixed-line/mobile behavior handle
/// that type before calling here.
pub(crate) fn number_desc_by_type<'a>(
    metadata: &'a PhoneMetadata,
    number_type: PhoneNumberType,
) -> &'a PhoneNumberDesc {
    match number_type {
        PhoneNumberType::FixedLine => &metadata.fixed_line,
        PhoneNumberType::Mobile => &metadata.mobile,
        PhoneNumberType::TollFree => &metadata.toll_free,
        PhoneNumberType::PremiumRate => &metadata.premium_rate,
        PhoneNumberType::SharedCost => &metadata.shared_cost,
        PhoneNumberType::VoIP => &metadata.voip,
        PhoneNumberType::PersonalNumber => &metadata.personal_number,
        PhoneNumberType::Pager => &metadata.pager,
        PhoneNumberType::UAN => &metadata.uan,
        PhoneNumberType::VoiceMail => &metadata.voicemail,
        PhoneNumberType::FixedLineOrMobile | PhoneNumberType::Unknown => &metadata.general_desc,
    }
}

fn desc_has_data(desc: &PhoneNumberDesc) -> bool {
    desc.national_number_pattern.is_some() || desc.has_possible_number_data()
}

/// Every number type a numbering plan assigns at least one range to.
pub(crate) fn supported_types_for_metadata(metadata: &PhoneMetadata) -> Vec<PhoneNumberType> {
    PhoneNumberType::iter()
        .filter(|number_type| {
            !matches!(
                number_type,
                PhoneNumberType::FixedLineOrMobile | PhoneNumberType::Unknown
            )
        })
        .filter(|number_type| desc_has_data(number_desc_by_type(metadata, *number_type)))
        .collect()
}

/// Decides what kind of number a national significant number is, and whether
/// it is valid at all, by matching it against a numbering plan's per-type
/// ranges.
#[derive(Clone)]
pub(crate) struct Classifier {
    matcher: Arc<dyn MatcherApi>,
}

impl Classifier {
    pub fn new(matcher: Arc<dyn MatcherApi>) -> Self {
        Self { matcher }
    }

    /// A number matches a description when its length is one the
    /// description declares possible and its digits match the pattern. An
    /// empty possible-length list defers entirely to the pattern.
    pub fn is_number_matching_desc(
        &self,
        national_number: &str,
        desc: &PhoneNumberDesc,
    ) -> bool {
        let actual_length = national_number.len() as i32;
        if !desc.possible_length.is_empty() && !desc.possible_length.contains(&actual_length) {
            return false;
        }
        self.matcher
            .match_national_number(national_number, desc, false)
    }

    /// Structural validity: the number has a possible length for the plan
    /// and matches the plan's general pattern. A number can be valid while
    /// its type stays [`PhoneNumberType::Unknown`] — validity is about the
    /// plan's overall shape, not type assignment.
    pub fn is_structurally_valid(&self, national_number: &str, metadata: &PhoneMetadata) -> bool {
        if self.test_number_length_with_unknown_type(national_number, metadata)
            != Ok(NumberLengthType::IsPossible)
        {
            // Local-only lengths parse and count as possible, but a number
            // missing its area code is not valid.
            return false;
        }
        self.matcher
            .match_national_number(national_number, &metadata.general_desc, false)
    }

    /// Classifies a national significant number. Special-service ranges win
    /// over the fixed-line and mobile ranges, which are checked last; where
    /// the two are indistinguishable the merged type is returned.
    pub fn number_type(
        &self,
        national_number: &str,
        metadata: &PhoneMetadata,
    ) -> PhoneNumberType {
        if !self.is_number_matching_desc(national_number, &metadata.general_desc) {
            trace!("number does not match the plan's general pattern");
            return PhoneNumberType::Unknown;
        }

        if self.is_number_matching_desc(national_number, &metadata.premium_rate) {
            return PhoneNumberType::PremiumRate;
        }
        if self.is_number_matching_desc(national_number, &metadata.toll_free) {
            return PhoneNumberType::TollFree;
        }
        if self.is_number_matching_desc(national_number, &metadata.shared_cost) {
            return PhoneNumberType::SharedCost;
        }
        if self.is_number_matching_desc(national_number, &metadata.voip) {
            return PhoneNumberType::VoIP;
        }
        if self.is_number_matching_desc(national_number, &metadata.personal_number) {
            return PhoneNumberType::PersonalNumber;
        }
        if self.is_number_matching_desc(national_number, &metadata.pager) {
            return PhoneNumberType::Pager;
        }
        if self.is_number_matching_desc(national_number, &metadata.uan) {
            return PhoneNumberType::UAN;
        }
        if self.is_number_matching_desc(national_number, &metadata.voicemail) {
            return PhoneNumberType::VoiceMail;
        }

        if self.is_number_matching_desc(national_number, &metadata.fixed_line) {
            if metadata.same_mobile_and_fixed_line_pattern {
                trace!("fixed-line and mobile patterns are declared identical");
                return PhoneNumberType::FixedLineOrMobile;
            }
            if self.is_number_matching_desc(national_number, &metadata.mobile) {
                return PhoneNumberType::FixedLineOrMobile;
            }
            return PhoneNumberType::FixedLine;
        }
        if !metadata.same_mobile_and_fixed_line_pattern
            && self.is_number_matching_desc(national_number, &metadata.mobile)
        {
            return PhoneNumberType::Mobile;
        }

        trace!("number matches the general pattern but no type range");
        PhoneNumberType::Unknown
    }

    /// Checks the number's digit count against the lengths the plan declares
    /// possible for the given type, without touching any pattern.
    ///
    /// For `FixedLineOrMobile` the fixed-line and mobile length sets are
    /// merged; a plan with no fixed-line data (some non-geographic plans)
    /// falls back to the mobile lengths alone.
    pub fn test_number_length(
        &self,
        number: &str,
        metadata: &PhoneMetadata,
        number_type: PhoneNumberType,
    ) -> Result<NumberLengthType, LengthError> {
        let desc = number_desc_by_type(metadata, number_type);

        // Types without declared lengths inherit the plan-wide ones.
        let mut possible_lengths = if desc.possible_length.is_empty() {
            metadata.general_desc.possible_length.clone()
        } else {
            desc.possible_length.clone()
        };
        let mut local_lengths = desc.possible_length_local_only.clone();

        if number_type == PhoneNumberType::FixedLineOrMobile {
            if !desc_has_data(&metadata.fixed_line) {
                return self.test_number_length(number, metadata, PhoneNumberType::Mobile);
            }
            let fixed = &metadata.fixed_line;
            possible_lengths = if fixed.possible_length.is_empty() {
                metadata.general_desc.possible_length.clone()
            } else {
                fixed.possible_length.clone()
            };
            local_lengths = fixed.possible_length_local_only.clone();
            if desc_has_data(&metadata.mobile) {
                let mobile = &metadata.mobile;
                let mobile_lengths = if mobile.possible_length.is_empty() {
                    &metadata.general_desc.possible_length
                } else {
                    &mobile.possible_length
                };
                possible_lengths.extend_from_slice(mobile_lengths);
                possible_lengths.sort_unstable();
                possible_lengths.dedup();
                local_lengths.extend_from_slice(&mobile.possible_length_local_only);
                local_lengths.sort_unstable();
                local_lengths.dedup();
            }
        }

        // A single sentinel -1 means the plan has no numbers of this type.
        if possible_lengths.first() == Some(&-1) {
            return Err(LengthError::InvalidLength);
        }

        let actual_length = number.len() as i32;
        if local_lengths.contains(&actual_length) {
            return Ok(NumberLengthType::IsPossibleLocalOnly);
        }

        let Some(&minimum_length) = possible_lengths.first() else {
            return Err(LengthError::InvalidLength);
        };
        if minimum_length == actual_length {
            return Ok(NumberLengthType::IsPossible);
        }
        if minimum_length > actual_length {
            return Err(LengthError::TooShort);
        }
        if possible_lengths.last() < Some(&actual_length) {
            return Err(LengthError::TooLong);
        }
        if possible_lengths[1..].contains(&actual_length) {
            Ok(NumberLengthType::IsPossible)
        } else {
            Err(LengthError::InvalidLength)
        }
    }

    /// Length check against every number the plan covers, regardless of
    /// type.
    pub fn test_number_length_with_unknown_type(
        &self,
        number: &str,
        metadata: &PhoneMetadata,
    ) -> Result<NumberLengthType, LengthError> {
        self.test_number_length(number, metadata, PhoneNumberType::Unknown)
    }
}
