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

use strum::EnumIter;

/// The standardized display styles for phone numbers.
///
/// `International` and `National` follow the ITU-T E.123 recommendation with
/// region-local separator conventions. For a Swiss number:
/// - **International**: `+41 44 668 1800`
/// - **National**: `044 668 1800`
/// - **E164**: `+41446681800`
/// - **Rfc3966**: `tel:+41-44-668-1800`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneNumberFormat {
    /// `+` followed by calling code and national number, no separators.
    /// The canonical comparable form; extensions are not rendered.
    E164,
    /// Calling code and nationally-formatted number, space separated.
    International,
    /// The form dialed within the number's own country, including any
    /// national prefix.
    National,
    /// The `tel:` URI form with hyphen separators and `;ext=` extensions,
    /// used for out-of-country links.
    Rfc3966,
}

/// Categorizes phone numbers by their primary use.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneNumberType {
    /// Traditional landline numbers tied to a geographic location.
    FixedLine,
    /// Numbers assigned to wireless devices.
    Mobile,
    /// Used where the numbering plan makes fixed-line and mobile ranges
    /// indistinguishable (e.g. the USA).
    FixedLineOrMobile,
    /// Free for the caller; the recipient pays.
    TollFree,
    /// Charged above normal rates.
    PremiumRate,
    /// Call cost split between caller and recipient.
    SharedCost,
    /// Voice-over-IP service numbers.
    VoIP,
    /// A number tied to a person rather than a line, routed as configured.
    PersonalNumber,
    /// Paging devices.
    Pager,
    /// Universal Access Numbers — one company number routed internally.
    UAN,
    /// Direct voicemail access numbers.
    VoiceMail,
    /// The number matches no known pattern for its region.
    Unknown,
}

/// The positive outcomes of checking a number's length against a region's
/// possible lengths. The negative outcomes are [`super::errors::LengthError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberLengthType {
    /// The length matches a complete, dialable number for the region.
    IsPossible,
    /// The length only matches a number dialable within a local area, e.g.
    /// a US number typed without its area code.
    IsPossibleLocalOnly,
}
