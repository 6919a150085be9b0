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

use crate::regexp_cache::InvalidRegexError;

/// The ways parsing free-form input can fail. All of these are returned as
/// typed values; parsing never panics on user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input had no extractable digits, or did not look like a phone
    /// number at all.
    #[error("Not a number")]
    NotANumber,
    /// No country calling code could be resolved and no usable default
    /// region was supplied.
    #[error("Invalid country code")]
    InvalidCountryCode,
    /// After stripping an international dialing prefix, too few digits were
    /// left to be a number plus calling code.
    #[error("Too short after IDD")]
    TooShortAfterIdd,
    /// The national significant number is shorter than any number in the
    /// numbering plan.
    #[error("Too short national significant number")]
    TooShortNsn,
    /// The number has more digits than any numbering-plan rule allows.
    #[error("Too long")]
    TooLong,
}

/// Parse-internal error type: either a real parse failure, or an invalid
/// regular expression encountered in the metadata. The latter never reaches
/// the public API — metadata patterns are trusted input, and a broken one
/// is a dataset bug, not a property of the number being parsed.
#[derive(Debug, Clone, PartialEq, Error)]
pub(crate) enum ParseErrorInternal {
    #[error("{0}")]
    FailedToParse(#[from] ParseError),
    #[error("{0}")]
    RegexError(#[from] InvalidRegexError),
}

impl ParseErrorInternal {
    pub fn into_public(self) -> ParseError {
        match self {
            ParseErrorInternal::FailedToParse(err) => err,
            ParseErrorInternal::RegexError(err) => panic!(
                "A valid regex is expected in metadata; this indicates a dataset bug! {}",
                err
            ),
        }
    }
}

/// Negative outcomes of testing a number's length against a region's
/// possible lengths. The positive outcomes are
/// [`super::enums::NumberLengthType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum LengthError {
    /// The number's calling code is served by no numbering plan in the
    /// registry, so there is nothing to test lengths against.
    #[error("no numbering plan covers this calling code")]
    InvalidCountryCode,
    /// Shorter than every valid number for the region.
    #[error("shorter than all valid numbers for this region")]
    TooShort,
    /// Between the region's shortest and longest lengths, but not a length
    /// any number of the requested type actually has.
    #[error("no number of this type has this length in this region")]
    InvalidLength,
    /// Longer than every valid number for the region.
    #[error("longer than all valid numbers for this region")]
    TooLong,
}
