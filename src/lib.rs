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

//! A metadata-driven engine for parsing, validating, classifying and
//! formatting international phone numbers.
//!
//! The engine itself carries no numbering-plan dataset: the host application
//! supplies a [`MetadataRegistry`] describing the regions it cares about
//! (one [`metadata::PhoneMetadata`] per region) and the engine turns
//! free-form input into canonical [`PhoneNumber`] values, classifies them,
//! and renders them in the standard display styles.
//!
//! ```
//! use dialplan::{MetadataRegistry, PhoneNumberFormat, PhoneNumberUtil};
//!
//! let registry = MetadataRegistry::new(dialplan::metadata::sample::sample_metadata());
//! let util = PhoneNumberUtil::new(registry);
//!
//! let number = util.parse("020 8765 4321", Some("GB")).unwrap();
//! assert_eq!("+442087654321", util.format(&number, PhoneNumberFormat::E164));
//! ```

mod engine;
mod interfaces;
mod regex_based_matcher;
mod regexp_cache;

pub mod i18n;
pub mod metadata;
pub mod phonenumber;

pub(crate) mod regex_util;

#[cfg(test)]
mod tests;

pub use engine::{
    AsYouTypeFormatter, LengthError, NumberLengthType, ParseError, PhoneNumberFormat,
    PhoneNumberType, PhoneNumberUtil,
};
pub use metadata::MetadataRegistry;
pub use phonenumber::{CountryCodeSource, PhoneNumber, PhoneNumberBuilder};
