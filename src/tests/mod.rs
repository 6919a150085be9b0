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

mod region_code;

mod format_tests;
mod parse_tests;

use std::sync::Once;

use crate::metadata::sample::sample_metadata;
use crate::{MetadataRegistry, PhoneNumberUtil};

static INIT_LOGGER: Once = Once::new();

/// An engine over the sample dataset, with logging wired up once so failing
/// tests show the engine's trace output.
pub(crate) fn get_phone_util() -> PhoneNumberUtil {
    INIT_LOGGER.call_once(colog::init);
    PhoneNumberUtil::new(MetadataRegistry::new(sample_metadata()))
}
