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

use super::regexps::EngineRegexps;
use crate::interfaces::MatcherApi;
use crate::metadata::PhoneMetadata;
use crate::regex_util::RegexConsume;
use crate::regexp_cache::InvalidRegexError;

/// Reduces a nationally-dialed number down to its national significant
/// number by removing the national prefix and any carrier selection code,
/// applying the numbering plan's transform rule when it declares one.
#[derive(Clone)]
pub(crate) struct NationalNumberExtractor {
    reg_exps: Arc<EngineRegexps>,
    matcher: Arc<dyn MatcherApi>,
}

impl NationalNumberExtractor {
    pub fn new(reg_exps: Arc<EngineRegexps>, matcher: Arc<dyn MatcherApi>) -> Self {
        Self { reg_exps, matcher }
    }

    /// Strips the national prefix from the start of `number` in place, and
    /// returns the carrier code when one was dialed with it.
    ///
    /// When the plan declares a transform rule and its capture group took
    /// part in the match, the prefix is rewritten into the number rather
    /// than cut off (Argentina inserts a `9` this way). Either way the strip
    /// is rolled back if a number that matched the plan's general pattern
    /// would stop matching it — in that case the digits were part of the
    /// number itself, not a prefix.
    pub fn maybe_strip_national_prefix_and_carrier_code(
        &self,
        number: &mut String,
        metadata: &PhoneMetadata,
    ) -> Result<Option<String>, InvalidRegexError> {
        let possible_prefix = metadata.national_prefix_for_parsing();
        if number.is_empty() || possible_prefix.is_empty() {
            return Ok(None);
        }

        let prefix_regex = self.reg_exps.regexp_cache.get_regex(possible_prefix)?;
        let Some(captures) = prefix_regex.captures_start(number) else {
            return Ok(None);
        };

        let general_desc = &metadata.general_desc;
        let was_matching_before = self
            .matcher
            .match_national_number(number, general_desc, false);

        let group_count = captures.len() - 1;
        let transform_rule = metadata.national_prefix_transform_rule();
        let transform_applies = !transform_rule.is_empty()
            && group_count > 0
            && captures.get(group_count).is_some();

        let match_end = captures
            .get(0)
            .map(|whole| whole.end())
            .unwrap_or_default();

        if transform_applies {
            let mut transformed = String::with_capacity(number.len());
            captures.expand(transform_rule, &mut transformed);
            transformed.push_str(&number[match_end..]);
            if was_matching_before
                && !self
                    .matcher
                    .match_national_number(&transformed, general_desc, false)
            {
                return Ok(None);
            }
            trace!("transformed national prefix: {} -> {}", number, transformed);
            // With several groups the first one holds the carrier code.
            let carrier_code = if group_count > 1 {
                captures.get(1).map(|m| m.as_str().to_string())
            } else {
                None
            };
            *number = transformed;
            Ok(carrier_code)
        } else {
            let stripped = &number[match_end..];
            if was_matching_before
                && !self
                    .matcher
                    .match_national_number(stripped, general_desc, false)
            {
                return Ok(None);
            }
            trace!("stripped national prefix: {} -> {}", number, stripped);
            let carrier_code = if group_count > 0 {
                captures.get(1).map(|m| m.as_str().to_string())
            } else {
                None
            };
            *number = stripped.to_string();
            Ok(carrier_code)
        }
    }
}
