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

use regex::{Captures, Match, Regex};

/// Whole-input matching. Metadata patterns are written unanchored, so the
/// span of the first match is checked against the input length instead of
/// rewriting every pattern with `^...$`.
pub trait RegexFullMatch {
    fn full_match(&self, s: &str) -> bool;
}

/// Matching anchored to the start of the input, in the style of scanner
/// "consume" operations: a match only counts when it begins at offset zero,
/// and the caller usually continues with the remainder.
pub trait RegexConsume {
    fn matches_start(&self, s: &str) -> bool {
        self.find_start(s).is_some()
    }

    fn find_start<'a>(&self, s: &'a str) -> Option<Match<'a>>;

    fn captures_start<'a>(&self, s: &'a str) -> Option<Captures<'a>>;

    /// Returns the remainder of `s` after a match at the start, if any.
    fn consume_start<'a>(&self, s: &'a str) -> Option<&'a str>;
}

impl RegexFullMatch for Regex {
    fn full_match(&self, s: &str) -> bool {
        match self.find(s) {
            Some(matched) => matched.start() == 0 && matched.end() == s.len(),
            None => false,
        }
    }
}

impl RegexConsume for Regex {
    fn find_start<'a>(&self, s: &'a str) -> Option<Match<'a>> {
        let found = self.find(s)?;
        if found.start() != 0 {
            return None;
        }
        Some(found)
    }

    fn captures_start<'a>(&self, s: &'a str) -> Option<Captures<'a>> {
        let captures = self.captures(s)?;
        if captures.get(0)?.start() != 0 {
            return None;
        }
        Some(captures)
    }

    fn consume_start<'a>(&self, s: &'a str) -> Option<&'a str> {
        self.find_start(s).map(|matched| &s[matched.end()..])
    }
}
