use std::sync::Arc;

use dashmap::DashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
#[error("An error occurred while trying to create regex: {0}")]
pub struct InvalidRegexError(String);

impl From<regex::Error> for InvalidRegexError {
    fn from(err: regex::Error) -> Self {
        InvalidRegexError(err.to_string())
    }
}

/// A cache of compiled regular expressions keyed by their source pattern.
///
/// Metadata carries its rules as pattern strings, and the same handful of
/// patterns is matched over and over, so compiling on first use and sharing
/// the compiled form pays off. The map allows concurrent readers.
pub struct RegexCache {
    cache: DashMap<String, Arc<regex::Regex>>,
}

impl RegexCache {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: DashMap::with_capacity(capacity),
        }
    }

    pub fn get_regex(&self, pattern: &str) -> Result<Arc<regex::Regex>, InvalidRegexError> {
        if let Some(regex) = self.cache.get(pattern) {
            return Ok(regex.value().clone());
        }
        let entry = self
            .cache
            .entry(pattern.to_string())
            .or_try_insert_with(|| regex::Regex::new(pattern).map(Arc::new))?;
        Ok(entry.value().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::RegexCache;

    #[test]
    fn caches_compiled_patterns() {
        let cache = RegexCache::with_capacity(4);
        let first = cache.get_regex(r"\d{3}").unwrap();
        let second = cache.get_regex(r"\d{3}").unwrap();
        assert!(std::sync::Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        let cache = RegexCache::with_capacity(4);
        assert!(cache.get_regex(r"(unclosed").is_err());
    }
}
