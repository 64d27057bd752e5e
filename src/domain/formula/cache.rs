//! Process-wide parse cache keyed by formula source string.
//!
//! Formulas are stored as free text and re-read on every page render;
//! caching the parse outcome (success or failure) means each distinct
//! source string is tokenized exactly once per process.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;

use super::ast::Expr;
use super::errors::ParseError;
use super::parser::parse;

type ParseOutcome = Result<Arc<Expr>, ParseError>;

static PARSE_CACHE: Lazy<RwLock<HashMap<String, ParseOutcome>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Parses a formula string, consulting the cache first.
///
/// Failed parses are cached too: a malformed formula stays malformed
/// until the admin edits it, so re-parsing on every aggregation pass
/// would only repeat the same failure.
pub fn parse_cached(source: &str) -> Result<Arc<Expr>, ParseError> {
    if let Ok(cache) = PARSE_CACHE.read() {
        if let Some(outcome) = cache.get(source) {
            return outcome.clone();
        }
    }

    let outcome: ParseOutcome = parse(source).map(Arc::new);
    // A poisoned lock degrades to parse-per-call; correctness is unaffected.
    if let Ok(mut cache) = PARSE_CACHE.write() {
        cache.insert(source.to_string(), outcome.clone());
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_parses_share_one_tree() {
        let first = parse_cached("cache_test_a + cache_test_b").unwrap();
        let second = parse_cached("cache_test_a + cache_test_b").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn failed_parses_are_cached() {
        let first = parse_cached("cache_test_bad +").unwrap_err();
        let second = parse_cached("cache_test_bad +").unwrap_err();
        assert_eq!(first, second);
    }

    #[test]
    fn distinct_sources_get_distinct_trees() {
        let a = parse_cached("cache_test_x * 2").unwrap();
        let b = parse_cached("cache_test_x * 3").unwrap();
        assert!(!Arc::ptr_eq(&a, &b));
    }
}
