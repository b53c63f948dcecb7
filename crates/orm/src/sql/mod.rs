//! SQL text helpers shared by dialect providers

use std::collections::HashMap;
use std::sync::RwLock;
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex, RegexBuilder};

use crate::backends::SqlDialect;

/// Compiled case-insensitive literal patterns, keyed by the literal
static PATTERN_CACHE: Lazy<RwLock<HashMap<String, Regex>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Escape SQL identifier for safe use in queries
pub fn escape_identifier(identifier: &str, dialect: &SqlDialect) -> String {
    let quote_char = dialect.identifier_quote();
    format!(
        "{}{}{}",
        quote_char,
        identifier.replace(quote_char, &format!("{}{}", quote_char, quote_char)),
        quote_char
    )
}

/// Replace every occurrence of the literal `from`, matched case-insensitively,
/// with the literal `to`. Text outside the matches is left untouched.
pub fn replace_case(text: &str, from: &str, to: &str) -> String {
    if from.is_empty() {
        return text.to_string();
    }

    match case_insensitive_pattern(from) {
        Ok(pattern) => pattern.replace_all(text, NoExpand(to)).into_owned(),
        Err(e) => {
            tracing::warn!("Cannot build case-insensitive pattern for '{}': {}", from, e);
            text.to_string()
        }
    }
}

fn case_insensitive_pattern(literal: &str) -> Result<Regex, regex::Error> {
    if let Ok(cache) = PATTERN_CACHE.read() {
        if let Some(cached) = cache.get(literal) {
            return Ok(cached.clone());
        }
    }

    let pattern = RegexBuilder::new(&regex::escape(literal))
        .case_insensitive(true)
        .build()?;

    if let Ok(mut cache) = PATTERN_CACHE.write() {
        cache.insert(literal.to_string(), pattern.clone());
    }

    Ok(pattern)
}
