//! Field name normalization
//!
//! Used to match fields whose names follow different conventions, e.g. a
//! `first_name` field against a `firstName` one.

use super::case_format::{adjust_word_case, to_camel_case};

/// Maps a field name to the canonical form used for matching
pub trait NormalizeStrategy: Send + Sync {
    fn normalize(&self, name: &str) -> String;

    /// Shown in error messages
    fn description(&self) -> &str;
}

/// Strips one leading underscore, then converts to camelCase with acronym handling,
/// see [`normalize`]
#[derive(Debug, Clone, Copy, Default)]
pub struct CamelCaseNormalization;

impl NormalizeStrategy for CamelCaseNormalization {
    fn normalize(&self, name: &str) -> String {
        normalize(name)
    }

    fn description(&self) -> &str {
        "comparing camel case normalized fields"
    }
}

/// Plain [`to_camel_case`]: snake_case and camelCase names match, case inside words is kept
#[derive(Debug, Clone, Copy, Default)]
pub struct SnakeOrCamelCase;

impl NormalizeStrategy for SnakeOrCamelCase {
    fn normalize(&self, name: &str) -> String {
        to_camel_case(name)
    }

    fn description(&self) -> &str {
        "comparing snake or camel case fields"
    }
}

/// Normalizes an identifier to camelCase
///
/// A single leading `_` is dropped. Words are split on `[ _-]` and on case
/// boundaries; an acronym run is lower-cased except for the letter starting
/// the word, so trailing and leading acronyms read like regular words.
///
/// ```text
/// normalize("_address_3")  == "address3"
/// normalize("profileURL")  == "profileUrl"
/// normalize("XMLParser")   == "xmlParser"
/// normalize("first_name")  == "firstName"
/// ```
pub fn normalize(name: &str) -> String {
    let name = name.strip_prefix('_').unwrap_or(name);
    name.split([' ', '_', '-'])
        .flat_map(split_case_boundaries)
        .enumerate()
        .map(|(i, word)| adjust_word_case(&word, i > 0))
        .collect()
}

/// Splits a separator-free chunk where a new word starts:
/// an upper case letter after a lower case letter or digit, or the last
/// upper case letter of a run followed by a lower case letter.
fn split_case_boundaries(chunk: &str) -> Vec<String> {
    let chars: Vec<char> = chunk.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c.is_uppercase() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let starts_word = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if starts_word && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}
