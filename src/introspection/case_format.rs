//! Case conversion for identifiers

use once_cell::sync::Lazy;
use regex::Regex;

/// Word separators: space, underscore and hyphen
static WORD_SEPARATOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ _-]").expect("valid separator regex"));

/// Converts a snake_case, kebab-case, space separated or PascalCase identifier to camelCase
///
/// Words are split on separators only: case boundaries inside a word are kept,
/// except that an all-caps word keeps nothing but its first letter upper-cased.
///
/// ```text
/// to_camel_case("two_words") == "twoWords"
/// to_camel_case("WORD")      == "word"
/// to_camel_case("miXedCAse") == "miXedCAse"
/// ```
pub fn to_camel_case(s: &str) -> String {
    extract_words(s)
        .iter()
        .enumerate()
        .map(|(i, word)| adjust_word_case(word, i > 0))
        .collect()
}

fn extract_words(s: &str) -> Vec<&str> {
    WORD_SEPARATOR_RE
        .split(s)
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .collect()
}

pub(crate) fn adjust_word_case(word: &str, first_letter_upper_cased: bool) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let trailing: String = chars.collect();

    let mut adjusted = String::with_capacity(word.len());
    if first_letter_upper_cased {
        adjusted.extend(first.to_uppercase());
    } else {
        adjusted.extend(first.to_lowercase());
    }
    if is_all_caps(word) {
        adjusted.push_str(&trailing.to_lowercase());
    } else {
        adjusted.push_str(&trailing);
    }
    adjusted
}

/// Every letter is upper case, non letters are ignored
pub(crate) fn is_all_caps(word: &str) -> bool {
    word.chars().filter(|c| c.is_alphabetic()).all(char::is_uppercase)
}
