//! Path expressions: `a.b.c`, `list[2]`, `key\.with\.dots`

use once_cell::sync::Lazy;
use regex::Regex;

const SEPARATOR: char = '.';
const ESCAPED_SEPARATOR: &str = "\\.";

/// `name[1][2]`: a segment name followed by one or more indexes
static INDEXED_SEGMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<name>.*?)(?P<indexes>(?:\[\d+\])+)$").expect("valid indexed segment regex"));

static INDEX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(\d+)\]").expect("valid index regex"));

/// A path segment with its trailing `[n]` indexes split off
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub name: String,
    pub indexes: Vec<usize>,
}

/// Whether the path has an unescaped separator that is neither leading nor trailing
///
/// ```text
/// is_nested("address.street") == true
/// is_nested(".name")          == false
/// is_nested("person.")        == false
/// is_nested("a\.b")           == false
/// is_nested("a.b\.")          == true
/// ```
pub fn is_nested(path: &str) -> bool {
    first_separator(path).is_some_and(|at| at > 0) && !ends_with_unescaped_separator(path)
}

/// Splits a nested path on its first unescaped separator, `None` for a simple path
pub fn split_nested(path: &str) -> Option<(&str, &str)> {
    if !is_nested(path) {
        return None;
    }
    first_separator(path).map(|at| (&path[..at], &path[at + 1..]))
}

/// Replaces `\.` with `.`
pub fn unescape(segment: &str) -> String {
    segment.replace(ESCAPED_SEPARATOR, ".")
}

/// Splits `name[1][2]` into the unescaped name and its indexes
///
/// An index too large for `usize` leaves the segment unparsed, the whole text becoming the name.
pub fn parse_segment(segment: &str) -> Segment {
    let parsed = INDEXED_SEGMENT_RE.captures(segment).and_then(|caps| {
        let name = caps.name("name")?.as_str();
        let indexes = caps.name("indexes")?.as_str();
        let indexes = INDEX_RE
            .captures_iter(indexes)
            .map(|index| index[1].parse::<usize>().ok())
            .collect::<Option<Vec<_>>>()?;
        Some(Segment {
            name: unescape(name),
            indexes,
        })
    });

    parsed.unwrap_or_else(|| Segment {
        name: unescape(segment),
        indexes: Vec::new(),
    })
}

fn first_separator(path: &str) -> Option<usize> {
    let bytes = path.as_bytes();
    let mut escaped = false;
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'\\' if !escaped => escaped = true,
            b'.' if !escaped => return Some(i),
            _ => escaped = false,
        }
    }
    None
}

fn ends_with_unescaped_separator(path: &str) -> bool {
    let mut escaped = false;
    let mut trailing = false;
    for &b in path.as_bytes() {
        trailing = false;
        match b {
            b'\\' if !escaped => escaped = true,
            b'.' if !escaped => trailing = true,
            _ => escaped = false,
        }
    }
    trailing
}
